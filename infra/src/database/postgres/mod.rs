//! PostgreSQL implementations of the core repository traits.

mod contact_repository;
mod user_repository;

pub use contact_repository::PgContactRepository;
pub use user_repository::PgUserRepository;

/// Whether a sqlx error is a unique-constraint violation
///
/// Postgres error code 23505. Repositories translate this to
/// `DomainError::Conflict` so a constraint-level rejection and an
/// optimistic pre-check rejection look identical to callers.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505")
    )
}
