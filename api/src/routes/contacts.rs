//! Contact endpoints: CRUD, search and upcoming birthdays.
//!
//! Every handler runs behind `RequireAuth` and threads the authenticated
//! account's id into the contact service as the owner scope.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use ch_core::repositories::{ContactRepository, UserRepository};
use ch_core::services::user::AvatarProvider;

use crate::app::AppState;
use crate::dto::{ContactRequest, ContactResponse, ContactSearchQuery, ContactUpdateRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::CurrentUser;

/// Handler for GET /api/v1/contacts
///
/// Case-insensitive substring search; multiple given filter fields are
/// OR-combined. `skip` and `limit` paginate, with `limit` clamped to
/// [1, 100] (default 10).
pub async fn search_contacts<U, C, A>(
    state: web::Data<AppState<U, C, A>>,
    user: CurrentUser,
    query: web::Query<ContactSearchQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: ContactRepository + 'static,
    A: AvatarProvider + 'static,
{
    let (filter, page) = query.into_inner().into_parts();

    match state
        .contact_service
        .search_contacts(user.id(), filter, page)
        .await
    {
        Ok(contacts) => HttpResponse::Ok().json(
            contacts
                .into_iter()
                .map(ContactResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/contacts/birthdays
///
/// Contacts whose birthday falls within the next seven days (today
/// inclusive), ignoring the birth year.
pub async fn upcoming_birthdays<U, C, A>(
    state: web::Data<AppState<U, C, A>>,
    user: CurrentUser,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: ContactRepository + 'static,
    A: AvatarProvider + 'static,
{
    match state.contact_service.get_upcoming_birthdays(user.id()).await {
        Ok(contacts) => HttpResponse::Ok().json(
            contacts
                .into_iter()
                .map(ContactResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/contacts/{id}
pub async fn get_contact<U, C, A>(
    state: web::Data<AppState<U, C, A>>,
    user: CurrentUser,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: ContactRepository + 'static,
    A: AvatarProvider + 'static,
{
    match state
        .contact_service
        .get_contact_by_id(user.id(), path.into_inner())
        .await
    {
        Ok(Some(contact)) => HttpResponse::Ok().json(ContactResponse::from(contact)),
        Ok(None) => contact_not_found(),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/contacts
///
/// # Responses
/// - 201: the created contact
/// - 409: a contact with that email already exists
/// - 500: other storage failure
pub async fn create_contact<U, C, A>(
    state: web::Data<AppState<U, C, A>>,
    user: CurrentUser,
    body: web::Json<ContactRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: ContactRepository + 'static,
    A: AvatarProvider + 'static,
{
    if let Err(errors) = body.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .contact_service
        .create_contact(user.id(), body.into_inner().into())
        .await
    {
        Ok(contact) => HttpResponse::Created().json(ContactResponse::from(contact)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PATCH /api/v1/contacts/{id}
///
/// Applies only the fields present in the body; a missing contact is 404,
/// not an error.
pub async fn update_contact<U, C, A>(
    state: web::Data<AppState<U, C, A>>,
    user: CurrentUser,
    path: web::Path<Uuid>,
    body: web::Json<ContactUpdateRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: ContactRepository + 'static,
    A: AvatarProvider + 'static,
{
    if let Err(errors) = body.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .contact_service
        .update_contact(user.id(), path.into_inner(), body.into_inner().into())
        .await
    {
        Ok(Some(contact)) => HttpResponse::Ok().json(ContactResponse::from(contact)),
        Ok(None) => contact_not_found(),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/contacts/{id}
///
/// Returns the deleted contact.
pub async fn delete_contact<U, C, A>(
    state: web::Data<AppState<U, C, A>>,
    user: CurrentUser,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: ContactRepository + 'static,
    A: AvatarProvider + 'static,
{
    match state
        .contact_service
        .delete_contact(user.id(), path.into_inner())
        .await
    {
        Ok(Some(contact)) => HttpResponse::Ok().json(ContactResponse::from(contact)),
        Ok(None) => contact_not_found(),
        Err(error) => handle_domain_error(error),
    }
}

fn contact_not_found() -> HttpResponse {
    handle_domain_error(ch_core::errors::DomainError::not_found("contact"))
}
