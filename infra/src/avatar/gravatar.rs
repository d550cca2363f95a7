//! Gravatar client implementing the AvatarProvider seam.

use std::time::Duration;

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use ch_core::services::user::{AvatarError, AvatarProvider};

const GRAVATAR_BASE_URL: &str = "https://www.gravatar.com/avatar";

/// Avatar provider backed by gravatar.com
///
/// The address is hashed (SHA-256 of the trimmed, lowercased email) and the
/// image URL is probed with `d=404` so an unknown address reports "no
/// avatar" instead of Gravatar's generated placeholder.
pub struct GravatarProvider {
    client: reqwest::Client,
    base_url: String,
}

impl GravatarProvider {
    /// Create a provider against gravatar.com
    pub fn new() -> Self {
        Self::with_base_url(GRAVATAR_BASE_URL)
    }

    /// Create a provider against a custom base URL (tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Gravatar address hash: SHA-256 over the normalized email
    fn email_hash(email: &str) -> String {
        let normalized = email.trim().to_lowercase();
        let mut hasher = Sha256::new();
        hasher.update(normalized.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

impl Default for GravatarProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AvatarProvider for GravatarProvider {
    async fn avatar_url(&self, email: &str) -> Result<Option<String>, AvatarError> {
        let url = format!("{}/{}", self.base_url, Self::email_hash(email));

        let response = self
            .client
            .get(&url)
            .query(&[("d", "404")])
            .send()
            .await
            .map_err(|e| AvatarError(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if response.status().is_success() {
            Ok(Some(url))
        } else {
            Err(AvatarError(format!(
                "unexpected status {}",
                response.status()
            )))
        }
    }
}
