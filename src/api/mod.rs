use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::config::Config;
use crate::models::Coach;

mod error;

pub use error::ApiError;

/// Response envelope used by the WeCare backend
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// The backend answers either with a bare payload or with an
/// `ApiResponse` envelope; one discriminant check unwraps both
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiPayload<T> {
    Wrapped(ApiResponse<T>),
    Bare(T),
}

impl<T> ApiPayload<T> {
    pub fn into_data(self) -> T {
        match self {
            ApiPayload::Wrapped(envelope) => envelope.data,
            ApiPayload::Bare(data) => data,
        }
    }
}

/// Client for the coaches resource.
///
/// Retrieval never surfaces an error to callers: every failure at the
/// transport or parsing boundary degrades to the injected fallback
/// value (full roster, absent coach, or empty list per operation).
/// Every call re-issues the request; nothing is cached.
pub struct CoachService {
    client: Client,
    coaches_url: String,
    fallback: Vec<Coach>,
}

impl CoachService {
    /// Create a new service with the standard fallback roster
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_fallback(config, Coach::fallback_roster())
    }

    /// Create a new service with a custom fallback roster
    pub fn with_fallback(config: &Config, fallback: Vec<Coach>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            coaches_url: config.coaches_url(),
            fallback,
        })
    }

    /// Get all available coaches, or the fallback roster on failure
    pub async fn get_coaches(&self) -> Vec<Coach> {
        match self.fetch(self.client.get(&self.coaches_url)).await {
            Ok(coaches) => coaches,
            Err(e) => {
                tracing::warn!("Error fetching coaches, using fallback roster: {:#}", e);
                self.fallback.clone()
            }
        }
    }

    /// Get a coach by id, or None on failure
    pub async fn get_coach_by_id(&self, id: &str) -> Option<Coach> {
        let url = format!("{}/{}", self.coaches_url, id);

        match self.fetch(self.client.get(&url)).await {
            Ok(coach) => Some(coach),
            Err(e) => {
                tracing::warn!("Error fetching coach {}: {:#}", id, e);
                None
            }
        }
    }

    /// Get coaches filtered by specialty, or an empty list on failure
    pub async fn get_coaches_by_specialty(&self, specialty: &str) -> Vec<Coach> {
        let request = self
            .client
            .get(&self.coaches_url)
            .query(&[("specialty", specialty)]);

        match self.fetch(request).await {
            Ok(coaches) => coaches,
            Err(e) => {
                tracing::warn!(
                    "Error fetching coaches by specialty {}: {:#}",
                    specialty,
                    e
                );
                Vec::new()
            }
        }
    }

    /// Issue one GET and unwrap the envelope-or-bare payload
    async fn fetch<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request.send().await.context("Failed to send request")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, text).into());
        }

        let payload: ApiPayload<T> = response
            .json()
            .await
            .context("Failed to parse response body")?;

        Ok(payload.into_data())
    }
}
