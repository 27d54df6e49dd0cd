//! Media hosting provider client
//!
//! Editorial videos are uploaded by the browser directly to the hosting
//! provider. The backend's job is to sign upload tickets (it alone holds
//! the provider secret), confirm uploads, and destroy assets.

use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::{
    config::MediaConfig,
    constants::{MEDIA_EDITORIAL_FOLDER, MEDIA_PUBLIC_ID_NONCE_LENGTH},
    error::{AppError, AppResult},
    utils::crypto,
};

/// A short-lived, provider-scoped upload authorization.
///
/// Valid only for the embedded public id and for the provider's signature
/// window around `timestamp`; the client never sees the API secret.
#[derive(Debug, Clone, Serialize)]
pub struct UploadTicket {
    pub signature: String,
    pub timestamp: i64,
    pub public_id: String,
    pub api_key: String,
    pub cloud_name: String,
    pub upload_url: String,
}

/// HTTP client for the media hosting provider
#[derive(Debug, Clone)]
pub struct MediaClient {
    client: Client,
    base_url: String,
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

impl MediaClient {
    pub fn new(config: &MediaConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build media HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            cloud_name: config.cloud_name.clone(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
        })
    }

    /// Issue a signed upload ticket for an editorial video asset
    pub fn create_upload_ticket(&self, problem_id: &uuid::Uuid) -> UploadTicket {
        let nonce = crypto::generate_secure_token(MEDIA_PUBLIC_ID_NONCE_LENGTH);
        let public_id = format!("{}/{}_{}", MEDIA_EDITORIAL_FOLDER, problem_id, nonce);
        let timestamp = Utc::now().timestamp();

        UploadTicket {
            signature: self.signature_for(&public_id, timestamp),
            timestamp,
            public_id,
            api_key: self.api_key.clone(),
            cloud_name: self.cloud_name.clone(),
            upload_url: format!("{}/v1_1/{}/video/upload", self.base_url, self.cloud_name),
        }
    }

    /// Provider request signature: sorted params concatenated with the secret
    fn signature_for(&self, public_id: &str, timestamp: i64) -> String {
        let to_sign = format!("public_id={}&timestamp={}{}", public_id, timestamp, self.api_secret);
        crypto::hash_string(&to_sign)
    }

    /// Check whether an uploaded video asset exists at the provider
    pub async fn video_exists(&self, public_id: &str) -> AppResult<bool> {
        let url = format!(
            "{}/v1_1/{}/resources/video/upload/{}",
            self.base_url, self.cloud_name, public_id
        );

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.api_key, Some(&self.api_secret))
            .send()
            .await
            .map_err(|e| AppError::Media(format!("asset lookup failed: {}", e)))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            s if s.is_success() => Ok(true),
            s => Err(AppError::Media(format!("asset lookup returned {}", s))),
        }
    }

    /// Destroy a video asset at the provider. Returns false when the
    /// provider reports the asset as already gone.
    pub async fn destroy_video(&self, public_id: &str) -> AppResult<bool> {
        let url = format!("{}/v1_1/{}/video/destroy", self.base_url, self.cloud_name);
        let timestamp = Utc::now().timestamp();

        let body = DestroyRequest {
            public_id,
            timestamp,
            api_key: &self.api_key,
            signature: self.signature_for(public_id, timestamp),
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Media(format!("asset destroy failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Media(format!(
                "asset destroy returned {}",
                response.status()
            )));
        }

        let outcome: DestroyResponse = response
            .json()
            .await
            .map_err(|e| AppError::Media(format!("malformed destroy response: {}", e)))?;

        match outcome.result.as_str() {
            "ok" => Ok(true),
            "not found" => Ok(false),
            other => Err(AppError::Media(format!("asset destroy result: {}", other))),
        }
    }
}

#[derive(Serialize)]
struct DestroyRequest<'a> {
    public_id: &'a str,
    timestamp: i64,
    api_key: &'a str,
    signature: String,
}

#[derive(Deserialize)]
struct DestroyResponse {
    result: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MediaConfig;

    fn test_client() -> MediaClient {
        MediaClient::new(&MediaConfig {
            base_url: "https://media.example.com".to_string(),
            cloud_name: "demo".to_string(),
            api_key: "key123".to_string(),
            api_secret: "s3cret".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_signature_is_deterministic_and_secret_bound() {
        let client = test_client();
        let a = client.signature_for("editorials/p1_abc", 1700000000);
        let b = client.signature_for("editorials/p1_abc", 1700000000);
        assert_eq!(a, b);

        // Different target or window must produce a different signature
        assert_ne!(a, client.signature_for("editorials/p2_abc", 1700000000));
        assert_ne!(a, client.signature_for("editorials/p1_abc", 1700000001));
    }

    #[test]
    fn test_ticket_shape() {
        let client = test_client();
        let problem_id = uuid::Uuid::new_v4();
        let ticket = client.create_upload_ticket(&problem_id);

        assert!(ticket.public_id.starts_with(&format!("editorials/{}_", problem_id)));
        assert_eq!(ticket.upload_url, "https://media.example.com/v1_1/demo/video/upload");
        assert_eq!(ticket.signature, client.signature_for(&ticket.public_id, ticket.timestamp));
        // The secret itself never leaves the backend
        assert!(!ticket.signature.contains("s3cret"));
    }
}
