//! Recommendation API client
//!
//! This service wraps the backend recommendation endpoint, including HTTP
//! client setup, response parsing and error classification. The chat treats
//! every failure as recoverable: non-2xx responses surface as "no matches",
//! transport and parse failures as a generic retry prompt.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::models::{Preferences, RecommendRequest, RecommendResponse};
use crate::utils::errors::{ApiError, BudBuddyError, Result};

/// Client for `POST /api/recommend`
#[derive(Debug, Clone)]
pub struct RecommendService {
    client: Client,
    base_url: String,
}

impl RecommendService {
    /// Create a new RecommendService instance
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("BudBuddy/1.0")
            .build()
            .map_err(BudBuddyError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Ask the backend for strain recommendations matching the preference bag.
    pub async fn recommend(&self, preferences: &Preferences) -> Result<RecommendResponse> {
        let url = format!("{}/api/recommend", self.base_url);
        debug!(url = %url, preferences = ?preferences, "Requesting recommendations");

        let response = self.client
            .post(&url)
            .json(&RecommendRequest { preferences: preferences.clone() })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BudBuddyError::Api(ApiError::Timeout)
                } else if e.is_connect() {
                    BudBuddyError::Api(ApiError::ServiceUnavailable)
                } else {
                    BudBuddyError::Api(ApiError::RequestFailed(e.to_string()))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %error_text, "Recommendation request returned non-2xx");
            return Err(BudBuddyError::Api(ApiError::NoMatches(status.as_u16())));
        }

        let body: RecommendResponse = response.json().await
            .map_err(|e| BudBuddyError::Api(ApiError::InvalidResponse(e.to_string())))?;

        debug!(count = body.recommendations.len(), "Recommendations received");
        Ok(body)
    }

    /// Base URL the service was configured with
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecommendResponse;

    fn test_config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            timeout_seconds: 2,
        }
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let service = RecommendService::new(&test_config("http://localhost:5000/")).unwrap();
        assert_eq!(service.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "recommendations": [{
                "name": "Blue Dream",
                "type": "Hybrid",
                "thc_content": "17-24%",
                "cbd_content": "0.1%",
                "effects": ["Relaxed"],
                "flavors": ["Berry"],
                "description": "Balanced."
            }],
            "description": "Picked for a mellow evening."
        }"#;

        let response: RecommendResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.recommendations.len(), 1);
        assert_eq!(response.description.as_deref(), Some("Picked for a mellow evening."));
    }

    #[test]
    fn test_response_without_description() {
        let json = r#"{"recommendations": []}"#;
        let response: RecommendResponse = serde_json::from_str(json).unwrap();
        assert!(response.recommendations.is_empty());
        assert!(response.description.is_none());
    }

    #[tokio::test]
    async fn test_connect_failure_maps_to_api_error() {
        use assert_matches::assert_matches;

        // Nothing listens on port 1
        let service = RecommendService::new(&test_config("http://127.0.0.1:1")).unwrap();
        let err = service.recommend(&Preferences::default()).await.unwrap_err();
        assert_matches!(
            err,
            BudBuddyError::Api(ApiError::ServiceUnavailable) | BudBuddyError::Api(ApiError::RequestFailed(_))
        );
    }
}
