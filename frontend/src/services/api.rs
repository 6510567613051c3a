use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{AppConfig, CreateFeeStructureRequest, FeeRecord, FeeStructureSummary, PaymentRequest, User};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

/// API client for the school management backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    config: AppConfig,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    async fn expect_ok(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::Status { status, body })
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::expect_ok(response)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_json<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::expect_ok(response).await.map(|_| ())
    }

    /// Fetch a user's profile
    pub async fn get_user(&self, user_id: i64) -> Result<User, ApiError> {
        self.get_json(&format!("/api/users/{}", user_id)).await
    }

    pub async fn get_fee_structures(&self) -> Result<Vec<FeeStructureSummary>, ApiError> {
        self.get_json("/api/fee-structures").await
    }

    pub async fn get_fee_records(&self) -> Result<Vec<FeeRecord>, ApiError> {
        self.get_json("/api/fee-records").await
    }

    /// Hand a validated payment to the backend; any 2xx counts as accepted
    pub async fn submit_payment(&self, request: &PaymentRequest) -> Result<(), ApiError> {
        self.post_json("/api/payments", request).await
    }

    pub async fn create_fee_structure(&self, request: &CreateFeeStructureRequest) -> Result<(), ApiError> {
        self.post_json("/api/fee-structures", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_url_joins_base_and_path() {
        let config = AppConfig {
            api_base_url: "http://localhost:8000/".to_string(),
            ..AppConfig::default()
        };
        let client = ApiClient::new(&config);
        assert_eq!(client.url("/api/users/1"), "http://localhost:8000/api/users/1");
    }

    #[wasm_bindgen_test]
    fn test_same_origin_by_default() {
        let client = ApiClient::new(&AppConfig::default());
        assert_eq!(client.url("/api/payments"), "/api/payments");
    }

    #[wasm_bindgen_test]
    fn test_error_messages() {
        let err = ApiError::Status { status: 502, body: "Bad Gateway".to_string() };
        assert_eq!(err.to_string(), "Server error 502: Bad Gateway");
    }
}
