use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use super::Report;

/// The two ways a request to the screening service can fail. Both degrade to
/// a notice in the UI rather than aborting the app.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Connection or IO failure, including an unusable base URL.
    #[error("network failure: {0}")]
    Network(String),
    /// The body was not the JSON shape that was expected.
    #[error("invalid payload: {0}")]
    Payload(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> ApiError {
        return ApiError::Network(err.to_string());
    }
}

#[async_trait]
pub trait ScreeningApi {
    /// `POST /start`. Returns the raw response body.
    async fn start_session(
        &self,
        user_id: &str,
        name: &str,
        language: &str,
    ) -> Result<String, ApiError>;

    /// `POST /message`. Returns the raw response body.
    async fn send_message(&self, user_id: &str, message: &str) -> Result<String, ApiError>;

    /// `GET /analytics/{user_id}`. Returns the raw response body.
    async fn analytics(&self, user_id: &str) -> Result<String, ApiError>;

    /// `GET /report/{user_id}`, parsed into a [`Report`].
    async fn report(&self, user_id: &str) -> Result<Report, ApiError>;
}

pub type ApiBox = Arc<dyn ScreeningApi + Send + Sync>;
