#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use async_trait::async_trait;
use reqwest::Url;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ApiError;
use crate::domain::models::Report;
use crate::domain::models::ScreeningApi;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct StartRequest<'a> {
    user_id: &'a str,
    name: &'a str,
    language: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct MessageRequest<'a> {
    user_id: &'a str,
    message: &'a str,
}

/// Screening service client over HTTP and JSON. One client is shared by
/// every request.
pub struct HttpApi {
    client: reqwest::Client,
    url: String,
}

impl Default for HttpApi {
    fn default() -> HttpApi {
        return HttpApi::new(&Config::get(ConfigKey::BaseURL));
    }
}

impl HttpApi {
    pub fn new(url: &str) -> HttpApi {
        return HttpApi {
            client: reqwest::Client::new(),
            url: url.to_string(),
        };
    }

    /// Appends path segments to the base URL. Each segment is percent encoded
    /// on its own, so a user ID can never add path components.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.url).map_err(|err| {
            return ApiError::Network(format!("invalid base URL {}: {err}", self.url));
        })?;

        url.path_segments_mut()
            .map_err(|_| return ApiError::Network(format!("invalid base URL {}", self.url)))?
            .pop_if_empty()
            .extend(segments);

        return Ok(url);
    }

    async fn read_body(&self, res: reqwest::Response) -> Result<String, ApiError> {
        let status = res.status();
        let url = res.url().to_string();
        let body = res.text().await.map_err(|err| {
            tracing::error!(error = ?err, url = %url, "Failed reading response body");
            return ApiError::from(err);
        })?;

        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                url = %url,
                body = %body,
                "Screening service returned an error status"
            );
        } else {
            tracing::debug!(
                status = status.as_u16(),
                url = %url,
                body = %body,
                "Screening service response"
            );
        }

        return Ok(body);
    }

    async fn get(&self, segments: &[&str]) -> Result<String, ApiError> {
        let url = self.endpoint(segments)?;
        let res = self.client.get(url).send().await.map_err(|err| {
            tracing::error!(error = ?err, "Screening service is unreachable");
            return ApiError::from(err);
        })?;

        return self.read_body(res).await;
    }

    async fn post<T: serde::Serialize + Sync>(
        &self,
        segments: &[&str],
        body: &T,
    ) -> Result<String, ApiError> {
        let url = self.endpoint(segments)?;
        let res = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = ?err, "Screening service is unreachable");
                return ApiError::from(err);
            })?;

        return self.read_body(res).await;
    }
}

#[async_trait]
impl ScreeningApi for HttpApi {
    #[allow(clippy::implicit_return)]
    async fn start_session(
        &self,
        user_id: &str,
        name: &str,
        language: &str,
    ) -> Result<String, ApiError> {
        let req = StartRequest {
            user_id,
            name,
            language,
        };
        return self.post(&["start"], &req).await;
    }

    #[allow(clippy::implicit_return)]
    async fn send_message(&self, user_id: &str, message: &str) -> Result<String, ApiError> {
        let req = MessageRequest { user_id, message };
        return self.post(&["message"], &req).await;
    }

    #[allow(clippy::implicit_return)]
    async fn analytics(&self, user_id: &str) -> Result<String, ApiError> {
        return self.get(&["analytics", user_id]).await;
    }

    #[allow(clippy::implicit_return)]
    async fn report(&self, user_id: &str) -> Result<Report, ApiError> {
        let body = self.get(&["report", user_id]).await?;
        return Report::parse(&body).map_err(|err| {
            tracing::warn!(error = %err, "Invalid report payload");
            return err;
        });
    }
}
