use crate::client::error::{ClientError, Result as CliClientResult};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the fin-server admin API
pub struct Client {
    pub base_url: String,
    pub token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:3000")
    /// * `token` - Bearer token for the admin session
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Build a request carrying the session token.
    ///
    /// Fails with [`ClientError::MissingSession`] when no token is
    /// configured, before anything touches the network.
    #[track_caller]
    fn request(&self, method: Method, path: &str) -> CliClientResult<reqwest::RequestBuilder> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(ClientError::missing_session)?;

        let url = format!("{}{}", self.base_url, path);
        Ok(self
            .client
            .request(method, &url)
            .header("Authorization", format!("Bearer {}", token)))
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let body: Value = response.json().await?;

        // Check for error response
        #[allow(clippy::collapsible_if)]
        if !status.is_success() {
            if let Some(error) = body.get("error") {
                let code = error
                    .get("code")
                    .and_then(|v| v.as_str())
                    .unwrap_or("UNKNOWN")
                    .to_string();
                let message = error
                    .get("message")
                    .and_then(|v| v.as_str())
                    .unwrap_or("Unknown error")
                    .to_string();
                return Err(ClientError::Api {
                    code,
                    message,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(body)
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// List all users
    pub async fn list_users(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/v1/users")?;
        self.execute(req).await
    }

    /// Apply an approval decision; the server answers with the
    /// refreshed user list
    pub async fn set_approval(&self, id: &str, status: &str) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct ApprovalRequest<'a> {
            status: &'a str,
        }

        let req = self
            .request(Method::PUT, &format!("/api/v1/users/{}/approval", id))?
            .json(&ApprovalRequest { status });
        self.execute(req).await
    }

    /// Delete a user and all dependent data
    pub async fn delete_user(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/api/v1/users/{}", id))?;
        self.execute(req).await
    }
}
