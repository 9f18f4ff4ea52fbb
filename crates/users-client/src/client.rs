//! HTTP client for the users API.

use crate::error::Error;
use crate::types::*;
use reqwest::Client;
use std::time::Duration;
use url::Url;


/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://localhost:8080").
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the User Records API.
#[derive(Debug, Clone)]
pub struct UsersClient {
    client: Client,
    base_url: String,
}

impl UsersClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be
    /// built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        Url::parse(&config.base_url)?;
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a new client with default configuration and the given base URL.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be
    /// built.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the welcome message.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn welcome(&self) -> Result<WelcomeResponse, Error> {
        let resp = self.client.get(self.url("/")).send().await?;
        self.handle_response(resp).await
    }

    /// Creates a user.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn create_user(&self, username: &str) -> Result<User, Error> {
        let resp = self
            .client
            .post(self.url("/users"))
            .json(&CreateUserRequest::new(username))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    /// Posts an arbitrary JSON body to the create endpoint.
    ///
    /// # Errors
    /// Returns error if the request fails or the server rejects the body.
    pub async fn create_user_raw(&self, body: &serde_json::Value) -> Result<User, Error> {
        let resp = self
            .client
            .post(self.url("/users"))
            .json(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    /// Lists all users.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_users(&self) -> Result<Vec<User>, Error> {
        let resp = self.client.get(self.url("/users")).send().await?;
        self.handle_response(resp).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();

        if status.is_success() {
            Ok(resp.json().await?)
        } else {
            let text = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|body| body.error)
                .unwrap_or(text);
            Err(Error::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
