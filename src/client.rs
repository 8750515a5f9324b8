//! HTTP client for the E-Ballot backend API.

use reqwest::{header::CONTENT_TYPE, Client, Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::model::auth::{Credentials, CurrentUser, NewUser, TokenResponse, AUTH_TOKEN_HEADER};

/// Where the backend API is expected when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("API answered {0}: {1}")]
    Status(StatusCode, String),
}

pub type Result<T> = std::result::Result<T, ClientError>;

/// A JSON client, optionally authenticated with a token sent as `x-auth-token`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
    token: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
            token: None,
        }
    }

    /// Attach `token` to every later request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// A request to `path`, relative to the base URL.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        match &self.token {
            Some(token) => builder.header(AUTH_TOKEN_HEADER, token),
            None => builder,
        }
    }

    /// `POST /auth/login`, returning the issued token.
    pub async fn login(&self, credentials: &Credentials) -> Result<String> {
        let response: TokenResponse = self
            .send_json(Method::POST, "auth/login", credentials)
            .await?;
        Ok(response.token)
    }

    /// `POST /users/register`, returning the issued token.
    pub async fn register(&self, user: &NewUser) -> Result<String> {
        let response: TokenResponse = self.send_json(Method::POST, "users/register", user).await?;
        Ok(response.token)
    }

    /// `GET /auth`: who the attached token belongs to.
    pub async fn current_user(&self) -> Result<CurrentUser> {
        read(self.request(Method::GET, "auth")).await
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        read(self.request(method, path).json(body)).await
    }
}

async fn read<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Status(status, body));
    }
    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_carry_headers() {
        let client = ApiClient::default();
        let request = client.request(Method::GET, "auth").build().unwrap();

        assert_eq!(request.url().as_str(), "http://localhost:5000/api/auth");
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert!(request.headers().get(AUTH_TOKEN_HEADER).is_none());

        let client = ApiClient::new("http://example.com/api/").with_token("abc");
        let request = client.request(Method::POST, "/users/register").build().unwrap();

        assert_eq!(request.url().as_str(), "http://example.com/api/users/register");
        assert_eq!(request.headers().get(AUTH_TOKEN_HEADER).unwrap(), "abc");
        assert_eq!(client.token(), Some("abc"));
    }

    #[rocket::async_test]
    async fn unreachable_server() {
        let client = ApiClient::new("http://127.0.0.1:9/api");
        let err = client.login(&Credentials::voter()).await.unwrap_err();

        assert!(matches!(err, ClientError::Http(_)));
    }
}
