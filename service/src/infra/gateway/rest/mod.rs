//! REST [`Gateway`] implementation.

mod impls;
mod wire;

use std::time::Duration;

use derive_more::{Display, Error as StdError};
use serde::{de::DeserializeOwned, Serialize};
use tracing as log;

#[cfg(doc)]
use super::Gateway;
use crate::domain::user::session::Token;

/// Message shown when the server never produced a response.
const NO_RESPONSE_MESSAGE: &str =
    "No response from server. Please check your connection.";

/// Message shown when a response carried no usable error details.
const GENERIC_MESSAGE: &str = "An error occurred. Please try again later.";

/// [`Rest`] configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the platform (e.g. `https://goimomi.example`).
    pub base_url: String,

    /// Timeout applied to every request.
    pub timeout: Duration,
}

/// REST [`Gateway`] to the platform API.
///
/// One configured client wrapping GET/POST/PUT/DELETE against the base
/// URL, used uniformly by every command and query. Attaches the bearer
/// token of the current session, when one is installed.
#[derive(Clone, Debug)]
pub struct Rest {
    /// Underlying HTTP client.
    http: reqwest::Client,

    /// Base URL of the platform, without a trailing slash.
    base_url: String,

    /// Bearer [`Token`] attached to every request, if any.
    bearer: Option<Token>,
}

impl Rest {
    /// Creates a new [`Rest`] gateway with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// Errors if the underlying HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, CreateError> {
        Ok(Self {
            http: reqwest::Client::builder()
                .timeout(config.timeout)
                .build()
                .map_err(CreateError)?,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            bearer: None,
        })
    }

    /// Installs the bearer [`Token`] to attach to every request.
    #[must_use]
    pub fn with_bearer(mut self, token: Token) -> Self {
        self.bearer = Some(token);
        self
    }

    /// Fetches a raw image, for embedding into share documents.
    ///
    /// # Errors
    ///
    /// Errors if the request fails or the server responds with a
    /// non-success status.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, Error> {
        let url = if url.starts_with("http") {
            url.to_owned()
        } else {
            format!("{}{url}", self.base_url)
        };

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                message: GENERIC_MESSAGE.to_owned(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// Builds the full URL of the provided API `path`.
    fn url(&self, path: &str) -> String {
        format!("{}/api/{path}", self.base_url)
    }

    /// Applies the installed bearer [`Token`], if any.
    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.bearer {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Performs a GET request and decodes its JSON response.
    pub(super) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, Error> {
        log::debug!("GET /api/{path}");
        let response = self
            .authorize(self.http.get(self.url(path)).query(query))
            .send()
            .await?;
        Self::decode(Self::check(response).await?).await
    }

    /// Performs a POST request expecting an HTTP 201 and no usable body.
    pub(super) async fn post_created<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        log::debug!("POST /api/{path}");
        let response = self
            .authorize(self.http.post(self.url(path)).json(body))
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 201 {
            return Ok(());
        }
        log::warn!("POST /api/{path} responded with HTTP {status}");
        Err(Self::status_error(response).await)
    }

    /// Performs a POST request and decodes its JSON response.
    pub(super) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        log::debug!("POST /api/{path}");
        let response = self
            .authorize(self.http.post(self.url(path)).json(body))
            .send()
            .await?;
        Self::decode(Self::check(response).await?).await
    }

    /// Performs a POST request expecting any success status, ignoring the
    /// body.
    pub(super) async fn post_ok<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        log::debug!("POST /api/{path}");
        let response = self
            .authorize(self.http.post(self.url(path)).json(body))
            .send()
            .await?;
        drop(Self::check(response).await?);
        Ok(())
    }

    /// Performs a PUT request with the full resource representation.
    pub(super) async fn put_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        log::debug!("PUT /api/{path}");
        let response = self
            .authorize(self.http.put(self.url(path)).json(body))
            .send()
            .await?;
        drop(Self::check(response).await?);
        Ok(())
    }

    /// Performs a DELETE request.
    pub(super) async fn delete(&self, path: &str) -> Result<(), Error> {
        log::debug!("DELETE /api/{path}");
        let response =
            self.authorize(self.http.delete(self.url(path))).send().await?;
        drop(Self::check(response).await?);
        Ok(())
    }

    /// Passes a successful response through, turning any other into a
    /// [`Error::Status`].
    async fn check(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, Error> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        log::warn!(
            "`{}` responded with HTTP {status}",
            response.url().path(),
        );
        Err(Self::status_error(response).await)
    }

    /// Builds an [`Error::Status`] out of a non-success response.
    async fn status_error(response: reqwest::Response) -> Error {
        let status = response.status().as_u16();
        let message = response
            .bytes()
            .await
            .ok()
            .and_then(|body| extract_message(&body))
            .unwrap_or_else(|| GENERIC_MESSAGE.to_owned());
        Error::Status { status, message }
    }

    /// Decodes the JSON body of a successful response.
    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, Error> {
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(Error::Decode)
    }
}

/// Extracts a human-readable message from an error body.
///
/// Handles the two shapes the platform responds with: `{"detail": "..."}`
/// and a field-keyed object of message lists (the first message found
/// wins), plus plain-string field values.
fn extract_message(body: &[u8]) -> Option<String> {
    let value = serde_json::from_slice::<serde_json::Value>(body).ok()?;
    let object = value.as_object()?;

    if let Some(detail) = object.get("detail").and_then(|d| d.as_str()) {
        return Some(detail.to_owned());
    }

    object.values().find_map(|field| match field {
        serde_json::Value::String(message) => Some(message.clone()),
        serde_json::Value::Array(messages) => messages
            .first()
            .and_then(|m| m.as_str())
            .map(str::to_owned),
        serde_json::Value::Null
        | serde_json::Value::Bool(_)
        | serde_json::Value::Number(_)
        | serde_json::Value::Object(_) => None,
    })
}

/// [`Rest`] gateway error.
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// The request never produced a response.
    #[display("request failed: {_0}")]
    Transport(reqwest::Error),

    /// The server responded with a non-success status.
    #[display("server responded with HTTP {status}: {message}")]
    Status {
        /// HTTP status code of the response.
        status: u16,

        /// Extracted human-readable message.
        message: String,
    },

    /// The response body could not be decoded.
    #[display("failed to decode response body: {_0}")]
    Decode(serde_json::Error),
}

impl Error {
    /// Returns the message of this [`Error`] to surface to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => NO_RESPONSE_MESSAGE.to_owned(),
            Self::Status { message, .. } => message.clone(),
            Self::Decode(_) => GENERIC_MESSAGE.to_owned(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}

/// Error of creating a [`Rest`] gateway.
#[derive(Debug, Display, StdError)]
#[display("failed to initialize the HTTP client: {_0}")]
pub struct CreateError(reqwest::Error);

#[cfg(test)]
mod spec {
    use super::extract_message;

    #[test]
    fn detail_shape_wins() {
        let body = br#"{"detail": "Authentication required"}"#;
        assert_eq!(
            extract_message(body).as_deref(),
            Some("Authentication required"),
        );
    }

    #[test]
    fn field_map_yields_the_first_message() {
        let body = br#"{"email": ["Enter a valid email."]}"#;
        assert_eq!(
            extract_message(body).as_deref(),
            Some("Enter a valid email."),
        );

        let body = br#"{"error": "Invalid credentials"}"#;
        assert_eq!(
            extract_message(body).as_deref(),
            Some("Invalid credentials"),
        );
    }

    #[test]
    fn unusable_bodies_yield_nothing() {
        assert_eq!(extract_message(b"not json"), None);
        assert_eq!(extract_message(b"[1, 2]"), None);
        assert_eq!(extract_message(br#"{"count": 3}"#), None);
        assert_eq!(extract_message(br#"{"items": []}"#), None);
    }
}
