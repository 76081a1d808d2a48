//! REST API client for the rental backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since every read
//! happens in the browser after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Views turn errors into a stored
//! message plus a toast; nothing on a network path panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

use super::types::{NewComment, Room};

/// Content type sent with every request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Characters escaped when an id is placed in a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Failure modes of a REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Preconfigured HTTP client bound to one REST origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(crate::config::api_base_url())
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base origin and `path` with exactly one slash.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    /// `GET /rooms/all`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a body
    /// that is not a JSON array. Individual rooms that fail to decode are
    /// skipped.
    pub async fn fetch_rooms(&self) -> Result<Vec<Room>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.endpoint_url(ROOMS_ALL_PATH);
            let resp = with_headers(gloo_net::http::Request::get(&url), None)
                .send()
                .await
                .map_err(transport)?;
            read_json(resp).await.map(super::types::rooms_from_values)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /rooms/{id}`, attaching the bearer token when one is stored.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a body
    /// that does not decode into a room.
    pub async fn fetch_room(&self, room_id: &str, token: Option<&str>) -> Result<Room, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.endpoint_url(&room_path(room_id));
            let resp = with_headers(gloo_net::http::Request::get(&url), token)
                .send()
                .await
                .map_err(transport)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (room_id, token);
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /users/logout`. Succeeds iff the backend answers with a success
    /// status; the body is not inspected.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn logout(&self, token: Option<&str>) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.endpoint_url(LOGOUT_PATH);
            let resp = with_headers(gloo_net::http::Request::get(&url), token)
                .send()
                .await
                .map_err(transport)?;
            check_status(resp.ok(), resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /rooms/{id}/comments`. The backend answers with the complete
    /// updated room aggregate, which replaces the caller's snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a body
    /// that does not decode into a room.
    pub async fn post_comment(&self, room_id: &str, body: &NewComment, token: Option<&str>) -> Result<Room, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.endpoint_url(&room_comments_path(room_id));
            let resp = with_headers(gloo_net::http::Request::post(&url), token)
                .json(body)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (room_id, body, token);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
const ROOMS_ALL_PATH: &str = "/rooms/all";
#[cfg(feature = "hydrate")]
const LOGOUT_PATH: &str = "/users/logout";

/// Path of a single room.
pub fn room_path(room_id: &str) -> String {
    format!("/rooms/{}", utf8_percent_encode(room_id, PATH_SEGMENT))
}

/// Path that accepts new comments for a room.
pub fn room_comments_path(room_id: &str) -> String {
    format!("{}/comments", room_path(room_id))
}

/// `Authorization` header value, present only for a non-empty token.
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    token
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| format!("Bearer {t}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(ok: bool, status: u16) -> Result<(), ApiError> {
    if ok { Ok(()) } else { Err(ApiError::Status(status)) }
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_body<T: DeserializeOwned>(raw: &str) -> Result<T, ApiError> {
    serde_json::from_str(raw).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
fn with_headers(builder: gloo_net::http::RequestBuilder, token: Option<&str>) -> gloo_net::http::RequestBuilder {
    let builder = builder.header("Content-Type", JSON_CONTENT_TYPE);
    match bearer_header(token) {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    check_status(resp.ok(), resp.status())?;
    let raw = resp.text().await.map_err(transport)?;
    decode_body(&raw)
}
