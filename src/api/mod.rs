//! REST API Client
//!
//! Typed wrappers over the TaskFlow HTTP API, organized by resource.
//! Errors are returned as-is; callers decide how to surface them.

mod auth;
mod board;
mod card;
mod list;
mod recommendation;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

// Re-export all public items
pub use auth::*;
pub use board::*;
pub use card::*;
pub use list::*;

/// Characters escaped inside a single path segment
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
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

/// HTTP client bound to an API base URL and (optionally) a bearer token
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    /// Join encoded path segments onto the base URL
    fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.trim_end_matches('/').to_string();
        for segment in segments {
            url.push('/');
            url.extend(utf8_percent_encode(segment, SEGMENT_ENCODE_SET));
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let url = self.url(segments);
        log::debug!("{} {}", method, url);
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send and decode the body, unwrapping a `{ "<envelope>": ... }` wrapper if present
    async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder, envelope: &str) -> ApiResult<T> {
        let body = self.execute(builder).await?;
        let value: Value = serde_json::from_str(&body)?;
        Ok(unwrap_envelope(value, envelope)?)
    }

    /// Send and ignore the body
    async fn send(&self, builder: RequestBuilder) -> ApiResult<()> {
        self.execute(builder).await.map(|_| ())
    }

    async fn execute(&self, builder: RequestBuilder) -> ApiResult<String> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        check_status(status, &body)?;
        Ok(body)
    }
}

fn check_status(status: StatusCode, body: &str) -> ApiResult<()> {
    if status.is_success() {
        return Ok(());
    }
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());
    log::warn!("request failed: {} {}", status.as_u16(), message);
    Err(ApiError::Status { status: status.as_u16(), message })
}

/// Accept both `{"card": {...}}` and a bare `{...}`
fn unwrap_envelope<T: DeserializeOwned>(value: Value, key: &str) -> Result<T, serde_json::Error> {
    match value {
        Value::Object(mut map) if map.contains_key(key) => {
            serde_json::from_value(map.remove(key).unwrap_or(Value::Null))
        }
        other => serde_json::from_value(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Card, List};
    use serde_json::json;

    #[test]
    fn test_url_encodes_segments() {
        let client = ApiClient::new("http://localhost:5000/api/", None);
        assert_eq!(
            client.url(&["card", "b 1", "cards", "a/b"]),
            "http://localhost:5000/api/card/b%201/cards/a%2Fb"
        );
    }

    #[test]
    fn test_unwrap_wrapped_collection() {
        let lists: Vec<List> = unwrap_envelope(
            json!({"lists": [{"_id": "l1", "title": "To Do", "position": 0, "board": "b1"}]}),
            "lists",
        )
        .unwrap();
        assert_eq!(lists[0].id, "l1");
        assert_eq!(lists[0].board_id, "b1");
    }

    #[test]
    fn test_unwrap_bare_entity() {
        // A bare card has a `list` field, which must not be mistaken for an envelope
        let card: Card = unwrap_envelope(json!({"_id": "c1", "title": "t", "list": "l1"}), "card").unwrap();
        assert_eq!(card.list_id, "l1");
    }

    #[test]
    fn test_check_status_variants() {
        assert!(check_status(StatusCode::OK, "").is_ok());
        assert!(matches!(check_status(StatusCode::UNAUTHORIZED, ""), Err(ApiError::Unauthorized)));
        match check_status(StatusCode::BAD_REQUEST, r#"{"message":"Title is required"}"#) {
            Err(ApiError::Status { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "Title is required");
            }
            other => panic!("unexpected {:?}", other),
        }
        match check_status(StatusCode::INTERNAL_SERVER_ERROR, "<html>") {
            Err(ApiError::Status { message, .. }) => assert_eq!(message, "Internal Server Error"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
