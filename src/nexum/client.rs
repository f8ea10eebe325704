//! HTTP client for Nexum API requests.
//!
//! This module provides a low-level HTTP client wrapper for making requests
//! to the Nexum backend, handling authentication headers, status checks,
//! and error-body extraction.

use super::error::NexumError;
use log::*;
use reqwest::Method;
use serde::de::DeserializeOwned;

/// Makes requests to the Nexum backend and tries to conform response data
/// to the given type.
///
pub struct Client {
    pub(crate) base_url: String,
    token: Option<String>,
    pub(crate) http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created. This should never happen
    /// in practice as reqwest::Client::builder().build() only fails on
    /// invalid configuration, which we don't use.
    pub fn new(base_url: &str) -> Self {
        Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            token: None,
            http_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create HTTP client - this should never happen"),
        }
    }

    /// Set or clear the bearer token attached to subsequent requests.
    ///
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Make a request and deserialize the successful response body.
    ///
    /// Non-success statuses become `NexumError::Api` carrying whatever
    /// detail could be extracted from the body's `message` field.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, NexumError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut request = self.http_client.request(method, &url);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = extract_error_message(&bytes);
            error!(
                "API request failed with status {}: {}",
                status,
                message.as_deref().unwrap_or("<no detail>")
            );
            return Err(NexumError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Extract a human-readable detail from an error response body.
///
/// The backend reports failures as `{"message": "..."}"` or, for validation
/// errors, `{"message": ["...", "..."]}`; list entries are joined with
/// `", "`. A body that cannot be parsed yields no detail rather than an
/// error of its own.
fn extract_error_message(bytes: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(bytes).ok()?;
    match value.get("message")? {
        serde_json::Value::String(message) => Some(message.clone()),
        serde_json::Value::Array(items) => Some(
            items
                .iter()
                .filter_map(|item| item.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message_string() {
        let body = r#"{"message": "Credenciales inválidas"}"#.as_bytes();
        assert_eq!(
            extract_error_message(body),
            Some("Credenciales inválidas".to_string())
        );
    }

    #[test]
    fn test_extract_error_message_list_joined() {
        let body = br#"{"message": ["telefono must be longer than 8", "correo must be an email"]}"#;
        assert_eq!(
            extract_error_message(body),
            Some("telefono must be longer than 8, correo must be an email".to_string())
        );
    }

    #[test]
    fn test_extract_error_message_unparseable_body() {
        assert_eq!(extract_error_message(b"<html>502 Bad Gateway</html>"), None);
        assert_eq!(extract_error_message(b""), None);
    }

    #[test]
    fn test_extract_error_message_missing_field() {
        assert_eq!(extract_error_message(br#"{"error": "boom"}"#), None);
        assert_eq!(extract_error_message(br#"{"message": 42}"#), None);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = Client::new("http://localhost:3001/");
        assert_eq!(client.base_url, "http://localhost:3001");
    }
}
