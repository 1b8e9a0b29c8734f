//! Inkflow API client.
//!
//! The main entry point for interacting with the Inkflow e-signature
//! API.

use crate::documents::DocumentsClient;
use crate::error::{InkflowError, Result};
use crate::requests::SignatureRequestsClient;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::{header, Client as HttpClient};
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.inkflow.io";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Inkflow API client.
///
/// Holds only immutable configuration (API key, base URL, HTTP handle)
/// for its lifetime; no state is retained between calls.
///
/// # Example
///
/// ```rust,no_run
/// use inkflow::{Client, Document, SignatureRequest, Signer};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::new("ink_live_xxxxx");
///
///     // Build a request: one local document, one signer
///     let mut request = SignatureRequest::new();
///     let mut document = Document::from_file("contract.pdf");
///     document.signers.push(Signer::new("signer_1@example.com"));
///     request.documents.push(document);
///
///     // Uploads the document, then submits the request
///     let response = client.signature_requests().send(&mut request).await?;
///     println!("Created request {}", response.signature_request_id.unwrap());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    pub(crate) http: HttpClient,
    pub(crate) base_url: String,
    pub(crate) api_key: String,
}

/// Configuration options for the client.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Base URL for the API (default: https://api.inkflow.io).
    pub base_url: Option<String>,
    /// Request timeout (default: 30 seconds).
    pub timeout: Option<Duration>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
}

impl Client {
    /// Create a new Inkflow client with default configuration.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Your Inkflow API key
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use inkflow::Client;
    ///
    /// let client = Client::new("ink_live_xxxxx");
    /// ```
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a new Inkflow client with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use inkflow::{Client, ClientConfig};
    /// use std::time::Duration;
    ///
    /// let client = Client::with_config("ink_live_xxxxx", ClientConfig {
    ///     base_url: Some("https://api.staging.inkflow.io".to_string()),
    ///     timeout: Some(Duration::from_secs(60)),
    ///     user_agent: Some("my-app/1.0".to_string()),
    /// });
    /// ```
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Self {
        let timeout = config
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let user_agent = config
            .user_agent
            .unwrap_or_else(|| format!("inkflow-rust/{}", env!("CARGO_PKG_VERSION")));

        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: config
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: api_key.into(),
        }
    }

    /// Get the base URL for the API.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the documents client for upload, download, content and field
    /// operations.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use inkflow::Client;
    ///
    /// let client = Client::new("ink_live_xxxxx");
    /// let documents = client.documents();
    /// ```
    pub fn documents(&self) -> DocumentsClient {
        DocumentsClient::new(self.clone())
    }

    /// Get the signature requests client for sending and retrieving
    /// signature requests.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use inkflow::Client;
    ///
    /// let client = Client::new("ink_live_xxxxx");
    /// let requests = client.signature_requests();
    /// ```
    pub fn signature_requests(&self) -> SignatureRequestsClient {
        SignatureRequestsClient::new(self.clone())
    }

    /// HTTP Basic credential: the API key as username, empty password.
    fn auth_header(&self) -> String {
        format!("Basic {}", BASE64.encode(format!("{}:", self.api_key)))
    }

    /// Make an authenticated GET request and decode the JSON response.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .header(header::AUTHORIZATION, self.auth_header())
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make an authenticated GET request and return the raw body.
    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .header(header::AUTHORIZATION, self.auth_header())
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.bytes().await?.to_vec())
        } else {
            Err(self.parse_error(response).await)
        }
    }

    /// Make an authenticated POST request with a JSON body and decode
    /// the JSON response.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .post(&url)
            .header(header::AUTHORIZATION, self.auth_header())
            .header(header::CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make an authenticated POST request with a JSON body, ignoring
    /// the response body beyond the status.
    pub(crate) async fn post_no_response<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: serde::Serialize,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .post(&url)
            .header(header::AUTHORIZATION, self.auth_header())
            .header(header::CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(self.parse_error(response).await)
        }
    }

    /// Make an authenticated multipart POST request and decode the JSON
    /// response.
    pub(crate) async fn post_multipart<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .post(&url)
            .header(header::AUTHORIZATION, self.auth_header())
            .multipart(form)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make an authenticated DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .delete(&url)
            .header(header::AUTHORIZATION, self.auth_header())
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(self.parse_error(response).await)
        }
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if response.status().is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| InkflowError::Decode(e.to_string()))
        } else {
            Err(self.parse_error(response).await)
        }
    }

    async fn parse_error(&self, response: reqwest::Response) -> InkflowError {
        let status = response.status().as_u16();

        if status == 401 {
            return InkflowError::Unauthorized;
        }

        #[derive(Deserialize)]
        struct ErrorBody {
            message: String,
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => "unknown error".to_string(),
        };

        InkflowError::Api {
            status_code: status,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new() {
        let client = Client::new("test_key");
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_with_config() {
        let client = Client::with_config(
            "test_key",
            ClientConfig {
                base_url: Some("https://custom.api.com".to_string()),
                timeout: Some(Duration::from_secs(60)),
                user_agent: None,
            },
        );
        assert_eq!(client.base_url(), "https://custom.api.com");
    }

    #[test]
    fn test_auth_header_is_basic_with_empty_password() {
        let client = Client::new("fba19cdd-a21c-46cc-90fc-28a77e2271a4");
        let expected = format!(
            "Basic {}",
            BASE64.encode("fba19cdd-a21c-46cc-90fc-28a77e2271a4:")
        );
        assert_eq!(client.auth_header(), expected);
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.base_url.is_none());
        assert!(config.timeout.is_none());
        assert!(config.user_agent.is_none());
    }
}
