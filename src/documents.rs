//! Document operations.
//!
//! This module provides the DocumentsClient for uploading, downloading
//! and deleting documents, attaching pre-rendered signature content,
//! and reading a document's fields.

use crate::client::Client;
use crate::endpoints;
use crate::error::{InkflowError, Result};
use crate::types::{DocumentFields, Signature};
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Client for document operations.
///
/// Access via `client.documents()`.
pub struct DocumentsClient {
    client: Client,
}

impl DocumentsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Upload a local file and return the id the service assigned to it.
    ///
    /// # Arguments
    ///
    /// * `path` - Path of the document file to upload
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use inkflow::Client;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("ink_live_xxxxx");
    ///
    ///     let document_id = client.documents().upload("contract.pdf").await?;
    ///     println!("Uploaded document {}", document_id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn upload(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("document.pdf")
            .to_string();
        self.upload_bytes(file_name, bytes).await
    }

    /// Upload in-memory document bytes under the given file name.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use inkflow::Client;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("ink_live_xxxxx");
    ///
    ///     let bytes = std::fs::read("contract.pdf")?;
    ///     let document_id = client.documents().upload_bytes("contract.pdf", bytes).await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn upload_bytes(
        &self,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<String> {
        #[derive(Deserialize)]
        struct Response {
            document_id: Option<String>,
        }

        let part = Part::bytes(bytes).file_name(file_name.into());
        let form = Form::new().part("file", part);

        let response: Response = self
            .client
            .post_multipart(&endpoints::documents(), form)
            .await?;

        response.document_id.ok_or_else(|| {
            InkflowError::Decode("upload response is missing document_id".to_string())
        })
    }

    /// Delete a document by id.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use inkflow::Client;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("ink_live_xxxxx");
    ///
    ///     client.documents().delete("c0880b21-5c1d-4a15-87b0-1e61b832a5f6").await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn delete(&self, document_id: &str) -> Result<()> {
        self.client.delete(&endpoints::document(document_id)?).await
    }

    /// Download a document and return its raw bytes.
    ///
    /// Persisting the bytes to disk is left to the caller.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use inkflow::Client;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("ink_live_xxxxx");
    ///
    ///     let bytes = client.documents().download("c0880b21-5c1d-4a15-87b0-1e61b832a5f6").await?;
    ///     std::fs::write("signed.pdf", bytes)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn download(&self, document_id: &str) -> Result<Vec<u8>> {
        self.client
            .get_bytes(&endpoints::document(document_id)?)
            .await
    }

    /// Attach pre-rendered signatures to a document's content.
    ///
    /// # Arguments
    ///
    /// * `document_id` - The document to stamp
    /// * `signatures` - Signature images with their page positions
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use inkflow::{Client, Signature};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("ink_live_xxxxx");
    ///
    ///     let signature = Signature {
    ///         page: 1,
    ///         rectangle: [0, 0, 200, 100],
    ///         image: std::fs::read("signature.png")?,
    ///         draw_coordinates: None,
    ///     };
    ///     client
    ///         .documents()
    ///         .add_content("c0880b21-5c1d-4a15-87b0-1e61b832a5f6", &[signature])
    ///         .await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn add_content(&self, document_id: &str, signatures: &[Signature]) -> Result<()> {
        #[derive(Serialize)]
        struct DocumentContent<'a> {
            signatures: &'a [Signature],
        }

        self.client
            .post_no_response(
                &endpoints::document_content(document_id)?,
                &DocumentContent { signatures },
            )
            .await
    }

    /// Get the fields of a document, addressable by api id.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use inkflow::Client;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("ink_live_xxxxx");
    ///
    ///     let fields = client.documents().fields("c0880b21-5c1d-4a15-87b0-1e61b832a5f6").await?;
    ///     for field in fields.iter() {
    ///         println!("{}: {:?}", field.api_id, field.status);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn fields(&self, document_id: &str) -> Result<DocumentFields> {
        self.client
            .get(&endpoints::document_fields(document_id)?)
            .await
    }
}
