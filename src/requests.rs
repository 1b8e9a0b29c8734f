//! Signature request operations.
//!
//! This module provides the SignatureRequestsClient for submitting
//! signature requests and polling their state. Submission uploads any
//! file-backed documents first, then posts the full request in one
//! step.

use crate::client::Client;
use crate::endpoints;
use crate::error::{InkflowError, Result};
use crate::types::SignatureRequest;

/// Client for signature request operations.
///
/// Access via `client.signature_requests()`.
pub struct SignatureRequestsClient {
    client: Client,
}

impl SignatureRequestsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Submit a signature request.
    ///
    /// Documents without a `document_id` are uploaded from their
    /// `file_name` first, in sequence order, and the assigned ids are
    /// written back onto the caller's documents. If any upload fails
    /// the request is not submitted. The returned request is a fresh
    /// object carrying the service-assigned `signature_request_id` and
    /// per-signer `sign_document_url`s; beyond the document-id
    /// backfill, the input is not mutated.
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
    ///     let mut request = SignatureRequest::new();
    ///     let mut document = Document::from_file("contract.pdf");
    ///     document.signers.push(Signer::new("signer_1@example.com"));
    ///     request.documents.push(document);
    ///
    ///     let response = client.signature_requests().send(&mut request).await?;
    ///     println!("Created {}", response.signature_request_id.unwrap());
    ///     Ok(())
    /// }
    /// ```
    pub async fn send(&self, request: &mut SignatureRequest) -> Result<SignatureRequest> {
        request.validate()?;

        // Upload phase: every document must carry an id before the
        // submission payload is built. Order-preserving and fail-fast;
        // an upload failure means nothing was submitted.
        for document in &mut request.documents {
            if document.document_id.is_some() {
                continue;
            }
            let file_name = document.file_name.as_deref().ok_or_else(|| {
                InkflowError::Validation(
                    "document has neither a document id nor a file name".to_string(),
                )
            })?;
            let document_id = self.client.documents().upload(file_name).await?;
            document.document_id = Some(document_id);
        }

        self.client
            .post(&endpoints::signature_requests(), request)
            .await
    }

    /// Get a signature request by id.
    ///
    /// The returned request carries the state as the service reports
    /// it: per-document ids, per-signer `sign_document_url` and
    /// `signature_completed`, and the overall `completed` flag. Poll
    /// this to observe completion; the client never drives that
    /// transition.
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
    ///     let request = client
    ///         .signature_requests()
    ///         .get("6f9cbd95-b24e-4df9-b5c9-e1bb64bb9e7c")
    ///         .await?;
    ///     if request.completed {
    ///         println!("All signers have signed");
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get(&self, signature_request_id: &str) -> Result<SignatureRequest> {
        self.client
            .get(&endpoints::signature_request(signature_request_id)?)
            .await
    }
}
