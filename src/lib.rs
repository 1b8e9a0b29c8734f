//! # Inkflow Rust SDK
//!
//! Official Rust SDK for the Inkflow e-signature API.
//!
//! Inkflow routes documents to signers: upload PDFs, place signature
//! and text fields, send signature requests, poll for completion and
//! read back the filled-in field content.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use inkflow::{Client, Document, SignatureRequest, Signer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a client with your API key
//!     let client = Client::new("ink_live_xxxxx");
//!
//!     // One document from a local file, one signer
//!     let mut request = SignatureRequest::new();
//!     let mut document = Document::from_file("contract.pdf");
//!     document.signers.push(Signer::new("signer_1@example.com"));
//!     request.documents.push(document);
//!
//!     // send() uploads the file, then submits the request
//!     let response = client.signature_requests().send(&mut request).await?;
//!     let id = response.signature_request_id.clone().unwrap();
//!     println!("Created signature request {}", id);
//!
//!     // Poll until every signer has signed
//!     let current = client.signature_requests().get(&id).await?;
//!     println!("Completed: {}", current.completed);
//!     Ok(())
//! }
//! ```
//!
//! ## Templates and existing fields
//!
//! Documents already known to the service are referenced by id instead
//! of uploaded, and their pre-defined fields are filled through
//! [`ExistingField`] bindings:
//!
//! ```rust,no_run
//! use inkflow::{Client, Document, ExistingField, SignatureRequest, Signer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("ink_live_xxxxx");
//!
//!     let mut request = SignatureRequest::new();
//!     let mut document = Document::from_id("6586b79c-60a9-4986-a96d-2b8841cfb567");
//!
//!     let mut signer = Signer::new("signer_1@example.com");
//!     signer.role = Some("Employee".to_string());
//!     let mut field = ExistingField::new("d9fbf81b-cfa1-47cd-bc3e-3980131af733");
//!     field.content = Some("Sample content 1".to_string());
//!     signer.existing_fields.push(field);
//!
//!     document.signers.push(signer);
//!     request.documents.push(document);
//!
//!     client.signature_requests().send(&mut request).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Authentication**: HTTP Basic with your API key
//! - **Documents**: upload, download, delete; attach pre-rendered
//!   signature images; read field content
//! - **Signature requests**: multi-document, multi-signer requests with
//!   ad-hoc fields, template field bindings, signing order, access
//!   codes, bundling and branding
//! - **Forward compatibility**: unknown response fields and enum values
//!   are tolerated, never fatal
//!
//! ## Error Handling
//!
//! All operations return `Result<T, InkflowError>`:
//!
//! ```rust,no_run
//! use inkflow::{Client, InkflowError};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::new("ink_live_xxxxx");
//!
//!     match client.signature_requests().get("some-id").await {
//!         Ok(request) => println!("Completed: {}", request.completed),
//!         Err(InkflowError::Unauthorized) => println!("Invalid API key"),
//!         Err(e) if e.is_retryable() => println!("Transient failure: {}", e),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

pub mod client;
pub mod documents;
pub mod endpoints;
pub mod error;
pub mod requests;
pub mod types;

// Re-export main types at the crate root
pub use client::{Client, ClientConfig};
pub use error::{InkflowError, Result};

// Re-export types module for easy access
pub use types::{
    Branding, Document, DocumentField, DocumentFieldAlignment, DocumentFieldStatus,
    DocumentFields, ExistingField, Field, FieldType, Signature, SignatureRequest, Signer,
};
