//! Path construction for the versioned REST API.
//!
//! Every function here is a pure mapping from a resource (and id, where
//! one is required) to the path below the configured base URL. Nothing
//! in this module performs I/O; functions taking an id fail only on an
//! empty id.

use crate::error::{InkflowError, Result};

const VERSION: &str = "/v1";
const DOCUMENTS: &str = "/documents";
const SIGNATURE_REQUESTS: &str = "/signature_requests";
const FIELDS: &str = "/fields";
const CONTENT: &str = "/content";

/// Path of the documents collection: `/v1/documents`.
pub fn documents() -> String {
    format!("{VERSION}{DOCUMENTS}")
}

/// Path of a single document: `/v1/documents/{document_id}`.
pub fn document(document_id: &str) -> Result<String> {
    require_id("document_id", document_id)?;
    Ok(format!("{}/{}", documents(), document_id))
}

/// Path of a document's fields: `/v1/documents/{document_id}/fields`.
pub fn document_fields(document_id: &str) -> Result<String> {
    Ok(format!("{}{FIELDS}", document(document_id)?))
}

/// Path of a document's content (signature attachment):
/// `/v1/documents/{document_id}/content`.
pub fn document_content(document_id: &str) -> Result<String> {
    Ok(format!("{}{CONTENT}", document(document_id)?))
}

/// Path of the signature requests collection: `/v1/signature_requests`.
pub fn signature_requests() -> String {
    format!("{VERSION}{SIGNATURE_REQUESTS}")
}

/// Path of a single signature request:
/// `/v1/signature_requests/{signature_request_id}`.
pub fn signature_request(signature_request_id: &str) -> Result<String> {
    require_id("signature_request_id", signature_request_id)?;
    Ok(format!(
        "{}/{}",
        signature_requests(),
        signature_request_id
    ))
}

fn require_id(name: &str, id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(InkflowError::Validation(format!(
            "{name} must not be empty"
        )));
    }
    Ok(())
}
