//! Type definitions for the Inkflow SDK.
//!
//! This module contains the signature request graph the caller builds
//! (requests, documents, signers, fields) and the response-side views
//! reported by the service. Wire names follow the service's JSON
//! contract exactly; optional values are omitted from payloads when
//! unset so the service applies its own defaults.

use serde::{Deserialize, Serialize};

/// Placeable field kinds supported by the service.
///
/// Unrecognized wire tokens decode to [`FieldType::Unknown`] so new
/// server-side kinds do not break older clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    /// Signature capture field.
    #[default]
    Signature,
    /// Initials capture field.
    Initials,
    /// Free text field.
    Text,
    /// Date field.
    Date,
    /// Checkbox field.
    Checkbox,
    /// Radio button field.
    Radio,
    /// A kind this SDK version does not know about.
    #[serde(other)]
    Unknown,
}

/// Lifecycle status of a field as reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentFieldStatus {
    /// Waiting for the signer to fill the field in.
    #[default]
    Waiting,
    /// The signer has submitted content for the field.
    Completed,
    /// The field was skipped.
    Skipped,
    /// A status this SDK version does not know about.
    #[serde(other)]
    Unknown,
}

/// Horizontal text alignment of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentFieldAlignment {
    /// Left-aligned content.
    #[default]
    Left,
    /// Centered content.
    Center,
    /// Right-aligned content.
    Right,
    /// An alignment this SDK version does not know about.
    #[serde(other)]
    Unknown,
}

/// Sender branding applied to a signature request's notifications.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Branding {
    /// Reply-to address for notification emails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_email: Option<String>,
    /// Display name used in the email From field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_from_field: Option<String>,
}

/// A field placed ad hoc on a page of a new document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Zero-based page number.
    pub page: u32,
    /// Bounding box as left, top, right, bottom in document coordinates.
    pub rectangle: [i32; 4],
    /// Kind of field.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Internal field name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Correlator echoed back by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_id: Option<String>,
    /// Pre-filled content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Label shown to the signer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Whether the signer must fill the field. Defaults to true in all
    /// constructors.
    #[serde(default)]
    pub required: bool,
    /// Whether the field is read-only for the signer.
    #[serde(rename = "readonly", default)]
    pub read_only: bool,
}

impl Field {
    /// Create a required field of the given kind at a position.
    pub fn new(page: u32, rectangle: [i32; 4], field_type: FieldType) -> Self {
        Self {
            page,
            rectangle,
            field_type,
            name: None,
            api_id: None,
            content: None,
            label: None,
            required: true,
            read_only: false,
        }
    }

    /// Create a field with a label and an explicit required flag.
    pub fn labeled(
        page: u32,
        rectangle: [i32; 4],
        field_type: FieldType,
        label: impl Into<String>,
        required: bool,
    ) -> Self {
        Self {
            label: Some(label.into()),
            required,
            ..Self::new(page, rectangle, field_type)
        }
    }
}

/// A reference to a field already defined on a template or document,
/// populated with content at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExistingField {
    /// Identifier of the pre-existing field.
    pub api_id: String,
    /// Content injected into the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Label override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Whether the signer must fill the field. Defaults to true.
    #[serde(default)]
    pub required: bool,
    /// Whether the field is read-only for the signer.
    #[serde(default)]
    pub read_only: bool,
}

impl ExistingField {
    /// Reference an existing field by its api id.
    pub fn new(api_id: impl Into<String>) -> Self {
        Self {
            api_id: api_id.into(),
            content: None,
            label: None,
            required: true,
            read_only: false,
        }
    }
}

/// A pre-rendered signature attached directly to a document's content.
///
/// Used only with
/// [`DocumentsClient::add_content`](crate::documents::DocumentsClient::add_content);
/// signature *requests* place [`Field`]s and [`ExistingField`]s instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    /// Zero-based page number.
    pub page: u32,
    /// Bounding box as left, top, right, bottom in document coordinates.
    pub rectangle: [i32; 4],
    /// Raw bitmap bytes (e.g. a PNG); base64-encoded on the wire.
    #[serde(with = "base64_bytes")]
    pub image: Vec<u8>,
    /// Serialized stroke path, an alternative rendering hint to the
    /// static image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_coordinates: Option<String>,
}

/// A recipient of a signature request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Signer {
    /// Email address. Required, and the key used to correlate signers
    /// between request and response.
    pub email: String,
    /// Role label, used for template field role binding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// 1-based signing sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    /// Access code the signer must enter before signing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_code: Option<String>,
    /// Signing page URL, assigned by the service. Present only in
    /// responses; carries both a document and an invitation identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_document_url: Option<String>,
    /// Whether this signer has completed signing. Service-assigned.
    #[serde(default)]
    pub signature_completed: bool,
    /// Ad-hoc fields placed for this signer on a new document.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
    /// Bindings into fields already defined on a template document.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub existing_fields: Vec<ExistingField>,
}

impl Signer {
    /// Create a signer with the given email address.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }
}

/// A document within a signature request.
///
/// A document is resolvable for submission when it carries either a
/// `document_id` (an already-uploaded or template document) or a
/// `file_name` pointing at a local file the orchestrator uploads first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Service-side document id. Assigned by the service after upload,
    /// or set by the caller to reference a template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    /// Local path of the source file. Never serialized; consumed by the
    /// upload step when `document_id` is absent.
    #[serde(skip)]
    pub file_name: Option<String>,
    /// Document title. Absent means the service generates one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Invitation email subject. Absent means the service default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Invitation email message. Absent means the service default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Signers of this document, in signing order.
    #[serde(default)]
    pub signers: Vec<Signer>,
}

impl Document {
    /// Create a document from a local file to be uploaded on send.
    pub fn from_file(file_name: impl Into<String>) -> Self {
        Self {
            file_name: Some(file_name.into()),
            ..Self::default()
        }
    }

    /// Reference a document or template already known to the service.
    pub fn from_id(document_id: impl Into<String>) -> Self {
        Self {
            document_id: Some(document_id.into()),
            ..Self::default()
        }
    }

    /// Find a signer of this document by email.
    pub fn signer_by_email(&self, email: &str) -> Option<&Signer> {
        self.signers.iter().find(|signer| signer.email == email)
    }
}

/// A unit of work routing one or more documents to one or more signers.
///
/// Build the graph, hand it to
/// [`SignatureRequestsClient::send`](crate::requests::SignatureRequestsClient::send),
/// then poll
/// [`SignatureRequestsClient::get`](crate::requests::SignatureRequestsClient::get)
/// until [`completed`](Self::completed) turns true. A request without a
/// `signature_request_id` has not been submitted yet; any submission
/// failure leaves it that way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureRequest {
    /// Service-assigned request id. Absent until created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_request_id: Option<String>,
    /// Whether the service sends notification emails. Defaults to true.
    #[serde(default)]
    pub send_emails: bool,
    /// Whether the signing page is rendered in embedded style.
    #[serde(default)]
    pub embedded: bool,
    /// Redirect target while signing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_for_signing_to_url: Option<String>,
    /// Redirect target after signing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_after_signing_to_url: Option<String>,
    /// Whether text tags in the document body are converted to fields.
    #[serde(default)]
    pub use_text_tags: bool,
    /// Whether text tags are hidden after conversion.
    #[serde(default)]
    pub hide_text_tags: bool,
    /// Whether all signers have completed. Service-assigned, read-only.
    #[serde(rename = "is_completed", default)]
    pub completed: bool,
    /// Whether the documents are presented to signers as one bundle.
    #[serde(default)]
    pub send_documents_as_bundle: bool,
    /// Title of the combined bundle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_title: Option<String>,
    /// Email subject for the bundle invitation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_subject: Option<String>,
    /// Email message for the bundle invitation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_message: Option<String>,
    /// Sender branding overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branding: Option<Branding>,
    /// Documents of this request. Insertion order is submission order.
    #[serde(default)]
    pub documents: Vec<Document>,
}

impl Default for SignatureRequest {
    fn default() -> Self {
        Self {
            signature_request_id: None,
            send_emails: true,
            embedded: false,
            redirect_for_signing_to_url: None,
            redirect_after_signing_to_url: None,
            use_text_tags: false,
            hide_text_tags: false,
            completed: false,
            send_documents_as_bundle: false,
            bundle_title: None,
            bundle_subject: None,
            bundle_message: None,
            branding: None,
            documents: Vec::new(),
        }
    }
}

impl SignatureRequest {
    /// Create an empty signature request with default settings
    /// (notification emails on, no text tags).
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a signer across all documents by email.
    ///
    /// The service does not guarantee that response signer order matches
    /// request order, so correlation must go through the email address.
    /// Duplicate emails within one document are a documented limitation:
    /// the first match wins.
    pub fn signer_by_email(&self, email: &str) -> Option<&Signer> {
        self.documents
            .iter()
            .find_map(|document| document.signer_by_email(email))
    }

    /// Check the request graph before submission.
    ///
    /// Fails with [`InkflowError::Validation`](crate::InkflowError::Validation)
    /// when the request has no documents, a document can neither be
    /// referenced nor uploaded, a document has no signers, or a signer
    /// has no email.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::InkflowError;

        if self.documents.is_empty() {
            return Err(InkflowError::Validation(
                "signature request has no documents".to_string(),
            ));
        }
        for (index, document) in self.documents.iter().enumerate() {
            if document.document_id.is_none() && document.file_name.is_none() {
                return Err(InkflowError::Validation(format!(
                    "document {index} has neither a document id nor a file name"
                )));
            }
            if document.signers.is_empty() {
                return Err(InkflowError::Validation(format!(
                    "document {index} has no signers"
                )));
            }
            for signer in &document.signers {
                if signer.email.trim().is_empty() {
                    return Err(InkflowError::Validation(format!(
                        "document {index} has a signer without an email"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// A field of a document as reported by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentField {
    /// Field identifier.
    pub api_id: String,
    /// Role the field is bound to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Kind of field.
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    /// Zero-based page number.
    #[serde(default)]
    pub page: u32,
    /// Bounding box as left, top, right, bottom.
    #[serde(default)]
    pub rectangle: [i32; 4],
    /// Lifecycle status.
    #[serde(default)]
    pub status: DocumentFieldStatus,
    /// Content assigned at request time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Content the signer submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_content: Option<String>,
    /// Label shown to the signer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Whether the signer must fill the field.
    #[serde(default)]
    pub required: bool,
    /// Internal field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Option index. Relevant only for checkbox-like fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    /// Whether the field is read-only for the signer.
    #[serde(default)]
    pub read_only: bool,
    /// True for fields native to the PDF, false for fields added by the
    /// service.
    #[serde(default)]
    pub pdf_field: bool,
    /// Font size of the field content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Maximum content length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    /// Content alignment.
    #[serde(default)]
    pub alignment: DocumentFieldAlignment,
}

/// The fields of a document, ordered as reported by the service and
/// addressable by api id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentFields {
    /// Fields in service order.
    #[serde(default)]
    pub document_fields: Vec<DocumentField>,
}

impl DocumentFields {
    /// Look a field up by its api id.
    pub fn get(&self, api_id: &str) -> Option<&DocumentField> {
        self.document_fields
            .iter()
            .find(|field| field.api_id == api_id)
    }

    /// Iterate over the fields in service order.
    pub fn iter(&self) -> impl Iterator<Item = &DocumentField> {
        self.document_fields.iter()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.document_fields.len()
    }

    /// Whether the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.document_fields.is_empty()
    }
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&BASE64.encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        BASE64.decode(encoded.as_bytes()).map_err(serde::de::Error::custom)
    }
}
