//! Filling template fields with the Inkflow SDK.
//!
//! This example demonstrates:
//! - Referencing a template document by id
//! - Binding content into its existing fields per signer role
//! - Reading the filled-in field content back
//!
//! Run with:
//! ```bash
//! INKFLOW_API_KEY=ink_live_xxx TEMPLATE_ID=... cargo run --example template_fields
//! ```

use inkflow::{Client, Document, ExistingField, SignatureRequest, Signer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("INKFLOW_API_KEY")
        .expect("INKFLOW_API_KEY environment variable required");
    let template_id =
        std::env::var("TEMPLATE_ID").expect("TEMPLATE_ID environment variable required");

    let client = Client::new(&api_key);

    // Reference the template instead of uploading a file
    let mut request = SignatureRequest::new();
    let mut document = Document::from_id(&template_id);

    let mut signer = Signer::new("signer_1@example.com");
    signer.role = Some("Employee".to_string());

    let mut name_field = ExistingField::new("00b25bcc-7909-4174-b18c-04ae2fb01775");
    name_field.content = Some("James Williams".to_string());
    name_field.label = Some("Your name".to_string());
    signer.existing_fields.push(name_field);

    document.signers.push(signer);
    request.documents.push(document);

    println!("Sending signature request for template {}...", template_id);
    let response = client.signature_requests().send(&mut request).await?;
    println!(
        "Created signature request {}",
        response.signature_request_id.clone().unwrap()
    );

    // Templates are instantiated under a fresh document id
    let created_id = response.documents[0].document_id.clone().unwrap();
    let fields = client.documents().fields(&created_id).await?;
    for field in fields.iter() {
        println!(
            "  {} [{:?}] content={:?}",
            field.api_id, field.status, field.content
        );
    }

    Ok(())
}
