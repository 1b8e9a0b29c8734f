//! Sending a signature request with the Inkflow SDK.
//!
//! This example demonstrates:
//! - Building a multi-signer request with ad-hoc fields
//! - Sending it (the document is uploaded automatically)
//! - Polling for completion
//!
//! Run with:
//! ```bash
//! INKFLOW_API_KEY=ink_live_xxx cargo run --example send_request
//! ```

use inkflow::{Client, Document, Field, FieldType, SignatureRequest, Signer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("INKFLOW_API_KEY")
        .expect("INKFLOW_API_KEY environment variable required");

    let client = Client::new(&api_key);

    // Build the request: one document, two signers in sequence
    let mut request = SignatureRequest::new();

    let mut document = Document::from_file("document.pdf");
    document.title = Some("Sample title".to_string());
    document.subject = Some("Sample subject".to_string());
    document.message = Some("Sample message".to_string());

    let mut signer1 = Signer::new("signer_1@example.com");
    signer1.order = Some(1);
    signer1
        .fields
        .push(Field::new(0, [0, 0, 200, 100], FieldType::Signature));
    signer1.fields.push(Field::labeled(
        0,
        [0, 120, 200, 160],
        FieldType::Text,
        "Your name",
        true,
    ));

    let mut signer2 = Signer::new("signer_2@example.com");
    signer2.order = Some(2);
    signer2
        .fields
        .push(Field::new(1, [0, 0, 200, 100], FieldType::Signature));

    document.signers.push(signer1);
    document.signers.push(signer2);
    request.documents.push(document);

    // Send: uploads document.pdf, then submits the request
    println!("Sending signature request...");
    let response = client.signature_requests().send(&mut request).await?;
    let request_id = response.signature_request_id.clone().unwrap();
    println!("Created signature request {}", request_id);

    for document in &response.documents {
        for signer in &document.signers {
            println!(
                "  {} -> {}",
                signer.email,
                signer.sign_document_url.as_deref().unwrap_or("(no url)")
            );
        }
    }

    // One status check; real callers poll until completed turns true
    let current = client.signature_requests().get(&request_id).await?;
    println!("Completed: {}", current.completed);

    Ok(())
}
