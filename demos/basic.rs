//! Basic usage example for the Inkflow SDK.
//!
//! This example demonstrates:
//! - Creating a client
//! - Uploading a document
//! - Downloading it back
//! - Deleting it
//!
//! Run with:
//! ```bash
//! INKFLOW_API_KEY=ink_live_xxx cargo run --example basic
//! ```

use inkflow::Client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Get API key from environment
    let api_key = std::env::var("INKFLOW_API_KEY")
        .expect("INKFLOW_API_KEY environment variable required");

    // Create client
    println!("Creating Inkflow client...");
    let client = Client::new(&api_key);

    // Upload a document
    println!("\nUploading document.pdf...");
    let document_id = client.documents().upload("document.pdf").await?;
    println!("Uploaded document: {}", document_id);

    // Download it back
    println!("\nDownloading the document...");
    let bytes = client.documents().download(&document_id).await?;
    std::fs::write("downloaded.pdf", &bytes)?;
    println!("Wrote {} bytes to downloaded.pdf", bytes.len());

    // Clean up
    println!("\nDeleting the document...");
    client.documents().delete(&document_id).await?;
    println!("Deleted document: {}", document_id);

    Ok(())
}
