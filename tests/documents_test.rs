//! Integration tests for document operations.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use inkflow::{Client, ClientConfig, FieldType, InkflowError, Signature};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_client(mock_server: &MockServer) -> Client {
    Client::with_config(
        "test_api_key",
        ClientConfig {
            base_url: Some(mock_server.uri()),
            ..Default::default()
        },
    )
}

fn write_test_pdf(dir: &tempfile::TempDir, name: &str) -> String {
    let file_path = dir.path().join(name);
    std::fs::write(&file_path, b"%PDF-1.4 test document").unwrap();
    file_path.to_str().unwrap().to_string()
}

#[tokio::test]
async fn test_upload_returns_document_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "document_id": "c0880b21-5c1d-4a15-87b0-1e61b832a5f6"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file_path = write_test_pdf(&dir, "document.pdf");

    let client = mock_client(&mock_server);
    let document_id = client.documents().upload(&file_path).await.unwrap();
    assert_eq!(document_id, "c0880b21-5c1d-4a15-87b0-1e61b832a5f6");
}

#[tokio::test]
async fn test_upload_without_document_id_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok"
        })))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file_path = write_test_pdf(&dir, "document.pdf");

    let client = mock_client(&mock_server);
    let result = client.documents().upload(&file_path).await;
    assert!(matches!(result.unwrap_err(), InkflowError::Decode(_)));
}

#[tokio::test]
async fn test_upload_missing_file_is_an_io_error() {
    let mock_server = MockServer::start().await;
    let client = mock_client(&mock_server);

    let result = client.documents().upload("/no/such/file.pdf").await;
    assert!(matches!(result.unwrap_err(), InkflowError::Io(_)));
}

#[tokio::test]
async fn test_download_returns_raw_bytes() {
    let mock_server = MockServer::start().await;
    let body: &[u8] = b"%PDF-1.4 signed document bytes";

    Mock::given(method("GET"))
        .and(path("/v1/documents/doc-1"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server);
    let bytes = client.documents().download("doc-1").await.unwrap();
    assert_eq!(bytes, body);
}

#[tokio::test]
async fn test_delete_document() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/documents/doc-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server);
    client.documents().delete("doc-1").await.unwrap();
}

#[tokio::test]
async fn test_delete_nonexistent_document_surfaces_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/documents/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "Document not found"
        })))
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server);
    let result = client.documents().delete("missing").await;

    match result {
        Err(InkflowError::Api {
            status_code,
            message,
        }) => {
            assert_eq!(status_code, 404);
            assert_eq!(message, "Document not found");
        }
        _ => panic!("Expected Api error"),
    }
}

#[tokio::test]
async fn test_add_content_posts_base64_images() {
    let mock_server = MockServer::start().await;

    let image = vec![0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];
    let image_b64 = BASE64.encode(&image);

    Mock::given(method("POST"))
        .and(path("/v1/documents/doc-1/content"))
        .and(body_partial_json(serde_json::json!({
            "signatures": [{
                "page": 1,
                "rectangle": [0, 0, 200, 100],
                "image": image_b64
            }]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let signature = Signature {
        page: 1,
        rectangle: [0, 0, 200, 100],
        image,
        draw_coordinates: Some("[{\"lx\":202,\"ly\":76,\"mx\":202,\"my\":75}]".to_string()),
    };

    let client = mock_client(&mock_server);
    client
        .documents()
        .add_content("doc-1", &[signature])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_fields_are_retrievable_by_api_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/documents/doc-1/fields"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "document_fields": [
                {
                    "api_id": "d9fbf81b-cfa1-47cd-bc3e-3980131af733",
                    "type": "TEXT",
                    "page": 0,
                    "rectangle": [100, 120, 300, 160],
                    "status": "COMPLETED",
                    "content": "Sample content 1",
                    "submitted_content": "Sample content 1",
                    "required": true,
                    "read_only": false,
                    "pdf_field": false,
                    "alignment": "LEFT"
                },
                {
                    "api_id": "00b25bcc-7909-4174-b18c-04ae2fb01775",
                    "type": "SIGNATURE",
                    "page": 1,
                    "rectangle": [100, 400, 300, 460],
                    "status": "WAITING",
                    "required": true
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server);
    let fields = client.documents().fields("doc-1").await.unwrap();

    assert_eq!(fields.len(), 2);

    let first = fields.get("d9fbf81b-cfa1-47cd-bc3e-3980131af733").unwrap();
    let second = fields.get("00b25bcc-7909-4174-b18c-04ae2fb01775").unwrap();
    assert_ne!(first.api_id, second.api_id);
    assert_eq!(first.field_type, FieldType::Text);
    assert_eq!(first.submitted_content.as_deref(), Some("Sample content 1"));
    assert_eq!(second.field_type, FieldType::Signature);
    assert_eq!(second.submitted_content, None);
}
