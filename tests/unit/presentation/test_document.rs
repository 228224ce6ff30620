use crate::fixtures::{self, DOCUMENT_ID, PACKAGE_ID};
use serde_json::json;
use signinghub_client::prelude::*;

fn fields_path(page: u32) -> String {
    format!("/v4/packages/{PACKAGE_ID}/documents/{DOCUMENT_ID}/fields/{page}")
}

fn hydrated() -> Document {
    let mut document = Document::new(PACKAGE_ID, DOCUMENT_ID);
    document
        .set_document_details(&fixtures::workflow_details_json())
        .unwrap();
    document
}

#[test]
fn test_set_document_details() {
    let document = hydrated();
    assert_eq!(document.name(), Some("contract.pdf"));
    assert_eq!(document.document_type(), Some("PDF"));
    assert_eq!(document.order(), Some(1));
    assert_eq!(document.width(), Some(595.0));
    assert_eq!(document.page_count(), 2);
    assert_eq!(document.certify().enabled, Some(false));
    assert_eq!(document.locked(), Some(false));

    let numbers: Vec<u32> = document.pages().iter().map(Page::number).collect();
    assert_eq!(numbers, vec![1, 2]);
    assert!(document.pages().iter().all(|page| page.fields().is_empty()));
    assert!(document.page_properties().is_empty());
}

#[test]
fn test_set_document_details_unknown_document() {
    let mut document = Document::new(PACKAGE_ID, 999);
    let result = document.set_document_details(&fixtures::workflow_details_json());
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
    assert_eq!(document.page_count(), 0);
}

#[test]
fn test_set_document_details_picks_matching_entry() {
    let json = fixtures::workflow_details_with(
        vec![
            fixtures::document_json(1, 5),
            fixtures::document_json(DOCUMENT_ID, 3),
        ],
        vec![],
    );
    let mut document = Document::new(PACKAGE_ID, DOCUMENT_ID);
    document.set_document_details(&json).unwrap();
    assert_eq!(document.page_count(), 3);
    assert_eq!(document.pages().len(), 3);
}

#[tokio::test]
async fn test_get_document_fields_validates_page() {
    let connection = fixtures::connection("http://127.0.0.1:9");
    let document = hydrated();
    assert!(matches!(
        document.get_document_fields(&connection, 0).await,
        Err(AppError::InvalidInput(_))
    ));
    assert!(matches!(
        document.get_document_fields(&connection, 3).await,
        Err(AppError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn test_fetch_page_fields_fills_every_page() {
    let mut server = mockito::Server::new_async().await;
    let first = server
        .mock("GET", fields_path(1).as_str())
        .with_status(200)
        .with_body(fixtures::fields_json("Signature-1").to_string())
        .create_async()
        .await;
    let second = server
        .mock("GET", fields_path(2).as_str())
        .with_status(200)
        .with_body(fixtures::fields_json("Signature-2").to_string())
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    let mut document = hydrated();
    document.fetch_page_fields(&connection).await.unwrap();

    first.assert_async().await;
    second.assert_async().await;
    assert_eq!(document.page_properties().len(), 2);
    assert_eq!(
        document.pages()[1].fields()["signature"][0]["field_name"],
        json!("Signature-2")
    );
}

#[tokio::test]
async fn test_fetch_page_fields_is_all_or_nothing() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", fields_path(1).as_str())
        .with_status(200)
        .with_body(fixtures::fields_json("Signature-1").to_string())
        .create_async()
        .await;
    server
        .mock("GET", fields_path(2).as_str())
        .with_status(500)
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    let mut document = hydrated();
    let result = document.fetch_page_fields(&connection).await;

    assert!(matches!(result, Err(AppError::RemoteStatus { .. })));
    assert!(document.page_properties().is_empty());
    assert!(document.pages()[0].fields().is_empty());
}

#[tokio::test]
async fn test_page_fetch_clears_fields_on_failure() {
    let mut server = mockito::Server::new_async().await;
    let ok = server
        .mock("GET", fields_path(1).as_str())
        .with_status(200)
        .with_body(fixtures::fields_json("Signature-1").to_string())
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    let mut page = Page::new(PACKAGE_ID, DOCUMENT_ID, 1);
    page.fetch_fields(&connection).await.unwrap();
    ok.assert_async().await;
    assert!(!page.fields().is_empty());

    ok.remove_async().await;
    server
        .mock("GET", fields_path(1).as_str())
        .with_status(404)
        .create_async()
        .await;
    assert!(page.fetch_fields(&connection).await.is_err());
    assert!(page.fields().is_empty());
}

#[tokio::test]
async fn test_page_fetch_rejects_non_object_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", fields_path(1).as_str())
        .with_status(200)
        .with_body("[1, 2, 3]")
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    let mut page = Page::new(PACKAGE_ID, DOCUMENT_ID, 1);
    assert!(matches!(
        page.fetch_fields(&connection).await,
        Err(AppError::Deserialization(_))
    ));
}

#[tokio::test]
async fn test_refresh_reloads_from_workflow() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", format!("/v4/packages/{PACKAGE_ID}/workflow").as_str())
        .with_status(200)
        .with_body(fixtures::workflow_details_json().to_string())
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    let mut document = Document::new(PACKAGE_ID, DOCUMENT_ID);
    document.refresh(&connection).await.unwrap();

    mock.assert_async().await;
    assert_eq!(document.page_count(), 2);
}
