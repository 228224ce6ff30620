use crate::fixtures::{self, DOCUMENT_ID, PACKAGE_ID};
use serde_json::json;
use signinghub_client::prelude::*;

#[test]
fn test_new_package_validates_id() {
    assert_eq!(Package::new(12).unwrap().id(), Some(12));
    assert!(matches!(Package::new(0), Err(AppError::InvalidInput(_))));
    assert!(matches!(Package::new(-3), Err(AppError::InvalidInput(_))));
    assert_eq!(Package::from_id_str(" 77 ").unwrap().id(), Some(77));
    assert!(Package::from_id_str("abc").is_err());
}

#[test]
fn test_hydration_from_workflow_details() {
    let package = Package::from_workflow_details(&fixtures::workflow_details_json()).unwrap();

    assert_eq!(package.id(), Some(PACKAGE_ID));
    assert_eq!(package.name(), Some("Supplier agreement"));
    assert_eq!(package.status(), Some(PackageStatus::Draft));
    assert_eq!(package.owner().map(User::email), Some("owner@example.com"));
    assert_eq!(package.owner_name(), Some("Olivia Owner"));
    assert_eq!(package.next_signer_email(), ["alice@example.com".to_string()]);
    assert_eq!(package.workflow_type(), Some("SERIAL"));
    assert_eq!(package.workflow_mode(), Some("SHARE_WITH_OTHERS"));
    assert_eq!(package.continue_on_decline(), Some(false));
    assert_eq!(package.post_process(), &json!({"enabled": false}));

    assert_eq!(package.documents().len(), 1);
    let document = package.document(DOCUMENT_ID).unwrap();
    assert_eq!(document.package_id(), PACKAGE_ID);
    assert_eq!(document.page_count(), 2);
    assert_eq!(document.pages().len(), 2);
}

#[test]
fn test_recipients_are_split_by_role() {
    let package = Package::from_workflow_details(&fixtures::workflow_details_json()).unwrap();

    assert_eq!(package.users().len(), 5);
    assert_eq!(package.signers().len(), 2);
    assert_eq!(package.reviewers().len(), 1);
    assert_eq!(package.carbon_copy().len(), 1);

    let signers = package.signers();
    assert!(signers[0].is_user());
    assert_eq!(signers[0].email(), Some("alice@example.com"));
    assert!(signers[1].is_group());
    assert_eq!(signers[1].group_name(), Some("Legal"));

    let editor = &package.users()[4];
    assert!(editor.is_placeholder());
    assert_eq!(editor.role(), WorkflowRole::Editor);
    assert_eq!(editor.placeholder(), Some("Witness"));
}

#[test]
fn test_hydration_is_idempotent() {
    let json = fixtures::workflow_details_json();
    let mut package = Package::from_workflow_details(&json).unwrap();
    let first = package.clone();
    package.set_workflow_details(&json).unwrap();
    assert_eq!(package, first);
    assert_eq!(package.users().len(), 5);
}

#[test]
fn test_each_document_gets_its_own_pages() {
    let json = fixtures::workflow_details_with(
        vec![
            fixtures::document_json(11, 3),
            fixtures::document_json(12, 1),
            fixtures::document_json(13, 4),
        ],
        vec![
            fixtures::user_entry("alice@example.com", "Alice", "SIGNER", 1),
            fixtures::user_entry("bob@example.com", "Bob", "REVIEWER", 2),
            fixtures::user_entry("carol@example.com", "Carol", "CARBON_COPY", 3),
        ],
    );
    let package = Package::from_workflow_details(&json).unwrap();

    let ids: Vec<i64> = package.documents().iter().map(Document::id).collect();
    assert_eq!(ids, vec![11, 12, 13]);
    let page_lens: Vec<usize> = package.documents().iter().map(|d| d.pages().len()).collect();
    assert_eq!(page_lens, vec![3, 1, 4]);
    for document in package.documents() {
        assert_eq!(document.pages().len(), document.page_count() as usize);
    }
    assert_eq!(package.users().len(), 3);
}

#[test]
fn test_rehydration_drops_stale_entries() {
    let large = fixtures::workflow_details_with(
        vec![
            fixtures::document_json(11, 3),
            fixtures::document_json(12, 1),
            fixtures::document_json(13, 4),
        ],
        vec![
            fixtures::user_entry("alice@example.com", "Alice", "SIGNER", 1),
            fixtures::user_entry("bob@example.com", "Bob", "REVIEWER", 2),
            fixtures::group_entry("Legal", "CARBON_COPY", 3),
        ],
    );
    let mut package = Package::from_workflow_details(&large).unwrap();
    assert_eq!(package.documents().len(), 3);
    assert_eq!(package.signers().len(), 1);

    let small = fixtures::workflow_details_with(vec![fixtures::document_json(14, 2)], vec![]);
    package.set_workflow_details(&small).unwrap();

    assert_eq!(package.documents().len(), 1);
    assert_eq!(package.documents()[0].id(), 14);
    assert_eq!(package.documents()[0].pages().len(), 2);
    assert!(package.document(11).is_none());
    assert!(package.users().is_empty());
    assert!(package.signers().is_empty());
    assert!(package.reviewers().is_empty());
    assert!(package.carbon_copy().is_empty());
}

#[test]
fn test_unknown_status_and_role_fall_back() {
    let mut json = fixtures::workflow_details_with(
        vec![],
        vec![fixtures::user_entry("x@example.com", "X", "MEETING_HOST", 1)],
    );
    json["package_status"] = json!("ARCHIVED");

    let package = Package::from_workflow_details(&json).unwrap();
    assert_eq!(package.status(), Some(PackageStatus::Unknown));
    assert_eq!(package.users()[0].role(), WorkflowRole::Other);
    assert!(package.signers().is_empty());
}

#[test]
fn test_missing_key_leaves_package_unchanged() {
    let mut package = Package::from_workflow_details(&fixtures::workflow_details_json()).unwrap();
    let before = package.clone();

    let mut broken = fixtures::workflow_details_json();
    broken.as_object_mut().unwrap().remove("folder");
    assert!(matches!(
        package.set_workflow_details(&broken),
        Err(AppError::Deserialization(_))
    ));
    assert_eq!(package, before);
}

#[test]
fn test_entry_with_user_and_group_is_rejected() {
    let mut entry = fixtures::user_entry("a@example.com", "A", "SIGNER", 1);
    entry["group_name"] = json!("Legal");
    let json = fixtures::workflow_details_with(vec![], vec![entry]);

    let mut package = Package::new(PACKAGE_ID).unwrap();
    assert!(package.set_workflow_details(&json).is_err());
    assert!(package.users().is_empty());
}

#[test]
fn test_set_workflow_users_accepts_both_shapes() {
    let mut package = Package::from_workflow_details(&fixtures::workflow_details_json()).unwrap();

    let list = json!([fixtures::user_entry("z@example.com", "Z", "REVIEWER", 1)]);
    package.set_workflow_users(&list).unwrap();
    assert_eq!(package.users().len(), 1);
    assert_eq!(package.reviewers().len(), 1);
    assert!(package.signers().is_empty());

    let wrapped = json!({"users": [
        fixtures::user_entry("a@example.com", "A", "SIGNER", 1),
        fixtures::user_entry("b@example.com", "B", "SIGNER", 2)
    ]});
    package.set_workflow_users(&wrapped).unwrap();
    assert_eq!(package.signers().len(), 2);
    assert!(package.reviewers().is_empty());
    assert_eq!(package.name(), Some("Supplier agreement"));
}

#[tokio::test]
async fn test_fetch_workflow_details() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", format!("/v4/packages/{PACKAGE_ID}/workflow").as_str())
        .match_header("authorization", fixtures::bearer().as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(fixtures::workflow_details_json().to_string())
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    let mut package = Package::new(PACKAGE_ID).unwrap();
    let response = package.fetch_workflow_details(&connection).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.status(), 200);
    assert_eq!(package.documents().len(), 1);
    assert_eq!(package.signers().len(), 2);
}

#[tokio::test]
async fn test_fetch_workflow_details_error_keeps_state() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", format!("/v4/packages/{PACKAGE_ID}/workflow").as_str())
        .with_status(403)
        .with_body(json!({"Message": "forbidden"}).to_string())
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    let mut package = Package::from_workflow_details(&fixtures::workflow_details_json()).unwrap();
    let before = package.clone();

    let result = package.fetch_workflow_details(&connection).await;
    match result {
        Err(AppError::RemoteStatus { status, .. }) => assert_eq!(status, 403),
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(package, before);
}

#[tokio::test]
async fn test_fetch_workflow_details_empty_body() {
    let mut server = mockito::Server::new_async().await;
    let path = format!("/v4/packages/{PACKAGE_ID}/workflow");
    let empty = server
        .mock("GET", path.as_str())
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    let mut package = Package::new(PACKAGE_ID).unwrap();
    assert!(matches!(
        package.fetch_workflow_details(&connection).await,
        Err(AppError::EmptyResponse(_))
    ));
    empty.assert_async().await;
    assert_eq!(package.name(), None);
}

#[tokio::test]
async fn test_fetch_without_id_sends_nothing() {
    let connection = fixtures::connection("http://127.0.0.1:9");
    let mut package = Package::default();
    assert!(matches!(
        package.fetch_workflow_details(&connection).await,
        Err(AppError::MissingField(_))
    ));
}

#[tokio::test]
async fn test_fetch_workflow_users() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v4/packages/42/workflow/users")
        .with_status(200)
        .with_body(json!([fixtures::group_entry("Finance", "CARBON_COPY", 1)]).to_string())
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    let mut package = Package::new(42).unwrap();
    package.fetch_workflow_users(&connection).await.unwrap();

    mock.assert_async().await;
    assert_eq!(package.carbon_copy().len(), 1);
    assert!(package.carbon_copy()[0].is_group());
}

#[tokio::test]
async fn test_share_requires_draft() {
    let mut server = mockito::Server::new_async().await;
    let share = server
        .mock("POST", format!("/v4/packages/{PACKAGE_ID}/workflow").as_str())
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    let draft = Package::from_workflow_details(&fixtures::workflow_details_json()).unwrap();
    draft.share(&connection).await.unwrap();

    let mut json = fixtures::workflow_details_json();
    json["package_status"] = json!("SIGNED");
    let signed = Package::from_workflow_details(&json).unwrap();
    assert!(matches!(
        signed.share(&connection).await,
        Err(AppError::InvalidState(_))
    ));

    let bare = Package::new(PACKAGE_ID).unwrap();
    assert!(matches!(
        bare.share(&connection).await,
        Err(AppError::InvalidState(_))
    ));

    share.assert_async().await;
}
