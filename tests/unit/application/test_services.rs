use crate::fixtures::{self, bearer};
use mockito::Matcher;
use serde_json::json;
use signinghub_client::prelude::*;

#[tokio::test]
async fn test_add_package_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v4/packages")
        .match_header("authorization", bearer().as_str())
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"package_name": "Contracts"})))
        .with_status(200)
        .with_body(json!({"package_id": 42}).to_string())
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    let response = connection.add_package("Contracts", None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.json::<serde_json::Value>().unwrap()["package_id"], 42);
}

#[tokio::test]
async fn test_wrappers_return_error_statuses_unchanged() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/v4/packages/42")
        .with_status(404)
        .with_body(json!({"Message": "not found"}).to_string())
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    let response = connection.delete_package(42).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.status(), 404);
    assert!(matches!(
        response.error_for_status(),
        Err(AppError::RemoteStatus { .. })
    ));
}

#[tokio::test]
async fn test_no_bearer_without_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v4/account")
        .match_header("authorization", Matcher::Missing)
        .with_status(401)
        .create_async()
        .await;

    let connection = Connection::builder(server.url()).build().unwrap();
    let response = connection.get_account().await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_about_is_anonymous() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v4/about")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(json!({"version": "8.0.0"}).to_string())
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    connection.about_signinghub().await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_packages_listing_headers() {
    let mut server = mockito::Server::new_async().await;
    let with_headers = server
        .mock("GET", "/v4/packages/ALL/2/25")
        .match_header("x-search-text", "invoice")
        .match_header("x-enterprise", "true")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    let options = ListingOptions::default()
        .with_search_text("invoice")
        .with_enterprise(true);
    connection.get_packages("ALL", 2, 25, &options).await.unwrap();
    with_headers.assert_async().await;

    let without_headers = server
        .mock("GET", "/v4/packages/DRAFT/1/10")
        .match_header("x-search-text", Matcher::Missing)
        .match_header("x-enterprise", Matcher::Missing)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    connection
        .get_packages("DRAFT", 1, 10, &ListingOptions::default())
        .await
        .unwrap();
    without_headers.assert_async().await;
}

#[tokio::test]
async fn test_upload_document_bytes() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v4/packages/42/documents")
        .match_header("content-type", "application/octet-stream")
        .match_header("x-file-name", "contract.pdf")
        .match_header("x-source", "API")
        .match_header("x-convert-document", "true")
        .match_body("%PDF-1.7")
        .with_status(200)
        .with_body(json!({"documentid": 7}).to_string())
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    let options = UploadOptions::default().with_convert_document(true);
    connection
        .upload_document_bytes(42, "contract.pdf", b"%PDF-1.7".to_vec(), &options)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_upload_document_from_file() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v4/packages/42/documents")
        .match_header("x-file-name", "upload-test.pdf")
        .match_header("x-convert-document", Matcher::Missing)
        .match_body("file content")
        .with_status(200)
        .create_async()
        .await;

    let path = std::env::temp_dir().join("upload-test.pdf");
    tokio::fs::write(&path, b"file content").await.unwrap();

    let connection = fixtures::connection(&server.url());
    connection
        .upload_document(42, &path, &UploadOptions::default())
        .await
        .unwrap();
    mock.assert_async().await;
    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn test_upload_document_missing_file() {
    let connection = fixtures::connection("http://127.0.0.1:9");
    let path = std::env::temp_dir().join("does-not-exist-signinghub.pdf");
    let result = connection
        .upload_document(42, &path, &UploadOptions::default())
        .await;
    assert!(matches!(result, Err(AppError::Io(_))));
}

#[tokio::test]
async fn test_upload_document_rejects_empty_file_name() {
    let connection = fixtures::connection("http://127.0.0.1:9");
    let result = connection
        .upload_document_bytes(42, "", vec![1, 2, 3], &UploadOptions::default())
        .await;
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[tokio::test]
async fn test_download_document_with_access_headers() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v4/packages/42/documents/7/base64")
        .match_header("accept", "application/octet-stream")
        .match_header("x-password", "open-sesame")
        .match_header("x-otp", Matcher::Missing)
        .with_status(200)
        .with_body("JVBERi0=")
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    let access = DocumentAccessOptions::default().with_password("open-sesame");
    let response = connection
        .download_document(42, 7, true, &access)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.bytes(), b"JVBERi0=");
}

#[tokio::test]
async fn test_document_image_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v4/packages/42/documents/7/images/3/high")
        .match_header("accept", "image/png")
        .with_status(200)
        .with_body(vec![0x89, b'P', b'N', b'G'])
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    connection
        .get_document_image(42, 7, 3, "high", false, &DocumentAccessOptions::default())
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_open_and_close_package() {
    let mut server = mockito::Server::new_async().await;
    let open = server
        .mock("GET", "/v4/packages/42/open")
        .match_header("x-otp", "998877")
        .with_status(200)
        .create_async()
        .await;
    let close = server
        .mock("GET", "/v4/packages/42/close")
        .with_status(200)
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    let access = DocumentAccessOptions::default().with_otp("998877");
    connection.open_document_package(42, &access).await.unwrap();
    connection.close_document_package(42).await.unwrap();

    open.assert_async().await;
    close.assert_async().await;
}

#[tokio::test]
async fn test_add_users_to_workflow_sends_array() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v4/packages/42/workflow/users")
        .match_body(Matcher::Json(json!([
            {"user_email": "a@example.com", "user_name": "A", "role": "SIGNER"},
            {"user_email": "b@example.com", "user_name": "B", "role": "REVIEWER", "email_notification": false}
        ])))
        .with_status(200)
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    let users = vec![
        WorkflowUserRequest::new("a@example.com", "A", WorkflowRole::Signer),
        WorkflowUserRequest::new("b@example.com", "B", WorkflowRole::Reviewer)
            .with_email_notification(false),
    ];
    connection.add_users_to_workflow(42, &users).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_workflow_recipient_paths() {
    let mut server = mockito::Server::new_async().await;
    let reorder = server
        .mock("PUT", "/v4/packages/42/workflow/2/reorder")
        .match_body(Matcher::Json(json!({"order": 1})))
        .with_status(200)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/v4/packages/42/workflow/3")
        .with_status(200)
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    connection.update_workflow_users_order(42, 2, 1).await.unwrap();
    connection.delete_workflow_user(42, 3).await.unwrap();

    reorder.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_update_post_processing_is_a_get() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v4/packages/42/workflow/post_process")
        .with_status(200)
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    connection.update_post_processing(42).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_add_signature_field_requires_v4() {
    let connection = fixtures::connection_v3("http://127.0.0.1:9");
    let result = connection
        .add_signature_field(42, 7, &FieldPlacement::new(1, 1))
        .await;
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[tokio::test]
async fn test_add_signature_field_on_v4() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v4/packages/42/documents/7/fields/signature")
        .match_body(Matcher::Json(json!({
            "order": 1,
            "page_no": 1,
            "dimensions": {}
        })))
        .with_status(200)
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    connection
        .add_signature_field(42, 7, &FieldPlacement::new(1, 1))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_sign_document_requires_server_on_v4() {
    let connection = fixtures::connection("http://127.0.0.1:9");
    let signature = SignDocumentRequest::new("Signature-1", "aGVsbG8=");
    match connection.sign_document(42, 7, &signature).await {
        Err(AppError::MissingField(field)) => assert_eq!(field, "signing_server"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_sign_document_on_v3_with_otp() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v3/packages/42/documents/7/sign")
        .match_header("x-otp", "123456")
        .match_body(Matcher::Json(json!({
            "field_name": "Signature-1",
            "hand_signature_image": "aGVsbG8="
        })))
        .with_status(200)
        .create_async()
        .await;

    let connection = fixtures::connection_v3(&server.url());
    let signature = SignDocumentRequest::new("Signature-1", "aGVsbG8=").with_otp("123456");
    connection.sign_document(42, 7, &signature).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_assign_document_field_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/v4/packages/42/documents/7/fields/assign")
        .match_body(Matcher::Json(json!([{"field_name": "Text-1", "order": 2}])))
        .with_status(200)
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    connection
        .assign_document_field(42, 7, "Text-1", 2)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_recall_document_deletes_workflow() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/v4/packages/42/workflow")
        .with_status(200)
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    connection.recall_document(42).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_otp_login_without_mobile_number() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v4/authentication/otp")
        .match_body(Matcher::Json(json!({})))
        .with_status(200)
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    connection.otp_login_authentication(None).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_register_free_trial_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v4/account")
        .match_body(Matcher::Json(json!({
            "user_email": "new@example.com",
            "user_name": "New User",
            "company_name": "Example Ltd",
            "invitation": {"enterprise_name": "Example"}
        })))
        .with_status(200)
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    let options = RegisterFreeTrialOptions {
        company_name: Some("Example Ltd".to_string()),
        invitation: Invitation {
            enterprise_name: Some("Example".to_string()),
        },
        ..RegisterFreeTrialOptions::default()
    };
    connection
        .register_user_free_trial("new@example.com", "New User", &options)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_activity_log_page_comes_first() {
    let mut server = mockito::Server::new_async().await;
    let logs = server
        .mock("GET", "/v4/account/log/3/50")
        .with_status(200)
        .create_async()
        .await;
    let details = server
        .mock("GET", "/v4/account/log/99/details")
        .match_header("x-base64", "true")
        .with_status(200)
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    connection.get_user_activity_logs(50, 3).await.unwrap();
    connection.get_user_activity_logs_details(99, true).await.unwrap();

    logs.assert_async().await;
    details.assert_async().await;
}

#[tokio::test]
async fn test_password_policy_and_invitations_are_gets() {
    let mut server = mockito::Server::new_async().await;
    let policy = server
        .mock("GET", "/v4/account/password_policy")
        .with_status(200)
        .create_async()
        .await;
    let invitations = server
        .mock("GET", "/v4/account/invitations")
        .with_status(200)
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    connection.get_account_password_policy().await.unwrap();
    connection.get_account_invitations().await.unwrap();

    policy.assert_async().await;
    invitations.assert_async().await;
}

#[tokio::test]
async fn test_enterprise_group_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/v4/enterprise/groups/5")
        .match_body(Matcher::Json(json!({
            "Name": "Legal",
            "Members": [{"UserEmail": "a@example.com"}]
        })))
        .with_status(200)
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    let group = GroupRequest::new("Legal", vec![GroupMemberRequest::new("a@example.com", None)]);
    connection.update_enterprise_group(5, &group).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_invite_enterprise_user_optional_role() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v4/enterprise/invitations")
        .match_body(Matcher::Json(json!({
            "user_email": "a@example.com",
            "user_name": "A"
        })))
        .with_status(200)
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    connection
        .invite_enterprise_user("a@example.com", "A", None)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_settings_listing_paths() {
    let mut server = mockito::Server::new_async().await;
    let contacts = server
        .mock("GET", "/v4/settings/contacts/20/1")
        .match_header("x-search-text", "smith")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    let templates = server
        .mock("GET", "/v4/settings/templates/10/2")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    let search = ListingOptions::default().with_search_text("smith");
    connection.get_contacts(20, 1, &search).await.unwrap();
    connection
        .get_templates(10, 2, &ListingOptions::default())
        .await
        .unwrap();

    contacts.assert_async().await;
    templates.assert_async().await;
}

#[tokio::test]
async fn test_profile_picture_base64_suffix() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v4/settings/profile/general/photo/base64")
        .with_status(200)
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    connection.get_profile_picture(true).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_transport_failure_is_a_network_error() {
    let connection = fixtures::connection("http://127.0.0.1:1");
    let result = connection.get_workflow_details(42).await;
    assert!(matches!(result, Err(AppError::Network(_))));
}

#[tokio::test]
async fn test_update_certificate_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/v4/enterprise/signingcertificates/9")
        .match_body(Matcher::Json(json!({
            "user_email": "alice@example.com",
            "capacity_name": "Buyer",
            "certificate_alias": "alice-2026",
            "level_of_assurance": "ADVANCED_ELECTRONIC_SIGNATURE",
            "isDefault": true
        })))
        .with_status(200)
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    let certificate = CertificateUpdate {
        user_email: "alice@example.com".to_string(),
        capacity_name: "Buyer".to_string(),
        certificate_alias: "alice-2026".to_string(),
        level_of_assurance: "ADVANCED_ELECTRONIC_SIGNATURE".to_string(),
        is_default: true,
    };
    connection.update_certificate(9, &certificate).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_group_and_placeholder_updates() {
    let mut server = mockito::Server::new_async().await;
    let group = server
        .mock("PUT", "/v4/enterprise/packages/42/workflow/3/group")
        .match_body(Matcher::Json(json!({"role": "REVIEWER", "signing_order": 2})))
        .with_status(200)
        .create_async()
        .await;
    let placeholder = server
        .mock("PUT", "/v4/enterprise/packages/42/workflow/5/placeholder")
        .match_body(Matcher::Json(json!({"placeholder": "Witness", "email_notification": false})))
        .with_status(200)
        .create_async()
        .await;
    let certificate = server
        .mock("GET", "/v4/packages/42/log/88/details/key-1")
        .with_status(200)
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    let group_update = UpdateWorkflowGroupOptions {
        role: Some(WorkflowRole::Reviewer),
        signing_order: Some(2),
        ..UpdateWorkflowGroupOptions::default()
    };
    connection.update_workflow_group(42, 3, &group_update).await.unwrap();
    let placeholder_update = UpdatePlaceholderOptions {
        placeholder: Some("Witness".to_string()),
        email_notification: Some(false),
        ..UpdatePlaceholderOptions::default()
    };
    connection
        .update_placeholder(42, 5, &placeholder_update)
        .await
        .unwrap();
    connection
        .get_certificate_saved_in_workflow_history(42, 88, "key-1")
        .await
        .unwrap();

    group.assert_async().await;
    placeholder.assert_async().await;
    certificate.assert_async().await;
}

#[tokio::test]
async fn test_profile_updates() {
    let mut server = mockito::Server::new_async().await;
    let photo = server
        .mock("PUT", "/v4/settings/profile/general/photo/base64")
        .match_body(Matcher::Json(json!({"photo": "cGhvdG8="})))
        .with_status(200)
        .create_async()
        .await;
    let security = server
        .mock("PUT", "/v4/settings/profile/security")
        .match_body(Matcher::Json(json!({
            "password": "secret",
            "question": "First pet?",
            "answer": "Rex"
        })))
        .with_status(200)
        .create_async()
        .await;
    let locale = server
        .mock("PUT", "/v4/settings/profile/locale")
        .match_body(Matcher::Json(json!({
            "country": "GB",
            "timezone": "Europe/London",
            "language": "en-US"
        })))
        .with_status(200)
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    connection.update_profile_picture("cGhvdG8=").await.unwrap();
    connection
        .update_security_settings("secret", "First pet?", "Rex")
        .await
        .unwrap();
    connection
        .update_locale_settings("GB", "Europe/London", "en-US")
        .await
        .unwrap();

    photo.assert_async().await;
    security.assert_async().await;
    locale.assert_async().await;
}

#[tokio::test]
async fn test_signature_appearance_paths() {
    let mut server = mockito::Server::new_async().await;
    let mut mocks = Vec::new();
    for (method, path) in [
        ("GET", "/v4/settings/signatures/appearance/design/DETAILED/preview"),
        ("GET", "/v4/settings/signatures/appearance/hand_signature/web/text"),
        ("GET", "/v4/settings/signatures/appearance/hand_signature/mobile/upload"),
        ("GET", "/v4/settings/signatures/appearance/initials/upload"),
        ("GET", "/v4/settings/signatures/appearance/initials/text"),
        ("PUT", "/v4/settings/signatures/appearance/design"),
        ("PUT", "/v4/settings/signatures/metadata"),
    ] {
        let mock = server
            .mock(method, path)
            .with_status(200)
            .create_async()
            .await;
        mocks.push(mock);
    }
    let browser = server
        .mock("PUT", "/v4/settings/signatures/appearance/browser")
        .match_body(Matcher::Json(json!({"default_method": "TEXT", "text_value": "Alice"})))
        .with_status(200)
        .create_async()
        .await;
    let initials = server
        .mock("PUT", "/v4/settings/signatures/appearance/initials")
        .match_body(Matcher::Json(json!({
            "default_method": "UPLOAD",
            "upload_image": "aW5pdGlhbHM="
        })))
        .with_status(200)
        .create_async()
        .await;

    let connection = fixtures::connection(&server.url());
    connection.get_signature_appearance("DETAILED").await.unwrap();
    connection
        .get_hand_signature_text(SignatureDevice::Web)
        .await
        .unwrap();
    connection
        .get_hand_signature_upload(SignatureDevice::Mobile)
        .await
        .unwrap();
    connection.get_initials_for_upload_option().await.unwrap();
    connection.get_initials_for_text_option().await.unwrap();
    connection
        .update_signature_appearance_design("DETAILED")
        .await
        .unwrap();
    let metadata = SignatureMetadataUpdate {
        signing_reason: Some("Approval".to_string()),
        ..SignatureMetadataUpdate::default()
    };
    connection
        .update_signature_settings_metadata(&metadata)
        .await
        .unwrap();
    connection
        .update_hand_signature(
            SignatureDevice::Web,
            &AppearanceUpdate::new("TEXT").with_text_value("Alice"),
        )
        .await
        .unwrap();
    connection
        .update_initials_appearance(
            &AppearanceUpdate::new("UPLOAD").with_upload_image("aW5pdGlhbHM="),
        )
        .await
        .unwrap();

    for mock in mocks {
        mock.assert_async().await;
    }
    browser.assert_async().await;
    initials.assert_async().await;
}
