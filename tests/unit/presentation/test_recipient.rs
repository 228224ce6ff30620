use signinghub_client::prelude::*;

#[test]
fn test_user_recipient() {
    let recipient = Recipient::user("a@example.com", Some("A".to_string()), WorkflowRole::Signer);
    assert_eq!(recipient.kind(), RecipientKind::User);
    assert!(recipient.is_user());
    assert!(!recipient.is_group());
    assert_eq!(recipient.email(), Some("a@example.com"));
    assert_eq!(recipient.name(), Some("A"));
    assert_eq!(recipient.group_name(), None);
    assert_eq!(recipient.role(), WorkflowRole::Signer);
}

#[test]
fn test_group_recipient() {
    let recipient = Recipient::group("Legal", WorkflowRole::Reviewer);
    assert_eq!(recipient.kind(), RecipientKind::Group);
    assert!(recipient.is_group());
    assert_eq!(recipient.email(), None);
    assert_eq!(recipient.group_name(), Some("Legal"));
    assert_eq!(recipient.order(), None);
}

#[test]
fn test_role_wire_names() {
    assert_eq!(
        serde_json::to_value(WorkflowRole::CarbonCopy).unwrap(),
        serde_json::json!("CARBON_COPY")
    );
    assert_eq!(
        serde_json::from_str::<WorkflowRole>("\"INPERSON_HOST\"").unwrap(),
        WorkflowRole::InpersonHost
    );
    assert_eq!(
        serde_json::from_str::<WorkflowRole>("\"NOTARY\"").unwrap(),
        WorkflowRole::Other
    );
}
