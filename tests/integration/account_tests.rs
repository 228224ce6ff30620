use crate::common;
use serde_json::Value;
use signinghub_client::prelude::*;
use tracing::info;

#[tokio::test]
#[ignore]
async fn test_get_account() {
    let connection = common::authenticated_connection().await;
    let response = connection.get_account().await.unwrap();

    assert!(response.is_success(), "Account request failed: {}", response.text());
    let account: Value = response.json().unwrap();
    info!("Account: {}", account);
}

#[tokio::test]
#[ignore]
async fn test_general_profile() {
    let connection = common::authenticated_connection().await;
    let username = connection.credentials().username.clone().unwrap_or_default();

    let mut user = User::new(username.clone(), None).unwrap();
    user.fetch_general_profile_information(&connection)
        .await
        .unwrap();

    assert!(user.email().eq_ignore_ascii_case(&username));
    info!("Profile loaded for {:?}", user.name());
}

#[tokio::test]
#[ignore]
async fn test_listings() {
    let connection = common::authenticated_connection().await;

    let packages = connection
        .get_packages("ALL", 1, 10, &ListingOptions::default())
        .await
        .unwrap();
    assert!(packages.is_success());

    let contacts = connection
        .get_contacts(10, 1, &ListingOptions::default())
        .await
        .unwrap();
    assert!(contacts.is_success());
}
