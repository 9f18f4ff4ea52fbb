//! User creation and listing tests.

use serde_json::json;
use users_tests::{create_test_client, unique_username, with_username};

#[tokio::test]
async fn test_create_and_list_user() {
    let client = create_test_client().expect("Failed to create client");
    let username = unique_username("user");

    let created = client
        .create_user(&username)
        .await
        .expect("Failed to create user");
    assert_eq!(created.username, username);

    let users = client.list_users().await.expect("Failed to list users");
    let matching = with_username(&users, &username);
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].id, created.id);
}

#[tokio::test]
async fn test_create_two_users_distinct_ids() {
    let client = create_test_client().expect("Failed to create client");

    let first = client
        .create_user(&unique_username("first"))
        .await
        .expect("Failed to create first user");
    let second = client
        .create_user(&unique_username("second"))
        .await
        .expect("Failed to create second user");

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_create_user_missing_username_rejected() {
    let client = create_test_client().expect("Failed to create client");
    let marker = unique_username("rejected");

    let result = client.create_user_raw(&json!({ "name": marker })).await;
    let err = result.expect_err("Missing username should be rejected");
    assert_eq!(err.status(), Some(400));

    let users = client.list_users().await.expect("Failed to list users");
    assert!(with_username(&users, &marker).is_empty());
}

#[tokio::test]
async fn test_create_user_wrong_type_rejected() {
    let client = create_test_client().expect("Failed to create client");

    let result = client.create_user_raw(&json!({ "username": 42 })).await;
    let err = result.expect_err("Numeric username should be rejected");
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_list_users_ordered_by_id() {
    let client = create_test_client().expect("Failed to create client");
    client
        .create_user(&unique_username("ordered"))
        .await
        .expect("Failed to create user");

    let users = client.list_users().await.expect("Failed to list users");
    assert!(users.windows(2).all(|pair| pair[0].id < pair[1].id));
}
