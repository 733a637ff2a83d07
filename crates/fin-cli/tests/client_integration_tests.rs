//! Integration tests for the CLI client using wiremock mock server

use fin_cli::{Client, ClientError};

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_users_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [
                {
                    "id": "00000000-0000-0000-0000-000000000001",
                    "display_name": "Ada Lovelace",
                    "email": "ada@example.com",
                    "approval_status": "pending",
                    "is_test_user": false,
                    "created_at": 1704067200,
                    "updated_at": 1704067200
                }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), Some("test-token"));
    let result = client.list_users().await.unwrap();

    let users = result["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["display_name"], "Ada Lovelace");
}

#[tokio::test]
async fn test_any_command_without_token_never_reaches_the_network() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let result = client.list_users().await;

    assert!(matches!(result, Err(ClientError::MissingSession { .. })));
}

#[tokio::test]
async fn test_delete_without_token_never_reaches_the_network() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), None);
    let result = client
        .delete_user("00000000-0000-0000-0000-000000000001")
        .await;

    assert!(matches!(result, Err(ClientError::MissingSession { .. })));
}

#[tokio::test]
async fn test_set_approval_sends_decision() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(
            "/api/v1/users/00000000-0000-0000-0000-000000000001/approval",
        ))
        .and(body_string_contains("approved"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [
                {
                    "id": "00000000-0000-0000-0000-000000000001",
                    "display_name": "Ada Lovelace",
                    "email": null,
                    "approval_status": "approved",
                    "is_test_user": false,
                    "created_at": 1704067200,
                    "updated_at": 1704067300
                }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), Some("test-token"));
    let result = client
        .set_approval("00000000-0000-0000-0000-000000000001", "approved")
        .await
        .unwrap();

    // The response is the refreshed listing
    assert_eq!(result["users"][0]["approval_status"], "approved");
}

#[tokio::test]
async fn test_denied_admin_surfaces_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {
                "code": "FORBIDDEN",
                "message": "Access denied"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), Some("not-an-admin-token"));
    let result = client.list_users().await;

    match result.unwrap_err() {
        ClientError::Api { code, message, .. } => {
            assert_eq!(code, "FORBIDDEN");
            assert_eq!(message, "Access denied");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_delete_user_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/users/00000000-0000-0000-0000-000000000001"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri(), Some("test-token"));
    let result = client
        .delete_user("00000000-0000-0000-0000-000000000001")
        .await
        .unwrap();

    assert_eq!(result["success"], true);
}
