use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bpms_auth_client::{AuthorizationClient, BulkClient, HttpTransport};
use bpms_auth_core::{AuthorizationGrant, CountResult, Error, Role};
use bpms_auth_observability::Confidential;

fn client(server: &MockServer) -> BulkClient {
    let http = HttpTransport::new(&server.uri(), Confidential::new("token".into())).unwrap();
    BulkClient::new(http)
}

#[tokio::test]
async fn delete_returns_server_count() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/extended/authorizations/delete"))
        .and(header("X-Access-Token", "token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server).delete_all().await.unwrap();
    assert_eq!(result, CountResult { count: 1 });
}

#[tokio::test]
async fn remove_generated_is_a_single_request() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/extended/authorizations/delete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 7})))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client(&server).remove_generated().await.unwrap(), 7);
}

#[tokio::test]
async fn process_definition_grants_are_batched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/extended/authorizations/process-definition/create"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!([
            {"groupId": "officer", "processDefinitionId": "Process_1"},
            {"groupId": "citizen", "processDefinitionId": "Process_1"}
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 2})))
        .expect(1)
        .mount(&server)
        .await;

    let grants = vec![
        AuthorizationGrant::process_definition("Process_1", Role::new("officer")),
        AuthorizationGrant::process_definition("Process_1", Role::new("citizen")),
    ];

    let created = client(&server)
        .create_process_definition_grants(&grants)
        .await
        .unwrap();
    assert_eq!(created, 2);
}

#[tokio::test]
async fn process_instance_grants_send_role_names() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/extended/authorizations/process-instance/create"))
        .and(body_json(json!(["officer", "citizen"])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 2})))
        .expect(1)
        .mount(&server)
        .await;

    let grants = vec![
        AuthorizationGrant::process_instance(Role::new("officer")),
        AuthorizationGrant::process_instance(Role::new("citizen")),
    ];

    let created = client(&server)
        .create_process_instance_grants(&grants)
        .await
        .unwrap();
    assert_eq!(created, 2);
}

#[tokio::test]
async fn server_count_is_relayed_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/extended/authorizations/process-instance/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 1})))
        .mount(&server)
        .await;

    let grants = vec![
        AuthorizationGrant::process_instance(Role::new("officer")),
        AuthorizationGrant::process_instance(Role::new("citizen")),
    ];

    let created = client(&server)
        .create_process_instance_grants(&grants)
        .await
        .unwrap();
    assert_eq!(created, 1);
}

#[tokio::test]
async fn empty_batches_skip_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 0})))
        .expect(0)
        .mount(&server)
        .await;

    let c = client(&server);
    assert_eq!(c.create_process_definition_grants(&[]).await.unwrap(), 0);
    assert_eq!(c.create_process_instance_grants(&[]).await.unwrap(), 0);
}

#[tokio::test]
async fn missing_count_is_a_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/extended/authorizations/delete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": 3})))
        .mount(&server)
        .await;

    let err = client(&server).delete_all().await.unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}
