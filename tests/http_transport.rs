mod common;
use common::quiet_logger;

use registry_mcp::app::App;
use registry_mcp::registry::HttpMethod;
use registry_mcp::services::api_config::ApiConfig;
use registry_mcp::services::transport::{HttpRequest, HttpTransport, ReqwestTransport};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn reqwest_transport_sends_method_headers_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/v1/things/1"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"displayName": "x"})))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
        .expect(1)
        .mount(&server)
        .await;

    let mut request = HttpRequest::new(HttpMethod::Patch, format!("{}/v1/things/1", server.uri()));
    request.set_header("Content-Type", "application/json");
    request.body = Some(br#"{"displayName":"x"}"#.to_vec());

    let response = ReqwestTransport::new().send(request).await.expect("send");
    assert_eq!(response.status, 200);
    assert_eq!(response.text(), r#"{"ok":true}"#);
}

#[tokio::test]
async fn error_statuses_are_returned_not_raised() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
        .mount(&server)
        .await;

    let response = ReqwestTransport::new()
        .send(HttpRequest::new(HttpMethod::Get, format!("{}/v1/x", server.uri())))
        .await
        .expect("send");
    assert_eq!(response.status, 404);
    assert_eq!(response.text(), "missing");
}

#[tokio::test]
async fn app_wires_token_and_reaches_backend() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/projects/demo/locations/global/apis/petstore"))
        .and(query_param("force", "true"))
        .and(header("authorization", "Bearer s3cret"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let config = ApiConfig::new(&format!("{}/", server.uri()), Some("s3cret".to_string()))
        .expect("config");
    let app = App::with_transport(
        config,
        Arc::new(ReqwestTransport::new()),
        quiet_logger(),
    )
    .expect("app");

    let result = app
        .registry
        .call(
            "delete_v1_projects_project_locations_location_apis_api",
            json!({"project": "demo", "location": "global", "api": "petstore", "force": true}),
        )
        .await
        .expect("known tool");

    assert!(!result.is_error, "{}", result.text);
    assert_eq!(result.text, "{}");
}

#[tokio::test]
async fn backend_error_body_reaches_the_caller() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/projects/demo/locations/global/artifacts/lint"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"code":5,"message":"not found"}"#),
        )
        .mount(&server)
        .await;

    let config = ApiConfig::new(&server.uri(), None).expect("config");
    let app = App::initialize(config, quiet_logger()).expect("app");

    let result = app
        .registry
        .call(
            "get_v1_projects_project_locations_location_artifacts_artifact",
            json!({"project": "demo", "location": "global", "artifact": "lint"}),
        )
        .await
        .expect("known tool");

    assert!(result.is_error);
    assert!(result.text.contains(r#"{"code":5,"message":"not found"}"#));
}

#[tokio::test]
async fn unreachable_backend_is_an_error_result() {
    // Port 9 (discard) is not expected to accept HTTP on loopback.
    let config = ApiConfig::new("http://127.0.0.1:9", None).expect("config");
    let app = App::initialize(config, quiet_logger()).expect("app");

    let result = app
        .registry
        .call(
            "get_v1_projects_project_locations_location_apis",
            json!({"project": "demo", "location": "global"}),
        )
        .await
        .expect("known tool");

    assert!(result.is_error);
    assert!(result.text.starts_with("HTTP request failed"));
}
