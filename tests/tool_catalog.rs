mod common;
use common::{dispatcher, full_path_args, FakeTransport};

use registry_mcp::mcp::catalog::{tool_by_name, tool_catalog};
use registry_mcp::registry::all_operations;
use registry_mcp::services::tool_registry::ToolRegistry;
use serde_json::{json, Value};
use std::collections::HashSet;

fn property_names(schema: &Value) -> Vec<String> {
    schema["properties"]
        .as_object()
        .expect("properties object")
        .keys()
        .cloned()
        .collect()
}

#[test]
fn registry_exposes_thirty_five_uniquely_named_tools() {
    let registry = ToolRegistry::new(dispatcher(FakeTransport::new())).expect("registry");
    assert_eq!(registry.len(), 35);

    let names: HashSet<&str> = registry
        .tools()
        .iter()
        .map(|tool| tool.definition.name.as_str())
        .collect();
    assert_eq!(names.len(), 35);
}

#[test]
fn every_input_schema_compiles() {
    for tool in tool_catalog() {
        tool.compile_schema()
            .unwrap_or_else(|err| panic!("{}: {}", tool.name, err));
    }
}

#[test]
fn body_parameters_match_request_schema_fields() {
    for operation in all_operations() {
        let tool = tool_by_name(&operation.tool_name()).expect("tool for operation");
        let properties: HashSet<String> = property_names(&tool.input_schema).into_iter().collect();
        let expected_body: Vec<&str> = operation
            .request
            .map(|schema| schema.body_fields().iter().map(|f| f.name).collect())
            .unwrap_or_default();
        for field in &expected_body {
            assert!(
                properties.contains(*field),
                "{} is missing body field {}",
                tool.name,
                field
            );
        }

        // Whatever is not a path or query param must be a body field.
        let non_body = operation.path_params().len() + operation.query.len();
        assert_eq!(
            properties.len(),
            non_body + expected_body.len(),
            "{} has unexpected parameters",
            tool.name
        );
    }
}

#[test]
fn body_fields_are_exactly_what_the_request_type_serializes() {
    let update = all_operations()
        .iter()
        .find(|op| op.id == "UpdateApiDeployment")
        .expect("operation");
    let schema = update.request.expect("has body");

    let mut args = serde_json::Map::new();
    for field in schema.body_fields() {
        let value = match field.name {
            "labels" | "annotations" => json!({"k": "v"}),
            _ => json!("x"),
        };
        args.insert(field.name.to_string(), value);
    }
    let body = schema.encode_body(&Value::Object(args)).expect("encode");
    let sent: Value = serde_json::from_slice(&body).expect("json");
    let sent_keys: HashSet<&str> = sent
        .as_object()
        .expect("object")
        .keys()
        .map(|k| k.as_str())
        .collect();
    let declared: HashSet<&str> = schema.body_fields().iter().map(|f| f.name).collect();
    assert_eq!(sent_keys, declared);
}

#[test]
fn path_parameters_come_first_and_are_required() {
    let tool = tool_by_name(
        "delete_v1_projects_project_locations_location_apis_api_deployments_deployment:deleteRevision",
    )
    .expect("delete deployment revision tool");
    assert_eq!(
        tool.input_schema["required"],
        json!(["project", "location", "api", "deployment"])
    );
    assert_eq!(
        tool.input_schema["properties"]["deployment"]["description"],
        "The deployment id."
    );
}

#[test]
fn labels_only_accept_string_values() {
    let tool = tool_by_name("post_v1_projects_project_locations_location_apis")
        .expect("create api tool");
    let schema = tool.compile_schema().expect("compiles");

    let mut args = json!({"project": "demo", "location": "global", "labels": {"team": "pets"}});
    assert!(schema.is_valid(&args));

    args["labels"] = json!({"team": 7});
    assert!(!schema.is_valid(&args));
}

#[tokio::test]
async fn registry_call_runs_the_pipeline() {
    let transport = FakeTransport::new();
    transport.respond(200, r#"{"apis":[{"name":"a"}],"nextPageToken":"t"}"#);
    let registry = ToolRegistry::new(dispatcher(transport.clone())).expect("registry");

    let result = registry
        .call("get_v1_projects_project_locations_location_apis", full_path_args())
        .await
        .expect("known tool");

    assert!(!result.is_error);
    let parsed: Value = serde_json::from_str(&result.text).expect("pretty json");
    assert_eq!(parsed, json!({"apis": [{"name": "a"}], "nextPageToken": "t"}));
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn unknown_tool_is_none() {
    let registry = ToolRegistry::new(dispatcher(FakeTransport::new())).expect("registry");
    assert!(registry.call("get_v1_nothing", json!({})).await.is_none());
}
