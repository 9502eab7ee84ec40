use crate::errors::ToolError;
use crate::registry::{all_operations, Operation};
use jsonschema::JSONSchema;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDef {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl ToolDef {
    pub fn from_operation(operation: &Operation) -> Self {
        Self {
            name: operation.tool_name(),
            description: operation.description.to_string(),
            input_schema: operation.input_schema(),
        }
    }

    /// Compiles the input schema; a failure here is a wiring bug.
    pub fn compile_schema(&self) -> Result<JSONSchema, ToolError> {
        JSONSchema::compile(&self.input_schema).map_err(|err| {
            ToolError::internal(format!(
                "Input schema of tool '{}' does not compile: {}",
                self.name, err
            ))
        })
    }
}

static TOOL_CATALOG: Lazy<Vec<ToolDef>> =
    Lazy::new(|| all_operations().iter().map(ToolDef::from_operation).collect());

static TOOL_MAP: Lazy<HashMap<String, ToolDef>> = Lazy::new(|| {
    TOOL_CATALOG
        .iter()
        .cloned()
        .map(|tool| (tool.name.clone(), tool))
        .collect()
});

/// Every tool definition, in operation-table order.
pub fn tool_catalog() -> &'static [ToolDef] {
    &TOOL_CATALOG
}

pub fn tool_by_name(name: &str) -> Option<&'static ToolDef> {
    TOOL_MAP.get(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn catalog_follows_operation_order() {
        let names: Vec<&str> = tool_catalog().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names.len(), all_operations().len());
        assert_eq!(names[0], "get_v1_projects_project_locations_location_apis");
        assert_eq!(
            names[1],
            "post_v1_projects_project_locations_location_apis"
        );
    }

    #[test]
    fn tool_def_serializes_input_schema_in_camel_case() {
        let tool = tool_by_name("get_v1_projects_project_locations_location_apis_api")
            .expect("get api tool");
        let value = serde_json::to_value(tool).expect("json");
        assert_eq!(value["inputSchema"]["type"], "object");
        assert_eq!(
            value["inputSchema"]["required"],
            json!(["project", "location", "api"])
        );
    }

    #[test]
    fn compiled_schema_rejects_wrong_path_type() {
        let tool = tool_by_name("get_v1_projects_project_locations_location_apis_api")
            .expect("get api tool");
        let compiled = tool.compile_schema().expect("compiles");
        assert!(compiled.is_valid(&json!({"project": "p", "location": "l", "api": "a"})));
        assert!(!compiled.is_valid(&json!({"project": "p", "location": 1, "api": "a"})));
    }
}
