use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::errors::ToolError;
use crate::mcp::catalog::{tool_catalog, ToolDef};
use crate::registry::{all_operations, Operation};
use crate::services::dispatcher::{CallToolResult, Dispatcher, ToolOutput};

#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn handle(&self, args: Value) -> Result<ToolOutput, ToolError>;
}

/// Binds one operation of the table to the shared dispatcher.
pub struct OperationHandler {
    operation: Operation,
    dispatcher: Arc<Dispatcher>,
}

impl OperationHandler {
    pub fn new(operation: Operation, dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            operation,
            dispatcher,
        }
    }
}

#[async_trait]
impl ToolHandler for OperationHandler {
    async fn handle(&self, args: Value) -> Result<ToolOutput, ToolError> {
        self.dispatcher.execute(&self.operation, &args).await
    }
}

#[derive(Clone)]
pub struct Tool {
    pub definition: ToolDef,
    pub handler: Arc<dyn ToolHandler>,
}

#[derive(Clone)]
pub struct ToolRegistry {
    tools: Arc<Vec<Tool>>,
    index: Arc<HashMap<String, usize>>,
}

impl ToolRegistry {
    /// One tool per operation, in table order. Duplicate names and input
    /// schemas that do not compile are reported before anything is served.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Result<Self, ToolError> {
        let mut tools = Vec::with_capacity(all_operations().len());
        for (operation, definition) in all_operations().iter().zip(tool_catalog()) {
            tools.push(Tool {
                definition: definition.clone(),
                handler: Arc::new(OperationHandler::new(*operation, dispatcher.clone())),
            });
        }
        Self::from_tools(tools)
    }

    pub fn from_tools(tools: Vec<Tool>) -> Result<Self, ToolError> {
        validate_tool_wiring(&tools)?;
        let index = tools
            .iter()
            .enumerate()
            .map(|(idx, tool)| (tool.definition.name.clone(), idx))
            .collect();
        Ok(Self {
            tools: Arc::new(tools),
            index: Arc::new(index),
        })
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn definitions(&self) -> Vec<ToolDef> {
        self.tools.iter().map(|t| t.definition.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.index.get(name).map(|idx| &self.tools[*idx])
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// `None` when no tool has that name.
    pub async fn call(&self, name: &str, args: Value) -> Option<CallToolResult> {
        let tool = self.get(name)?;
        Some(tool.handler.handle(args).await.into())
    }
}

fn validate_tool_wiring(tools: &[Tool]) -> Result<(), ToolError> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for tool in tools {
        if !seen.insert(tool.definition.name.as_str()) {
            duplicates.push(tool.definition.name.clone());
        }
    }
    if !duplicates.is_empty() {
        return Err(ToolError::internal("Duplicate tool names in registry")
            .with_hint("Every operation must map to a distinct method and path.")
            .with_details(json!({ "duplicate_tools": duplicates })));
    }
    for tool in tools {
        tool.definition.compile_schema()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::dispatcher::ResponseOutcome;

    struct Echo;

    #[async_trait]
    impl ToolHandler for Echo {
        async fn handle(&self, args: Value) -> Result<ToolOutput, ToolError> {
            match args.get("fail") {
                Some(_) => Err(ToolError::api(500, "backend down")),
                None => Ok(ToolOutput {
                    text: args.to_string(),
                    outcome: ResponseOutcome::Raw,
                }),
            }
        }
    }

    fn tool(name: &str, schema: Value) -> Tool {
        Tool {
            definition: ToolDef {
                name: name.to_string(),
                description: String::new(),
                input_schema: schema,
            },
            handler: Arc::new(Echo),
        }
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = ToolRegistry::from_tools(vec![
            tool("echo", json!({"type": "object"})),
            tool("echo", json!({"type": "object"})),
        ])
        .err()
        .expect("duplicates");
        assert_eq!(err.details, Some(json!({"duplicate_tools": ["echo"]})));
    }

    #[test]
    fn broken_schema_is_rejected() {
        let result = ToolRegistry::from_tools(vec![tool("echo", json!({"type": 12}))]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn call_maps_errors_to_error_results() {
        let registry =
            ToolRegistry::from_tools(vec![tool("echo", json!({"type": "object"}))]).expect("ok");
        let ok = registry.call("echo", json!({"a": 1})).await.expect("known");
        assert!(!ok.is_error);
        assert_eq!(ok.text, r#"{"a":1}"#);

        let failed = registry.call("echo", json!({"fail": true})).await.expect("known");
        assert!(failed.is_error);
        assert_eq!(failed.text, "API error (status 500): backend down");

        assert!(registry.call("nope", json!({})).await.is_none());
    }
}
