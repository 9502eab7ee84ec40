//! Declarative description of every registry REST operation exposed as a tool.
//!
//! An [`Operation`] carries everything the dispatcher needs: method, path
//! template, query parameters and the request/response schemas. The tool's
//! parameter list is derived from it, so the table in [`operations`] is the
//! single place where an endpoint is described.

pub mod fields;
pub mod operations;
pub mod schema;

pub use operations::all_operations;
pub use schema::{Decoded, ResponseBody, Schema};

use crate::utils::path_template;
use serde_json::{json, Map, Value};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
    Boolean,
    /// JSON object whose values are all strings (labels, annotations).
    StringMap,
}

impl ParamKind {
    pub fn json_type(self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Number => "number",
            ParamKind::Boolean => "boolean",
            ParamKind::StringMap => "object",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub description: &'static str,
}

impl ParamSpec {
    pub const fn string(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::String,
            required: false,
            description,
        }
    }

    pub const fn number(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Number,
            required: false,
            description,
        }
    }

    pub const fn boolean(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Boolean,
            required: false,
            description,
        }
    }

    pub const fn string_map(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::StringMap,
            required: false,
            description,
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }
}

/// One REST operation of the registry service.
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    /// RPC name, e.g. `CreateApi`. Used in logs only.
    pub id: &'static str,
    pub description: &'static str,
    pub method: HttpMethod,
    /// Absolute path with `{param}` placeholders, e.g. `/v1/projects/{project}/...`.
    pub path: &'static str,
    pub query: &'static [ParamSpec],
    pub request: Option<Schema>,
    pub response: ResponseBody,
}

impl Operation {
    /// Tool name derived from method and path:
    /// `POST /v1/projects/{project}/locations/{location}/apis` becomes
    /// `post_v1_projects_project_locations_location_apis`.
    pub fn tool_name(&self) -> String {
        let path = self
            .path
            .trim_start_matches('/')
            .replace('/', "_")
            .replace(&['{', '}'][..], "");
        format!("{}_{}", self.method.as_str().to_lowercase(), path)
    }

    pub fn path_params(&self) -> Vec<&'static str> {
        path_template::placeholders(self.path)
    }

    /// Path parameters first, then query parameters, then body fields.
    pub fn params(&self) -> Vec<ParamSpec> {
        let mut params: Vec<ParamSpec> = self
            .path_params()
            .into_iter()
            .map(path_param_spec)
            .collect();
        params.extend_from_slice(self.query);
        if let Some(schema) = self.request {
            params.extend_from_slice(schema.body_fields());
        }
        params
    }

    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for param in self.params() {
            let mut property = json!({
                "type": param.kind.json_type(),
                "description": param.description,
            });
            if param.kind == ParamKind::StringMap {
                property["additionalProperties"] = json!({"type": "string"});
            }
            properties.insert(param.name.to_string(), property);
            if param.required {
                required.push(Value::String(param.name.to_string()));
            }
        }
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

fn path_param_spec(name: &'static str) -> ParamSpec {
    let description = match name {
        "project" => "The project id.",
        "location" => "The location id.",
        "api" => "The api id.",
        "version" => "The version id.",
        "spec" => "The spec id.",
        "deployment" => "The deployment id.",
        "artifact" => "The artifact id.",
        _ => "Path parameter.",
    };
    ParamSpec::string(name, description).required()
}
