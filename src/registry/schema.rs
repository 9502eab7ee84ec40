use crate::errors::ToolError;
use crate::models;
use crate::registry::fields;
use crate::registry::ParamSpec;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Typed wire schema an operation sends or expects back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    Api,
    ApiVersion,
    ApiSpec,
    ApiDeployment,
    Artifact,
    Status,
    ListApis,
    ListApiVersions,
    ListApiSpecs,
    ListApiSpecRevisions,
    ListApiDeployments,
    ListApiDeploymentRevisions,
    ListArtifacts,
    RollbackApiSpec,
    RollbackApiDeployment,
    TagApiSpecRevision,
    TagApiDeploymentRevision,
}

/// How a successful response body is turned into tool output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseBody {
    Typed(Schema),
    /// Content endpoints return the stored bytes, not a JSON message.
    Raw,
}

/// Result of decoding a success body against a schema.
#[derive(Debug)]
pub enum Decoded {
    Pretty(String),
    /// Body did not match the schema; callers fall back to the raw text.
    Mismatch(serde_json::Error),
    Unprintable(serde_json::Error),
}

macro_rules! with_schema_type {
    ($schema:expr, $func:ident ( $($arg:expr),* )) => {
        match $schema {
            Schema::Api => $func::<models::Api>($($arg),*),
            Schema::ApiVersion => $func::<models::ApiVersion>($($arg),*),
            Schema::ApiSpec => $func::<models::ApiSpec>($($arg),*),
            Schema::ApiDeployment => $func::<models::ApiDeployment>($($arg),*),
            Schema::Artifact => $func::<models::Artifact>($($arg),*),
            Schema::Status => $func::<models::Status>($($arg),*),
            Schema::ListApis => $func::<models::ListApisResponse>($($arg),*),
            Schema::ListApiVersions => $func::<models::ListApiVersionsResponse>($($arg),*),
            Schema::ListApiSpecs => $func::<models::ListApiSpecsResponse>($($arg),*),
            Schema::ListApiSpecRevisions => {
                $func::<models::ListApiSpecRevisionsResponse>($($arg),*)
            }
            Schema::ListApiDeployments => $func::<models::ListApiDeploymentsResponse>($($arg),*),
            Schema::ListApiDeploymentRevisions => {
                $func::<models::ListApiDeploymentRevisionsResponse>($($arg),*)
            }
            Schema::ListArtifacts => $func::<models::ListArtifactsResponse>($($arg),*),
            Schema::RollbackApiSpec => $func::<models::RollbackApiSpecRequest>($($arg),*),
            Schema::RollbackApiDeployment => {
                $func::<models::RollbackApiDeploymentRequest>($($arg),*)
            }
            Schema::TagApiSpecRevision => $func::<models::TagApiSpecRevisionRequest>($($arg),*),
            Schema::TagApiDeploymentRevision => {
                $func::<models::TagApiDeploymentRevisionRequest>($($arg),*)
            }
        }
    };
}

impl Schema {
    /// Tool parameters that map onto fields of this schema when it is used
    /// as a request body. Response-only schemas have none.
    pub fn body_fields(self) -> &'static [ParamSpec] {
        match self {
            Schema::Api => fields::API_FIELDS,
            Schema::ApiVersion => fields::API_VERSION_FIELDS,
            Schema::ApiSpec => fields::API_SPEC_FIELDS,
            Schema::ApiDeployment => fields::API_DEPLOYMENT_FIELDS,
            Schema::Artifact => fields::ARTIFACT_FIELDS,
            Schema::RollbackApiSpec => fields::ROLLBACK_API_SPEC_FIELDS,
            Schema::RollbackApiDeployment => fields::ROLLBACK_API_DEPLOYMENT_FIELDS,
            Schema::TagApiSpecRevision => fields::TAG_API_SPEC_REVISION_FIELDS,
            Schema::TagApiDeploymentRevision => fields::TAG_API_DEPLOYMENT_REVISION_FIELDS,
            _ => &[],
        }
    }

    /// Round-trips the tool arguments through the typed schema and returns
    /// the JSON payload. Keys that are not fields of the schema are dropped.
    pub fn encode_body(self, args: &Value) -> Result<Vec<u8>, ToolError> {
        with_schema_type!(self, encode_as(args))
    }

    pub fn decode_pretty(self, body: &[u8]) -> Decoded {
        with_schema_type!(self, decode_as(body))
    }
}

fn encode_as<T: DeserializeOwned + Serialize>(args: &Value) -> Result<Vec<u8>, ToolError> {
    let typed: T = serde_json::from_value(args.clone()).map_err(|err| {
        ToolError::encoding(format!(
            "Failed to convert arguments to request type: {}",
            err
        ))
    })?;
    serde_json::to_vec(&typed)
        .map_err(|err| ToolError::encoding(format!("Failed to encode request body: {}", err)))
}

fn decode_as<T: DeserializeOwned + Serialize>(body: &[u8]) -> Decoded {
    let typed: T = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(err) => return Decoded::Mismatch(err),
    };
    match serde_json::to_string_pretty(&typed) {
        Ok(text) => Decoded::Pretty(text),
        Err(err) => Decoded::Unprintable(err),
    }
}
