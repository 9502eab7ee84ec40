use crate::registry::fields::*;
use crate::registry::{HttpMethod, Operation, ParamSpec, ResponseBody, Schema};

macro_rules! location_path {
    ($suffix:literal) => {
        concat!("/v1/projects/{project}/locations/{location}", $suffix)
    };
}

const NO_QUERY: &[ParamSpec] = &[];

static OPERATIONS: &[Operation] = &[
    // APIs
    Operation {
        id: "ListApis",
        description: "ListApis returns matching APIs.",
        method: HttpMethod::Get,
        path: location_path!("/apis"),
        query: LIST_QUERY,
        request: None,
        response: ResponseBody::Typed(Schema::ListApis),
    },
    Operation {
        id: "CreateApi",
        description: "CreateApi creates a specified API.",
        method: HttpMethod::Post,
        path: location_path!("/apis"),
        query: CREATE_API_QUERY,
        request: Some(Schema::Api),
        response: ResponseBody::Typed(Schema::Api),
    },
    Operation {
        id: "GetApi",
        description: "GetApi returns a specified API.",
        method: HttpMethod::Get,
        path: location_path!("/apis/{api}"),
        query: NO_QUERY,
        request: None,
        response: ResponseBody::Typed(Schema::Api),
    },
    Operation {
        id: "UpdateApi",
        description: "UpdateApi can be used to modify a specified API.",
        method: HttpMethod::Patch,
        path: location_path!("/apis/{api}"),
        query: UPDATE_API_QUERY,
        request: Some(Schema::Api),
        response: ResponseBody::Typed(Schema::Api),
    },
    Operation {
        id: "DeleteApi",
        description: "DeleteApi removes a specified API and all of the resources that it owns.",
        method: HttpMethod::Delete,
        path: location_path!("/apis/{api}"),
        query: DELETE_QUERY,
        request: None,
        response: ResponseBody::Typed(Schema::Status),
    },
    // API versions
    Operation {
        id: "ListApiVersions",
        description: "ListApiVersions returns matching versions.",
        method: HttpMethod::Get,
        path: location_path!("/apis/{api}/versions"),
        query: LIST_QUERY,
        request: None,
        response: ResponseBody::Typed(Schema::ListApiVersions),
    },
    Operation {
        id: "CreateApiVersion",
        description: "CreateApiVersion creates a specified version.",
        method: HttpMethod::Post,
        path: location_path!("/apis/{api}/versions"),
        query: CREATE_API_VERSION_QUERY,
        request: Some(Schema::ApiVersion),
        response: ResponseBody::Typed(Schema::ApiVersion),
    },
    Operation {
        id: "GetApiVersion",
        description: "GetApiVersion returns a specified version.",
        method: HttpMethod::Get,
        path: location_path!("/apis/{api}/versions/{version}"),
        query: NO_QUERY,
        request: None,
        response: ResponseBody::Typed(Schema::ApiVersion),
    },
    Operation {
        id: "UpdateApiVersion",
        description: "UpdateApiVersion can be used to modify a specified version.",
        method: HttpMethod::Patch,
        path: location_path!("/apis/{api}/versions/{version}"),
        query: UPDATE_API_VERSION_QUERY,
        request: Some(Schema::ApiVersion),
        response: ResponseBody::Typed(Schema::ApiVersion),
    },
    Operation {
        id: "DeleteApiVersion",
        description: "DeleteApiVersion removes a specified version and all of the resources that it owns.",
        method: HttpMethod::Delete,
        path: location_path!("/apis/{api}/versions/{version}"),
        query: DELETE_QUERY,
        request: None,
        response: ResponseBody::Typed(Schema::Status),
    },
    // API specs
    Operation {
        id: "ListApiSpecs",
        description: "ListApiSpecs returns matching specs.",
        method: HttpMethod::Get,
        path: location_path!("/apis/{api}/versions/{version}/specs"),
        query: LIST_QUERY,
        request: None,
        response: ResponseBody::Typed(Schema::ListApiSpecs),
    },
    Operation {
        id: "CreateApiSpec",
        description: "CreateApiSpec creates a specified spec.",
        method: HttpMethod::Post,
        path: location_path!("/apis/{api}/versions/{version}/specs"),
        query: CREATE_API_SPEC_QUERY,
        request: Some(Schema::ApiSpec),
        response: ResponseBody::Typed(Schema::ApiSpec),
    },
    Operation {
        id: "GetApiSpec",
        description: "GetApiSpec returns a specified spec.",
        method: HttpMethod::Get,
        path: location_path!("/apis/{api}/versions/{version}/specs/{spec}"),
        query: NO_QUERY,
        request: None,
        response: ResponseBody::Typed(Schema::ApiSpec),
    },
    Operation {
        id: "UpdateApiSpec",
        description: "UpdateApiSpec can be used to modify a specified spec.",
        method: HttpMethod::Patch,
        path: location_path!("/apis/{api}/versions/{version}/specs/{spec}"),
        query: UPDATE_API_SPEC_QUERY,
        request: Some(Schema::ApiSpec),
        response: ResponseBody::Typed(Schema::ApiSpec),
    },
    Operation {
        id: "DeleteApiSpec",
        description: "DeleteApiSpec removes a specified spec, all revisions, and all child resources (e.g., artifacts).",
        method: HttpMethod::Delete,
        path: location_path!("/apis/{api}/versions/{version}/specs/{spec}"),
        query: DELETE_QUERY,
        request: None,
        response: ResponseBody::Typed(Schema::Status),
    },
    Operation {
        id: "GetApiSpecContents",
        description: "GetApiSpecContents returns the contents of a specified spec. If specs are stored with GZip compression, the default behavior is to return the spec uncompressed (the mime_type response field indicates the exact format returned).",
        method: HttpMethod::Get,
        path: location_path!("/apis/{api}/versions/{version}/specs/{spec}:getContents"),
        query: NO_QUERY,
        request: None,
        response: ResponseBody::Raw,
    },
    Operation {
        id: "ListApiSpecRevisions",
        description: "ListApiSpecRevisions lists all revisions of a spec. Revisions are returned in descending order of revision creation time.",
        method: HttpMethod::Get,
        path: location_path!("/apis/{api}/versions/{version}/specs/{spec}:listRevisions"),
        query: LIST_REVISIONS_QUERY,
        request: None,
        response: ResponseBody::Typed(Schema::ListApiSpecRevisions),
    },
    Operation {
        id: "TagApiSpecRevision",
        description: "TagApiSpecRevision adds a tag to a specified revision of a spec.",
        method: HttpMethod::Post,
        path: location_path!("/apis/{api}/versions/{version}/specs/{spec}:tagRevision"),
        query: NO_QUERY,
        request: Some(Schema::TagApiSpecRevision),
        response: ResponseBody::Typed(Schema::ApiSpec),
    },
    Operation {
        id: "RollbackApiSpec",
        description: "RollbackApiSpec sets the current revision to a specified prior revision. Note that this creates a new revision with a new revision ID.",
        method: HttpMethod::Post,
        path: location_path!("/apis/{api}/versions/{version}/specs/{spec}:rollback"),
        query: NO_QUERY,
        request: Some(Schema::RollbackApiSpec),
        response: ResponseBody::Typed(Schema::ApiSpec),
    },
    Operation {
        id: "DeleteApiSpecRevision",
        description: "DeleteApiSpecRevision deletes a revision of a spec.",
        method: HttpMethod::Delete,
        path: location_path!("/apis/{api}/versions/{version}/specs/{spec}:deleteRevision"),
        query: NO_QUERY,
        request: None,
        response: ResponseBody::Typed(Schema::ApiSpec),
    },
    // API deployments
    Operation {
        id: "ListApiDeployments",
        description: "ListApiDeployments returns matching deployments.",
        method: HttpMethod::Get,
        path: location_path!("/apis/{api}/deployments"),
        query: LIST_QUERY,
        request: None,
        response: ResponseBody::Typed(Schema::ListApiDeployments),
    },
    Operation {
        id: "CreateApiDeployment",
        description: "CreateApiDeployment creates a specified deployment.",
        method: HttpMethod::Post,
        path: location_path!("/apis/{api}/deployments"),
        query: CREATE_API_DEPLOYMENT_QUERY,
        request: Some(Schema::ApiDeployment),
        response: ResponseBody::Typed(Schema::ApiDeployment),
    },
    Operation {
        id: "GetApiDeployment",
        description: "GetApiDeployment returns a specified deployment.",
        method: HttpMethod::Get,
        path: location_path!("/apis/{api}/deployments/{deployment}"),
        query: NO_QUERY,
        request: None,
        response: ResponseBody::Typed(Schema::ApiDeployment),
    },
    Operation {
        id: "UpdateApiDeployment",
        description: "UpdateApiDeployment can be used to modify a specified deployment.",
        method: HttpMethod::Patch,
        path: location_path!("/apis/{api}/deployments/{deployment}"),
        query: UPDATE_API_DEPLOYMENT_QUERY,
        request: Some(Schema::ApiDeployment),
        response: ResponseBody::Typed(Schema::ApiDeployment),
    },
    Operation {
        id: "DeleteApiDeployment",
        description: "DeleteApiDeployment removes a specified deployment, all revisions, and all child resources (e.g., artifacts).",
        method: HttpMethod::Delete,
        path: location_path!("/apis/{api}/deployments/{deployment}"),
        query: DELETE_QUERY,
        request: None,
        response: ResponseBody::Typed(Schema::Status),
    },
    Operation {
        id: "TagApiDeploymentRevision",
        description: "TagApiDeploymentRevision adds a tag to a specified revision of a deployment.",
        method: HttpMethod::Post,
        path: location_path!("/apis/{api}/deployments/{deployment}:tagRevision"),
        query: NO_QUERY,
        request: Some(Schema::TagApiDeploymentRevision),
        response: ResponseBody::Typed(Schema::ApiDeployment),
    },
    Operation {
        id: "ListApiDeploymentRevisions",
        description: "ListApiDeploymentRevisions lists all revisions of a deployment. Revisions are returned in descending order of revision creation time.",
        method: HttpMethod::Get,
        path: location_path!("/apis/{api}/deployments/{deployment}:listRevisions"),
        query: LIST_REVISIONS_QUERY,
        request: None,
        response: ResponseBody::Typed(Schema::ListApiDeploymentRevisions),
    },
    Operation {
        id: "RollbackApiDeployment",
        description: "RollbackApiDeployment sets the current revision to a specified prior revision. Note that this creates a new revision with a new revision ID.",
        method: HttpMethod::Post,
        path: location_path!("/apis/{api}/deployments/{deployment}:rollback"),
        query: NO_QUERY,
        request: Some(Schema::RollbackApiDeployment),
        response: ResponseBody::Typed(Schema::ApiDeployment),
    },
    Operation {
        id: "DeleteApiDeploymentRevision",
        description: "DeleteApiDeploymentRevision deletes a revision of a deployment.",
        method: HttpMethod::Delete,
        path: location_path!("/apis/{api}/deployments/{deployment}:deleteRevision"),
        query: NO_QUERY,
        request: None,
        response: ResponseBody::Typed(Schema::ApiDeployment),
    },
    // Artifacts
    Operation {
        id: "ListArtifacts",
        description: "ListArtifacts returns matching artifacts.",
        method: HttpMethod::Get,
        path: location_path!("/artifacts"),
        query: LIST_QUERY,
        request: None,
        response: ResponseBody::Typed(Schema::ListArtifacts),
    },
    Operation {
        id: "CreateArtifact",
        description: "CreateArtifact creates a specified artifact.",
        method: HttpMethod::Post,
        path: location_path!("/artifacts"),
        query: CREATE_ARTIFACT_QUERY,
        request: Some(Schema::Artifact),
        response: ResponseBody::Typed(Schema::Artifact),
    },
    Operation {
        id: "GetArtifact",
        description: "GetArtifact returns a specified artifact.",
        method: HttpMethod::Get,
        path: location_path!("/artifacts/{artifact}"),
        query: NO_QUERY,
        request: None,
        response: ResponseBody::Typed(Schema::Artifact),
    },
    Operation {
        id: "ReplaceArtifact",
        description: "ReplaceArtifact can be used to replace a specified artifact.",
        method: HttpMethod::Put,
        path: location_path!("/artifacts/{artifact}"),
        query: NO_QUERY,
        request: Some(Schema::Artifact),
        response: ResponseBody::Typed(Schema::Artifact),
    },
    Operation {
        id: "DeleteArtifact",
        description: "DeleteArtifact removes a specified artifact.",
        method: HttpMethod::Delete,
        path: location_path!("/artifacts/{artifact}"),
        query: NO_QUERY,
        request: None,
        response: ResponseBody::Typed(Schema::Status),
    },
    Operation {
        id: "GetArtifactContents",
        description: "GetArtifactContents returns the contents of a specified artifact. If artifacts are stored with GZip compression, the default behavior is to return the artifact uncompressed (the mime_type response field indicates the exact format returned).",
        method: HttpMethod::Get,
        path: location_path!("/artifacts/{artifact}:getContents"),
        query: NO_QUERY,
        request: None,
        response: ResponseBody::Raw,
    },
];

/// Every operation of the registry service, in the order tools are listed.
pub fn all_operations() -> &'static [Operation] {
    OPERATIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_unique_ids() {
        let ids: HashSet<&str> = all_operations().iter().map(|op| op.id).collect();
        assert_eq!(ids.len(), all_operations().len());
        assert_eq!(all_operations().len(), 35);
    }

    #[test]
    fn only_write_operations_carry_a_body() {
        for op in all_operations() {
            let writes = matches!(
                op.method,
                HttpMethod::Post | HttpMethod::Patch | HttpMethod::Put
            );
            assert_eq!(op.request.is_some(), writes, "{}", op.id);
        }
    }
}
