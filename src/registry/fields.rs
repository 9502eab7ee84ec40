//! Parameter tables shared by the operation descriptors: query parameters
//! that recur across endpoints and the body fields of each request schema.

use crate::registry::ParamSpec;

const LABELS: &str = "Labels attach identifying metadata to resources. Identifying metadata can be used to filter list operations. Label keys and values can be no longer than 64 characters, can only contain lowercase letters, numeric characters, underscores and dashes. No more than 64 user labels can be associated with one resource. System reserved label keys are prefixed with \"apigeeregistry.googleapis.com/\" and cannot be changed.";
const ANNOTATIONS: &str = "Annotations attach non-identifying metadata to resources. Annotation keys and values are less restricted than those of labels, but should be generally used for small values of broad interest. Larger, topic-specific metadata should be stored in Artifacts.";
const UPDATE_MASK: &str = "The list of fields to be updated. If omitted, all fields are updated that are set in the request message (fields set to default values are ignored). If a \"*\" is specified, all fields are updated, including fields that are unspecified/default in the request.";

pub const LIST_QUERY: &[ParamSpec] = &[
    ParamSpec::number(
        "pageSize",
        "The maximum number of results to return. The service may return fewer than this value. If unspecified, at most 50 values will be returned. The maximum is 1000; values above 1000 will be coerced to 1000.",
    ),
    ParamSpec::string(
        "pageToken",
        "A page token, received from a previous list call. Provide this to retrieve the subsequent page. When paginating, all other parameters must match the call that provided the page token.",
    ),
    ParamSpec::string(
        "filter",
        "An expression that can be used to filter the list. Filters use the Common Expression Language and can refer to all message fields.",
    ),
    ParamSpec::string(
        "orderBy",
        "A comma-separated list of fields, e.g. \"foo,bar\". Fields can be sorted in descending order using the \"desc\" identifier, e.g. \"foo desc,bar\".",
    ),
];

pub const LIST_REVISIONS_QUERY: &[ParamSpec] = &[
    ParamSpec::number(
        "pageSize",
        "The maximum number of revisions to return per page.",
    ),
    ParamSpec::string(
        "pageToken",
        "The page token, received from a previous list revisions call. Provide this to retrieve the subsequent page.",
    ),
    ParamSpec::string(
        "filter",
        "An expression that can be used to filter the list. Filters use the Common Expression Language and can refer to all message fields.",
    ),
];

pub const DELETE_QUERY: &[ParamSpec] = &[ParamSpec::boolean(
    "force",
    "If set to true, any child resources will also be deleted. (Otherwise, the request will only work if there are no child resources.)",
)];

pub const UPDATE_API_QUERY: &[ParamSpec] = &[
    ParamSpec::string("updateMask", UPDATE_MASK),
    ParamSpec::boolean(
        "allowMissing",
        "If set to true, and the api is not found, a new api will be created. In this situation, `update_mask` is ignored.",
    ),
];

pub const UPDATE_API_VERSION_QUERY: &[ParamSpec] = &[
    ParamSpec::string("updateMask", UPDATE_MASK),
    ParamSpec::boolean(
        "allowMissing",
        "If set to true, and the version is not found, a new version will be created. In this situation, `update_mask` is ignored.",
    ),
];

pub const UPDATE_API_SPEC_QUERY: &[ParamSpec] = &[
    ParamSpec::string("updateMask", UPDATE_MASK),
    ParamSpec::boolean(
        "allowMissing",
        "If set to true, and the spec is not found, a new spec will be created. In this situation, `update_mask` is ignored.",
    ),
];

pub const UPDATE_API_DEPLOYMENT_QUERY: &[ParamSpec] = &[
    ParamSpec::string("updateMask", UPDATE_MASK),
    ParamSpec::boolean(
        "allowMissing",
        "If set to true, and the deployment is not found, a new deployment will be created. In this situation, `update_mask` is ignored.",
    ),
];

pub const CREATE_API_QUERY: &[ParamSpec] = &[ParamSpec::string(
    "apiId",
    "Required. The ID to use for the api, which will become the final component of the api's resource name. This value should be 4-63 characters, and valid characters are /[a-z][0-9]-/.",
)];

pub const CREATE_API_VERSION_QUERY: &[ParamSpec] = &[ParamSpec::string(
    "apiVersionId",
    "Required. The ID to use for the version, which will become the final component of the version's resource name. This value should be 1-63 characters, and valid characters are /[a-z][0-9]-/.",
)];

pub const CREATE_API_SPEC_QUERY: &[ParamSpec] = &[ParamSpec::string(
    "apiSpecId",
    "Required. The ID to use for the spec, which will become the final component of the spec's resource name. This value should be 4-63 characters, and valid characters are /[a-z][0-9]-/.",
)];

pub const CREATE_API_DEPLOYMENT_QUERY: &[ParamSpec] = &[ParamSpec::string(
    "apiDeploymentId",
    "Required. The ID to use for the deployment, which will become the final component of the deployment's resource name. This value should be 4-63 characters, and valid characters are /[a-z][0-9]-/.",
)];

pub const CREATE_ARTIFACT_QUERY: &[ParamSpec] = &[ParamSpec::string(
    "artifactId",
    "Required. The ID to use for the artifact, which will become the final component of the artifact's resource name. This value should be 4-63 characters, and valid characters are /[a-z][0-9]-/.",
)];

pub const API_FIELDS: &[ParamSpec] = &[
    ParamSpec::string("name", "Input parameter: Resource name."),
    ParamSpec::string("displayName", "Input parameter: Human-meaningful name."),
    ParamSpec::string("description", "Input parameter: A detailed description."),
    ParamSpec::string("createTime", "Input parameter: Output only. Creation timestamp."),
    ParamSpec::string("updateTime", "Input parameter: Output only. Last update timestamp."),
    ParamSpec::string(
        "availability",
        "Input parameter: A user-definable description of the availability of this service. Format: free-form, but we expect single words that describe availability, e.g. \"NONE\", \"TESTING\", \"PREVIEW\", \"GENERAL\", \"DEPRECATED\", \"SHUTDOWN\".",
    ),
    ParamSpec::string(
        "recommendedVersion",
        "Input parameter: The recommended version of the API. Format: apis/{api}/versions/{version}",
    ),
    ParamSpec::string(
        "recommendedDeployment",
        "Input parameter: The recommended deployment of the API. Format: apis/{api}/deployments/{deployment}",
    ),
    ParamSpec::string_map("labels", LABELS),
    ParamSpec::string_map("annotations", ANNOTATIONS),
];

pub const API_VERSION_FIELDS: &[ParamSpec] = &[
    ParamSpec::string("name", "Input parameter: Resource name."),
    ParamSpec::string("displayName", "Input parameter: Human-meaningful name."),
    ParamSpec::string("description", "Input parameter: A detailed description."),
    ParamSpec::string("createTime", "Input parameter: Output only. Creation timestamp."),
    ParamSpec::string("updateTime", "Input parameter: Output only. Last update timestamp."),
    ParamSpec::string(
        "state",
        "Input parameter: A user-definable description of the lifecycle phase of this API version. Format: free-form, but we expect single words that describe API maturity, e.g., \"CONCEPT\", \"DESIGN\", \"DEVELOPMENT\", \"STAGING\", \"PRODUCTION\", \"DEPRECATED\", \"RETIRED\".",
    ),
    ParamSpec::string_map("labels", LABELS),
    ParamSpec::string_map("annotations", ANNOTATIONS),
];

pub const API_SPEC_FIELDS: &[ParamSpec] = &[
    ParamSpec::string("name", "Input parameter: Resource name."),
    ParamSpec::string(
        "filename",
        "Input parameter: A possibly-hierarchical name used to refer to the spec from other specs.",
    ),
    ParamSpec::string("description", "Input parameter: A detailed description."),
    ParamSpec::string(
        "revisionId",
        "Input parameter: Output only. Immutable. The revision ID of the spec. A new revision is committed whenever the spec contents are changed. The format is an 8-character hexadecimal string.",
    ),
    ParamSpec::string(
        "createTime",
        "Input parameter: Output only. Creation timestamp; when the spec resource was created.",
    ),
    ParamSpec::string(
        "revisionCreateTime",
        "Input parameter: Output only. Revision creation timestamp; when the represented revision was created.",
    ),
    ParamSpec::string(
        "revisionUpdateTime",
        "Input parameter: Output only. Last update timestamp: when the represented revision was last modified.",
    ),
    ParamSpec::string(
        "mimeType",
        "Input parameter: A style (format) descriptor for this spec that is specified as a Media Type. Possible values include \"application/vnd.apigee.proto\", \"application/vnd.apigee.openapi\", and \"application/vnd.apigee.graphql\", with possible suffixes representing compression types.",
    ),
    ParamSpec::number(
        "sizeBytes",
        "Input parameter: Output only. The size of the spec file in bytes. If the spec is gzipped, this is the size of the uncompressed spec.",
    ),
    ParamSpec::string(
        "hash",
        "Input parameter: Output only. A SHA-256 hash of the spec's contents. If the spec is gzipped, this is the hash of the uncompressed spec.",
    ),
    ParamSpec::string(
        "sourceUri",
        "Input parameter: The original source URI of the spec (if one exists). This is an external location that can be used for reference purposes but which may not be authoritative since this external resource may change after the spec is retrieved.",
    ),
    ParamSpec::string(
        "contents",
        "Input parameter: Input only. The contents of the spec, base64 encoded. Provided by API callers when specs are created or updated. To access the contents of a spec, use GetApiSpecContents.",
    ),
    ParamSpec::string_map("labels", LABELS),
    ParamSpec::string_map("annotations", ANNOTATIONS),
];

pub const API_DEPLOYMENT_FIELDS: &[ParamSpec] = &[
    ParamSpec::string("name", "Input parameter: Resource name."),
    ParamSpec::string("displayName", "Input parameter: Human-meaningful name."),
    ParamSpec::string("description", "Input parameter: A detailed description."),
    ParamSpec::string(
        "revisionId",
        "Input parameter: Output only. Immutable. The revision ID of the deployment. A new revision is committed whenever the deployment contents are changed. The format is an 8-character hexadecimal string.",
    ),
    ParamSpec::string(
        "createTime",
        "Input parameter: Output only. Creation timestamp; when the deployment resource was created.",
    ),
    ParamSpec::string(
        "revisionCreateTime",
        "Input parameter: Output only. Revision creation timestamp; when the represented revision was created.",
    ),
    ParamSpec::string(
        "revisionUpdateTime",
        "Input parameter: Output only. Last update timestamp: when the represented revision was last modified.",
    ),
    ParamSpec::string(
        "apiSpecRevision",
        "Input parameter: The full resource name (including revision id) of the spec of the API being served by the deployment. Changes to this value will update the revision. Format: apis/{api}/deployments/{deployment}",
    ),
    ParamSpec::string(
        "endpointUri",
        "Input parameter: The address where the deployment is serving. Changes to this value will update the revision.",
    ),
    ParamSpec::string(
        "externalChannelUri",
        "Input parameter: The address of the external channel of the API (e.g. the Developer Portal). Changes to this value will not affect the revision.",
    ),
    ParamSpec::string(
        "intendedAudience",
        "Input parameter: Text briefly identifying the intended audience of the API. Changes to this value will not affect the revision.",
    ),
    ParamSpec::string(
        "accessGuidance",
        "Input parameter: Text briefly describing how to access the endpoint. Changes to this value will not affect the revision.",
    ),
    ParamSpec::string_map("labels", LABELS),
    ParamSpec::string_map("annotations", ANNOTATIONS),
];

pub const ARTIFACT_FIELDS: &[ParamSpec] = &[
    ParamSpec::string("name", "Input parameter: Resource name."),
    ParamSpec::string("createTime", "Input parameter: Output only. Creation timestamp."),
    ParamSpec::string("updateTime", "Input parameter: Output only. Last update timestamp."),
    ParamSpec::string(
        "mimeType",
        "Input parameter: A content type specifier for the artifact. Content type specifiers are Media Types with a possible \"schema\" parameter that specifies a schema for the stored information.",
    ),
    ParamSpec::number(
        "sizeBytes",
        "Input parameter: Output only. The size of the artifact in bytes. If the artifact is gzipped, this is the size of the uncompressed artifact.",
    ),
    ParamSpec::string(
        "hash",
        "Input parameter: Output only. A SHA-256 hash of the artifact's contents. If the artifact is gzipped, this is the hash of the uncompressed artifact.",
    ),
    ParamSpec::string(
        "contents",
        "Input parameter: Input only. The contents of the artifact, base64 encoded. Provided by API callers when artifacts are created or replaced. To access the contents of an artifact, use GetArtifactContents.",
    ),
];

pub const ROLLBACK_API_SPEC_FIELDS: &[ParamSpec] = &[
    ParamSpec::string("name", "Input parameter: Required. The spec being rolled back.").required(),
    ParamSpec::string(
        "revisionId",
        "Input parameter: Required. The revision ID to roll back to. It must be a revision of the same spec.   Example: c7cfa2a8",
    )
    .required(),
];

pub const ROLLBACK_API_DEPLOYMENT_FIELDS: &[ParamSpec] = &[
    ParamSpec::string(
        "name",
        "Input parameter: Required. The deployment being rolled back.",
    )
    .required(),
    ParamSpec::string(
        "revisionId",
        "Input parameter: Required. The revision ID to roll back to. It must be a revision of the same deployment.   Example: c7cfa2a8",
    )
    .required(),
];

pub const TAG_API_SPEC_REVISION_FIELDS: &[ParamSpec] = &[
    ParamSpec::string(
        "name",
        "Input parameter: Required. The name of the spec to be tagged, including the revision ID.",
    )
    .required(),
    ParamSpec::string(
        "tag",
        "Input parameter: Required. The tag to apply. The tag should be at most 40 characters, and match `[a-z][a-z0-9-]{3,39}`.",
    )
    .required(),
];

pub const TAG_API_DEPLOYMENT_REVISION_FIELDS: &[ParamSpec] = &[
    ParamSpec::string(
        "name",
        "Input parameter: Required. The name of the deployment to be tagged, including the revision ID.",
    )
    .required(),
    ParamSpec::string(
        "tag",
        "Input parameter: Required. The tag to apply. The tag should be at most 40 characters, and match `[a-z][a-z0-9-]{3,39}`.",
    )
    .required(),
];
