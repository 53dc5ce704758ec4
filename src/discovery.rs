// Tool-registry discovery schema.
//
// External orchestrators fetch this document to learn how to call the
// validate endpoint. It is static: every route and CLI command that serves
// it reads this one value.

use serde::Serialize;

/// Top-level discovery document.
#[derive(Debug, Serialize)]
pub struct DiscoverySchema {
    pub functions: &'static [ToolFunction],
}

/// One callable function exposed to the orchestrator.
#[derive(Debug, Serialize)]
pub struct ToolFunction {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: &'static [ToolParameter],
    pub endpoint: &'static str,
    #[serde(rename = "httpmethod")]
    pub http_method: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ToolParameter {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub param_type: &'static str,
    pub description: &'static str,
    pub required: bool,
}

pub static DISCOVERY_SCHEMA: DiscoverySchema = DiscoverySchema {
    functions: &[ToolFunction {
        name: "validateContent",
        description: "Validates content against prohibited categories (gambling, cryptocurrency, \
                      adult content, medical claims, financial advice) to ensure platform \
                      compliance and brand safety before publication",
        parameters: &[ToolParameter {
            name: "content",
            param_type: "string",
            description: "Text content to validate for brand risk",
            required: true,
        }],
        endpoint: "/api/validate",
        http_method: "POST",
    }],
};
