//! JSON Schema check of untyped config documents.
//!
//! Runs before a document is deserialized, so a wrong type (e.g. a numeric
//! `defaultBrowser`) is reported as a config problem rather than a serde
//! error.

use std::sync::OnceLock;

use serde_json::{json, Value};

use crate::validate::{ValidationError, ValidationIssue};

/// Schema for config documents. Matcher arrays accept any element; elements
/// of unknown shape simply never match.
pub fn config_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "type": "object",
        "required": ["defaultBrowser"],
        "properties": {
            "defaultBrowser": { "type": "string" },
            "options": {
                "type": "object",
                "properties": {
                    "urlShorteners": { "type": "array", "items": { "type": "string" } },
                    "logRequests": { "type": "boolean" }
                }
            },
            "rewrite": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["match", "url"],
                    "properties": {
                        "match": { "$ref": "#/$defs/matcher" },
                        "url": { "type": "string" }
                    }
                }
            },
            "handlers": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["match", "browser"],
                    "properties": {
                        "match": { "$ref": "#/$defs/matcher" },
                        "browser": { "$ref": "#/$defs/browser" }
                    }
                }
            }
        },
        "$defs": {
            "matcher": {
                "anyOf": [
                    { "type": "string" },
                    {
                        "type": "object",
                        "required": ["regex"],
                        "properties": { "regex": { "type": "string" } }
                    },
                    { "type": "array" }
                ]
            },
            "browser": {
                "anyOf": [
                    { "type": "string" },
                    { "$ref": "#/$defs/browserConfig" }
                ]
            },
            "browserConfig": {
                "type": "object",
                "required": ["name"],
                "properties": {
                    "name": { "type": "string" },
                    "appType": { "enum": ["name", "bundleId", "bundleID", "path", "none"] },
                    "openInBackground": { "type": "boolean" },
                    "profile": { "type": "string" },
                    "args": { "type": "array", "items": { "type": "string" } }
                }
            }
        }
    })
}

/// Compiled [`config_schema`].
pub struct SchemaValidator {
    inner: jsonschema::Validator,
}

impl SchemaValidator {
    pub fn new() -> Result<Self, ValidationError> {
        let inner = jsonschema::validator_for(&config_schema()).map_err(|err| {
            ValidationIssue::new("$schema", format!("config schema does not compile: {err}"))
        })?;
        Ok(Self { inner })
    }

    /// Process-wide instance, compiled on first use.
    pub fn shared() -> Result<&'static SchemaValidator, ValidationError> {
        static SHARED: OnceLock<Result<SchemaValidator, ValidationError>> = OnceLock::new();
        SHARED.get_or_init(SchemaValidator::new).as_ref().map_err(|err| err.clone())
    }

    /// Checks `document`; every violation becomes one issue.
    pub fn validate(&self, document: &Value) -> Result<(), ValidationError> {
        let issues = self
            .inner
            .iter_errors(document)
            .map(|err| ValidationIssue::new("", err.to_string()))
            .collect();
        ValidationError::check(issues)
    }
}

impl std::fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaValidator").finish_non_exhaustive()
    }
}
