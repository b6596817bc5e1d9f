#![deny(missing_docs)]

//! # Swagger Document
//!
//! Minimal view of a Swagger 2.0 document: enough to answer "which
//! parameters does `METHOD /template` declare". Everything else in the
//! document (responses, definitions, security) is skipped during decoding.
//!
//! Parameter entries stay undecoded until an operation asks for them, so a
//! malformed entry only affects the operations that use it.

use crate::error::{AppError, AppResult};
use crate::params::ParameterSpec;
use crate::resolver::ParameterResolver;
use crate::swagger::ref_utils::local_entry_name;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// A single operation (e.g. the `get` of a path).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Operation {
    /// Optional operation identifier.
    #[serde(rename = "operationId", default)]
    pub operation_id: Option<String>,
    /// Operation-level parameter entries, inline or `$ref`.
    #[serde(default)]
    pub parameters: Vec<JsonValue>,
}

/// Operations and shared parameters of one path template.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PathItem {
    /// Parameter entries common to all operations in this path.
    #[serde(default)]
    pub parameters: Vec<JsonValue>,
    /// GET operation.
    pub get: Option<Operation>,
    /// PUT operation.
    pub put: Option<Operation>,
    /// POST operation.
    pub post: Option<Operation>,
    /// DELETE operation.
    pub delete: Option<Operation>,
    /// OPTIONS operation.
    pub options: Option<Operation>,
    /// HEAD operation.
    pub head: Option<Operation>,
    /// PATCH operation.
    pub patch: Option<Operation>,
}

impl PathItem {
    /// Looks up an operation by HTTP method, ignoring case.
    pub fn operation(&self, method: &str) -> Option<&Operation> {
        match method.to_ascii_lowercase().as_str() {
            "get" => self.get.as_ref(),
            "put" => self.put.as_ref(),
            "post" => self.post.as_ref(),
            "delete" => self.delete.as_ref(),
            "options" => self.options.as_ref(),
            "head" => self.head.as_ref(),
            "patch" => self.patch.as_ref(),
            _ => None,
        }
    }
}

/// The parts of a Swagger 2.0 document used for parameter lookup.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SwaggerDocument {
    /// Declared Swagger version, `"2.0"`.
    #[serde(default)]
    pub swagger: Option<String>,
    /// OpenAPI 3.x version marker, only used to warn about unsupported shapes.
    #[serde(default)]
    pub openapi: Option<String>,
    /// Prefix shared by all paths.
    #[serde(rename = "basePath", default)]
    pub base_path: Option<String>,
    /// Path templates in declaration order.
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
    /// Reusable parameter entries (`#/parameters/...`).
    #[serde(default)]
    pub parameters: IndexMap<String, JsonValue>,
}

impl SwaggerDocument {
    /// Parses a document from YAML text.
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        let doc: Self = serde_yaml::from_str(content)
            .map_err(|e| AppError::Parse(format!("Failed to parse Swagger YAML: {}", e)))?;
        doc.check_version();
        Ok(doc)
    }

    /// Parses a document from JSON text.
    pub fn from_json_str(content: &str) -> AppResult<Self> {
        let doc: Self = serde_json::from_str(content)
            .map_err(|e| AppError::Parse(format!("Failed to parse Swagger JSON: {}", e)))?;
        doc.check_version();
        Ok(doc)
    }

    /// Reads a document from disk. `.json` files are read as JSON, anything else as YAML.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        debug!(path = %path.display(), json = is_json, "loading schema document");
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    fn check_version(&self) {
        if self.swagger.is_none() {
            if let Some(v) = &self.openapi {
                warn!(version = %v, "OpenAPI 3.x document: only 2.0 style parameters are understood");
            }
        }
    }

    /// Returns the merged parameter list for `method` on `path_template`.
    ///
    /// Path-level parameters come first; an operation parameter with the same
    /// `(name, in)` replaces the path-level one in place, others are appended.
    /// A malformed entry on this operation is an `AppError::Parse` naming its position.
    pub fn parameters(&self, path_template: &str, method: &str) -> AppResult<Vec<ParameterSpec>> {
        let item = self.paths.get(path_template).ok_or_else(|| {
            AppError::Schema(format!("Path '{}' not found in schema", path_template))
        })?;
        let method = method.to_ascii_uppercase();
        let operation = item.operation(&method).ok_or_else(|| {
            AppError::Schema(format!(
                "Method '{}' not defined for path '{}'",
                method, path_template
            ))
        })?;

        let mut merged: Vec<ParameterSpec> = Vec::new();
        for (index, raw) in item.parameters.iter().enumerate() {
            let origin = format!("path-level parameter #{} of '{}'", index, path_template);
            merged.push(self.resolve(raw, &origin)?);
        }
        for (index, raw) in operation.parameters.iter().enumerate() {
            let origin = format!("parameter #{} of {} '{}'", index, method, path_template);
            let spec = self.resolve(raw, &origin)?;
            match merged.iter_mut().find(|p| p.key() == spec.key()) {
                Some(existing) => *existing = spec,
                None => merged.push(spec),
            }
        }

        debug!(
            path = path_template,
            method = %method,
            count = merged.len(),
            "resolved parameters"
        );
        Ok(merged)
    }

    /// Decodes one entry, following local `$ref`s.
    fn resolve(&self, raw: &JsonValue, origin: &str) -> AppResult<ParameterSpec> {
        let mut visiting: HashSet<&str> = HashSet::new();
        let mut current = raw;

        while let Some(reference) = current.get("$ref").and_then(JsonValue::as_str) {
            if !visiting.insert(reference) {
                return Err(AppError::Schema(format!(
                    "Circular parameter reference '{}' in {}",
                    reference, origin
                )));
            }
            current = local_entry_name(reference, "parameters")
                .and_then(|name| self.parameters.get(&name))
                .ok_or_else(|| {
                    AppError::Schema(format!(
                        "Unresolvable parameter reference '{}' in {}",
                        reference, origin
                    ))
                })?;
        }

        ParameterSpec::deserialize(current).map_err(|e| {
            warn!(origin, error = %e, "malformed parameter entry");
            AppError::Parse(format!("Malformed {}: {}", origin, e))
        })
    }
}

impl ParameterResolver for SwaggerDocument {
    fn resolve_parameters(&self, path_template: &str, method: &str) -> AppResult<Vec<ParameterSpec>> {
        self.parameters(path_template, method)
    }
}
