#![deny(missing_docs)]

//! # Params Command
//!
//! Prints the resolved parameter list of one operation, after path-level
//! merging and `$ref` resolution.

use std::io::Write;
use std::path::PathBuf;

use param_contract_core::{ParameterResolver, SwaggerDocument};

use crate::error::CliResult;

/// Arguments for the params command.
#[derive(clap::Args, Debug, Clone)]
pub struct ParamsArgs {
    /// Path to the Swagger 2.0 document (YAML or JSON).
    #[clap(long, env = "PARAM_CONTRACT_SCHEMA", default_value = "docs/swagger.yaml")]
    pub schema: PathBuf,

    /// Path template, e.g. `/pets/{id}`.
    #[clap(long)]
    pub path_template: String,

    /// HTTP method.
    #[clap(long, default_value = "GET")]
    pub method: String,
}

/// Executes the lookup and writes the parameters as pretty JSON.
pub fn execute(args: &ParamsArgs, out: &mut impl Write) -> CliResult<()> {
    let doc = SwaggerDocument::from_path(&args.schema)?;
    let specs = doc.resolve_parameters(&args.path_template, &args.method)?;
    serde_json::to_writer_pretty(&mut *out, &specs)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_execute_prints_merged_parameters() {
        let dir = tempdir().unwrap();
        let schema = dir.path().join("swagger.json");
        fs::write(
            &schema,
            r##"{
                "swagger": "2.0",
                "parameters": {"Q": {"name": "q", "in": "query", "type": "string"}},
                "paths": {"/find": {
                    "parameters": [{"$ref": "#/parameters/Q"}],
                    "get": {"parameters": [{"name": "n", "in": "query", "type": "integer", "required": true}]}
                }}
            }"##,
        )
        .unwrap();

        let args = ParamsArgs {
            schema,
            path_template: "/find".into(),
            method: "get".into(),
        };
        let mut out = Vec::new();
        execute(&args, &mut out).unwrap();

        let printed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            printed,
            serde_json::json!([
                {"name": "q", "in": "query", "type": "string", "required": false},
                {"name": "n", "in": "query", "type": "integer", "required": true}
            ])
        );
    }

    #[test]
    fn test_execute_missing_schema() {
        let dir = tempdir().unwrap();
        let args = ParamsArgs {
            schema: dir.path().join("missing.yaml"),
            path_template: "/find".into(),
            method: "GET".into(),
        };
        let err = execute(&args, &mut Vec::new()).unwrap_err();
        assert!(format!("{}", err).contains("IO Error"));
    }
}
