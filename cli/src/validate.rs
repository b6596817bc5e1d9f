#![deny(missing_docs)]

//! # Validate Command
//!
//! Checks a recorded request against the parameters its operation declares.
//!
//! Request file layout (JSON):
//!
//! ```json
//! {
//!   "method": "POST",
//!   "path": "/v2/pets?dryRun=1",
//!   "query": {"limit": "10"},
//!   "formData": {"name": "rex"},
//!   "files": {"photo": {"fileName": "rex.jpg", "size": 2048}}
//! }
//! ```

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use param_contract_core::request::decode_query_string;
use param_contract_core::{
    RequestFields, RequestParametersConstraint, SwaggerDocument, ValidationOutcome,
};
use serde::Deserialize;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// How the outcome is printed.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One human-readable line.
    #[default]
    Text,
    /// `{"valid": bool, "error": {...}}`
    Json,
}

/// Arguments for the validate command.
#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Path to the Swagger 2.0 document (YAML or JSON).
    #[clap(long, env = "PARAM_CONTRACT_SCHEMA", default_value = "docs/swagger.yaml")]
    pub schema: PathBuf,

    /// Path to the request file.
    #[clap(long, env = "PARAM_CONTRACT_REQUEST")]
    pub request: PathBuf,

    /// Path template to validate against. Matched from the request path when omitted.
    #[clap(long)]
    pub path_template: Option<String>,

    /// HTTP method. Taken from the request file when omitted.
    #[clap(long)]
    pub method: Option<String>,

    /// Output format.
    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// A recorded request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestFile {
    /// HTTP method.
    #[serde(default)]
    pub method: Option<String>,
    /// Request path, optionally with a query string.
    #[serde(default)]
    pub path: Option<String>,
    /// Already decomposed fields.
    #[serde(flatten)]
    pub fields: RequestFields,
}

impl RequestFile {
    /// Fields with the path's query string merged in. Explicit `query` entries win.
    pub fn into_fields(self) -> RequestFields {
        let mut fields = self.fields;
        if let Some((_, raw)) = self.path.as_deref().and_then(|p| p.split_once('?')) {
            for (name, value) in decode_query_string(raw) {
                fields.query.entry(name).or_insert(value);
            }
        }
        fields
    }
}

/// Executes the validation and prints the outcome to `out`.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `out` - Destination for the rendered outcome.
pub fn execute(args: &ValidateArgs, out: &mut impl Write) -> CliResult<ValidationOutcome> {
    let doc = SwaggerDocument::from_path(&args.schema)?;

    let raw = fs::read_to_string(&args.request)?;
    let request: RequestFile = serde_json::from_str(&raw)?;

    let method = args
        .method
        .clone()
        .or_else(|| request.method.clone())
        .ok_or_else(|| CliError::General("No HTTP method given (use --method)".into()))?;

    let template = match (&args.path_template, &request.path) {
        (Some(t), _) => t.clone(),
        (None, Some(p)) => doc
            .find_path_template(p)
            .map(str::to_string)
            .ok_or_else(|| CliError::General(format!("No path template matches '{}'", p)))?,
        (None, None) => {
            return Err(CliError::General(
                "No request path given (use --path-template)".into(),
            ))
        }
    };
    debug!(template = %template, method = %method, "validating request");

    let fields = request.into_fields();
    let outcome = RequestParametersConstraint::new(&doc, template.as_str(), method.as_str())
        .evaluate(&fields)?;

    render(&outcome, args.format, out)?;
    Ok(outcome)
}

fn render(outcome: &ValidationOutcome, format: OutputFormat, out: &mut impl Write) -> CliResult<()> {
    match format {
        OutputFormat::Text => match outcome.error() {
            None => writeln!(out, "Request parameters are valid")?,
            Some(err) => writeln!(out, "{}", err)?,
        },
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, outcome)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
