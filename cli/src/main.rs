#![deny(missing_docs)]

//! # Param Contract CLI
//!
//! Command Line Interface for the request parameter validator.
//!
//! Supported Commands:
//! - `validate`: Checks a recorded request against its operation's parameters.
//! - `params`: Prints the parameters an operation declares.
//!
//! Exit codes: `0` valid, `1` request violates the contract, `2` usage or document error.

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::error::CliResult;

mod error;
mod logging;
mod params;
mod validate;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Request parameter contract checker")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[clap(long, short, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a recorded request against the schema.
    Validate(validate::ValidateArgs),
    /// Print the resolved parameters of an operation.
    Params(params::ParamsArgs),
}

fn run(cli: &Cli) -> CliResult<bool> {
    let mut stdout = io::stdout().lock();
    match &cli.command {
        Commands::Validate(args) => Ok(validate::execute(args, &mut stdout)?.is_valid()),
        Commands::Params(args) => {
            params::execute(args, &mut stdout)?;
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_validate_args() {
        let cli = Cli::try_parse_from([
            "param-contract",
            "validate",
            "--schema",
            "api.yaml",
            "--request",
            "req.json",
            "--method",
            "post",
            "--format",
            "json",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Validate(args) => {
                assert_eq!(args.schema.to_str(), Some("api.yaml"));
                assert_eq!(args.method.as_deref(), Some("post"));
                assert_eq!(args.format, validate::OutputFormat::Json);
                assert!(args.path_template.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
