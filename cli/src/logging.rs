#![deny(missing_docs)]

//! # Logging
//!
//! Installs the `tracing` subscriber. Logs go to stderr so stdout only
//! carries validation results.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Initializes logging from `RUST_LOG`, falling back to `warn` (`debug` when verbose).
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if installed.is_err() {
        debug!("tracing subscriber already installed, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_keeps_first_subscriber() {
        init(false);
        init(true);
        debug!("still logging");
    }
}
