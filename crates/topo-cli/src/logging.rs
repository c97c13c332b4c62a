//! Log subscriber setup. Logs go to stderr; stdout carries only reports.

use tracing_subscriber::EnvFilter;

use crate::error::{CliError, Result};

/// Environment variable holding the `EnvFilter` directives.
pub const LOG_ENV: &str = "TOPO_LOG";

const DEFAULT_DIRECTIVES: &str = "warn";

pub fn init(json: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|error| CliError::Logging {
        message: error.to_string(),
    })
}
