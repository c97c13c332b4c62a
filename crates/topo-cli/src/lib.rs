#![forbid(unsafe_code)]

//! `topo` command-line front end for the topology layout engine.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod util;

pub use cli::run_from_env;
pub use error::{CliError, Result};
