use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::commands::{ClampArgs, DragArgs, ScaleArgs, run_clamp, run_drag, run_scale};
use crate::error::{CliError, Result};
use crate::logging;

#[derive(Debug, Parser)]
#[command(
    name = "topo",
    about = "Scale and snap multi-display topologies for a drag-and-drop arrangement pane",
    version
)]
pub struct Cli {
    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute the display-to-pane mapping and every block's bounds.
    Scale(ScaleArgs),

    /// Snap a moving display to the nearest clear adjacent position.
    Clamp(ClampArgs),

    /// Replay a recorded block drag and report the dropped topology.
    Drag(DragArgs),
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_json)?;
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let rendered = match &cli.command {
        Commands::Scale(args) => render(&run_scale(args)?)?,
        Commands::Clamp(args) => render(&run_clamp(args)?)?,
        Commands::Drag(args) => render(&run_drag(args)?)?,
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}").map_err(|source| CliError::Io {
        path: "stdout".into(),
        source,
    })
}

/// Pretty-printed JSON for a report.
pub fn render<T: Serialize>(report: &T) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|source| CliError::Json {
        origin: "report".to_string(),
        source,
    })
}
