//! Layout constraint resolution.
//!
//! Precedence, lowest first: built-in defaults, the `--config` JSON file,
//! then individual command-line flags.

use std::path::{Path, PathBuf};

use clap::Args;
use topo_core::units::{DENSITY_DEFAULT, dp_to_px};
use topo_layout::LayoutConstraints;
use topo_layout::scale::DEFAULT_MIN_EDGE_DP;

use crate::error::{CliError, Result};
use crate::util::read_json;

#[derive(Debug, Clone, Default, Args)]
pub struct ConstraintArgs {
    /// JSON file with `pane_width`, `min_edge_length`, `max_block_ratio`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Pane width in pixels.
    #[arg(long)]
    pub pane_width: Option<u32>,

    /// Minimum block edge in pane pixels.
    #[arg(long, conflicts_with = "min_edge_dp")]
    pub min_edge_length: Option<f64>,

    /// Minimum block edge in dp, converted with `--dpi`.
    #[arg(long)]
    pub min_edge_dp: Option<f64>,

    /// Density of the display showing the pane.
    #[arg(long)]
    pub dpi: Option<u32>,

    /// Ceiling for the block-to-display ratio, in (0, 1].
    #[arg(long)]
    pub max_block_ratio: Option<f64>,
}

impl ConstraintArgs {
    pub fn resolve(&self) -> Result<LayoutConstraints> {
        let mut constraints = match &self.config {
            Some(path) => load_constraints(path)?,
            None => LayoutConstraints::default(),
        };

        if let Some(pane_width) = self.pane_width {
            constraints.pane_width = pane_width;
        }
        if let Some(min_edge_length) = self.min_edge_length {
            constraints.min_edge_length = min_edge_length;
        } else if self.min_edge_dp.is_some() || self.dpi.is_some() {
            let dp = self.min_edge_dp.unwrap_or(DEFAULT_MIN_EDGE_DP);
            let dpi = self.dpi.unwrap_or(DENSITY_DEFAULT);
            if dpi == 0 {
                return Err(CliError::invalid_argument("--dpi must be positive"));
            }
            constraints.min_edge_length = dp_to_px(dp, dpi);
        }
        if let Some(max_block_ratio) = self.max_block_ratio {
            constraints.max_block_ratio = max_block_ratio;
        }

        tracing::debug!(
            pane_width = constraints.pane_width,
            min_edge_length = constraints.min_edge_length,
            max_block_ratio = constraints.max_block_ratio,
            "resolved layout constraints"
        );
        Ok(constraints)
    }
}

pub fn load_constraints(path: &Path) -> Result<LayoutConstraints> {
    read_json(path)
}
