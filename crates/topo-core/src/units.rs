#![forbid(unsafe_code)]

//! Density conversion between density-independent and physical pixels.

/// Baseline density: one dp equals one physical pixel at 160 dpi.
pub const DENSITY_DEFAULT: u32 = 160;

/// Convert density-independent pixels to physical pixels at `dpi`.
#[inline]
pub fn dp_to_px(dp: f64, dpi: u32) -> f64 {
    dp * f64::from(dpi) / f64::from(DENSITY_DEFAULT)
}
