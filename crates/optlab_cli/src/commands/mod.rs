//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod leg;
pub mod portfolio;
pub mod strategy;

use std::io::Write;
use tracing::debug;

use optlab_core::{Contract, PayoffCurve};

use crate::config::OutputFormat;
use crate::output::{render, PayoffReport};
use crate::Result;

/// Renders a computed curve and its legs to `out`.
pub(crate) fn emit<W: Write>(
    legs: &[Contract<f64>],
    curve: &PayoffCurve<f64>,
    format: OutputFormat,
    stride: usize,
    out: &mut W,
) -> Result<()> {
    debug!(samples = curve.len(), %format, "Rendering payoff curve");
    let report = PayoffReport::new(legs, curve);
    render(&report, format, stride, out)
}
