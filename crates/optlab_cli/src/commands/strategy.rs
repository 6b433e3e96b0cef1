//! Strategy command implementation
//!
//! Builds a named multi-leg preset and computes its payoff curve.

use std::io::Write;
use tracing::info;

use optlab_core::{Direction, SamplingWindow};
use optlab_engine::{compute_portfolio_payoff, StrategyKind};

use crate::config::{OptlabConfig, OutputFormat};
use crate::Result;

/// Arguments of the `strategy` command
#[derive(Debug, Clone)]
pub struct StrategyArgs {
    /// Preset name, e.g. `straddle` or `iron-condor`
    pub kind: String,
    /// Strikes in ascending order
    pub strikes: Vec<f64>,
    /// Premiums in leg order
    pub premiums: Vec<f64>,
    /// Buy the structure as named, or sell (mirror) it
    pub direction: String,
    /// Number of contracts per leg
    pub quantity: u32,
    /// Current underlying price
    pub spot: f64,
    /// Window half-width in percent of spot
    pub spot_range: f64,
}

/// Run the strategy command
pub fn run<W: Write>(
    args: &StrategyArgs,
    config: &OptlabConfig,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let kind: StrategyKind = args.kind.parse()?;
    let direction: Direction = args.direction.parse()?;
    let legs = kind.build(&args.strikes, &args.premiums, direction, args.quantity)?;
    let window = SamplingWindow::new(args.spot, args.spot_range)?.with_step(config.step)?;

    info!(
        strategy = %kind,
        %direction,
        legs = legs.len(),
        samples = window.len(),
        "Computing strategy payoff"
    );

    let curve = compute_portfolio_payoff(&legs, &window)?;
    super::emit(&legs, &curve, format, config.stride, out)
}
