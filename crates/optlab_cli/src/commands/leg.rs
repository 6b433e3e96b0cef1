//! Leg command implementation
//!
//! Computes the payoff curve of a single option contract.

use std::io::Write;
use tracing::info;

use optlab_core::{Contract, SamplingWindow};
use optlab_engine::compute_payoff;

use crate::config::{OptlabConfig, OutputFormat};
use crate::Result;

/// Arguments of the `leg` command
#[derive(Debug, Clone)]
pub struct LegArgs {
    /// Option type label (Call or Put)
    pub option_type: String,
    /// Strike price
    pub strike: f64,
    /// Premium per unit
    pub premium: f64,
    /// Direction label (Buy or Sell)
    pub direction: String,
    /// Number of contracts
    pub quantity: u32,
    /// Current underlying price
    pub spot: f64,
    /// Window half-width in percent of spot
    pub spot_range: f64,
}

/// Run the leg command
pub fn run<W: Write>(
    args: &LegArgs,
    config: &OptlabConfig,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let contract = Contract::parse(
        &args.option_type,
        args.strike,
        &args.direction,
        args.premium,
        args.quantity,
    )?;
    let window = SamplingWindow::new(args.spot, args.spot_range)?.with_step(config.step)?;

    info!(
        option_type = %contract.option_type(),
        direction = %contract.direction(),
        strike = contract.strike(),
        samples = window.len(),
        "Computing single-leg payoff"
    );

    let curve = compute_payoff(&contract, &window)?;
    super::emit(&[contract], &curve, format, config.stride, out)
}
