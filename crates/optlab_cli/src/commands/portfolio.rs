//! Portfolio command implementation
//!
//! Loads legs and a sampling window from a file and computes the aggregated
//! payoff curve.

use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::config::{OptlabConfig, OutputFormat};
use crate::input::PortfolioFile;
use crate::Result;

/// Run the portfolio command
pub fn run<W: Write>(
    file: &Path,
    config: &OptlabConfig,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let portfolio_file = PortfolioFile::load(file)?;
    let portfolio = portfolio_file.portfolio()?;
    let window = portfolio_file.window(config.step)?;

    info!(
        legs = portfolio.len(),
        spot = window.spot(),
        samples = window.len(),
        net_premium = portfolio.net_premium(),
        "Computing portfolio payoff"
    );

    let curve = aggregate(&portfolio, &window)?;
    super::emit(portfolio.legs(), &curve, format, config.stride, out)
}

#[cfg(not(feature = "parallel"))]
fn aggregate(
    portfolio: &optlab_engine::Portfolio<f64>,
    window: &optlab_core::SamplingWindow<f64>,
) -> Result<optlab_core::PayoffCurve<f64>> {
    Ok(portfolio.payoff(window)?)
}

#[cfg(feature = "parallel")]
fn aggregate(
    portfolio: &optlab_engine::Portfolio<f64>,
    window: &optlab_core::SamplingWindow<f64>,
) -> Result<optlab_core::PayoffCurve<f64>> {
    Ok(optlab_engine::compute_portfolio_payoff_par(
        portfolio.legs(),
        window,
    )?)
}
