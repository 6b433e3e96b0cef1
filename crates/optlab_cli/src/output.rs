//! Rendering of payoff results as table, JSON or CSV.

use serde::Serialize;
use std::io::Write;

use optlab_core::{Contract, PayoffCurve};
use optlab_engine::CurveSummary;

use crate::config::OutputFormat;
use crate::error::Result;

/// Everything a command produces: the legs, their curve and its summary.
#[derive(Debug, Serialize)]
pub struct PayoffReport<'a> {
    /// Legs the curve was computed from
    pub legs: &'a [Contract<f64>],
    /// Net premium paid (negative) or received (positive)
    pub net_premium: f64,
    /// Aggregated payoff curve
    pub curve: &'a PayoffCurve<f64>,
    /// Extremes and break-evens of the curve
    pub summary: Option<CurveSummary<f64>>,
}

impl<'a> PayoffReport<'a> {
    /// Builds a report, computing the summary and net premium.
    pub fn new(legs: &'a [Contract<f64>], curve: &'a PayoffCurve<f64>) -> Self {
        Self {
            legs,
            net_premium: legs.iter().map(|leg| leg.net_premium()).sum(),
            curve,
            summary: CurveSummary::from_curve(curve),
        }
    }
}

/// Writes `report` to `out` in the requested format.
///
/// `stride` only affects table output: every `stride`-th sample is printed,
/// and the last sample is always included.
pub fn render<W: Write>(
    report: &PayoffReport<'_>,
    format: OutputFormat,
    stride: usize,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Table => render_table(report, stride.max(1), out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Csv => render_csv(report.curve, out),
    }
}

fn render_table<W: Write>(report: &PayoffReport<'_>, stride: usize, out: &mut W) -> Result<()> {
    writeln!(out, "Legs:")?;
    for (i, leg) in report.legs.iter().enumerate() {
        writeln!(
            out,
            "  {:>2}. {:<4} {:<4} x{:<4} K={:<10.4} premium={:.4}",
            i + 1,
            leg.direction(),
            leg.option_type(),
            leg.quantity(),
            leg.strike(),
            leg.premium()
        )?;
    }
    writeln!(out, "Net premium: {:.4}", report.net_premium)?;

    writeln!(out)?;
    writeln!(out, "┌──────────────┬──────────────┐")?;
    writeln!(out, "│ Spot         │ Payoff       │")?;
    writeln!(out, "├──────────────┼──────────────┤")?;

    let last = report.curve.len().saturating_sub(1);
    for (i, (spot, payoff)) in report.curve.iter().enumerate() {
        if i % stride == 0 || i == last {
            writeln!(out, "│ {:>12.4} │ {:>12.4} │", spot, payoff)?;
        }
    }
    writeln!(out, "└──────────────┴──────────────┘")?;

    if let Some(summary) = &report.summary {
        writeln!(out)?;
        writeln!(
            out,
            "Max profit: {:.4} at spot {:.4}",
            summary.max_profit, summary.max_profit_spot
        )?;
        writeln!(
            out,
            "Max loss:   {:.4} at spot {:.4}",
            summary.max_loss, summary.max_loss_spot
        )?;
        if summary.breakevens.is_empty() {
            writeln!(out, "Break-even: none in window")?;
        } else {
            let rendered: Vec<String> = summary
                .breakevens
                .iter()
                .map(|b| format!("{:.4}", b))
                .collect();
            writeln!(out, "Break-even: {}", rendered.join(", "))?;
        }
    }

    Ok(())
}

fn render_csv<W: Write>(curve: &PayoffCurve<f64>, out: &mut W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["spot", "payoff"])?;
    for (spot, payoff) in curve.iter() {
        writer.write_record([spot.to_string(), payoff.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
