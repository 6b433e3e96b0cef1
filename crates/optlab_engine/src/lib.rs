//! # optlab_engine (L2: Payoff Engine)
//!
//! Pure payoff computation over option legs.
//!
//! This crate provides:
//! - Single-leg payoff curves ([`compute_payoff`])
//! - Multi-leg aggregation on a shared sampling window
//!   ([`compute_portfolio_payoff`], [`Portfolio`])
//! - Strategy presets (straddles, spreads, butterflies, iron condors)
//! - Curve analytics (extremes and break-evens)
//! - Optional rayon-parallel aggregation (`parallel` feature)
//!
//! ## Design Principles
//!
//! - **Stateless**: every call returns a fresh curve, nothing is cached
//! - **Atomic failures**: an invalid input yields an error, never a partial curve
//! - **Generic numerics**: everything is generic over `T: Float`
//!
//! ## Example
//!
//! ```
//! use optlab_core::{Direction, SamplingWindow};
//! use optlab_engine::{compute_portfolio_payoff, CurveSummary, StrategyKind};
//!
//! let legs = StrategyKind::Straddle
//!     .build(&[100.0_f64], &[3.0, 2.0], Direction::Buy, 1)
//!     .unwrap();
//! let window = SamplingWindow::new(100.0, 10.0).unwrap();
//!
//! let curve = compute_portfolio_payoff(&legs, &window).unwrap();
//! let summary = CurveSummary::from_curve(&curve).unwrap();
//! assert_eq!(summary.breakevens.len(), 2);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analysis;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod payoff;
pub mod portfolio;
pub mod strategies;

pub use analysis::{breakevens, CurveSummary};
#[cfg(feature = "parallel")]
pub use parallel::compute_portfolio_payoff_par;
pub use payoff::compute_payoff;
pub use portfolio::{compute_portfolio_payoff, Portfolio};
pub use strategies::StrategyKind;
