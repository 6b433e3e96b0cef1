//! # optlab_core: Contract Model for Option Payoff Analysis
//!
//! ## Layer 1 (Foundation) Role
//!
//! optlab_core is the bottom layer of the workspace, providing:
//! - [`types`]: closed enumerations for option type and transaction direction,
//!   plus the shared [`PayoffError`]
//! - [`contract`]: validated, immutable option legs
//! - [`window`]: the spot-price sampling window shared by all legs
//! - [`curve`]: the payoff curve value produced by the engine
//!
//! The crate performs no I/O and holds no mutable state. All numeric types
//! are generic over `T: num_traits::Float`.
//!
//! ## Example
//!
//! ```
//! use optlab_core::{Contract, Direction, OptionType, SamplingWindow};
//!
//! let leg = Contract::new(OptionType::Call, 102.0_f64, Direction::Buy, 2.0, 1).unwrap();
//! let window = SamplingWindow::new(100.0_f64, 10.0).unwrap();
//!
//! let at_top = leg.payoff_at(window.upper());
//! assert!((at_top - 6.0).abs() < 1e-9);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod contract;
pub mod curve;
pub mod types;
pub mod window;

pub use contract::{Contract, DEFAULT_QUANTITY};
pub use curve::PayoffCurve;
pub use types::{Direction, OptionType, PayoffError};
pub use window::{SamplingWindow, DEFAULT_STEP_PCT, MAX_SAMPLES};
