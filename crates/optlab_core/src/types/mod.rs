//! Fundamental types: option type, transaction direction and errors.

pub mod error;
pub mod option_type;

pub use error::PayoffError;
pub use option_type::{Direction, OptionType};
