//! # optlab CLI
//!
//! Command-line front end for the optlab payoff engine.
//!
//! The binary is a thin clap layer over the [`commands`] module; every
//! command takes the effective [`config::OptlabConfig`] and a writer, so the
//! same code paths are exercised by the integration tests.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, Result};
