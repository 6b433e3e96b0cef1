//! Portfolio file loading.
//!
//! A portfolio file carries the shared sampling window and the list of legs,
//! in TOML or JSON chosen by file extension:
//!
//! ```toml
//! spot = 100.0
//! spot_range = 10.0
//!
//! [[legs]]
//! option_type = "Call"
//! strike = 102.0
//! direction = "Buy"
//! premium = 2.0
//! quantity = 1
//! ```

use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use optlab_core::{Contract, SamplingWindow, DEFAULT_QUANTITY};
use optlab_engine::Portfolio;

use crate::error::{CliError, Result};

/// One leg as written in a portfolio file, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct LegSpec {
    /// Option type label (Call or Put)
    pub option_type: String,
    /// Strike price
    pub strike: f64,
    /// Direction label (Buy or Sell)
    pub direction: String,
    /// Premium per unit
    pub premium: f64,
    /// Number of contracts
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    DEFAULT_QUANTITY
}

impl LegSpec {
    /// Validates the leg into a contract.
    pub fn to_contract(&self) -> Result<Contract<f64>> {
        Ok(Contract::parse(
            &self.option_type,
            self.strike,
            &self.direction,
            self.premium,
            self.quantity,
        )?)
    }
}

/// Contents of a portfolio file.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioFile {
    /// Current underlying price
    pub spot: f64,
    /// Half-width of the window in percent of spot
    pub spot_range: f64,
    /// Sampling granularity override, in percent of spot
    #[serde(default)]
    pub step: Option<f64>,
    /// Option legs, validated by [`PortfolioFile::contracts`]
    pub legs: Vec<LegSpec>,
}

impl PortfolioFile {
    /// Load a portfolio from a `.toml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        let file = match extension.as_deref() {
            Some("toml") => Self::from_toml(&content)?,
            Some("json") => Self::from_json(&content)?,
            other => {
                return Err(CliError::InvalidArgument(format!(
                    "Unsupported portfolio extension {:?}. Supported: toml, json",
                    other.unwrap_or("")
                )))
            }
        };

        debug!(
            path = %path.display(),
            legs = file.legs.len(),
            "Loaded portfolio file"
        );
        Ok(file)
    }

    /// Parse a portfolio from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::parse(e.to_string()))
    }

    /// Parse a portfolio from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| CliError::parse(e.to_string()))
    }

    /// Sampling window described by the file, falling back to `default_step`.
    pub fn window(&self, default_step: f64) -> Result<SamplingWindow<f64>> {
        let window = SamplingWindow::new(self.spot, self.spot_range)?
            .with_step(self.step.unwrap_or(default_step))?;
        Ok(window)
    }

    /// The legs as validated contracts, in file order.
    ///
    /// The first invalid leg fails the whole file with
    /// `PayoffError::InvalidContract`.
    pub fn contracts(&self) -> Result<Vec<Contract<f64>>> {
        self.legs.iter().map(LegSpec::to_contract).collect()
    }

    /// The legs as a portfolio; fails for a file with no legs.
    pub fn portfolio(&self) -> Result<Portfolio<f64>> {
        Ok(Portfolio::new(self.contracts()?)?)
    }
}
