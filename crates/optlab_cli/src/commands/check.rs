//! Check command implementation
//!
//! Prints the effective configuration after file and environment overrides.

use std::io::Write;
use std::path::Path;
use tracing::info;

use optlab_engine::StrategyKind;

use crate::config::OptlabConfig;
use crate::Result;

/// Run the check command
pub fn run<W: Write>(config_path: &Path, config: &OptlabConfig, out: &mut W) -> Result<()> {
    info!("Checking configuration...");

    let source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        "built-in defaults".to_string()
    };

    writeln!(out, "Configuration source: {}", source)?;
    writeln!(out, "  log_level: {}", config.log_level)?;
    writeln!(out, "  step:      {}% of spot", config.step)?;
    writeln!(out, "  format:    {}", config.format)?;
    writeln!(out, "  stride:    {}", config.stride)?;
    writeln!(
        out,
        "  parallel:  {}",
        if cfg!(feature = "parallel") {
            "enabled"
        } else {
            "disabled"
        }
    )?;

    let names: Vec<&str> = StrategyKind::ALL.iter().map(|k| k.name()).collect();
    writeln!(out, "Strategies: {}", names.join(", "))?;

    info!("Configuration OK");
    Ok(())
}
