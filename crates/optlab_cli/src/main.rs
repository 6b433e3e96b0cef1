//! optlab CLI
//!
//! Expiry payoff curves for single option legs, portfolio files and
//! named multi-leg strategies.
//!
//! # Usage
//!
//! ```bash
//! # Single leg
//! optlab leg --option-type call --strike 102 --premium 2 --spot 100 --spot-range 10
//!
//! # Portfolio file (TOML or JSON)
//! optlab portfolio book.toml --format csv
//!
//! # Named strategy
//! optlab strategy iron-condor --strikes 90,95,105,110 --premiums 0.5,1.5,1.5,0.5 --spot 100
//!
//! # Effective configuration
//! optlab check
//! ```

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use optlab_cli::commands::{self, leg::LegArgs, strategy::StrategyArgs};
use optlab_cli::config::{OptlabConfig, OutputFormat};
use optlab_cli::Result;

/// Option payoff calculator
#[derive(Parser)]
#[command(name = "optlab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "optlab.toml")]
    config: PathBuf,

    /// Output format (overrides the configuration)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Payoff curve of a single option leg
    Leg {
        /// Option type: call or put
        #[arg(short = 't', long)]
        option_type: String,

        /// Strike price
        #[arg(short = 'k', long)]
        strike: f64,

        /// Premium per unit
        #[arg(short, long)]
        premium: f64,

        /// Direction: buy or sell
        #[arg(short, long, default_value = "buy")]
        direction: String,

        /// Number of contracts
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        /// Current underlying price
        #[arg(short, long)]
        spot: f64,

        /// Window half-width in percent of spot
        #[arg(short = 'r', long, default_value_t = 10.0)]
        spot_range: f64,
    },

    /// Aggregated payoff curve of a portfolio file
    Portfolio {
        /// Portfolio file (.toml or .json)
        file: PathBuf,
    },

    /// Payoff curve of a named multi-leg strategy
    Strategy {
        /// Strategy name (straddle, strangle, bull-call-spread,
        /// bear-put-spread, butterfly, iron-condor)
        kind: String,

        /// Strikes, comma separated and ascending
        #[arg(long, value_delimiter = ',', required = true)]
        strikes: Vec<f64>,

        /// Premiums, comma separated in leg order
        #[arg(long, value_delimiter = ',', required = true)]
        premiums: Vec<f64>,

        /// Direction: buy or sell
        #[arg(short, long, default_value = "buy")]
        direction: String,

        /// Number of contracts per leg
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        /// Current underlying price
        #[arg(short, long)]
        spot: f64,

        /// Window half-width in percent of spot
        #[arg(short = 'r', long, default_value_t = 10.0)]
        spot_range: f64,
    },

    /// Print the effective configuration
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = OptlabConfig::load_or_default(&cli.config)?.with_env_override();
    config.validate()?;

    init_tracing(&config, cli.verbose);
    info!("optlab v{}", env!("CARGO_PKG_VERSION"));

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    run(cli, &config).inspect_err(|e| error!("{}", e))
}

fn init_tracing(config: &OptlabConfig, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli, config: &OptlabConfig) -> Result<()> {
    let format = cli.format.unwrap_or(config.format);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Leg {
            option_type,
            strike,
            premium,
            direction,
            quantity,
            spot,
            spot_range,
        } => {
            let args = LegArgs {
                option_type,
                strike,
                premium,
                direction,
                quantity,
                spot,
                spot_range,
            };
            commands::leg::run(&args, config, format, &mut out)?;
        }
        Commands::Portfolio { file } => {
            commands::portfolio::run(&file, config, format, &mut out)?;
        }
        Commands::Strategy {
            kind,
            strikes,
            premiums,
            direction,
            quantity,
            spot,
            spot_range,
        } => {
            let args = StrategyArgs {
                kind,
                strikes,
                premiums,
                direction,
                quantity,
                spot,
                spot_range,
            };
            commands::strategy::run(&args, config, format, &mut out)?;
        }
        Commands::Check => {
            commands::check::run(&cli.config, config, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
