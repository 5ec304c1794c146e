//! Orbit CLI - walks through the container, commands and operations.
//!
//! # Configuration
//!
//! Configuration is loaded from multiple sources with priority:
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`ORBIT_*`)
//! 3. Explicit file (`--config <FILE>`)
//! 4. Project config (`.orbit/config.toml` in the project root)
//! 5. Global config (`~/.orbit/config.toml`)
//! 6. Default values (lowest priority)
//!
//! # Environment Variables
//!
//! - `ORBIT_DEBUG`: Enable debug logging (`true`/`false`)
//! - `ORBIT_LOG_LEVEL`: Log filter used when no flag or `RUST_LOG` is given
//! - `ORBIT_OPERATIONS_CAPACITY`: Initial capacity of the operation registry

mod demo;

use anyhow::{Context, Result};
use clap::Parser;
use orbit_runtime::config::{ConfigLoader, OrbitConfig};
use orbit_runtime::Runtime;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Orbit CLI - dependency container and command demo
#[derive(Parser, Debug)]
#[command(name = "orbit")]
#[command(version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Project root directory (defaults to current directory)
    #[arg(short = 'C', long)]
    project: Option<PathBuf>,

    /// Additional config file, layered above the project config
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<OrbitConfig> {
    let project_root = args.project.clone().unwrap_or_else(|| {
        std::env::current_dir().unwrap_or_else(|e| {
            eprintln!("Warning: failed to get current directory ({e}), using '.'");
            PathBuf::from(".")
        })
    });

    let mut loader = ConfigLoader::new().with_project_root(&project_root);
    if let Some(ref path) = args.config {
        loader = loader.with_config_file(path);
    }

    let mut config = loader.load().context("Config error")?;

    // CLI args override (highest priority)
    if args.debug {
        config.debug = true;
    }

    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    // Terminal filter: --debug > --verbose > RUST_LOG env > config > default "warn"
    let filter = if config.debug {
        EnvFilter::new("debug")
    } else if args.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            config
                .log_level
                .as_deref()
                .and_then(|level| EnvFilter::try_new(level).ok())
                .unwrap_or_else(|| EnvFilter::new("warn"))
        })
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_filter(filter))
        .init();

    println!("Orbit CLI v{}", env!("CARGO_PKG_VERSION"));
    info!(
        capacity = config.operations.capacity,
        builtins = config.bootstrap.register_builtins,
        "Configuration loaded"
    );

    if !config.bootstrap.register_builtins {
        println!("Built-in registrations are disabled; nothing to demonstrate.");
        return Ok(());
    }

    let runtime = Runtime::new(config).context("Failed to start runtime")?;
    demo::run_all(&runtime)
}
