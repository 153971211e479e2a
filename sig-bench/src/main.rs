//! Signature benchmark runner
//!
//! 1. Load configuration (file, environment, command line)
//! 2. Generate random messages
//! 3. Create one signer per algorithm and time every signature
//! 4. Print a summary and optionally write a JSON report

use anyhow::{Context, Result};
use clap::Parser;
use sig_bench::config::{self, Overrides};
use sig_bench::{BenchConfig, BenchRunner};
use signer_factory::{Algorithm, SecurityLevel};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Signature algorithm benchmark: classical vs post-quantum signing time
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of messages signed per algorithm [default: 50]
    #[arg(short, long)]
    repetitions: Option<usize>,

    /// Security level: LOW, MEDIUM, HIGH (or 1/2/3) [default: LOW]
    #[arg(short = 's', long)]
    security_level: Option<SecurityLevel>,

    /// Algorithm to benchmark; repeat for several [default: all]
    #[arg(short, long = "algorithm")]
    algorithms: Vec<Algorithm>,

    /// Random message length in bytes [default: 10]
    #[arg(long)]
    message_size: Option<usize>,

    /// Configuration file path (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the JSON report to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip verifying signatures after timing
    #[arg(long, default_value_t = false)]
    no_verify: bool,

    /// Log level (trace, debug, info, warn, error) [default: info]
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load configuration, then apply command line overrides
    let config_path = args.config.clone();
    let mut config = load_configuration(config_path.as_deref())?;
    Overrides {
        repetitions: args.repetitions,
        security_level: args.security_level,
        algorithms: args.algorithms,
        message_size: args.message_size,
        output_path: args.output,
        log_level: args.log_level,
        skip_verification: args.no_verify,
    }
    .apply(&mut config);

    // 2. Initialize logging
    init_logging(&config.log_level)?;

    info!("🚀 Starting signature benchmark v{}", env!("CARGO_PKG_VERSION"));
    info!("──────────────────────────────────────────────");

    // 3. Validate configuration
    validate_configuration(&config)?;

    // 4. Run
    let runner = BenchRunner::new(config);
    let report = runner.run();

    println!("{}", report.summary());

    if let Some(path) = &runner.config().output_path {
        report
            .export_json(path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        info!("📄 Report written to {}", path.display());
    }

    if report.failed_count() > 0 {
        warn!("⚠️  {} algorithm(s) failed", report.failed_count());
    }
    if report.verification_failures() > 0 {
        warn!("⚠️  {} signature(s) failed verification", report.verification_failures());
    }

    info!("👋 Benchmark finished");
    Ok(())
}

/// Initialize logging system
fn init_logging(log_level: &str) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => {
            eprintln!("⚠️  Unknown log level: {}, using INFO", log_level);
            tracing::Level::INFO
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    Ok(())
}

/// Load configuration file and environment
fn load_configuration(config_path: Option<&Path>) -> Result<BenchConfig> {
    match config_path {
        Some(path) if !path.exists() => {
            eprintln!(
                "⚠️  Configuration file {} does not exist, using defaults",
                path.display()
            );
            config::load_config_from_env().context("Failed to load configuration")
        }
        Some(path) => config::load_layered(Some(path)).context("Failed to load configuration"),
        None => config::load_config_from_env().context("Failed to load configuration"),
    }
}

/// Validate configuration validity
fn validate_configuration(config: &BenchConfig) -> Result<()> {
    info!("🔍 Validating configuration...");
    info!("   - Security level: {}", config.security_level);
    info!("   - Repetitions: {}", config.repetitions);
    info!("   - Message size: {} bytes", config.message_size);
    info!(
        "   - Algorithms: {}",
        config
            .algorithms
            .iter()
            .map(Algorithm::name)
            .collect::<Vec<_>>()
            .join(", ")
    );
    info!(
        "   - Verification: {}",
        if config.verify_signatures {
            "Enabled"
        } else {
            "Disabled"
        }
    );

    config::validate_config(config).context("Invalid configuration")
}
