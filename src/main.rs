//! Prop Advisor - UAV propeller assessment service
//!
//! Validates propeller parameters, asks the prediction service for thrust,
//! power and efficiency coefficients, and recommends a drone type.
//!
//! # Usage
//!
//! ```bash
//! # Run the HTTP API (default)
//! prop-advisor serve --addr 127.0.0.1:8080
//!
//! # Check form values without calling the model
//! prop-advisor validate --blades 2 --diameter 10 --pitch 5 --advance-ratio 0.4
//!
//! # Classify known coefficients
//! prop-advisor classify --thrust 0.09 --power 0.03 --efficiency 0.4 --pitch 5 --advance-ratio 0.4
//!
//! # Full prediction against the model service
//! prop-advisor predict --blades 3 --diameter 6 --pitch 4.5 --advance-ratio 0.4
//! ```
//!
//! # Environment Variables
//!
//! - `PROP_ADVISOR_CONFIG`: Path to the TOML config file
//! - `PROP_ADVISOR_SERVER_ADDR`: Override the bind address
//! - `PROP_ADVISOR_CORS_ORIGINS`: Comma-separated origins allowed cross-origin
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use prop_advisor::api::{create_app, AdvisorState};
use prop_advisor::config::{self, AdvisorConfig};
use prop_advisor::prediction::{HttpPredictionClient, PredictionSession, SessionError};
use prop_advisor::recommendation;
use prop_advisor::storage::PredictionHistory;
use prop_advisor::types::{FormInput, RawFormInput};
use prop_advisor::validation;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "prop-advisor")]
#[command(about = "UAV propeller validation, performance prediction and drone-type recommendation")]
#[command(version)]
struct CliArgs {
    /// Path to a TOML config file (takes precedence over PROP_ADVISOR_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<SubCommand>,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Run the HTTP API
    Serve {
        /// Override the server address (default: "0.0.0.0:8080")
        #[arg(short, long)]
        addr: Option<String>,
    },

    /// Show guidance for form values; exits non-zero when the gate is closed
    #[command(allow_negative_numbers = true)]
    Validate(FormArgs),

    /// Recommend a drone type for known coefficients
    #[command(allow_negative_numbers = true)]
    Classify {
        /// Thrust coefficient (Ct)
        #[arg(long)]
        thrust: f64,
        /// Power coefficient (Cp)
        #[arg(long)]
        power: f64,
        /// Efficiency (0-1)
        #[arg(long)]
        efficiency: f64,
        /// Propeller pitch (inches)
        #[arg(long)]
        pitch: f64,
        #[arg(long)]
        advance_ratio: f64,
    },

    /// Validate, call the prediction service and recommend a drone type
    #[command(allow_negative_numbers = true)]
    Predict {
        #[command(flatten)]
        form: FormArgs,
        /// Override the configured prediction endpoint
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// List recent predictions from the history log
    History {
        #[arg(long, default_value_t = config::defaults::HISTORY_DEFAULT_LIMIT)]
        limit: usize,
    },
}

/// Form fields as text, parsed the same way the API parses them.
#[derive(clap::Args, Debug)]
struct FormArgs {
    /// Blade count (2, 3 or 4)
    #[arg(long, default_value = "")]
    blades: String,
    /// Propeller diameter (inches)
    #[arg(long, default_value = "")]
    diameter: String,
    /// Propeller pitch (inches)
    #[arg(long, default_value = "")]
    pitch: String,
    #[arg(long, default_value = "")]
    advance_ratio: String,
}

impl From<FormArgs> for RawFormInput {
    fn from(args: FormArgs) -> Self {
        Self {
            blades: args.blades,
            diameter: args.diameter,
            pitch: args.pitch,
            advance_ratio: args.advance_ratio,
        }
    }
}

// ============================================================================
// Setup
// ============================================================================

/// Explicit `--config` must load; otherwise fall back through the search order.
fn load_config(path: Option<&PathBuf>) -> Result<AdvisorConfig> {
    match path {
        Some(p) => AdvisorConfig::load_from_file(p)
            .with_context(|| format!("Failed to load config from {}", p.display())),
        None => Ok(AdvisorConfig::load()),
    }
}

/// Open the history log if enabled. Failures disable history instead of aborting.
fn open_history(cfg: &AdvisorConfig) -> Option<PredictionHistory> {
    if !cfg.storage.enabled {
        info!("Prediction history disabled");
        return None;
    }
    if let Some(parent) = std::path::Path::new(&cfg.storage.history_path).parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            warn!(path = %parent.display(), error = %e, "Cannot create history directory");
        }
    }
    match PredictionHistory::open(&cfg.storage.history_path) {
        Ok(h) => Some(h),
        Err(e) => {
            warn!(
                path = %cfg.storage.history_path,
                error = %e,
                "Failed to open prediction history, continuing without it"
            );
            None
        }
    }
}

fn build_session(cfg: &AdvisorConfig, endpoint: Option<&str>) -> Result<PredictionSession> {
    let endpoint = endpoint.unwrap_or(&cfg.prediction.endpoint);
    let client = HttpPredictionClient::new(endpoint, cfg.prediction.timeout())
        .context("Failed to build prediction HTTP client")?;
    info!(
        endpoint = %endpoint,
        timeout_secs = cfg.prediction.timeout_secs,
        "Prediction service configured"
    );

    let session = PredictionSession::new(Arc::new(client));
    Ok(match open_history(cfg) {
        Some(history) => session.with_history(history),
        None => session,
    })
}

// ============================================================================
// Commands
// ============================================================================

async fn run_server(cfg: &AdvisorConfig, addr_override: Option<String>) -> Result<()> {
    let server_addr = addr_override
        .or_else(|| std::env::var("PROP_ADVISOR_SERVER_ADDR").ok())
        .unwrap_or_else(|| cfg.server.addr.clone());

    let session = build_session(cfg, None)?;
    let app = create_app(AdvisorState::new(session.clone()).with_datasets(cfg.datasets.clone()));

    let listener = tokio::net::TcpListener::bind(&server_addr)
        .await
        .with_context(|| format!("Failed to bind to {server_addr}"))?;
    info!(addr = %server_addr, "HTTP server listening");

    // Graceful shutdown via Ctrl+C
    let cancel_token = CancellationToken::new();
    let shutdown_token = cancel_token.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Received Ctrl+C, initiating shutdown");
        shutdown_token.cancel();
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { cancel_token.cancelled().await })
        .await
        .context("HTTP server error")?;

    if let Some(history) = session.history() {
        if let Err(e) = history.flush() {
            warn!(error = %e, "Failed to flush prediction history");
        }
    }
    info!("Shutdown complete");
    Ok(())
}

fn print_guidance(guidance: &prop_advisor::GuidanceResult) {
    for (field, message) in guidance.iter() {
        println!("  {field:<13} {message}");
    }
}

fn run_validate(form: FormArgs) -> Result<()> {
    let raw = RawFormInput::from(form);
    let guidance = validation::validate_form(&FormInput::parse(&raw));
    if !validation::has_invalid_input(&guidance) {
        println!("All fields valid, prediction enabled.");
        return Ok(());
    }
    println!("Guidance:");
    print_guidance(&guidance);
    bail!("Prediction is enabled only for values within the trained data range.");
}

fn run_classify(thrust: f64, power: f64, efficiency: f64, pitch: f64, advance_ratio: f64) {
    let rec = recommendation::classify(thrust, power, efficiency, pitch, advance_ratio);
    println!("{}", rec.title);
    println!("  {}", rec.description);
}

async fn run_predict(cfg: &AdvisorConfig, form: FormArgs, endpoint: Option<String>) -> Result<()> {
    let session = build_session(cfg, endpoint.as_deref())?;
    let raw = RawFormInput::from(form);

    let report = match session.submit("cli", &raw).await {
        Ok(r) => r,
        Err(SessionError::Rejected(guidance)) => {
            println!("Guidance:");
            print_guidance(&guidance);
            bail!("Prediction is enabled only for values within the trained data range.");
        }
        Err(e) => return Err(e).context("Prediction failed"),
    };

    println!("Thrust Coefficient (Ct)  {}", report.metrics.thrust);
    println!("Power Coefficient (Cp)   {}", report.metrics.power);
    println!("Efficiency               {}", report.metrics.efficiency);
    if let Some(m) = &report.matched {
        println!("Matched propeller        {}", m.brand);
    }
    println!();
    println!("{}", report.recommendation.title);
    println!("  {}", report.recommendation.description);
    Ok(())
}

fn run_history(cfg: &AdvisorConfig, limit: usize) -> Result<()> {
    if !cfg.storage.enabled {
        bail!("Prediction history is disabled (storage.enabled = false)");
    }
    let history = PredictionHistory::open(&cfg.storage.history_path)
        .with_context(|| format!("Failed to open history at {}", cfg.storage.history_path))?;

    for entry in history.recent(limit) {
        println!(
            "{}  {}-blade d={} p={} J={}  Ct={:.3} Cp={:.3} eff={:.1}%  {}",
            entry.recorded_at.format("%Y-%m-%d %H:%M:%S"),
            entry.request.blades,
            entry.request.diameter,
            entry.request.pitch,
            entry.request.advance_ratio,
            entry.sample.thrust_coefficient,
            entry.sample.power_coefficient,
            entry.sample.efficiency * 100.0,
            entry.category,
        );
    }
    Ok(())
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    match args.command.unwrap_or(SubCommand::Serve { addr: None }) {
        SubCommand::Validate(form) => run_validate(form),
        SubCommand::Classify {
            thrust,
            power,
            efficiency,
            pitch,
            advance_ratio,
        } => {
            run_classify(thrust, power, efficiency, pitch, advance_ratio);
            Ok(())
        }
        SubCommand::Serve { addr } => {
            let cfg = load_config(args.config.as_ref())?;
            config::init(cfg);
            run_server(config::get(), addr).await
        }
        SubCommand::Predict { form, endpoint } => {
            let cfg = load_config(args.config.as_ref())?;
            run_predict(&cfg, form, endpoint).await
        }
        SubCommand::History { limit } => {
            let cfg = load_config(args.config.as_ref())?;
            run_history(&cfg, limit)
        }
    }
}
