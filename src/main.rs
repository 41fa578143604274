//! route-reach: static navigation reachability checker.
//!
//! # Architecture Overview
//!
//! ```text
//!   route-reach.toml ──▶ config ──┬──▶ discovery (app/ tree) ──▶ RouteTable
//!                                 │                                  │
//!   source files ─────────────────┴──▶ extract ──▶ requests ─────────┤
//!                                                                    ▼
//!                                                           check engine
//!                                                                    │
//!                                       stdout / report file ◀── report ──▶ policy ──▶ exit code
//! ```
//!
//! Exit codes: 0 pass or warn, 1 fail, 2 operational error.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use route_reach::check::{self, Verdict};
use route_reach::config::watcher::ConfigWatcher;
use route_reach::config::{load_config, CheckerConfig, ConfigError, LogFormat, ObservabilityConfig, ReportFormat};
use route_reach::discovery::DiscoveryError;
use route_reach::extract::{extract_navigation_requests, Extraction, Origin};
use route_reach::observability::logging::init_logging;
use route_reach::report::{write_report, ReportError};
use route_reach::routing::normalize::normalize_destination;

#[derive(Parser)]
#[command(name = "route-reach")]
#[command(about = "Static navigation reachability checker for file-based app routers", long_about = None)]
struct Cli {
    /// Path to the manifest.
    #[arg(short, long, global = true, default_value = "route-reach.toml")]
    manifest: PathBuf,

    /// Log output format (overrides the manifest).
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check every navigation request and emit the report
    Check(CheckArgs),
    /// Show which rule makes a destination reachable, if any
    Explain { destination: String },
    /// Print navigation requests and dead interactions found in files
    Extract {
        files: Vec<PathBuf>,
        /// Origin screen to attribute requests to (defaults to the file stem)
        #[arg(long)]
        origin: Option<String>,
    },
    /// List known routes
    Routes,
    /// Re-run the check whenever the manifest or sources change
    Watch(CheckArgs),
}

#[derive(Args)]
struct CheckArgs {
    /// Expo Router app directory (overrides routes.app_dir)
    #[arg(long)]
    app_dir: Option<PathBuf>,

    /// Report file (overrides report.path)
    #[arg(long)]
    report: Option<PathBuf>,

    /// Report format (overrides report.format)
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,

    /// Treat any unresolved request as a failure
    #[arg(long)]
    strict: bool,
}

impl CheckArgs {
    fn apply(&self, config: &mut CheckerConfig) {
        if let Some(app_dir) = &self.app_dir {
            config.routes.app_dir = Some(app_dir.clone());
        }
        if let Some(report) = &self.report {
            config.report.path = Some(report.clone());
        }
        if let Some(format) = self.format {
            config.report.format = format;
        }
        config.policy.strict |= self.strict;
    }
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match cli.command {
        Commands::Extract { .. } => None,
        _ => Some(load_config(&cli.manifest)),
    };

    let mut observability = match &loaded {
        Some(Ok(config)) => config.observability.clone(),
        _ => ObservabilityConfig::default(),
    };
    if let Some(format) = cli.log_format {
        observability.log_format = format;
    }
    if let Err(e) = init_logging(&observability) {
        eprintln!("route-reach: failed to initialize logging: {e}");
    }

    match run(&cli, loaded).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "route-reach failed");
            ExitCode::from(2)
        }
    }
}

async fn run(
    cli: &Cli,
    loaded: Option<Result<CheckerConfig, ConfigError>>,
) -> Result<ExitCode, AppError> {
    if let Commands::Extract { files, origin } = &cli.command {
        extract(files, origin.as_deref())?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = match loaded {
        Some(result) => result?,
        None => load_config(&cli.manifest)?,
    };

    match &cli.command {
        Commands::Check(args) => {
            args.apply(&mut config);
            let verdict = run_once(&config)?;
            Ok(ExitCode::from(verdict.exit_code()))
        }
        Commands::Explain { destination } => {
            explain(&config, destination)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Routes => {
            for entry in check::route_table(&config)?.entries() {
                println!("{}", entry.declared());
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Watch(args) => {
            args.apply(&mut config);
            watch(&cli.manifest, config, args).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Extract { .. } => Ok(ExitCode::SUCCESS),
    }
}

fn run_once(config: &CheckerConfig) -> Result<Verdict, AppError> {
    let report = check::check(config)?;
    write_report(&report, config.report.format, config.report.path.as_deref())?;

    let verdict = check::verdict(&report, config.policy.strict);
    let critical = report.critical_failures().count();
    match verdict {
        Verdict::Pass => tracing::info!(%verdict, "All navigation requests resolved"),
        Verdict::Warn => tracing::warn!(%verdict, unresolved = report.unresolved, "Unresolved navigation requests"),
        Verdict::Fail => tracing::error!(%verdict, unresolved = report.unresolved, critical, "Navigation check failed"),
    }
    Ok(verdict)
}

fn explain(config: &CheckerConfig, destination: &str) -> Result<(), AppError> {
    let table = check::route_table(config)?;

    if destination.contains("${") {
        println!("{destination:?}: interpolated, not statically checkable");
        return Ok(());
    }
    let Some(normalized) = normalize_destination(destination) else {
        println!("{destination:?}: unreachable (empty destination)");
        return Ok(());
    };
    match table.resolve(destination) {
        Some(resolution) => match resolution.route {
            Some(route) => println!("{normalized:?}: reachable via {} rule (route {route:?})", resolution.rule),
            None => println!("{normalized:?}: reachable via {} rule", resolution.rule),
        },
        None => println!("{normalized:?}: unreachable ({} known routes)", table.len()),
    }
    Ok(())
}

fn extract(files: &[PathBuf], origin: Option<&str>) -> Result<(), AppError> {
    let mut all = Extraction::default();
    for path in files {
        let text = fs::read_to_string(path).map_err(|source| AppError::Read {
            path: path.clone(),
            source,
        })?;
        let screen = origin
            .map(String::from)
            .unwrap_or_else(|| default_origin(path));
        all.merge(extract_navigation_requests(&Origin::new(screen), &text));
    }
    match serde_json::to_string_pretty(&all) {
        Ok(json) => println!("{json}"),
        Err(e) => return Err(ReportError::from(e).into()),
    }
    Ok(())
}

fn default_origin(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

async fn watch(manifest: &Path, config: CheckerConfig, args: &CheckArgs) -> Result<(), AppError> {
    if let Err(e) = run_once(&config) {
        tracing::error!(error = %e, "Check failed");
    }

    let (watcher, mut rx) = ConfigWatcher::new(manifest, &config);
    let _handle = watcher.run()?;

    loop {
        tokio::select! {
            update = rx.recv() => {
                let Some(mut latest) = update else { break };
                // Coalesce bursts of file events into one run.
                while let Ok(Some(next)) = tokio::time::timeout(Duration::from_millis(300), rx.recv()).await {
                    latest = next;
                }
                args.apply(&mut latest);
                if let Err(e) = run_once(&latest) {
                    tracing::error!(error = %e, "Check failed");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted, stopping watcher");
                break;
            }
        }
    }
    Ok(())
}
