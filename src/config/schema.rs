//! Configuration schema definitions.
//!
//! This module defines the manifest structure (`route-reach.toml`).
//! All types derive Serde traits for deserialization from the manifest.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::extract::NavigationRequest;

/// Root configuration for a check run.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CheckerConfig {
    /// Known route sources.
    pub routes: RoutesConfig,

    /// Hand-declared navigation requests.
    pub requests: Vec<RequestConfig>,

    /// Source scanning for extracted requests.
    pub scan: ScanConfig,

    /// Verdict policy.
    pub policy: PolicyConfig,

    /// Report output.
    pub report: ReportConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

impl CheckerConfig {
    /// Resolve relative paths against the manifest's directory.
    pub fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        if let Some(app_dir) = self.routes.app_dir.as_mut() {
            resolve(app_dir);
        }
        self.scan.dirs.iter_mut().for_each(resolve);
        if let Some(path) = self.report.path.as_mut() {
            resolve(path);
        }
    }

    /// Every directory whose contents feed a check run.
    pub fn watched_dirs(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = self.routes.app_dir.iter().cloned().collect();
        for dir in &self.scan.dirs {
            if !dirs.contains(dir) {
                dirs.push(dir.clone());
            }
        }
        dirs
    }
}

/// Where known routes come from.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RoutesConfig {
    /// Route entries declared by hand, one per screen.
    pub declared: Vec<String>,

    /// Expo Router `app/` directory to discover routes from.
    pub app_dir: Option<PathBuf>,
}

/// A navigation request declared in the manifest.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RequestConfig {
    /// Origin screen identifier.
    pub origin: String,

    /// Triggering action label, e.g. "Tap Sign in".
    pub action: String,

    /// Destination path as written in the app.
    pub destination: String,

    /// Part of the primary onboarding/auth/session-creation flow.
    #[serde(default)]
    pub critical: bool,
}

impl From<&RequestConfig> for NavigationRequest {
    fn from(cfg: &RequestConfig) -> Self {
        NavigationRequest::declared(&cfg.origin, &cfg.action, &cfg.destination, cfg.critical)
    }
}

/// Source scanning configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directories to scan. The app directory is scanned when listed here.
    pub dirs: Vec<PathBuf>,

    /// File extensions (without dot) considered source files.
    pub extensions: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            dirs: Vec::new(),
            extensions: ["tsx", "ts", "jsx", "js"].map(String::from).to_vec(),
        }
    }
}

/// Verdict policy configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Origin prefixes (segment-aware) that mark the primary flow.
    pub critical_origins: Vec<String>,

    /// Treat any unresolved request as a failure.
    pub strict: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            critical_origins: ["(auth)", "onboarding", "session/create"]
                .map(String::from)
                .to_vec(),
            strict: false,
        }
    }
}

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Report configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// File to write the report to. Printed to stdout when unset.
    pub path: Option<PathBuf>,

    pub format: ReportFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default filter when `RUST_LOG` is unset.
    pub log_level: String,

    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
