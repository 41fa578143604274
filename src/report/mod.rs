//! Check reports.
//!
//! # Responsibilities
//! - Hold the counts, failures, skipped requests and dead interactions of a run
//! - Render as text or JSON
//! - Write to a file or stdout
//!
//! # Design Decisions
//! - A report is always produced, even when every request fails
//! - The report carries no verdict; policy is the caller's

pub mod render;
pub mod types;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::ReportFormat;

pub use render::{render, render_text};
pub use types::{CheckReport, Failure, FailureReason};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write report to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write the rendered report to `path`, or stdout when `None`.
pub fn write_report(
    report: &CheckReport,
    format: ReportFormat,
    path: Option<&Path>,
) -> Result<(), ReportError> {
    let rendered = render(report, format)?;
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|source| ReportError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
            fs::write(path, rendered).map_err(|source| ReportError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!(path = %path.display(), "Report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|source| ReportError::Io {
                    path: PathBuf::from("<stdout>"),
                    source,
                })?;
        }
    }
    Ok(())
}
