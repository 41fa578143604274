//! Route and source discovery.
//!
//! # Responsibilities
//! - Derive route entries from the `app/` directory tree
//! - Collect source files to scan and their origin screens
//!
//! # Design Decisions
//! - Walk order is sorted so reports are stable across runs
//! - Only files with configured extensions are considered

pub mod routes;
pub mod sources;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use routes::{discover_routes, route_for_file};
pub use sources::{collect_sources, SourceFile};

/// Error type for filesystem discovery.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("directory not found: {}", .0.display())]
    MissingDir(PathBuf),

    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

pub(crate) fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}
