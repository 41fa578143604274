//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! route-reach.toml
//!     → loader.rs (parse & deserialize, resolve relative paths)
//!     → validation.rs (semantic checks)
//!     → CheckerConfig (validated, immutable)
//!     → CLI overrides applied by the binary
//!
//! In watch mode:
//!     watcher.rs detects a change (manifest or sources)
//!     → loader.rs loads the manifest again
//!     → validation.rs validates
//!     → a fresh check runs with the new config
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All sections have defaults to allow minimal manifests
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    CheckerConfig, LogFormat, ObservabilityConfig, PolicyConfig, ReportConfig, ReportFormat,
    RequestConfig, RoutesConfig, ScanConfig,
};
pub use validation::ValidationError;
