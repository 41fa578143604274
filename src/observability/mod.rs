//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges)
//!
//! Consumers:
//!     → stderr (pretty or JSON)
//!     → any `metrics` recorder installed by an embedder
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event (origin, destination, rule)
//! - Each check run carries a run ID span

pub mod logging;
pub mod metrics;
