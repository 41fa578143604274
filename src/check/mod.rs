//! Check orchestration.
//!
//! # Data Flow
//! ```text
//! CheckerConfig
//!     → engine::gather (discover routes, declared + extracted requests)
//!     → engine::run_check (resolve each request independently)
//!     → CheckReport
//!     → policy::verdict (caller decides pass / warn / fail)
//! ```

pub mod engine;
pub mod policy;

pub use engine::{check, gather, route_table, run_check, CheckInput};
pub use policy::{is_critical_origin, verdict, Verdict};
