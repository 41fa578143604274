//! Routing subsystem: route reachability.
//!
//! # Data Flow
//! ```text
//! Known routes (declared + discovered)
//!     → router.rs (RouteTable, built once per run)
//!
//! Destination string
//!     → normalize.rs (query, backticks, `as` clause, whitespace)
//!     → segment.rs (split into literal / group / dynamic segments)
//!     → matcher.rs (exact → dynamic segment → group erasure → bare group)
//!     → Return: Resolution or unreachable
//! ```
//!
//! # Design Decisions
//! - Routes compiled once, immutable for the run
//! - Normalization happens once, before any rule
//! - Deterministic: same input always yields the same resolution
//! - First match wins

pub mod matcher;
pub mod normalize;
pub mod router;
pub mod segment;

pub use matcher::{Resolution, Rule};
pub use router::{is_reachable, RouteEntry, RouteTable};
