//! Navigation request extraction.
//!
//! # Data Flow
//! ```text
//! source text
//!     → lexer.rs (mask comments, keep line numbers)
//!     → scanner.rs (navigation calls)
//!     → jsx.rs (component tags)
//!         → scanner.rs (<Link>/<Redirect> href)
//!         → interactions.rs (dead interaction points)
//!     → Extraction { requests, dead_interactions }
//! ```
//!
//! # Design Decisions
//! - Best-effort text scanning, not a parser
//! - Unsupported syntax is silently skipped (coverage gap, not a failure)
//! - Extraction never consults the route table

pub mod interactions;
pub mod jsx;
pub mod lexer;
pub mod scanner;
pub mod types;

pub use types::{DeadInteraction, DeadReason, Extraction, NavigationRequest, Origin};

/// Extract navigation requests and dead interactions from one source text.
///
/// Results are ordered by source line.
pub fn extract_navigation_requests(origin: &Origin, source: &str) -> Extraction {
    let masked = lexer::mask_comments(source);
    let tags = jsx::component_tags(&masked);

    let mut requests = scanner::scan_calls(origin, &masked);
    requests.extend(scanner::scan_links(origin, &masked, &tags));
    requests.sort_by_key(|r| r.line);

    let dead_interactions = interactions::scan_dead_interactions(origin, &masked, &tags);

    Extraction {
        requests,
        dead_interactions,
    }
}
