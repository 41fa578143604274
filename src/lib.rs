//! Static navigation reachability checker for file-based app routers.

pub mod check;
pub mod config;
pub mod discovery;
pub mod extract;
pub mod observability;
pub mod report;
pub mod routing;

pub use check::{check, Verdict};
pub use config::CheckerConfig;
pub use extract::{extract_navigation_requests, NavigationRequest};
pub use report::CheckReport;
pub use routing::{is_reachable, RouteTable};
