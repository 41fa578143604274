//! Metrics collection.
//!
//! # Metrics
//! - `route_reach_requests_total` (counter): requests by outcome
//!   (`resolved`, `unresolved`, `skipped`)
//! - `route_reach_known_routes` (gauge): size of the route table
//! - `route_reach_dead_interactions_total` (counter): interaction points without action
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; no exporter is installed here,
//!   embedders bring their own recorder

pub fn record_request_outcome(outcome: &'static str) {
    ::metrics::counter!("route_reach_requests_total", "outcome" => outcome).increment(1);
}

pub fn record_known_routes(count: usize) {
    ::metrics::gauge!("route_reach_known_routes").set(count as f64);
}

pub fn record_dead_interactions(count: usize) {
    ::metrics::counter!("route_reach_dead_interactions_total").increment(count as u64);
}
