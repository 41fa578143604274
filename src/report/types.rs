//! Report types.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use crate::extract::{DeadInteraction, NavigationRequest};

/// Why a request did not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// Nothing left after normalization.
    EmptyDestination,
    /// No rule matched any known route.
    NoMatchingRoute,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::EmptyDestination => f.write_str("empty destination"),
            FailureReason::NoMatchingRoute => f.write_str("no matching route"),
        }
    }
}

/// An unresolved request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    #[serde(flatten)]
    pub request: NavigationRequest,
    pub reason: FailureReason,
}

/// The product of one check run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub run_id: Uuid,
    pub total_routes: usize,
    pub total_requests: usize,
    pub checked: usize,
    pub resolved: usize,
    pub unresolved: usize,
    /// Requests with interpolated destinations, excluded from pass/fail.
    pub skipped: usize,
    pub failures: Vec<Failure>,
    pub skipped_requests: Vec<NavigationRequest>,
    /// Non-blocking: interaction points with no attached action.
    pub dead_interactions: Vec<DeadInteraction>,
}

impl CheckReport {
    pub fn critical_failures(&self) -> impl Iterator<Item = &Failure> {
        self.failures.iter().filter(|f| f.request.critical)
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
