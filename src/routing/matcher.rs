//! Reachability matching rules.
//!
//! # Responsibilities
//! - Exact match (leading slash ignored)
//! - Segment-wise match with dynamic and group segments
//! - Group-erasure fallback
//! - Bare-group match (implicit index route of a group)
//!
//! # Design Decisions
//! - Each rule is an independent `Matcher`; `FirstMatch` chains them in order
//! - Rules only read the known entries, never mutate them
//! - No regex: segments are compared structurally

use std::fmt;

use serde::Serialize;

use crate::routing::router::RouteEntry;
use crate::routing::segment::RoutePath;

/// The rule that made a destination reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Exact,
    DynamicSegment,
    GroupErasure,
    BareGroup,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::Exact => "exact",
            Rule::DynamicSegment => "dynamic-segment",
            Rule::GroupErasure => "group-erasure",
            Rule::BareGroup => "bare-group",
        };
        f.write_str(name)
    }
}

/// A successful match: which rule fired and, when a known route was
/// involved, which one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub rule: Rule,
    pub route: Option<String>,
}

impl Resolution {
    fn via(rule: Rule, entry: &RouteEntry) -> Self {
        Self {
            rule,
            route: Some(entry.declared().to_string()),
        }
    }
}

/// Trait for matching a normalized destination against known routes.
pub trait Matcher: Send + Sync + fmt::Debug {
    /// Returns the resolution if this rule makes `destination` reachable.
    fn resolve(&self, destination: &RoutePath, known: &[RouteEntry]) -> Option<Resolution>;
}

/// Rule (a): identical segment sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatcher;

impl Matcher for ExactMatcher {
    fn resolve(&self, destination: &RoutePath, known: &[RouteEntry]) -> Option<Resolution> {
        known
            .iter()
            .find(|entry| entry.path() == destination)
            .map(|entry| Resolution::via(Rule::Exact, entry))
    }
}

/// Rule (b): same length, every known segment accepts the destination
/// segment at its position.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicSegmentMatcher;

impl Matcher for DynamicSegmentMatcher {
    fn resolve(&self, destination: &RoutePath, known: &[RouteEntry]) -> Option<Resolution> {
        let wanted = destination.segments();
        known
            .iter()
            .find(|entry| {
                let segments = entry.path().segments();
                segments.len() == wanted.len()
                    && segments.iter().zip(wanted).all(|(k, d)| k.accepts(d))
            })
            .map(|entry| Resolution::via(Rule::DynamicSegment, entry))
    }
}

/// Rule (c): both sides compared with their group segments removed.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupErasureMatcher;

impl Matcher for GroupErasureMatcher {
    fn resolve(&self, destination: &RoutePath, known: &[RouteEntry]) -> Option<Resolution> {
        let erased = destination.erase_groups();
        known
            .iter()
            .find(|entry| entry.erased() == erased.as_slice())
            .map(|entry| Resolution::via(Rule::GroupErasure, entry))
    }
}

/// Rule (d): a destination that is exactly one group segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct BareGroupMatcher;

impl Matcher for BareGroupMatcher {
    fn resolve(&self, destination: &RoutePath, _known: &[RouteEntry]) -> Option<Resolution> {
        destination.is_single_group().then_some(Resolution {
            rule: Rule::BareGroup,
            route: None,
        })
    }
}

/// Tries matchers in order; the first success wins.
#[derive(Debug)]
pub struct FirstMatch {
    matchers: Vec<Box<dyn Matcher>>,
}

impl FirstMatch {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }
}

impl Default for FirstMatch {
    /// The standard rule order: exact, dynamic segment, group erasure, bare group.
    fn default() -> Self {
        Self::new(vec![
            Box::new(ExactMatcher),
            Box::new(DynamicSegmentMatcher),
            Box::new(GroupErasureMatcher),
            Box::new(BareGroupMatcher),
        ])
    }
}

impl Matcher for FirstMatch {
    fn resolve(&self, destination: &RoutePath, known: &[RouteEntry]) -> Option<Resolution> {
        self.matchers
            .iter()
            .find_map(|m| m.resolve(destination, known))
    }
}
