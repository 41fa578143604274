//! Route table and reachability lookup.
//!
//! # Responsibilities
//! - Store the known route entries for one check run
//! - Normalize destinations once, then run the rule chain
//! - Return an explainable resolution or an explicit miss
//!
//! # Design Decisions
//! - Immutable after construction; passed by reference, never global
//! - Duplicate entries collapse onto the first declaration
//! - Empty destinations are unreachable, never an error

use std::collections::HashSet;

use crate::routing::matcher::{FirstMatch, Matcher, Resolution};
use crate::routing::normalize::normalize_destination;
use crate::routing::segment::{join_segments, RoutePath, Segment};

/// One declared, reachable screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    declared: String,
    path: RoutePath,
    erased: Vec<Segment>,
}

impl RouteEntry {
    pub fn new(route: &str) -> Self {
        let path = RoutePath::parse(route.trim());
        let declared = if path.is_root() {
            "/".to_string()
        } else {
            join_segments(path.segments())
        };
        let erased = path.erase_groups();
        Self {
            declared,
            path,
            erased,
        }
    }

    /// Canonical form: no leading or trailing slash, `/` for the root.
    pub fn declared(&self) -> &str {
        &self.declared
    }

    pub fn path(&self) -> &RoutePath {
        &self.path
    }

    /// Segments left once group segments are removed.
    pub fn erased(&self) -> &[Segment] {
        &self.erased
    }
}

/// Immutable set of known routes plus the rule chain used to query it.
#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    matcher: FirstMatch,
}

impl RouteTable {
    /// Build a table from declared route strings.
    pub fn from_routes<I, S>(routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let entries = routes
            .into_iter()
            .map(|r| RouteEntry::new(r.as_ref()))
            .filter(|entry| seen.insert(entry.declared.clone()))
            .collect();

        Self {
            entries,
            matcher: FirstMatch::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Resolve a raw destination. `None` means unreachable.
    pub fn resolve(&self, destination: &str) -> Option<Resolution> {
        let normalized = normalize_destination(destination)?;
        let path = RoutePath::parse(&normalized);
        self.matcher.resolve(&path, &self.entries)
    }

    pub fn is_reachable(&self, destination: &str) -> bool {
        self.resolve(destination).is_some()
    }
}

/// One-shot reachability check against a list of known routes.
pub fn is_reachable<S: AsRef<str>>(destination: &str, known_routes: &[S]) -> bool {
    RouteTable::from_routes(known_routes).is_reachable(destination)
}
