//! Route path segments.
//!
//! # Design Decisions
//! - A path is an ordered list of segments; the root route has none
//! - Segment kind is decided purely by its delimiters: `(..)` or `[..]`
//! - Delimiters must wrap a non-empty name, otherwise the segment is literal

use std::fmt;

/// One component of a route path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Matches only the identical string.
    Literal(String),
    /// Layout group, e.g. `(tabs)`. Holds the bare name.
    Group(String),
    /// Positional wildcard, e.g. `[id]`. Holds the parameter name.
    Dynamic(String),
}

impl Segment {
    /// Classify a raw path component.
    pub fn parse(raw: &str) -> Self {
        if let Some(name) = unwrap_delimited(raw, '(', ')') {
            return Segment::Group(name.to_string());
        }
        if let Some(name) = unwrap_delimited(raw, '[', ']') {
            return Segment::Dynamic(name.to_string());
        }
        Segment::Literal(raw.to_string())
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Segment::Group(_))
    }

    /// Whether a destination segment satisfies this (known-route) segment
    /// under the positional rule.
    ///
    /// A dynamic segment accepts any non-group segment. A group only accepts
    /// its own bracketed form or its bare name; it is not a wildcard.
    pub fn accepts(&self, candidate: &Segment) -> bool {
        match self {
            Segment::Dynamic(_) => !candidate.is_group(),
            Segment::Group(name) => match candidate {
                Segment::Group(other) => other == name,
                Segment::Literal(other) => other == name,
                Segment::Dynamic(_) => false,
            },
            Segment::Literal(_) => self == candidate,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(s) => write!(f, "{s}"),
            Segment::Group(name) => write!(f, "({name})"),
            Segment::Dynamic(name) => write!(f, "[{name}]"),
        }
    }
}

fn unwrap_delimited(raw: &str, open: char, close: char) -> Option<&str> {
    let inner = raw.strip_prefix(open)?.strip_suffix(close)?;
    if inner.is_empty() || inner.contains(open) || inner.contains(close) {
        return None;
    }
    Some(inner)
}

/// Split a path on `/`, dropping empty components.
///
/// Leading, trailing and doubled slashes therefore carry no meaning.
pub fn split_path(path: &str) -> Vec<Segment> {
    path.split('/')
        .filter(|part| !part.is_empty())
        .map(Segment::parse)
        .collect()
}

/// Render segments back into a slash-less canonical path.
pub fn join_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("/")
}

/// A parsed, slash-insensitive route path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutePath {
    segments: Vec<Segment>,
}

impl RoutePath {
    pub fn parse(path: &str) -> Self {
        Self {
            segments: split_path(path),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The path with every group segment removed.
    pub fn erase_groups(&self) -> Vec<Segment> {
        self.segments
            .iter()
            .filter(|s| !s.is_group())
            .cloned()
            .collect()
    }

    /// True when the whole path is one group, e.g. `(tabs)`.
    pub fn is_single_group(&self) -> bool {
        matches!(self.segments.as_slice(), [Segment::Group(_)])
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", join_segments(&self.segments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_kinds() {
        assert_eq!(Segment::parse("(auth)"), Segment::Group("auth".into()));
        assert_eq!(Segment::parse("[id]"), Segment::Dynamic("id".into()));
        assert_eq!(Segment::parse("login"), Segment::Literal("login".into()));
        // Empty or unbalanced delimiters stay literal
        assert_eq!(Segment::parse("()"), Segment::Literal("()".into()));
        assert_eq!(Segment::parse("(auth"), Segment::Literal("(auth".into()));
        assert_eq!(Segment::parse("[[id]]"), Segment::Literal("[[id]]".into()));
    }

    #[test]
    fn test_group_is_not_a_wildcard() {
        let group = Segment::parse("(tabs)");
        assert!(group.accepts(&Segment::parse("(tabs)")));
        assert!(group.accepts(&Segment::parse("tabs")));
        assert!(!group.accepts(&Segment::parse("live")));
        assert!(!group.accepts(&Segment::parse("(auth)")));

        let literal = Segment::parse("live");
        assert!(!literal.accepts(&Segment::parse("(tabs)")));
    }

    #[test]
    fn test_dynamic_rejects_group() {
        let dynamic = Segment::parse("[id]");
        assert!(dynamic.accepts(&Segment::parse("abc123")));
        assert!(dynamic.accepts(&Segment::parse("[sid]")));
        assert!(!dynamic.accepts(&Segment::parse("(x)")));
    }

    #[test]
    fn test_split_and_join() {
        let segments = split_path("/(auth)//login/");
        assert_eq!(segments.len(), 2);
        assert_eq!(join_segments(&segments), "(auth)/login");
        assert!(split_path("/").is_empty());
    }

    #[test]
    fn test_route_path() {
        let path = RoutePath::parse("(tabs)/live/[id]");
        assert_eq!(path.to_string(), "/(tabs)/live/[id]");
        assert_eq!(join_segments(&path.erase_groups()), "live/[id]");
        assert!(!path.is_single_group());
        assert!(RoutePath::parse("/(tabs)/").is_single_group());
        assert!(RoutePath::parse("/").is_root());
    }
}
