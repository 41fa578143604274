//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that at least one route source exists
//! - Detect malformed and duplicate route entries
//! - Detect incomplete declared requests
//!
//! Empty request destinations pass validation; the check reports them as
//! unresolved.
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: CheckerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::CheckerConfig;
use crate::routing::segment::{split_path, Segment};
use crate::routing::RouteEntry;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no route source: set routes.declared or routes.app_dir")]
    NoRouteSource,

    #[error("routes.declared[{0}] is empty")]
    EmptyRoute(usize),

    #[error("route {route:?} has malformed segment {segment:?}")]
    MalformedRoute { route: String, segment: String },

    #[error("route {0:?} is declared more than once")]
    DuplicateRoute(String),

    #[error("requests[{index}].{field} is empty")]
    EmptyRequestField { index: usize, field: &'static str },

    #[error("scan.extensions is empty while scan.dirs is set")]
    NoExtensions,

    #[error("policy.critical_origins[{0}] is empty")]
    EmptyCriticalOrigin(usize),
}

pub fn validate_config(config: &CheckerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.routes.declared.is_empty() && config.routes.app_dir.is_none() {
        errors.push(ValidationError::NoRouteSource);
    }

    let mut seen = HashSet::new();
    for (index, route) in config.routes.declared.iter().enumerate() {
        if route.trim().is_empty() {
            errors.push(ValidationError::EmptyRoute(index));
            continue;
        }
        if let Some(segment) = malformed_segment(route) {
            errors.push(ValidationError::MalformedRoute {
                route: route.clone(),
                segment,
            });
        }
        let canonical = RouteEntry::new(route).declared().to_string();
        if !seen.insert(canonical) {
            errors.push(ValidationError::DuplicateRoute(route.clone()));
        }
    }

    for (index, request) in config.requests.iter().enumerate() {
        let fields = [("origin", &request.origin), ("action", &request.action)];
        for (field, value) in fields {
            if value.trim().is_empty() {
                errors.push(ValidationError::EmptyRequestField { index, field });
            }
        }
    }

    if !config.scan.dirs.is_empty() && config.scan.extensions.is_empty() {
        errors.push(ValidationError::NoExtensions);
    }

    for (index, origin) in config.policy.critical_origins.iter().enumerate() {
        if origin.trim().is_empty() {
            errors.push(ValidationError::EmptyCriticalOrigin(index));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A literal segment still holding group/dynamic delimiters, e.g. `(auth`.
fn malformed_segment(route: &str) -> Option<String> {
    split_path(route.trim()).into_iter().find_map(|segment| match segment {
        Segment::Literal(text) if text.contains(['(', ')', '[', ']']) => Some(text),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RequestConfig;

    #[test]
    fn test_valid_config() {
        let mut config = CheckerConfig::default();
        config.routes.declared = vec!["(auth)/login".into(), "session/[id]".into()];
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = CheckerConfig::default();
        config.routes.declared = vec![
            "".into(),
            "(auth/login".into(),
            "live".into(),
            "/live/".into(),
        ];
        config.requests.push(RequestConfig {
            origin: "home".into(),
            action: " ".into(),
            destination: "".into(),
            critical: false,
        });

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyRoute(0),
                ValidationError::MalformedRoute {
                    route: "(auth/login".into(),
                    segment: "(auth".into(),
                },
                ValidationError::DuplicateRoute("/live/".into()),
                ValidationError::EmptyRequestField { index: 0, field: "action" },
            ]
        );
    }

    #[test]
    fn test_no_route_source() {
        let errors = validate_config(&CheckerConfig::default()).unwrap_err();
        assert_eq!(errors, vec![ValidationError::NoRouteSource]);
    }
}
