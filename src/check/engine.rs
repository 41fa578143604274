//! Check engine: gather inputs, resolve every request, build the report.

use std::fs;

use uuid::Uuid;

use crate::check::policy::is_critical_origin;
use crate::config::CheckerConfig;
use crate::discovery::{collect_sources, discover_routes, DiscoveryError};
use crate::extract::{extract_navigation_requests, DeadInteraction, NavigationRequest, Origin};
use crate::observability::metrics;
use crate::report::{CheckReport, Failure, FailureReason};
use crate::routing::normalize::normalize_destination;
use crate::routing::RouteTable;

/// Everything a check run consumes. Built fresh per run.
#[derive(Debug)]
pub struct CheckInput {
    pub routes: RouteTable,
    pub requests: Vec<NavigationRequest>,
    pub dead_interactions: Vec<DeadInteraction>,
}

/// Declared plus discovered routes.
pub fn route_table(config: &CheckerConfig) -> Result<RouteTable, DiscoveryError> {
    let mut route_strings = config.routes.declared.clone();
    if let Some(app_dir) = &config.routes.app_dir {
        let discovered = discover_routes(app_dir, &config.scan.extensions)?;
        tracing::debug!(count = discovered.len(), app_dir = %app_dir.display(), "Routes discovered");
        route_strings.extend(discovered);
    }
    Ok(RouteTable::from_routes(&route_strings))
}

/// Build the route table and request list described by `config`.
pub fn gather(config: &CheckerConfig) -> Result<CheckInput, DiscoveryError> {
    let routes = route_table(config)?;

    let critical_origins = &config.policy.critical_origins;
    let mut requests: Vec<NavigationRequest> = config
        .requests
        .iter()
        .map(|cfg| {
            let mut request = NavigationRequest::from(cfg);
            request.critical |= is_critical_origin(&request.origin, critical_origins);
            request
        })
        .collect();

    let mut dead_interactions = Vec::new();
    let sources = collect_sources(
        &config.scan.dirs,
        config.routes.app_dir.as_deref(),
        &config.scan.extensions,
    )?;
    for source in sources {
        // An unreadable file is a coverage gap, not a failed check.
        let bytes = match fs::read(&source.path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(file = %source.path.display(), error = %e, "Skipping unreadable source");
                continue;
            }
        };
        let text = String::from_utf8_lossy(&bytes);
        let critical = is_critical_origin(&source.origin, critical_origins);
        let origin = Origin::new(source.origin).critical(critical);
        let extraction = extract_navigation_requests(&origin, &text);
        tracing::trace!(
            file = %source.path.display(),
            requests = extraction.requests.len(),
            dead = extraction.dead_interactions.len(),
            "Scanned source"
        );
        requests.extend(extraction.requests);
        dead_interactions.extend(extraction.dead_interactions);
    }

    Ok(CheckInput {
        routes,
        requests,
        dead_interactions,
    })
}

/// Resolve every request against the route table.
///
/// Never fails: every request ends up resolved, unresolved or skipped.
pub fn run_check(input: &CheckInput) -> CheckReport {
    let run_id = Uuid::new_v4();
    let span = tracing::info_span!("check", run_id = %run_id);
    let _guard = span.enter();

    let mut resolved = 0;
    let mut failures = Vec::new();
    let mut skipped_requests = Vec::new();

    for request in &input.requests {
        if !request.checkable {
            tracing::debug!(origin = %request.origin, destination = %request.destination, "Skipping interpolated destination");
            metrics::record_request_outcome("skipped");
            skipped_requests.push(request.clone());
            continue;
        }

        if normalize_destination(&request.destination).is_none() {
            metrics::record_request_outcome("unresolved");
            failures.push(Failure {
                request: request.clone(),
                reason: FailureReason::EmptyDestination,
            });
            continue;
        }

        match input.routes.resolve(&request.destination) {
            Some(resolution) => {
                tracing::trace!(
                    destination = %request.destination,
                    rule = %resolution.rule,
                    route = ?resolution.route,
                    "Resolved"
                );
                metrics::record_request_outcome("resolved");
                resolved += 1;
            }
            None => {
                tracing::warn!(
                    origin = %request.origin,
                    action = %request.action,
                    destination = %request.destination,
                    critical = request.critical,
                    "Unresolved navigation"
                );
                metrics::record_request_outcome("unresolved");
                failures.push(Failure {
                    request: request.clone(),
                    reason: FailureReason::NoMatchingRoute,
                });
            }
        }
    }

    metrics::record_known_routes(input.routes.len());
    metrics::record_dead_interactions(input.dead_interactions.len());

    let report = CheckReport {
        run_id,
        total_routes: input.routes.len(),
        total_requests: input.requests.len(),
        checked: input.requests.len() - skipped_requests.len(),
        resolved,
        unresolved: failures.len(),
        skipped: skipped_requests.len(),
        failures,
        skipped_requests,
        dead_interactions: input.dead_interactions.clone(),
    };

    tracing::info!(
        routes = report.total_routes,
        requests = report.total_requests,
        resolved = report.resolved,
        unresolved = report.unresolved,
        skipped = report.skipped,
        dead_interactions = report.dead_interactions.len(),
        "Check complete"
    );
    report
}

/// Gather and run in one step.
pub fn check(config: &CheckerConfig) -> Result<CheckReport, DiscoveryError> {
    let input = gather(config)?;
    Ok(run_check(&input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(routes: &[&str], requests: Vec<NavigationRequest>) -> CheckInput {
        CheckInput {
            routes: RouteTable::from_routes(routes),
            requests,
            dead_interactions: Vec::new(),
        }
    }

    #[test]
    fn test_counts_and_failures() {
        let requests = vec![
            NavigationRequest::declared("(auth)/login", "Sign in", "/(tabs)", true),
            NavigationRequest::declared("home", "Open session", "session/${sid}", false),
            NavigationRequest::declared("admin", "Users", "admin/user", false),
            NavigationRequest::declared("home", "Broken", "  ", false),
        ];
        let report = run_check(&input(&["(tabs)/live", "admin/users"], requests));

        assert_eq!(report.total_requests, 4);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.checked, 3);
        assert_eq!(report.resolved, 1);
        assert_eq!(report.unresolved, 2);
        let reasons: Vec<_> = report.failures.iter().map(|f| f.reason).collect();
        assert_eq!(
            reasons,
            vec![FailureReason::NoMatchingRoute, FailureReason::EmptyDestination]
        );
    }

    #[test]
    fn test_all_unresolved_still_reports() {
        let requests = vec![NavigationRequest::declared("a", "b", "/nowhere", true)];
        let report = run_check(&input(&["home"], requests));
        assert_eq!(report.unresolved, 1);
        assert_eq!(report.resolved, 0);
    }
}
