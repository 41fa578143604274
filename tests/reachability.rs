//! Reachability rules: documented scenarios and properties.

use proptest::prelude::*;
use route_reach::routing::{is_reachable, RouteTable, Rule};

#[test]
fn test_group_route_exact_modulo_slash() {
    assert!(is_reachable("/(auth)/login", &["(auth)/login"]));
    assert!(is_reachable("(auth)/login", &["/(auth)/login"]));
}

#[test]
fn test_dynamic_segment() {
    let known = ["session/[id]"];
    assert!(is_reachable("session/abc123", &known));
    assert!(!is_reachable("session/abc/extra", &known));
}

#[test]
fn test_group_erasure_fallback() {
    let table = RouteTable::from_routes(["(tabs)/live"]);
    let resolution = table.resolve("live").unwrap();
    assert_eq!(resolution.rule, Rule::GroupErasure);
}

#[test]
fn test_bare_group() {
    let table = RouteTable::from_routes(["(tabs)"]);
    assert!(table.is_reachable("(tabs)"));
    assert!(table.is_reachable("/(tabs)"));
}

#[test]
fn test_literal_mismatch() {
    assert!(!is_reachable("admin/user", &["admin/users"]));
}

#[test]
fn test_group_is_not_a_wildcard() {
    // `(tabs)` only accepts `(tabs)` or `tabs` at its position
    let known = ["(tabs)/live"];
    assert!(is_reachable("tabs/live", &known));
    assert!(!is_reachable("other/live", &known));
    // A destination group never matches a literal position
    assert!(!is_reachable("(tabs)/profile", &["settings/profile"]));
}

#[test]
fn test_normalization_before_matching() {
    let known = ["wallet/[tx]", "(tabs)/live"];
    assert!(is_reachable("`/wallet/0xabc` as Href", &known));
    assert!(is_reachable("  /live?dj=1 ", &known));
    assert!(!is_reachable("", &known));
    assert!(!is_reachable("?x=1", &known));
}

#[test]
fn test_as_word_inside_path_is_not_an_assertion() {
    assert!(!is_reachable("/learn as much", &["learn"]));
    assert!(is_reachable("/learn as Href", &["learn"]));
}

#[test]
fn test_dynamic_segment_rejects_group() {
    let known = ["session/[id]"];
    assert!(!is_reachable("session/(x)", &known));
    assert!(is_reachable("session/x", &known));
}

fn literal() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9_-]{0,11}"
}

fn route_segment() -> impl Strategy<Value = String> {
    prop_oneof![
        literal(),
        literal().prop_map(|s| format!("({s})")),
        literal().prop_map(|s| format!("[{s}]")),
    ]
}

fn route() -> impl Strategy<Value = String> {
    prop::collection::vec(route_segment(), 1..5).prop_map(|segments| segments.join("/"))
}

proptest! {
    #[test]
    fn prop_identical_destination_is_reachable(
        routes in prop::collection::vec(route(), 1..8),
        pick in any::<prop::sample::Index>(),
        lead_dest in any::<bool>(),
        lead_known in any::<bool>(),
    ) {
        let chosen = pick.get(&routes).clone();
        let known: Vec<String> = routes
            .iter()
            .map(|r| if lead_known { format!("/{r}") } else { r.clone() })
            .collect();
        let destination = if lead_dest { format!("/{chosen}") } else { chosen };
        prop_assert!(is_reachable(&destination, &known));
    }

    #[test]
    fn prop_dynamic_position_accepts_any_literal(
        prefix in prop::collection::vec(literal(), 0..3),
        suffix in prop::collection::vec(literal(), 0..3),
        param in literal(),
        value in literal(),
    ) {
        let mut known = prefix.clone();
        known.push(format!("[{param}]"));
        known.extend(suffix.clone());

        let mut destination = prefix;
        destination.push(value);
        destination.extend(suffix);

        prop_assert!(is_reachable(&destination.join("/"), &[known.join("/")]));
    }

    #[test]
    fn prop_group_position_rejects_other_literals(
        group in literal(),
        other in literal(),
        tail in prop::collection::vec(literal(), 1..3),
    ) {
        prop_assume!(other != group);
        let known = format!("({group})/{}", tail.join("/"));
        let destination = format!("{other}/{}", tail.join("/"));
        // Neither the positional rule nor group erasure (other stays a literal) applies
        prop_assert!(!is_reachable(&destination, &[known]));
    }

    #[test]
    fn prop_resolution_is_idempotent(
        routes in prop::collection::vec(route(), 1..8),
        destination in route(),
    ) {
        let table = RouteTable::from_routes(&routes);
        prop_assert_eq!(table.resolve(&destination), table.resolve(&destination));
    }

    #[test]
    fn prop_more_routes_never_hurt(
        routes in prop::collection::vec(route(), 1..6),
        extra in prop::collection::vec(route(), 0..6),
        destination in route(),
    ) {
        let small = RouteTable::from_routes(&routes);
        let large = RouteTable::from_routes(routes.iter().chain(&extra));
        if small.is_reachable(&destination) {
            prop_assert!(large.is_reachable(&destination));
        }
    }
}
