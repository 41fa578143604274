//! Navigation request scanner.
//!
//! # Recognized shapes
//! - `router.push|replace|navigate|dismissTo(...)`, `navigation.navigate(...)`
//! - `<Link href=...>`, `<Redirect href=...>`
//!
//! # Recognized argument forms
//! - `'...'` / `"..."` string literals
//! - `` `...` `` template literals (`${}` makes the request non-checkable)
//! - `{ pathname: <literal>, ... }` object literals
//!
//! Anything else is skipped; the scanner under-approximates.

use crate::extract::jsx::Tag;
use crate::extract::lexer::{is_ident_char, line_of, matching_brace, read_literal, read_type_assertion};
use crate::extract::types::{NavigationRequest, Origin};

/// Navigation calls, used verbatim as the action label.
pub const NAVIGATION_CALLS: &[&str] = &[
    "router.push",
    "router.replace",
    "router.navigate",
    "router.dismissTo",
    "navigation.navigate",
];

/// Components that navigate through an `href` attribute.
pub const HREF_ELEMENTS: &[&str] = &["Link", "Redirect"];

/// Scan comment-masked source for navigation calls.
pub fn scan_calls(origin: &Origin, source: &str) -> Vec<NavigationRequest> {
    let mut requests = Vec::new();
    for call in NAVIGATION_CALLS {
        for (idx, _) in source.match_indices(call) {
            let qualified = source[..idx]
                .chars()
                .next_back()
                .is_some_and(|c| is_ident_char(c) || c == '.');
            if qualified {
                continue;
            }
            let Some(args) = source[idx + call.len()..].trim_start().strip_prefix('(') else {
                continue;
            };
            if let Some((destination, checkable)) = parse_destination(args) {
                requests.push(request(origin, call, destination, checkable, line_of(source, idx)));
            }
        }
    }
    requests
}

/// Collect `href` navigations from `<Link>` / `<Redirect>` tags.
pub fn scan_links(origin: &Origin, source: &str, tags: &[Tag<'_>]) -> Vec<NavigationRequest> {
    tags.iter()
        .filter(|tag| HREF_ELEMENTS.contains(&tag.name))
        .filter_map(|tag| {
            let value = tag.attribute("href")?.value?;
            let parsed = match value.strip_prefix('{').and_then(|v| v.strip_suffix('}')) {
                Some(expression) => parse_destination(expression),
                None => literal_destination(value),
            };
            let (destination, checkable) = parsed?;
            Some(request(origin, tag.name, destination, checkable, line_of(source, tag.start)))
        })
        .collect()
}

fn request(
    origin: &Origin,
    action: &str,
    destination: String,
    checkable: bool,
    line: usize,
) -> NavigationRequest {
    NavigationRequest {
        origin: origin.screen.clone(),
        action: action.to_string(),
        destination,
        critical: origin.critical,
        line: Some(line),
        checkable,
    }
}

/// Parse the first argument of a navigation call, or an `href` expression.
fn parse_destination(args: &str) -> Option<(String, bool)> {
    let trimmed = args.trim_start();
    if trimmed.starts_with('{') {
        let end = matching_brace(trimmed, 0)?;
        let object = &trimmed[1..end - 1];
        return literal_destination(object_key(object, "pathname")?);
    }
    literal_destination(trimmed)
}

/// Raw destination text of a literal. Template literals keep their
/// backticks and a trailing ` as Type` is kept; normalization strips both.
fn literal_destination(s: &str) -> Option<(String, bool)> {
    let (literal, rest) = read_literal(s)?;
    let mut destination = if literal.is_template() {
        format!("`{}`", literal.text)
    } else {
        literal.text.clone()
    };
    if let Some(ty) = read_type_assertion(rest) {
        destination.push_str(" as ");
        destination.push_str(ty);
    }
    Some((destination, !literal.has_interpolation()))
}

/// Text after `key:` in an object literal body. Shorthand keys have no
/// static value and yield `None`.
fn object_key<'a>(object: &'a str, key: &str) -> Option<&'a str> {
    object.match_indices(key).find_map(|(idx, _)| {
        let standalone = !object[..idx].chars().next_back().is_some_and(is_ident_char);
        let after = &object[idx + key.len()..];
        let value = after.trim_start().strip_prefix(':')?;
        standalone.then_some(value)
    })
}
