//! Destination normalization.
//!
//! Runs once, before any matching rule:
//! 1. drop the query string (`?` onward)
//! 2. drop a trailing ` as Type` assertion
//! 3. drop template-literal backticks
//! 4. trim whitespace
//!
//! The assertion is only recognized right after a closing quote or backtick,
//! or when the type looks like a type: `const`, `any` and similar keywords,
//! or a capitalized name with no whitespace outside `<...>`. A path such as
//! `/learn as much` is left alone.
//!
//! An empty result means the destination is malformed.

/// Normalize a raw destination string. Returns `None` when nothing is left.
pub fn normalize_destination(raw: &str) -> Option<String> {
    let without_query = match raw.find('?') {
        Some(idx) => &raw[..idx],
        None => raw,
    };
    let without_assertion = strip_type_assertion(without_query);
    let without_ticks: String = without_assertion.chars().filter(|c| *c != '`').collect();
    let normalized = without_ticks.trim();

    if normalized.is_empty() {
        None
    } else {
        Some(normalized.to_string())
    }
}

const TYPE_KEYWORDS: &[&str] = &["const", "any", "unknown", "never", "string"];

/// Remove a trailing ` as Href`, ` as const`, ` as Href<string>` clause.
fn strip_type_assertion(s: &str) -> &str {
    let trimmed = s.trim_end();
    let Some(idx) = trimmed.rfind(" as ") else {
        return trimmed;
    };
    let head = &trimmed[..idx];
    let ty = trimmed[idx + 4..].trim();
    let after_literal = head.trim_end().ends_with(['`', '\'', '"']);
    if (after_literal && is_type_expr(ty)) || is_type_name(ty) {
        head
    } else {
        trimmed
    }
}

/// Identifier-led type text; whitespace only inside `<...>`.
fn is_type_expr(ty: &str) -> bool {
    if !ty.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_' || c == '$') {
        return false;
    }
    let mut depth = 0usize;
    for c in ty.chars() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => return false,
            c if !is_type_char(c) => return false,
            _ => {}
        }
    }
    true
}

fn is_type_name(ty: &str) -> bool {
    is_type_expr(ty) && (TYPE_KEYWORDS.contains(&ty) || ty.starts_with(|c: char| c.is_ascii_uppercase()))
}

fn is_type_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '.' | '<' | '>' | ',' | ' ' | '[' | ']')
}
