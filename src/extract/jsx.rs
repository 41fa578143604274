//! JSX opening-tag scanning.

use crate::extract::lexer::{is_ident_char, matching_brace, read_literal, tag_end};

/// A JSX opening tag whose name starts with an uppercase letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<'a> {
    /// Byte offset of `<` in the scanned text.
    pub start: usize,
    pub name: &'a str,
    pub attributes: Vec<Attribute<'a>>,
    /// Whether the tag spreads props (`{...props}`).
    pub spreads: bool,
}

impl<'a> Tag<'a> {
    pub fn attribute(&self, name: &str) -> Option<&Attribute<'a>> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }
}

/// One attribute. `value` keeps its delimiters: `"..."`, `'...'` or `{...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub name: &'a str,
    pub value: Option<&'a str>,
}

impl<'a> Attribute<'a> {
    /// Inner text of a `{...}` expression value.
    pub fn expression(&self) -> Option<&'a str> {
        self.value?.strip_prefix('{')?.strip_suffix('}')
    }
}

/// Collect component tags (`<Name ...>`) from comment-masked source.
///
/// A `<` directly after an identifier is a generic argument, not a tag.
pub fn component_tags(source: &str) -> Vec<Tag<'_>> {
    let mut tags = Vec::new();
    for (start, _) in source.match_indices('<') {
        let preceded_by_ident = source[..start]
            .chars()
            .next_back()
            .is_some_and(is_ident_char);
        if preceded_by_ident {
            continue;
        }

        let after = &source[start + 1..];
        if !after.starts_with(|c: char| c.is_ascii_uppercase()) {
            continue;
        }
        let name_len = after
            .find(|c: char| !(is_ident_char(c) || c == '.'))
            .unwrap_or(after.len());
        let Some(end) = tag_end(source, start) else {
            continue;
        };

        let body_start = start + 1 + name_len;
        let body = source[body_start..end - 1].trim_end_matches('/');
        let (attributes, spreads) = parse_attributes(body);
        tags.push(Tag {
            start,
            name: &after[..name_len],
            attributes,
            spreads,
        });
    }
    tags
}

fn parse_attributes(body: &str) -> (Vec<Attribute<'_>>, bool) {
    let mut attributes = Vec::new();
    let mut spreads = false;
    let mut pos = 0;

    while pos < body.len() {
        let rest = &body[pos..];
        let trimmed = rest.trim_start();
        pos += rest.len() - trimmed.len();
        if trimmed.is_empty() {
            break;
        }

        if trimmed.starts_with('{') {
            let Some(end) = matching_brace(body, pos) else {
                break;
            };
            spreads |= body[pos + 1..end].trim_start().starts_with("...");
            pos = end;
            continue;
        }

        let name_len = trimmed
            .find(|c: char| !(is_ident_char(c) || c == '-' || c == ':'))
            .unwrap_or(trimmed.len());
        if name_len == 0 {
            // Not an attribute; skip one character and resync.
            pos += trimmed.chars().next().map_or(1, char::len_utf8);
            continue;
        }
        let name = &trimmed[..name_len];
        pos += name_len;

        let after_name = &body[pos..];
        let eq_trimmed = after_name.trim_start();
        let Some(value_part) = eq_trimmed.strip_prefix('=') else {
            attributes.push(Attribute { name, value: None });
            continue;
        };
        let value_trimmed = value_part.trim_start();
        let value_start = body.len() - value_trimmed.len();

        let value_end = if value_trimmed.starts_with('{') {
            matching_brace(body, value_start)
        } else {
            read_literal(value_trimmed).map(|(_, tail)| body.len() - tail.len())
        };
        let Some(value_end) = value_end else {
            break;
        };
        attributes.push(Attribute {
            name,
            value: Some(&body[value_start..value_end]),
        });
        pos = value_end;
    }

    (attributes, spreads)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_tags() {
        let src = r#"<View><Link href="/home" asChild>x</Link><Pressable onPress={() => a > b} disabled /></View>"#;
        let tags = component_tags(src);
        let names: Vec<_> = tags.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["View", "Link", "Pressable"]);

        let link = &tags[1];
        assert_eq!(link.attribute("href").and_then(|a| a.value), Some("\"/home\""));
        assert!(link.has_attribute("asChild"));

        let pressable = &tags[2];
        assert_eq!(
            pressable.attribute("onPress").and_then(Attribute::expression),
            Some("() => a > b")
        );
        assert!(pressable.has_attribute("disabled"));
    }

    #[test]
    fn test_generics_are_not_tags() {
        let src = "const [s, setS] = useState<Session>(null);";
        assert!(component_tags(src).is_empty());
    }

    #[test]
    fn test_spread_props() {
        let tags = component_tags("<Button {...props} title=\"Go\" />");
        assert_eq!(tags.len(), 1);
        assert!(tags[0].spreads);
        assert!(tags[0].has_attribute("title"));
    }
}
