//! Minimal lexical helpers for scanning JS/TS/JSX source text.
//!
//! This is not a parser. It knows just enough about strings, template
//! literals, comments and braces to find call arguments and JSX tags.

/// A string or template literal read from source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub quote: char,
    pub text: String,
}

impl Literal {
    pub fn is_template(&self) -> bool {
        self.quote == '`'
    }

    /// `${...}` placeholders make the value unknowable statically.
    pub fn has_interpolation(&self) -> bool {
        self.is_template() && self.text.contains("${")
    }
}

/// Replace comment contents with spaces. Newlines are kept, so line numbers
/// computed on the result match the input.
pub fn mask_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut quote: Option<char> = None;

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            out.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            } else if c == q || (c == '\n' && q != '`') {
                quote = None;
            }
            continue;
        }

        match (c, chars.peek().copied()) {
            ('/', Some('/')) => {
                out.push(' ');
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                        break;
                    }
                    out.push(' ');
                }
            }
            ('/', Some('*')) => {
                chars.next();
                out.push_str("  ");
                let mut prev = '\0';
                for next in chars.by_ref() {
                    out.push(if next == '\n' { '\n' } else { ' ' });
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            ('\'' | '"' | '`', _) => {
                quote = Some(c);
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Read a literal at the start of `s` (after leading whitespace).
///
/// Returns the literal and the text following its closing quote.
pub fn read_literal(s: &str) -> Option<(Literal, &str)> {
    let s = s.trim_start();
    let quote = s.chars().next().filter(|c| matches!(c, '\'' | '"' | '`'))?;
    let body = &s[quote.len_utf8()..];

    let mut text = String::new();
    let mut chars = body.char_indices();
    while let Some((idx, c)) = chars.next() {
        if c == '\\' {
            if let Some((_, escaped)) = chars.next() {
                text.push(escaped);
            }
            continue;
        }
        if c == quote {
            let rest = &body[idx + c.len_utf8()..];
            return Some((Literal { quote, text }, rest));
        }
        if c == '\n' && quote != '`' {
            return None;
        }
        text.push(c);
    }
    None
}

/// Read a trailing ` as Type` clause that follows a literal, if any.
pub fn read_type_assertion(rest: &str) -> Option<&str> {
    let trimmed = rest.trim_start();
    let after = trimmed.strip_prefix("as")?;
    if !after.starts_with(char::is_whitespace) {
        return None;
    }
    let end = after
        .find([')', ',', '}', ';', '\n'])
        .unwrap_or(after.len());
    let ty = after[..end].trim();
    (!ty.is_empty()).then_some(ty)
}

/// Index just past the `}` closing the `{` at `open`, honoring nested braces
/// and string literals.
pub fn matching_brace(s: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut chars = s[open..].char_indices();

    while let Some((offset, c)) = chars.next() {
        if let Some(q) = quote {
            if c == '\\' {
                chars.next();
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' | '`' => quote = Some(c),
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(open + offset + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Index just past the `>` that ends the JSX opening tag starting at `start`.
///
/// `>` inside `{...}` expressions (arrow functions) or quoted attribute
/// values does not end the tag.
pub fn tag_end(s: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut chars = s[start..].char_indices();

    while let Some((offset, c)) = chars.next() {
        if let Some(q) = quote {
            if c == '\\' {
                chars.next();
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' | '`' => quote = Some(c),
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            '>' if depth == 0 => return Some(start + offset + 1),
            _ => {}
        }
    }
    None
}

/// 1-based line number of a byte offset.
pub fn line_of(source: &str, offset: usize) -> usize {
    source[..offset.min(source.len())]
        .bytes()
        .filter(|b| *b == b'\n')
        .count()
        + 1
}

pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}
