//! Markup escaping and element-name sanitization.

use std::borrow::Cow;

/// Escape the five markup metacharacters into entity form.
///
/// `&`, `<`, `>`, `"` and `'` become `&amp;`, `&lt;`, `&gt;`, `&quot;` and
/// `&apos;`. Returns the input borrowed when nothing needs escaping.
pub fn escape_text(raw: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(raw)
}

/// Sanitize text into a legal element name.
///
/// Whitespace runs collapse into a single `_`, characters illegal in element
/// names are dropped (including `:`; namespaces are not supported), and a
/// leading character that cannot start a name gets a `_` prefix. Idempotent:
/// a legal name comes back unchanged. Returns the empty string when nothing
/// survives; callers treat that as "no tag derivable".
pub fn escape_tag_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_separator = false;
    for ch in raw.trim().chars() {
        if ch.is_whitespace() {
            pending_separator = !out.is_empty();
        } else if is_name_char(ch) {
            if pending_separator {
                out.push('_');
                pending_separator = false;
            }
            out.push(ch);
        }
        // anything else is dropped
    }
    if let Some(first) = out.chars().next() {
        if !is_name_start_char(first) {
            out.insert(0, '_');
        }
    }
    out
}

/// Whether `name` is a legal element name as produced by [`escape_tag_name`].
pub fn is_legal_tag_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_name_start_char(first) => chars.all(is_name_char),
        _ => false,
    }
}

fn is_name_start_char(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

fn is_name_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '-' | '_' | '.')
}
