// Messager - core/format.rs
//
// Template substitution for resolved messages.
//
// Two passes over the template, both literal (no patterns):
//   1. every escape marker becomes the escape character
//   2. each (from, to) replacement is applied over the result of the
//      previous step, in the caller's iteration order
//
// Replacements see the output of earlier replacements, so overlapping
// patterns depend on iteration order. Callers that need a fixed order pass
// a slice instead of a hash map.

use crate::core::model::FormatOptions;

/// Apply escape-marker rewriting and literal replacements to a template.
///
/// Every pair is applied as a plain substring replacement. An empty `from`
/// matches at every position, inserting `to` around each character.
pub fn apply<I, K, V>(template: &str, options: &FormatOptions, replacements: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut value = apply_escape(template, options);

    for (from, to) in replacements {
        value = value.replace(from.as_ref(), to.as_ref());
    }

    value
}

/// Rewrite every escape marker in `template` to the escape character.
pub fn apply_escape(template: &str, options: &FormatOptions) -> String {
    if options.escape_marker.is_empty() {
        return template.to_string();
    }
    let mut buf = [0u8; 4];
    template.replace(
        options.escape_marker.as_str(),
        options.escape_char.encode_utf8(&mut buf),
    )
}

/// Whether a resolved message would be suppressed on emission.
///
/// Empty or made only of whitespace. Non-breaking spaces (U+00A0, U+2007,
/// U+202F) and NEL (U+0085) are not whitespace here, while the C0 separators
/// U+001C..=U+001F are.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_blank_char)
}

fn is_blank_char(c: char) -> bool {
    match c {
        '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\u{0085}' => false,
        '\u{001C}'..='\u{001F}' => true,
        _ => c.is_whitespace(),
    }
}
