//! Template-based rendering of dictionary entries.
//!
//! Templates are plain strings with `{placeholder}` references into the
//! fixed field tables of [`crate::constants`]. This is literal substitution,
//! not an expression language: no conditionals, no loops, no escaping beyond
//! the one-time [`unescape`] pass on user-supplied template strings.

use crate::constants::{LIST_FIELDS, STR_FIELDS};
use crate::dictionary::Entry;

/// Renders entries through a placeholder template.
pub struct Formatter {
    template: String,
    /// Items to keep from each list field before joining.
    /// `None` means unlimited.
    example_cap: Option<usize>,
}

impl Formatter {
    pub fn new(template: impl Into<String>, example_cap: Option<usize>) -> Self {
        Self {
            template: template.into(),
            example_cap,
        }
    }

    /// Render one entry.
    ///
    /// Every recognized placeholder substitutes its field value; unknown
    /// placeholders and absent values substitute the empty string, never an
    /// error. `{{` and `}}` are literal braces; an unterminated `{` is kept
    /// as-is. An entry with no scalar data at all degrades to its kanji.
    pub fn render(&self, entry: &Entry) -> String {
        if !entry.has_data() {
            return entry.kanji().to_string();
        }

        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(pos) = rest.find(['{', '}']) {
            out.push_str(&rest[..pos]);
            let tail = &rest[pos..];

            if tail.starts_with("{{") {
                out.push('{');
                rest = &tail[2..];
            } else if tail.starts_with("}}") {
                out.push('}');
                rest = &tail[2..];
            } else if tail.starts_with('}') {
                // Stray closing brace, kept literally.
                out.push('}');
                rest = &tail[1..];
            } else if let Some(end) = tail.find('}') {
                out.push_str(&self.lookup(entry, &tail[1..end]));
                rest = &tail[end + 1..];
            } else {
                // Unterminated reference, kept literally.
                out.push_str(tail);
                rest = "";
            }
        }
        out.push_str(rest);
        out
    }

    /// Field lookup with an explicit empty-string default.
    fn lookup(&self, entry: &Entry, key: &str) -> String {
        if STR_FIELDS.contains(&key) {
            return entry.scalar(key).unwrap_or_default().to_string();
        }
        if LIST_FIELDS.contains(&key) {
            return flatten(entry.list(key), self.example_cap).unwrap_or_default();
        }
        String::new()
    }
}

/// Flatten a list field to a newline-joined string.
///
/// A list containing any text-less item is treated as absent, matching the
/// dictionary's historical rendering. The cap truncates to the first N items
/// in document order; zero keeps none.
fn flatten(items: Option<&[Option<String>]>, cap: Option<usize>) -> Option<String> {
    let items = items?;
    if items.iter().any(Option::is_none) {
        return None;
    }
    let take = cap.unwrap_or(items.len());
    let joined = items
        .iter()
        .take(take)
        .filter_map(Option::as_deref)
        .collect::<Vec<_>>()
        .join("\n");
    Some(joined)
}

/// Decode backslash escapes in user-supplied template and separator strings.
///
/// Supports `\n`, `\t`, `\r`, `\0`, `\\`, and `\uXXXX`. Unrecognized or
/// truncated escapes are kept literally.
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some('u') => {
                let hex: String = chars.clone().take(4).collect();
                match (hex.len() == 4).then(|| u32::from_str_radix(&hex, 16).ok()).flatten() {
                    Some(cp) => {
                        out.push(char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER));
                        for _ in 0..4 {
                            chars.next();
                        }
                    }
                    None => out.push_str("\\u"),
                }
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
