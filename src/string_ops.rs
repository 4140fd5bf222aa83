//! Escape-aware string primitives shared by the binder, unbinder and matcher.
//!
//! A backslash quotes the character that follows it. A quoted pair is one
//! *logical character*: lengths, indices and reversal below never split one.
//! Positions passed in and returned are byte offsets unless a function says
//! it works in logical characters.

use crate::constants::{FS_PREFIX, URI_FIELD_COUNT, URI_PREFIX};
use crate::error::ParseErrorKind;

/// The quoting character.
pub const ESCAPE: char = '\\';

/// Iterator over the logical characters of a string.
///
/// Yields `(byte_offset, slice)` where `slice` is either a single character or
/// an escape pair. A trailing lone backslash is yielded on its own.
#[derive(Debug, Clone)]
pub struct LogicalChars<'a> {
    s: &'a str,
    pos: usize,
}

impl<'a> Iterator for LogicalChars<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.s[self.pos..];
        let mut chars = rest.chars();
        let first = chars.next()?;
        let mut len = first.len_utf8();
        if first == ESCAPE {
            if let Some(quoted) = chars.next() {
                len += quoted.len_utf8();
            }
        }
        let start = self.pos;
        self.pos += len;
        Some((start, &self.s[start..start + len]))
    }
}

/// Returns an iterator over the logical characters of `s`.
#[must_use]
pub fn logical_chars(s: &str) -> LogicalChars<'_> {
    LogicalChars { s, pos: 0 }
}

/// Counts logical characters; an escape pair counts once.
///
/// ```
/// use cpe_name::string_ops::logical_length;
///
/// assert_eq!(logical_length("8\\.0"), 3);
/// ```
#[must_use]
pub fn logical_length(s: &str) -> usize {
    logical_chars(s).count()
}

/// Finds the first `ch` at or after byte offset `from` that is not quoted.
#[must_use]
pub fn find_unescaped(s: &str, ch: char, from: usize) -> Option<usize> {
    logical_chars(s)
        .skip_while(|(i, _)| *i < from)
        .find(|(_, lc)| lc.len() == ch.len_utf8() && lc.starts_with(ch))
        .map(|(i, _)| i)
}

/// Finds the first unquoted colon.
#[must_use]
pub fn find_unescaped_colon(s: &str) -> Option<usize> {
    find_unescaped(s, ':', 0)
}

/// Splits `s` at every unquoted `sep`.
#[must_use]
pub fn split_unescaped(s: &str, sep: char) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut start = 0;
    while let Some(idx) = find_unescaped(s, sep, start) {
        fields.push(&s[start..idx]);
        start = idx + sep.len_utf8();
    }
    fields.push(&s[start..]);
    fields
}

/// Counts the backslashes in `s[start..end]` that act as escape markers.
///
/// A backslash quoted by the one before it is data, not a marker. Escapes are
/// tracked from the beginning of `s` so a pair straddling `start` is handled.
#[must_use]
pub fn count_escape_characters(s: &str, start: usize, end: usize) -> usize {
    logical_chars(s)
        .take_while(|(i, _)| *i < end)
        .filter(|(i, lc)| *i >= start && lc.len() > 1)
        .count()
}

/// Returns true if `s` contains an unquoted `*` or `?`.
#[must_use]
pub fn has_wildcards(s: &str) -> bool {
    logical_chars(s).any(|(_, lc)| lc == "*" || lc == "?")
}

/// Returns true if `c` passes through every binding untouched.
#[must_use]
pub const fn is_alphanumeric_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns true if `s` is non-empty and made only of ASCII letters, digits and `_`.
#[must_use]
pub fn is_alphanumeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_alphanumeric_char)
}

/// ASCII case folding; CPE names are ASCII only.
#[must_use]
pub fn to_lowercase(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Reverses `s` by logical character, keeping escape pairs in order.
///
/// ```
/// use cpe_name::string_ops::reverse;
///
/// assert_eq!(reverse("ab\\:c"), "c\\:ba");
/// ```
#[must_use]
pub fn reverse(s: &str) -> String {
    let parts: Vec<&str> = logical_chars(s).map(|(_, lc)| lc).collect();
    parts.into_iter().rev().collect()
}

/// Returns logical characters `start..end` of `s`.
///
/// Indices past the end are clamped.
#[must_use]
pub fn substring(s: &str, start: usize, end: usize) -> &str {
    let mut begin = s.len();
    let mut finish = s.len();
    for (n, (i, _)) in logical_chars(s).enumerate() {
        if n == start {
            begin = i;
        }
        if n == end {
            finish = i;
            break;
        }
    }
    if begin > finish {
        return "";
    }
    &s[begin..finish]
}

/// Concatenates `parts` in order.
#[must_use]
pub fn concat(parts: &[&str]) -> String {
    parts.concat()
}

fn has_prefix_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Returns true for characters that may appear in a URI binding outside the prefix.
const fn is_uri_char(c: char) -> bool {
    is_alphanumeric_char(c) || matches!(c, '.' | '-' | '~' | '%' | '*' | '?' | ':')
}

/// Structural check of a URI binding.
///
/// Verifies the `cpe:/` prefix, the character set, that every `%` starts a
/// two-digit hex escape, and that there are at most seven components. Does
/// not decode.
///
/// # Errors
///
/// Returns [`ParseErrorKind::MalformedUri`] describing the first violation.
pub fn validate_uri_syntax(s: &str) -> Result<(), ParseErrorKind> {
    if !has_prefix_ignore_case(s, URI_PREFIX) {
        return Err(ParseErrorKind::MalformedUri {
            reason: "URI must start with 'cpe:/'",
        });
    }
    let body = &s[URI_PREFIX.len()..];

    if !body.chars().all(is_uri_char) {
        return Err(ParseErrorKind::MalformedUri {
            reason: "contains a character not permitted in a URI",
        });
    }

    let bytes = body.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'%'
            && !(i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit())
        {
            return Err(ParseErrorKind::MalformedUri {
                reason: "incomplete percent-encoding",
            });
        }
    }

    if body.matches(':').count() >= URI_FIELD_COUNT {
        return Err(ParseErrorKind::MalformedUri {
            reason: "URI has more than 7 components",
        });
    }

    Ok(())
}

/// Structural check of a formatted string binding.
///
/// Verifies the `cpe:2.3:` prefix, that only printable non-space ASCII is
/// used, that no escape is left dangling, and that no component is empty.
/// Field counting is left to the unbinder.
///
/// # Errors
///
/// Returns [`ParseErrorKind::MalformedFormattedString`] describing the first
/// violation.
pub fn validate_formatted_string_syntax(s: &str) -> Result<(), ParseErrorKind> {
    if !has_prefix_ignore_case(s, FS_PREFIX) {
        return Err(ParseErrorKind::MalformedFormattedString {
            reason: "formatted string must start with 'cpe:2.3:'",
        });
    }
    let body = &s[FS_PREFIX.len()..];

    if !body.chars().all(|c| c.is_ascii_graphic()) {
        return Err(ParseErrorKind::MalformedFormattedString {
            reason: "contains whitespace or a non-printable character",
        });
    }

    if logical_chars(body).any(|(_, lc)| lc == "\\") {
        return Err(ParseErrorKind::MalformedFormattedString {
            reason: "ends with an incomplete escape",
        });
    }

    if split_unescaped(body, ':').iter().any(|f| f.is_empty()) {
        return Err(ParseErrorKind::MalformedFormattedString {
            reason: "contains an empty component",
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_length_counts_pairs_once() {
        assert_eq!(logical_length(""), 0);
        assert_eq!(logical_length("abc"), 3);
        assert_eq!(logical_length("a\\.b"), 3);
        assert_eq!(logical_length("\\\\\\*"), 2);
        assert_eq!(logical_length("a\\"), 2);
    }

    #[test]
    fn find_unescaped_skips_quoted() {
        assert_eq!(find_unescaped("a\\:b:c", ':', 0), Some(4));
        assert_eq!(find_unescaped("a\\\\:b", ':', 0), Some(3));
        assert_eq!(find_unescaped("a:b:c", ':', 2), Some(3));
        assert_eq!(find_unescaped("a\\:b", ':', 0), None);
    }

    #[test]
    fn find_unescaped_colon_none() {
        assert_eq!(find_unescaped_colon("abc"), None);
        assert_eq!(find_unescaped_colon("ab:c"), Some(2));
    }

    #[test]
    fn split_unescaped_respects_quoting() {
        assert_eq!(split_unescaped("a:b\\:c:d", ':'), vec!["a", "b\\:c", "d"]);
        assert_eq!(split_unescaped("~~x~~", '~'), vec!["", "", "x", "", ""]);
        assert_eq!(split_unescaped("", ':'), vec![""]);
    }

    #[test]
    fn count_escapes_ignores_quoted_backslash() {
        assert_eq!(count_escape_characters("a\\.b\\\\c", 0, 7), 2);
        assert_eq!(count_escape_characters("a\\.b\\\\c", 3, 7), 1);
        assert_eq!(count_escape_characters("abc", 0, 3), 0);
    }

    #[test]
    fn wildcards_detected_only_unquoted() {
        assert!(has_wildcards("foo*"));
        assert!(has_wildcards("f?o"));
        assert!(!has_wildcards("foo\\*"));
        assert!(!has_wildcards("foo\\?bar"));
        assert!(has_wildcards("\\**"));
    }

    #[test]
    fn alphanumeric() {
        assert!(is_alphanumeric("internet_explorer8"));
        assert!(!is_alphanumeric("8.0"));
        assert!(!is_alphanumeric(""));
    }

    #[test]
    fn lowercase_is_ascii_only() {
        assert_eq!(to_lowercase("PalmOS"), "palmos");
    }

    #[test]
    fn reverse_keeps_pairs() {
        assert_eq!(reverse("abc"), "cba");
        assert_eq!(reverse("a\\*"), "\\*a");
    }

    #[test]
    fn substring_by_logical_index() {
        assert_eq!(substring("a\\.bc", 1, 3), "\\.b");
        assert_eq!(substring("abc", 1, 10), "bc");
        assert_eq!(substring("abc", 5, 10), "");
        assert_eq!(substring("abc", 2, 1), "");
    }

    #[test]
    fn concat_joins_in_order() {
        assert_eq!(concat(&["cpe:/", "a", ":"]), "cpe:/a:");
    }

    #[test]
    fn uri_syntax_accepts_legacy_names() {
        assert!(validate_uri_syntax("cpe:/a:microsoft:internet_explorer:8.0.6001:beta").is_ok());
        assert!(validate_uri_syntax("CPE:/o:linux").is_ok());
        assert!(validate_uri_syntax("cpe:/a:hp:insight:7.4::~~online~win2003~x64~").is_ok());
        assert!(validate_uri_syntax("cpe:/").is_ok());
    }

    #[test]
    fn uri_syntax_rejects_bad_prefix() {
        assert!(matches!(
            validate_uri_syntax("cpe:2.3:a"),
            Err(ParseErrorKind::MalformedUri { .. })
        ));
    }

    #[test]
    fn uri_syntax_rejects_bad_percent() {
        assert!(validate_uri_syntax("cpe:/a:foo%2").is_err());
        assert!(validate_uri_syntax("cpe:/a:foo%zz").is_err());
        assert!(validate_uri_syntax("cpe:/a:foo%21").is_ok());
    }

    #[test]
    fn uri_syntax_rejects_extra_components() {
        assert!(validate_uri_syntax("cpe:/a:b:c:d:e:f:g").is_ok());
        assert!(validate_uri_syntax("cpe:/a:b:c:d:e:f:g:h").is_err());
    }

    #[test]
    fn uri_syntax_rejects_disallowed_chars() {
        assert!(validate_uri_syntax("cpe:/a:foo bar").is_err());
        assert!(validate_uri_syntax("cpe:/a:foo\\!").is_err());
        assert!(validate_uri_syntax("cpe:/a/b").is_err());
    }

    #[test]
    fn fs_syntax() {
        assert!(validate_formatted_string_syntax("cpe:2.3:a:b:c:*:*:*:*:*:*:*:*").is_ok());
        assert!(validate_formatted_string_syntax("cpe:/a:b").is_err());
        assert!(validate_formatted_string_syntax("cpe:2.3:a:b c:*").is_err());
        assert!(validate_formatted_string_syntax("cpe:2.3:a::c").is_err());
        assert!(validate_formatted_string_syntax("cpe:2.3:a:b\\").is_err());
        assert!(validate_formatted_string_syntax("cpe:2.3:a:b\\\\").is_ok());
    }
}
