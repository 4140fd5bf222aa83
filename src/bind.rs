//! Binding of well-formed names to the URI and formatted string syntaxes.

use std::fmt::Write;

use tracing::trace;

use crate::attribute::Attribute;
use crate::constants::{FS_PREFIX, URI_PREFIX};
use crate::packed;
use crate::string_ops::{self, ESCAPE};
use crate::value::{AttributeValue, Literal};
use crate::wfn::WellFormedName;

/// Binds a well-formed name to a CPE 2.2 URI.
///
/// Extended attributes are packed into the edition field when any of them is
/// set, and trailing ANY fields are omitted.
///
/// # Examples
///
/// ```
/// use cpe_name::{bind_to_uri, Attribute, WellFormedName};
///
/// let mut wfn = WellFormedName::new();
/// wfn.set_literal(Attribute::Part, "a").unwrap();
/// wfn.set_literal(Attribute::Vendor, "microsoft").unwrap();
/// wfn.set_literal(Attribute::Version, "8\\.0\\.6001").unwrap();
///
/// assert_eq!(bind_to_uri(&wfn), "cpe:/a:microsoft::8.0.6001");
/// ```
#[must_use]
pub fn bind_to_uri(wfn: &WellFormedName) -> String {
    let fields: Vec<String> = Attribute::URI_ORDER
        .into_iter()
        .map(|attribute| {
            if attribute == Attribute::Edition {
                let [edition, extended @ ..] =
                    Attribute::PACKED.map(|a| bind_value_for_uri(wfn.get(a)));
                packed::pack(&edition, extended.each_ref().map(String::as_str))
            } else {
                bind_value_for_uri(wfn.get(attribute))
            }
        })
        .collect();

    let joined = fields.join(":");
    let uri = string_ops::concat(&[URI_PREFIX, joined.trim_end_matches(':')]);
    trace!(%uri, "bound name to URI");
    uri
}

/// Binds a well-formed name to a CPE 2.3 formatted string.
///
/// # Examples
///
/// ```
/// use cpe_name::{bind_to_formatted_string, Attribute, WellFormedName};
///
/// let mut wfn = WellFormedName::new();
/// wfn.set_literal(Attribute::Part, "a").unwrap();
/// wfn.set_literal(Attribute::Vendor, "foo\\$bar").unwrap();
///
/// assert_eq!(
///     bind_to_formatted_string(&wfn),
///     "cpe:2.3:a:foo\\$bar:*:*:*:*:*:*:*:*:*"
/// );
/// ```
#[must_use]
pub fn bind_to_formatted_string(wfn: &WellFormedName) -> String {
    let fields: Vec<String> = wfn.iter().map(|(_, v)| bind_value_for_fs(v)).collect();
    let fs = string_ops::concat(&[FS_PREFIX, &fields.join(":")]);
    trace!(%fs, "bound name to formatted string");
    fs
}

/// Binds one value for the URI syntax.
///
/// ANY is blank, NA is `-`, and quoted characters are percent-encoded except
/// `.` and `-`. Unquoted wildcards are kept bare.
#[must_use]
pub fn bind_value_for_uri(value: &AttributeValue) -> String {
    match value {
        AttributeValue::Any => String::new(),
        AttributeValue::NotApplicable => "-".to_string(),
        AttributeValue::Literal(l) => transform_for_uri(l),
    }
}

/// Binds one value for the formatted string syntax.
///
/// ANY is `*`, NA is `-`. Quoting is kept except on `.`, `-` and `_`.
#[must_use]
pub fn bind_value_for_fs(value: &AttributeValue) -> String {
    match value {
        AttributeValue::Any => "*".to_string(),
        AttributeValue::NotApplicable => "-".to_string(),
        AttributeValue::Literal(l) => process_quoted_chars(l),
    }
}

fn transform_for_uri(literal: &Literal) -> String {
    let mut result = String::with_capacity(literal.as_str().len());
    for (_, lc) in string_ops::logical_chars(literal.as_str()) {
        match lc.strip_prefix(ESCAPE) {
            Some(quoted) => quoted.chars().for_each(|c| pct_encode(c, &mut result)),
            None => result.push_str(lc),
        }
    }
    // A bare hyphen would read back as NA.
    if result == "-" {
        result.replace_range(.., "%2d");
    }
    result
}

fn pct_encode(c: char, out: &mut String) {
    if string_ops::is_alphanumeric_char(c) || c == '-' || c == '.' {
        out.push(c);
    } else {
        let _ = write!(out, "%{:02x}", u32::from(c));
    }
}

fn process_quoted_chars(literal: &Literal) -> String {
    let mut result = String::with_capacity(literal.as_str().len());
    for (_, lc) in string_ops::logical_chars(literal.as_str()) {
        match lc.strip_prefix(ESCAPE) {
            Some(quoted @ ("." | "-" | "_")) => result.push_str(quoted),
            _ => result.push_str(lc),
        }
    }
    // A bare hyphen would read back as NA.
    if result == "-" {
        result.insert(0, ESCAPE);
    }
    result
}
