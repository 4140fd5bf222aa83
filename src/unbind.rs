//! Unbinding of URI and formatted string syntaxes into well-formed names.

use tracing::{debug, trace};

use crate::attribute::Attribute;
use crate::constants::{FS_FIELD_COUNT, FS_PREFIX, URI_PREFIX};
use crate::error::{ParseError, ParseErrorKind};
use crate::packed;
use crate::string_ops::{self, ESCAPE};
use crate::value::{AttributeValue, Literal};
use crate::wfn::{self, WellFormedName};

/// Unbinds a CPE 2.2 URI.
///
/// Blank and missing fields read as ANY, `-` as NA. A packed edition field is
/// split into edition and the four extended attributes. Letters are folded to
/// lowercase; only punctuation may be percent-encoded.
///
/// # Errors
///
/// Returns [`ParseError`] if:
/// - The URI fails the structural check ([`ParseErrorKind::MalformedUri`])
/// - A `%xx` escape encodes a letter, digit, `_` or non-printable character
///   ([`ParseErrorKind::MalformedUri`])
/// - A packed edition does not have four or five sub-fields ([`ParseErrorKind::MalformedPackedEdition`])
/// - The part is not `a`, `o` or `h` ([`ParseErrorKind::InvalidPartValue`])
/// - A decoded field breaks the value rules ([`ParseErrorKind::InvalidValue`])
///
/// # Examples
///
/// ```
/// use cpe_name::unbind_uri;
///
/// let wfn = unbind_uri("cpe:/a:hp:insight_diagnostics:7.4.0.1570::~~online~win2003~x64~").unwrap();
/// assert_eq!(wfn.version().as_literal().unwrap().as_str(), "7\\.4\\.0\\.1570");
/// assert_eq!(wfn.target_hw().as_literal().unwrap().as_str(), "x64");
/// assert!(wfn.edition().is_any());
/// ```
pub fn unbind_uri(uri: &str) -> Result<WellFormedName, ParseError> {
    let result = unbind_uri_inner(uri).map_err(|kind| ParseError::new(uri, kind));
    match &result {
        Ok(_) => trace!(uri, "unbound URI"),
        Err(e) => debug!(uri, error = %e, "rejected URI"),
    }
    result
}

/// Unbinds a CPE 2.3 formatted string.
///
/// `*` reads as ANY and `-` as NA. Unquoted punctuation is quoted, so
/// `8.0.6001` becomes `8\.0\.6001`.
///
/// # Errors
///
/// Returns [`ParseError`] if:
/// - The input fails the structural check ([`ParseErrorKind::MalformedFormattedString`])
/// - There are not exactly eleven fields ([`ParseErrorKind::WrongFieldCount`])
/// - The part field is not `a`, `o`, `h` or `*` ([`ParseErrorKind::InvalidPartValue`])
/// - An unquoted `*` is embedded in a field ([`ParseErrorKind::InvalidEscaping`])
/// - A decoded field breaks the value rules ([`ParseErrorKind::InvalidValue`])
///
/// # Examples
///
/// ```
/// use cpe_name::unbind_formatted_string;
///
/// let wfn = unbind_formatted_string(
///     "cpe:2.3:a:microsoft:internet_explorer:8.0.6001:beta:*:*:*:*:*:*",
/// ).unwrap();
/// assert_eq!(wfn.product().as_literal().unwrap().as_str(), "internet_explorer");
/// assert_eq!(wfn.version().as_literal().unwrap().unquoted(), "8.0.6001");
/// assert!(wfn.edition().is_any());
/// ```
pub fn unbind_formatted_string(fs: &str) -> Result<WellFormedName, ParseError> {
    let result = unbind_fs_inner(fs).map_err(|kind| ParseError::new(fs, kind));
    match &result {
        Ok(_) => trace!(fs, "unbound formatted string"),
        Err(e) => debug!(fs, error = %e, "rejected formatted string"),
    }
    result
}

fn unbind_uri_inner(uri: &str) -> Result<WellFormedName, ParseErrorKind> {
    string_ops::validate_uri_syntax(uri)?;
    let body = &uri[URI_PREFIX.len()..];

    let mut wfn = WellFormedName::new();
    if body.is_empty() {
        return Ok(wfn);
    }

    for (attribute, field) in Attribute::URI_ORDER.into_iter().zip(body.split(':')) {
        if attribute == Attribute::Edition && packed::is_packed(field) {
            let subfields = packed::unpack(field)
                .map_err(|subfields| ParseErrorKind::MalformedPackedEdition { subfields })?;
            for (attribute, subfield) in Attribute::PACKED.into_iter().zip(subfields) {
                let value = decode(subfield, attribute)?;
                set(&mut wfn, attribute, value, subfield)?;
            }
        } else {
            let value = decode(field, attribute)?;
            set(&mut wfn, attribute, value, field)?;
        }
    }

    Ok(wfn)
}

fn unbind_fs_inner(fs: &str) -> Result<WellFormedName, ParseErrorKind> {
    string_ops::validate_formatted_string_syntax(fs)?;
    let body = &fs[FS_PREFIX.len()..];

    let fields = string_ops::split_unescaped(body, ':');
    if fields.len() != FS_FIELD_COUNT {
        return Err(ParseErrorKind::WrongFieldCount {
            expected: FS_FIELD_COUNT,
            actual: fields.len(),
        });
    }

    let mut wfn = WellFormedName::new();
    for (attribute, field) in Attribute::ALL.into_iter().zip(fields) {
        if attribute == Attribute::Part && !matches!(field, "a" | "o" | "h" | "*") {
            return Err(ParseErrorKind::InvalidPartValue {
                value: field.to_string(),
            });
        }
        let value = unbind_value_fs(field, attribute)?;
        set(&mut wfn, attribute, value, field)?;
    }

    Ok(wfn)
}

fn set(
    wfn: &mut WellFormedName,
    attribute: Attribute,
    value: AttributeValue,
    field: &str,
) -> Result<(), ParseErrorKind> {
    wfn.set(attribute, value).map_err(|error| {
        if attribute == Attribute::Part {
            ParseErrorKind::InvalidPartValue {
                value: field.to_string(),
            }
        } else {
            ParseErrorKind::InvalidValue { attribute, error }
        }
    })
}

fn literal(
    value: &str,
    attribute: Attribute,
    field: &str,
) -> Result<AttributeValue, ParseErrorKind> {
    Literal::parse(value)
        .map(AttributeValue::Literal)
        .map_err(|error| {
            if attribute == Attribute::Part {
                ParseErrorKind::InvalidPartValue {
                    value: field.to_string(),
                }
            } else {
                ParseErrorKind::InvalidValue {
                    attribute,
                    error: wfn::with_attribute(error, attribute),
                }
            }
        })
}

/// Decodes one URI field into WFN form.
fn decode(field: &str, attribute: Attribute) -> Result<AttributeValue, ParseErrorKind> {
    match field {
        "" => return Ok(AttributeValue::Any),
        "-" => return Ok(AttributeValue::NotApplicable),
        _ => {}
    }

    let lower = string_ops::to_lowercase(field);
    let bytes = lower.as_bytes();
    let mut result = String::with_capacity(lower.len() * 2);
    let mut idx = 0;

    while idx < bytes.len() {
        let ch = char::from(bytes[idx]);
        match ch {
            '.' | '-' | '~' => {
                result.push(ESCAPE);
                result.push(ch);
            }
            '%' => {
                // validate_uri_syntax guarantees two hex digits follow
                match &lower[idx..idx + 3] {
                    "%01" => result.push('?'),
                    "%02" => result.push('*'),
                    form => {
                        // only punctuation may be percent-encoded
                        let decoded = u8::from_str_radix(&form[1..], 16)
                            .ok()
                            .map(char::from)
                            .filter(|c| {
                                c.is_ascii_graphic() && !string_ops::is_alphanumeric_char(*c)
                            })
                            .ok_or(ParseErrorKind::MalformedUri {
                                reason: "percent-encodes a character that must not be encoded",
                            })?;
                        result.push(ESCAPE);
                        result.push(decoded);
                    }
                }
                idx += 3;
                continue;
            }
            _ => result.push(ch),
        }
        idx += 1;
    }

    literal(&result, attribute, field)
}

/// Converts one formatted string field into WFN form.
fn unbind_value_fs(field: &str, attribute: Attribute) -> Result<AttributeValue, ParseErrorKind> {
    match field {
        "*" => return Ok(AttributeValue::Any),
        "-" => return Ok(AttributeValue::NotApplicable),
        _ => {}
    }

    let last = string_ops::logical_length(field).saturating_sub(1);
    let mut result = String::with_capacity(field.len() * 2);

    for (n, (position, lc)) in string_ops::logical_chars(field).enumerate() {
        match lc {
            "*" if n != 0 && n != last => {
                return Err(ParseErrorKind::InvalidEscaping {
                    attribute,
                    position,
                });
            }
            "*" | "?" => result.push_str(lc),
            _ if lc.starts_with(ESCAPE) || string_ops::is_alphanumeric(lc) => {
                result.push_str(lc);
            }
            _ => {
                result.push(ESCAPE);
                result.push_str(lc);
            }
        }
    }

    literal(&result, attribute, field)
}
