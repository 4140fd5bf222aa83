//! Error types for CPE names.

use std::fmt;

use crate::attribute::Attribute;

/// Errors raised when a value is rejected by the well-formed name rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The value is not allowed for the attribute
    InvalidAttributeValue {
        /// The attribute being set, if known
        attribute: Option<Attribute>,
        /// The rejected value
        value: String,
        /// Reason for rejection
        reason: &'static str,
    },
    /// An unquoted wildcard is in a position where it is not allowed
    InvalidWildcardPlacement {
        /// The rejected value
        value: String,
        /// Byte position of the offending wildcard
        position: usize,
    },
    /// A special character is unquoted, or an escape is incomplete
    InvalidEscaping {
        /// The rejected value
        value: String,
        /// Byte position of the offending character
        position: usize,
    },
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAttributeValue {
                attribute: Some(attribute),
                value,
                reason,
            } => write!(f, "invalid value '{value}' for {attribute}: {reason}"),
            Self::InvalidAttributeValue {
                attribute: None,
                value,
                reason,
            } => write!(f, "invalid value '{value}': {reason}"),
            Self::InvalidWildcardPlacement { value, position } => {
                write!(
                    f,
                    "misplaced wildcard at position {position} in '{value}'; '*' may only begin or end a value"
                )
            }
            Self::InvalidEscaping { value, position } => {
                write!(
                    f,
                    "invalid escaping at position {position} in '{value}'; special characters must be quoted with '\\'"
                )
            }
        }
    }
}

impl std::error::Error for ValueError {}

/// Errors that can occur when unbinding a CPE name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to unbind
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(input: &str, kind: ParseErrorKind) -> Self {
        Self {
            input: input.to_string(),
            kind,
        }
    }

    /// Returns the specific error that occurred.
    #[must_use]
    pub const fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

/// Specific unbinding error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input failed the URI structural check
    MalformedUri {
        /// Why the input was rejected
        reason: &'static str,
    },
    /// Input failed the formatted string structural check
    MalformedFormattedString {
        /// Why the input was rejected
        reason: &'static str,
    },
    /// Formatted string did not split into exactly eleven fields
    WrongFieldCount {
        /// Number of fields required
        expected: usize,
        /// Number of fields found
        actual: usize,
    },
    /// Packed URI edition did not split into the expected sub-fields
    MalformedPackedEdition {
        /// Number of sub-fields found
        subfields: usize,
    },
    /// An unquoted special character outside a wildcard position
    InvalidEscaping {
        /// The field containing the character
        attribute: Attribute,
        /// Byte position of the character within the field
        position: usize,
    },
    /// The part field is not one of `a`, `o`, `h` or `*`
    InvalidPartValue {
        /// The value found
        value: String,
    },
    /// A field decoded cleanly but is not a valid attribute value
    InvalidValue {
        /// The field being decoded
        attribute: Attribute,
        /// The underlying value error
        error: ValueError,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to unbind CPE name '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::MalformedUri { reason } => write!(f, "malformed URI: {reason}"),
            ParseErrorKind::MalformedFormattedString { reason } => {
                write!(f, "malformed formatted string: {reason}")
            }
            ParseErrorKind::WrongFieldCount { expected, actual } => {
                write!(f, "expected {expected} fields, found {actual}")
            }
            ParseErrorKind::MalformedPackedEdition { subfields } => {
                write!(
                    f,
                    "packed edition has {subfields} sub-fields; expected '~edition~sw_edition~target_sw~target_hw~other'"
                )
            }
            ParseErrorKind::InvalidEscaping {
                attribute,
                position,
            } => {
                write!(
                    f,
                    "unquoted special character in {attribute} at position {position}"
                )
            }
            ParseErrorKind::InvalidPartValue { value } => {
                write!(f, "part must be one of 'a', 'o', 'h' or '*', found '{value}'")
            }
            ParseErrorKind::InvalidValue { attribute, error } => {
                write!(f, "invalid {attribute}: {error}")
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::InvalidValue { error, .. } => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn value_error_display_names_attribute() {
        let err = ValueError::InvalidAttributeValue {
            attribute: Some(Attribute::Part),
            value: "x".to_string(),
            reason: "part must be 'a', 'o' or 'h'",
        };
        assert_eq!(
            err.to_string(),
            "invalid value 'x' for part: part must be 'a', 'o' or 'h'"
        );
    }

    #[test]
    fn parse_error_display_includes_input() {
        let err = ParseError::new(
            "cpe:2.3:a",
            ParseErrorKind::WrongFieldCount {
                expected: 11,
                actual: 1,
            },
        );
        let msg = err.to_string();
        assert!(msg.contains("cpe:2.3:a"));
        assert!(msg.contains("expected 11 fields, found 1"));
    }

    #[test]
    fn invalid_value_exposes_source() {
        let err = ParseError::new(
            "cpe:/x",
            ParseErrorKind::InvalidValue {
                attribute: Attribute::Part,
                error: ValueError::InvalidWildcardPlacement {
                    value: "a*b".to_string(),
                    position: 1,
                },
            },
        );
        assert!(err.source().is_some());
        assert!(
            ParseError::new("cpe:", ParseErrorKind::MalformedUri { reason: "x" })
                .source()
                .is_none()
        );
    }
}
