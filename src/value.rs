//! Attribute values: the logical values ANY and NA, and quoted literal strings.

use std::fmt;
use std::str::FromStr;

use crate::attribute::Part;
use crate::error::ValueError;
use crate::string_ops::{self, ESCAPE};

/// A validated literal attribute value in WFN form.
///
/// Letters, digits and `_` appear bare; every other printable character is
/// quoted with a backslash. An unquoted `*` may begin and/or end the value and
/// matches any run of characters; an unquoted `?` may appear anywhere and
/// matches exactly one character.
///
/// # Examples
///
/// ```
/// use cpe_name::Literal;
///
/// let v = Literal::parse("8\\.0\\.6001").unwrap();
/// assert_eq!(v.as_str(), "8\\.0\\.6001");
/// assert_eq!(v.unquoted(), "8.0.6001");
/// assert!(!v.has_wildcards());
///
/// let w = Literal::parse("acme*").unwrap();
/// assert!(w.trailing_wildcard());
///
/// assert!(Literal::parse("ac*me").is_err());
/// assert!(Literal::parse("8.0").is_err()); // '.' must be quoted
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal(String);

impl Literal {
    /// Validates and normalises a WFN-form value.
    ///
    /// Quoting of letters, digits and `_` is dropped, so `foo\_bar` becomes
    /// `foo_bar`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] if:
    /// - The value is empty, or contains whitespace or non-printable characters
    /// - The value ends in a lone backslash or has unquoted punctuation
    /// - An unquoted `*` is embedded, or the value is made only of `*`
    pub fn parse(input: &str) -> Result<Self, ValueError> {
        if input.is_empty() {
            return Err(ValueError::InvalidAttributeValue {
                attribute: None,
                value: String::new(),
                reason: "value cannot be empty; use ANY",
            });
        }

        if !input.chars().all(|c| c.is_ascii_graphic()) {
            return Err(ValueError::InvalidAttributeValue {
                attribute: None,
                value: input.to_string(),
                reason: "value must be printable ASCII without whitespace",
            });
        }

        let last = string_ops::logical_length(input) - 1;
        let mut normalized = String::with_capacity(input.len());
        let mut only_stars = true;

        for (n, (position, lc)) in string_ops::logical_chars(input).enumerate() {
            only_stars &= lc == "*";
            match lc {
                "\\" => {
                    return Err(ValueError::InvalidEscaping {
                        value: input.to_string(),
                        position,
                    });
                }
                "*" if n != 0 && n != last => {
                    return Err(ValueError::InvalidWildcardPlacement {
                        value: input.to_string(),
                        position,
                    });
                }
                "*" | "?" => normalized.push_str(lc),
                _ if lc.starts_with(ESCAPE) => {
                    let quoted = &lc[1..];
                    if string_ops::is_alphanumeric(quoted) {
                        normalized.push_str(quoted);
                    } else {
                        normalized.push_str(lc);
                    }
                }
                _ if string_ops::is_alphanumeric(lc) => normalized.push_str(lc),
                _ => {
                    return Err(ValueError::InvalidEscaping {
                        value: input.to_string(),
                        position,
                    });
                }
            }
        }

        if only_stars {
            return Err(ValueError::InvalidWildcardPlacement {
                value: input.to_string(),
                position: 0,
            });
        }

        Ok(Self(normalized))
    }

    /// Builds a literal from a body and explicit leading/trailing `*` flags.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] under the same rules as [`Literal::parse`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cpe_name::Literal;
    ///
    /// let v = Literal::with_wildcards("9\\.", false, true).unwrap();
    /// assert_eq!(v.as_str(), "9\\.*");
    /// ```
    pub fn with_wildcards(body: &str, leading: bool, trailing: bool) -> Result<Self, ValueError> {
        let lead = if leading { "*" } else { "" };
        let trail = if trailing { "*" } else { "" };
        Self::parse(&string_ops::concat(&[lead, body, trail]))
    }

    /// Returns the value in WFN form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the value begins with an unquoted `*`.
    #[must_use]
    pub fn leading_wildcard(&self) -> bool {
        self.0.starts_with('*')
    }

    /// Returns true if the value ends with an unquoted `*`.
    #[must_use]
    pub fn trailing_wildcard(&self) -> bool {
        string_ops::logical_chars(&self.0).last().is_some_and(|(_, lc)| lc == "*")
    }

    /// Returns true if the value contains any unquoted `*` or `?`.
    #[must_use]
    pub fn has_wildcards(&self) -> bool {
        string_ops::has_wildcards(&self.0)
    }

    /// Returns the value with all quoting removed.
    ///
    /// Wildcards and quoted wildcard characters become indistinguishable, so
    /// this is for display only.
    #[must_use]
    pub fn unquoted(&self) -> String {
        string_ops::logical_chars(&self.0)
            .map(|(_, lc)| lc.strip_prefix(ESCAPE).unwrap_or(lc))
            .collect()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Literal {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Literal {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Part> for Literal {
    fn from(part: Part) -> Self {
        Self(part.as_str().to_string())
    }
}

/// The value bound to one attribute of a well-formed name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AttributeValue {
    /// Logical ANY: no constraint on the attribute
    #[default]
    Any,
    /// Logical NA: the attribute does not apply
    NotApplicable,
    /// A literal, possibly wildcarded, value
    Literal(Literal),
}

impl AttributeValue {
    /// Validates `s` as a literal value.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] if `s` is not a valid WFN literal.
    pub fn literal(s: &str) -> Result<Self, ValueError> {
        Literal::parse(s).map(Self::Literal)
    }

    /// Returns true for logical ANY.
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Returns true for logical NA.
    #[must_use]
    pub const fn is_not_applicable(&self) -> bool {
        matches!(self, Self::NotApplicable)
    }

    /// Returns the literal, if this is one.
    #[must_use]
    pub const fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(l) => Some(l),
            _ => None,
        }
    }
}

impl From<Part> for AttributeValue {
    fn from(part: Part) -> Self {
        Self::Literal(part.into())
    }
}

impl From<Literal> for AttributeValue {
    fn from(l: Literal) -> Self {
        Self::Literal(l)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("ANY"),
            Self::NotApplicable => f.write_str("NA"),
            Self::Literal(l) => write!(f, "\"{l}\""),
        }
    }
}
