//! A parsed CPE name that remembers the syntax it came from.

use std::fmt;
use std::str::FromStr;

use crate::constants::{FS_PREFIX, URI_PREFIX};
use crate::error::{ParseError, ParseErrorKind};
use crate::matching::{self, Relation};
use crate::unbind;
use crate::wfn::WellFormedName;

/// The textual syntax a name is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    /// CPE 2.2 URI, `cpe:/...`
    Uri,
    /// CPE 2.3 formatted string, `cpe:2.3:...`
    FormattedString,
}

/// A CPE name in either binding.
///
/// Parsing picks the unbinder from the prefix. The name displays in the
/// binding it was parsed from.
///
/// # Examples
///
/// ```
/// use cpe_name::{Binding, CpeName};
///
/// let name = CpeName::parse("cpe:/a:microsoft:internet_explorer:8.0.6001:beta").unwrap();
/// assert_eq!(name.binding(), Binding::Uri);
/// assert_eq!(
///     name.to_formatted_string(),
///     "cpe:2.3:a:microsoft:internet_explorer:8.0.6001:beta:*:*:*:*:*:*"
/// );
/// assert_eq!(name.to_string(), "cpe:/a:microsoft:internet_explorer:8.0.6001:beta");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CpeName {
    wfn: WellFormedName,
    binding: Binding,
}

fn has_prefix(input: &str, prefix: &str) -> bool {
    input
        .get(..prefix.len())
        .is_some_and(|p| p.eq_ignore_ascii_case(prefix))
}

impl CpeName {
    /// Parses a URI or formatted string.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the input does not unbind. Input with
    /// neither prefix fails with [`ParseErrorKind::MalformedFormattedString`].
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if has_prefix(input, FS_PREFIX) {
            let wfn = unbind::unbind_formatted_string(input)?;
            Ok(Self {
                wfn,
                binding: Binding::FormattedString,
            })
        } else if has_prefix(input, URI_PREFIX) {
            let wfn = unbind::unbind_uri(input)?;
            Ok(Self {
                wfn,
                binding: Binding::Uri,
            })
        } else {
            Err(ParseError::new(
                input,
                ParseErrorKind::MalformedFormattedString {
                    reason: "name must start with 'cpe:2.3:' or 'cpe:/'",
                },
            ))
        }
    }

    /// Returns the well-formed name.
    #[must_use]
    pub const fn wfn(&self) -> &WellFormedName {
        &self.wfn
    }

    /// Consumes the name and returns the well-formed name.
    #[must_use]
    pub fn into_wfn(self) -> WellFormedName {
        self.wfn
    }

    /// Returns the binding the name was parsed from.
    #[must_use]
    pub const fn binding(&self) -> Binding {
        self.binding
    }

    /// Binds the name to a formatted string.
    #[must_use]
    pub fn to_formatted_string(&self) -> String {
        self.wfn.to_formatted_string()
    }

    /// Binds the name to a URI.
    #[must_use]
    pub fn to_uri(&self) -> String {
        self.wfn.to_uri()
    }

    /// Compares this name, as source, with `target`.
    #[must_use]
    pub fn compare(&self, target: &Self) -> Relation {
        matching::compare_wfns(&self.wfn, &target.wfn)
    }
}

impl fmt::Display for CpeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.binding {
            Binding::Uri => f.write_str(&self.to_uri()),
            Binding::FormattedString => f.write_str(&self.to_formatted_string()),
        }
    }
}

impl FromStr for CpeName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for CpeName {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<WellFormedName> for CpeName {
    fn from(wfn: WellFormedName) -> Self {
        Self {
            wfn,
            binding: Binding::FormattedString,
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CpeName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CpeName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
