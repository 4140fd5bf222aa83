//! The eleven attributes of a well-formed name.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// An attribute of a well-formed name.
///
/// The declaration order is the formatted string order. [`Attribute::URI_ORDER`]
/// lists the seven attributes the legacy URI binding carries directly.
///
/// # Examples
///
/// ```
/// use cpe_name::Attribute;
///
/// assert_eq!(Attribute::SwEdition.as_str(), "sw_edition");
/// assert_eq!("target_hw".parse::<Attribute>().unwrap(), Attribute::TargetHw);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Attribute {
    /// `a` (application), `o` (operating system) or `h` (hardware)
    Part,
    /// Organisation that made or supplied the product
    Vendor,
    /// Product name
    Product,
    /// Vendor-specific version string
    Version,
    /// Update, service pack or point release
    Update,
    /// Legacy edition
    Edition,
    /// User interface language tag
    Language,
    /// Market or audience specific edition
    SwEdition,
    /// Software computing environment the product runs in
    TargetSw,
    /// Instruction set architecture
    TargetHw,
    /// Anything else
    Other,
}

impl Attribute {
    /// All attributes in formatted string order.
    pub const ALL: [Self; 11] = [
        Self::Part,
        Self::Vendor,
        Self::Product,
        Self::Version,
        Self::Update,
        Self::Edition,
        Self::Language,
        Self::SwEdition,
        Self::TargetSw,
        Self::TargetHw,
        Self::Other,
    ];

    /// The attributes bound directly by the URI binding, in field order.
    ///
    /// The remaining four are packed into the edition field.
    pub const URI_ORDER: [Self; 7] = [
        Self::Part,
        Self::Vendor,
        Self::Product,
        Self::Version,
        Self::Update,
        Self::Edition,
        Self::Language,
    ];

    /// The attributes carried by a packed URI edition field, in packing order.
    pub const PACKED: [Self; 5] = [
        Self::Edition,
        Self::SwEdition,
        Self::TargetSw,
        Self::TargetHw,
        Self::Other,
    ];

    /// Returns the WFN attribute name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Part => "part",
            Self::Vendor => "vendor",
            Self::Product => "product",
            Self::Version => "version",
            Self::Update => "update",
            Self::Edition => "edition",
            Self::Language => "language",
            Self::SwEdition => "sw_edition",
            Self::TargetSw => "target_sw",
            Self::TargetHw => "target_hw",
            Self::Other => "other",
        }
    }

}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| ValueError::InvalidAttributeValue {
                attribute: None,
                value: s.to_string(),
                reason: "not a well-formed name attribute",
            })
    }
}

/// The class of platform a name describes.
///
/// # Examples
///
/// ```
/// use cpe_name::Part;
///
/// assert_eq!("o".parse::<Part>().unwrap(), Part::OperatingSystem);
/// assert_eq!(Part::Hardware.as_str(), "h");
/// assert!("x".parse::<Part>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// `a`
    Application,
    /// `o`
    OperatingSystem,
    /// `h`
    Hardware,
}

impl Part {
    /// Returns the one-letter code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Application => "a",
            Self::OperatingSystem => "o",
            Self::Hardware => "h",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Part {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" => Ok(Self::Application),
            "o" => Ok(Self::OperatingSystem),
            "h" => Ok(Self::Hardware),
            _ => Err(ValueError::InvalidAttributeValue {
                attribute: Some(Attribute::Part),
                value: s.to_string(),
                reason: "part must be 'a', 'o' or 'h'",
            }),
        }
    }
}
