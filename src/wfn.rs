//! The well-formed name data model.

use std::fmt;

use crate::attribute::{Attribute, Part};
use crate::error::ValueError;
use crate::value::{AttributeValue, Literal};

/// A CPE well-formed name: one value for each of the eleven attributes.
///
/// Attributes that are never set read as [`AttributeValue::Any`].
///
/// # Examples
///
/// ```
/// use cpe_name::{Attribute, AttributeValue, WellFormedName};
///
/// let mut wfn = WellFormedName::new();
/// wfn.set_literal(Attribute::Part, "a").unwrap();
/// wfn.set_literal(Attribute::Vendor, "microsoft").unwrap();
/// wfn.set(Attribute::Update, AttributeValue::NotApplicable).unwrap();
///
/// assert_eq!(wfn.vendor().as_literal().unwrap().as_str(), "microsoft");
/// assert!(wfn.get(Attribute::Language).is_any());
///
/// // part only accepts a, o or h
/// assert!(wfn.set_literal(Attribute::Part, "x").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct WellFormedName {
    part: AttributeValue,
    vendor: AttributeValue,
    product: AttributeValue,
    version: AttributeValue,
    update: AttributeValue,
    edition: AttributeValue,
    language: AttributeValue,
    sw_edition: AttributeValue,
    target_sw: AttributeValue,
    target_hw: AttributeValue,
    other: AttributeValue,
}

impl WellFormedName {
    /// Creates a name with every attribute ANY.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a name from all eleven values, validated as by [`WellFormedName::set`].
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] if any value is not allowed for its attribute.
    #[allow(clippy::too_many_arguments)]
    pub fn from_values(
        part: AttributeValue,
        vendor: AttributeValue,
        product: AttributeValue,
        version: AttributeValue,
        update: AttributeValue,
        edition: AttributeValue,
        language: AttributeValue,
        sw_edition: AttributeValue,
        target_sw: AttributeValue,
        target_hw: AttributeValue,
        other: AttributeValue,
    ) -> Result<Self, ValueError> {
        Self::check(Attribute::Part, &part)?;
        Ok(Self {
            part,
            vendor,
            product,
            version,
            update,
            edition,
            language,
            sw_edition,
            target_sw,
            target_hw,
            other,
        })
    }

    /// Returns the value bound to `attribute`.
    #[must_use]
    pub const fn get(&self, attribute: Attribute) -> &AttributeValue {
        match attribute {
            Attribute::Part => &self.part,
            Attribute::Vendor => &self.vendor,
            Attribute::Product => &self.product,
            Attribute::Version => &self.version,
            Attribute::Update => &self.update,
            Attribute::Edition => &self.edition,
            Attribute::Language => &self.language,
            Attribute::SwEdition => &self.sw_edition,
            Attribute::TargetSw => &self.target_sw,
            Attribute::TargetHw => &self.target_hw,
            Attribute::Other => &self.other,
        }
    }

    /// Binds `value` to `attribute`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidAttributeValue`] if `attribute` is
    /// [`Attribute::Part`] and `value` is NA or a literal other than `a`, `o`
    /// or `h`. The name is left unchanged on error.
    pub fn set(&mut self, attribute: Attribute, value: AttributeValue) -> Result<(), ValueError> {
        Self::check(attribute, &value)?;
        *self.slot_mut(attribute) = value;
        Ok(())
    }

    /// Validates `value` as a literal and binds it to `attribute`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] if `value` is not a valid literal or is not
    /// allowed for `attribute`.
    pub fn set_literal(&mut self, attribute: Attribute, value: &str) -> Result<(), ValueError> {
        let literal = Literal::parse(value).map_err(|e| with_attribute(e, attribute))?;
        self.set(attribute, AttributeValue::Literal(literal))
    }

    /// Binds the part; `None` leaves it ANY.
    pub(crate) fn set_part(&mut self, part: Option<Part>) {
        self.part = part.map_or(AttributeValue::Any, AttributeValue::from);
    }

    /// Returns the eleven bindings in attribute order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &AttributeValue)> {
        Attribute::ALL.into_iter().map(|a| (a, self.get(a)))
    }

    /// Returns the part value.
    #[must_use]
    pub const fn part(&self) -> &AttributeValue {
        &self.part
    }

    /// Returns the vendor value.
    #[must_use]
    pub const fn vendor(&self) -> &AttributeValue {
        &self.vendor
    }

    /// Returns the product value.
    #[must_use]
    pub const fn product(&self) -> &AttributeValue {
        &self.product
    }

    /// Returns the version value.
    #[must_use]
    pub const fn version(&self) -> &AttributeValue {
        &self.version
    }

    /// Returns the update value.
    #[must_use]
    pub const fn update(&self) -> &AttributeValue {
        &self.update
    }

    /// Returns the edition value.
    #[must_use]
    pub const fn edition(&self) -> &AttributeValue {
        &self.edition
    }

    /// Returns the language value.
    #[must_use]
    pub const fn language(&self) -> &AttributeValue {
        &self.language
    }

    /// Returns the sw_edition value.
    #[must_use]
    pub const fn sw_edition(&self) -> &AttributeValue {
        &self.sw_edition
    }

    /// Returns the target_sw value.
    #[must_use]
    pub const fn target_sw(&self) -> &AttributeValue {
        &self.target_sw
    }

    /// Returns the target_hw value.
    #[must_use]
    pub const fn target_hw(&self) -> &AttributeValue {
        &self.target_hw
    }

    /// Returns the other value.
    #[must_use]
    pub const fn other(&self) -> &AttributeValue {
        &self.other
    }

    /// Binds this name to a CPE 2.2 URI.
    #[must_use]
    pub fn to_uri(&self) -> String {
        crate::bind::bind_to_uri(self)
    }

    /// Binds this name to a CPE 2.3 formatted string.
    #[must_use]
    pub fn to_formatted_string(&self) -> String {
        crate::bind::bind_to_formatted_string(self)
    }

    const fn slot_mut(&mut self, attribute: Attribute) -> &mut AttributeValue {
        match attribute {
            Attribute::Part => &mut self.part,
            Attribute::Vendor => &mut self.vendor,
            Attribute::Product => &mut self.product,
            Attribute::Version => &mut self.version,
            Attribute::Update => &mut self.update,
            Attribute::Edition => &mut self.edition,
            Attribute::Language => &mut self.language,
            Attribute::SwEdition => &mut self.sw_edition,
            Attribute::TargetSw => &mut self.target_sw,
            Attribute::TargetHw => &mut self.target_hw,
            Attribute::Other => &mut self.other,
        }
    }

    fn check(attribute: Attribute, value: &AttributeValue) -> Result<(), ValueError> {
        if attribute != Attribute::Part {
            return Ok(());
        }
        match value {
            AttributeValue::Any => Ok(()),
            AttributeValue::NotApplicable => Err(ValueError::InvalidAttributeValue {
                attribute: Some(Attribute::Part),
                value: "NA".to_string(),
                reason: "part cannot be NA",
            }),
            AttributeValue::Literal(l) if matches!(l.as_str(), "a" | "o" | "h") => Ok(()),
            AttributeValue::Literal(l) => Err(ValueError::InvalidAttributeValue {
                attribute: Some(Attribute::Part),
                value: l.as_str().to_string(),
                reason: "part must be 'a', 'o' or 'h'",
            }),
        }
    }
}

/// Fills in the attribute on an error raised before the attribute was known.
pub(crate) fn with_attribute(error: ValueError, attribute: Attribute) -> ValueError {
    match error {
        ValueError::InvalidAttributeValue {
            attribute: None,
            value,
            reason,
        } => ValueError::InvalidAttributeValue {
            attribute: Some(attribute),
            value,
            reason,
        },
        other => other,
    }
}

impl fmt::Display for WellFormedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("wfn:[")?;
        for (i, (attribute, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{attribute}={value}")?;
        }
        f.write_str("]")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for WellFormedName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_formatted_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for WellFormedName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        crate::unbind::unbind_formatted_string(&s).map_err(serde::de::Error::custom)
    }
}
