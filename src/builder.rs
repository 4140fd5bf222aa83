//! Typestate builder for constructing [`WellFormedName`] instances.
//!
//! The part must be chosen before the name can be built; every other
//! attribute is optional and defaults to ANY.

use std::marker::PhantomData;

use crate::attribute::{Attribute, Part};
use crate::error::ValueError;
use crate::value::AttributeValue;
use crate::wfn::WellFormedName;

/// Marker: part not chosen yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

/// Marker: part chosen, ready to build.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasPart;

/// A typestate builder for constructing [`WellFormedName`] instances.
///
/// `build()` is only available once the part has been chosen with
/// [`part`](WfnBuilder::part), [`try_part`](WfnBuilder::try_part) or
/// [`any_part`](WfnBuilder::any_part). Other attributes may be set in any
/// order; setting one twice keeps the last value.
///
/// # Examples
///
/// ```
/// use cpe_name::{Part, WfnBuilder};
///
/// let wfn = WfnBuilder::new()
///     .part(Part::Application)
///     .try_vendor("microsoft")?
///     .try_product("internet_explorer")?
///     .try_version("8\\.0\\.6001")?
///     .build();
///
/// assert_eq!(wfn.to_uri(), "cpe:/a:microsoft:internet_explorer:8.0.6001");
/// # Ok::<(), cpe_name::ValueError>(())
/// ```
///
/// # Compile-Time Safety
///
/// ```compile_fail
/// use cpe_name::WfnBuilder;
///
/// // Error: build() needs a part
/// let wfn = WfnBuilder::new().build();
/// ```
#[derive(Debug, Clone)]
pub struct WfnBuilder<State = Empty> {
    wfn: WellFormedName,
    _state: PhantomData<State>,
}

impl WfnBuilder<Empty> {
    /// Creates a new builder with every attribute ANY.
    #[must_use]
    pub fn new() -> Self {
        Self {
            wfn: WellFormedName::new(),
            _state: PhantomData,
        }
    }

    /// Sets the part and advances to the [`HasPart`] state.
    #[must_use]
    pub fn part(self, part: Part) -> WfnBuilder<HasPart> {
        self.with_part(Some(part))
    }

    /// Leaves the part ANY and advances to the [`HasPart`] state.
    #[must_use]
    pub fn any_part(self) -> WfnBuilder<HasPart> {
        self.with_part(None)
    }

    /// Parses and sets the part from its one-letter code.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidAttributeValue`] unless `s` is `a`, `o`
    /// or `h`.
    pub fn try_part(self, s: &str) -> Result<WfnBuilder<HasPart>, ValueError> {
        let part = s.parse::<Part>()?;
        Ok(self.part(part))
    }

    fn with_part(mut self, part: Option<Part>) -> WfnBuilder<HasPart> {
        self.wfn.set_part(part);
        WfnBuilder {
            wfn: self.wfn,
            _state: PhantomData,
        }
    }
}

impl Default for WfnBuilder<Empty> {
    fn default() -> Self {
        Self::new()
    }
}

impl WfnBuilder<HasPart> {
    /// Builds the final [`WellFormedName`].
    #[must_use]
    pub fn build(self) -> WellFormedName {
        self.wfn
    }
}

/// Setters available in every state.
impl<State> WfnBuilder<State> {
    /// Binds `value` to `attribute`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] under the rules of [`WellFormedName::set`].
    pub fn value(mut self, attribute: Attribute, value: AttributeValue) -> Result<Self, ValueError> {
        self.wfn.set(attribute, value)?;
        Ok(self)
    }

    /// Validates `s` as a literal and binds it to `attribute`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] if `s` is not a valid literal for `attribute`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpe_name::{Attribute, WfnBuilder};
    ///
    /// let wfn = WfnBuilder::new()
    ///     .any_part()
    ///     .try_literal(Attribute::TargetHw, "x64")?
    ///     .build();
    ///
    /// assert_eq!(wfn.to_uri(), "cpe:/:::::~~~~x64~");
    /// # Ok::<(), cpe_name::ValueError>(())
    /// ```
    pub fn try_literal(mut self, attribute: Attribute, s: &str) -> Result<Self, ValueError> {
        self.wfn.set_literal(attribute, s)?;
        Ok(self)
    }

    /// Marks `attribute` as not applicable.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidAttributeValue`] for [`Attribute::Part`].
    pub fn not_applicable(self, attribute: Attribute) -> Result<Self, ValueError> {
        self.value(attribute, AttributeValue::NotApplicable)
    }

    /// Sets the vendor from a WFN-form literal.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] if `s` is not a valid literal.
    pub fn try_vendor(self, s: &str) -> Result<Self, ValueError> {
        self.try_literal(Attribute::Vendor, s)
    }

    /// Sets the product from a WFN-form literal.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] if `s` is not a valid literal.
    pub fn try_product(self, s: &str) -> Result<Self, ValueError> {
        self.try_literal(Attribute::Product, s)
    }

    /// Sets the version from a WFN-form literal.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] if `s` is not a valid literal.
    pub fn try_version(self, s: &str) -> Result<Self, ValueError> {
        self.try_literal(Attribute::Version, s)
    }

    /// Sets the update from a WFN-form literal.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] if `s` is not a valid literal.
    pub fn try_update(self, s: &str) -> Result<Self, ValueError> {
        self.try_literal(Attribute::Update, s)
    }
}
