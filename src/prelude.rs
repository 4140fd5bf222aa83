//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use cpe_name::prelude::*;
//!
//! let name = CpeName::parse("cpe:2.3:o:linux:linux_kernel:*:*:*:*:*:*:*:*").unwrap();
//! assert_eq!(name.wfn().part(), &AttributeValue::from(Part::OperatingSystem));
//! ```
//!
//! Builder state markers (`Empty`, `HasPart`) and the per-value binding
//! helpers are left out.

pub use crate::{
    // Core types
    Attribute, AttributeValue, Binding, CpeName, Literal, Part, Relation, WellFormedName,
    // Builder
    WfnBuilder,
    // Binding and unbinding
    bind_to_formatted_string, bind_to_uri, unbind_formatted_string, unbind_uri,
    // Matching
    compare_attribute_values, compare_attributes, compare_wfns, is_disjoint, is_equal, is_subset,
    is_superset,
    // Errors
    ParseError, ParseErrorKind, ValueError,
    // Constants
    FS_PREFIX, URI_PREFIX,
};
