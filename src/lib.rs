//! Naming and name matching for the Common Platform Enumeration (CPE).
//!
//! This crate implements the CPE 2.3 well-formed name (WFN) data model, its
//! two textual bindings, and the name matching algorithm.
//!
//! # Overview
//!
//! A WFN assigns a value to each of eleven attributes. A value is ANY, NA, or
//! a literal string that may begin or end with `*` and contain `?`. A WFN is
//! written in one of two bindings:
//!
//! ```text
//! cpe:/<part>:<vendor>:<product>:<version>:<update>:<edition>:<language>
//! cpe:2.3:<part>:<vendor>:<product>:<version>:<update>:<edition>:<language>:<sw_edition>:<target_sw>:<target_hw>:<other>
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use cpe_name::{CpeName, Relation};
//!
//! let installed = CpeName::parse("cpe:/a:adobe:reader:9.3.2").unwrap();
//! let affected = CpeName::parse("cpe:2.3:a:adobe:reader:9.*:*:*:*:*:*:*:*").unwrap();
//!
//! assert_eq!(installed.compare(&affected), Relation::Subset);
//! assert_eq!(
//!     installed.to_formatted_string(),
//!     "cpe:2.3:a:adobe:reader:9.3.2:*:*:*:*:*:*:*"
//! );
//! ```
//!
//! # Building Names
//!
//! Values are given in WFN form, where every character other than letters,
//! digits and `_` is quoted with a backslash:
//!
//! ```rust
//! use cpe_name::{Part, WfnBuilder};
//!
//! let wfn = WfnBuilder::new()
//!     .part(Part::Application)
//!     .try_vendor("hp")?
//!     .try_product("insight_diagnostics")?
//!     .try_version("7\\.4\\.0\\.1570")?
//!     .try_literal(cpe_name::Attribute::TargetHw, "x64")?
//!     .build();
//!
//! assert_eq!(wfn.to_uri(), "cpe:/a:hp:insight_diagnostics:7.4.0.1570::~~~~x64~");
//! # Ok::<(), cpe_name::ValueError>(())
//! ```
//!
//! # Matching
//!
//! [`compare_wfns`] returns a [`Relation`]: EQUAL, SUBSET, SUPERSET,
//! DISJOINT or UNDEFINED. UNDEFINED is a result, not an error.
//!
//! # Logging
//!
//! Unbinding failures are reported as `tracing` debug events, successful
//! binding, unbinding and matching as trace events. No subscriber is
//! installed.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`WellFormedName`] and
//!   [`CpeName`] as strings, and for [`Attribute`] and [`Relation`].

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod attribute;
mod bind;
mod builder;
mod constants;
mod error;
#[cfg(kani)]
mod kani_impls;
mod matching;
mod name;
mod packed;
pub mod prelude;
pub mod string_ops;
mod unbind;
mod value;
mod wfn;

pub use attribute::{Attribute, Part};
pub use bind::{bind_to_formatted_string, bind_to_uri, bind_value_for_fs, bind_value_for_uri};
pub use builder::{Empty, HasPart, WfnBuilder};
pub use constants::{
    ATTRIBUTE_COUNT, FS_FIELD_COUNT, FS_PREFIX, MIN_PACKED_EDITION_FIELDS, PACKED_EDITION_FIELDS,
    PACKED_EDITION_SEPARATOR, URI_FIELD_COUNT, URI_PREFIX,
};
pub use error::{ParseError, ParseErrorKind, ValueError};
pub use matching::{
    Relation, compare_attribute_values, compare_attributes, compare_wfns, is_disjoint, is_equal,
    is_subset, is_superset,
};
pub use name::{Binding, CpeName};
pub use unbind::{unbind_formatted_string, unbind_uri};
pub use value::{AttributeValue, Literal};
pub use wfn::WellFormedName;
