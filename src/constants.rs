//! Constants for CPE binding and unbinding.

/// Prefix of a CPE 2.2 URI binding.
pub const URI_PREFIX: &str = "cpe:/";

/// Prefix of a CPE 2.3 formatted string binding.
pub const FS_PREFIX: &str = "cpe:2.3:";

/// Number of attributes in a well-formed name.
pub const ATTRIBUTE_COUNT: usize = 11;

/// Maximum number of colon-delimited fields in a URI binding.
pub const URI_FIELD_COUNT: usize = 7;

/// Number of fields after the prefix in a formatted string binding.
pub const FS_FIELD_COUNT: usize = ATTRIBUTE_COUNT;

/// Number of sub-fields in a fully packed URI edition component.
pub const PACKED_EDITION_FIELDS: usize = 5;

/// Fewest sub-fields accepted when unpacking an edition (trailing `other` omitted).
pub const MIN_PACKED_EDITION_FIELDS: usize = 4;

/// Separator between packed edition sub-fields.
pub const PACKED_EDITION_SEPARATOR: char = '~';
