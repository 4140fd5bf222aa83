//! Packing of the four extended attributes into the URI edition field.
//!
//! A CPE 2.2 URI has no slots for sw_edition, target_sw, target_hw or other.
//! When any of them is set, the edition field carries all five values as
//! `~edition~sw_edition~target_sw~target_hw~other`.

use crate::constants::{MIN_PACKED_EDITION_FIELDS, PACKED_EDITION_FIELDS, PACKED_EDITION_SEPARATOR};

/// Returns true if a bound edition field is in packed form.
pub(crate) fn is_packed(field: &str) -> bool {
    field.starts_with(PACKED_EDITION_SEPARATOR)
}

/// Packs bound URI fields for edition and the four extended attributes.
///
/// Returns `edition` unchanged when all four extended fields are blank.
pub(crate) fn pack(edition: &str, extended: [&str; 4]) -> String {
    if extended.iter().all(|f| f.is_empty()) {
        return edition.to_string();
    }
    let mut packed = String::new();
    for field in std::iter::once(edition).chain(extended) {
        packed.push(PACKED_EDITION_SEPARATOR);
        packed.push_str(field);
    }
    packed
}

/// Splits a packed edition field into its five bound sub-fields.
///
/// A missing trailing `other` sub-field reads as blank.
///
/// # Errors
///
/// Returns the number of sub-fields found when it is not four or five.
pub(crate) fn unpack(field: &str) -> Result<[&str; PACKED_EDITION_FIELDS], usize> {
    let body = field.strip_prefix(PACKED_EDITION_SEPARATOR).unwrap_or(field);
    let parts: Vec<&str> = body.split(PACKED_EDITION_SEPARATOR).collect();
    if !(MIN_PACKED_EDITION_FIELDS..=PACKED_EDITION_FIELDS).contains(&parts.len()) {
        return Err(parts.len());
    }
    let mut fields = [""; PACKED_EDITION_FIELDS];
    for (slot, part) in fields.iter_mut().zip(parts) {
        *slot = part;
    }
    Ok(fields)
}
