//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{
    Attribute, AttributeValue, Literal, Relation, WellFormedName, compare_attribute_values,
    compare_wfns, string_ops,
};

/// Characters that appear bare in a literal
const BARE_CHARS: &[u8] = b"abcxyz019_";

/// Punctuation that appears quoted in a literal
const QUOTED_CHARS: &[u8] = b".-:~*?\\$";

/// Generate one logical character of a literal body, bare or quoted
fn arbitrary_logical_char(out: &mut String) {
    if kani::any() {
        let idx: usize = kani::any();
        out.push(BARE_CHARS[idx % BARE_CHARS.len()] as char);
    } else {
        let idx: usize = kani::any();
        out.push('\\');
        out.push(QUOTED_CHARS[idx % QUOTED_CHARS.len()] as char);
    }
}

impl kani::Arbitrary for Literal {
    fn any() -> Self {
        let len: usize = kani::any();
        kani::assume(len >= 1 && len <= 3);

        let mut body = String::new();
        for _ in 0..len {
            if kani::any() {
                body.push('?');
            } else {
                arbitrary_logical_char(&mut body);
            }
        }

        Literal::with_wildcards(&body, kani::any(), kani::any()).expect("valid by construction")
    }
}

impl kani::Arbitrary for AttributeValue {
    fn any() -> Self {
        match kani::any::<u8>() % 3 {
            0 => AttributeValue::Any,
            1 => AttributeValue::NotApplicable,
            _ => AttributeValue::Literal(kani::any()),
        }
    }
}

/// Proof: logical length never exceeds byte length
#[kani::proof]
#[kani::unwind(8)]
fn proof_logical_length_bounded() {
    let literal: Literal = kani::any();
    let s = literal.as_str();
    assert!(string_ops::logical_length(s) <= s.len());
}

/// Proof: reversing twice is the identity on literals
#[kani::proof]
#[kani::unwind(8)]
fn proof_reverse_involution() {
    let literal: Literal = kani::any();
    let s = literal.as_str();
    assert_eq!(string_ops::reverse(&string_ops::reverse(s)), s);
}

/// Proof: a value compares EQUAL to itself
#[kani::proof]
#[kani::unwind(8)]
fn proof_attribute_identity() {
    let v: AttributeValue = kani::any();
    assert_eq!(compare_attribute_values(&v, &v), Relation::Equal);
}

/// Proof: swapping source and target inverts the relation
#[kani::proof]
#[kani::unwind(8)]
fn proof_attribute_symmetry() {
    let a: AttributeValue = kani::any();
    let b: AttributeValue = kani::any();
    assert_eq!(
        compare_attribute_values(&a, &b),
        compare_attribute_values(&b, &a).inverse()
    );
}

/// Proof: NA is disjoint from every other value
#[kani::proof]
#[kani::unwind(8)]
fn proof_na_exclusive() {
    let v: AttributeValue = kani::any();
    kani::assume(!v.is_not_applicable());
    assert_eq!(
        compare_attribute_values(&AttributeValue::NotApplicable, &v),
        Relation::Disjoint
    );
}

/// Proof: a name with one literal attribute is a SUBSET of the blank name
#[kani::proof]
#[kani::unwind(12)]
fn proof_literal_name_subset_of_blank() {
    let literal: Literal = kani::any();
    let mut wfn = WellFormedName::new();
    wfn.set(Attribute::Vendor, AttributeValue::Literal(literal))
        .expect("vendor accepts any literal");
    assert_eq!(compare_wfns(&wfn, &WellFormedName::new()), Relation::Subset);
}
