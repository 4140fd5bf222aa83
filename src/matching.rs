//! Name matching: set relations between well-formed names.
//!
//! Every attribute of the source is compared with the same attribute of the
//! target, and the eleven outcomes are combined into one [`Relation`].
//!
//! | source \ target | ANY      | NA       | literal         |
//! |-----------------|----------|----------|-----------------|
//! | ANY             | EQUAL    | DISJOINT | SUPERSET        |
//! | NA              | DISJOINT | EQUAL    | DISJOINT        |
//! | literal         | SUBSET   | DISJOINT | see below       |
//!
//! Two literals are compared case-insensitively, by logical character. A
//! wildcarded literal on one side is matched as a pattern against the other.
//! When both sides carry wildcards the result is UNDEFINED unless one
//! pattern provably covers the other.

use std::fmt;

use tracing::trace;

use crate::attribute::Attribute;
use crate::string_ops::{self, ESCAPE};
use crate::value::{AttributeValue, Literal};
use crate::wfn::WellFormedName;

/// The set relation between a source and a target.
///
/// `Subset` means every platform the source names is also named by the
/// target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Relation {
    /// Source and target name the same set
    Equal,
    /// Source is strictly more specific than target
    Subset,
    /// Source is strictly more general than target
    Superset,
    /// Source and target share nothing
    Disjoint,
    /// The relation cannot be resolved
    Undefined,
}

impl Relation {
    /// Returns the relation with source and target swapped.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Subset => Self::Superset,
            Self::Superset => Self::Subset,
            other => other,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Equal => "EQUAL",
            Self::Subset => "SUBSET",
            Self::Superset => "SUPERSET",
            Self::Disjoint => "DISJOINT",
            Self::Undefined => "UNDEFINED",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Char(char),
    One,
    Many,
}

fn tokenize(literal: &Literal) -> Vec<Token> {
    string_ops::logical_chars(literal.as_str())
        .map(|(_, lc)| match lc {
            "*" => Token::Many,
            "?" => Token::One,
            _ => {
                let c = lc
                    .strip_prefix(ESCAPE)
                    .unwrap_or(lc)
                    .chars()
                    .next()
                    .unwrap_or_default();
                Token::Char(c.to_ascii_lowercase())
            }
        })
        .collect()
}

/// Returns true if `pattern` covers every string `text` can denote.
///
/// A `?` in the pattern consumes one character or one `?` of the text, a `*`
/// consumes any run including wildcards.
fn covers(pattern: &[Token], text: &[Token]) -> bool {
    let mut prev = vec![false; text.len() + 1];
    prev[0] = true;
    for p in pattern {
        let mut cur = vec![false; text.len() + 1];
        cur[0] = *p == Token::Many && prev[0];
        for j in 1..=text.len() {
            let t = text[j - 1];
            cur[j] = match *p {
                Token::Many => prev[j] || cur[j - 1],
                Token::One => prev[j - 1] && t != Token::Many,
                Token::Char(c) => prev[j - 1] && t == Token::Char(c),
            };
        }
        prev = cur;
    }
    prev[text.len()]
}

fn compare_literals(source: &Literal, target: &Literal) -> Relation {
    let s = tokenize(source);
    let t = tokenize(target);
    if s == t {
        return Relation::Equal;
    }

    match (source.has_wildcards(), target.has_wildcards()) {
        (false, false) => Relation::Disjoint,
        (false, true) if covers(&t, &s) => Relation::Subset,
        (true, false) if covers(&s, &t) => Relation::Superset,
        (false, true) | (true, false) => Relation::Disjoint,
        (true, true) => match (covers(&t, &s), covers(&s, &t)) {
            (true, true) => Relation::Equal,
            (true, false) => Relation::Subset,
            (false, true) => Relation::Superset,
            (false, false) => Relation::Undefined,
        },
    }
}

/// Compares one source value with one target value.
///
/// # Examples
///
/// ```
/// use cpe_name::{compare_attribute_values, AttributeValue, Relation};
///
/// let any = AttributeValue::Any;
/// let v = AttributeValue::literal("1\\.0").unwrap();
/// let pattern = AttributeValue::literal("1\\.*").unwrap();
///
/// assert_eq!(compare_attribute_values(&v, &any), Relation::Subset);
/// assert_eq!(compare_attribute_values(&pattern, &v), Relation::Superset);
/// assert_eq!(
///     compare_attribute_values(&AttributeValue::NotApplicable, &any),
///     Relation::Disjoint
/// );
/// ```
#[must_use]
pub fn compare_attribute_values(source: &AttributeValue, target: &AttributeValue) -> Relation {
    match (source, target) {
        (AttributeValue::Any, AttributeValue::Any)
        | (AttributeValue::NotApplicable, AttributeValue::NotApplicable) => Relation::Equal,
        (AttributeValue::NotApplicable, _) | (_, AttributeValue::NotApplicable) => {
            Relation::Disjoint
        }
        (AttributeValue::Any, AttributeValue::Literal(_)) => Relation::Superset,
        (AttributeValue::Literal(_), AttributeValue::Any) => Relation::Subset,
        (AttributeValue::Literal(s), AttributeValue::Literal(t)) => compare_literals(s, t),
    }
}

/// Compares every attribute of `source` with the same attribute of `target`.
#[must_use]
pub fn compare_attributes(
    source: &WellFormedName,
    target: &WellFormedName,
) -> [(Attribute, Relation); 11] {
    Attribute::ALL.map(|a| (a, compare_attribute_values(source.get(a), target.get(a))))
}

/// Combines per-attribute relations into one.
fn combine(relations: impl IntoIterator<Item = Relation>) -> Relation {
    let mut subset = false;
    let mut superset = false;
    let mut undefined = false;
    for relation in relations {
        match relation {
            Relation::Disjoint => return Relation::Disjoint,
            Relation::Undefined => undefined = true,
            Relation::Subset => subset = true,
            Relation::Superset => superset = true,
            Relation::Equal => {}
        }
    }
    match (undefined, subset, superset) {
        (true, _, _) | (false, true, true) => Relation::Undefined,
        (false, true, false) => Relation::Subset,
        (false, false, true) => Relation::Superset,
        (false, false, false) => Relation::Equal,
    }
}

/// Compares two names.
///
/// Any DISJOINT attribute makes the names DISJOINT. Otherwise an UNDEFINED
/// attribute, or a mix of SUBSET and SUPERSET, gives UNDEFINED.
///
/// # Examples
///
/// ```
/// use cpe_name::{compare_wfns, unbind_formatted_string, Relation};
///
/// let source = unbind_formatted_string("cpe:2.3:a:acme:product:1.0:*:*:*:*:*:*:*").unwrap();
/// let target = unbind_formatted_string("cpe:2.3:a:acme:product:*:*:*:*:*:*:*:*").unwrap();
///
/// assert_eq!(compare_wfns(&source, &target), Relation::Subset);
/// assert_eq!(compare_wfns(&target, &source), Relation::Superset);
/// ```
#[must_use]
pub fn compare_wfns(source: &WellFormedName, target: &WellFormedName) -> Relation {
    let relation = combine(compare_attributes(source, target).map(|(_, r)| r));
    trace!(%source, %target, %relation, "compared names");
    relation
}

/// Returns true if the names are EQUAL.
#[must_use]
pub fn is_equal(source: &WellFormedName, target: &WellFormedName) -> bool {
    compare_wfns(source, target) == Relation::Equal
}

/// Returns true if the source is a SUBSET of, or EQUAL to, the target.
#[must_use]
pub fn is_subset(source: &WellFormedName, target: &WellFormedName) -> bool {
    matches!(
        compare_wfns(source, target),
        Relation::Subset | Relation::Equal
    )
}

/// Returns true if the source is a SUPERSET of, or EQUAL to, the target.
#[must_use]
pub fn is_superset(source: &WellFormedName, target: &WellFormedName) -> bool {
    matches!(
        compare_wfns(source, target),
        Relation::Superset | Relation::Equal
    )
}

/// Returns true if the names are DISJOINT.
#[must_use]
pub fn is_disjoint(source: &WellFormedName, target: &WellFormedName) -> bool {
    compare_wfns(source, target) == Relation::Disjoint
}
