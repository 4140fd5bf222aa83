//! Property-based tests for binding round trips and matching laws.
//!
//! These tests generate random well-formed names and check that binding and
//! unbinding agree, and that comparison obeys its algebraic laws.

use proptest::prelude::*;

use cpe_name::{
    Attribute, AttributeValue, CpeName, Literal, Relation, WellFormedName,
    bind_to_formatted_string, bind_to_uri, compare_attribute_values, compare_wfns, is_disjoint,
    is_equal, is_subset, is_superset, unbind_formatted_string, unbind_uri,
};

/// Strategies for generating valid well-formed names.
mod strategies {
    use super::*;

    /// Characters that appear bare in a literal, both cases
    const MIXED_CASE: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_";

    /// Characters that appear bare in a literal, lowercase only
    const LOWER_CASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789_";

    /// Printable punctuation, always quoted in WFN form
    const PUNCTUATION: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^`{|}~";

    /// Generate one logical character: bare, quoted, or an unquoted `?`
    fn logical_char(bare: &'static [u8]) -> impl Strategy<Value = String> {
        prop_oneof![
            6 => prop::sample::select(bare.to_vec()).prop_map(|c| (c as char).to_string()),
            3 => prop::sample::select(PUNCTUATION.to_vec()).prop_map(|c| format!("\\{}", c as char)),
            1 => Just("?".to_string()),
        ]
    }

    fn literal_from(bare: &'static [u8]) -> impl Strategy<Value = Literal> {
        (
            prop::collection::vec(logical_char(bare), 1..=8),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(chars, leading, trailing)| {
                Literal::with_wildcards(&chars.concat(), leading, trailing)
                    .expect("generated literal is valid")
            })
    }

    /// Generate a literal with letters of either case
    pub fn literal() -> impl Strategy<Value = Literal> {
        literal_from(MIXED_CASE)
    }

    fn value_from(bare: &'static [u8]) -> impl Strategy<Value = AttributeValue> {
        prop_oneof![
            2 => Just(AttributeValue::Any),
            1 => Just(AttributeValue::NotApplicable),
            4 => literal_from(bare).prop_map(AttributeValue::Literal),
        ]
    }

    /// Generate any attribute value
    pub fn value() -> impl Strategy<Value = AttributeValue> {
        value_from(MIXED_CASE)
    }

    fn part() -> impl Strategy<Value = AttributeValue> {
        prop_oneof![
            Just(AttributeValue::Any),
            prop::sample::select(vec!["a", "o", "h"])
                .prop_map(|p| AttributeValue::literal(p).expect("valid part")),
        ]
    }

    fn wfn_from(bare: &'static [u8]) -> impl Strategy<Value = WellFormedName> {
        (part(), prop::collection::vec(value_from(bare), 10)).prop_map(|(part, rest)| {
            let mut wfn = WellFormedName::new();
            wfn.set(Attribute::Part, part).expect("valid part");
            for (attribute, value) in Attribute::ALL[1..].iter().zip(rest) {
                wfn.set(*attribute, value).expect("non-part attributes accept any value");
            }
            wfn
        })
    }

    /// Generate a well-formed name
    pub fn wfn() -> impl Strategy<Value = WellFormedName> {
        wfn_from(MIXED_CASE)
    }

    /// Generate a well-formed name with no uppercase letters
    pub fn lowercase_wfn() -> impl Strategy<Value = WellFormedName> {
        wfn_from(LOWER_CASE)
    }
}

mod value_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn literal_revalidates(l in literal()) {
            let again = Literal::parse(l.as_str());
            prop_assert_eq!(again, Ok(l));
        }

        #[test]
        fn value_identity(v in value()) {
            prop_assert_eq!(compare_attribute_values(&v, &v), Relation::Equal);
        }

        #[test]
        fn value_symmetry(a in value(), b in value()) {
            prop_assert_eq!(
                compare_attribute_values(&a, &b),
                compare_attribute_values(&b, &a).inverse()
            );
        }

        #[test]
        fn any_absorbs_literals(l in literal()) {
            let v = AttributeValue::Literal(l);
            prop_assert_eq!(compare_attribute_values(&AttributeValue::Any, &v), Relation::Superset);
            prop_assert_eq!(compare_attribute_values(&v, &AttributeValue::Any), Relation::Subset);
        }

        #[test]
        fn na_is_exclusive(v in value()) {
            let na = AttributeValue::NotApplicable;
            let expected = if v.is_not_applicable() { Relation::Equal } else { Relation::Disjoint };
            prop_assert_eq!(compare_attribute_values(&na, &v), expected);
            prop_assert_eq!(compare_attribute_values(&v, &na), expected);
        }
    }
}

mod binding_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn formatted_string_roundtrip(w in wfn()) {
            let fs = bind_to_formatted_string(&w);
            let unbound = unbind_formatted_string(&fs);
            prop_assert!(unbound.is_ok(), "Failed to unbind: {}", fs);
            prop_assert_eq!(unbound.unwrap(), w);
        }

        #[test]
        fn uri_roundtrip(w in lowercase_wfn()) {
            let uri = bind_to_uri(&w);
            let unbound = unbind_uri(&uri);
            prop_assert!(unbound.is_ok(), "Failed to unbind: {}", uri);
            prop_assert_eq!(unbound.unwrap(), w);
        }

        #[test]
        fn facade_redisplays_input(w in wfn()) {
            let fs = bind_to_formatted_string(&w);
            let name = CpeName::parse(&fs).unwrap();
            prop_assert_eq!(name.to_string(), fs);
        }
    }
}

mod matching_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn name_identity(w in wfn()) {
            prop_assert_eq!(compare_wfns(&w, &w), Relation::Equal);
        }

        #[test]
        fn name_symmetry(a in wfn(), b in wfn()) {
            prop_assert_eq!(is_equal(&a, &b), is_equal(&b, &a));
            prop_assert_eq!(is_subset(&a, &b), is_superset(&b, &a));
            prop_assert_eq!(is_disjoint(&a, &b), is_disjoint(&b, &a));
        }

        #[test]
        fn blank_name_is_superset_of_literals(w in wfn()) {
            let blank = WellFormedName::new();
            let relation = compare_wfns(&blank, &w);
            if w.iter().any(|(_, v)| v.is_not_applicable()) {
                prop_assert_eq!(relation, Relation::Disjoint);
            } else {
                prop_assert!(is_superset(&blank, &w));
            }
        }
    }
}

/// Edge cases from the naming and matching examples.
mod examples {
    use super::*;

    #[test]
    fn formatted_string_example() {
        let wfn = unbind_formatted_string(
            "cpe:2.3:a:microsoft:internet_explorer:8.0.6001:beta:*:*:*:*:*:*",
        )
        .unwrap();
        let text = |a: Attribute| wfn.get(a).as_literal().map(Literal::unquoted);
        assert_eq!(text(Attribute::Part).as_deref(), Some("a"));
        assert_eq!(text(Attribute::Vendor).as_deref(), Some("microsoft"));
        assert_eq!(text(Attribute::Product).as_deref(), Some("internet_explorer"));
        assert_eq!(text(Attribute::Version).as_deref(), Some("8.0.6001"));
        assert_eq!(text(Attribute::Update).as_deref(), Some("beta"));
        for attribute in &Attribute::ALL[5..] {
            assert!(wfn.get(*attribute).is_any());
        }
    }

    #[test]
    fn version_subset_example() {
        let source = unbind_formatted_string("cpe:2.3:a:acme:product:1.0:*:*:*:*:*:*:*").unwrap();
        let target = unbind_formatted_string("cpe:2.3:a:acme:product:*:*:*:*:*:*:*:*").unwrap();
        assert_eq!(compare_wfns(&source, &target), Relation::Subset);
    }

    #[test]
    fn packed_edition_example() {
        let wfn = unbind_uri("cpe:/a:acme:product:1.0::~~sw1~~").unwrap();
        assert_eq!(wfn.sw_edition(), &AttributeValue::literal("sw1").unwrap());
        assert!(wfn.edition().is_any());
        assert!(wfn.target_sw().is_any());
        assert!(wfn.target_hw().is_any());
        assert!(wfn.other().is_any());
    }

    #[test]
    fn trailing_wildcard_survives_binding() {
        let mut wfn = WellFormedName::new();
        wfn.set_literal(Attribute::Vendor, "acme*").unwrap();
        let fs = bind_to_formatted_string(&wfn);
        assert_eq!(fs, "cpe:2.3:*:acme*:*:*:*:*:*:*:*:*:*");
        assert_eq!(unbind_formatted_string(&fs).unwrap(), wfn);
        assert!(wfn.set_literal(Attribute::Vendor, "ac*me").is_err());
    }
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #[test]
        fn wfn_json_roundtrip(w in wfn()) {
            let json = serde_json::to_string(&w).unwrap();
            let back: WellFormedName = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, w);
        }
    }

    #[test]
    fn cpe_name_serializes_in_parsed_binding() {
        let name = CpeName::parse("cpe:/a:acme:product:1.0").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"cpe:/a:acme:product:1.0\"");
        let back: CpeName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }

    #[test]
    fn relation_and_attribute_names() {
        assert_eq!(serde_json::to_string(&Relation::Superset).unwrap(), "\"superset\"");
        assert_eq!(serde_json::to_string(&Attribute::TargetSw).unwrap(), "\"target_sw\"");
    }
}
