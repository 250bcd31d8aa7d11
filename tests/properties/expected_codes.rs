//! Property tests for expected-codes normalization.

use std::collections::BTreeSet;

use proptest::prelude::*;

use lbforge::domain::value_objects::ExpectedCodes;

fn status_code() -> impl Strategy<Value = u16> {
    100u16..=599
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the pattern lists the input codes ascending, without duplicates.
    #[test]
    fn property_pattern_is_sorted_and_deduplicated(
        codes in proptest::collection::vec(status_code(), 1..12),
        separator in prop_oneof![Just(","), Just(", "), Just(" , ")],
    ) {
        let input = codes
            .iter()
            .map(u16::to_string)
            .collect::<Vec<_>>()
            .join(separator);

        let pattern = ExpectedCodes::parse(&input).unwrap().to_pattern();

        let expected: Vec<String> = codes
            .iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(u16::to_string)
            .collect();
        let actual: Vec<&str> = pattern.split('|').collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: a range expands to every code it covers.
    #[test]
    fn property_range_expands_inclusively(low in status_code(), span in 0u16..20) {
        let high = (low + span).min(599);
        let parsed = ExpectedCodes::parse(&format!("{low}-{high}")).unwrap();

        prop_assert_eq!(parsed.codes().count(), usize::from(high - low) + 1);
        prop_assert_eq!(parsed.codes().next(), Some(low));
        prop_assert_eq!(parsed.codes().last(), Some(high));
    }

    /// PROPERTY: arbitrary input never panics.
    #[test]
    fn property_parse_never_panics(input in ".{0,40}") {
        let _ = ExpectedCodes::parse(&input);
    }

    /// PROPERTY: codes outside the HTTP status range are rejected.
    #[test]
    fn property_out_of_range_codes_rejected(code in prop_oneof![0u16..100, 600u16..1000]) {
        prop_assert!(ExpectedCodes::parse(&code.to_string()).is_err());
    }
}
