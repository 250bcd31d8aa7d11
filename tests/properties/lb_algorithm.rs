//! Property tests for the balancing-algorithm table.

use proptest::prelude::*;

use lbforge::domain::services::transform_pool;
use lbforge::{LbError, Pool};

const TABLE: [(&str, &str); 3] = [
    ("ROUND_ROBIN", "roundrobin"),
    ("LEAST_CONNECTIONS", "leastconn"),
    ("SOURCE_IP", "source"),
];

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every table entry maps to its HAProxy keyword, whatever the case.
    #[test]
    fn property_known_algorithms_map_to_balance_keyword(
        index in 0usize..TABLE.len(),
        lowercase in any::<bool>(),
    ) {
        let (name, keyword) = TABLE[index];
        let name = if lowercase { name.to_lowercase() } else { name.to_string() };

        let context = transform_pool(&Pool::new("pool-1", "TCP", name)).unwrap();
        prop_assert_eq!(context.lb_algorithm, keyword);
    }

    /// PROPERTY: anything outside the table is a mapping error.
    #[test]
    fn property_unknown_algorithms_are_rejected(name in "[A-Z_]{1,20}") {
        prop_assume!(!TABLE.iter().any(|(known, _)| *known == name));

        let err = transform_pool(&Pool::new("pool-1", "TCP", name.clone())).unwrap_err();
        prop_assert!(
            matches!(err, LbError::Mapping { field: "lb_algorithm", ref value } if *value == name),
            "unexpected error {err:?}"
        );
    }
}
