//! Property tests for `--deployments` filter parsing.

use proptest::prelude::*;

use berth::presentation::cli::parse_deployment_filter;
use berth::PurgeOptions;

fn name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,12}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: names survive arbitrary spacing and empty entries.
    #[test]
    fn property_filter_round_trips_names(
        names in proptest::collection::vec(name(), 0..6),
        pad in " {0,3}",
    ) {
        let joined = names
            .iter()
            .map(|n| format!("{pad}{n}{pad}"))
            .collect::<Vec<_>>()
            .join(",,");
        prop_assert_eq!(parse_deployment_filter(&joined), names);
    }

    /// PROPERTY: a parsed filter selects exactly the listed names.
    #[test]
    fn property_filter_selects_listed_names(
        listed in proptest::collection::vec(name(), 1..6),
        other in name(),
    ) {
        let options = PurgeOptions::only(parse_deployment_filter(&listed.join(",")));
        for n in &listed {
            prop_assert!(options.selects(n));
        }
        prop_assert_eq!(options.selects(&other), listed.contains(&other));
    }

    /// PROPERTY: parsing never panics.
    #[test]
    fn property_filter_never_panics(input in "(?s).{0,128}") {
        let _ = parse_deployment_filter(&input);
    }
}
