//! Property-based tests for request building and query encoding.

use proptest::prelude::*;
use uinames_core::{Request, RequestOption};

// Property: every amount in [1,500] builds and encodes as its decimal string
proptest! {
    #[test]
    fn amounts_in_range_encode_as_decimal(amount in 1u16..=500u16) {
        let request = Request::new([RequestOption::Amount(amount)]).expect("amount in range");

        let query = request.url().query().map(str::to_owned);
        prop_assert_eq!(query, Some(format!("amount={amount}")));
    }

    #[test]
    fn amounts_out_of_range_fail_with_fixed_message(
        amount in prop_oneof![Just(0u16), 501u16..=u16::MAX]
    ) {
        let err = Request::new([RequestOption::Amount(amount)]).expect_err("out of range");

        prop_assert_eq!(
            err.to_string(),
            "amount must be between 1 and 500 (inclusive)"
        );
    }

    #[test]
    fn failing_amount_position_is_irrelevant(position in 0usize..=2) {
        let mut options = vec![
            RequestOption::ExtraData,
            RequestOption::Region("Germany".to_string()),
        ];
        options.insert(position, RequestOption::Amount(501));

        let err = Request::new(options).expect_err("invalid amount");

        prop_assert_eq!(
            err.to_string(),
            "amount must be between 1 and 500 (inclusive)"
        );
    }
}

// Property: applying the same key twice keeps only the last value
proptest! {
    #[test]
    fn last_amount_wins(first in 1u16..=500u16, second in 1u16..=500u16) {
        let request = Request::new([
            RequestOption::Amount(first),
            RequestOption::Amount(second),
        ])
        .expect("amounts in range");

        let query = request.url().query().map(str::to_owned);
        prop_assert_eq!(query, Some(format!("amount={second}")));
    }
}

// Property: the encoded query re-parses to the same pairs, key-sorted
proptest! {
    #[test]
    fn query_round_trips_through_url(
        amount in 1u16..=500u16,
        maxlen in 1u32..=64u32,
        minlen in 1u32..=64u32,
        region in "[A-Za-z][A-Za-z ]{0,19}",
    ) {
        // Options given in scrambled order on purpose
        let request = Request::new([
            RequestOption::Region(region.clone()),
            RequestOption::MaximumLength(maxlen),
            RequestOption::MinimumLength(minlen),
            RequestOption::ExtraData,
            RequestOption::Amount(amount),
        ])
        .expect("valid options");

        let pairs: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        prop_assert_eq!(pairs, vec![
            ("amount".to_string(), amount.to_string()),
            ("ext".to_string(), String::new()),
            ("maxlen".to_string(), maxlen.to_string()),
            ("minlen".to_string(), minlen.to_string()),
            ("region".to_string(), region),
        ]);
    }
}
