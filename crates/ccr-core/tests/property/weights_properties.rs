use ccr_core::weights::{Factor, FactorWeights, MasterWeight};
use proptest::prelude::*;

fn arb_factor() -> impl Strategy<Value = Factor> {
    prop_oneof![
        Just(Factor::Bias),
        Just(Factor::Fec),
        Just(Factor::Fire),
        Just(Factor::Dei),
    ]
}

fn arb_weights() -> impl Strategy<Value = FactorWeights> {
    (0.0f64..10.0, 0.0f64..10.0, 0.0f64..10.0, 0.001f64..10.0)
        .prop_map(|(b, f, fi, d)| FactorWeights::new(b, f, fi, d))
}

proptest! {
    #[test]
    fn normalized_sums_to_one(w in arb_weights()) {
        let n = w.normalized();
        prop_assert!((n.sum() - 1.0).abs() < 1e-9);
        prop_assert!(n.validate().is_ok());
    }

    #[test]
    fn normalized_preserves_ratios(w in arb_weights()) {
        let n = w.normalized();
        let sum = w.sum();
        for factor in Factor::ALL {
            prop_assert!((n.get(factor) * sum - w.get(factor)).abs() < 1e-9);
        }
    }

    #[test]
    fn with_weight_keeps_unit_sum(w in arb_weights(), factor in arb_factor(), value in 0.0f64..5.0) {
        let next = w.normalized().with_weight(factor, value);
        prop_assert!((next.sum() - 1.0).abs() < 1e-9);
        prop_assert!(next.iter().all(|(_, v)| v >= 0.0));
    }

    #[test]
    fn master_weight_always_in_unit_interval(value in proptest::num::f64::ANY) {
        let m = MasterWeight::new(value).value();
        prop_assert!((0.0..=1.0).contains(&m));
    }
}
