use std::cmp::Ordering;

use ccr_core::school::{School, SchoolRecord};
use ccr_core::weights::{Factor, FactorWeights, MasterWeight};
use ccr_ranking::{
    alignment_score, compare_names, composite_score, factors, quality, rank_schools,
};
use proptest::prelude::*;

fn arb_record() -> impl Strategy<Value = SchoolRecord> {
    (
        prop_oneof![1i32..=200, Just(999)],
        proptest::option::of(-120.0f64..120.0),
        proptest::option::of(0.0f64..=100.0),
        proptest::option::of(-130.0f64..130.0),
        proptest::option::of(-10.0f64..120.0),
        proptest::option::of(0u32..60),
        "[a-eA-E é]{1,4}",
    )
        .prop_map(|(rank, bias, rep, fec_bias, fire, dei, name)| {
            let mut r = SchoolRecord::new(format!("{name}-{rank}"), rank, name);
            r.bias_score = bias;
            r.fec_rep_pct = rep;
            r.fec_bias_score = fec_bias;
            r.fire_score = fire;
            r.dei_staff = dei;
            r
        })
}

fn arb_schools() -> impl Strategy<Value = Vec<School>> {
    proptest::collection::vec(arb_record().prop_map(School::from), 0..40)
}

fn arb_weights() -> impl Strategy<Value = FactorWeights> {
    (0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0, 0.01f64..1.0)
        .prop_map(|(b, f, fi, d)| FactorWeights::new(b, f, fi, d).normalized())
}

// ── Normalizer bounds and monotonicity ───────────────────────────────────

proptest! {
    #[test]
    fn factors_bounded_zero_to_one(record in arb_record()) {
        let school = School::from(record);
        for factor in Factor::ALL {
            let v = factors::normalize(&school, factor);
            prop_assert!((0.0..=1.0).contains(&v), "{} out of bounds: {}", factor, v);
        }
    }

    #[test]
    fn bias_non_decreasing(a in -200.0f64..200.0, b in -200.0f64..200.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(factors::bias::from_score(lo) <= factors::bias::from_score(hi));
    }

    #[test]
    fn fire_non_decreasing(a in -50.0f64..150.0, b in -50.0f64..150.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let s_lo = School::from(SchoolRecord::new("lo", 1, "lo").with_fire_score(lo));
        let s_hi = School::from(SchoolRecord::new("hi", 1, "hi").with_fire_score(hi));
        prop_assert!(factors::fire::calculate(&s_lo) <= factors::fire::calculate(&s_hi));
    }

    #[test]
    fn footprint_non_increasing(a in 0u32..100, b in 0u32..100) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(factors::footprint::from_count(lo) >= factors::footprint::from_count(hi));
    }
}

// ── Quality ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn quality_strictly_decreasing_in_tracked_window(a in 1i32..=150, b in 1i32..=150) {
        prop_assume!(a != b);
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        prop_assert!(quality::from_rank(lo) > quality::from_rank(hi));
    }

    #[test]
    fn quality_floors_outside_window(rank in prop_oneof![151i32..10_000, i32::MIN..1]) {
        prop_assert_eq!(quality::from_rank(rank), quality::from_rank(150));
    }
}

// ── Compositor ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn all_missing_alignment_is_half(weights in arb_weights(), rank in 1i32..1000) {
        let school = School::from(SchoolRecord::new("empty", rank, "Empty"));
        prop_assert!((alignment_score(&school, &weights) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn composite_bounded_for_normalized_weights(
        record in arb_record(),
        weights in arb_weights(),
        master in 0.0f64..=1.0,
    ) {
        let school = School::from(record);
        let c = composite_score(&school, MasterWeight::new(master), &weights);
        prop_assert!(c.is_finite());
        prop_assert!((-1e-12..=1.0 + 1e-12).contains(&c), "composite {}", c);
    }
}

// ── Rank assigner ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn ranks_form_permutation(schools in arb_schools(), weights in arb_weights(), master in 0.0f64..=1.0) {
        let ranked = rank_schools(&schools, MasterWeight::new(master), &weights);
        prop_assert_eq!(ranked.len(), schools.len());
        let mut ranks: Vec<usize> = ranked.iter().map(|r| r.adjusted_rank).collect();
        ranks.sort_unstable();
        let expected: Vec<usize> = (1..=schools.len()).collect();
        prop_assert_eq!(ranks, expected);
    }

    #[test]
    fn ranking_is_deterministic(schools in arb_schools(), weights in arb_weights(), master in 0.0f64..=1.0) {
        let m = MasterWeight::new(master);
        let first = rank_schools(&schools, m, &weights);
        let second = rank_schools(&schools, m, &weights);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn adjacent_pairs_respect_tie_break(schools in arb_schools(), weights in arb_weights(), master in 0.0f64..=1.0) {
        let ranked = rank_schools(&schools, MasterWeight::new(master), &weights);
        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.composite_score >= b.composite_score);
            if a.composite_score == b.composite_score {
                let order = a
                    .school
                    .rank()
                    .cmp(&b.school.rank())
                    .then_with(|| compare_names(a.school.name(), b.school.name()));
                prop_assert!(
                    order != Ordering::Greater,
                    "tie-break violated between {} and {}",
                    a.handle(),
                    b.handle()
                );
            }
        }
    }

    #[test]
    fn master_zero_orders_by_baseline_quality(schools in arb_schools(), weights in arb_weights()) {
        let ranked = rank_schools(&schools, MasterWeight::QUALITY_ONLY, &weights);
        for pair in ranked.windows(2) {
            prop_assert!(quality::calculate(&pair[0].school) >= quality::calculate(&pair[1].school));
        }
    }
}
