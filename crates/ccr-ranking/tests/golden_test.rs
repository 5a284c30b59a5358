//! Golden dataset tests for ccr-ranking.
//!
//! Each file under `golden/ranking/` carries the input schools and weights
//! plus the expected order and composite score for every school.

use std::collections::HashMap;

use ccr_core::school::School;
use ccr_core::weights::{FactorWeights, MasterWeight};
use ccr_ranking::rank_schools;
use serde::Deserialize;
use test_fixtures::{list_fixtures, load_fixture};

#[derive(Debug, Deserialize)]
struct GoldenCase {
    description: String,
    input: GoldenInput,
    expected: GoldenExpected,
}

#[derive(Debug, Deserialize)]
struct GoldenInput {
    master_weight: f64,
    factor_weights: FactorWeights,
    schools: Vec<School>,
}

#[derive(Debug, Deserialize)]
struct GoldenExpected {
    order: Vec<String>,
    composite_scores: HashMap<String, f64>,
}

fn run_golden(path: &str) {
    let case: GoldenCase = load_fixture(path);
    let ranked = rank_schools(
        &case.input.schools,
        MasterWeight::new(case.input.master_weight),
        &case.input.factor_weights,
    );

    let order: Vec<&str> = ranked.iter().map(|r| r.handle()).collect();
    assert_eq!(order, case.expected.order, "{}: {}", path, case.description);

    for r in &ranked {
        let expected = case.expected.composite_scores[r.handle()];
        assert!(
            (r.composite_score - expected).abs() < 1e-9,
            "{}: {} scored {} expected {}",
            path,
            r.handle(),
            r.composite_score,
            expected
        );
    }
    for (idx, r) in ranked.iter().enumerate() {
        assert_eq!(r.adjusted_rank, idx + 1);
    }
}

#[test]
fn golden_default_weights() {
    run_golden("golden/ranking/default_weights.json");
}

#[test]
fn golden_quality_only() {
    run_golden("golden/ranking/quality_only.json");
}

#[test]
fn golden_alignment_only() {
    run_golden("golden/ranking/alignment_only.json");
}

#[test]
fn golden_tie_break() {
    run_golden("golden/ranking/tie_break.json");
}

#[test]
fn golden_missing_metrics() {
    run_golden("golden/ranking/missing_metrics.json");
}

#[test]
fn golden_worked_example() {
    run_golden("golden/ranking/worked_example.json");
}

#[test]
fn golden_out_of_range() {
    run_golden("golden/ranking/out_of_range.json");
}

#[test]
fn every_golden_file_is_covered() {
    let files = list_fixtures("golden/ranking");
    assert_eq!(files.len(), 7);
    for file in files {
        let name = file.file_name().unwrap().to_string_lossy().to_string();
        run_golden(&format!("golden/ranking/{name}"));
    }
}
