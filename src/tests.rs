//! Crate-level tests for `math_drill_gen`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Totality | Every (level, worksheet) resolves and generates; out-of-range worksheets fail |
//! | Determinism | Same seed or scripted source gives an identical problem; seeds vary output |
//! | Answers | Non-missing answers match the family solver; missing answers equal the hidden operand |
//! | Constraints | No-borrow subtraction never borrows; exact division has no remainder; ranges hold over 1,000 draws |
//! | Difficulty | Always within 1 to 10 |
//! | Hints | Worked example differs from the problem and never shares its answer; visual tier is a set-up animation |
//! | Scenarios | Times tables to 3, addition-only phase, subtract exactly 2, fraction gating, division catch-all |
//! | Errors | `InvalidLevelForOperation`, degraded marker instead of an error |
//! | Adapter | Client payload round-trips through JSON without the answer |

use crate::client_adapter::{check_answer, to_client_payload};
use crate::config::EngineSettings;
use crate::curriculum_engine::{
    arithmetic::needs_borrow,
    generate, generate_problem, is_concept_available, legal_operations, resolve,
    models::{Answer, GenParams, MissingPosition, WORKSHEETS_PER_LEVEL},
    Concept, EngineError, Level, OperationKind, Problem, ProblemRequest, RngSource,
    ScriptedSource, Subtype, WorksheetConfig,
};

// ── helpers ──────────────────────────────────────────────────────────────────

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

/// Worksheets sampled from every band of a level.
const SAMPLE_WORKSHEETS: [u32; 9] = [1, 20, 50, 81, 100, 111, 150, 181, 200];

fn problem(level: Level, worksheet: u32, seed: u64) -> Problem {
    generate_problem(ProblemRequest::seeded(level, worksheet, seed))
        .unwrap_or_else(|e| panic!("{level} ws{worksheet}: {e}"))
}

/// Generate `n` problems from one resolved config with a seeded source.
fn batch(config: &WorksheetConfig, n: usize, seed: u64) -> Vec<Problem> {
    let settings = EngineSettings::default();
    let mut rng = RngSource::seeded(seed);
    (0..n).map(|_| generate(config, &mut rng, &settings)).collect()
}

fn hidden_operand(p: &Problem) -> Option<i64> {
    match p.missing_position? {
        MissingPosition::First  => p.operands.first().copied(),
        MissingPosition::Second => p.operands.get(1).copied(),
    }
}

// ── totality ─────────────────────────────────────────────────────────────────

#[test]
fn every_position_resolves_to_one_config() {
    for level in Level::ALL {
        for ws in 1..=WORKSHEETS_PER_LEVEL {
            for op in legal_operations(level, ws).unwrap() {
                let a = resolve(level, ws, op).unwrap();
                let b = resolve(level, ws, op).unwrap();
                assert_eq!(a, b, "{level} ws{ws} {op}");
            }
        }
    }
}

#[test]
fn every_level_generates_across_its_bands() {
    for level in Level::ALL {
        for ws in SAMPLE_WORKSHEETS {
            let p = problem(level, ws, 3);
            assert_eq!(p.level, level);
            assert_eq!(p.worksheet, ws);
            assert!(!p.question.is_empty(), "{level} ws{ws}");
            assert!(!p.operands.is_empty(), "{level} ws{ws}");
        }
    }
}

#[test]
fn worksheets_outside_the_level_fail() {
    for ws in [0, WORKSHEETS_PER_LEVEL + 1] {
        let err = generate_problem(ProblemRequest::seeded(Level::B, ws, 1)).unwrap_err();
        assert!(matches!(err, EngineError::WorksheetOutOfRange { worksheet, .. } if worksheet == ws));
    }
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_problem() {
    for level in Level::ALL {
        let a = problem(level, 120, 12345);
        let b = problem(level, 120, 12345);
        assert_eq!(a, b, "mismatch at {level}");
    }
}

#[test]
fn different_seeds_vary_the_output() {
    let ids: std::collections::HashSet<String> =
        SEEDS.iter().map(|s| problem(Level::C, 50, *s).id).collect();
    assert!(ids.len() > 1);
}

#[test]
fn scripted_source_replays_exactly() {
    let config = resolve(Level::C, 10, OperationKind::Multiplication).unwrap();
    let script = vec![17, 6, 2, 0, 9, 3, 1];
    let settings = EngineSettings::default();
    let a = generate(&config, &mut ScriptedSource::new(script.clone()), &settings);
    let b = generate(&config, &mut ScriptedSource::new(script), &settings);
    assert_eq!(a, b);
}

#[test]
fn unseeded_requests_still_work() {
    let p = generate_problem(ProblemRequest::new(Level::G, 10)).unwrap();
    assert!((1..=10).contains(&p.difficulty));
}

// ── answers ──────────────────────────────────────────────────────────────────

#[test]
fn answers_are_derivable_from_operands() {
    for level in Level::ALL {
        for ws in SAMPLE_WORKSHEETS {
            for seed in SEEDS {
                let p = problem(level, ws, seed);
                match hidden_operand(&p) {
                    Some(v) => assert_eq!(p.correct_answer, Answer::Integer(v), "{}", p.question),
                    None => {
                        let solved = (p.subtype.family().solve)(p.subtype, &p.operands);
                        assert_eq!(p.correct_answer, solved, "{}", p.question);
                    }
                }
            }
        }
    }
}

#[test]
fn missing_shapes_hide_the_answer_in_the_question() {
    let config = resolve(Level::A, 190, OperationKind::Subtraction).unwrap();
    assert_eq!(config.subtype, Subtype::SubtractMissing);
    for p in batch(&config, 200, 8) {
        if let Some(v) = hidden_operand(&p) {
            assert!(p.question.contains('?'));
            assert!(check_answer(&p, &v.to_string()).is_correct, "{}", p.question);
        }
    }
}

// ── constraints ──────────────────────────────────────────────────────────────

#[test]
fn no_borrow_subtraction_never_borrows() {
    let config = resolve(Level::B, 100, OperationKind::Subtraction).unwrap();
    assert!(!config.params.allow_borrow);
    for p in batch(&config, 500, 21) {
        assert!(!p.degraded);
        assert!(!needs_borrow(p.operands[0], p.operands[1]), "{:?}", p.operands);
    }
}

#[test]
fn exact_division_leaves_no_remainder() {
    for ws in [111, 140, 155, 200] {
        let config = resolve(Level::C, ws, OperationKind::Division).unwrap();
        assert!(!config.params.allow_remainder);
        for p in batch(&config, 300, ws as u64) {
            let (dividend, divisor) = (p.operands[0], p.operands[1]);
            assert_eq!(dividend % divisor, 0, "ws{ws}: {dividend} ÷ {divisor}");
        }
    }
}

#[test]
fn bounded_ranges_hold_over_a_thousand_draws() {
    let config = resolve(Level::C, 45, OperationKind::Multiplication).unwrap();
    let (a_lo, a_hi) = config.params.range_a;
    let (b_lo, b_hi) = config.params.range_b;
    for p in batch(&config, 1_000, 77) {
        assert!((a_lo..=a_hi).contains(&p.operands[0]), "{:?}", p.operands);
        assert!((b_lo..=b_hi).contains(&p.operands[1]), "{:?}", p.operands);
    }
}

// ── difficulty ───────────────────────────────────────────────────────────────

#[test]
fn difficulty_is_always_in_range() {
    for level in Level::ALL {
        for ws in SAMPLE_WORKSHEETS {
            for seed in SEEDS {
                let d = problem(level, ws, seed).difficulty;
                assert!((1..=10).contains(&d), "{level} ws{ws}: {d}");
            }
        }
    }
}

// ── hints ────────────────────────────────────────────────────────────────────

#[test]
fn worked_example_differs_from_the_problem() {
    for level in Level::ALL {
        for seed in SEEDS {
            let p = problem(level, 60, seed);
            let example = p.hints.teaching.example.as_ref().expect("teaching tier carries an example");
            assert_ne!(example.operands, p.operands, "{level}: {}", p.question);
            assert_ne!(example.answer, p.correct_answer, "{level}: {}", p.question);
            assert!(!example.steps.is_empty());
        }
    }
}

#[test]
fn visual_tier_points_at_a_setup_animation() {
    for level in Level::ALL {
        let p = problem(level, 1, 5);
        let id = p.hints.visual.animation_id.as_deref().unwrap_or_default();
        assert!(id.ends_with("-setup") || id.starts_with("emoji:"), "{level}: {id}");
        assert!(p.hints.micro.animation_id.is_none());
        assert!(p.hints.teaching.min_view_secs.is_some());
    }
}

// ── scenarios ────────────────────────────────────────────────────────────────

#[test]
fn times_tables_to_three() {
    let config = resolve(Level::C, 12, OperationKind::Multiplication).unwrap();
    assert_eq!(config.subtype, Subtype::TimesTablesToThree);
    for p in batch(&config, 200, 12) {
        let (a, b) = (p.operands[0], p.operands[1]);
        assert!((0..=12).contains(&a));
        assert!((1..=3).contains(&b));
        assert_eq!(p.correct_answer, Answer::Integer(a * b));
    }
}

#[test]
fn addition_phase_excludes_subtraction() {
    for ws in 1..=80 {
        assert_eq!(legal_operations(Level::A, ws).unwrap(), vec![OperationKind::Addition]);
    }
    assert_eq!(legal_operations(Level::A, 81).unwrap(), vec![OperationKind::Subtraction]);
}

#[test]
fn subtract_exactly_two() {
    let config = resolve(Level::A, 95, OperationKind::Subtraction).unwrap();
    assert_eq!(config.subtype, Subtype::SubtractTwo);
    for p in batch(&config, 200, 95) {
        assert_eq!(p.operands[1], 2);
        assert!(p.operands[0] >= 3);
        assert!(p.operands[0] <= config.params.range_a.1);
    }
}

#[test]
fn fraction_addition_gating() {
    for ws in [1, 100, 200] {
        assert!(!is_concept_available(Concept::FractionAddition, Level::D, ws));
    }
    assert!(is_concept_available(Concept::FractionAddition, Level::E, 1));
    assert!(is_concept_available(Concept::FractionAddition, Level::J, 150));
}

#[test]
fn division_past_the_last_threshold_uses_the_catch_all() {
    let config = resolve(Level::C, 200, OperationKind::Division).unwrap();
    assert_eq!(config.subtype, Subtype::TwoDigitBySingleDivision);
}

// ── errors ───────────────────────────────────────────────────────────────────

#[test]
fn undefined_operation_is_rejected() {
    let err = resolve(Level::SevenA, 10, OperationKind::Division).unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidLevelForOperation { level: Level::SevenA, operation: OperationKind::Division }
    ));
    assert!(resolve(Level::XS, 10, OperationKind::Addition).is_err());
}

#[test]
fn unsatisfiable_constraints_are_flagged_not_raised() {
    // Carrying is impossible with both addends fixed at 10.
    let config = WorksheetConfig {
        level: Level::B,
        worksheet: 40,
        operation: OperationKind::Addition,
        subtype: Subtype::TwoDigitAddCarry,
        params: GenParams::new().a(10, 10).b(10, 10).carry(),
    };
    let p = generate(&config, &mut RngSource::seeded(1), &EngineSettings::default());
    assert!(p.degraded);
    assert_eq!(p.correct_answer, Answer::Integer(20));
}

// ── adapter ──────────────────────────────────────────────────────────────────

#[test]
fn payload_serialises_without_the_answer() {
    let p = problem(Level::C, 170, 4);
    let raw = serde_json::to_string(&to_client_payload(&p)).unwrap();
    let back: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(back["id"], p.id.as_str());
    assert!(back.get("correct_answer").is_none());
    assert!(check_answer(&p, &p.correct_answer.to_string()).is_correct);
}
