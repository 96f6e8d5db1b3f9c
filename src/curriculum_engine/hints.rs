//! Graduated hints: a one-line nudge, a set-up animation, and a fully worked
//! comparable problem.
//!
//! The visual tier only ever points at the set-up phase of an animation; the
//! solution reveal is left to the teaching tier. The teaching example is
//! derived deterministically from the problem's own operands, so the same
//! problem always gets the same example, and it never carries the learner's
//! answer.

use tracing::debug;

use crate::config::EngineSettings;
use crate::curriculum_engine::{
    generator::correct_answer,
    helpers::op,
    models::{HintData, MissingPosition, ProblemHints, WorkedExample, WorksheetConfig},
    random::{rejection_sample, seed_from_values, RngSource},
};

/// Mixed into the example seed so it never replays the problem's own draws.
const EXAMPLE_SALT: u64 = 0x4849_4e54;

/// Placeholder when no animation matches.
pub const FALLBACK_ANIMATION: &str = "emoji:🧮";

/// Subtype keys with a dedicated animation.
const EXACT_ANIMATIONS: &[(&str, &str)] = &[
    ("count_objects",        "counting-objects"),
    ("number_words",         "number-names"),
    ("add_make_ten",         "ten-frame"),
    ("add_doubles",          "doubles-mirror"),
    ("two_digit_add_carry",  "column-carry"),
    ("two_digit_sub_borrow", "column-borrow"),
    ("subtract_across_zeros", "column-borrow-zeros"),
    ("division_with_remainder", "sharing-leftovers"),
    ("long_division_two_digit_divisor", "long-division"),
    ("compare_fractions",    "fraction-compare"),
    ("pythagorean_hypotenuse", "right-triangle"),
    ("pythagorean_leg",      "right-triangle"),
    ("dice_sum_probability", "dice-grid"),
    ("simultaneous_equations", "two-lines"),
];

/// Keywords matched as substrings of the operation name, first hit wins.
const KEYWORD_ANIMATIONS: &[(&str, &str)] = &[
    ("counting",       "number-line"),
    ("addition",       "number-line-jump"),
    ("subtraction",    "take-away"),
    ("multiplication", "array-grid"),
    ("division",       "equal-groups"),
    ("fraction",       "fraction-bar"),
    ("decimal",        "place-value"),
    ("order",          "bracket-steps"),
    ("integer",        "signed-number-line"),
    ("expression",     "algebra-tiles"),
    ("equation",       "balance-scale"),
    ("function",       "function-machine"),
    ("radical",        "square-area"),
    ("quadratic",      "parabola"),
    ("complex",        "argand-plane"),
    ("exponent",       "repeated-product"),
    ("logarithm",      "log-ladder"),
    ("trigonometry",   "unit-circle"),
    ("sequence",       "sequence-steps"),
    ("limit",          "approach-graph"),
    ("differentiation", "tangent-line"),
    ("integration",    "area-strips"),
    ("vector",         "arrow-sum"),
    ("matri",          "matrix-grid"),
    ("transformation", "coordinate-grid"),
    ("probability",    "outcome-tree"),
    ("statistic",      "data-line"),
    ("set",            "venn"),
    ("number",         "place-value"),
];

/// Resolve an animation id for a subtype key and operation name.
///
/// Exact key match first, then the first keyword found in the operation name,
/// then [`FALLBACK_ANIMATION`]. Matches get a `-setup` suffix.
pub fn resolve_animation_id(subtype_key: &str, operation_name: &str) -> String {
    let name = operation_name.to_ascii_lowercase();
    let base = EXACT_ANIMATIONS
        .iter()
        .find(|(key, _)| *key == subtype_key)
        .or_else(|| KEYWORD_ANIMATIONS.iter().find(|(keyword, _)| name.contains(keyword)))
        .map(|(_, base)| *base);

    match base {
        Some(base) => format!("{base}-setup"),
        None => FALLBACK_ANIMATION.to_string(),
    }
}

/// Build the three hint tiers for a problem.
///
/// `operands` are the problem's operands in display order and `missing`
/// the hidden position, if any.
pub fn compose(
    config: &WorksheetConfig,
    operands: &[i64],
    missing: Option<MissingPosition>,
    settings: &EngineSettings,
) -> ProblemHints {
    let family = config.subtype.family();

    let micro_text = match missing {
        Some(_) => "Work backwards: undo the operation to find the hidden number.".to_string(),
        None => (family.micro)(config.subtype, operands),
    };
    let micro = HintData {
        text: micro_text,
        animation_id: None,
        duration_secs: settings.micro_hint_secs,
        min_view_secs: None,
        example: None,
    };

    let visual = HintData {
        text: format!("Watch how to set up: {}.", config.subtype.label().to_lowercase()),
        animation_id: Some(resolve_animation_id(config.subtype.key(), config.operation.name())),
        duration_secs: settings.visual_hint_secs,
        min_view_secs: None,
        example: None,
    };

    let example = worked_example(config, operands, missing, settings);
    let teaching = HintData {
        text: format!("Here is a similar problem worked all the way through: {}", example.question),
        animation_id: None,
        duration_secs: settings.teaching_hint_secs,
        min_view_secs: Some(settings.teaching_min_view_secs),
        example: Some(example),
    };

    ProblemHints { micro, visual, teaching }
}

/// A different instance of the same subtype, fully solved.
///
/// Re-runs the family constructor from a seed derived from `operands`. A
/// candidate is rejected when it repeats the problem, when its answer equals
/// the learner's answer, or when it shows the hidden operand of a
/// missing-operand problem. If every attempt is rejected, operands are
/// shifted upwards one at a time until the example stops giving the answer
/// away; the shifted example is answer-distinct only and may break the
/// subtype's own constraints.
pub fn worked_example(
    config: &WorksheetConfig,
    operands: &[i64],
    missing: Option<MissingPosition>,
    settings: &EngineSettings,
) -> WorkedExample {
    let subtype = config.subtype;
    let family = subtype.family();
    let learner_answer = correct_answer(subtype, operands, missing);
    let hidden = missing.map(|m| match m {
        MissingPosition::First  => op(operands, 0),
        MissingPosition::Second => op(operands, 1),
    });
    let distinct = |candidate: &[i64]| -> bool {
        candidate != operands
            && (family.solve)(subtype, candidate) != learner_answer
            && hidden.map_or(true, |h| !candidate.contains(&h))
    };

    let mut random = RngSource::seeded(seed_from_values(operands, EXAMPLE_SALT));
    let sampled = rejection_sample(
        &mut random,
        settings.max_rejection_attempts,
        |r| (family.construct)(subtype, &config.params, r, settings).operands,
        |candidate| distinct(candidate.as_slice()),
    );
    let example_ops = if sampled.degraded {
        debug!(subtype = subtype.key(), "no distinct example drawn, shifting operands");
        shift_until_distinct(sampled.value, settings.max_rejection_attempts, &distinct)
    } else {
        sampled.value
    };

    WorkedExample {
        question: (family.render)(subtype, &example_ops),
        steps: (family.walkthrough)(subtype, &example_ops),
        answer: (family.solve)(subtype, &example_ops),
        operands: example_ops,
    }
}

/// Raise one operand at a time by 1, 2, ... up to `max_shift`, returning the
/// first shifted list `distinct` accepts. Falls back to `draw` unchanged.
fn shift_until_distinct(draw: Vec<i64>, max_shift: u32, distinct: &dyn Fn(&[i64]) -> bool) -> Vec<i64> {
    for shift in 1..=i64::from(max_shift.max(1)) {
        for i in 0..draw.len() {
            let mut candidate = draw.clone();
            candidate[i] = candidate[i].saturating_add(shift);
            if distinct(&candidate[..]) {
                return candidate;
            }
        }
    }
    draw
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum_engine::{
        models::{Answer, GenParams, Level, OperationKind},
        resolver::resolve,
        subtype::Subtype,
        tables::OPERATIONS,
    };

    #[test]
    fn animation_resolution_chain() {
        assert_eq!(resolve_animation_id("add_make_ten", "addition"), "ten-frame-setup");
        assert_eq!(resolve_animation_id("add_one", "addition"), "number-line-jump-setup");
        assert_eq!(resolve_animation_id("whatever", "Complex Numbers"), "argand-plane-setup");
        assert_eq!(resolve_animation_id("", ""), FALLBACK_ANIMATION);
        assert_eq!(resolve_animation_id("zzz", "unheard of"), FALLBACK_ANIMATION);
    }

    #[test]
    fn every_operation_has_a_keyword_animation() {
        for op in OPERATIONS {
            assert_ne!(resolve_animation_id("", op.name()), FALLBACK_ANIMATION, "{op}");
        }
        assert_eq!(resolve_animation_id("", "number writing"), "place-value-setup");
    }

    #[test]
    fn tiers_use_configured_durations() {
        let config = resolve(Level::C, 5, OperationKind::Multiplication).unwrap();
        let settings = EngineSettings { teaching_min_view_secs: 12, ..EngineSettings::default() };
        let hints = compose(&config, &[7, 3], None, &settings);
        assert_eq!(hints.micro.duration_secs, 5);
        assert_eq!(hints.visual.duration_secs, 15);
        assert_eq!(hints.teaching.duration_secs, 45);
        assert_eq!(hints.teaching.min_view_secs, Some(12));
        assert!(hints.visual.animation_id.as_deref().is_some_and(|id| id.ends_with("-setup")));
    }

    #[test]
    fn example_differs_and_is_deterministic() {
        let config = resolve(Level::C, 5, OperationKind::Multiplication).unwrap();
        let settings = EngineSettings::default();
        let a = worked_example(&config, &[7, 3], None, &settings);
        let b = worked_example(&config, &[7, 3], None, &settings);
        assert_eq!(a, b);
        assert_ne!(a.operands, vec![7, 3]);
        assert!(!a.steps.is_empty());
        assert_eq!(a.answer, (config.subtype.family().solve)(config.subtype, &a.operands));
    }

    #[test]
    fn missing_shapes_get_a_generic_nudge() {
        let config = resolve(Level::A, 200, OperationKind::Subtraction).unwrap();
        let hints = compose(&config, &[12, 5], Some(MissingPosition::Second), &EngineSettings::default());
        assert!(hints.micro.text.contains("Work backwards"));
        assert!(!hints.micro.text.contains("12"));
    }

    #[test]
    fn exhausted_examples_are_nudged() {
        // A one-value range cannot produce a second distinct example.
        let config = WorksheetConfig {
            level: Level::SevenA,
            worksheet: 1,
            operation: OperationKind::Counting,
            subtype: Subtype::CountObjects,
            params: GenParams::new().a(4, 4),
        };
        let example = worked_example(&config, &[4], None, &EngineSettings::default());
        assert_eq!(example.operands, vec![5]);
    }

    #[test]
    fn example_never_shares_the_answer() {
        // `1 + 8` and `6 + 3` differ as operands but both make 9.
        let config = resolve(Level::A, 10, OperationKind::Addition).unwrap();
        let solve = config.subtype.family().solve;
        let settings = EngineSettings::default();
        for a in 1..=10 {
            for b in 1..=9 {
                let example = worked_example(&config, &[a, b], None, &settings);
                assert_ne!(example.answer, solve(config.subtype, &[a, b]), "{a} + {b}");
            }
        }
    }

    #[test]
    fn example_hides_the_missing_operand() {
        let config = resolve(Level::A, 190, OperationKind::Subtraction).unwrap();
        let settings = EngineSettings::default();
        for (minuend, hidden) in [(12, 5), (9, 4), (15, 7)] {
            let example = worked_example(&config, &[minuend, hidden], Some(MissingPosition::Second), &settings);
            assert!(!example.operands.contains(&hidden), "{:?}", example.operands);
            assert_ne!(example.answer, Answer::Integer(hidden));
        }
    }

    #[test]
    fn shifting_stops_at_the_first_distinct_list() {
        let not_nine = |c: &[i64]| c.iter().sum::<i64>() != 9;
        assert_eq!(shift_until_distinct(vec![6, 3], 5, &not_nine), vec![7, 3]);
        assert_eq!(shift_until_distinct(vec![6, 3], 5, &|_: &[i64]| false), vec![6, 3]);
    }
}
