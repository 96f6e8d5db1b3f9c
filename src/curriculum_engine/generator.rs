use tracing::debug;

use crate::config::EngineSettings;
use crate::curriculum_engine::{
    error::EngineResult,
    families::Layout,
    helpers::{op, render_missing, Draft},
    hints::compose,
    models::{
        Answer, DisplayFormat, Level, MissingPosition, Problem, ProblemRequest, WorksheetConfig,
    },
    random::{pick, RandomSource, RngSource},
    resolver::resolve,
    scorer::{score, LevelContext},
    sequencer::legal_operations,
    subtype::Subtype,
};

/// Problem id: level code, zero-padded worksheet, random hex tag.
pub(crate) fn make_problem_id(level: Level, worksheet: u32, random: &mut dyn RandomSource) -> String {
    let tag = random.next_int(0, u32::MAX as i64);
    format!("{}-{:03}-{:08X}", level.code(), worksheet, tag)
}

/// The answer a learner must give for these operands.
///
/// With a missing-operand shape that is the hidden operand; otherwise the
/// family's full solution.
pub fn correct_answer(subtype: Subtype, operands: &[i64], missing: Option<MissingPosition>) -> Answer {
    match missing {
        Some(MissingPosition::First)  => Answer::Integer(op(operands, 0)),
        Some(MissingPosition::Second) => Answer::Integer(op(operands, 1)),
        None => (subtype.family().solve)(subtype, operands),
    }
}

/// Column-arithmetic problems go vertical once any operand reaches the
/// threshold.
fn binary_format(operands: &[i64], missing: bool, settings: &EngineSettings) -> DisplayFormat {
    if missing || operands.iter().all(|v| v.abs() < settings.vertical_threshold) {
        DisplayFormat::Horizontal
    } else {
        DisplayFormat::Vertical
    }
}

/// Generate one problem for an already resolved worksheet.
///
/// Never fails: unsatisfiable constraints yield a problem with
/// `degraded = true`.
pub fn generate(config: &WorksheetConfig, random: &mut dyn RandomSource, settings: &EngineSettings) -> Problem {
    let id = make_problem_id(config.level, config.worksheet, random);
    let family = config.subtype.family();
    let draft = (family.construct)(config.subtype, &config.params, random, settings);
    build_problem(config, id, draft, settings)
}

/// Turn a constructor draft into a finished, scored, hinted problem.
pub(crate) fn build_problem(config: &WorksheetConfig, id: String, draft: Draft, settings: &EngineSettings) -> Problem {
    let subtype = config.subtype;
    let family = subtype.family();

    let (question, missing, display_format) = match (family.layout)(subtype) {
        Layout::Binary { symbol } => {
            let missing = draft.shape.missing_position();
            let question = match missing {
                Some(_) => {
                    let result = (family.solve)(subtype, &draft.operands).to_string();
                    render_missing(&draft.operands, symbol, &result, draft.shape)
                }
                None => (family.render)(subtype, &draft.operands),
            };
            (question, missing, binary_format(&draft.operands, missing.is_some(), settings))
        }
        Layout::Fixed(format) => ((family.render)(subtype, &draft.operands), None, format),
    };

    let correct_answer = correct_answer(subtype, &draft.operands, missing);
    let difficulty = score(
        &draft.operands,
        &LevelContext { level: config.level, features: draft.features, missing_operand: missing.is_some() },
    );
    let hints = compose(config, &draft.operands, missing, settings);

    debug!(
        %id,
        subtype = subtype.key(),
        difficulty,
        degraded = draft.degraded,
        "generated problem"
    );

    Problem {
        id,
        level: config.level,
        worksheet: config.worksheet,
        operation: config.operation,
        subtype,
        difficulty,
        display_format,
        question,
        operands: draft.operands,
        correct_answer,
        missing_position: missing,
        hints,
        degraded: draft.degraded,
    }
}

/// Core dispatch: sequencer, then resolver, then generation.
///
/// Positions with several legal operations pick one uniformly from the
/// request's source.
pub fn generate_problem_with(request: &ProblemRequest, settings: &EngineSettings) -> EngineResult<Problem> {
    let operations = legal_operations(request.level, request.worksheet)?;
    let mut random = RngSource::from_seed_option(request.rng_seed);
    let operation = pick(&mut random, &operations);
    let config = resolve(request.level, request.worksheet, operation)?;
    Ok(generate(&config, &mut random, settings))
}

/// [`generate_problem_with`] using default settings.
pub fn generate_problem(request: ProblemRequest) -> EngineResult<Problem> {
    generate_problem_with(&request, &EngineSettings::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum_engine::{
        error::EngineError,
        models::{GenParams, OperationKind},
        random::ScriptedSource,
    };

    fn config(level: Level, worksheet: u32, operation: OperationKind) -> WorksheetConfig {
        resolve(level, worksheet, operation).unwrap()
    }

    #[test]
    fn ids_carry_the_position() {
        let p = generate_problem(ProblemRequest::seeded(Level::C, 7, 1)).unwrap();
        assert!(p.id.starts_with("C-007-"), "{}", p.id);
        assert_eq!(p.id.len(), "C-007-".len() + 8);
    }

    #[test]
    fn seeded_requests_are_reproducible() {
        let a = generate_problem(ProblemRequest::seeded(Level::E, 100, 99)).unwrap();
        let b = generate_problem(ProblemRequest::seeded(Level::E, 100, 99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_operand_answer_is_the_hidden_value() {
        let settings = EngineSettings::default();
        let cfg = config(Level::C, 102, OperationKind::Multiplication);
        assert_eq!(cfg.subtype, Subtype::MultiplyMissingFactor);
        let mut rng = RngSource::seeded(5);
        for _ in 0..50 {
            let p = generate(&cfg, &mut rng, &settings);
            let (a, b) = (p.operands[0], p.operands[1]);
            match p.missing_position {
                Some(MissingPosition::First) => {
                    assert_eq!(p.correct_answer, Answer::Integer(a));
                    assert_eq!(p.question, format!("? × {b} = {}", a * b));
                }
                Some(MissingPosition::Second) => {
                    assert_eq!(p.correct_answer, Answer::Integer(b));
                    assert_eq!(p.question, format!("{a} × ? = {}", a * b));
                }
                None => panic!("missing factor must hide an operand"),
            }
            assert_eq!(p.display_format, DisplayFormat::Horizontal);
            assert!(p.hints.micro.text.contains("Work backwards"));
        }
    }

    #[test]
    fn vertical_threshold_switches_layout() {
        let cfg = config(Level::B, 80, OperationKind::Addition);
        let mut rng = RngSource::seeded(3);
        let p = generate(&cfg, &mut rng, &EngineSettings::default());
        assert_eq!(p.display_format, DisplayFormat::Vertical);

        let small = config(Level::ThreeA, 10, OperationKind::Addition);
        let p = generate(&small, &mut rng, &EngineSettings::default());
        assert_eq!(p.display_format, DisplayFormat::Horizontal);
    }

    #[test]
    fn scripted_generation() {
        // id tag, then a = 4, then the commutative coin (no swap).
        let cfg = WorksheetConfig {
            level: Level::ThreeA,
            worksheet: 1,
            operation: OperationKind::Addition,
            subtype: Subtype::AddOne,
            params: GenParams::new().a(1, 9),
        };
        let mut src = ScriptedSource::new(vec![0, 4, 100]);
        let p = generate(&cfg, &mut src, &EngineSettings::default());
        assert_eq!(p.operands, vec![4, 1]);
        assert_eq!(p.correct_answer, Answer::Integer(5));
        assert_eq!(p.question, "4 + 1 = ?");
        assert_eq!(p.id, "3A-001-00000000");
    }

    #[test]
    fn bad_positions_fail_fast() {
        assert!(matches!(
            generate_problem(ProblemRequest::seeded(Level::D, 201, 1)),
            Err(EngineError::WorksheetOutOfRange { .. })
        ));
    }
}
