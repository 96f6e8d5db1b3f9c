use serde::Serialize;
use serde_json::{json, Value};

use crate::curriculum_engine::models::{Answer, Fraction, HintData, MissingPosition, Problem};

/// Build one hint tier for the client. The worked example keeps its steps
/// but loses its separate answer field.
fn client_hint(hint: &HintData) -> Value {
    let example = hint.example.as_ref().map(|ex| {
        json!({
            "question": ex.question,
            "operands": ex.operands,
            "steps":    ex.steps,
        })
    });
    json!({
        "text":          hint.text,
        "animation_id":  hint.animation_id,
        "duration_secs": hint.duration_secs,
        "min_view_secs": hint.min_view_secs,
        "example":       example,
    })
}

/// Operands as shown to the learner: the hidden one becomes `null`.
fn visible_operands(problem: &Problem) -> Vec<Value> {
    let hidden = match problem.missing_position {
        Some(MissingPosition::First)  => Some(0),
        Some(MissingPosition::Second) => Some(1),
        None                          => None,
    };
    problem
        .operands
        .iter()
        .enumerate()
        .map(|(i, v)| if Some(i) == hidden { Value::Null } else { json!(v) })
        .collect()
}

/// Map a `Problem` to the JSON object a UI renderer consumes.
///
/// The correct answer is never included; answers are checked server-side
/// with [`check_answer`].
pub fn to_client_payload(problem: &Problem) -> Value {
    json!({
        "id":               problem.id,
        "level":            problem.level.code(),
        "worksheet":        problem.worksheet,
        "type":             problem.operation.name(),
        "subtype":          problem.subtype.key(),
        "label":            problem.subtype.label(),
        "difficulty":       problem.difficulty,
        "display_format":   problem.display_format.to_string(),
        "question":         problem.question,
        "operands":         visible_operands(problem),
        "missing_position": problem.missing_position,
        "hints": {
            "micro":    client_hint(&problem.hints.micro),
            "visual":   client_hint(&problem.hints.visual),
            "teaching": client_hint(&problem.hints.teaching),
        },
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerCheck {
    pub is_correct: bool,
    /// The expected answer, formatted for display.
    pub expected: String,
}

/// `i64::MIN` has no positive counterpart, so it is refused outright.
fn parse_int(s: &str) -> Option<i64> {
    s.parse::<i64>().ok().filter(|n| *n != i64::MIN)
}

/// Parse `"7"`, `"-3/4"` or `"0.25"` into a reduced fraction.
fn parse_rational(raw: &str) -> Option<Fraction> {
    let s: String = raw.chars().filter(|c| !c.is_whitespace() && *c != ',').collect();
    let s = s.replace('−', "-");
    if let Some((num, den)) = s.split_once('/') {
        let (num, den) = (parse_int(num)?, parse_int(den)?);
        return (den != 0).then(|| Fraction::new(num, den));
    }
    if s.parse::<i64>().is_ok() {
        return parse_int(&s).map(|n| Fraction::new(n, 1));
    }
    let (whole, frac) = s.split_once('.')?;
    if frac.is_empty() || frac.len() > 9 || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let negative = whole.starts_with('-');
    let whole: i64 = match whole.trim_start_matches(['-', '+']) {
        "" => 0,
        digits => digits.parse().ok()?,
    };
    let scale = 10_i64.pow(frac.len() as u32);
    let units = whole.checked_mul(scale)?.checked_add(frac.parse::<i64>().ok()?)?;
    Some(Fraction::new(if negative { -units } else { units }, scale))
}

/// Lowercase with all whitespace removed, for text and expression answers.
fn normalise(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .map(|c| if c == '−' { '-' } else { c })
        .collect()
}

/// Compare a learner's typed answer against the problem's correct answer.
pub fn check_answer(problem: &Problem, input: &str) -> AnswerCheck {
    let expected = &problem.correct_answer;
    let is_correct = match expected {
        Answer::Integer(n) => parse_rational(input) == Some(Fraction::new(*n, 1)),
        Answer::Fraction(f) => parse_rational(input) == Some(*f),
        Answer::Decimal { value, places } => {
            let tolerance = 0.5 / 10_f64.powi(*places as i32);
            input
                .trim()
                .replace('−', "-")
                .parse::<f64>()
                .map(|x| (x - value).abs() < tolerance)
                .unwrap_or(false)
        }
        Answer::Text(s) | Answer::Expression(s) => !input.trim().is_empty() && normalise(input) == normalise(s),
    };
    AnswerCheck { is_correct, expected: expected.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum_engine::{generate_problem, Level, ProblemRequest};

    fn with_answer(answer: Answer) -> Problem {
        let mut p = generate_problem(ProblemRequest::seeded(Level::C, 1, 11)).unwrap();
        p.correct_answer = answer;
        p
    }

    #[test]
    fn payload_hides_answers() {
        let p = generate_problem(ProblemRequest::seeded(Level::E, 40, 3)).unwrap();
        let payload = to_client_payload(&p);
        assert!(payload.get("correct_answer").is_none());
        assert!(payload["hints"]["teaching"]["example"].get("answer").is_none());
        assert!(payload["hints"]["teaching"]["example"]["steps"].is_array());
        assert_eq!(payload["level"], "E");
        assert_eq!(payload["type"], "fractions");
        assert_eq!(payload["display_format"], "expression");
    }

    #[test]
    fn hidden_operand_is_nulled() {
        let p = generate_problem(ProblemRequest::seeded(Level::C, 103, 6)).unwrap();
        let payload = to_client_payload(&p);
        let idx = match p.missing_position {
            Some(MissingPosition::First) => 0,
            Some(MissingPosition::Second) => 1,
            None => panic!("expected a missing factor"),
        };
        assert!(payload["operands"][idx].is_null());
        assert!(!payload["operands"][1 - idx].is_null());
    }

    #[test]
    fn numeric_answers() {
        let p = with_answer(Answer::Integer(-12));
        assert!(check_answer(&p, " -12 ").is_correct);
        assert!(check_answer(&p, "−12").is_correct);
        assert!(!check_answer(&p, "12").is_correct);
        assert!(!check_answer(&p, "").is_correct);

        let p = with_answer(Answer::Fraction(Fraction::new(3, 4)));
        assert!(check_answer(&p, "3/4").is_correct);
        assert!(check_answer(&p, "6/8").is_correct);
        assert!(check_answer(&p, "0.75").is_correct);
        assert!(!check_answer(&p, "3/0").is_correct);

        let p = with_answer(Answer::Decimal { value: 2.5, places: 2 });
        assert!(check_answer(&p, "2.50").is_correct);
        assert!(!check_answer(&p, "2.6").is_correct);
        assert_eq!(check_answer(&p, "x").expected, "2.50");
    }

    #[test]
    fn text_answers_ignore_case_and_spacing() {
        let p = with_answer(Answer::Text("7 R 2".into()));
        assert!(check_answer(&p, "7r2").is_correct);
        assert!(check_answer(&p, "7 r 2").is_correct);
        assert!(!check_answer(&p, "7 R 3").is_correct);

        let p = with_answer(Answer::Expression("6x^2 + 2".into()));
        assert!(check_answer(&p, "6X^2+2").is_correct);
    }

    #[test]
    fn rational_parsing() {
        assert_eq!(parse_rational("-0.5"), Some(Fraction::new(-1, 2)));
        assert_eq!(parse_rational(".25"), Some(Fraction::new(1, 4)));
        assert_eq!(parse_rational("1,000"), Some(Fraction::new(1000, 1)));
        assert_eq!(parse_rational("abc"), None);
    }

    #[test]
    fn extreme_input_is_rejected_without_panicking() {
        let p = with_answer(Answer::Integer(3));
        for input in ["-9223372036854775808", "-9223372036854775808/-1", "1/-9223372036854775808"] {
            assert!(!check_answer(&p, input).is_correct, "{input}");
        }
        let p = with_answer(Answer::Fraction(Fraction::new(1, 2)));
        assert!(!check_answer(&p, "-9223372036854775808/-1").is_correct);
        assert_eq!(parse_rational("9223372036854775807"), Some(Fraction::new(i64::MAX, 1)));
    }
}
