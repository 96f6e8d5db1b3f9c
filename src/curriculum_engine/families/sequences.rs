//! Arithmetic and geometric sequences, series, and sequence limits.

use crate::config::EngineSettings;
use crate::curriculum_engine::{
    arithmetic::{format_poly, ipow, paren},
    families::{Family, Layout},
    helpers::{draw, draw_nonzero, op, Draft},
    models::{Answer, DisplayFormat, Fraction, GenParams},
    random::RandomSource,
    subtype::Subtype,
};

pub static FAMILY: Family = Family {
    name: "sequences",
    construct,
    solve,
    render,
    micro,
    walkthrough,
    layout,
};

const SHOWN_TERMS: i64 = 5;

fn construct(
    subtype: Subtype,
    params: &GenParams,
    random: &mut dyn RandomSource,
    _settings: &EngineSettings,
) -> Draft {
    let first = draw(random, params.range_a);
    match subtype {
        // [first, difference, shown, hidden_index]
        Subtype::MissingSequenceTerm => {
            let d = draw_nonzero(random, params.range_b);
            Draft::new(vec![first, d, SHOWN_TERMS, random.next_int(1, SHOWN_TERMS - 1)])
        }
        // [first, ratio, n]
        Subtype::GeometricNthTerm | Subtype::GeometricSeriesSum => {
            let ratio = random.next_int(2, 3);
            Draft::new(vec![first.max(1), ratio, random.next_int(3, 6)])
        }
        // [a, b, c, d]: (an + b) / (cn + d)
        Subtype::SequenceLimit => Draft::new(vec![
            draw_nonzero(random, params.range_b),
            draw(random, params.range_b),
            draw_nonzero(random, params.range_b),
            draw(random, params.range_b),
        ]),
        // [first, difference, n]
        _ => Draft::new(vec![first, draw_nonzero(random, params.range_b), random.next_int(5, 20)]),
    }
}

fn arithmetic_term(first: i64, d: i64, n: i64) -> i64 {
    first + (n - 1) * d
}

fn solve(subtype: Subtype, ops: &[i64]) -> Answer {
    let (a, b, c) = (op(ops, 0), op(ops, 1), op(ops, 2));
    match subtype {
        Subtype::MissingSequenceTerm => Answer::Integer(a + op(ops, 3) * b),
        Subtype::GeometricNthTerm => Answer::Integer(a * ipow(b, c - 1)),
        Subtype::ArithmeticSeriesSum => Answer::Integer(c * (a + arithmetic_term(a, b, c)) / 2),
        Subtype::GeometricSeriesSum => Answer::Integer(a * (ipow(b, c) - 1) / (b - 1).max(1)),
        Subtype::SequenceLimit => Answer::Fraction(Fraction::new(a, c)),
        _ => Answer::Integer(arithmetic_term(a, b, c)),
    }
}

fn terms(first: i64, step: impl Fn(i64) -> i64, count: i64) -> Vec<i64> {
    (0..count).map(|i| first + step(i)).collect()
}

fn render(subtype: Subtype, ops: &[i64]) -> String {
    let (a, b, c) = (op(ops, 0), op(ops, 1), op(ops, 2));
    let listed = |values: Vec<i64>| values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ");
    match subtype {
        Subtype::MissingSequenceTerm => {
            let hidden = op(ops, 3);
            let shown = (0..c)
                .map(|i| if i == hidden { "_".to_string() } else { (a + i * b).to_string() })
                .collect::<Vec<_>>()
                .join(", ");
            format!("Find the missing term: {shown}")
        }
        Subtype::ArithmeticNthTerm => {
            format!("Find term {c} of {}, ...", listed(terms(a, |i| i * b, 3)))
        }
        Subtype::GeometricNthTerm => {
            format!("Find term {c} of {}, ...", listed((0..3).map(|i| a * ipow(b, i)).collect()))
        }
        Subtype::ArithmeticSeriesSum => {
            format!("Find the sum of the first {c} terms of {}, ...", listed(terms(a, |i| i * b, 3)))
        }
        Subtype::GeometricSeriesSum => format!(
            "Find the sum of the first {c} terms of {}, ...",
            listed((0..3).map(|i| a * ipow(b, i)).collect())
        ),
        _ => format!(
            "Find the limit as n → ∞ of ({}) / ({}).",
            format_poly(&[(a, 1), (b, 0)], "n"),
            format_poly(&[(c, 1), (op(ops, 3), 0)], "n")
        ),
    }
}

fn micro(subtype: Subtype, ops: &[i64]) -> String {
    match subtype {
        Subtype::MissingSequenceTerm => "Find the gap between neighbouring terms.".to_string(),
        Subtype::ArithmeticNthTerm => "aₙ = a₁ + (n - 1)d.".to_string(),
        Subtype::GeometricNthTerm => "aₙ = a₁ · r^(n - 1).".to_string(),
        Subtype::ArithmeticSeriesSum => "Sum = n × (first + last) / 2.".to_string(),
        Subtype::GeometricSeriesSum => "Sum = a₁(rⁿ - 1)/(r - 1).".to_string(),
        _ => format!("Divide top and bottom by n; only {} and {} survive.", op(ops, 0), op(ops, 2)),
    }
}

fn walkthrough(subtype: Subtype, ops: &[i64]) -> Vec<String> {
    let (a, b, c) = (op(ops, 0), op(ops, 1), op(ops, 2));
    let answer = solve(subtype, ops);
    let mut steps = match subtype {
        Subtype::MissingSequenceTerm => vec![
            format!("Each term is {} more than the last.", paren(b)),
            format!("Count {} step(s) on from {a}.", op(ops, 3)),
        ],
        Subtype::ArithmeticNthTerm => vec![
            format!("a₁ = {a}, d = {b}."),
            format!("a{c} = {a} + ({c} - 1) × {}.", paren(b)),
        ],
        Subtype::GeometricNthTerm => vec![
            format!("a₁ = {a}, r = {b}."),
            format!("a{c} = {a} × {b}^{}.", c - 1),
        ],
        Subtype::ArithmeticSeriesSum => {
            let last = arithmetic_term(a, b, c);
            vec![
                format!("The last term is {a} + {} × {} = {last}.", c - 1, paren(b)),
                format!("Sum = {c} × ({a} + {}) / 2.", paren(last)),
            ]
        }
        Subtype::GeometricSeriesSum => vec![
            format!("a₁ = {a}, r = {b}, n = {c}."),
            format!("Sum = {a} × ({b}^{c} - 1) / ({b} - 1)."),
        ],
        _ => vec![
            "Divide every term by n.".to_string(),
            "Terms with n in the denominator go to 0.".to_string(),
            format!("What remains is {a}/{c}."),
        ],
    };
    steps.push(format!("Answer: {answer}."));
    steps
}

fn layout(subtype: Subtype) -> Layout {
    match subtype {
        Subtype::SequenceLimit => Layout::Fixed(DisplayFormat::Expression),
        _ => Layout::Fixed(DisplayFormat::SequenceBoxes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_forms() {
        assert_eq!(solve(Subtype::ArithmeticNthTerm, &[3, 4, 10]), Answer::Integer(39));
        assert_eq!(solve(Subtype::GeometricNthTerm, &[2, 3, 4]), Answer::Integer(54));
        assert_eq!(solve(Subtype::ArithmeticSeriesSum, &[1, 1, 100]), Answer::Integer(5050));
        assert_eq!(solve(Subtype::GeometricSeriesSum, &[1, 2, 5]), Answer::Integer(31));
        assert_eq!(solve(Subtype::SequenceLimit, &[4, 1, 6, -5]), Answer::Fraction(Fraction::new(2, 3)));
    }

    #[test]
    fn missing_term_rendering() {
        assert_eq!(render(Subtype::MissingSequenceTerm, &[4, 3, 5, 2]), "Find the missing term: 4, 7, _, 13, 16");
        assert_eq!(solve(Subtype::MissingSequenceTerm, &[4, 3, 5, 2]), Answer::Integer(10));
    }
}
