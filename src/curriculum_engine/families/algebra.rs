//! Expressions, polynomials, quadratics and complex numbers.
//!
//! Quadratic topics are built from their roots so every polynomial factors
//! over the integers. Complex numbers are `[re, im]` pairs.

use crate::config::EngineSettings;
use crate::curriculum_engine::{
    arithmetic::{format_complex, format_poly, paren, shifted},
    families::{Family, Layout},
    helpers::{draw, draw_nonzero, op, Draft},
    models::{Answer, DisplayFormat, GenParams},
    random::RandomSource,
    subtype::Subtype,
};

pub static FAMILY: Family = Family {
    name: "algebra",
    construct,
    solve,
    render,
    micro,
    walkthrough,
    layout,
};

fn construct(
    subtype: Subtype,
    params: &GenParams,
    random: &mut dyn RandomSource,
    _settings: &EngineSettings,
) -> Draft {
    let a = params.range_a;
    let b = params.range_b;
    let ops = match subtype {
        Subtype::EvaluateExpression | Subtype::CombineLikeTerms | Subtype::DistributiveExpand => {
            vec![draw_nonzero(random, a), draw_nonzero(random, b), draw_nonzero(random, b)]
        }
        Subtype::DifferenceOfSquares => vec![random.next_int(a.0.max(1), a.1.max(1))],
        Subtype::PolynomialRemainder => vec![draw(random, b), draw(random, b), draw_nonzero(random, a)],
        Subtype::Discriminant | Subtype::QuadraticRootCount => {
            vec![draw_nonzero(random, a), draw(random, b), draw(random, b)]
        }
        Subtype::ComplexAdd | Subtype::ComplexMultiply => {
            vec![draw(random, a), draw_nonzero(random, a), draw(random, b), draw_nonzero(random, b)]
        }
        Subtype::ComplexModulusSquared => vec![draw(random, a), draw_nonzero(random, b)],
        // Binomials, factoring and solving: two integer roots/offsets.
        _ => {
            let (p, q) = (draw_nonzero(random, a), draw_nonzero(random, b));
            if p <= q { vec![p, q] } else { vec![q, p] }
        }
    };
    Draft::new(ops)
}

/// `x^2 + (p+q)x + pq`, the expansion of `(x + p)(x + q)`.
fn expanded(p: i64, q: i64) -> String {
    format_poly(&[(1, 2), (p + q, 1), (p * q, 0)], "x")
}

fn roots_text(r1: i64, r2: i64) -> String {
    let (lo, hi) = if r1 <= r2 { (r1, r2) } else { (r2, r1) };
    if lo == hi { format!("x = {lo}") } else { format!("x = {lo} or x = {hi}") }
}

fn complex_product(ops: &[i64]) -> (i64, i64) {
    let (a, b, c, d) = (op(ops, 0), op(ops, 1), op(ops, 2), op(ops, 3));
    (a * c - b * d, a * d + b * c)
}

fn discriminant(ops: &[i64]) -> i64 {
    op(ops, 1) * op(ops, 1) - 4 * op(ops, 0) * op(ops, 2)
}

fn solve(subtype: Subtype, ops: &[i64]) -> Answer {
    let (a, b, c) = (op(ops, 0), op(ops, 1), op(ops, 2));
    match subtype {
        Subtype::EvaluateExpression => Answer::Integer(a * c + b),
        Subtype::CombineLikeTerms => Answer::Expression(format_poly(&[(a + b, 1), (c, 0)], "x")),
        Subtype::DistributiveExpand => Answer::Expression(format_poly(&[(a * b, 1), (a * c, 0)], "x")),
        Subtype::ExpandBinomials => Answer::Expression(expanded(a, b)),
        Subtype::FactorQuadratic => Answer::Expression(format!("({})({})", shifted("x", a), shifted("x", b))),
        Subtype::DifferenceOfSquares => Answer::Expression(format!("({})({})", shifted("x", -a), shifted("x", a))),
        Subtype::PolynomialRemainder => Answer::Integer(c * c + a * c + b),
        // (x + p)(x + q) = 0 has roots -p and -q.
        Subtype::SolveQuadraticFactoring => Answer::Text(roots_text(-a, -b)),
        Subtype::Discriminant => Answer::Integer(discriminant(ops)),
        Subtype::QuadraticRootCount => Answer::Integer(match discriminant(ops) {
            d if d > 0 => 2,
            0 => 1,
            _ => 0,
        }),
        Subtype::ComplexAdd => Answer::Expression(format_complex(a + c, b + op(ops, 3))),
        Subtype::ComplexMultiply => {
            let (re, im) = complex_product(ops);
            Answer::Expression(format_complex(re, im))
        }
        _ => Answer::Integer(a * a + b * b),
    }
}

fn render(subtype: Subtype, ops: &[i64]) -> String {
    let (a, b, c) = (op(ops, 0), op(ops, 1), op(ops, 2));
    match subtype {
        Subtype::EvaluateExpression => {
            format!("Evaluate {} when x = {c}.", format_poly(&[(a, 1), (b, 0)], "x"))
        }
        Subtype::CombineLikeTerms => format!(
            "Simplify {}x {} {}x {} {}.",
            a,
            if b < 0 { "-" } else { "+" },
            b.abs(),
            if c < 0 { "-" } else { "+" },
            c.abs()
        ),
        Subtype::DistributiveExpand => {
            format!("Expand {a}({}).", format_poly(&[(b, 1), (c, 0)], "x"))
        }
        Subtype::ExpandBinomials => format!("Expand ({})({}).", shifted("x", a), shifted("x", b)),
        Subtype::FactorQuadratic => format!("Factor {}.", expanded(a, b)),
        Subtype::DifferenceOfSquares => format!("Factor x^2 - {}.", a * a),
        Subtype::PolynomialRemainder => format!(
            "Find the remainder when {} is divided by ({}).",
            format_poly(&[(1, 2), (a, 1), (b, 0)], "x"),
            shifted("x", -c)
        ),
        Subtype::SolveQuadraticFactoring => format!("Solve {} = 0.", expanded(a, b)),
        Subtype::Discriminant => format!(
            "Find the discriminant of {}.",
            format_poly(&[(a, 2), (b, 1), (c, 0)], "x")
        ),
        Subtype::QuadraticRootCount => format!(
            "How many real roots does {} = 0 have?",
            format_poly(&[(a, 2), (b, 1), (c, 0)], "x")
        ),
        Subtype::ComplexAdd => format!(
            "({}) + ({}) = ?",
            format_complex(a, b),
            format_complex(c, op(ops, 3))
        ),
        Subtype::ComplexMultiply => format!(
            "({})({}) = ?",
            format_complex(a, b),
            format_complex(c, op(ops, 3))
        ),
        _ => format!("Find |z|^2 for z = {}.", format_complex(a, b)),
    }
}

fn micro(subtype: Subtype, ops: &[i64]) -> String {
    let (a, b) = (op(ops, 0), op(ops, 1));
    match subtype {
        Subtype::EvaluateExpression => format!("Replace x with {} and multiply first.", paren(op(ops, 2))),
        Subtype::CombineLikeTerms => "Add the x terms together; the number stays on its own.".to_string(),
        Subtype::DistributiveExpand => format!("Multiply {a} by each term inside the brackets."),
        Subtype::ExpandBinomials => "First, outer, inner, last.".to_string(),
        Subtype::FactorQuadratic | Subtype::SolveQuadraticFactoring => format!(
            "Find two numbers that multiply to {} and add to {}.",
            a * b,
            a + b
        ),
        Subtype::DifferenceOfSquares => "a^2 - b^2 = (a - b)(a + b).".to_string(),
        Subtype::PolynomialRemainder => "The remainder theorem: substitute the root of the divisor.".to_string(),
        Subtype::Discriminant | Subtype::QuadraticRootCount => "The discriminant is b^2 - 4ac.".to_string(),
        Subtype::ComplexAdd => "Add real parts together and imaginary parts together.".to_string(),
        Subtype::ComplexMultiply => "Expand like binomials and remember i^2 = -1.".to_string(),
        _ => "|a + bi|^2 = a^2 + b^2.".to_string(),
    }
}

fn walkthrough(subtype: Subtype, ops: &[i64]) -> Vec<String> {
    let (a, b, c) = (op(ops, 0), op(ops, 1), op(ops, 2));
    let answer = solve(subtype, ops);
    let mut steps = match subtype {
        Subtype::EvaluateExpression => vec![
            format!("Substitute x = {c}: {a} × {} + {}.", paren(c), paren(b)),
            format!("{a} × {} = {}.", paren(c), a * c),
            format!("{} + {} = {}.", a * c, paren(b), a * c + b),
        ],
        Subtype::CombineLikeTerms => vec![
            format!("Like terms: {a}x and {b}x make {}x.", a + b),
            format!("The constant {c} has no like term."),
        ],
        Subtype::DistributiveExpand => vec![
            format!("{a} × {b}x = {}x.", a * b),
            format!("{a} × {} = {}.", paren(c), a * c),
        ],
        Subtype::ExpandBinomials | Subtype::FactorQuadratic => vec![
            format!("The numbers {a} and {b} multiply to {} and add to {}.", a * b, a + b),
            format!("({})({}) = {}.", shifted("x", a), shifted("x", b), expanded(a, b)),
        ],
        Subtype::DifferenceOfSquares => vec![
            format!("{} = {a}^2.", a * a),
            format!("x^2 - {a}^2 = (x - {a})(x + {a})."),
        ],
        Subtype::PolynomialRemainder => vec![
            format!("The divisor is zero at x = {c}."),
            format!("Substitute: {}^2 + {a}×{} + {b} = {}.", paren(c), paren(c), c * c + a * c + b),
        ],
        Subtype::SolveQuadraticFactoring => vec![
            format!("Factor: ({})({}) = 0.", shifted("x", a), shifted("x", b)),
            "A product is zero when one of its factors is zero.".to_string(),
            format!("{} = 0 or {} = 0.", shifted("x", a), shifted("x", b)),
        ],
        Subtype::Discriminant | Subtype::QuadraticRootCount => vec![
            format!("a = {a}, b = {b}, c = {c}."),
            format!("b^2 - 4ac = {} - {} = {}.", b * b, 4 * a * c, discriminant(ops)),
            "Positive: two roots. Zero: one root. Negative: no real roots.".to_string(),
        ],
        Subtype::ComplexAdd => vec![
            format!("Real parts: {a} + {} = {}.", paren(c), a + c),
            format!("Imaginary parts: {b} + {} = {}.", paren(op(ops, 3)), b + op(ops, 3)),
        ],
        Subtype::ComplexMultiply => {
            let d = op(ops, 3);
            vec![
                format!("Expand: {a}×{} + {a}×{}i + {b}i×{} + {b}×{}i^2.", paren(c), paren(d), paren(c), paren(d)),
                format!("i^2 = -1, so the last term is {}.", -b * d),
                "Collect real and imaginary parts.".to_string(),
            ]
        }
        _ => vec![format!("{}^2 + {}^2 = {} + {}.", paren(a), paren(b), a * a, b * b)],
    };
    steps.push(format!("Answer: {answer}."));
    steps
}

fn layout(_subtype: Subtype) -> Layout {
    Layout::Fixed(DisplayFormat::Expression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum_engine::random::RngSource;

    #[test]
    fn quadratics_come_from_roots() {
        assert_eq!(render(Subtype::SolveQuadraticFactoring, &[-3, -2]), "Solve x^2 - 5x + 6 = 0.");
        assert_eq!(solve(Subtype::SolveQuadraticFactoring, &[-3, -2]), Answer::Text("x = 2 or x = 3".into()));
        assert_eq!(solve(Subtype::FactorQuadratic, &[-3, 2]), Answer::Expression("(x - 3)(x + 2)".into()));
        assert_eq!(solve(Subtype::DifferenceOfSquares, &[4]), Answer::Expression("(x - 4)(x + 4)".into()));
    }

    #[test]
    fn complex_arithmetic() {
        assert_eq!(solve(Subtype::ComplexMultiply, &[1, 2, 3, -1]), Answer::Expression("5 + 5i".into()));
        assert_eq!(solve(Subtype::ComplexAdd, &[1, 2, 3, -2]), Answer::Expression("4".into()));
        assert_eq!(solve(Subtype::ComplexModulusSquared, &[3, 4]), Answer::Integer(25));
    }

    #[test]
    fn root_count_matches_discriminant() {
        assert_eq!(solve(Subtype::QuadraticRootCount, &[1, 2, 1]), Answer::Integer(1));
        assert_eq!(solve(Subtype::QuadraticRootCount, &[1, 0, 1]), Answer::Integer(0));
        assert_eq!(solve(Subtype::Discriminant, &[1, 5, 6]), Answer::Integer(1));
    }

    #[test]
    fn factoring_operands_are_sorted() {
        let mut rng = RngSource::seeded(14);
        let params = GenParams::new().a(-9, 9).b(-9, 9).negative();
        for _ in 0..100 {
            let d = construct(Subtype::FactorQuadratic, &params, &mut rng, &EngineSettings::default());
            assert!(d.operands[0] <= d.operands[1]);
            assert!(d.operands.iter().all(|v| *v != 0));
        }
    }
}
