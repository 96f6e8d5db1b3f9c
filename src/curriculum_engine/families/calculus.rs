//! Limits, derivatives and integrals of simple polynomials.
//!
//! Integrands are generated with coefficients pre-scaled (`2a`, `3k`,
//! `k(n + 1)`) so every antiderivative and definite integral has integer
//! coefficients.

use crate::config::EngineSettings;
use crate::curriculum_engine::{
    arithmetic::{format_poly, ipow, paren},
    families::{Family, Layout},
    helpers::{draw, draw_nonzero, op, Draft},
    models::{Answer, DisplayFormat, GenParams},
    random::RandomSource,
    subtype::Subtype,
};

pub static FAMILY: Family = Family {
    name: "calculus",
    construct,
    solve,
    render,
    micro,
    walkthrough,
    layout,
};

fn power(random: &mut dyn RandomSource) -> i64 {
    random.next_int(2, 5)
}

fn construct(
    subtype: Subtype,
    params: &GenParams,
    random: &mut dyn RandomSource,
    _settings: &EngineSettings,
) -> Draft {
    let (a, b) = (params.range_a, params.range_b);
    let ops = match subtype {
        // [a, b, c, x0]
        Subtype::PolynomialLimit => vec![draw_nonzero(random, a), draw(random, a), draw(random, a), draw(random, b)],
        // [r, s]: (x - r)(x + s) / (x - r)
        Subtype::RationalLimit => vec![draw_nonzero(random, b), draw(random, b)],
        // [a, n, b]: ax^n + bx
        Subtype::PowerRuleDerivative => vec![draw_nonzero(random, a), power(random), draw(random, a)],
        // [a, n, b, x0]
        Subtype::DerivativeAtPoint => {
            vec![draw_nonzero(random, a), power(random), draw(random, a), draw(random, b)]
        }
        // [a, b, c, d]: (ax + b)(cx + d)
        Subtype::ProductRuleDerivative => vec![
            draw_nonzero(random, a),
            draw(random, b),
            draw_nonzero(random, a),
            draw(random, b),
        ],
        // [a, b, n]: (ax + b)^n
        Subtype::ChainRuleDerivative => vec![draw_nonzero(random, a), draw_nonzero(random, b), power(random)],
        // [k, n]: integrand k(n + 1)x^n
        Subtype::IndefinitePowerIntegral => vec![draw_nonzero(random, a), random.next_int(1, 4)],
        // [a, b, lo, hi]: integrand 2ax + b
        Subtype::DefiniteIntegral => {
            let lo = draw(random, b);
            vec![draw_nonzero(random, a), draw(random, a), lo, lo + random.next_int(1, 4)]
        }
        // [k, h]: area under 3kx^2 on [0, h]
        _ => vec![random.next_int(a.0.max(1), a.1.max(1)), random.next_int(1, 4)],
    };
    Draft::new(ops)
}

fn solve(subtype: Subtype, ops: &[i64]) -> Answer {
    let (a, b, c, d) = (op(ops, 0), op(ops, 1), op(ops, 2), op(ops, 3));
    match subtype {
        Subtype::PolynomialLimit => Answer::Integer(a * d * d + b * d + c),
        Subtype::RationalLimit => Answer::Integer(a + b),
        Subtype::PowerRuleDerivative => {
            Answer::Expression(format_poly(&[(a * b, b - 1), (c, 0)], "x"))
        }
        Subtype::DerivativeAtPoint => Answer::Integer(a * b * ipow(d, b - 1) + c),
        Subtype::ProductRuleDerivative => {
            Answer::Expression(format_poly(&[(2 * a * c, 1), (a * d + b * c, 0)], "x"))
        }
        Subtype::ChainRuleDerivative => {
            let inner = format_poly(&[(a, 1), (b, 0)], "x");
            let outer = c * a;
            Answer::Expression(if c - 1 == 1 {
                format!("{outer}({inner})")
            } else {
                format!("{outer}({inner})^{}", c - 1)
            })
        }
        Subtype::IndefinitePowerIntegral => {
            Answer::Expression(format!("{} + C", format_poly(&[(a, b + 1)], "x")))
        }
        Subtype::DefiniteIntegral => Answer::Integer(a * (d * d - c * c) + b * (d - c)),
        _ => Answer::Integer(a * ipow(b, 3)),
    }
}

fn render(subtype: Subtype, ops: &[i64]) -> String {
    let (a, b, c, d) = (op(ops, 0), op(ops, 1), op(ops, 2), op(ops, 3));
    match subtype {
        Subtype::PolynomialLimit => format!(
            "Find the limit as x → {d} of {}.",
            format_poly(&[(a, 2), (b, 1), (c, 0)], "x")
        ),
        Subtype::RationalLimit => format!(
            "Find the limit as x → {a} of ({}) / ({}).",
            format_poly(&[(1, 2), (b - a, 1), (-a * b, 0)], "x"),
            format_poly(&[(1, 1), (-a, 0)], "x")
        ),
        Subtype::PowerRuleDerivative => {
            format!("Differentiate f(x) = {}.", format_poly(&[(a, b), (c, 1)], "x"))
        }
        Subtype::DerivativeAtPoint => format!(
            "f(x) = {}. Find f'({d}).",
            format_poly(&[(a, b), (c, 1)], "x")
        ),
        Subtype::ProductRuleDerivative => format!(
            "Differentiate f(x) = ({})({}).",
            format_poly(&[(a, 1), (b, 0)], "x"),
            format_poly(&[(c, 1), (d, 0)], "x")
        ),
        Subtype::ChainRuleDerivative => {
            format!("Differentiate f(x) = ({})^{c}.", format_poly(&[(a, 1), (b, 0)], "x"))
        }
        Subtype::IndefinitePowerIntegral => {
            format!("Find ∫ {} dx.", format_poly(&[(a * (b + 1), b)], "x"))
        }
        Subtype::DefiniteIntegral => format!(
            "Evaluate ∫ from {c} to {d} of ({}) dx.",
            format_poly(&[(2 * a, 1), (b, 0)], "x")
        ),
        _ => format!(
            "Find the area under y = {} between x = 0 and x = {b}.",
            format_poly(&[(3 * a, 2)], "x")
        ),
    }
}

fn micro(subtype: Subtype, ops: &[i64]) -> String {
    match subtype {
        Subtype::PolynomialLimit => "Polynomials are continuous: substitute directly.".to_string(),
        Subtype::RationalLimit => format!("Factor the top; the (x - {}) cancels.", op(ops, 0)),
        Subtype::PowerRuleDerivative | Subtype::DerivativeAtPoint => {
            "Bring the power down and reduce it by one.".to_string()
        }
        Subtype::ProductRuleDerivative => "(uv)' = u'v + uv'.".to_string(),
        Subtype::ChainRuleDerivative => "Differentiate the outside, then multiply by the inside's derivative.".to_string(),
        Subtype::IndefinitePowerIntegral => "Raise the power by one and divide by the new power.".to_string(),
        _ => "Find the antiderivative, then subtract its values at the limits.".to_string(),
    }
}

fn walkthrough(subtype: Subtype, ops: &[i64]) -> Vec<String> {
    let (a, b, c, d) = (op(ops, 0), op(ops, 1), op(ops, 2), op(ops, 3));
    let answer = solve(subtype, ops);
    let mut steps = match subtype {
        Subtype::PolynomialLimit => vec![format!(
            "Substitute x = {d}: {a}×{}^2 + {b}×{} + {c}.",
            paren(d),
            paren(d)
        )],
        Subtype::RationalLimit => vec![
            format!(
                "Factor: ({})({}).",
                format_poly(&[(1, 1), (-a, 0)], "x"),
                format_poly(&[(1, 1), (b, 0)], "x")
            ),
            format!("Cancel (x - {a}) and substitute x = {a}."),
        ],
        Subtype::PowerRuleDerivative | Subtype::DerivativeAtPoint => {
            let mut s = vec![
                format!("d/dx {} = {}.", format_poly(&[(a, b)], "x"), format_poly(&[(a * b, b - 1)], "x")),
                format!("d/dx {} = {c}.", format_poly(&[(c, 1)], "x")),
            ];
            if subtype == Subtype::DerivativeAtPoint {
                s.push(format!("Substitute x = {d}."));
            }
            s
        }
        Subtype::ProductRuleDerivative => vec![
            format!("u = {}, u' = {a}.", format_poly(&[(a, 1), (b, 0)], "x")),
            format!("v = {}, v' = {c}.", format_poly(&[(c, 1), (d, 0)], "x")),
            "u'v + uv', then collect like terms.".to_string(),
        ],
        Subtype::ChainRuleDerivative => vec![
            format!("Outside: {c}(…)^{}.", c - 1),
            format!("Inside derivative: {a}."),
            format!("Multiply: {c} × {a} = {}.", c * a),
        ],
        Subtype::IndefinitePowerIntegral => vec![
            format!("Raise the power: x^{b} → x^{}.", b + 1),
            format!("Divide {} by {}.", a * (b + 1), b + 1),
            "Add the constant of integration.".to_string(),
        ],
        Subtype::DefiniteIntegral => vec![
            format!("Antiderivative: {}.", format_poly(&[(a, 2), (b, 1)], "x")),
            format!("Evaluate at {d} and at {c}, then subtract."),
        ],
        _ => vec![
            format!("Antiderivative: {}.", format_poly(&[(a, 3)], "x")),
            format!("At x = {b}: {a} × {b}^3. At x = 0: 0."),
        ],
    };
    steps.push(format!("Answer: {answer}."));
    steps
}

fn layout(subtype: Subtype) -> Layout {
    match subtype {
        Subtype::AreaUnderCurve => Layout::Fixed(DisplayFormat::Graph),
        _ => Layout::Fixed(DisplayFormat::Expression),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivatives() {
        assert_eq!(solve(Subtype::PowerRuleDerivative, &[3, 4, -2]), Answer::Expression("12x^3 - 2".into()));
        assert_eq!(solve(Subtype::DerivativeAtPoint, &[1, 3, 1, 2]), Answer::Integer(13));
        assert_eq!(solve(Subtype::ProductRuleDerivative, &[1, 2, 1, 3]), Answer::Expression("2x + 5".into()));
        assert_eq!(solve(Subtype::ChainRuleDerivative, &[2, 1, 3]), Answer::Expression("6(2x + 1)^2".into()));
    }

    #[test]
    fn limits_and_integrals() {
        assert_eq!(render(Subtype::RationalLimit, &[2, 3]), "Find the limit as x → 2 of (x^2 + x - 6) / (x - 2).");
        assert_eq!(solve(Subtype::RationalLimit, &[2, 3]), Answer::Integer(5));
        assert_eq!(solve(Subtype::IndefinitePowerIntegral, &[2, 2]), Answer::Expression("2x^3 + C".into()));
        assert_eq!(render(Subtype::IndefinitePowerIntegral, &[2, 2]), "Find ∫ 6x^2 dx.");
        assert_eq!(solve(Subtype::DefiniteIntegral, &[1, 0, 1, 3]), Answer::Integer(8));
        assert_eq!(solve(Subtype::AreaUnderCurve, &[1, 2]), Answer::Integer(8));
    }
}
