//! Linear equations, inequalities and functions.
//!
//! Every equation is built backwards from its solution, which is stored as
//! an operand, so the answer is integral by construction.

use crate::config::EngineSettings;
use crate::curriculum_engine::{
    arithmetic::{format_point, format_poly, paren, shifted},
    families::{Family, Layout},
    helpers::{draw, draw_nonzero, op, Draft},
    models::{Answer, DisplayFormat, Fraction, GenParams},
    random::{rejection_sample, RandomSource},
    subtype::Subtype,
};

pub static FAMILY: Family = Family {
    name: "equations",
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
    settings: &EngineSettings,
) -> Draft {
    let (a, b) = (params.range_a, params.range_b);
    match subtype {
        // [x, b]: x + b = x + b
        Subtype::OneStepEquation => Draft::new(vec![draw(random, a), draw_nonzero(random, b)]),
        // [a, b, x]
        Subtype::TwoStepEquation | Subtype::LinearInequality => {
            let coef = draw_nonzero(random, b);
            let coef = if params.allow_negative { coef } else { coef.abs().max(2) };
            Draft::new(vec![coef, draw_nonzero(random, b), draw(random, a)])
        }
        // [a, b, c, x] with a != c
        Subtype::EquationBothSides => {
            let left = draw_nonzero(random, b).abs().max(2);
            let mut right = random.next_int(1, left + 3);
            if right == left {
                right = left - 1;
            }
            Draft::new(vec![left, draw(random, b), right, draw(random, a)])
        }
        // [x, y, a1, b1, a2, b2] with a non-zero determinant
        Subtype::SimultaneousEquations => {
            let (x, y) = (draw(random, a), draw(random, a));
            let sampled = rejection_sample(
                random,
                settings.max_rejection_attempts,
                |r| vec![draw_nonzero(r, b), draw_nonzero(r, b), draw_nonzero(r, b), draw_nonzero(r, b)],
                |c| c[0] * c[3] - c[1] * c[2] != 0,
            );
            let degraded = sampled.degraded;
            let mut ops = vec![x, y];
            ops.extend(sampled.value);
            Draft { degraded, ..Draft::new(ops) }
        }
        // [m, c, x]
        Subtype::LinearFunctionValue | Subtype::InverseFunction => {
            Draft::new(vec![draw_nonzero(random, b), draw(random, b), draw(random, a)])
        }
        // [x1, y1, x2, y2], built from an integer slope
        Subtype::SlopeFromPoints => {
            let (x1, y1) = (draw(random, a), draw(random, a));
            let dx = draw_nonzero(random, (1, 6));
            let m = draw(random, b);
            Draft::new(vec![x1, y1, x1 + dx, y1 + m * dx])
        }
        // [a, b, c, d, x]: f(x) = ax + b, g(x) = cx + d
        Subtype::FunctionComposition => Draft::new(vec![
            draw_nonzero(random, b),
            draw(random, b),
            draw_nonzero(random, b),
            draw(random, b),
            draw(random, a),
        ]),
        // [a, h, k]: a(x - h)^2 + k
        _ => Draft::new(vec![draw_nonzero(random, (1, 3)), draw(random, a), draw(random, b)]),
    }
}

fn linear(m: i64, c: i64) -> String {
    format_poly(&[(m, 1), (c, 0)], "x")
}

fn solve(subtype: Subtype, ops: &[i64]) -> Answer {
    let (a, b, c) = (op(ops, 0), op(ops, 1), op(ops, 2));
    match subtype {
        Subtype::OneStepEquation => Answer::Integer(a),
        Subtype::TwoStepEquation => Answer::Integer(c),
        Subtype::EquationBothSides => Answer::Integer(op(ops, 3)),
        Subtype::SimultaneousEquations => Answer::Text(format!("x = {a}, y = {b}")),
        Subtype::LinearInequality => {
            let sign = if a > 0 { "<" } else { ">" };
            Answer::Text(format!("x {sign} {c}"))
        }
        Subtype::LinearFunctionValue => Answer::Integer(a * c + b),
        Subtype::InverseFunction => Answer::Integer(c),
        Subtype::SlopeFromPoints => Answer::Fraction(Fraction::new(op(ops, 3) - b, c - a)),
        Subtype::FunctionComposition => {
            let inner = c * op(ops, 4) + op(ops, 3);
            Answer::Integer(a * inner + b)
        }
        _ => Answer::Text(format_point(b, c)),
    }
}

fn render(subtype: Subtype, ops: &[i64]) -> String {
    let (a, b, c) = (op(ops, 0), op(ops, 1), op(ops, 2));
    match subtype {
        Subtype::OneStepEquation => format!("Solve {} = {}.", shifted("x", b), a + b),
        Subtype::TwoStepEquation => format!("Solve {} = {}.", linear(a, b), a * c + b),
        Subtype::EquationBothSides => {
            let x = op(ops, 3);
            format!("Solve {} = {}.", linear(a, b), linear(c, a * x + b - c * x))
        }
        Subtype::SimultaneousEquations => {
            let (a1, b1, a2, b2) = (c, op(ops, 3), op(ops, 4), op(ops, 5));
            format!(
                "Solve {} = {} and {} = {}.",
                format_poly(&[(a1, 1)], "x") + &signed_y(b1),
                a1 * a + b1 * b,
                format_poly(&[(a2, 1)], "x") + &signed_y(b2),
                a2 * a + b2 * b
            )
        }
        Subtype::LinearInequality => format!("Solve {} < {}.", linear(a, b), a * c + b),
        Subtype::LinearFunctionValue => format!("f(x) = {}. Find f({c}).", linear(a, b)),
        Subtype::InverseFunction => format!("f(x) = {}. Find f⁻¹({}).", linear(a, b), a * c + b),
        Subtype::SlopeFromPoints => format!(
            "Find the slope of the line through {} and {}.",
            format_point(a, b),
            format_point(c, op(ops, 3))
        ),
        Subtype::FunctionComposition => format!(
            "f(x) = {} and g(x) = {}. Find f(g({})).",
            linear(a, b),
            linear(c, op(ops, 3)),
            op(ops, 4)
        ),
        _ => format!(
            "Find the vertex of y = {}.",
            format_poly(&[(a, 2), (-2 * a * b, 1), (a * b * b + c, 0)], "x")
        ),
    }
}

fn signed_y(coef: i64) -> String {
    let body = if coef.abs() == 1 { "y".to_string() } else { format!("{}y", coef.abs()) };
    if coef < 0 { format!(" - {body}") } else { format!(" + {body}") }
}

fn micro(subtype: Subtype, ops: &[i64]) -> String {
    let (a, b) = (op(ops, 0), op(ops, 1));
    match subtype {
        Subtype::OneStepEquation => format!("Undo the {} on both sides.", if b >= 0 { "+" } else { "-" }),
        Subtype::TwoStepEquation => "Undo the addition first, then the multiplication.".to_string(),
        Subtype::EquationBothSides => "Collect the x terms on one side first.".to_string(),
        Subtype::SimultaneousEquations => "Eliminate one letter by scaling and subtracting the equations.".to_string(),
        Subtype::LinearInequality if a < 0 => "Dividing by a negative flips the inequality sign.".to_string(),
        Subtype::LinearInequality => "Solve it like an equation, keeping the sign.".to_string(),
        Subtype::LinearFunctionValue => format!("Replace x with {}.", paren(op(ops, 2))),
        Subtype::InverseFunction => "Set f(x) equal to the value and solve for x.".to_string(),
        Subtype::SlopeFromPoints => "Slope is change in y over change in x.".to_string(),
        Subtype::FunctionComposition => "Work from the inside out: g first, then f.".to_string(),
        _ => format!("Complete the square: take out the factor {a} first."),
    }
}

fn walkthrough(subtype: Subtype, ops: &[i64]) -> Vec<String> {
    let (a, b, c) = (op(ops, 0), op(ops, 1), op(ops, 2));
    let answer = solve(subtype, ops);
    let mut steps = match subtype {
        Subtype::OneStepEquation => vec![
            format!("Subtract {} from both sides.", paren(b)),
            format!("x = {} - {} = {a}.", a + b, paren(b)),
        ],
        Subtype::TwoStepEquation | Subtype::LinearInequality => vec![
            format!("Subtract {} from both sides: {a}x = {}.", paren(b), a * c),
            format!("Divide both sides by {}.", paren(a)),
        ],
        Subtype::EquationBothSides => {
            let x = op(ops, 3);
            let d = a * x + b - c * x;
            vec![
                format!("Subtract {c}x from both sides: {}x + {} = {d}.", a - c, paren(b)),
                format!("Subtract {}: {}x = {}.", paren(b), a - c, d - b),
                format!("Divide by {}.", paren(a - c)),
            ]
        }
        Subtype::SimultaneousEquations => vec![
            "Multiply each equation so one letter has matching coefficients.".to_string(),
            "Subtract to eliminate that letter, then solve for the other.".to_string(),
            "Substitute back to find the first letter.".to_string(),
        ],
        Subtype::LinearFunctionValue => vec![
            format!("f({c}) = {a} × {} + {}.", paren(c), paren(b)),
            format!("= {} + {}.", a * c, paren(b)),
        ],
        Subtype::InverseFunction => vec![
            format!("Set {} = {}.", linear(a, b), a * c + b),
            format!("Subtract {}: {a}x = {}.", paren(b), a * c),
            format!("Divide by {}.", paren(a)),
        ],
        Subtype::SlopeFromPoints => vec![
            format!("Change in y: {} - {} = {}.", op(ops, 3), paren(b), op(ops, 3) - b),
            format!("Change in x: {c} - {} = {}.", paren(a), c - a),
            "Divide the change in y by the change in x.".to_string(),
        ],
        Subtype::FunctionComposition => {
            let x = op(ops, 4);
            let inner = c * x + op(ops, 3);
            vec![
                format!("g({x}) = {c} × {} + {} = {inner}.", paren(x), paren(op(ops, 3))),
                format!("f({inner}) = {a} × {} + {}.", paren(inner), paren(b)),
            ]
        }
        _ => vec![
            format!("Factor out {a} and complete the square: {a}({})^2 + {}.", shifted("x", -b), paren(c)),
            format!("The vertex is at x = {b}, y = {c}."),
        ],
    };
    steps.push(format!("Answer: {answer}."));
    steps
}

fn layout(subtype: Subtype) -> Layout {
    match subtype {
        Subtype::LinearFunctionValue
        | Subtype::SlopeFromPoints
        | Subtype::FunctionComposition
        | Subtype::InverseFunction
        | Subtype::QuadraticVertex => Layout::Fixed(DisplayFormat::Graph),
        _ => Layout::Fixed(DisplayFormat::Expression),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum_engine::random::RngSource;

    #[test]
    fn equations_solve_back_to_their_seed() {
        assert_eq!(render(Subtype::TwoStepEquation, &[3, 4, 5]), "Solve 3x + 4 = 19.");
        assert_eq!(solve(Subtype::TwoStepEquation, &[3, 4, 5]), Answer::Integer(5));
        assert_eq!(render(Subtype::EquationBothSides, &[5, 2, 3, 4]), "Solve 5x + 2 = 3x + 10.");
        assert_eq!(render(Subtype::OneStepEquation, &[7, -3]), "Solve x - 3 = 4.");
    }

    #[test]
    fn simultaneous_systems_are_solvable() {
        let mut rng = RngSource::seeded(17);
        let params = GenParams::new().a(-5, 5).b(-4, 4).negative();
        for _ in 0..100 {
            let d = construct(Subtype::SimultaneousEquations, &params, &mut rng, &EngineSettings::default());
            let o = &d.operands;
            assert_ne!(o[2] * o[5] - o[3] * o[4], 0, "{o:?}");
        }
        assert_eq!(
            render(Subtype::SimultaneousEquations, &[1, 2, 1, 1, 1, -1]),
            "Solve x + y = 3 and x - y = -1."
        );
    }

    #[test]
    fn vertex_and_slope() {
        assert_eq!(render(Subtype::QuadraticVertex, &[1, 2, -1]), "Find the vertex of y = x^2 - 4x + 3.");
        assert_eq!(solve(Subtype::QuadraticVertex, &[1, 2, -1]), Answer::Text("(2, -1)".into()));
        assert_eq!(solve(Subtype::SlopeFromPoints, &[1, 1, 3, 7]), Answer::Fraction(Fraction::new(3, 1)));
        assert_eq!(solve(Subtype::LinearInequality, &[-2, 1, 3]), Answer::Text("x > 3".into()));
    }
}
