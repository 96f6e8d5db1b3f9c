//! Square roots and Pythagoras.

use crate::config::EngineSettings;
use crate::curriculum_engine::{
    arithmetic::isqrt,
    families::{Family, Layout},
    helpers::{draw, op, Draft},
    models::{Answer, DisplayFormat, GenParams},
    random::{pick, RandomSource},
    subtype::Subtype,
};

pub static FAMILY: Family = Family {
    name: "radicals",
    construct,
    solve,
    render,
    micro,
    walkthrough,
    layout,
};

const TRIPLES: [(i64, i64, i64); 6] = [(3, 4, 5), (5, 12, 13), (8, 15, 17), (7, 24, 25), (20, 21, 29), (9, 40, 41)];
const SQUARE_FREE: [i64; 8] = [2, 3, 5, 6, 7, 10, 11, 13];

fn construct(
    subtype: Subtype,
    params: &GenParams,
    random: &mut dyn RandomSource,
    _settings: &EngineSettings,
) -> Draft {
    match subtype {
        // [n^2]
        Subtype::PerfectSquareRoot => {
            let n = draw(random, params.range_a);
            Draft::new(vec![n * n])
        }
        // [k^2 · m], with m square-free
        Subtype::SimplifySquareRoot => {
            let k = random.next_int(params.range_a.0.max(2), params.range_a.1.max(2));
            let m = pick(random, &SQUARE_FREE);
            Draft::new(vec![k * k * m])
        }
        // [a, b] legs, or [a, c] leg and hypotenuse
        _ => {
            let (a, b, c) = pick(random, &TRIPLES);
            let k = random.next_int(params.range_a.0.max(1), params.range_a.1.clamp(1, 4));
            if subtype == Subtype::PythagoreanHypotenuse {
                Draft::new(vec![a * k, b * k])
            } else {
                Draft::new(vec![a * k, c * k])
            }
        }
    }
}

/// `(k, m)` with `n = k^2 · m` and `m` square-free.
fn split_square(n: i64) -> (i64, i64) {
    (1..=isqrt(n))
        .rev()
        .find(|k| n % (k * k) == 0)
        .map(|k| (k, n / (k * k)))
        .unwrap_or((1, n))
}

fn solve(subtype: Subtype, ops: &[i64]) -> Answer {
    let (a, b) = (op(ops, 0), op(ops, 1));
    match subtype {
        Subtype::PerfectSquareRoot => Answer::Integer(isqrt(a)),
        Subtype::SimplifySquareRoot => {
            let (k, m) = split_square(a);
            Answer::Expression(if m == 1 { k.to_string() } else { format!("{k}√{m}") })
        }
        Subtype::PythagoreanHypotenuse => Answer::Integer(isqrt(a * a + b * b)),
        _ => Answer::Integer(isqrt(b * b - a * a)),
    }
}

fn render(subtype: Subtype, ops: &[i64]) -> String {
    let (a, b) = (op(ops, 0), op(ops, 1));
    match subtype {
        Subtype::PerfectSquareRoot => format!("√{a} = ?"),
        Subtype::SimplifySquareRoot => format!("Simplify √{a}."),
        Subtype::PythagoreanHypotenuse => {
            format!("A right triangle has legs {a} and {b}. How long is the hypotenuse?")
        }
        _ => format!("A right triangle has a leg of {a} and a hypotenuse of {b}. How long is the other leg?"),
    }
}

fn micro(subtype: Subtype, ops: &[i64]) -> String {
    match subtype {
        Subtype::PerfectSquareRoot => format!("Which number times itself makes {}?", op(ops, 0)),
        Subtype::SimplifySquareRoot => format!("Find the largest perfect square that divides {}.", op(ops, 0)),
        Subtype::PythagoreanHypotenuse => "a^2 + b^2 = c^2.".to_string(),
        _ => "c^2 - a^2 = b^2.".to_string(),
    }
}

fn walkthrough(subtype: Subtype, ops: &[i64]) -> Vec<String> {
    let (a, b) = (op(ops, 0), op(ops, 1));
    let answer = solve(subtype, ops);
    let mut steps = match subtype {
        Subtype::PerfectSquareRoot => {
            let r = isqrt(a);
            vec![format!("{r} × {r} = {a}.")]
        }
        Subtype::SimplifySquareRoot => {
            let (k, m) = split_square(a);
            vec![
                format!("{a} = {} × {m}, and {} is a perfect square.", k * k, k * k),
                format!("√{a} = √{} × √{m} = {k}√{m}.", k * k),
                format!("{m} has no square factor other than 1."),
            ]
        }
        Subtype::PythagoreanHypotenuse => vec![
            format!("{a}^2 + {b}^2 = {} + {} = {}.", a * a, b * b, a * a + b * b),
            format!("Take the square root of {}.", a * a + b * b),
        ],
        _ => vec![
            format!("{b}^2 - {a}^2 = {} - {} = {}.", b * b, a * a, b * b - a * a),
            format!("Take the square root of {}.", b * b - a * a),
        ],
    };
    steps.push(format!("Answer: {answer}."));
    steps
}

fn layout(subtype: Subtype) -> Layout {
    match subtype {
        Subtype::PythagoreanHypotenuse | Subtype::PythagoreanLeg => Layout::Fixed(DisplayFormat::Geometry),
        _ => Layout::Fixed(DisplayFormat::Expression),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum_engine::{arithmetic::is_square_free, random::RngSource};

    #[test]
    fn simplify_pulls_out_the_largest_square() {
        assert!(SQUARE_FREE.iter().all(|m| is_square_free(*m)));
        assert_eq!(solve(Subtype::SimplifySquareRoot, &[72]), Answer::Expression("6√2".into()));
        assert_eq!(solve(Subtype::SimplifySquareRoot, &[49]), Answer::Expression("7".into()));
    }

    #[test]
    fn triangles_are_integral() {
        let mut rng = RngSource::seeded(10);
        let params = GenParams::new().a(1, 3);
        for _ in 0..100 {
            for subtype in [Subtype::PythagoreanHypotenuse, Subtype::PythagoreanLeg] {
                let d = construct(subtype, &params, &mut rng, &EngineSettings::default());
                let Answer::Integer(x) = solve(subtype, &d.operands) else { panic!("integer answer") };
                let (p, q) = (d.operands[0], d.operands[1]);
                if subtype == Subtype::PythagoreanHypotenuse {
                    assert_eq!(p * p + q * q, x * x);
                } else {
                    assert_eq!(p * p + x * x, q * q);
                }
            }
        }
    }
}
