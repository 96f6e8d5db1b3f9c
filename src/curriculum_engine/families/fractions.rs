//! Fraction topics.
//!
//! ## Operand layout
//!
//! | subtype | operands |
//! |---|---|
//! | equivalent fraction | `[n, d, k]`, asks for the numerator over `d·k` |
//! | reduce | `[n, d]` (unreduced) |
//! | improper → mixed | `[n, d]` |
//! | mixed → improper | `[whole, n, d]` |
//! | mixed number add | `[w1, n1, w2, n2, d]` |
//! | fraction of whole | `[n, d, whole]` |
//! | binary operations, compare | `[n1, d1, n2, d2]` |
//!
//! Denominators are drawn from `range_b`, numerators from `range_a`.

use crate::config::EngineSettings;
use crate::curriculum_engine::{
    arithmetic::{gcd, lcm},
    families::{Family, Layout},
    helpers::{draw, op, Draft},
    models::{Answer, DisplayFormat, Fraction, GenParams},
    random::{rejection_sample, RandomSource},
    subtype::Subtype,
};

pub static FAMILY: Family = Family {
    name: "fractions",
    construct,
    solve,
    render,
    micro,
    walkthrough,
    layout,
};

fn den(random: &mut dyn RandomSource, params: &GenParams) -> i64 {
    draw(random, params.range_b).max(2)
}

/// A proper numerator for `d`, drawn from `range_a` and clamped below `d`.
fn proper(random: &mut dyn RandomSource, params: &GenParams, d: i64) -> i64 {
    random.next_int(params.range_a.0.clamp(1, d - 1), params.range_a.1.clamp(1, d - 1))
}

fn construct(
    subtype: Subtype,
    params: &GenParams,
    random: &mut dyn RandomSource,
    settings: &EngineSettings,
) -> Draft {
    match subtype {
        Subtype::EquivalentFraction => {
            let d = den(random, params);
            let n = proper(random, params, d);
            Draft::new(vec![n, d, random.next_int(2, 5)])
        }
        Subtype::ReduceFraction => {
            // Pick the reduced form first, then scale it up.
            let d = den(random, params);
            let n = proper(random, params, d);
            let g = gcd(n, d).max(1);
            let k = random.next_int(2, 6);
            Draft::new(vec![n / g * k, d / g * k])
        }
        Subtype::ImproperToMixed => {
            let d = den(random, params);
            let whole = random.next_int(1, 5);
            let n = proper(random, params, d);
            Draft::new(vec![whole * d + n, d])
        }
        Subtype::MixedToImproper => {
            let d = den(random, params);
            Draft::new(vec![random.next_int(1, 5), proper(random, params, d), d])
        }
        Subtype::MixedNumberAdd => {
            let d = den(random, params);
            Draft::new(vec![
                random.next_int(1, 4),
                proper(random, params, d),
                random.next_int(1, 4),
                proper(random, params, d),
                d,
            ])
        }
        Subtype::FractionOfWhole => {
            let d = den(random, params);
            let n = proper(random, params, d);
            Draft::new(vec![n, d, d * random.next_int(1, 6)])
        }
        Subtype::FractionAddSameDen | Subtype::FractionSubSameDen => {
            let d = den(random, params).max(3);
            let mut a = proper(random, params, d);
            let mut b = proper(random, params, d);
            if subtype == Subtype::FractionSubSameDen && a < b {
                std::mem::swap(&mut a, &mut b);
            }
            Draft::new(vec![a, d, b, d])
        }
        Subtype::FractionAddUnlikeDen
        | Subtype::FractionSubUnlikeDen
        | Subtype::CompareFractions => {
            let sampled = rejection_sample(
                random,
                settings.max_rejection_attempts,
                |r| {
                    let (d1, d2) = (den(r, params), den(r, params));
                    vec![proper(r, params, d1), d1, proper(r, params, d2), d2]
                },
                |v| v[1] != v[3] && v[0] * v[3] != v[2] * v[1],
            );
            let mut draft = Draft::sampled(sampled);
            let o = &mut draft.operands;
            if subtype == Subtype::FractionSubUnlikeDen && o[0] * o[3] < o[2] * o[1] {
                o.swap(0, 2);
                o.swap(1, 3);
            }
            draft
        }
        _ => {
            let (d1, d2) = (den(random, params), den(random, params));
            Draft::new(vec![proper(random, params, d1), d1, proper(random, params, d2), d2])
        }
    }
}

fn frac(ops: &[i64], i: usize) -> Fraction {
    Fraction::new(op(ops, i), op(ops, i + 1).max(1))
}

/// `3 1/4`, `2`, or `3/4` for values below one.
pub(crate) fn mixed(f: Fraction) -> String {
    let (whole, rest) = (f.num / f.den, f.num % f.den);
    match (whole, rest) {
        (w, 0) => w.to_string(),
        (0, r) => format!("{r}/{}", f.den),
        (w, r) => format!("{w} {}/{}", r.abs(), f.den),
    }
}

fn combine(a: Fraction, b: Fraction, sign: i64) -> Fraction {
    Fraction::new(a.num * b.den + sign * b.num * a.den, a.den * b.den)
}

fn solve(subtype: Subtype, ops: &[i64]) -> Answer {
    match subtype {
        Subtype::EquivalentFraction => Answer::Integer(op(ops, 0) * op(ops, 2)),
        Subtype::ReduceFraction => Answer::Fraction(frac(ops, 0)),
        Subtype::ImproperToMixed => Answer::Text(mixed(frac(ops, 0))),
        Subtype::MixedToImproper => {
            let d = op(ops, 2).max(1);
            Answer::Fraction(Fraction::new(op(ops, 0) * d + op(ops, 1), d))
        }
        Subtype::MixedNumberAdd => {
            let d = op(ops, 4).max(1);
            let total = (op(ops, 0) + op(ops, 2)) * d + op(ops, 1) + op(ops, 3);
            Answer::Text(mixed(Fraction::new(total, d)))
        }
        Subtype::FractionOfWhole => Answer::Integer(op(ops, 2) / op(ops, 1).max(1) * op(ops, 0)),
        Subtype::FractionAddSameDen | Subtype::FractionAddUnlikeDen => {
            Answer::Fraction(combine(frac(ops, 0), frac(ops, 2), 1))
        }
        Subtype::FractionSubSameDen | Subtype::FractionSubUnlikeDen => {
            Answer::Fraction(combine(frac(ops, 0), frac(ops, 2), -1))
        }
        Subtype::FractionMultiply => {
            Answer::Fraction(Fraction::new(op(ops, 0) * op(ops, 2), op(ops, 1) * op(ops, 3)))
        }
        Subtype::FractionDivide => {
            Answer::Fraction(Fraction::new(op(ops, 0) * op(ops, 3), op(ops, 1) * op(ops, 2)))
        }
        _ => {
            let bigger = if op(ops, 0) * op(ops, 3) >= op(ops, 2) * op(ops, 1) { 0 } else { 2 };
            Answer::Text(format!("{}/{}", op(ops, bigger), op(ops, bigger + 1)))
        }
    }
}

fn raw(ops: &[i64], i: usize) -> String {
    format!("{}/{}", op(ops, i), op(ops, i + 1))
}

fn render(subtype: Subtype, ops: &[i64]) -> String {
    match subtype {
        Subtype::EquivalentFraction => {
            format!("{} = ?/{}", raw(ops, 0), op(ops, 1) * op(ops, 2))
        }
        Subtype::ReduceFraction  => format!("Write {} in lowest terms.", raw(ops, 0)),
        Subtype::ImproperToMixed => format!("Write {} as a mixed number.", raw(ops, 0)),
        Subtype::MixedToImproper => {
            format!("Write {} {} as an improper fraction.", op(ops, 0), raw(ops, 1))
        }
        Subtype::MixedNumberAdd => format!(
            "{} {}/{d} + {} {}/{d} = ?",
            op(ops, 0), op(ops, 1), op(ops, 2), op(ops, 3), d = op(ops, 4)
        ),
        Subtype::FractionOfWhole => format!("What is {} of {}?", raw(ops, 0), op(ops, 2)),
        Subtype::FractionAddSameDen | Subtype::FractionAddUnlikeDen => {
            format!("{} + {} = ?", raw(ops, 0), raw(ops, 2))
        }
        Subtype::FractionSubSameDen | Subtype::FractionSubUnlikeDen => {
            format!("{} - {} = ?", raw(ops, 0), raw(ops, 2))
        }
        Subtype::FractionMultiply => format!("{} × {} = ?", raw(ops, 0), raw(ops, 2)),
        Subtype::FractionDivide   => format!("{} ÷ {} = ?", raw(ops, 0), raw(ops, 2)),
        _ => format!("Which is bigger: {} or {}?", raw(ops, 0), raw(ops, 2)),
    }
}

fn micro(subtype: Subtype, ops: &[i64]) -> String {
    match subtype {
        Subtype::EquivalentFraction => format!("What was {} multiplied by to get the new denominator?", op(ops, 1)),
        Subtype::ReduceFraction => format!("Find a number that divides both {} and {}.", op(ops, 0), op(ops, 1)),
        Subtype::ImproperToMixed => format!("How many whole groups of {} fit into {}?", op(ops, 1), op(ops, 0)),
        Subtype::MixedToImproper => format!("Each whole is {d}/{d}.", d = op(ops, 2)),
        Subtype::MixedNumberAdd => "Add the whole numbers, then add the fractions.".to_string(),
        Subtype::FractionOfWhole => format!("Split {} into {} equal parts first.", op(ops, 2), op(ops, 1)),
        Subtype::FractionAddSameDen | Subtype::FractionSubSameDen => {
            "The denominators match, so only the numerators change.".to_string()
        }
        Subtype::FractionAddUnlikeDen | Subtype::FractionSubUnlikeDen => {
            format!("Find a common denominator for {} and {}.", op(ops, 1), op(ops, 3))
        }
        Subtype::FractionMultiply => "Multiply the tops together and the bottoms together.".to_string(),
        Subtype::FractionDivide => "Keep the first fraction, flip the second, then multiply.".to_string(),
        _ => "Rewrite both fractions over the same denominator, then compare.".to_string(),
    }
}

fn walkthrough(subtype: Subtype, ops: &[i64]) -> Vec<String> {
    let answer = solve(subtype, ops);
    let mut steps = match subtype {
        Subtype::EquivalentFraction => vec![
            format!("{} × {} = {}, so the denominator was multiplied by {}.", op(ops, 1), op(ops, 2), op(ops, 1) * op(ops, 2), op(ops, 2)),
            format!("Do the same to the numerator: {} × {}.", op(ops, 0), op(ops, 2)),
        ],
        Subtype::ReduceFraction => {
            let g = gcd(op(ops, 0), op(ops, 1));
            vec![
                format!("The greatest common factor of {} and {} is {g}.", op(ops, 0), op(ops, 1)),
                format!("Divide both by {g}: {}/{}.", op(ops, 0) / g.max(1), op(ops, 1) / g.max(1)),
            ]
        }
        Subtype::ImproperToMixed => vec![
            format!("{} ÷ {} = {} remainder {}.", op(ops, 0), op(ops, 1), op(ops, 0) / op(ops, 1).max(1), op(ops, 0) % op(ops, 1).max(1)),
            "The quotient is the whole part; the remainder stays over the denominator.".to_string(),
        ],
        Subtype::MixedToImproper => vec![
            format!("{} wholes are {} × {} = {} parts.", op(ops, 0), op(ops, 0), op(ops, 2), op(ops, 0) * op(ops, 2)),
            format!("Add the {} extra parts: {}.", op(ops, 1), op(ops, 0) * op(ops, 2) + op(ops, 1)),
        ],
        Subtype::MixedNumberAdd => vec![
            format!("Wholes: {} + {} = {}.", op(ops, 0), op(ops, 2), op(ops, 0) + op(ops, 2)),
            format!("Fractions: {}/{d} + {}/{d} = {}/{d}.", op(ops, 1), op(ops, 3), op(ops, 1) + op(ops, 3), d = op(ops, 4)),
            "Carry any whole from the fraction part into the wholes.".to_string(),
        ],
        Subtype::FractionOfWhole => {
            let part = op(ops, 2) / op(ops, 1).max(1);
            vec![
                format!("{} ÷ {} = {part}, so each part is {part}.", op(ops, 2), op(ops, 1)),
                format!("Take {} parts: {} × {part}.", op(ops, 0), op(ops, 0)),
            ]
        }
        Subtype::FractionAddUnlikeDen | Subtype::FractionSubUnlikeDen | Subtype::CompareFractions => {
            let common = lcm(op(ops, 1), op(ops, 3));
            let (m1, m2) = (common / op(ops, 1).max(1), common / op(ops, 3).max(1));
            vec![
                format!("The lowest common denominator of {} and {} is {common}.", op(ops, 1), op(ops, 3)),
                format!(
                    "{} = {}/{common} and {} = {}/{common}.",
                    raw(ops, 0), op(ops, 0) * m1, raw(ops, 2), op(ops, 2) * m2
                ),
                "Work with the numerators, keep the denominator, then simplify.".to_string(),
            ]
        }
        Subtype::FractionMultiply => vec![
            format!("Numerators: {} × {} = {}.", op(ops, 0), op(ops, 2), op(ops, 0) * op(ops, 2)),
            format!("Denominators: {} × {} = {}.", op(ops, 1), op(ops, 3), op(ops, 1) * op(ops, 3)),
            "Simplify the result.".to_string(),
        ],
        Subtype::FractionDivide => vec![
            format!("Flip {} to get {}/{}.", raw(ops, 2), op(ops, 3), op(ops, 2)),
            format!("Multiply: {} × {}/{}.", raw(ops, 0), op(ops, 3), op(ops, 2)),
            "Simplify the result.".to_string(),
        ],
        _ => vec![
            format!("Keep the denominator {}.", op(ops, 1)),
            format!("Numerators: {} and {}.", op(ops, 0), op(ops, 2)),
            "Simplify if you can.".to_string(),
        ],
    };
    steps.push(format!("Answer: {answer}."));
    steps
}

fn layout(subtype: Subtype) -> Layout {
    match subtype {
        Subtype::CompareFractions => Layout::Fixed(DisplayFormat::Matching),
        _                         => Layout::Fixed(DisplayFormat::Expression),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum_engine::random::RngSource;

    #[test]
    fn answers_are_reduced() {
        assert_eq!(solve(Subtype::FractionAddSameDen, &[1, 4, 1, 4]), Answer::Fraction(Fraction::new(1, 2)));
        assert_eq!(solve(Subtype::FractionSubUnlikeDen, &[3, 4, 1, 6]), Answer::Fraction(Fraction::new(7, 12)));
        assert_eq!(solve(Subtype::FractionDivide, &[1, 2, 3, 4]), Answer::Fraction(Fraction::new(2, 3)));
        assert_eq!(solve(Subtype::ImproperToMixed, &[11, 4]), Answer::Text("2 3/4".into()));
        assert_eq!(solve(Subtype::MixedNumberAdd, &[1, 3, 2, 2, 4]), Answer::Text("4 1/4".into()));
    }

    #[test]
    fn subtraction_never_goes_negative() {
        let mut rng = RngSource::seeded(21);
        let params = GenParams::new().a(1, 9).b(2, 10);
        for _ in 0..200 {
            for subtype in [Subtype::FractionSubSameDen, Subtype::FractionSubUnlikeDen] {
                let d = construct(subtype, &params, &mut rng, &EngineSettings::default());
                match solve(subtype, &d.operands) {
                    Answer::Fraction(f) => assert!(f.num >= 0, "{:?}", d.operands),
                    other => panic!("unexpected {other:?}"),
                }
            }
        }
    }

    #[test]
    fn reduce_fraction_is_never_already_reduced() {
        let mut rng = RngSource::seeded(2);
        let params = GenParams::new().a(1, 9).b(2, 10);
        for _ in 0..100 {
            let d = construct(Subtype::ReduceFraction, &params, &mut rng, &EngineSettings::default());
            assert!(gcd(d.operands[0], d.operands[1]) > 1);
        }
    }

    #[test]
    fn of_whole_divides_evenly() {
        assert_eq!(solve(Subtype::FractionOfWhole, &[3, 4, 20]), Answer::Integer(15));
        assert_eq!(render(Subtype::EquivalentFraction, &[2, 3, 4]), "2/3 = ?/12");
    }
}
