//! Powers, exponent laws and logarithms.
//!
//! Logarithm problems are built from exact powers so every answer is an
//! integer exponent.

use crate::config::EngineSettings;
use crate::curriculum_engine::{
    arithmetic::{format_poly, ipow},
    families::{Family, Layout},
    helpers::{draw, op, Draft},
    models::{Answer, DisplayFormat, GenParams},
    random::RandomSource,
    subtype::Subtype,
};

pub static FAMILY: Family = Family {
    name: "exponents",
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
    let base = random.next_int(params.range_a.0.max(2), params.range_a.1.max(2));
    let exp = || (params.range_b.0.max(1), params.range_b.1.max(1));
    match subtype {
        Subtype::ExponentProduct | Subtype::ExponentPower => {
            Draft::new(vec![draw(random, exp()), draw(random, exp())])
        }
        Subtype::ExponentQuotient => {
            let n = draw(random, exp());
            Draft::new(vec![n + draw(random, exp()), n])
        }
        Subtype::LogProductRule => Draft::new(vec![base, draw(random, exp()), draw(random, exp())]),
        // [base, exponent]
        _ => Draft::new(vec![base, draw(random, exp())]),
    }
}

fn power_of_x(e: i64) -> String {
    format_poly(&[(1, e)], "x")
}

fn solve(subtype: Subtype, ops: &[i64]) -> Answer {
    let (a, b) = (op(ops, 0), op(ops, 1));
    match subtype {
        Subtype::EvaluatePower => Answer::Integer(ipow(a, b)),
        Subtype::ExponentProduct => Answer::Expression(power_of_x(a + b)),
        Subtype::ExponentQuotient => Answer::Expression(power_of_x(a - b)),
        Subtype::ExponentPower => Answer::Expression(power_of_x(a * b)),
        Subtype::LogProductRule => Answer::Integer(b + op(ops, 2)),
        // Exponential equations and log evaluation both recover the exponent.
        _ => Answer::Integer(b),
    }
}

fn render(subtype: Subtype, ops: &[i64]) -> String {
    let (a, b) = (op(ops, 0), op(ops, 1));
    match subtype {
        Subtype::EvaluatePower => format!("{a}^{b} = ?"),
        Subtype::ExponentProduct => format!("Simplify x^{a} · x^{b}."),
        Subtype::ExponentQuotient => format!("Simplify x^{a} ÷ x^{b}."),
        Subtype::ExponentPower => format!("Simplify (x^{a})^{b}."),
        Subtype::ExponentialEquation => format!("Solve {a}^x = {}.", ipow(a, b)),
        Subtype::LogEvaluate => format!("log_{a}({}) = ?", ipow(a, b)),
        _ => format!("log_{a}({}) + log_{a}({}) = ?", ipow(a, b), ipow(a, op(ops, 2))),
    }
}

fn micro(subtype: Subtype, ops: &[i64]) -> String {
    let a = op(ops, 0);
    match subtype {
        Subtype::EvaluatePower => format!("Multiply {a} by itself {} times.", op(ops, 1)),
        Subtype::ExponentProduct => "Same base, multiplying: add the exponents.".to_string(),
        Subtype::ExponentQuotient => "Same base, dividing: subtract the exponents.".to_string(),
        Subtype::ExponentPower => "A power of a power: multiply the exponents.".to_string(),
        Subtype::ExponentialEquation | Subtype::LogEvaluate => {
            format!("How many times do you multiply {a} by itself to get there?")
        }
        _ => "log(p) + log(q) = log(pq).".to_string(),
    }
}

fn walkthrough(subtype: Subtype, ops: &[i64]) -> Vec<String> {
    let (a, b) = (op(ops, 0), op(ops, 1));
    let answer = solve(subtype, ops);
    let mut steps = match subtype {
        Subtype::EvaluatePower => {
            let chain = vec![a.to_string(); b.max(1) as usize].join(" × ");
            vec![format!("{a}^{b} = {chain}.")]
        }
        Subtype::ExponentProduct => vec![format!("Add the exponents: {a} + {b} = {}.", a + b)],
        Subtype::ExponentQuotient => vec![format!("Subtract the exponents: {a} - {b} = {}.", a - b)],
        Subtype::ExponentPower => vec![format!("Multiply the exponents: {a} × {b} = {}.", a * b)],
        Subtype::ExponentialEquation | Subtype::LogEvaluate => vec![
            format!("Write {} as a power of {a}.", ipow(a, b)),
            format!("{} = {a}^{b}.", ipow(a, b)),
        ],
        _ => {
            let c = op(ops, 2);
            vec![
                format!("Combine: log_{a}({} × {}) = log_{a}({}).", ipow(a, b), ipow(a, c), ipow(a, b + c)),
                format!("{} = {a}^{}.", ipow(a, b + c), b + c),
            ]
        }
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
    fn laws_of_exponents() {
        assert_eq!(solve(Subtype::ExponentProduct, &[3, 4]), Answer::Expression("x^7".into()));
        assert_eq!(solve(Subtype::ExponentQuotient, &[5, 4]), Answer::Expression("x".into()));
        assert_eq!(solve(Subtype::EvaluatePower, &[2, 10]), Answer::Integer(1024));
    }

    #[test]
    fn logs_are_exact() {
        assert_eq!(render(Subtype::LogEvaluate, &[3, 4]), "log_3(81) = ?");
        assert_eq!(render(Subtype::LogProductRule, &[2, 2, 3]), "log_2(4) + log_2(8) = ?");
        assert_eq!(solve(Subtype::LogProductRule, &[2, 2, 3]), Answer::Integer(5));
    }

    #[test]
    fn quotients_keep_a_positive_exponent() {
        let mut rng = RngSource::seeded(30);
        let params = GenParams::new().a(2, 5).b(1, 6);
        for _ in 0..100 {
            let d = construct(Subtype::ExponentQuotient, &params, &mut rng, &EngineSettings::default());
            assert!(d.operands[0] > d.operands[1]);
        }
    }
}
