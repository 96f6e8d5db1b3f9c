//! Signed-integer arithmetic. Operands are `[a, b]` (or `[a]` for absolute
//! value); negatives render in parentheses.

use crate::config::EngineSettings;
use crate::curriculum_engine::{
    arithmetic::paren,
    families::{Family, Layout},
    helpers::{draw, draw_nonzero, op, Draft},
    models::{Answer, DisplayFormat, GenParams},
    random::RandomSource,
    subtype::Subtype,
};

pub static FAMILY: Family = Family {
    name: "integers",
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
    match subtype {
        Subtype::AbsoluteValue => Draft::new(vec![draw_nonzero(random, params.range_a)]),
        Subtype::IntegerDivide => {
            let quotient = draw(random, params.range_a);
            let divisor = draw_nonzero(random, params.range_b);
            Draft::new(vec![quotient * divisor, divisor])
        }
        _ => Draft::new(vec![draw(random, params.range_a), draw(random, params.range_b)]),
    }
}

fn symbol(subtype: Subtype) -> &'static str {
    match subtype {
        Subtype::IntegerSubtract => "-",
        Subtype::IntegerMultiply => "×",
        Subtype::IntegerDivide   => "÷",
        _                        => "+",
    }
}

fn solve(subtype: Subtype, ops: &[i64]) -> Answer {
    let (a, b) = (op(ops, 0), op(ops, 1));
    Answer::Integer(match subtype {
        Subtype::AbsoluteValue   => a.abs(),
        Subtype::IntegerSubtract => a - b,
        Subtype::IntegerMultiply => a * b,
        Subtype::IntegerDivide   => if b == 0 { 0 } else { a / b },
        _                        => a + b,
    })
}

fn render(subtype: Subtype, ops: &[i64]) -> String {
    match subtype {
        Subtype::AbsoluteValue => format!("|{}| = ?", op(ops, 0)),
        _ => format!("{} {} {} = ?", op(ops, 0), symbol(subtype), paren(op(ops, 1))),
    }
}

fn micro(subtype: Subtype, ops: &[i64]) -> String {
    let b = op(ops, 1);
    match subtype {
        Subtype::AbsoluteValue => "Absolute value is the distance from zero.".to_string(),
        Subtype::IntegerSubtract => format!("Subtracting {} is the same as adding {}.", paren(b), paren(-b)),
        Subtype::IntegerMultiply | Subtype::IntegerDivide => {
            "Same signs give a positive result; different signs give a negative.".to_string()
        }
        _ => "Picture a number line: positive moves right, negative moves left.".to_string(),
    }
}

fn walkthrough(subtype: Subtype, ops: &[i64]) -> Vec<String> {
    let (a, b) = (op(ops, 0), op(ops, 1));
    let answer = solve(subtype, ops);
    match subtype {
        Subtype::AbsoluteValue => vec![
            format!("{a} is {} steps from zero.", a.abs()),
            format!("So |{a}| = {answer}."),
        ],
        Subtype::IntegerSubtract => vec![
            format!("Rewrite as addition: {a} + {}.", paren(-b)),
            format!("Start at {a} and move {} {}.", b.abs(), if -b >= 0 { "right" } else { "left" }),
            format!("So {a} - {} = {answer}.", paren(b)),
        ],
        Subtype::IntegerMultiply | Subtype::IntegerDivide => {
            let negative = (a < 0) != (b < 0) && a != 0;
            let size = if subtype == Subtype::IntegerMultiply { a.abs() * b.abs() } else { a.abs() / b.abs().max(1) };
            vec![
                format!("Ignore the signs: {} {} {} = {size}.", a.abs(), symbol(subtype), b.abs()),
                format!("The signs {} so the result is {}.", if negative { "differ" } else { "match" }, if negative { "negative" } else { "positive" }),
                format!("So {a} {} {} = {answer}.", symbol(subtype), paren(b)),
            ]
        }
        _ => vec![
            format!("Start at {a} on the number line."),
            format!("Move {} {}.", b.abs(), if b >= 0 { "right" } else { "left" }),
            format!("You land on {answer}."),
        ],
    }
}

fn layout(_subtype: Subtype) -> Layout {
    Layout::Fixed(DisplayFormat::Horizontal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum_engine::random::RngSource;

    #[test]
    fn signed_answers() {
        assert_eq!(solve(Subtype::IntegerSubtract, &[-3, -8]), Answer::Integer(5));
        assert_eq!(solve(Subtype::IntegerMultiply, &[-4, 6]), Answer::Integer(-24));
        assert_eq!(solve(Subtype::AbsoluteValue, &[-7]), Answer::Integer(7));
        assert_eq!(render(Subtype::IntegerAdd, &[5, -9]), "5 + (-9) = ?");
    }

    #[test]
    fn division_is_exact() {
        let mut rng = RngSource::seeded(6);
        let params = GenParams::new().a(-12, 12).b(-9, 9).negative();
        for _ in 0..200 {
            let d = construct(Subtype::IntegerDivide, &params, &mut rng, &EngineSettings::default());
            assert_ne!(d.operands[1], 0);
            assert_eq!(d.operands[0] % d.operands[1], 0);
        }
    }
}
