//! Division facts, remainders, and long division.
//!
//! Operands are `[dividend, divisor]`, built constructively from a drawn
//! quotient (`range_a`) and divisor (`range_b`) so exact division never needs
//! rejection. With `allow_remainder` the answer is `"q R r"` text.

use crate::config::EngineSettings;
use crate::curriculum_engine::{
    arithmetic::digits_lsd,
    families::{Family, Layout},
    helpers::{draw, draw_nonzero, op, pick_shape, render_chain, Draft, Features, Shape},
    models::{Answer, GenParams},
    random::RandomSource,
    subtype::Subtype,
};

pub static FAMILY: Family = Family {
    name: "division",
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
    let quotient = draw(random, params.range_a);
    let divisor = draw_nonzero(random, params.range_b).abs().max(1);
    let remainder = if params.allow_remainder && divisor > 1 {
        random.next_int(1, divisor - 1)
    } else {
        0
    };
    let dividend = quotient * divisor + remainder;

    let shape = if remainder == 0 {
        pick_shape(random, params, false, subtype == Subtype::DivisionMissingDivisor)
    } else {
        Shape::Standard
    };
    Draft::new(vec![dividend, divisor])
        .with_shape(shape)
        .with_features(Features { remainder: remainder > 0, ..Features::default() })
}

fn split(ops: &[i64]) -> (i64, i64, i64, i64) {
    let (dividend, divisor) = (op(ops, 0), op(ops, 1).max(1));
    (dividend, divisor, dividend / divisor, dividend % divisor)
}

fn solve(_subtype: Subtype, ops: &[i64]) -> Answer {
    let (_, _, q, r) = split(ops);
    if r == 0 {
        Answer::Integer(q)
    } else {
        Answer::Text(format!("{q} R {r}"))
    }
}

fn render(_subtype: Subtype, ops: &[i64]) -> String {
    render_chain(ops, "÷")
}

fn micro(_subtype: Subtype, ops: &[i64]) -> String {
    let (dividend, divisor, _, _) = split(ops);
    if dividend <= 100 {
        format!("How many {divisor}s fit into {dividend}? Think of the {divisor} times table.")
    } else {
        format!("Start from the left: how many times does {divisor} go into the first digits of {dividend}?")
    }
}

/// Bring-down steps of long division, most significant digit first.
fn long_steps(dividend: i64, divisor: i64) -> Vec<String> {
    let mut steps = vec![format!("Divide {dividend} by {divisor}, working from the left.")];
    let mut carried = 0i64;
    let mut digits = digits_lsd(dividend);
    digits.reverse();
    for digit in digits {
        let current = carried * 10 + digit as i64;
        let fits = current / divisor;
        carried = current - fits * divisor;
        if current == 0 && fits == 0 {
            continue;
        }
        steps.push(format!(
            "{divisor} goes into {current} {fits} time{}; {current} - {} = {carried}.",
            if fits == 1 { "" } else { "s" },
            fits * divisor
        ));
    }
    steps
}

fn walkthrough(subtype: Subtype, ops: &[i64]) -> Vec<String> {
    let (dividend, divisor, q, r) = split(ops);
    let answer = solve(subtype, ops);
    let mut steps = if dividend <= 100 {
        vec![
            format!("Count up in {divisor}s until you reach or pass {dividend}."),
            format!("{q} × {divisor} = {}.", q * divisor),
        ]
    } else {
        long_steps(dividend, divisor)
    };
    if r > 0 {
        steps.push(format!("{dividend} - {} leaves {r}, which is less than {divisor}.", q * divisor));
    }
    steps.push(format!("So {dividend} ÷ {divisor} = {answer}."));
    steps
}

fn layout(_subtype: Subtype) -> Layout {
    Layout::Binary { symbol: "÷" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum_engine::random::RngSource;

    #[test]
    fn exact_division_has_no_remainder() {
        let mut rng = RngSource::seeded(11);
        let params = GenParams::new().a(1, 10).b(2, 9);
        for _ in 0..200 {
            let d = construct(Subtype::DivisionFactsToNine, &params, &mut rng, &EngineSettings::default());
            assert_eq!(d.operands[0] % d.operands[1], 0);
            assert!(!d.features.remainder);
        }
    }

    #[test]
    fn remainder_answers_are_text() {
        assert_eq!(solve(Subtype::DivisionWithRemainder, &[17, 5]), Answer::Text("3 R 2".into()));
        assert_eq!(solve(Subtype::DivisionFactsToFive, &[15, 5]), Answer::Integer(3));
    }

    #[test]
    fn remainder_is_smaller_than_divisor() {
        let mut rng = RngSource::seeded(12);
        let params = GenParams::new().a(1, 9).b(2, 9).remainder();
        for _ in 0..200 {
            let d = construct(Subtype::DivisionWithRemainder, &params, &mut rng, &EngineSettings::default());
            let r = d.operands[0] % d.operands[1];
            assert!(r > 0 && r < d.operands[1]);
            assert!(d.features.remainder);
            assert!(!d.shape.is_missing());
        }
    }

    #[test]
    fn long_division_brings_down_digits() {
        let steps = long_steps(156, 12);
        assert_eq!(steps[1], "12 goes into 1 0 times; 1 - 0 = 1.");
        assert_eq!(steps[2], "12 goes into 15 1 time; 15 - 12 = 3.");
        assert_eq!(steps[3], "12 goes into 36 3 times; 36 - 36 = 0.");
    }
}
