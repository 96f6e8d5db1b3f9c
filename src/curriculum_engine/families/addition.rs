//! Addition topics, from "+1" facts through 4-digit column addition.
//!
//! Operands are the addends in display order: `[a, b]`, or `[a, b, c]` for
//! three-addend columns. The answer is always their sum; missing-operand
//! shapes are applied by the generator.
//!
//! - **Fixed-addend facts** (`AddOne` … `AddTen`): `b` fixed, `a` drawn.
//! - **Sums to 20 / making 10**: constructive. Draw the sum, then split it.
//! - **Column addition**: rejection-sampled against the carry flags in
//!   [`GenParams`].

use crate::config::EngineSettings;
use crate::curriculum_engine::{
    arithmetic::{column_sum_carries, digits_lsd, has_carry},
    families::{Family, Layout},
    helpers::{apply_order, draw, op, pick_shape, render_chain, Draft, Features},
    models::{Answer, GenParams},
    random::{rejection_sample, RandomSource},
    subtype::Subtype,
};

pub static FAMILY: Family = Family {
    name: "addition",
    construct,
    solve,
    render,
    micro,
    walkthrough,
    layout,
};

/// The addend a fixed-fact subtype practises.
fn fixed_addend(subtype: Subtype) -> Option<i64> {
    match subtype {
        Subtype::AddOne   => Some(1),
        Subtype::AddTwo   => Some(2),
        Subtype::AddThree => Some(3),
        Subtype::AddFour  => Some(4),
        Subtype::AddFive  => Some(5),
        Subtype::AddSix   => Some(6),
        Subtype::AddSeven => Some(7),
        Subtype::AddEight => Some(8),
        Subtype::AddNine  => Some(9),
        Subtype::AddTen   => Some(10),
        _                 => None,
    }
}

/// Carry constraint declared by the params.
pub(crate) fn carry_ok(params: &GenParams, carries: bool) -> bool {
    if params.require_carry {
        carries
    } else if !params.allow_carry {
        !carries
    } else {
        true
    }
}

fn construct(
    subtype: Subtype,
    params: &GenParams,
    random: &mut dyn RandomSource,
    settings: &EngineSettings,
) -> Draft {
    let force_missing = matches!(subtype, Subtype::AddMissingAddend | Subtype::AddMakeTen);

    let draft = match subtype {
        Subtype::AddDoubles => {
            let a = draw(random, params.range_a);
            Draft::new(vec![a, a])
        }
        Subtype::AddWithinTwenty => {
            let sum = random.next_int(params.range_a.0.max(2), params.range_a.1.max(2));
            let a = random.next_int(1, sum - 1);
            Draft::new(vec![a, sum - a])
        }
        Subtype::AddMakeTen => {
            let target = params.fixed.unwrap_or(10).max(2);
            let a = random.next_int(1, target - 1);
            Draft::new(vec![a, target - a])
        }
        Subtype::ColumnAddThree => {
            let terms = params.terms.max(3) as usize;
            let sampled = rejection_sample(
                random,
                settings.max_rejection_attempts,
                |r| (0..terms).map(|_| draw(r, params.range_a)).collect::<Vec<_>>(),
                |v| carry_ok(params, column_sum_carries(v)),
            );
            Draft::sampled(sampled)
        }
        Subtype::TwoDigitAddNoCarry
        | Subtype::TwoDigitAddCarry
        | Subtype::ThreeDigitAddition
        | Subtype::FourDigitAddition => {
            let sampled = rejection_sample(
                random,
                settings.max_rejection_attempts,
                |r| vec![draw(r, params.range_a), draw(r, params.range_b)],
                |v| carry_ok(params, has_carry(v[0], v[1])),
            );
            Draft::sampled(sampled)
        }
        _ => {
            let a = draw(random, params.range_a);
            let b = params
                .fixed
                .or_else(|| fixed_addend(subtype))
                .unwrap_or_else(|| draw(random, params.range_b));
            Draft::new(vec![a, b])
        }
    };

    if draft.operands.len() != 2 {
        let carry = column_sum_carries(&draft.operands);
        return draft.with_features(Features { carry, ..Features::default() });
    }
    let shape = pick_shape(random, params, true, force_missing);
    let carry = has_carry(draft.operands[0], draft.operands[1]);
    Draft {
        operands: apply_order(draft.operands, shape),
        shape,
        features: Features { carry, ..Features::default() },
        degraded: draft.degraded,
    }
}

fn solve(_subtype: Subtype, ops: &[i64]) -> Answer {
    Answer::Integer(ops.iter().sum())
}

fn render(_subtype: Subtype, ops: &[i64]) -> String {
    render_chain(ops, "+")
}

fn micro(subtype: Subtype, ops: &[i64]) -> String {
    let (a, b) = (op(ops, 0), op(ops, 1));
    match subtype {
        Subtype::AddDoubles => format!("Doubles: {a} and {a} more. Try counting on {a} from {a}."),
        Subtype::AddMakeTen => format!("How many more does {a} need to reach 10?"),
        Subtype::AddNine    => "Adding 9 is like adding 10 and then taking 1 away.".to_string(),
        Subtype::AddTen     => format!("Adding 10 makes the tens digit of {a} go up by one."),
        Subtype::ColumnAddThree => "Add the ones column of all three numbers first.".to_string(),
        _ if ops.iter().all(|v| *v < 20) => {
            let (big, small) = if a >= b { (a, b) } else { (b, a) };
            format!("Start at {big} and count on {small}.")
        }
        _ => format!(
            "Line up the columns. Start with the ones: {} + {}.",
            a % 10,
            b % 10
        ),
    }
}

/// Column-by-column addition steps for any number of addends.
pub(crate) fn column_steps(terms: &[i64]) -> Vec<String> {
    const PLACES: [&str; 6] = ["Ones", "Tens", "Hundreds", "Thousands", "Ten-thousands", "Hundred-thousands"];
    let digits: Vec<Vec<u8>> = terms.iter().map(|t| digits_lsd(*t)).collect();
    let columns = digits.iter().map(|d| d.len()).max().unwrap_or(1);
    let listed = terms.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(", ");

    let mut steps = vec![format!("Write {listed} in a column, lining up the ones.")];
    let mut carry = 0i64;
    for i in 0..columns {
        let col: Vec<i64> = digits.iter().map(|d| d.get(i).copied().unwrap_or(0) as i64).collect();
        let sum = col.iter().sum::<i64>() + carry;
        let mut expr = col.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" + ");
        if carry > 0 {
            expr.push_str(&format!(" + {carry} (carried)"));
        }
        let place = PLACES.get(i).copied().unwrap_or("Next");
        if sum >= 10 {
            steps.push(format!("{place}: {expr} = {sum}. Write {}, carry {}.", sum % 10, sum / 10));
        } else {
            steps.push(format!("{place}: {expr} = {sum}. Write {sum}."));
        }
        carry = sum / 10;
    }
    if carry > 0 {
        steps.push(format!("Write the final carry {carry} at the front."));
    }
    steps.push(format!("So {} = {}.", terms.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(" + "), terms.iter().sum::<i64>()));
    steps
}

fn walkthrough(_subtype: Subtype, ops: &[i64]) -> Vec<String> {
    let sum: i64 = ops.iter().sum();
    if ops.len() == 2 && sum <= 20 {
        let (a, b) = (op(ops, 0), op(ops, 1));
        let (big, small) = if a >= b { (a, b) } else { (b, a) };
        let counted = (1..=small).map(|k| (big + k).to_string()).collect::<Vec<_>>().join(", ");
        return vec![
            format!("Start with the bigger number, {big}."),
            format!("Count on {small}: {counted}."),
            format!("So {a} + {b} = {sum}."),
        ];
    }
    column_steps(ops)
}

fn layout(_subtype: Subtype) -> Layout {
    Layout::Binary { symbol: "+" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum_engine::{helpers::Shape, random::RngSource};

    fn build(subtype: Subtype, params: GenParams, seed: u64) -> Draft {
        let mut rng = RngSource::seeded(seed);
        construct(subtype, &params, &mut rng, &EngineSettings::default())
    }

    #[test]
    fn fixed_addend_is_kept() {
        for seed in 0..50 {
            let d = build(Subtype::AddTwo, GenParams::new().a(1, 9), seed);
            assert!(d.operands.contains(&2), "{:?}", d.operands);
            assert!(!d.shape.is_missing());
        }
    }

    #[test]
    fn sums_within_twenty_are_constructive() {
        for seed in 0..200 {
            let d = build(Subtype::AddWithinTwenty, GenParams::new().a(2, 20), seed);
            let sum: i64 = d.operands.iter().sum();
            assert!((2..=20).contains(&sum));
            assert!(d.operands.iter().all(|v| *v >= 1));
            assert!(!d.degraded);
        }
    }

    #[test]
    fn no_carry_subtype_never_carries() {
        let params = GenParams::new().a(10, 99).b(10, 99).no_carry();
        for seed in 0..200 {
            let d = build(Subtype::TwoDigitAddNoCarry, params, seed);
            if !d.degraded {
                assert!(!has_carry(d.operands[0], d.operands[1]), "{:?}", d.operands);
            }
        }
    }

    #[test]
    fn carry_subtype_always_carries() {
        let params = GenParams::new().a(10, 99).b(10, 99).carry();
        for seed in 0..200 {
            let d = build(Subtype::TwoDigitAddCarry, params, seed);
            assert!(!d.degraded);
            assert!(d.features.carry);
        }
    }

    #[test]
    fn make_ten_is_always_a_missing_shape() {
        for seed in 0..50 {
            let d = build(Subtype::AddMakeTen, GenParams::new(), seed);
            assert!(matches!(d.shape, Shape::MissingFirst | Shape::MissingSecond));
            assert_eq!(d.operands.iter().sum::<i64>(), 10);
        }
    }

    #[test]
    fn column_steps_track_carries() {
        let steps = column_steps(&[58, 67]);
        assert_eq!(steps[1], "Ones: 8 + 7 = 15. Write 5, carry 1.");
        assert_eq!(steps[2], "Tens: 5 + 6 + 1 (carried) = 12. Write 2, carry 1.");
        assert_eq!(steps.last().unwrap(), "So 58 + 67 = 125.");
    }
}
