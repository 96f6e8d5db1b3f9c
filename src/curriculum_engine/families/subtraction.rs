//! Subtraction topics: take-away facts through 3-digit column subtraction.
//!
//! Operands are `[minuend, subtrahend]` and the minuend is never smaller
//! than the subtrahend, so results are never negative at these tiers. Draws
//! that come out the wrong way round are swapped, not rejected.

use crate::config::EngineSettings;
use crate::curriculum_engine::{
    arithmetic::{digits_lsd, needs_borrow},
    families::{Family, Layout},
    helpers::{draw, op, pick_shape, render_chain, Draft, Features},
    models::{Answer, GenParams},
    random::{rejection_sample, RandomSource},
    subtype::Subtype,
};

pub static FAMILY: Family = Family {
    name: "subtraction",
    construct,
    solve,
    render,
    micro,
    walkthrough,
    layout,
};

fn fixed_subtrahend(subtype: Subtype) -> Option<i64> {
    match subtype {
        Subtype::SubtractOne   => Some(1),
        Subtype::SubtractTwo   => Some(2),
        Subtype::SubtractThree => Some(3),
        _                      => None,
    }
}

fn borrow_ok(params: &GenParams, borrows: bool) -> bool {
    if params.require_borrow {
        borrows
    } else if !params.allow_borrow {
        !borrows
    } else {
        true
    }
}

/// Put the larger value first.
fn ordered(a: i64, b: i64) -> Vec<i64> {
    if a >= b { vec![a, b] } else { vec![b, a] }
}

fn construct(
    subtype: Subtype,
    params: &GenParams,
    random: &mut dyn RandomSource,
    settings: &EngineSettings,
) -> Draft {
    let (lo, hi) = params.range_a;
    let draft = match subtype {
        Subtype::SubtractOne | Subtype::SubtractTwo | Subtype::SubtractThree => {
            let b = params.fixed.or_else(|| fixed_subtrahend(subtype)).unwrap_or(1);
            // At least one left over: the minuend is always >= b + 1.
            let a = random.next_int(lo.max(b + 1), hi.max(b + 1));
            Draft::new(vec![a, b])
        }
        Subtype::SubtractWithinTen | Subtype::SubtractWithinTwenty | Subtype::SubtractMissing => {
            let a = random.next_int(lo.max(1), hi.max(1));
            let b = random.next_int(params.range_b.0.clamp(0, a), params.range_b.1.clamp(0, a));
            Draft::new(vec![a, b])
        }
        Subtype::SubtractFromTen => {
            let a = params.fixed.unwrap_or(10).max(2);
            Draft::new(vec![a, random.next_int(1, a - 1)])
        }
        Subtype::SubtractAcrossZeros => {
            // 200, 3000, ... minus a number that forces borrowing through zeros.
            let place = params.fixed.unwrap_or(100).max(10);
            let a = draw(random, params.range_a).max(1) * place;
            let b = random.next_int(params.range_b.0.clamp(1, a - 1), params.range_b.1.clamp(1, a - 1));
            Draft::new(vec![a, b])
        }
        Subtype::TwoDigitSubNoBorrow | Subtype::TwoDigitSubBorrow | Subtype::ThreeDigitSubtraction => {
            Draft::sampled(rejection_sample(
                random,
                settings.max_rejection_attempts,
                |r| ordered(draw(r, params.range_a), draw(r, params.range_b)),
                |v| borrow_ok(params, needs_borrow(v[0], v[1])),
            ))
        }
        _ => Draft::new(ordered(draw(random, params.range_a), draw(random, params.range_b))),
    };

    let shape = pick_shape(random, params, false, subtype == Subtype::SubtractMissing);
    let borrow = needs_borrow(draft.operands[0], draft.operands[1]);
    draft
        .with_shape(shape)
        .with_features(Features { borrow, ..Features::default() })
}

fn solve(_subtype: Subtype, ops: &[i64]) -> Answer {
    Answer::Integer(op(ops, 0) - op(ops, 1))
}

fn render(_subtype: Subtype, ops: &[i64]) -> String {
    render_chain(ops, "-")
}

fn micro(subtype: Subtype, ops: &[i64]) -> String {
    let (a, b) = (op(ops, 0), op(ops, 1));
    match subtype {
        Subtype::SubtractFromTen => format!("Show 10 on your fingers and fold down {b}."),
        Subtype::SubtractAcrossZeros => format!(
            "The zeros in {a} have nothing to lend. Borrow from the first non-zero digit."
        ),
        _ if a <= 20 => format!("Start at {a} and count back {b}."),
        _ => format!(
            "Start with the ones column: can you take {} from {}?",
            b % 10,
            a % 10
        ),
    }
}

/// Column subtraction with borrowing, ones column first.
pub(crate) fn column_steps(minuend: i64, subtrahend: i64) -> Vec<String> {
    const PLACES: [&str; 5] = ["Ones", "Tens", "Hundreds", "Thousands", "Ten-thousands"];
    let (dm, ds) = (digits_lsd(minuend), digits_lsd(subtrahend));
    let mut steps = vec![format!("Write {subtrahend} under {minuend}, lining up the ones.")];
    let mut owed = 0i64;
    for (i, &digit) in dm.iter().enumerate() {
        let place = PLACES.get(i).copied().unwrap_or("Next");
        let bottom = ds.get(i).copied().unwrap_or(0) as i64;
        let top = digit as i64 - owed;
        let lent = if owed > 0 { format!(" ({digit} after lending 1 is {top})") } else { String::new() };
        if top < bottom {
            steps.push(format!(
                "{place}: {top} is too small to take {bottom}{lent}, so borrow 1 from the next column: {} - {bottom} = {}.",
                top + 10,
                top + 10 - bottom
            ));
            owed = 1;
        } else {
            steps.push(format!("{place}: {top} - {bottom} = {}{lent}.", top - bottom));
            owed = 0;
        }
    }
    steps.push(format!("So {minuend} - {subtrahend} = {}.", minuend - subtrahend));
    steps
}

fn walkthrough(_subtype: Subtype, ops: &[i64]) -> Vec<String> {
    let (a, b) = (op(ops, 0), op(ops, 1));
    if a <= 20 {
        let counted = (1..=b).map(|k| (a - k).to_string()).collect::<Vec<_>>().join(", ");
        let counted = if counted.is_empty() { "nothing to count back".to_string() } else { counted };
        return vec![
            format!("Start at {a}."),
            format!("Count back {b}: {counted}."),
            format!("So {a} - {b} = {}.", a - b),
        ];
    }
    column_steps(a, b)
}

fn layout(_subtype: Subtype) -> Layout {
    Layout::Binary { symbol: "-" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum_engine::random::RngSource;

    fn build(subtype: Subtype, params: GenParams, seed: u64) -> Draft {
        let mut rng = RngSource::seeded(seed);
        construct(subtype, &params, &mut rng, &EngineSettings::default())
    }

    #[test]
    fn subtract_two_keeps_subtrahend_and_leaves_one() {
        for seed in 0..300 {
            let d = build(Subtype::SubtractTwo, GenParams::new().a(1, 12), seed);
            assert_eq!(d.operands[1], 2);
            assert!(d.operands[0] >= 3 && d.operands[0] <= 12);
        }
    }

    #[test]
    fn results_are_never_negative() {
        let params = GenParams::new().a(10, 99).b(10, 99);
        for seed in 0..300 {
            let d = build(Subtype::ThreeDigitSubtraction, params, seed);
            assert!(d.operands[0] >= d.operands[1]);
        }
    }

    #[test]
    fn no_borrow_subtype_has_no_borrowing_column() {
        let params = GenParams::new().a(10, 99).b(10, 99).no_borrow();
        for seed in 0..300 {
            let d = build(Subtype::TwoDigitSubNoBorrow, params, seed);
            assert!(!d.degraded);
            assert!(!needs_borrow(d.operands[0], d.operands[1]), "{:?}", d.operands);
        }
    }

    #[test]
    fn across_zeros_always_borrows() {
        let params = GenParams::new().a(2, 9).b(11, 99).fixed(100);
        for seed in 0..100 {
            let d = build(Subtype::SubtractAcrossZeros, params, seed);
            assert_eq!(d.operands[0] % 100, 0);
            assert!(d.features.borrow);
        }
    }

    #[test]
    fn column_steps_borrow_through_zero() {
        let steps = column_steps(300, 1);
        assert!(steps[1].starts_with("Ones: 0 is too small to take 1"));
        assert_eq!(steps.last().unwrap(), "So 300 - 1 = 299.");
    }
}
