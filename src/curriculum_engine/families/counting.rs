//! Counting and number-sense topics for the pre-addition tiers.
//!
//! ## Operand layout
//!
//! - single-number topics: `[n]`
//! - sequences and skip counting: `[start, step, length, hidden_index]`
//! - comparison: `[a, b]` with `a != b`

use crate::config::EngineSettings;
use crate::curriculum_engine::{
    arithmetic::number_words,
    families::{Family, Layout},
    helpers::{op, Draft},
    models::{Answer, DisplayFormat, GenParams},
    random::{rejection_sample, RandomSource},
    subtype::Subtype,
};

pub static FAMILY: Family = Family {
    name: "counting",
    construct,
    solve,
    render,
    micro,
    walkthrough,
    layout,
};

const SEQUENCE_LEN: i64 = 5;

fn skip_step(subtype: Subtype) -> i64 {
    match subtype {
        Subtype::SkipCountTwos  => 2,
        Subtype::SkipCountFives => 5,
        Subtype::SkipCountTens  => 10,
        _                       => 1,
    }
}

fn construct(
    subtype: Subtype,
    params: &GenParams,
    random: &mut dyn RandomSource,
    settings: &EngineSettings,
) -> Draft {
    let (lo, hi) = params.range_a;
    match subtype {
        Subtype::NumberBefore | Subtype::NumberBetween => {
            Draft::new(vec![random.next_int(lo.max(1), hi.max(1))])
        }
        Subtype::FillSequence => {
            let start = random.next_int(lo, (hi - (SEQUENCE_LEN - 1)).max(lo));
            let hidden = random.next_int(1, SEQUENCE_LEN - 1);
            Draft::new(vec![start, 1, SEQUENCE_LEN, hidden])
        }
        Subtype::SkipCountTwos | Subtype::SkipCountFives | Subtype::SkipCountTens => {
            let step = skip_step(subtype);
            let start = random.next_int(lo, hi) * step;
            let hidden = random.next_int(1, SEQUENCE_LEN - 1);
            Draft::new(vec![start, step, SEQUENCE_LEN, hidden])
        }
        Subtype::CompareNumbers => Draft::sampled(rejection_sample(
            random,
            settings.max_rejection_attempts,
            |r| vec![r.next_int(lo, hi), r.next_int(lo, hi)],
            |v| v[0] != v[1],
        )),
        _ => Draft::new(vec![random.next_int(lo, hi)]),
    }
}

fn solve(subtype: Subtype, ops: &[i64]) -> Answer {
    let n = op(ops, 0);
    Answer::Integer(match subtype {
        Subtype::NumberAfter  => n + 1,
        Subtype::NumberBefore => n - 1,
        Subtype::FillSequence
        | Subtype::SkipCountTwos
        | Subtype::SkipCountFives
        | Subtype::SkipCountTens => n + op(ops, 3) * op(ops, 1),
        Subtype::CompareNumbers => n.max(op(ops, 1)),
        _ => n,
    })
}

fn sequence_terms(ops: &[i64], hide: bool) -> String {
    let (start, step, len, hidden) = (op(ops, 0), op(ops, 1), op(ops, 2), op(ops, 3));
    (0..len)
        .map(|i| if hide && i == hidden { "_".to_string() } else { (start + i * step).to_string() })
        .collect::<Vec<_>>()
        .join(", ")
}

fn render(subtype: Subtype, ops: &[i64]) -> String {
    let n = op(ops, 0);
    match subtype {
        Subtype::CountObjects => {
            let dots = vec!["●"; n.max(0) as usize].join(" ");
            format!("How many dots are there? {dots}")
        }
        Subtype::NumberAfter   => format!("What number comes right after {n}?"),
        Subtype::NumberBefore  => format!("What number comes right before {n}?"),
        Subtype::NumberBetween => format!("What number goes between {} and {}?", n - 1, n + 1),
        Subtype::CompareNumbers => format!("Which number is bigger: {n} or {}?", op(ops, 1)),
        Subtype::NumberWords   => format!("Write \"{}\" as a number.", number_words(n)),
        _ => format!("Fill in the missing number: {}", sequence_terms(ops, true)),
    }
}

fn micro(subtype: Subtype, ops: &[i64]) -> String {
    let n = op(ops, 0);
    match subtype {
        Subtype::CountObjects   => "Touch each dot once as you count out loud.".to_string(),
        Subtype::NumberAfter    => format!("Say {n}, then say the next counting number."),
        Subtype::NumberBefore   => format!("Count backwards one step from {n}."),
        Subtype::NumberBetween  => format!("Count on from {}. The very next number is in the middle.", n - 1),
        Subtype::CompareNumbers => format!("When you count up, which comes later: {n} or {}?", op(ops, 1)),
        Subtype::NumberWords    => "Find the tens word first, then the ones word.".to_string(),
        _ => format!("Each number is {} more than the one before it.", op(ops, 1)),
    }
}

fn walkthrough(subtype: Subtype, ops: &[i64]) -> Vec<String> {
    let n = op(ops, 0);
    let answer = solve(subtype, ops);
    match subtype {
        Subtype::CountObjects => vec![
            "Point to the first dot and say 1.".to_string(),
            "Move to the next dot and say the next number. Never skip a dot.".to_string(),
            format!("The last number you say is {answer}, so there are {answer} dots."),
        ],
        Subtype::NumberAfter => vec![
            format!("Start at {n}."),
            "Counting up means adding one more.".to_string(),
            format!("One more than {n} is {answer}."),
        ],
        Subtype::NumberBefore => vec![
            format!("Start at {n}."),
            "Counting back means taking one away.".to_string(),
            format!("One less than {n} is {answer}."),
        ],
        Subtype::NumberBetween => vec![
            format!("Count: {}, ...", n - 1),
            format!("The next number after {} is {answer}.", n - 1),
            format!("After {answer} comes {}, so {answer} sits in the middle.", n + 1),
        ],
        Subtype::CompareNumbers => vec![
            format!("Compare the tens: {} and {}.", n / 10, op(ops, 1) / 10),
            "If the tens match, compare the ones.".to_string(),
            format!("The bigger number is {answer}."),
        ],
        Subtype::NumberWords => vec![
            format!("Read the words: \"{}\".", number_words(n)),
            format!("The tens part gives {} tens; the ones part gives {}.", n / 10, n % 10),
            format!("Put them together: {answer}."),
        ],
        _ => vec![
            format!("Look at the numbers: {}.", sequence_terms(ops, true)),
            format!("Each step adds {}.", op(ops, 1)),
            format!("The full sequence is {}, so the missing number is {answer}.", sequence_terms(ops, false)),
        ],
    }
}

fn layout(subtype: Subtype) -> Layout {
    match subtype {
        Subtype::FillSequence
        | Subtype::SkipCountTwos
        | Subtype::SkipCountFives
        | Subtype::SkipCountTens => Layout::Fixed(DisplayFormat::SequenceBoxes),
        Subtype::CompareNumbers  => Layout::Fixed(DisplayFormat::Matching),
        _                        => Layout::Fixed(DisplayFormat::Horizontal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum_engine::random::RngSource;

    #[test]
    fn sequences_fit_their_range() {
        let mut rng = RngSource::seeded(5);
        let params = GenParams::new().a(1, 10);
        for _ in 0..300 {
            let d = construct(Subtype::FillSequence, &params, &mut rng, &EngineSettings::default());
            let last = d.operands[0] + (d.operands[2] - 1) * d.operands[1];
            assert!(d.operands[0] >= 1 && last <= 10, "{:?}", d.operands);
            assert!((1..SEQUENCE_LEN).contains(&d.operands[3]));
        }
    }

    #[test]
    fn answers_follow_operands() {
        assert_eq!(solve(Subtype::NumberAfter, &[7]), Answer::Integer(8));
        assert_eq!(solve(Subtype::NumberBefore, &[7]), Answer::Integer(6));
        assert_eq!(solve(Subtype::SkipCountFives, &[10, 5, 5, 3]), Answer::Integer(25));
        assert_eq!(solve(Subtype::CompareNumbers, &[12, 31]), Answer::Integer(31));
        assert_eq!(render(Subtype::SkipCountTens, &[20, 10, 5, 2]), "Fill in the missing number: 20, 30, _, 50, 60");
    }

    #[test]
    fn number_before_never_goes_negative() {
        let mut rng = RngSource::seeded(1);
        let params = GenParams::new().a(0, 3);
        for _ in 0..200 {
            let d = construct(Subtype::NumberBefore, &params, &mut rng, &EngineSettings::default());
            assert!(d.operands[0] >= 1);
        }
    }
}
