//! Counting principles and elementary probability.

use crate::config::EngineSettings;
use crate::curriculum_engine::{
    arithmetic::{combinations, factorial, permutations},
    families::{Family, Layout},
    helpers::{draw, op, Draft},
    models::{Answer, DisplayFormat, Fraction, GenParams},
    random::RandomSource,
    subtype::Subtype,
};

pub static FAMILY: Family = Family {
    name: "probability",
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
    let ops = match subtype {
        Subtype::Factorial => vec![random.next_int(params.range_a.0.max(0), params.range_a.1.clamp(0, 12))],
        // [n, r] with r <= n
        Subtype::Permutations | Subtype::Combinations => {
            let n = random.next_int(params.range_a.0.max(2), params.range_a.1.clamp(2, 15));
            vec![n, random.next_int(1, n)]
        }
        // [favourable, other] marbles in a bag
        Subtype::SimpleProbability => vec![draw(random, params.range_a).max(1), draw(random, params.range_b).max(1)],
        // [target sum] of two dice
        Subtype::DiceSumProbability => vec![random.next_int(2, 12)],
        // [n1, d1, n2, d2]: two independent events
        _ => {
            let d1 = random.next_int(2, 6);
            let d2 = random.next_int(2, 6);
            vec![random.next_int(1, d1 - 1), d1, random.next_int(1, d2 - 1), d2]
        }
    };
    Draft::new(ops)
}

/// Ordered pairs of dice faces summing to `target`.
fn dice_ways(target: i64) -> i64 {
    (1..=6).filter(|a| (1..=6).contains(&(target - a))).count() as i64
}

fn solve(subtype: Subtype, ops: &[i64]) -> Answer {
    let (a, b) = (op(ops, 0), op(ops, 1));
    match subtype {
        Subtype::Factorial => Answer::Integer(factorial(a)),
        Subtype::Permutations => Answer::Integer(permutations(a, b)),
        Subtype::Combinations => Answer::Integer(combinations(a, b)),
        Subtype::SimpleProbability => Answer::Fraction(Fraction::new(a, a + b)),
        Subtype::DiceSumProbability => Answer::Fraction(Fraction::new(dice_ways(a), 36)),
        _ => Answer::Fraction(Fraction::new(a * op(ops, 2), b * op(ops, 3))),
    }
}

fn render(subtype: Subtype, ops: &[i64]) -> String {
    let (a, b) = (op(ops, 0), op(ops, 1));
    match subtype {
        Subtype::Factorial => format!("{a}! = ?"),
        Subtype::Permutations => format!("In how many ordered ways can {b} of {a} runners finish first to {}?", ordinal(b)),
        Subtype::Combinations => format!("How many ways can you choose {b} from {a}?"),
        Subtype::SimpleProbability => format!(
            "A bag has {a} red and {b} blue marbles. What is the probability of drawing red?"
        ),
        Subtype::DiceSumProbability => format!("Two dice are rolled. What is the probability the total is {a}?"),
        _ => format!(
            "P(A) = {a}/{b} and P(B) = {}/{}. A and B are independent. Find P(A and B).",
            op(ops, 2),
            op(ops, 3)
        ),
    }
}

fn ordinal(n: i64) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

fn micro(subtype: Subtype, ops: &[i64]) -> String {
    match subtype {
        Subtype::Factorial => format!("Multiply every whole number from 1 up to {}.", op(ops, 0)),
        Subtype::Permutations => "Order matters: n × (n - 1) × … for r places.".to_string(),
        Subtype::Combinations => "Order does not matter: divide the arrangements by r!.".to_string(),
        Subtype::SimpleProbability => "Favourable outcomes over total outcomes.".to_string(),
        Subtype::DiceSumProbability => "List the pairs that make the total; there are 36 pairs in all.".to_string(),
        _ => "For independent events, multiply the probabilities.".to_string(),
    }
}

fn walkthrough(subtype: Subtype, ops: &[i64]) -> Vec<String> {
    let (a, b) = (op(ops, 0), op(ops, 1));
    let answer = solve(subtype, ops);
    let mut steps = match subtype {
        Subtype::Factorial => {
            let chain = (1..=a.max(1)).rev().map(|k| k.to_string()).collect::<Vec<_>>().join(" × ");
            vec![format!("{a}! = {chain}.")]
        }
        Subtype::Permutations => {
            let chain = (0..b).map(|k| (a - k).to_string()).collect::<Vec<_>>().join(" × ");
            vec![format!("{b} places from {a}: {chain}.")]
        }
        Subtype::Combinations => vec![
            format!("Arrangements: {}P{} = {}.", a, b, permutations(a, b)),
            format!("Divide by {b}! = {} because order does not matter.", factorial(b)),
        ],
        Subtype::SimpleProbability => vec![
            format!("Total marbles: {a} + {b} = {}.", a + b),
            format!("Red marbles: {a}."),
            "Write red over total and simplify.".to_string(),
        ],
        Subtype::DiceSumProbability => {
            let pairs = (1..=6)
                .filter(|x| (1..=6).contains(&(a - x)))
                .map(|x| format!("({x}, {})", a - x))
                .collect::<Vec<_>>()
                .join(", ");
            vec![
                format!("Pairs totalling {a}: {pairs}."),
                format!("That is {} of 36 equally likely pairs.", dice_ways(a)),
            ]
        }
        _ => vec![format!(
            "{a}/{b} × {}/{} = {}/{}.",
            op(ops, 2),
            op(ops, 3),
            a * op(ops, 2),
            b * op(ops, 3)
        )],
    };
    steps.push(format!("Answer: {answer}."));
    steps
}

fn layout(subtype: Subtype) -> Layout {
    match subtype {
        Subtype::DiceSumProbability => Layout::Fixed(DisplayFormat::Table),
        _ => Layout::Fixed(DisplayFormat::Expression),
    }
}
