//! Descriptive statistics and set operations.
//!
//! Statistics topics take the data list as operands. Set topics encode two
//! sets as `[len_a, a..., b...]`.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

use crate::config::EngineSettings;
use crate::curriculum_engine::{
    arithmetic::format_set,
    families::{Family, Layout},
    helpers::{draw, Draft},
    models::{Answer, DisplayFormat, GenParams},
    random::{shuffle, RandomSource},
    subtype::Subtype,
};

pub static FAMILY: Family = Family {
    name: "statistics",
    construct,
    solve,
    render,
    micro,
    walkthrough,
    layout,
};

/// `count` distinct values from an inclusive range (fewer if the range is small).
fn distinct(random: &mut dyn RandomSource, range: (i64, i64), count: usize) -> Vec<i64> {
    let mut pool: Vec<i64> = (range.0..=range.1.max(range.0)).collect();
    shuffle(random, &mut pool);
    pool.truncate(count);
    pool
}

fn construct(
    subtype: Subtype,
    params: &GenParams,
    random: &mut dyn RandomSource,
    _settings: &EngineSettings,
) -> Draft {
    let r = params.range_a;
    let mut ops = match subtype {
        // Built around the mean: symmetric deviations keep it an integer.
        Subtype::Mean => {
            let mean = draw(random, r);
            let mut values = vec![mean];
            for _ in 0..2 {
                let dev = random.next_int(1, 5);
                values.push(mean + dev);
                values.push(mean - dev);
            }
            values
        }
        Subtype::Median => {
            let count = if random.chance(50) { 5 } else { 7 };
            (0..count).map(|_| draw(random, r)).collect()
        }
        // One value three times, the rest at most once.
        Subtype::Mode => {
            let mut values = distinct(random, r, 5);
            let mode = values.first().copied().unwrap_or(r.0);
            values.extend([mode, mode]);
            values
        }
        Subtype::Range => (0..6).map(|_| draw(random, r)).collect(),
        _ => {
            let (len_a, len_b) = (random.next_int(3, 5) as usize, random.next_int(3, 5) as usize);
            let mut a = distinct(random, r, len_a);
            let mut b = distinct(random, r, len_b);
            a.sort_unstable();
            b.sort_unstable();
            let mut ops = vec![a.len() as i64];
            ops.extend(a);
            ops.extend(b);
            return Draft::new(ops);
        }
    };
    shuffle(random, &mut ops);
    Draft::new(ops)
}

fn split_sets(ops: &[i64]) -> (BTreeSet<i64>, BTreeSet<i64>) {
    let len_a = ops.first().copied().unwrap_or(0).clamp(0, ops.len().saturating_sub(1) as i64) as usize;
    let rest = ops.get(1..).unwrap_or(&[]);
    let (a, b) = rest.split_at(len_a.min(rest.len()));
    (a.iter().copied().collect(), b.iter().copied().collect())
}

fn sorted(ops: &[i64]) -> Vec<i64> {
    let mut v = ops.to_vec();
    v.sort_unstable();
    v
}

/// Most frequent value; ties go to the smallest.
fn mode_of(ops: &[i64]) -> i64 {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for v in ops {
        *counts.entry(*v).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .max_by_key(|(v, count)| (*count, Reverse(*v)))
        .map(|(v, _)| v)
        .unwrap_or(0)
}

fn listed(set: &BTreeSet<i64>) -> Vec<i64> {
    set.iter().copied().collect()
}

fn solve(subtype: Subtype, ops: &[i64]) -> Answer {
    match subtype {
        Subtype::Mean => Answer::Integer(ops.iter().sum::<i64>() / (ops.len().max(1) as i64)),
        Subtype::Median => {
            let v = sorted(ops);
            Answer::Integer(v.get(v.len() / 2).copied().unwrap_or(0))
        }
        Subtype::Mode => Answer::Integer(mode_of(ops)),
        Subtype::Range => {
            let v = sorted(ops);
            Answer::Integer(v.last().copied().unwrap_or(0) - v.first().copied().unwrap_or(0))
        }
        _ => {
            let (a, b) = split_sets(ops);
            match subtype {
                Subtype::SetUnion => Answer::Text(format_set(&listed(&(&a | &b)))),
                Subtype::SetIntersection => Answer::Text(format_set(&listed(&(&a & &b)))),
                Subtype::SetDifference => Answer::Text(format_set(&listed(&(&a - &b)))),
                _ => Answer::Integer((&a | &b).len() as i64),
            }
        }
    }
}

fn data(ops: &[i64]) -> String {
    ops.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
}

fn render(subtype: Subtype, ops: &[i64]) -> String {
    match subtype {
        Subtype::Mean => format!("Find the mean of {}.", data(ops)),
        Subtype::Median => format!("Find the median of {}.", data(ops)),
        Subtype::Mode => format!("Find the mode of {}.", data(ops)),
        Subtype::Range => format!("Find the range of {}.", data(ops)),
        _ => {
            let (a, b) = split_sets(ops);
            let (a, b) = (format_set(&listed(&a)), format_set(&listed(&b)));
            match subtype {
                Subtype::SetUnion => format!("A = {a}, B = {b}. Find A ∪ B."),
                Subtype::SetIntersection => format!("A = {a}, B = {b}. Find A ∩ B."),
                Subtype::SetDifference => format!("A = {a}, B = {b}. Find A \\ B."),
                _ => format!("A = {a}, B = {b}. How many elements are in A ∪ B?"),
            }
        }
    }
}

fn micro(subtype: Subtype, _ops: &[i64]) -> String {
    match subtype {
        Subtype::Mean => "Add them all up, then share equally.".to_string(),
        Subtype::Median => "Put the numbers in order and find the middle one.".to_string(),
        Subtype::Mode => "Which number appears most often?".to_string(),
        Subtype::Range => "Biggest minus smallest.".to_string(),
        Subtype::SetUnion => "Everything in A or B, each listed once.".to_string(),
        Subtype::SetIntersection => "Only the elements in both sets.".to_string(),
        Subtype::SetDifference => "Elements of A that are not in B.".to_string(),
        _ => "|A ∪ B| = |A| + |B| - |A ∩ B|.".to_string(),
    }
}

fn walkthrough(subtype: Subtype, ops: &[i64]) -> Vec<String> {
    let answer = solve(subtype, ops);
    let mut steps = match subtype {
        Subtype::Mean => vec![
            format!("Sum: {} = {}.", ops.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" + "), ops.iter().sum::<i64>()),
            format!("Divide by the count, {}.", ops.len()),
        ],
        Subtype::Median | Subtype::Range | Subtype::Mode => {
            vec![format!("In order: {}.", data(&sorted(ops)))]
        }
        _ => {
            let (a, b) = split_sets(ops);
            vec![
                format!("A has {} elements, B has {}.", a.len(), b.len()),
                format!("They share {}.", format_set(&listed(&(&a & &b)))),
            ]
        }
    };
    steps.push(format!("Answer: {answer}."));
    steps
}

fn layout(subtype: Subtype) -> Layout {
    match subtype {
        Subtype::Mean | Subtype::Median | Subtype::Mode | Subtype::Range => Layout::Fixed(DisplayFormat::Table),
        _ => Layout::Fixed(DisplayFormat::Matching),
    }
}
