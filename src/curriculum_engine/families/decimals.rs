//! Decimal arithmetic and order of operations.
//!
//! Decimals travel as scaled integers: `[units_a, units_b, places]` means
//! `units_a / 10^places` and so on. Multiplication is `[units, places, k]`
//! (a decimal times a whole number). Order-of-operations problems are
//! `[a, b, c]`.

use crate::config::EngineSettings;
use crate::curriculum_engine::{
    arithmetic::{format_scaled, gcd, ipow},
    families::{Family, Layout},
    helpers::{draw, op, Draft},
    models::{Answer, DisplayFormat, Fraction, GenParams},
    random::{pick, RandomSource},
    subtype::Subtype,
};

pub static FAMILY: Family = Family {
    name: "decimals",
    construct,
    solve,
    render,
    micro,
    walkthrough,
    layout,
};

/// Denominators with a terminating decimal expansion.
const TERMINATING: [i64; 8] = [2, 4, 5, 8, 10, 20, 25, 50];

fn places_of(params: &GenParams) -> i64 {
    params.fixed.unwrap_or(1).clamp(1, 3)
}

fn decimal(units: i64, places: u32) -> Answer {
    Answer::Decimal { value: units as f64 / ipow(10, places as i64) as f64, places }
}

/// Smallest number of places that represents `n/d` exactly, if any within four.
fn terminating_places(n: i64, d: i64) -> Option<u32> {
    (0..=4u32).find(|p| (n * ipow(10, *p as i64)) % d.max(1) == 0)
}

fn construct(
    subtype: Subtype,
    params: &GenParams,
    random: &mut dyn RandomSource,
    _settings: &EngineSettings,
) -> Draft {
    match subtype {
        Subtype::DecimalAdd | Subtype::DecimalSubtract => {
            let places = places_of(params);
            let (mut a, mut b) = (draw(random, params.range_a), draw(random, params.range_b));
            if subtype == Subtype::DecimalSubtract && a < b {
                std::mem::swap(&mut a, &mut b);
            }
            Draft::new(vec![a, b, places])
        }
        Subtype::DecimalMultiply => {
            Draft::new(vec![draw(random, params.range_a), places_of(params), draw(random, params.range_b)])
        }
        Subtype::FractionToDecimal => {
            let d = pick(random, &TERMINATING);
            let n = random.next_int(1, d - 1);
            Draft::new(vec![n, d])
        }
        Subtype::DecimalToFraction => {
            let places = places_of(params);
            let units = random.next_int(1, ipow(10, places) - 1);
            Draft::new(vec![units, places])
        }
        _ => Draft::new(vec![
            draw(random, params.range_a),
            draw(random, params.range_b),
            draw(random, params.range_b),
        ]),
    }
}

fn solve(subtype: Subtype, ops: &[i64]) -> Answer {
    match subtype {
        Subtype::DecimalAdd => decimal(op(ops, 0) + op(ops, 1), op(ops, 2) as u32),
        Subtype::DecimalSubtract => decimal(op(ops, 0) - op(ops, 1), op(ops, 2) as u32),
        Subtype::DecimalMultiply => decimal(op(ops, 0) * op(ops, 2), op(ops, 1) as u32),
        Subtype::FractionToDecimal => {
            let (n, d) = (op(ops, 0), op(ops, 1).max(1));
            let places = terminating_places(n, d).unwrap_or(4);
            decimal(n * ipow(10, places as i64) / d, places)
        }
        Subtype::DecimalToFraction => Answer::Fraction(Fraction::new(op(ops, 0), ipow(10, op(ops, 1)))),
        Subtype::OrderOfOperationsParentheses => Answer::Integer((op(ops, 0) + op(ops, 1)) * op(ops, 2)),
        _ => Answer::Integer(op(ops, 0) + op(ops, 1) * op(ops, 2)),
    }
}

fn render(subtype: Subtype, ops: &[i64]) -> String {
    match subtype {
        Subtype::DecimalAdd | Subtype::DecimalSubtract => {
            let places = op(ops, 2) as u32;
            let symbol = if subtype == Subtype::DecimalAdd { "+" } else { "-" };
            format!("{} {symbol} {} = ?", format_scaled(op(ops, 0), places), format_scaled(op(ops, 1), places))
        }
        Subtype::DecimalMultiply => {
            format!("{} × {} = ?", format_scaled(op(ops, 0), op(ops, 1) as u32), op(ops, 2))
        }
        Subtype::FractionToDecimal => format!("Write {}/{} as a decimal.", op(ops, 0), op(ops, 1)),
        Subtype::DecimalToFraction => {
            format!("Write {} as a fraction in lowest terms.", format_scaled(op(ops, 0), op(ops, 1) as u32))
        }
        Subtype::OrderOfOperationsParentheses => {
            format!("({} + {}) × {} = ?", op(ops, 0), op(ops, 1), op(ops, 2))
        }
        _ => format!("{} + {} × {} = ?", op(ops, 0), op(ops, 1), op(ops, 2)),
    }
}

fn micro(subtype: Subtype, ops: &[i64]) -> String {
    match subtype {
        Subtype::DecimalAdd | Subtype::DecimalSubtract => "Line up the decimal points before you start.".to_string(),
        Subtype::DecimalMultiply => {
            format!("Multiply as whole numbers, then put back {} decimal place(s).", op(ops, 1))
        }
        Subtype::FractionToDecimal => format!("Can you make the denominator {} into 10, 100 or 1000?", op(ops, 1)),
        Subtype::DecimalToFraction => "Read the decimal aloud: tenths, hundredths or thousandths?".to_string(),
        Subtype::OrderOfOperationsParentheses => "Work out the brackets first.".to_string(),
        _ => "Multiplication comes before addition.".to_string(),
    }
}

fn walkthrough(subtype: Subtype, ops: &[i64]) -> Vec<String> {
    let answer = solve(subtype, ops);
    let mut steps = match subtype {
        Subtype::DecimalAdd | Subtype::DecimalSubtract => {
            let scale = ipow(10, op(ops, 2));
            let symbol = if subtype == Subtype::DecimalAdd { "+" } else { "-" };
            vec![
                "Line up the decimal points.".to_string(),
                format!("Work as whole numbers of 1/{scale}s: {} {symbol} {}.", op(ops, 0), op(ops, 1)),
                "Put the decimal point back in the same column.".to_string(),
            ]
        }
        Subtype::DecimalMultiply => vec![
            format!("Ignore the point: {} × {} = {}.", op(ops, 0), op(ops, 2), op(ops, 0) * op(ops, 2)),
            format!("The decimal had {} place(s), so the answer does too.", op(ops, 1)),
        ],
        Subtype::FractionToDecimal => {
            let (n, d) = (op(ops, 0), op(ops, 1).max(1));
            let places = terminating_places(n, d).unwrap_or(4);
            let scale = ipow(10, places as i64);
            vec![
                format!("{scale} ÷ {d} = {}, so multiply top and bottom by {}.", scale / d, scale / d),
                format!("{n}/{d} = {}/{scale}.", n * scale / d),
            ]
        }
        Subtype::DecimalToFraction => {
            let scale = ipow(10, op(ops, 1));
            let g = gcd(op(ops, 0), scale).max(1);
            vec![
                format!("{} = {}/{scale}.", format_scaled(op(ops, 0), op(ops, 1) as u32), op(ops, 0)),
                format!("Divide top and bottom by {g}."),
            ]
        }
        Subtype::OrderOfOperationsParentheses => vec![
            format!("Brackets: {} + {} = {}.", op(ops, 0), op(ops, 1), op(ops, 0) + op(ops, 1)),
            format!("Then multiply by {}.", op(ops, 2)),
        ],
        _ => vec![
            format!("Multiply first: {} × {} = {}.", op(ops, 1), op(ops, 2), op(ops, 1) * op(ops, 2)),
            format!("Then add {}.", op(ops, 0)),
        ],
    };
    steps.push(format!("Answer: {answer}."));
    steps
}

fn layout(subtype: Subtype) -> Layout {
    match subtype {
        Subtype::DecimalAdd | Subtype::DecimalSubtract | Subtype::DecimalMultiply => {
            Layout::Fixed(DisplayFormat::Vertical)
        }
        _ => Layout::Fixed(DisplayFormat::Expression),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum_engine::random::RngSource;

    #[test]
    fn scaled_answers() {
        assert_eq!(solve(Subtype::DecimalAdd, &[125, 250, 2]), Answer::Decimal { value: 3.75, places: 2 });
        assert_eq!(solve(Subtype::DecimalMultiply, &[25, 1, 4]), Answer::Decimal { value: 10.0, places: 1 });
        assert_eq!(solve(Subtype::FractionToDecimal, &[3, 8]), Answer::Decimal { value: 0.375, places: 3 });
        assert_eq!(solve(Subtype::DecimalToFraction, &[25, 2]), Answer::Fraction(Fraction::new(1, 4)));
        assert_eq!(render(Subtype::DecimalSubtract, &[305, 12, 2]), "3.05 - 0.12 = ?");
    }

    #[test]
    fn order_of_operations() {
        assert_eq!(solve(Subtype::OrderOfOperations, &[2, 3, 4]), Answer::Integer(14));
        assert_eq!(solve(Subtype::OrderOfOperationsParentheses, &[2, 3, 4]), Answer::Integer(20));
    }

    #[test]
    fn fraction_to_decimal_always_terminates() {
        let mut rng = RngSource::seeded(4);
        for _ in 0..100 {
            let d = construct(Subtype::FractionToDecimal, &GenParams::new(), &mut rng, &EngineSettings::default());
            assert!(terminating_places(d.operands[0], d.operands[1]).is_some());
        }
    }
}
