//! Multiplication: times tables through 3-digit × 2-digit long multiplication.
//!
//! Operands are `[a, b]`. Times-table subtypes draw the table (`b`) from
//! `range_b` and the multiplier from `range_a`.

use crate::config::EngineSettings;
use crate::curriculum_engine::{
    arithmetic::digits_lsd,
    families::{Family, Layout},
    helpers::{apply_order, draw, op, pick_shape, render_chain, Draft},
    models::{Answer, GenParams},
    random::RandomSource,
    subtype::Subtype,
};

pub static FAMILY: Family = Family {
    name: "multiplication",
    construct,
    solve,
    render,
    micro,
    walkthrough,
    layout,
};

fn is_table(subtype: Subtype) -> bool {
    matches!(
        subtype,
        Subtype::TimesTablesToThree
            | Subtype::TimesTablesFourFive
            | Subtype::TimesTablesSixSeven
            | Subtype::TimesTablesEightNine
            | Subtype::TimesTablesMixed
    )
}

fn construct(
    subtype: Subtype,
    params: &GenParams,
    random: &mut dyn RandomSource,
    _settings: &EngineSettings,
) -> Draft {
    let a = draw(random, params.range_a);
    let b = match subtype {
        Subtype::MultiplyByTen => params.fixed.unwrap_or(10),
        _ => params.fixed.unwrap_or_else(|| draw(random, params.range_b)),
    };
    let force_missing = subtype == Subtype::MultiplyMissingFactor;
    // Times-table drills keep the table as the second factor.
    let commutative = !is_table(subtype);
    let shape = pick_shape(random, params, commutative, force_missing);
    Draft::new(apply_order(vec![a, b], shape)).with_shape(shape)
}

fn solve(_subtype: Subtype, ops: &[i64]) -> Answer {
    Answer::Integer(ops.iter().product())
}

fn render(_subtype: Subtype, ops: &[i64]) -> String {
    render_chain(ops, "×")
}

fn micro(subtype: Subtype, ops: &[i64]) -> String {
    let (a, b) = (op(ops, 0), op(ops, 1));
    match subtype {
        Subtype::MultiplyByTen => "Multiplying by 10 shifts every digit one place to the left.".to_string(),
        _ if a <= 12 && b <= 12 => format!("Count up in {b}s, {a} times."),
        _ => format!("Split {a} into tens and ones and multiply each part by {b}."),
    }
}

/// Partial products, one per digit of the second factor.
fn long_steps(a: i64, b: i64) -> Vec<String> {
    const PLACES: [&str; 4] = ["ones", "tens", "hundreds", "thousands"];
    let mut steps = vec![format!("Write {a} on top and {b} underneath.")];
    let mut partials = Vec::new();
    let mut scale = 1i64;
    for (i, digit) in digits_lsd(b).into_iter().enumerate() {
        let digit = digit as i64;
        let partial = a * digit * scale;
        let place = PLACES.get(i).copied().unwrap_or("next");
        steps.push(format!(
            "Multiply {a} by the {place} digit {digit}: {a} × {} = {partial}.",
            digit * scale
        ));
        partials.push(partial);
        scale *= 10;
    }
    if partials.len() > 1 {
        let listed = partials.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(" + ");
        steps.push(format!("Add the partial products: {listed} = {}.", a * b));
    }
    steps.push(format!("So {a} × {b} = {}.", a * b));
    steps
}

fn walkthrough(_subtype: Subtype, ops: &[i64]) -> Vec<String> {
    let (a, b) = (op(ops, 0), op(ops, 1));
    if a <= 12 && b <= 12 {
        let skips = (1..=a).map(|k| (k * b).to_string()).collect::<Vec<_>>().join(", ");
        let skips = if skips.is_empty() { "0".to_string() } else { skips };
        return vec![
            format!("{a} × {b} means {a} groups of {b}."),
            format!("Count in {b}s: {skips}."),
            format!("So {a} × {b} = {}.", a * b),
        ];
    }
    long_steps(a, b)
}

fn layout(_subtype: Subtype) -> Layout {
    Layout::Binary { symbol: "×" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum_engine::random::RngSource;

    #[test]
    fn tables_stay_in_range() {
        let mut rng = RngSource::seeded(3);
        let params = GenParams::new().a(0, 12).b(4, 5);
        for _ in 0..200 {
            let d = construct(Subtype::TimesTablesFourFive, &params, &mut rng, &EngineSettings::default());
            assert!((0..=12).contains(&d.operands[0]));
            assert!((4..=5).contains(&d.operands[1]), "{:?}", d.operands);
        }
    }

    #[test]
    fn missing_factor_is_forced() {
        let mut rng = RngSource::seeded(8);
        let d = construct(Subtype::MultiplyMissingFactor, &GenParams::new(), &mut rng, &EngineSettings::default());
        assert!(d.shape.is_missing());
    }

    #[test]
    fn long_multiplication_lists_partials() {
        let steps = long_steps(23, 45);
        assert_eq!(steps[1], "Multiply 23 by the ones digit 5: 23 × 5 = 115.");
        assert_eq!(steps[2], "Multiply 23 by the tens digit 4: 23 × 40 = 920.");
        assert_eq!(steps[3], "Add the partial products: 115 + 920 = 1035.");
    }
}
