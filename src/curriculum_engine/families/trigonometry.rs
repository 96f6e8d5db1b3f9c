//! Angle conversion and exact trig values at the special angles.

use crate::config::EngineSettings;
use crate::curriculum_engine::{
    arithmetic::{format_pi_fraction, gcd},
    families::{Family, Layout},
    helpers::{op, Draft},
    models::{Answer, DisplayFormat, GenParams},
    random::{pick, RandomSource},
    subtype::Subtype,
};

pub static FAMILY: Family = Family {
    name: "trigonometry",
    construct,
    solve,
    render,
    micro,
    walkthrough,
    layout,
};

const SPECIAL_ANGLES: [i64; 16] = [0, 30, 45, 60, 90, 120, 135, 150, 180, 210, 225, 240, 270, 300, 315, 330];

fn construct(
    subtype: Subtype,
    _params: &GenParams,
    random: &mut dyn RandomSource,
    _settings: &EngineSettings,
) -> Draft {
    let angles: Vec<i64> = match subtype {
        // tan is undefined at 90 and 270.
        Subtype::SpecialAngleTangent => SPECIAL_ANGLES.iter().copied().filter(|a| a % 180 != 90).collect(),
        Subtype::DegreesToRadians | Subtype::RadiansToDegrees => {
            SPECIAL_ANGLES.iter().copied().filter(|a| *a != 0).collect()
        }
        _ => SPECIAL_ANGLES.to_vec(),
    };
    let degrees = pick(random, &angles);
    match subtype {
        // [numerator, denominator] of the multiple of π
        Subtype::RadiansToDegrees => {
            let g = gcd(degrees, 180).max(1);
            Draft::new(vec![degrees / g, 180 / g])
        }
        _ => Draft::new(vec![degrees]),
    }
}

/// Exact value at a first-quadrant reference angle.
fn first_quadrant_sine(reference: i64) -> &'static str {
    match reference {
        0  => "0",
        30 => "1/2",
        45 => "√2/2",
        60 => "√3/2",
        _  => "1",
    }
}

fn first_quadrant_tangent(reference: i64) -> &'static str {
    match reference {
        0  => "0",
        30 => "√3/3",
        45 => "1",
        _  => "√3",
    }
}

/// Reference angle and quadrant (1..=4; axis angles fold into the lower one).
fn reference(degrees: i64) -> (i64, i64) {
    let d = degrees.rem_euclid(360);
    match d {
        0..=90    => (d, 1),
        91..=180  => (180 - d, 2),
        181..=270 => (d - 180, 3),
        _         => (360 - d, 4),
    }
}

fn signed(value: &str, negative: bool) -> String {
    if negative && value != "0" { format!("-{value}") } else { value.to_string() }
}

fn exact_value(subtype: Subtype, degrees: i64) -> String {
    let (r, q) = reference(degrees);
    match subtype {
        Subtype::SpecialAngleSine => signed(first_quadrant_sine(r), q >= 3 && r != 0),
        Subtype::SpecialAngleCosine => {
            let cos_ref = first_quadrant_sine(90 - r);
            signed(cos_ref, q == 2 || q == 3)
        }
        _ => signed(first_quadrant_tangent(r), q == 2 || q == 4),
    }
}

fn solve(subtype: Subtype, ops: &[i64]) -> Answer {
    let a = op(ops, 0);
    match subtype {
        Subtype::DegreesToRadians => Answer::Expression(format_pi_fraction(a, 180)),
        Subtype::RadiansToDegrees => Answer::Integer(a * 180 / op(ops, 1).max(1)),
        _ => Answer::Text(exact_value(subtype, a)),
    }
}

fn function_name(subtype: Subtype) -> &'static str {
    match subtype {
        Subtype::SpecialAngleSine   => "sin",
        Subtype::SpecialAngleCosine => "cos",
        _                           => "tan",
    }
}

fn render(subtype: Subtype, ops: &[i64]) -> String {
    let a = op(ops, 0);
    match subtype {
        Subtype::DegreesToRadians => format!("Convert {a}° to radians."),
        Subtype::RadiansToDegrees => format!("Convert {} to degrees.", format_pi_fraction(a, op(ops, 1))),
        _ => format!("Find the exact value of {}({a}°).", function_name(subtype)),
    }
}

fn micro(subtype: Subtype, ops: &[i64]) -> String {
    match subtype {
        Subtype::DegreesToRadians => "Multiply by π/180.".to_string(),
        Subtype::RadiansToDegrees => "Replace π with 180°.".to_string(),
        _ => {
            let (r, q) = reference(op(ops, 0));
            format!("Use the reference angle {r}° and the sign in quadrant {q}.")
        }
    }
}

fn walkthrough(subtype: Subtype, ops: &[i64]) -> Vec<String> {
    let a = op(ops, 0);
    let answer = solve(subtype, ops);
    let mut steps = match subtype {
        Subtype::DegreesToRadians => vec![
            format!("{a}° × π/180 = {a}π/180."),
            "Reduce the fraction.".to_string(),
        ],
        Subtype::RadiansToDegrees => vec![
            format!("{} × 180° / π.", format_pi_fraction(a, op(ops, 1))),
            format!("{a} × 180 ÷ {} = {}.", op(ops, 1), a * 180 / op(ops, 1).max(1)),
        ],
        _ => {
            let (r, q) = reference(a);
            vec![
                format!("{a}° is in quadrant {q} with reference angle {r}°."),
                format!("{}({r}°) from the special triangles.", function_name(subtype)),
                "Apply the quadrant sign (All, Sin, Tan, Cos).".to_string(),
            ]
        }
    };
    steps.push(format!("Answer: {answer}."));
    steps
}

fn layout(subtype: Subtype) -> Layout {
    match subtype {
        Subtype::DegreesToRadians | Subtype::RadiansToDegrees => Layout::Fixed(DisplayFormat::Expression),
        _ => Layout::Fixed(DisplayFormat::Geometry),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_values_with_signs() {
        assert_eq!(exact_value(Subtype::SpecialAngleSine, 210), "-1/2");
        assert_eq!(exact_value(Subtype::SpecialAngleCosine, 120), "-1/2");
        assert_eq!(exact_value(Subtype::SpecialAngleCosine, 90), "0");
        assert_eq!(exact_value(Subtype::SpecialAngleTangent, 135), "-1");
        assert_eq!(exact_value(Subtype::SpecialAngleSine, 180), "0");
        assert_eq!(exact_value(Subtype::SpecialAngleCosine, 180), "-1");
        assert_eq!(exact_value(Subtype::SpecialAngleSine, 270), "-1");
    }

    #[test]
    fn conversions() {
        assert_eq!(solve(Subtype::DegreesToRadians, &[135]), Answer::Expression("3π/4".into()));
        assert_eq!(solve(Subtype::RadiansToDegrees, &[5, 6]), Answer::Integer(150));
        assert_eq!(render(Subtype::RadiansToDegrees, &[5, 6]), "Convert 5π/6 to degrees.");
    }
}
