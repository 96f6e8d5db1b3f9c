//! Vectors and transformations of points in the plane.
//!
//! Vectors and points are `(x, y)` pairs flattened into the operand list.
//! Reflections carry an axis code and rotations a quarter-turn count.

use crate::config::EngineSettings;
use crate::curriculum_engine::{
    arithmetic::{format_point, isqrt, paren},
    families::{Family, Layout},
    helpers::{draw, draw_nonzero, op, Draft},
    models::{Answer, DisplayFormat, GenParams},
    random::{pick, RandomSource},
    subtype::Subtype,
};

pub static FAMILY: Family = Family {
    name: "geometry",
    construct,
    solve,
    render,
    micro,
    walkthrough,
    layout,
};

/// Integer-length vectors for the magnitude topic.
const PYTHAGOREAN_VECTORS: [(i64, i64); 6] = [(3, 4), (5, 12), (6, 8), (8, 15), (-3, 4), (12, -5)];

const AXIS_X: i64 = 0;
const AXIS_Y: i64 = 1;
const AXIS_DIAGONAL: i64 = 2;

fn construct(
    subtype: Subtype,
    params: &GenParams,
    random: &mut dyn RandomSource,
    _settings: &EngineSettings,
) -> Draft {
    let r = params.range_a;
    let ops = match subtype {
        // [x1, y1, x2, y2]
        Subtype::VectorAdd | Subtype::DotProduct => {
            vec![draw(random, r), draw(random, r), draw(random, r), draw(random, r)]
        }
        // [k, x, y]
        Subtype::VectorScale | Subtype::DilatePoint => {
            vec![draw_nonzero(random, params.range_b), draw(random, r), draw(random, r)]
        }
        Subtype::VectorMagnitude => {
            let (x, y) = pick(random, &PYTHAGOREAN_VECTORS);
            vec![x, y]
        }
        // [x, y, dx, dy]
        Subtype::TranslatePoint => vec![
            draw(random, r),
            draw(random, r),
            draw_nonzero(random, params.range_b),
            draw_nonzero(random, params.range_b),
        ],
        // [x, y, axis]
        Subtype::ReflectPoint => vec![draw(random, r), draw(random, r), random.next_int(AXIS_X, AXIS_DIAGONAL)],
        // [x, y, quarter_turns] counter-clockwise about the origin
        _ => vec![draw(random, r), draw(random, r), random.next_int(1, 3)],
    };
    Draft::new(ops)
}

fn rotate(x: i64, y: i64, quarter_turns: i64) -> (i64, i64) {
    match quarter_turns.rem_euclid(4) {
        1 => (-y, x),
        2 => (-x, -y),
        3 => (y, -x),
        _ => (x, y),
    }
}

fn reflect(x: i64, y: i64, axis: i64) -> (i64, i64) {
    match axis {
        AXIS_X => (x, -y),
        AXIS_Y => (-x, y),
        _      => (y, x),
    }
}

fn axis_name(axis: i64) -> &'static str {
    match axis {
        AXIS_X => "the x-axis",
        AXIS_Y => "the y-axis",
        _      => "the line y = x",
    }
}

fn vector(x: i64, y: i64) -> String {
    format!("⟨{x}, {y}⟩")
}

fn solve(subtype: Subtype, ops: &[i64]) -> Answer {
    let (a, b, c, d) = (op(ops, 0), op(ops, 1), op(ops, 2), op(ops, 3));
    match subtype {
        Subtype::VectorAdd => Answer::Text(vector(a + c, b + d)),
        Subtype::VectorScale => Answer::Text(vector(a * b, a * c)),
        Subtype::DotProduct => Answer::Integer(a * c + b * d),
        Subtype::VectorMagnitude => Answer::Integer(isqrt(a * a + b * b)),
        Subtype::TranslatePoint => Answer::Text(format_point(a + c, b + d)),
        Subtype::ReflectPoint => {
            let (x, y) = reflect(a, b, c);
            Answer::Text(format_point(x, y))
        }
        Subtype::DilatePoint => Answer::Text(format_point(a * b, a * c)),
        _ => {
            let (x, y) = rotate(a, b, c);
            Answer::Text(format_point(x, y))
        }
    }
}

fn render(subtype: Subtype, ops: &[i64]) -> String {
    let (a, b, c, d) = (op(ops, 0), op(ops, 1), op(ops, 2), op(ops, 3));
    match subtype {
        Subtype::VectorAdd => format!("{} + {} = ?", vector(a, b), vector(c, d)),
        Subtype::VectorScale => format!("{a} · {} = ?", vector(b, c)),
        Subtype::DotProduct => format!("{} · {} = ?", vector(a, b), vector(c, d)),
        Subtype::VectorMagnitude => format!("Find the magnitude of {}.", vector(a, b)),
        Subtype::TranslatePoint => format!("Translate {} by {}.", format_point(a, b), vector(c, d)),
        Subtype::ReflectPoint => format!("Reflect {} in {}.", format_point(a, b), axis_name(c)),
        Subtype::DilatePoint => format!("Dilate {} by scale factor {a} about the origin.", format_point(b, c)),
        _ => format!(
            "Rotate {} by {}° counter-clockwise about the origin.",
            format_point(a, b),
            c * 90
        ),
    }
}

fn micro(subtype: Subtype, ops: &[i64]) -> String {
    match subtype {
        Subtype::VectorAdd | Subtype::TranslatePoint => "Add the x parts, then add the y parts.".to_string(),
        Subtype::VectorScale | Subtype::DilatePoint => format!("Multiply each coordinate by {}.", op(ops, 0)),
        Subtype::DotProduct => "Multiply matching parts, then add.".to_string(),
        Subtype::VectorMagnitude => "Use Pythagoras on the two components.".to_string(),
        Subtype::ReflectPoint => match op(ops, 2) {
            AXIS_X => "Reflecting in the x-axis flips the sign of y.".to_string(),
            AXIS_Y => "Reflecting in the y-axis flips the sign of x.".to_string(),
            _ => "Reflecting in y = x swaps the coordinates.".to_string(),
        },
        _ => "A 90° turn sends (x, y) to (-y, x).".to_string(),
    }
}

fn walkthrough(subtype: Subtype, ops: &[i64]) -> Vec<String> {
    let (a, b, c, d) = (op(ops, 0), op(ops, 1), op(ops, 2), op(ops, 3));
    let answer = solve(subtype, ops);
    let mut steps = match subtype {
        Subtype::VectorAdd | Subtype::TranslatePoint => vec![
            format!("x: {a} + {} = {}.", paren(c), a + c),
            format!("y: {b} + {} = {}.", paren(d), b + d),
        ],
        Subtype::VectorScale | Subtype::DilatePoint => vec![
            format!("x: {a} × {} = {}.", paren(b), a * b),
            format!("y: {a} × {} = {}.", paren(c), a * c),
        ],
        Subtype::DotProduct => vec![
            format!("{a} × {} = {}.", paren(c), a * c),
            format!("{b} × {} = {}.", paren(d), b * d),
            format!("{} + {} = {}.", a * c, paren(b * d), a * c + b * d),
        ],
        Subtype::VectorMagnitude => vec![
            format!("{}^2 + {}^2 = {}.", paren(a), paren(b), a * a + b * b),
            format!("√{} = {}.", a * a + b * b, isqrt(a * a + b * b)),
        ],
        Subtype::ReflectPoint => vec![
            format!("Start at {}.", format_point(a, b)),
            format!("Reflect in {}.", axis_name(c)),
        ],
        _ => {
            let mut s = vec![format!("Start at {}.", format_point(a, b))];
            let (mut x, mut y) = (a, b);
            for turn in 1..=c {
                (x, y) = rotate(x, y, 1);
                s.push(format!("After {}°: {}.", turn * 90, format_point(x, y)));
            }
            s
        }
    };
    steps.push(format!("Answer: {answer}."));
    steps
}

fn layout(subtype: Subtype) -> Layout {
    match subtype {
        Subtype::VectorAdd | Subtype::VectorScale | Subtype::DotProduct | Subtype::VectorMagnitude => {
            Layout::Fixed(DisplayFormat::Expression)
        }
        _ => Layout::Fixed(DisplayFormat::Geometry),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transformations() {
        assert_eq!(solve(Subtype::RotatePoint, &[2, 1, 1]), Answer::Text("(-1, 2)".into()));
        assert_eq!(solve(Subtype::RotatePoint, &[2, 1, 2]), Answer::Text("(-2, -1)".into()));
        assert_eq!(solve(Subtype::ReflectPoint, &[3, -4, AXIS_X]), Answer::Text("(3, 4)".into()));
        assert_eq!(solve(Subtype::ReflectPoint, &[3, -4, AXIS_DIAGONAL]), Answer::Text("(-4, 3)".into()));
        assert_eq!(solve(Subtype::DilatePoint, &[3, 1, -2]), Answer::Text("(3, -6)".into()));
    }

    #[test]
    fn vectors() {
        assert_eq!(solve(Subtype::DotProduct, &[1, 2, 3, 4]), Answer::Integer(11));
        assert_eq!(solve(Subtype::VectorMagnitude, &[-3, 4]), Answer::Integer(5));
        assert_eq!(render(Subtype::VectorAdd, &[1, 2, 3, 4]), "⟨1, 2⟩ + ⟨3, 4⟩ = ?");
    }
}
