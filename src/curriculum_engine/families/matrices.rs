//! 2×2 matrix arithmetic. Matrices are four row-major operands.

use crate::config::EngineSettings;
use crate::curriculum_engine::{
    arithmetic::{format_matrix, paren},
    families::{Family, Layout},
    helpers::{draw, draw_nonzero, op, Draft},
    models::{Answer, DisplayFormat, GenParams},
    random::RandomSource,
    subtype::Subtype,
};

pub static FAMILY: Family = Family {
    name: "matrices",
    construct,
    solve,
    render,
    micro,
    walkthrough,
    layout,
};

fn matrix(random: &mut dyn RandomSource, range: (i64, i64)) -> Vec<i64> {
    (0..4).map(|_| draw(random, range)).collect()
}

fn construct(
    subtype: Subtype,
    params: &GenParams,
    random: &mut dyn RandomSource,
    _settings: &EngineSettings,
) -> Draft {
    let r = params.range_a;
    let ops = match subtype {
        Subtype::MatrixAdd | Subtype::MatrixMultiply => {
            let mut ops = matrix(random, r);
            ops.extend(matrix(random, r));
            ops
        }
        Subtype::MatrixScalar => {
            let mut ops = vec![draw_nonzero(random, params.range_b)];
            ops.extend(matrix(random, r));
            ops
        }
        Subtype::Determinant2x2 => matrix(random, r),
        // [[1 + pq, p], [q, 1]] has determinant 1, so its inverse is integral.
        _ => {
            let (p, q) = (draw(random, params.range_b), draw(random, params.range_b));
            vec![1 + p * q, p, q, 1]
        }
    };
    Draft::new(ops)
}

fn at(ops: &[i64], offset: usize) -> [i64; 4] {
    [op(ops, offset), op(ops, offset + 1), op(ops, offset + 2), op(ops, offset + 3)]
}

fn determinant(m: [i64; 4]) -> i64 {
    m[0] * m[3] - m[1] * m[2]
}

fn product(x: [i64; 4], y: [i64; 4]) -> [i64; 4] {
    [
        x[0] * y[0] + x[1] * y[2],
        x[0] * y[1] + x[1] * y[3],
        x[2] * y[0] + x[3] * y[2],
        x[2] * y[1] + x[3] * y[3],
    ]
}

fn solve(subtype: Subtype, ops: &[i64]) -> Answer {
    match subtype {
        Subtype::MatrixAdd => {
            let (x, y) = (at(ops, 0), at(ops, 4));
            Answer::Text(format_matrix(&[x[0] + y[0], x[1] + y[1], x[2] + y[2], x[3] + y[3]]))
        }
        Subtype::MatrixScalar => {
            let k = op(ops, 0);
            Answer::Text(format_matrix(&at(ops, 1).map(|v| k * v)))
        }
        Subtype::MatrixMultiply => Answer::Text(format_matrix(&product(at(ops, 0), at(ops, 4)))),
        Subtype::Determinant2x2 => Answer::Integer(determinant(at(ops, 0))),
        _ => {
            let m = at(ops, 0);
            let det = determinant(m);
            let det = if det == 0 { 1 } else { det };
            Answer::Text(format_matrix(&[m[3] / det, -m[1] / det, -m[2] / det, m[0] / det]))
        }
    }
}

fn render(subtype: Subtype, ops: &[i64]) -> String {
    match subtype {
        Subtype::MatrixAdd => format!("{} + {} = ?", format_matrix(&at(ops, 0)), format_matrix(&at(ops, 4))),
        Subtype::MatrixScalar => format!("{} × {} = ?", op(ops, 0), format_matrix(&at(ops, 1))),
        Subtype::MatrixMultiply => format!("{} × {} = ?", format_matrix(&at(ops, 0)), format_matrix(&at(ops, 4))),
        Subtype::Determinant2x2 => format!("Find the determinant of {}.", format_matrix(&at(ops, 0))),
        _ => format!("Find the inverse of {}.", format_matrix(&at(ops, 0))),
    }
}

fn micro(subtype: Subtype, _ops: &[i64]) -> String {
    match subtype {
        Subtype::MatrixAdd => "Add entries in matching positions.".to_string(),
        Subtype::MatrixScalar => "Multiply every entry by the number in front.".to_string(),
        Subtype::MatrixMultiply => "Row of the first times column of the second.".to_string(),
        Subtype::Determinant2x2 => "ad - bc.".to_string(),
        _ => "Swap a and d, negate b and c, divide by the determinant.".to_string(),
    }
}

fn walkthrough(subtype: Subtype, ops: &[i64]) -> Vec<String> {
    let answer = solve(subtype, ops);
    let mut steps = match subtype {
        Subtype::MatrixMultiply => {
            let (x, y) = (at(ops, 0), at(ops, 4));
            vec![
                format!("Top left: {}×{} + {}×{}.", x[0], paren(y[0]), x[1], paren(y[2])),
                format!("Top right: {}×{} + {}×{}.", x[0], paren(y[1]), x[1], paren(y[3])),
                format!("Bottom left: {}×{} + {}×{}.", x[2], paren(y[0]), x[3], paren(y[2])),
                format!("Bottom right: {}×{} + {}×{}.", x[2], paren(y[1]), x[3], paren(y[3])),
            ]
        }
        Subtype::Determinant2x2 | Subtype::MatrixInverse2x2 => {
            let m = at(ops, 0);
            let mut s = vec![format!(
                "det = {}×{} - {}×{} = {}.",
                m[0], paren(m[3]), m[1], paren(m[2]), determinant(m)
            )];
            if subtype == Subtype::MatrixInverse2x2 {
                s.push(format!(
                    "Swap and negate: {}.",
                    format_matrix(&[m[3], -m[1], -m[2], m[0]])
                ));
                s.push("Divide every entry by the determinant.".to_string());
            }
            s
        }
        _ => vec!["Work entry by entry: top row, then bottom row.".to_string()],
    };
    steps.push(format!("Answer: {answer}."));
    steps
}

fn layout(_subtype: Subtype) -> Layout {
    Layout::Fixed(DisplayFormat::Table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum_engine::random::RngSource;

    #[test]
    fn products_and_determinants() {
        assert_eq!(
            solve(Subtype::MatrixMultiply, &[1, 2, 3, 4, 5, 6, 7, 8]),
            Answer::Text("[[19, 22], [43, 50]]".into())
        );
        assert_eq!(solve(Subtype::Determinant2x2, &[1, 2, 3, 4]), Answer::Integer(-2));
        assert_eq!(solve(Subtype::MatrixScalar, &[2, 1, 0, -1, 3]), Answer::Text("[[2, 0], [-2, 6]]".into()));
    }

    #[test]
    fn inverses_are_integral() {
        let mut rng = RngSource::seeded(19);
        let params = GenParams::new().a(-5, 5).b(-3, 3);
        for _ in 0..100 {
            let d = construct(Subtype::MatrixInverse2x2, &params, &mut rng, &EngineSettings::default());
            let m = at(&d.operands, 0);
            assert_eq!(determinant(m), 1);
            let [a, b, c, e] = m;
            let inverse = [e, -b, -c, a];
            assert_eq!(product(m, inverse), [1, 0, 0, 1]);
        }
    }
}
