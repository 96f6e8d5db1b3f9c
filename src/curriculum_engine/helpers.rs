//! Shared builders used by every family constructor.
//!
//! Constructors return a [`Draft`]: the operands in display order, the
//! problem shape, and the features the scorer rewards. The generator turns a
//! draft into a finished [`Problem`](crate::curriculum_engine::models::Problem).

use serde::{Deserialize, Serialize};

use crate::curriculum_engine::{
    models::{GenParams, MissingPosition},
    random::{RandomSource, Sampled},
};

/// How a binary problem is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    /// `a op b = ?`
    Standard,
    /// Operands swapped relative to the constructor's natural order.
    Commutative,
    /// `? op b = c`
    MissingFirst,
    /// `a op ? = c`
    MissingSecond,
}

impl Shape {
    pub fn missing_position(self) -> Option<MissingPosition> {
        match self {
            Shape::MissingFirst  => Some(MissingPosition::First),
            Shape::MissingSecond => Some(MissingPosition::Second),
            _                    => None,
        }
    }

    pub fn is_missing(self) -> bool {
        self.missing_position().is_some()
    }
}

/// Column-arithmetic features that raise difficulty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Features {
    pub carry: bool,
    pub borrow: bool,
    pub remainder: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub operands: Vec<i64>,
    pub shape: Shape,
    pub features: Features,
    pub degraded: bool,
}

impl Draft {
    pub fn new(operands: Vec<i64>) -> Self {
        Draft { operands, shape: Shape::Standard, features: Features::default(), degraded: false }
    }

    pub fn sampled(sampled: Sampled<Vec<i64>>) -> Self {
        Draft { degraded: sampled.degraded, ..Draft::new(sampled.value) }
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_features(mut self, features: Features) -> Self {
        self.features = features;
        self
    }
}

/// Uniform draw from an inclusive `(lo, hi)` range.
pub fn draw(random: &mut dyn RandomSource, range: (i64, i64)) -> i64 {
    random.next_int(range.0, range.1)
}

/// Uniform non-zero draw; falls back to `hi` when the range is `0..=0`.
pub fn draw_nonzero(random: &mut dyn RandomSource, range: (i64, i64)) -> i64 {
    let v = draw(random, range);
    if v != 0 {
        v
    } else if range.1 != 0 {
        range.1
    } else {
        1
    }
}

/// Pick a presentation shape for a binary problem.
///
/// Without `allow_missing_operand` the result is `Standard` (or a coin-flip
/// `Commutative` for commutative operations). `force_missing` restricts the
/// choice to the two missing-operand shapes.
pub fn pick_shape(
    random: &mut dyn RandomSource,
    params: &GenParams,
    commutative: bool,
    force_missing: bool,
) -> Shape {
    if force_missing {
        return if random.chance(50) { Shape::MissingFirst } else { Shape::MissingSecond };
    }
    if !params.allow_missing_operand {
        return if commutative && random.chance(50) { Shape::Commutative } else { Shape::Standard };
    }
    let shapes: &[Shape] = if commutative {
        &[Shape::Standard, Shape::Commutative, Shape::MissingFirst, Shape::MissingSecond]
    } else {
        &[Shape::Standard, Shape::MissingFirst, Shape::MissingSecond]
    };
    crate::curriculum_engine::random::pick(random, shapes)
}

/// Swap a binary operand pair when the shape asks for commutative order.
pub fn apply_order(mut operands: Vec<i64>, shape: Shape) -> Vec<i64> {
    if shape == Shape::Commutative && operands.len() == 2 {
        operands.swap(0, 1);
    }
    operands
}

/// `a op b op c = ?`
pub fn render_chain(operands: &[i64], symbol: &str) -> String {
    let body = operands.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(&format!(" {symbol} "));
    format!("{body} = ?")
}

/// `? + 5 = 12` / `7 + ? = 12`.
pub fn render_missing(operands: &[i64], symbol: &str, result: &str, shape: Shape) -> String {
    let a = operands.first().copied().unwrap_or(0);
    let b = operands.get(1).copied().unwrap_or(0);
    match shape {
        Shape::MissingFirst  => format!("? {symbol} {b} = {result}"),
        Shape::MissingSecond => format!("{a} {symbol} ? = {result}"),
        _                    => format!("{a} {symbol} {b} = ?"),
    }
}

/// Operand lookup that never panics on short operand lists.
pub fn op(operands: &[i64], i: usize) -> i64 {
    operands.get(i).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum_engine::random::RngSource;

    #[test]
    fn shapes_respect_flags() {
        let mut rng = RngSource::seeded(9);
        let plain = GenParams::new();
        for _ in 0..200 {
            assert_eq!(pick_shape(&mut rng, &plain, false, false), Shape::Standard);
            assert!(!pick_shape(&mut rng, &plain, true, false).is_missing());
            assert!(pick_shape(&mut rng, &plain, true, true).is_missing());
            let s = pick_shape(&mut rng, &plain.missing(), false, false);
            assert_ne!(s, Shape::Commutative);
        }
    }

    #[test]
    fn missing_rendering() {
        assert_eq!(render_missing(&[7, 5], "+", "12", Shape::MissingFirst), "? + 5 = 12");
        assert_eq!(render_missing(&[7, 5], "+", "12", Shape::MissingSecond), "7 + ? = 12");
        assert_eq!(render_chain(&[1, 2, 3], "+"), "1 + 2 + 3 = ?");
        assert_eq!(apply_order(vec![2, 9], Shape::Commutative), vec![9, 2]);
    }
}
