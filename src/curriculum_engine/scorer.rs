use crate::curriculum_engine::{
    arithmetic::digit_count,
    helpers::Features,
    models::Level,
};

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 10;

/// Per-level step added to the digit multiplier.
const LEVEL_STEP: f64 = 0.15;

/// What the scorer needs to know besides the operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelContext {
    pub level: Level,
    pub features: Features,
    pub missing_operand: bool,
}

impl LevelContext {
    pub fn new(level: Level) -> Self {
        LevelContext { level, features: Features::default(), missing_operand: false }
    }
}

/// `1.0` at 7A, growing by 0.15 per level.
pub fn level_multiplier(level: Level) -> f64 {
    1.0 + LEVEL_STEP * level.index() as f64
}

/// Difficulty in `[1, 10]`.
///
/// Base is the widest operand's digit count times the level multiplier,
/// rounded. Carry, borrow, remainder and a missing operand each add one.
pub fn score(operands: &[i64], ctx: &LevelContext) -> u8 {
    let digits = operands.iter().map(|v| digit_count(*v)).max().unwrap_or(1);
    let base = (digits as f64 * level_multiplier(ctx.level)).round() as i64;

    let bonus = [
        ctx.features.carry,
        ctx.features.borrow,
        ctx.features.remainder,
        ctx.missing_operand,
    ]
    .iter()
    .filter(|flag| **flag)
    .count() as i64;

    (base + bonus).clamp(MIN_DIFFICULTY as i64, MAX_DIFFICULTY as i64) as u8
}
