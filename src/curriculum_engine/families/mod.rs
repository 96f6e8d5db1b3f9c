//! Subtype families grouped by strand.
//!
//! Each module exposes one `pub static FAMILY: Family` whose function
//! pointers all take the subtype tag, so one family serves many tags:
//!
//! ```ignore
//! construct(subtype, params, random, settings) -> Draft     // operands
//! solve(subtype, operands) -> Answer                         // full result
//! render(subtype, operands) -> String                        // question text
//! micro(subtype, operands) -> String                         // one-line nudge
//! walkthrough(subtype, operands) -> Vec<String>              // worked steps
//! ```
//!
//! `solve` is a pure function of the operands, which is what lets the hint
//! composer build and fully solve a comparable example problem.

use crate::config::EngineSettings;
use crate::curriculum_engine::{
    helpers::Draft,
    models::{Answer, DisplayFormat, GenParams},
    random::RandomSource,
    subtype::Subtype,
};

pub mod counting;
pub mod addition;
pub mod subtraction;
pub mod multiplication;
pub mod division;
pub mod fractions;
pub mod decimals;
pub mod integers;
pub mod algebra;
pub mod equations;
pub mod radicals;
pub mod exponents;
pub mod trigonometry;
pub mod sequences;
pub mod calculus;
pub mod geometry;
pub mod matrices;
pub mod probability;
pub mod statistics;

/// How a subtype is laid out on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Column arithmetic: horizontal or vertical by digit threshold, and
    /// eligible for missing-operand shapes.
    Binary { symbol: &'static str },
    Fixed(DisplayFormat),
}

pub type Construct = fn(Subtype, &GenParams, &mut dyn RandomSource, &EngineSettings) -> Draft;

pub struct Family {
    pub name: &'static str,
    pub construct: Construct,
    pub solve: fn(Subtype, &[i64]) -> Answer,
    pub render: fn(Subtype, &[i64]) -> String,
    pub micro: fn(Subtype, &[i64]) -> String,
    pub walkthrough: fn(Subtype, &[i64]) -> Vec<String>,
    pub layout: fn(Subtype) -> Layout,
}

impl std::fmt::Debug for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Family").field("name", &self.name).finish()
    }
}
