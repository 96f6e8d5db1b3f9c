//! # math_drill_gen
//!
//! A fully offline, deterministic generator of maths worksheet problems for a
//! 25-level curriculum running from pre-counting (7A) to calculus and the
//! elective levels.
//!
//! Every problem is tied to a curriculum position, a level plus a worksheet
//! number from 1 to 200. The engine decides which operations are legal there,
//! looks up the exact subtype and operand ranges for that worksheet, builds
//! operands that satisfy the worksheet's constraints, and attaches a
//! difficulty score and three tiers of hints.
//!
//! ## How it works
//!
//! 1. Create a [`ProblemRequest`] with a level, a worksheet and an optional
//!    RNG seed.
//! 2. Call [`generate_problem`]: the sequencer lists the legal operations,
//!    one is chosen, the resolver maps it to a subtype and parameters, and the
//!    subtype's family constructs, solves and renders the problem.
//! 3. The returned [`Problem`] carries the question, operands, correct answer,
//!    display format, difficulty and hints. Use
//!    [`client_adapter::to_client_payload`] to strip the answer before sending
//!    it to a learner.
//!
//! ## Key features
//!
//! - **Deterministic**: `rng_seed: Some(u64)` reproduces the exact same
//!   problem, hints and worked example every time.
//! - **Never stuck**: when a worksheet's constraints cannot be met within the
//!   attempt cap the engine still returns a correct problem and marks it
//!   `degraded`.
//! - **Concept gating**: [`is_concept_available`] answers whether a concept has
//!   been taught by a given position.
//! - **Problem sets**: [`assemble_problem_set`] builds a deduplicated set sorted
//!   by difficulty.
//!
//! ## Quick start
//!
//! ```rust
//! use math_drill_gen::{generate_problem, is_concept_available, Concept, Level, ProblemRequest};
//!
//! // Level C, worksheet 12: times tables up to 3.
//! let problem = generate_problem(ProblemRequest::seeded(Level::C, 12, 42)).unwrap();
//! println!("{} -> {}", problem.question, problem.correct_answer);
//! assert!((1..=10).contains(&problem.difficulty));
//!
//! // Fraction addition is introduced at E1.
//! assert!(!is_concept_available(Concept::FractionAddition, Level::D, 200));
//! assert!(is_concept_available(Concept::FractionAddition, Level::E, 1));
//! ```

pub mod client_adapter;
pub mod config;
pub mod curriculum_engine;
pub mod telemetry;

// Convenience re-exports so callers can use `math_drill_gen::generate_problem`
// directly without reaching into `curriculum_engine::`.
pub use config::{load_settings_from_env, EngineSettings};
pub use curriculum_engine::{
    assemble_problem_set, compose, generate, generate_problem, generate_problem_with,
    is_concept_available, legal_operations, new_concepts_at, resolve, score, Answer,
    Concept, CurriculumPosition, DisplayFormat, EngineError, EngineResult, Level,
    MissingPosition, OperationKind, Problem, ProblemRequest, ProblemSet, ProblemSetRequest,
    Subtype, WorksheetConfig,
};

#[cfg(test)]
mod tests;
