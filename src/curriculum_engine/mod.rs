//! Curriculum engine: worksheet positions in, solved and hinted problems out.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: levels, operations, params, problems, hints |
//! | `error`      | `EngineError` and the `EngineResult` alias |
//! | `random`     | Injectable random source, scripted source, rejection sampling |
//! | `arithmetic` | Digit, carry/borrow and number-theory helpers plus formatting |
//! | `subtype`    | Registry of all problem subtypes and their families |
//! | `helpers`    | Constructor drafts, operand shapes, shared renderers |
//! | `families`   | Per-topic constructors, solvers, renderers and walkthroughs |
//! | `tables`     | Worksheet-bucket tables for every (level, operation) pair |
//! | `resolver`   | `(level, worksheet, operation)` to a `WorksheetConfig` |
//! | `sequencer`  | Legal operations per position and concept introduction points |
//! | `ledger`     | Per-learner record of concepts already introduced |
//! | `scorer`     | Difficulty on a 1 to 10 scale |
//! | `hints`      | Micro, visual and teaching hint tiers |
//! | `generator`  | Single-problem entry points `generate_problem` and `generate` |
//! | `assembler`  | Deduplicated, difficulty-ordered problem sets |

pub mod arithmetic;
pub mod assembler;
pub mod error;
pub mod families;
pub mod generator;
pub mod helpers;
pub mod hints;
pub mod ledger;
pub mod models;
pub mod random;
pub mod resolver;
pub mod scorer;
pub mod sequencer;
pub mod subtype;
pub mod tables;

// Re-export the public API surface so callers can use
// `curriculum_engine::generate_problem` without reaching into sub-modules.
pub use assembler::{assemble_problem_set, ProblemSet, ProblemSetRequest};
pub use error::{EngineError, EngineResult};
pub use generator::{generate, generate_problem, generate_problem_with};
pub use hints::compose;
pub use ledger::{InMemoryLedger, SeenConceptsLedger};
pub use models::{
    Answer, CurriculumPosition, DisplayFormat, Fraction, GenParams, HintData, Level,
    MissingPosition, OperationKind, Problem, ProblemHints, ProblemRequest, WorkedExample,
    WorksheetConfig, WORKSHEETS_PER_LEVEL,
};
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use resolver::resolve;
pub use scorer::{score, LevelContext};
pub use sequencer::{
    is_concept_available, legal_operations, new_concepts_at, Concept,
};
pub use subtype::Subtype;
