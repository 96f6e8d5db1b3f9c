//! Worksheet-sized sets of problems.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::EngineSettings;
use crate::curriculum_engine::{
    error::EngineResult,
    generator::{build_problem, make_problem_id},
    models::{Level, OperationKind, Problem, WorksheetConfig},
    random::{rejection_sample, RngSource},
    resolver::resolve,
    sequencer::{legal_operations, new_concepts_at, Concept},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemSetRequest {
    pub level: Level,
    pub worksheet: u32,
    /// Defaults to `EngineSettings::default_set_size`.
    pub count: Option<usize>,
    pub rng_seed: Option<u64>,
}

impl ProblemSetRequest {
    pub fn new(level: Level, worksheet: u32) -> Self {
        ProblemSetRequest { level, worksheet, count: None, rng_seed: None }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemSet {
    pub level: Level,
    pub worksheet: u32,
    pub operations: Vec<OperationKind>,
    /// Concepts introduced at exactly this position.
    pub new_concepts: Vec<Concept>,
    /// Ordered by ascending difficulty.
    pub problems: Vec<Problem>,
    pub degraded_count: usize,
}

/// Build a set of problems for one worksheet position.
///
/// Every legal operation is resolved before anything is generated, so a bad
/// position fails without partial output. Operations are interleaved
/// round-robin, repeated operand lists are resampled, and the finished set is
/// stably sorted by difficulty.
pub fn assemble_problem_set(request: ProblemSetRequest, settings: &EngineSettings) -> EngineResult<ProblemSet> {
    let ProblemSetRequest { level, worksheet, count, rng_seed } = request;
    let operations = legal_operations(level, worksheet)?;
    let configs = operations
        .iter()
        .map(|op| resolve(level, worksheet, *op))
        .collect::<EngineResult<Vec<WorksheetConfig>>>()?;

    let count = count.unwrap_or(settings.default_set_size);
    let mut random = RngSource::from_seed_option(rng_seed);
    let mut seen: HashSet<Vec<i64>> = HashSet::with_capacity(count);
    let mut problems = Vec::with_capacity(count);

    for config in configs.iter().cycle().take(count) {
        let family = config.subtype.family();
        let id = make_problem_id(level, worksheet, &mut random);
        let sampled = rejection_sample(
            &mut random,
            settings.max_rejection_attempts,
            |r| (family.construct)(config.subtype, &config.params, r, settings),
            |draft| !seen.contains(&draft.operands),
        );
        // Small pools run out of fresh operands; a repeat is not a constraint
        // violation, so the draft keeps its own degraded flag.
        if sampled.degraded {
            debug!(subtype = config.subtype.key(), "no fresh operands left, keeping a repeat");
        }
        let draft = sampled.value;
        seen.insert(draft.operands.clone());
        problems.push(build_problem(config, id, draft, settings));
    }

    problems.sort_by_key(|p| p.difficulty);
    let degraded_count = problems.iter().filter(|p| p.degraded).count();
    info!(%level, worksheet, problems = problems.len(), degraded_count, "assembled problem set");

    Ok(ProblemSet {
        level,
        worksheet,
        operations,
        new_concepts: new_concepts_at(level, worksheet),
        problems,
        degraded_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum_engine::error::EngineError;

    #[test]
    fn default_size_and_sorted_difficulty() {
        let set = assemble_problem_set(ProblemSetRequest::new(Level::C, 30).with_seed(4), &EngineSettings::default())
            .unwrap();
        assert_eq!(set.problems.len(), 10);
        assert!(set.problems.windows(2).all(|w| w[0].difficulty <= w[1].difficulty));
        assert_eq!(set.operations, vec![OperationKind::Multiplication]);
    }

    #[test]
    fn operands_are_unique_when_the_pool_allows() {
        let set = assemble_problem_set(
            ProblemSetRequest::new(Level::B, 150).with_count(20).with_seed(8),
            &EngineSettings::default(),
        )
        .unwrap();
        let unique: HashSet<&Vec<i64>> = set.problems.iter().map(|p| &p.operands).collect();
        assert_eq!(unique.len(), 20);
    }

    #[test]
    fn review_phase_interleaves_operations() {
        let set = assemble_problem_set(
            ProblemSetRequest::new(Level::B, 190).with_count(6).with_seed(2),
            &EngineSettings::default(),
        )
        .unwrap();
        let adds = set.problems.iter().filter(|p| p.operation == OperationKind::Addition).count();
        assert_eq!(adds, 3);
        assert_eq!(set.problems.len() - adds, 3);
    }

    #[test]
    fn tiny_pools_still_fill_the_set() {
        // 7A worksheet 1 counts up to five objects: at most five distinct problems.
        let set = assemble_problem_set(
            ProblemSetRequest::new(Level::SevenA, 1).with_count(8).with_seed(1),
            &EngineSettings::default(),
        )
        .unwrap();
        assert_eq!(set.problems.len(), 8);
        assert_eq!(set.degraded_count, 0);
    }

    #[test]
    fn reports_new_concepts_and_rejects_bad_positions() {
        let set = assemble_problem_set(ProblemSetRequest::new(Level::E, 1).with_count(1).with_seed(1), &EngineSettings::default())
            .unwrap();
        assert_eq!(set.new_concepts, vec![Concept::FractionAddition]);
        assert!(matches!(
            assemble_problem_set(ProblemSetRequest::new(Level::E, 0), &EngineSettings::default()),
            Err(EngineError::WorksheetOutOfRange { .. })
        ));
    }

    #[test]
    fn zero_count_is_an_empty_set() {
        let set = assemble_problem_set(ProblemSetRequest::new(Level::A, 5).with_count(0), &EngineSettings::default())
            .unwrap();
        assert!(set.problems.is_empty());
    }
}
