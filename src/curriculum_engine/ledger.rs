//! Port for the per-learner "seen concepts" ledger.
//!
//! The engine never stores learner state. Callers own a ledger, consult it
//! to decide whether an introduction should fire, and mark concepts as seen
//! afterwards. [`InMemoryLedger`] backs tests and the demo.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::curriculum_engine::{
    models::CurriculumPosition,
    sequencer::{introduction_of, new_concepts_at, Concept},
};

/// Key-value store of concepts a learner has been introduced to.
pub trait SeenConceptsLedger {
    fn has_seen(&self, learner: &str, concept: Concept) -> bool;
    fn mark_seen(&mut self, learner: &str, concept: Concept);
    /// Forget one concept. Returns whether it was recorded.
    fn clear(&mut self, learner: &str, concept: Concept) -> bool;
    fn seen(&self, learner: &str) -> Vec<Concept>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryLedger {
    entries: HashMap<String, BTreeSet<Concept>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SeenConceptsLedger for InMemoryLedger {
    fn has_seen(&self, learner: &str, concept: Concept) -> bool {
        self.entries.get(learner).is_some_and(|set| set.contains(&concept))
    }

    fn mark_seen(&mut self, learner: &str, concept: Concept) {
        self.entries.entry(learner.to_string()).or_default().insert(concept);
    }

    fn clear(&mut self, learner: &str, concept: Concept) -> bool {
        self.entries.get_mut(learner).is_some_and(|set| set.remove(&concept))
    }

    fn seen(&self, learner: &str) -> Vec<Concept> {
        self.entries
            .get(learner)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }
}

/// Concepts introduced at `position` that this learner has not seen yet.
pub fn pending_introductions(
    ledger: &dyn SeenConceptsLedger,
    learner: &str,
    position: CurriculumPosition,
) -> Vec<Concept> {
    new_concepts_at(position.level, position.worksheet)
        .into_iter()
        .filter(|c| !ledger.has_seen(learner, *c))
        .collect()
}

/// Remediation: forget every seen concept introduced at or after `position`
/// so the introductions fire again on the way forward. Returns the cleared
/// concepts.
pub fn invalidate_from(
    ledger: &mut dyn SeenConceptsLedger,
    learner: &str,
    position: CurriculumPosition,
) -> Vec<Concept> {
    let cleared: Vec<Concept> = ledger
        .seen(learner)
        .into_iter()
        .filter(|c| introduction_of(*c) >= position)
        .filter(|c| ledger.clear(learner, *c))
        .collect();
    debug!(learner, %position, cleared = cleared.len(), "invalidated concepts");
    cleared
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum_engine::{models::Level, sequencer::is_concept_available};

    #[test]
    fn introductions_fire_once_per_learner() {
        let mut ledger = InMemoryLedger::new();
        let at = CurriculumPosition::new(Level::E, 1);
        assert_eq!(pending_introductions(&ledger, "kid-1", at), vec![Concept::FractionAddition]);
        ledger.mark_seen("kid-1", Concept::FractionAddition);
        assert!(pending_introductions(&ledger, "kid-1", at).is_empty());
        assert_eq!(pending_introductions(&ledger, "kid-2", at), vec![Concept::FractionAddition]);
    }

    #[test]
    fn invalidation_clears_only_later_concepts() {
        let mut ledger = InMemoryLedger::new();
        for c in [Concept::Multiplication, Concept::Division, Concept::FractionAddition] {
            ledger.mark_seen("kid", c);
        }
        let cleared = invalidate_from(&mut ledger, "kid", CurriculumPosition::new(Level::C, 111));
        assert_eq!(cleared, vec![Concept::Division, Concept::FractionAddition]);
        assert_eq!(ledger.seen("kid"), vec![Concept::Multiplication]);
        // Availability is positional and unaffected by the ledger.
        assert!(is_concept_available(Concept::FractionAddition, Level::F, 1));
    }

    #[test]
    fn clearing_unknown_entries_is_harmless() {
        let mut ledger = InMemoryLedger::new();
        assert!(!ledger.clear("nobody", Concept::Counting));
        assert!(ledger.seen("nobody").is_empty());
        assert!(!ledger.has_seen("nobody", Concept::Counting));
    }
}
