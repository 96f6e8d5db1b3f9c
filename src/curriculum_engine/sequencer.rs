//! Operation ordering and concept gating.
//!
//! Two static maps drive this module:
//!
//! * per-level **phase tables** naming the operation(s) a worksheet range
//!   practises, scanned with the same first-covering rule as the curriculum
//!   tables;
//! * the **introduction map**, one [`CurriculumPosition`] per [`Concept`].
//!
//! Availability is a pure function of position. Whether a learner has already
//! seen an introduction lives in the external ledger, see
//! [`ledger`](crate::curriculum_engine::ledger).

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::curriculum_engine::{
    error::{EngineError, EngineResult},
    models::{CurriculumPosition, Level, OperationKind},
    resolver::{check_worksheet, first_covering, Bounded},
};

use OperationKind as Op;

// ---------------------------------------------------------------------------
// Phase tables
// ---------------------------------------------------------------------------

/// A worksheet range and the operations it practises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    pub upper: Option<u32>,
    pub operations: &'static [OperationKind],
}

impl Phase {
    const fn upto(upper: u32, operations: &'static [OperationKind]) -> Self {
        Phase { upper: Some(upper), operations }
    }

    const fn rest(operations: &'static [OperationKind]) -> Self {
        Phase { upper: None, operations }
    }
}

impl Bounded for Phase {
    fn upper(&self) -> Option<u32> {
        self.upper
    }
}

const COUNTING_ONLY: &[Phase] = &[Phase::rest(&[Op::Counting])];
const FIVE_A: &[Phase] = &[Phase::upto(120, &[Op::Counting]), Phase::rest(&[Op::NumberWriting])];
const FOUR_A: &[Phase] = &[Phase::upto(100, &[Op::NumberWriting]), Phase::rest(&[Op::Counting])];
const ADDITION_ONLY: &[Phase] = &[Phase::rest(&[Op::Addition])];
const A: &[Phase] = &[Phase::upto(80, &[Op::Addition]), Phase::rest(&[Op::Subtraction])];
const B: &[Phase] = &[
    Phase::upto(100, &[Op::Addition]),
    Phase::upto(180, &[Op::Subtraction]),
    Phase::rest(&[Op::Addition, Op::Subtraction]),
];
const C: &[Phase] = &[Phase::upto(110, &[Op::Multiplication]), Phase::rest(&[Op::Division])];
const D: &[Phase] = &[
    Phase::upto(60, &[Op::Multiplication]),
    Phase::upto(130, &[Op::Division]),
    Phase::rest(&[Op::Fractions]),
];
const E: &[Phase] = &[Phase::rest(&[Op::Fractions])];
const F: &[Phase] = &[
    Phase::upto(70, &[Op::Fractions]),
    Phase::upto(140, &[Op::Decimals]),
    Phase::rest(&[Op::OrderOfOperations]),
];
const G: &[Phase] = &[
    Phase::upto(90, &[Op::Integers]),
    Phase::upto(175, &[Op::Expressions]),
    Phase::rest(&[Op::Equations]),
];
const H: &[Phase] = &[Phase::upto(130, &[Op::Equations]), Phase::rest(&[Op::Functions])];
// Radicals return after the quadratics block for Pythagoras.
const I: &[Phase] = &[
    Phase::upto(60, &[Op::Expressions]),
    Phase::upto(110, &[Op::Radicals]),
    Phase::upto(170, &[Op::Quadratics]),
    Phase::rest(&[Op::Radicals]),
];
const J: &[Phase] = &[
    Phase::upto(70, &[Op::Expressions]),
    Phase::upto(140, &[Op::ComplexNumbers]),
    Phase::rest(&[Op::Functions]),
];
const K: &[Phase] = &[
    Phase::upto(70, &[Op::Functions]),
    Phase::upto(140, &[Op::Exponents]),
    Phase::rest(&[Op::Logarithms]),
];
const L: &[Phase] = &[
    Phase::upto(50, &[Op::Logarithms]),
    Phase::upto(110, &[Op::Limits]),
    Phase::rest(&[Op::Differentiation]),
];
const M: &[Phase] = &[Phase::rest(&[Op::Trigonometry])];
const N: &[Phase] = &[Phase::upto(150, &[Op::Sequences]), Phase::rest(&[Op::Limits])];
const O: &[Phase] = &[Phase::upto(90, &[Op::Differentiation]), Phase::rest(&[Op::Integration])];
const XV: &[Phase] = &[Phase::upto(120, &[Op::Vectors]), Phase::rest(&[Op::Transformations])];
const XM: &[Phase] = &[Phase::rest(&[Op::Matrices])];
const XP: &[Phase] = &[Phase::rest(&[Op::Probability])];
const XS: &[Phase] = &[Phase::upto(120, &[Op::Statistics]), Phase::rest(&[Op::Sets])];

/// Phase table for a level. Every level has one and every one ends in a
/// catch-all.
pub fn phases(level: Level) -> &'static [Phase] {
    match level {
        Level::SevenA | Level::SixA => COUNTING_ONLY,
        Level::FiveA                => FIVE_A,
        Level::FourA                => FOUR_A,
        Level::ThreeA | Level::TwoA => ADDITION_ONLY,
        Level::A  => A,
        Level::B  => B,
        Level::C  => C,
        Level::D  => D,
        Level::E  => E,
        Level::F  => F,
        Level::G  => G,
        Level::H  => H,
        Level::I  => I,
        Level::J  => J,
        Level::K  => K,
        Level::L  => L,
        Level::M  => M,
        Level::N  => N,
        Level::O  => O,
        Level::XV => XV,
        Level::XM => XM,
        Level::XP => XP,
        Level::XS => XS,
    }
}

/// Operations legal at a position. Most positions allow exactly one; review
/// phases allow several.
pub fn legal_operations(level: Level, worksheet: u32) -> EngineResult<Vec<OperationKind>> {
    check_worksheet(level, worksheet)?;
    match first_covering(phases(level), worksheet) {
        Some(phase) => Ok(phase.operations.to_vec()),
        None => {
            error!(%level, worksheet, "phase table has no covering phase");
            Err(EngineError::ConfigurationGap {
                level,
                operation: OperationKind::Counting,
                worksheet,
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Concepts
// ---------------------------------------------------------------------------

macro_rules! concepts {
    ($( $variant:ident => $id:literal, $level:ident, $worksheet:literal; )*) => {
        /// A gated curriculum concept. Declaration order is introduction order.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum Concept {
            $( $variant, )*
        }

        impl Concept {
            pub const ALL: &'static [Concept] = &[ $( Concept::$variant, )* ];

            /// Stable snake_case id.
            pub fn id(self) -> &'static str {
                match self { $( Concept::$variant => $id, )* }
            }
        }

        /// Where a concept is first taught.
        pub fn introduction_of(concept: Concept) -> CurriculumPosition {
            match concept {
                $( Concept::$variant => CurriculumPosition::new(Level::$level, $worksheet), )*
            }
        }
    };
}

concepts! {
    Counting               => "counting",                SevenA, 1;
    NumberOrder            => "number_order",            SevenA, 81;
    NumberWords            => "number_words",            FiveA,  121;
    SkipCounting           => "skip_counting",           FourA,  101;
    Addition               => "addition",                ThreeA, 1;
    MissingAddend          => "missing_addend",          ThreeA, 151;
    Subtraction            => "subtraction",             A,      81;
    ColumnAddition         => "column_addition",         B,      1;
    Carrying               => "carrying",                B,      31;
    Borrowing              => "borrowing",               B,      131;
    Multiplication         => "multiplication",          C,      1;
    Division               => "division",                C,      111;
    Remainders             => "remainders",              C,      161;
    LongDivision           => "long_division",           D,      96;
    Fractions              => "fractions",               D,      131;
    FractionAddition       => "fraction_addition",       E,      1;
    FractionSubtraction    => "fraction_subtraction",    E,      31;
    MixedNumbers           => "mixed_numbers",           E,      121;
    FractionMultiplication => "fraction_multiplication", F,      1;
    Decimals               => "decimals",                F,      71;
    OrderOfOperations      => "order_of_operations",     F,      141;
    NegativeNumbers        => "negative_numbers",        G,      1;
    AlgebraicExpressions   => "algebraic_expressions",   G,      91;
    LinearEquations        => "linear_equations",        G,      176;
    SimultaneousEquations  => "simultaneous_equations",  H,      81;
    Functions              => "functions",               H,      131;
    Factoring              => "factoring",               I,      21;
    SquareRoots            => "square_roots",            I,      61;
    QuadraticEquations     => "quadratic_equations",     I,      111;
    PythagoreanTheorem     => "pythagorean_theorem",     I,      171;
    ComplexNumbers         => "complex_numbers",         J,      71;
    Exponents              => "exponents",               K,      71;
    Logarithms             => "logarithms",              K,      141;
    Limits                 => "limits",                  L,      51;
    Derivatives            => "derivatives",             L,      111;
    Trigonometry           => "trigonometry",            M,      1;
    Sequences              => "sequences",               N,      1;
    Integrals              => "integrals",               O,      91;
    Vectors                => "vectors",                 XV,     1;
    Transformations        => "transformations",         XV,     121;
    Matrices               => "matrices",                XM,     1;
    Probability            => "probability",             XP,     1;
    Statistics             => "statistics",              XS,     1;
    Sets                   => "sets",                    XS,     121;
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Concept {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Concept::ALL
            .iter()
            .copied()
            .find(|c| c.id() == wanted)
            .ok_or_else(|| EngineError::UnknownConcept(s.to_string()))
    }
}

/// True when `(level, worksheet)` is at or past the concept's introduction.
///
/// Later levels always qualify; on the introduction level the worksheet must
/// have reached the introduction worksheet. Never consults a ledger.
pub fn is_concept_available(concept: Concept, level: Level, worksheet: u32) -> bool {
    CurriculumPosition::new(level, worksheet) >= introduction_of(concept)
}

/// [`is_concept_available`] keyed by concept id.
pub fn is_concept_id_available(id: &str, level: Level, worksheet: u32) -> EngineResult<bool> {
    let concept = id.parse::<Concept>()?;
    Ok(is_concept_available(concept, level, worksheet))
}

/// Concepts introduced exactly at this position, in introduction order.
pub fn new_concepts_at(level: Level, worksheet: u32) -> Vec<Concept> {
    let here = CurriculumPosition::new(level, worksheet);
    Concept::ALL
        .iter()
        .copied()
        .filter(|c| introduction_of(*c) == here)
        .collect()
}

/// Every concept available at a position.
pub fn available_concepts(level: Level, worksheet: u32) -> Vec<Concept> {
    Concept::ALL
        .iter()
        .copied()
        .filter(|c| is_concept_available(*c, level, worksheet))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum_engine::resolver::resolve;

    #[test]
    fn every_position_has_legal_operations_that_resolve() {
        for level in Level::ALL {
            for ws in 1..=level.worksheet_count() {
                let ops = legal_operations(level, ws).unwrap();
                assert!(!ops.is_empty());
                for op in ops {
                    assert!(resolve(level, ws, op).is_ok(), "{level}-{ws} {op}");
                }
            }
        }
    }

    #[test]
    fn level_a_switches_to_subtraction_after_eighty() {
        assert_eq!(legal_operations(Level::A, 80).unwrap(), vec![OperationKind::Addition]);
        assert_eq!(legal_operations(Level::A, 81).unwrap(), vec![OperationKind::Subtraction]);
        assert_eq!(legal_operations(Level::C, 111).unwrap(), vec![OperationKind::Division]);
        assert_eq!(
            legal_operations(Level::B, 190).unwrap(),
            vec![OperationKind::Addition, OperationKind::Subtraction]
        );
    }

    #[test]
    fn phase_tables_end_in_catch_all() {
        for level in Level::ALL {
            assert_eq!(phases(level).last().map(|p| p.upper), Some(None), "{level}");
        }
    }

    #[test]
    fn fraction_addition_gating() {
        let c: Concept = "fraction_addition".parse().unwrap();
        assert!(!is_concept_available(c, Level::D, 200));
        assert!(is_concept_available(c, Level::E, 1));
        assert!(is_concept_available(c, Level::F, 1));
        assert_eq!(is_concept_id_available("fraction_addition", Level::C, 10), Ok(false));
        assert!(matches!(
            is_concept_id_available("long_multiplication_by_hand", Level::C, 10),
            Err(EngineError::UnknownConcept(_))
        ));
    }

    #[test]
    fn availability_is_monotonic() {
        for &concept in Concept::ALL {
            let mut was_available = false;
            for level in Level::ALL {
                for ws in [1, 50, 100, 150, 200] {
                    let now = is_concept_available(concept, level, ws);
                    assert!(now || !was_available, "{concept} re-locked at {level}-{ws}");
                    was_available = now;
                }
            }
        }
    }

    #[test]
    fn new_concepts_are_exact_and_idempotent() {
        assert_eq!(new_concepts_at(Level::E, 1), vec![Concept::FractionAddition]);
        assert_eq!(new_concepts_at(Level::E, 1), new_concepts_at(Level::E, 1));
        assert!(new_concepts_at(Level::E, 2).is_empty());
        for &concept in Concept::ALL {
            let at = introduction_of(concept);
            assert!(new_concepts_at(at.level, at.worksheet).contains(&concept));
        }
    }

    #[test]
    fn ids_round_trip_and_introductions_follow_the_curriculum() {
        for pair in Concept::ALL.windows(2) {
            assert!(introduction_of(pair[0]) <= introduction_of(pair[1]), "{} before {}", pair[0], pair[1]);
        }
        for &concept in Concept::ALL {
            assert_eq!(concept.id().parse::<Concept>(), Ok(concept));
        }
    }

    #[test]
    fn available_concepts_only_grow() {
        let mut previous: Vec<Concept> = Vec::new();
        for level in Level::ALL {
            for ws in [1, 50, 100, 111, 150, 200] {
                let now = available_concepts(level, ws);
                assert!(previous.iter().all(|c| now.contains(c)), "{level} ws{ws} lost a concept");
                assert!(now.iter().all(|c| is_concept_available(*c, level, ws)));
                previous = now;
            }
        }
        assert_eq!(previous.len(), Concept::ALL.len());
        assert!(!available_concepts(Level::D, 200).contains(&Concept::FractionAddition));
        assert!(available_concepts(Level::E, 1).contains(&Concept::FractionAddition));
    }
}
