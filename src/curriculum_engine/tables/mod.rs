//! Static curriculum tables.
//!
//! One bucket list per `(level, operation)` pair, split by curriculum band:
//!
//! | Module        | Levels            |
//! |---------------|-------------------|
//! | `early`       | 7A to 2A          |
//! | `arithmetic`  | A to D            |
//! | `middle`      | E to J            |
//! | `advanced`    | K to O            |
//! | `electives`   | XV, XM, XP, XS    |
//!
//! Tables are data only. The scan lives in the resolver.

use crate::curriculum_engine::{
    models::{Level, OperationKind},
    resolver::Bucket,
};

mod early;
mod arithmetic;
mod middle;
mod advanced;
mod electives;

/// Bucket list for `(level, operation)`, or `None` when that level never
/// practises the operation.
pub fn table(level: Level, operation: OperationKind) -> Option<&'static [Bucket]> {
    use Level as L;
    use OperationKind as Op;

    let table = match (level, operation) {
        (L::SevenA, Op::Counting)             => early::SEVEN_A_COUNTING,
        (L::SixA,   Op::Counting)             => early::SIX_A_COUNTING,
        (L::FiveA,  Op::Counting)             => early::FIVE_A_COUNTING,
        (L::FiveA,  Op::NumberWriting)        => early::FIVE_A_NUMBER_WRITING,
        (L::FourA,  Op::NumberWriting)        => early::FOUR_A_NUMBER_WRITING,
        (L::FourA,  Op::Counting)             => early::FOUR_A_COUNTING,
        (L::ThreeA, Op::Addition)             => early::THREE_A_ADDITION,
        (L::TwoA,   Op::Addition)             => early::TWO_A_ADDITION,

        (L::A, Op::Addition)                  => arithmetic::A_ADDITION,
        (L::A, Op::Subtraction)               => arithmetic::A_SUBTRACTION,
        (L::B, Op::Addition)                  => arithmetic::B_ADDITION,
        (L::B, Op::Subtraction)               => arithmetic::B_SUBTRACTION,
        (L::C, Op::Multiplication)            => arithmetic::C_MULTIPLICATION,
        (L::C, Op::Division)                  => arithmetic::C_DIVISION,
        (L::D, Op::Multiplication)            => arithmetic::D_MULTIPLICATION,
        (L::D, Op::Division)                  => arithmetic::D_DIVISION,
        (L::D, Op::Fractions)                 => arithmetic::D_FRACTIONS,

        (L::E, Op::Fractions)                 => middle::E_FRACTIONS,
        (L::F, Op::Fractions)                 => middle::F_FRACTIONS,
        (L::F, Op::Decimals)                  => middle::F_DECIMALS,
        (L::F, Op::OrderOfOperations)         => middle::F_ORDER_OF_OPERATIONS,
        (L::G, Op::Integers)                  => middle::G_INTEGERS,
        (L::G, Op::Expressions)               => middle::G_EXPRESSIONS,
        (L::G, Op::Equations)                 => middle::G_EQUATIONS,
        (L::H, Op::Equations)                 => middle::H_EQUATIONS,
        (L::H, Op::Functions)                 => middle::H_FUNCTIONS,
        (L::I, Op::Expressions)               => middle::I_EXPRESSIONS,
        (L::I, Op::Radicals)                  => middle::I_RADICALS,
        (L::I, Op::Quadratics)                => middle::I_QUADRATICS,
        (L::J, Op::Expressions)               => middle::J_EXPRESSIONS,
        (L::J, Op::ComplexNumbers)            => middle::J_COMPLEX_NUMBERS,
        (L::J, Op::Functions)                 => middle::J_FUNCTIONS,

        (L::K, Op::Functions)                 => advanced::K_FUNCTIONS,
        (L::K, Op::Exponents)                 => advanced::K_EXPONENTS,
        (L::K, Op::Logarithms)                => advanced::K_LOGARITHMS,
        (L::L, Op::Logarithms)                => advanced::L_LOGARITHMS,
        (L::L, Op::Limits)                    => advanced::L_LIMITS,
        (L::L, Op::Differentiation)           => advanced::L_DIFFERENTIATION,
        (L::M, Op::Trigonometry)              => advanced::M_TRIGONOMETRY,
        (L::N, Op::Sequences)                 => advanced::N_SEQUENCES,
        (L::N, Op::Limits)                    => advanced::N_LIMITS,
        (L::O, Op::Differentiation)           => advanced::O_DIFFERENTIATION,
        (L::O, Op::Integration)               => advanced::O_INTEGRATION,

        (L::XV, Op::Vectors)                  => electives::XV_VECTORS,
        (L::XV, Op::Transformations)          => electives::XV_TRANSFORMATIONS,
        (L::XM, Op::Matrices)                 => electives::XM_MATRICES,
        (L::XP, Op::Probability)              => electives::XP_PROBABILITY,
        (L::XS, Op::Statistics)               => electives::XS_STATISTICS,
        (L::XS, Op::Sets)                     => electives::XS_SETS,

        _ => return None,
    };
    Some(table)
}

/// Every defined `(level, operation, table)` triple, in curriculum order.
pub fn all() -> impl Iterator<Item = (Level, OperationKind, &'static [Bucket])> {
    Level::ALL.into_iter().flat_map(|level| {
        OPERATIONS
            .iter()
            .filter_map(move |&operation| table(level, operation).map(|t| (level, operation, t)))
    })
}

/// All operation kinds, for enumerating tables.
pub const OPERATIONS: [OperationKind; 29] = [
    OperationKind::Counting,
    OperationKind::NumberWriting,
    OperationKind::Addition,
    OperationKind::Subtraction,
    OperationKind::Multiplication,
    OperationKind::Division,
    OperationKind::Fractions,
    OperationKind::Decimals,
    OperationKind::OrderOfOperations,
    OperationKind::Integers,
    OperationKind::Expressions,
    OperationKind::Equations,
    OperationKind::Functions,
    OperationKind::Radicals,
    OperationKind::Quadratics,
    OperationKind::ComplexNumbers,
    OperationKind::Exponents,
    OperationKind::Logarithms,
    OperationKind::Trigonometry,
    OperationKind::Sequences,
    OperationKind::Limits,
    OperationKind::Differentiation,
    OperationKind::Integration,
    OperationKind::Vectors,
    OperationKind::Matrices,
    OperationKind::Transformations,
    OperationKind::Probability,
    OperationKind::Statistics,
    OperationKind::Sets,
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::curriculum_engine::subtype::Subtype;

    #[test]
    fn every_table_ends_in_a_catch_all() {
        for (level, operation, table) in all() {
            let last = table.last().map(|b| b.upper);
            assert_eq!(last, Some(None), "{level}/{operation} has no catch-all");
            let catch_alls = table.iter().filter(|b| b.upper.is_none()).count();
            assert_eq!(catch_alls, 1, "{level}/{operation} has {catch_alls} catch-alls");
        }
    }

    #[test]
    fn bounds_strictly_increase() {
        for (level, operation, table) in all() {
            let bounds: Vec<u32> = table.iter().filter_map(|b| b.upper).collect();
            assert!(
                bounds.windows(2).all(|w| w[0] < w[1]),
                "{level}/{operation} bounds out of order: {bounds:?}"
            );
            assert!(bounds.iter().all(|b| (1..200).contains(b)), "{level}/{operation}: {bounds:?}");
        }
    }

    #[test]
    fn every_subtype_is_reachable() {
        let reachable: HashSet<Subtype> = all().flat_map(|(_, _, t)| t.iter().map(|b| b.subtype)).collect();
        let missing: Vec<&str> = Subtype::ALL
            .iter()
            .filter(|s| !reachable.contains(s))
            .map(|s| s.key())
            .collect();
        assert!(missing.is_empty(), "unreachable subtypes: {missing:?}");
    }

    #[test]
    fn ranges_are_well_formed() {
        for (level, operation, table) in all() {
            for bucket in table {
                let p = bucket.params;
                assert!(p.range_a.0 <= p.range_a.1, "{level}/{operation}/{}", bucket.subtype);
                assert!(p.range_b.0 <= p.range_b.1, "{level}/{operation}/{}", bucket.subtype);
                assert!(!(p.require_carry && !p.allow_carry));
                assert!(!(p.require_borrow && !p.allow_borrow));
            }
        }
    }

    #[test]
    fn negatives_only_from_level_g() {
        for (level, _, table) in all() {
            if level < Level::G {
                assert!(table.iter().all(|b| !b.params.allow_negative), "{level} allows negatives");
            }
        }
    }
}
