//! Fractions through early algebra, levels E to J.

use crate::curriculum_engine::{models::GenParams, resolver::Bucket, subtype::Subtype as S};

const P: GenParams = GenParams::new();

pub const E_FRACTIONS: &[Bucket] = &[
    Bucket::upto(30,  S::FractionAddSameDen,   P.a(1, 9).b(3, 12)),
    Bucket::upto(60,  S::FractionSubSameDen,   P.a(1, 9).b(3, 12)),
    Bucket::upto(90,  S::FractionAddUnlikeDen, P.a(1, 9).b(2, 10)),
    Bucket::upto(120, S::FractionSubUnlikeDen, P.a(1, 9).b(2, 10)),
    Bucket::upto(140, S::MixedToImproper,      P.a(1, 9).b(2, 10)),
    Bucket::upto(170, S::MixedNumberAdd,       P.a(1, 9).b(2, 10)),
    Bucket::upto(185, S::FractionOfWhole,      P.a(1, 9).b(2, 10)),
    Bucket::rest(     S::CompareFractions,     P.a(1, 9).b(2, 12)),
];

pub const F_FRACTIONS: &[Bucket] = &[
    Bucket::upto(35, S::FractionMultiply, P.a(1, 9).b(2, 10)),
    Bucket::rest(    S::FractionDivide,   P.a(1, 9).b(2, 10)),
];

/// `fixed` is the number of decimal places.
pub const F_DECIMALS: &[Bucket] = &[
    Bucket::upto(85,  S::DecimalAdd,        P.a(1, 999).b(1, 999).fixed(2)),
    Bucket::upto(100, S::DecimalSubtract,   P.a(1, 999).b(1, 999).fixed(2)),
    Bucket::upto(115, S::DecimalMultiply,   P.a(1, 99).b(2, 9).fixed(1)),
    Bucket::upto(130, S::FractionToDecimal, P),
    Bucket::rest(     S::DecimalToFraction, P.fixed(2)),
];

pub const F_ORDER_OF_OPERATIONS: &[Bucket] = &[
    Bucket::upto(170, S::OrderOfOperations,            P.a(1, 20).b(1, 10)),
    Bucket::rest(     S::OrderOfOperationsParentheses, P.a(1, 20).b(1, 10)),
];

pub const G_INTEGERS: &[Bucket] = &[
    Bucket::upto(20, S::IntegerAdd,      P.a(-20, 20).b(-20, 20).negative()),
    Bucket::upto(40, S::IntegerSubtract, P.a(-20, 20).b(-20, 20).negative()),
    Bucket::upto(60, S::IntegerMultiply, P.a(-12, 12).b(-12, 12).negative()),
    Bucket::upto(80, S::IntegerDivide,   P.a(-12, 12).b(-9, 9).negative()),
    Bucket::rest(    S::AbsoluteValue,   P.a(-50, 50).negative()),
];

pub const G_EXPRESSIONS: &[Bucket] = &[
    Bucket::upto(120, S::EvaluateExpression, P.a(-9, 9).b(-9, 9).negative()),
    Bucket::upto(150, S::CombineLikeTerms,   P.a(-9, 9).b(-9, 9).negative()),
    Bucket::rest(     S::DistributiveExpand, P.a(2, 9).b(-9, 9).negative()),
];

pub const G_EQUATIONS: &[Bucket] = &[
    Bucket::rest(S::OneStepEquation, P.a(-20, 20).b(-20, 20).negative()),
];

pub const H_EQUATIONS: &[Bucket] = &[
    Bucket::upto(40,  S::TwoStepEquation,       P.a(-10, 10).b(-9, 9)),
    Bucket::upto(80,  S::EquationBothSides,     P.a(-10, 10).b(-9, 9)),
    Bucket::upto(110, S::SimultaneousEquations, P.a(-6, 6).b(-5, 5).negative()),
    Bucket::rest(     S::LinearInequality,      P.a(-10, 10).b(-9, 9).negative()),
];

pub const H_FUNCTIONS: &[Bucket] = &[
    Bucket::upto(155, S::LinearFunctionValue, P.a(-10, 10).b(-9, 9)),
    Bucket::upto(180, S::SlopeFromPoints,     P.a(-9, 9).b(-5, 5)),
    Bucket::rest(     S::FunctionComposition, P.a(-5, 5).b(-5, 5)),
];

pub const I_EXPRESSIONS: &[Bucket] = &[
    Bucket::upto(20, S::ExpandBinomials,     P.a(-9, 9).b(-9, 9)),
    Bucket::upto(45, S::FactorQuadratic,     P.a(-9, 9).b(-9, 9)),
    Bucket::rest(    S::DifferenceOfSquares, P.a(1, 12)),
];

/// Pythagoras buckets scale a base triple by `range_a`.
pub const I_RADICALS: &[Bucket] = &[
    Bucket::upto(85,  S::PerfectSquareRoot,     P.a(1, 20)),
    Bucket::upto(110, S::SimplifySquareRoot,    P.a(2, 6)),
    Bucket::upto(185, S::PythagoreanHypotenuse, P.a(1, 4)),
    Bucket::rest(     S::PythagoreanLeg,        P.a(1, 4)),
];

pub const I_QUADRATICS: &[Bucket] = &[
    Bucket::upto(140, S::SolveQuadraticFactoring, P.a(-9, 9).b(-9, 9)),
    Bucket::upto(160, S::Discriminant,            P.a(-5, 5).b(-9, 9)),
    Bucket::rest(     S::QuadraticRootCount,      P.a(-5, 5).b(-9, 9)),
];

pub const J_EXPRESSIONS: &[Bucket] = &[
    Bucket::rest(S::PolynomialRemainder, P.a(-5, 5).b(-9, 9)),
];

pub const J_COMPLEX_NUMBERS: &[Bucket] = &[
    Bucket::upto(95,  S::ComplexAdd,            P.a(-9, 9).b(-9, 9)),
    Bucket::upto(120, S::ComplexMultiply,       P.a(-6, 6).b(-6, 6)),
    Bucket::rest(     S::ComplexModulusSquared, P.a(-9, 9).b(-9, 9)),
];

pub const J_FUNCTIONS: &[Bucket] = &[
    Bucket::rest(S::InverseFunction, P.a(-10, 10).b(-9, 9)),
];
