//! Functions, calculus and trigonometry, levels K to O.

use crate::curriculum_engine::{models::GenParams, resolver::Bucket, subtype::Subtype as S};

const P: GenParams = GenParams::new();

pub const K_FUNCTIONS: &[Bucket] = &[
    Bucket::rest(S::QuadraticVertex, P.a(-6, 6).b(-9, 9)),
];

/// `range_a` is the base, `range_b` the exponent.
pub const K_EXPONENTS: &[Bucket] = &[
    Bucket::upto(85,  S::EvaluatePower,       P.a(2, 9).b(2, 4)),
    Bucket::upto(100, S::ExponentProduct,     P.b(1, 9)),
    Bucket::upto(115, S::ExponentQuotient,    P.b(1, 6)),
    Bucket::upto(125, S::ExponentPower,       P.b(2, 5)),
    Bucket::rest(     S::ExponentialEquation, P.a(2, 5).b(2, 5)),
];

pub const K_LOGARITHMS: &[Bucket] = &[
    Bucket::rest(S::LogEvaluate, P.a(2, 5).b(1, 4)),
];

pub const L_LOGARITHMS: &[Bucket] = &[
    Bucket::upto(25, S::LogEvaluate,    P.a(2, 10).b(1, 4)),
    Bucket::rest(    S::LogProductRule, P.a(2, 5).b(1, 3)),
];

pub const L_LIMITS: &[Bucket] = &[
    Bucket::upto(80, S::PolynomialLimit, P.a(-5, 5).b(-4, 4)),
    Bucket::rest(    S::RationalLimit,   P.b(-6, 6)),
];

pub const L_DIFFERENTIATION: &[Bucket] = &[
    Bucket::upto(160, S::PowerRuleDerivative, P.a(-9, 9)),
    Bucket::rest(     S::DerivativeAtPoint,   P.a(-5, 5).b(-3, 3)),
];

/// Angles come from the special-angle list; no numeric ranges apply.
pub const M_TRIGONOMETRY: &[Bucket] = &[
    Bucket::upto(40,  S::DegreesToRadians,    P),
    Bucket::upto(80,  S::RadiansToDegrees,    P),
    Bucket::upto(120, S::SpecialAngleSine,    P),
    Bucket::upto(160, S::SpecialAngleCosine,  P),
    Bucket::rest(     S::SpecialAngleTangent, P),
];

pub const N_SEQUENCES: &[Bucket] = &[
    Bucket::upto(30,  S::MissingSequenceTerm, P.a(-20, 50).b(-9, 9)),
    Bucket::upto(60,  S::ArithmeticNthTerm,   P.a(-20, 20).b(-9, 9)),
    Bucket::upto(90,  S::GeometricNthTerm,    P.a(1, 5)),
    Bucket::upto(120, S::ArithmeticSeriesSum, P.a(-10, 20).b(-5, 9)),
    Bucket::rest(     S::GeometricSeriesSum,  P.a(1, 5)),
];

pub const N_LIMITS: &[Bucket] = &[
    Bucket::rest(S::SequenceLimit, P.b(-9, 9)),
];

pub const O_DIFFERENTIATION: &[Bucket] = &[
    Bucket::upto(45, S::ProductRuleDerivative, P.a(-5, 5).b(-9, 9)),
    Bucket::rest(    S::ChainRuleDerivative,   P.a(-5, 5).b(-9, 9)),
];

pub const O_INTEGRATION: &[Bucket] = &[
    Bucket::upto(130, S::IndefinitePowerIntegral, P.a(-6, 6)),
    Bucket::upto(170, S::DefiniteIntegral,        P.a(-5, 5).b(-4, 4)),
    Bucket::rest(     S::AreaUnderCurve,          P.a(1, 4)),
];
