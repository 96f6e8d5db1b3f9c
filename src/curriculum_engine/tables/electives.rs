use crate::curriculum_engine::{models::GenParams, resolver::Bucket, subtype::Subtype as S};

const P: GenParams = GenParams::new();

pub const XV_VECTORS: &[Bucket] = &[
    Bucket::upto(30, S::VectorAdd,       P.a(-9, 9)),
    Bucket::upto(60, S::VectorScale,     P.a(-9, 9).b(-5, 5)),
    Bucket::upto(90, S::DotProduct,      P.a(-9, 9)),
    Bucket::rest(    S::VectorMagnitude, P),
];

pub const XV_TRANSFORMATIONS: &[Bucket] = &[
    Bucket::upto(140, S::TranslatePoint, P.a(-9, 9).b(-6, 6)),
    Bucket::upto(160, S::ReflectPoint,   P.a(-9, 9)),
    Bucket::upto(180, S::RotatePoint,    P.a(-9, 9)),
    Bucket::rest(     S::DilatePoint,    P.a(-9, 9).b(2, 4)),
];

pub const XM_MATRICES: &[Bucket] = &[
    Bucket::upto(40,  S::MatrixAdd,        P.a(-9, 9)),
    Bucket::upto(80,  S::MatrixScalar,     P.a(-9, 9).b(-5, 5)),
    Bucket::upto(130, S::MatrixMultiply,   P.a(-5, 5)),
    Bucket::upto(170, S::Determinant2x2,   P.a(-9, 9)),
    Bucket::rest(     S::MatrixInverse2x2, P.b(-3, 3)),
];

pub const XP_PROBABILITY: &[Bucket] = &[
    Bucket::upto(30,  S::Factorial,          P.a(0, 10)),
    Bucket::upto(60,  S::Permutations,       P.a(3, 10)),
    Bucket::upto(90,  S::Combinations,       P.a(3, 12)),
    Bucket::upto(130, S::SimpleProbability,  P.a(1, 9).b(1, 9)),
    Bucket::upto(165, S::DiceSumProbability, P),
    Bucket::rest(     S::IndependentEvents,  P),
];

pub const XS_STATISTICS: &[Bucket] = &[
    Bucket::upto(30, S::Mean,   P.a(5, 50)),
    Bucket::upto(60, S::Median, P.a(1, 50)),
    Bucket::upto(90, S::Mode,   P.a(1, 20)),
    Bucket::rest(    S::Range,  P.a(1, 100)),
];

pub const XS_SETS: &[Bucket] = &[
    Bucket::upto(140, S::SetUnion,            P.a(1, 12)),
    Bucket::upto(160, S::SetIntersection,     P.a(1, 12)),
    Bucket::upto(180, S::SetDifference,       P.a(1, 12)),
    Bucket::rest(     S::SetCardinalityUnion, P.a(1, 15)),
];
