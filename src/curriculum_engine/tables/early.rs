//! Pre-arithmetic levels: counting, reading numbers, first addition facts.

use crate::curriculum_engine::{models::GenParams, resolver::Bucket, subtype::Subtype as S};

const P: GenParams = GenParams::new();

pub const SEVEN_A_COUNTING: &[Bucket] = &[
    Bucket::upto(40,  S::CountObjects, P.a(1, 5)),
    Bucket::upto(80,  S::CountObjects, P.a(1, 10)),
    Bucket::upto(120, S::NumberAfter,  P.a(1, 9)),
    Bucket::upto(160, S::NumberBefore, P.a(2, 10)),
    Bucket::rest(     S::FillSequence, P.a(1, 10)),
];

pub const SIX_A_COUNTING: &[Bucket] = &[
    Bucket::upto(50,  S::CountObjects,  P.a(1, 20)),
    Bucket::upto(100, S::FillSequence,  P.a(1, 30)),
    Bucket::upto(150, S::NumberAfter,   P.a(1, 29)),
    Bucket::rest(     S::NumberBetween, P.a(2, 29)),
];

pub const FIVE_A_COUNTING: &[Bucket] = &[
    Bucket::upto(60, S::FillSequence,  P.a(1, 50)),
    Bucket::upto(90, S::NumberBefore,  P.a(2, 50)),
    Bucket::rest(    S::NumberBetween, P.a(2, 99)),
];

pub const FIVE_A_NUMBER_WRITING: &[Bucket] = &[
    Bucket::upto(160, S::NumberWords,    P.a(1, 50)),
    Bucket::rest(     S::CompareNumbers, P.a(1, 50)),
];

pub const FOUR_A_NUMBER_WRITING: &[Bucket] = &[
    Bucket::upto(60, S::NumberWords,    P.a(1, 100)),
    Bucket::rest(    S::CompareNumbers, P.a(1, 120)),
];

/// Skip-count starts are multiples of the step: `range_a` counts steps.
pub const FOUR_A_COUNTING: &[Bucket] = &[
    Bucket::upto(140, S::SkipCountTwos,  P.a(0, 20)),
    Bucket::upto(170, S::SkipCountFives, P.a(0, 15)),
    Bucket::rest(     S::SkipCountTens,  P.a(0, 10)),
];

pub const THREE_A_ADDITION: &[Bucket] = &[
    Bucket::upto(50,  S::AddOne,       P.a(1, 9)),
    Bucket::upto(100, S::AddTwo,       P.a(1, 9)),
    Bucket::upto(150, S::AddThree,     P.a(1, 9)),
    Bucket::rest(     S::AddUpToThree, P.a(1, 10).b(1, 3).missing()),
];

pub const TWO_A_ADDITION: &[Bucket] = &[
    Bucket::upto(20,  S::AddFour,         P.a(1, 10)),
    Bucket::upto(40,  S::AddFive,         P.a(1, 10)),
    Bucket::upto(60,  S::AddSix,          P.a(1, 10)),
    Bucket::upto(80,  S::AddSeven,        P.a(1, 10)),
    Bucket::upto(100, S::AddEight,        P.a(1, 10)),
    Bucket::upto(120, S::AddNine,         P.a(1, 10)),
    Bucket::upto(140, S::AddTen,          P.a(1, 20)),
    Bucket::upto(170, S::AddDoubles,      P.a(1, 10)),
    Bucket::rest(     S::AddSingleDigits, P.a(1, 9).b(1, 9).missing()),
];
