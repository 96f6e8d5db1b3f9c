//! Whole-number arithmetic levels A to D.

use crate::curriculum_engine::{models::GenParams, resolver::Bucket, subtype::Subtype as S};

const P: GenParams = GenParams::new();

pub const A_ADDITION: &[Bucket] = &[
    Bucket::upto(40, S::AddWithinTwenty,  P.a(2, 20)),
    Bucket::upto(60, S::AddMakeTen,       P.fixed(10)),
    Bucket::rest(    S::AddMissingAddend, P.a(1, 10).b(1, 10).missing()),
];

pub const A_SUBTRACTION: &[Bucket] = &[
    Bucket::upto(90,  S::SubtractOne,          P.a(2, 10)),
    Bucket::upto(100, S::SubtractTwo,          P.a(3, 12)),
    Bucket::upto(110, S::SubtractThree,        P.a(4, 13)),
    Bucket::upto(130, S::SubtractUpToFive,     P.a(5, 15).b(1, 5)),
    Bucket::upto(150, S::SubtractWithinTen,    P.a(1, 10).b(0, 10)),
    Bucket::upto(165, S::SubtractFromTen,      P.fixed(10)),
    Bucket::upto(185, S::SubtractWithinTwenty, P.a(10, 20).b(1, 10)),
    Bucket::rest(     S::SubtractMissing,      P.a(5, 20).b(1, 10).missing()),
];

pub const B_ADDITION: &[Bucket] = &[
    Bucket::upto(30, S::TwoDigitAddNoCarry, P.a(10, 89).b(10, 89).no_carry()),
    Bucket::upto(60, S::TwoDigitAddCarry,   P.a(10, 89).b(10, 89).carry()),
    Bucket::upto(75, S::ColumnAddThree,     P.a(10, 99).terms(3)),
    Bucket::upto(90, S::ThreeDigitAddition, P.a(100, 999).b(100, 999)),
    Bucket::rest(    S::FourDigitAddition,  P.a(1000, 9999).b(1000, 9999)),
];

pub const B_SUBTRACTION: &[Bucket] = &[
    Bucket::upto(130, S::TwoDigitSubNoBorrow,   P.a(10, 99).b(10, 99).no_borrow()),
    Bucket::upto(160, S::TwoDigitSubBorrow,     P.a(10, 99).b(10, 99).borrow()),
    Bucket::upto(185, S::ThreeDigitSubtraction, P.a(100, 999).b(100, 999)),
    Bucket::rest(     S::SubtractAcrossZeros,   P.a(2, 9).b(11, 99).fixed(100)),
];

pub const C_MULTIPLICATION: &[Bucket] = &[
    Bucket::upto(20,  S::TimesTablesToThree,    P.a(0, 12).b(1, 3)),
    Bucket::upto(40,  S::TimesTablesFourFive,   P.a(0, 12).b(4, 5)),
    Bucket::upto(60,  S::TimesTablesSixSeven,   P.a(0, 12).b(6, 7)),
    Bucket::upto(80,  S::TimesTablesEightNine,  P.a(0, 12).b(8, 9)),
    Bucket::upto(95,  S::TimesTablesMixed,      P.a(1, 12).b(1, 12).missing()),
    Bucket::upto(100, S::MultiplyByTen,         P.a(1, 99)),
    Bucket::upto(105, S::MultiplyMissingFactor, P.a(1, 10).b(1, 10)),
    Bucket::rest(     S::TwoDigitBySingle,      P.a(10, 99).b(2, 9)),
];

/// Division buckets describe the quotient (`range_a`) and divisor (`range_b`).
pub const C_DIVISION: &[Bucket] = &[
    Bucket::upto(130, S::DivisionFactsToFive,      P.a(1, 10).b(1, 5)),
    Bucket::upto(150, S::DivisionFactsToNine,      P.a(1, 10).b(6, 9)),
    Bucket::upto(160, S::DivisionMissingDivisor,   P.a(1, 10).b(2, 9)),
    Bucket::upto(180, S::DivisionWithRemainder,    P.a(1, 9).b(2, 9).remainder()),
    Bucket::rest(     S::TwoDigitBySingleDivision, P.a(4, 19).b(2, 5)),
];

pub const D_MULTIPLICATION: &[Bucket] = &[
    Bucket::upto(25, S::ThreeDigitBySingle,   P.a(100, 999).b(2, 9)),
    Bucket::upto(45, S::TwoDigitByTwoDigit,   P.a(10, 99).b(10, 99)),
    Bucket::rest(    S::ThreeDigitByTwoDigit, P.a(100, 999).b(10, 99)),
];

pub const D_DIVISION: &[Bucket] = &[
    Bucket::upto(95, S::ThreeDigitBySingleDivision,  P.a(12, 110).b(2, 9).remainder()),
    Bucket::rest(    S::LongDivisionTwoDigitDivisor, P.a(2, 40).b(11, 25)),
];

/// Fraction buckets describe numerators (`range_a`) and denominators (`range_b`).
pub const D_FRACTIONS: &[Bucket] = &[
    Bucket::upto(150, S::EquivalentFraction, P.a(1, 9).b(2, 10)),
    Bucket::upto(175, S::ReduceFraction,     P.a(1, 9).b(2, 10)),
    Bucket::rest(     S::ImproperToMixed,    P.a(1, 9).b(2, 10)),
];
