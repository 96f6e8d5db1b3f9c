//! The subtype registry: every curriculum topic tag, its stable key, its
//! label, and the family whose constructor builds it.
//!
//! Adding a topic is one line in the table below plus its arms in the
//! family module. Generator dispatch never changes.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::curriculum_engine::{
    error::EngineError,
    families::{self, Family},
};

macro_rules! subtypes {
    ($( $family:ident { $( $variant:ident => $key:literal, $label:literal; )* } )*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum Subtype {
            $($( $variant, )*)*
        }

        impl Subtype {
            pub const ALL: &'static [Subtype] = &[ $($( Subtype::$variant, )*)* ];

            /// Stable snake_case identifier (matches the serde name).
            pub fn key(self) -> &'static str {
                match self { $($( Subtype::$variant => $key, )*)* }
            }

            pub fn label(self) -> &'static str {
                match self { $($( Subtype::$variant => $label, )*)* }
            }

            /// The family that constructs, solves and explains this subtype.
            pub fn family(self) -> &'static Family {
                match self { $($( Subtype::$variant => &families::$family::FAMILY, )*)* }
            }
        }
    };
}

subtypes! {
    counting {
        CountObjects   => "count_objects",    "Count the objects";
        NumberAfter    => "number_after",     "Number after";
        NumberBefore   => "number_before",    "Number before";
        NumberBetween  => "number_between",   "Number between";
        FillSequence   => "fill_sequence",    "Fill in the sequence";
        SkipCountTwos  => "skip_count_twos",  "Skip count by 2s";
        SkipCountFives => "skip_count_fives", "Skip count by 5s";
        SkipCountTens  => "skip_count_tens",  "Skip count by 10s";
        CompareNumbers => "compare_numbers",  "Which number is bigger";
        NumberWords    => "number_words",     "Number words to numerals";
    }
    addition {
        AddOne             => "add_one",                "Adding 1";
        AddTwo             => "add_two",                "Adding 2";
        AddThree           => "add_three",              "Adding 3";
        AddUpToThree       => "add_up_to_three",        "Adding 1 to 3";
        AddFour            => "add_four",               "Adding 4";
        AddFive            => "add_five",               "Adding 5";
        AddSix             => "add_six",                "Adding 6";
        AddSeven           => "add_seven",              "Adding 7";
        AddEight           => "add_eight",              "Adding 8";
        AddNine            => "add_nine",               "Adding 9";
        AddTen             => "add_ten",                "Adding 10";
        AddDoubles         => "add_doubles",            "Doubles";
        AddSingleDigits    => "add_single_digits",      "Single-digit addition";
        AddWithinTwenty    => "add_within_twenty",      "Sums to 20";
        AddMakeTen         => "add_make_ten",           "Making 10";
        AddMissingAddend   => "add_missing_addend",     "Missing addend";
        TwoDigitAddNoCarry => "two_digit_add_no_carry", "2-digit addition without carrying";
        TwoDigitAddCarry   => "two_digit_add_carry",    "2-digit addition with carrying";
        ColumnAddThree     => "column_add_three",       "Adding three numbers";
        ThreeDigitAddition => "three_digit_addition",   "3-digit addition";
        FourDigitAddition  => "four_digit_addition",    "4-digit addition";
    }
    subtraction {
        SubtractOne           => "subtract_one",             "Subtracting 1";
        SubtractTwo           => "subtract_two",             "Subtracting 2";
        SubtractThree         => "subtract_three",           "Subtracting 3";
        SubtractUpToFive      => "subtract_up_to_five",      "Subtracting up to 5";
        SubtractWithinTen     => "subtract_within_ten",      "Subtraction within 10";
        SubtractWithinTwenty  => "subtract_within_twenty",   "Subtraction within 20";
        SubtractFromTen       => "subtract_from_ten",        "Subtracting from 10";
        SubtractMissing       => "subtract_missing",         "Missing number subtraction";
        TwoDigitSubNoBorrow   => "two_digit_sub_no_borrow",  "2-digit subtraction without borrowing";
        TwoDigitSubBorrow     => "two_digit_sub_borrow",     "2-digit subtraction with borrowing";
        ThreeDigitSubtraction => "three_digit_subtraction",  "3-digit subtraction";
        SubtractAcrossZeros   => "subtract_across_zeros",    "Subtracting across zeros";
    }
    multiplication {
        TimesTablesToThree    => "times_tables_to_three",     "Times tables ×1 to ×3";
        TimesTablesFourFive   => "times_tables_four_five",    "Times tables ×4 and ×5";
        TimesTablesSixSeven   => "times_tables_six_seven",    "Times tables ×6 and ×7";
        TimesTablesEightNine  => "times_tables_eight_nine",   "Times tables ×8 and ×9";
        TimesTablesMixed      => "times_tables_mixed",        "Mixed times tables";
        MultiplyByTen         => "multiply_by_ten",           "Multiplying by 10";
        MultiplyMissingFactor => "multiply_missing_factor",   "Missing factor";
        TwoDigitBySingle      => "two_digit_by_single",       "2-digit × 1-digit";
        ThreeDigitBySingle    => "three_digit_by_single",     "3-digit × 1-digit";
        TwoDigitByTwoDigit    => "two_digit_by_two_digit",    "2-digit × 2-digit";
        ThreeDigitByTwoDigit  => "three_digit_by_two_digit",  "3-digit × 2-digit";
    }
    division {
        DivisionFactsToFive        => "division_facts_to_five",         "Dividing by 2 to 5";
        DivisionFactsToNine        => "division_facts_to_nine",         "Dividing by 2 to 9";
        DivisionWithRemainder      => "division_with_remainder",        "Division with remainders";
        DivisionMissingDivisor     => "division_missing_divisor",       "Missing divisor";
        TwoDigitBySingleDivision   => "two_digit_by_single_division",   "2-digit ÷ 1-digit";
        ThreeDigitBySingleDivision => "three_digit_by_single_division", "3-digit ÷ 1-digit";
        LongDivisionTwoDigitDivisor => "long_division_two_digit_divisor", "Long division by 2-digit divisors";
    }
    fractions {
        EquivalentFraction   => "equivalent_fraction",     "Equivalent fractions";
        ReduceFraction       => "reduce_fraction",         "Reducing fractions";
        ImproperToMixed      => "improper_to_mixed",       "Improper fractions to mixed numbers";
        MixedToImproper      => "mixed_to_improper",       "Mixed numbers to improper fractions";
        FractionAddSameDen   => "fraction_add_same_den",   "Adding like fractions";
        FractionSubSameDen   => "fraction_sub_same_den",   "Subtracting like fractions";
        FractionAddUnlikeDen => "fraction_add_unlike_den", "Adding unlike fractions";
        FractionSubUnlikeDen => "fraction_sub_unlike_den", "Subtracting unlike fractions";
        MixedNumberAdd       => "mixed_number_add",        "Adding mixed numbers";
        FractionMultiply     => "fraction_multiply",       "Multiplying fractions";
        FractionDivide       => "fraction_divide",         "Dividing fractions";
        FractionOfWhole      => "fraction_of_whole",       "Fraction of a whole number";
        CompareFractions     => "compare_fractions",       "Comparing fractions";
    }
    decimals {
        DecimalAdd                   => "decimal_add",                     "Adding decimals";
        DecimalSubtract              => "decimal_subtract",                "Subtracting decimals";
        DecimalMultiply              => "decimal_multiply",                "Multiplying decimals";
        FractionToDecimal            => "fraction_to_decimal",             "Fractions to decimals";
        DecimalToFraction            => "decimal_to_fraction",             "Decimals to fractions";
        OrderOfOperations            => "order_of_operations",             "Order of operations";
        OrderOfOperationsParentheses => "order_of_operations_parentheses", "Order of operations with brackets";
    }
    integers {
        IntegerAdd      => "integer_add",      "Adding integers";
        IntegerSubtract => "integer_subtract", "Subtracting integers";
        IntegerMultiply => "integer_multiply", "Multiplying integers";
        IntegerDivide   => "integer_divide",   "Dividing integers";
        AbsoluteValue   => "absolute_value",   "Absolute value";
    }
    algebra {
        EvaluateExpression      => "evaluate_expression",       "Evaluating expressions";
        CombineLikeTerms        => "combine_like_terms",        "Combining like terms";
        DistributiveExpand      => "distributive_expand",       "Distributive property";
        ExpandBinomials         => "expand_binomials",          "Expanding binomials";
        FactorQuadratic         => "factor_quadratic",          "Factoring quadratics";
        DifferenceOfSquares     => "difference_of_squares",     "Difference of squares";
        PolynomialRemainder     => "polynomial_remainder",      "Remainder theorem";
        SolveQuadraticFactoring => "solve_quadratic_factoring", "Solving quadratics by factoring";
        Discriminant            => "discriminant",              "Discriminant";
        QuadraticRootCount      => "quadratic_root_count",      "Number of real roots";
        ComplexAdd              => "complex_add",               "Adding complex numbers";
        ComplexMultiply         => "complex_multiply",          "Multiplying complex numbers";
        ComplexModulusSquared   => "complex_modulus_squared",   "Squared modulus of a complex number";
    }
    equations {
        OneStepEquation       => "one_step_equation",      "One-step equations";
        TwoStepEquation       => "two_step_equation",      "Two-step equations";
        EquationBothSides     => "equation_both_sides",    "Variables on both sides";
        SimultaneousEquations => "simultaneous_equations", "Simultaneous equations";
        LinearInequality      => "linear_inequality",      "Linear inequalities";
        LinearFunctionValue   => "linear_function_value",  "Evaluating linear functions";
        SlopeFromPoints       => "slope_from_points",      "Slope from two points";
        FunctionComposition   => "function_composition",   "Composite functions";
        InverseFunction       => "inverse_function",       "Inverse functions";
        QuadraticVertex       => "quadratic_vertex",       "Vertex of a parabola";
    }
    radicals {
        PerfectSquareRoot     => "perfect_square_root",    "Square roots";
        SimplifySquareRoot    => "simplify_square_root",   "Simplifying square roots";
        PythagoreanHypotenuse => "pythagorean_hypotenuse", "Pythagorean theorem: hypotenuse";
        PythagoreanLeg        => "pythagorean_leg",        "Pythagorean theorem: missing leg";
    }
    exponents {
        EvaluatePower       => "evaluate_power",       "Evaluating powers";
        ExponentProduct     => "exponent_product",     "Product of powers";
        ExponentQuotient    => "exponent_quotient",    "Quotient of powers";
        ExponentPower       => "exponent_power",       "Power of a power";
        ExponentialEquation => "exponential_equation", "Exponential equations";
        LogEvaluate         => "log_evaluate",         "Evaluating logarithms";
        LogProductRule      => "log_product_rule",     "Logarithm product rule";
    }
    trigonometry {
        DegreesToRadians    => "degrees_to_radians",    "Degrees to radians";
        RadiansToDegrees    => "radians_to_degrees",    "Radians to degrees";
        SpecialAngleSine    => "special_angle_sine",    "Sine of special angles";
        SpecialAngleCosine  => "special_angle_cosine",  "Cosine of special angles";
        SpecialAngleTangent => "special_angle_tangent", "Tangent of special angles";
    }
    sequences {
        MissingSequenceTerm => "missing_sequence_term", "Missing term in a sequence";
        ArithmeticNthTerm   => "arithmetic_nth_term",   "nth term of an arithmetic sequence";
        GeometricNthTerm    => "geometric_nth_term",    "nth term of a geometric sequence";
        ArithmeticSeriesSum => "arithmetic_series_sum", "Sum of an arithmetic series";
        GeometricSeriesSum  => "geometric_series_sum",  "Sum of a geometric series";
        SequenceLimit       => "sequence_limit",        "Limit of a sequence";
    }
    calculus {
        PolynomialLimit         => "polynomial_limit",          "Limits of polynomials";
        RationalLimit           => "rational_limit",            "Limits of rational functions";
        PowerRuleDerivative     => "power_rule_derivative",     "Power rule";
        DerivativeAtPoint       => "derivative_at_point",       "Derivative at a point";
        ProductRuleDerivative   => "product_rule_derivative",   "Product rule";
        ChainRuleDerivative     => "chain_rule_derivative",     "Chain rule";
        IndefinitePowerIntegral => "indefinite_power_integral", "Indefinite integrals";
        DefiniteIntegral        => "definite_integral",         "Definite integrals";
        AreaUnderCurve          => "area_under_curve",          "Area under a curve";
    }
    geometry {
        VectorAdd       => "vector_add",       "Adding vectors";
        VectorScale     => "vector_scale",     "Scalar multiples of vectors";
        DotProduct      => "dot_product",      "Dot product";
        VectorMagnitude => "vector_magnitude", "Magnitude of a vector";
        TranslatePoint  => "translate_point",  "Translations";
        ReflectPoint    => "reflect_point",    "Reflections";
        RotatePoint     => "rotate_point",     "Rotations";
        DilatePoint     => "dilate_point",     "Dilations";
    }
    matrices {
        MatrixAdd        => "matrix_add",        "Adding matrices";
        MatrixScalar     => "matrix_scalar",     "Scalar multiplication of matrices";
        MatrixMultiply   => "matrix_multiply",   "Multiplying matrices";
        Determinant2x2   => "determinant2x2",    "2×2 determinants";
        MatrixInverse2x2 => "matrix_inverse2x2", "2×2 inverse matrices";
    }
    probability {
        Factorial          => "factorial",            "Factorials";
        Permutations       => "permutations",         "Permutations";
        Combinations       => "combinations",         "Combinations";
        SimpleProbability  => "simple_probability",   "Simple probability";
        DiceSumProbability => "dice_sum_probability", "Probability with two dice";
        IndependentEvents  => "independent_events",   "Independent events";
    }
    statistics {
        Mean                => "mean",                  "Mean";
        Median              => "median",                "Median";
        Mode                => "mode",                  "Mode";
        Range               => "range",                 "Range";
        SetUnion            => "set_union",             "Union of sets";
        SetIntersection     => "set_intersection",      "Intersection of sets";
        SetDifference       => "set_difference",        "Difference of sets";
        SetCardinalityUnion => "set_cardinality_union", "Size of a union";
    }
}

impl fmt::Display for Subtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Subtype {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subtype::ALL
            .iter()
            .copied()
            .find(|subtype| subtype.key() == s.trim())
            .ok_or_else(|| EngineError::UnknownSubtype(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique_and_match_serde_names() {
        let mut seen = HashSet::new();
        for &subtype in Subtype::ALL {
            assert!(seen.insert(subtype.key()), "duplicate key {}", subtype.key());
            let json = serde_json::to_string(&subtype).unwrap();
            assert_eq!(json, format!("\"{}\"", subtype.key()), "serde name differs for {subtype:?}");
        }
        assert!(Subtype::ALL.len() >= 120, "only {} subtypes registered", Subtype::ALL.len());
    }

    #[test]
    fn keys_parse_back() {
        for &subtype in Subtype::ALL {
            assert_eq!(subtype.key().parse::<Subtype>().unwrap(), subtype);
        }
        assert!("not_a_topic".parse::<Subtype>().is_err());
    }
}
