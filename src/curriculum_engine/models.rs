use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::curriculum_engine::{error::EngineError, subtype::Subtype};

/// Worksheets per level. Positions run `1..=WORKSHEETS_PER_LEVEL`.
pub const WORKSHEETS_PER_LEVEL: u32 = 200;

// ---------------------------------------------------------------------------
// Curriculum levels and positions
// ---------------------------------------------------------------------------

/// One curriculum tier. Declaration order is curriculum order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "7A")] SevenA,
    #[serde(rename = "6A")] SixA,
    #[serde(rename = "5A")] FiveA,
    #[serde(rename = "4A")] FourA,
    #[serde(rename = "3A")] ThreeA,
    #[serde(rename = "2A")] TwoA,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    XV,
    XM,
    XP,
    XS,
}

impl Level {
    pub const ALL: [Level; 25] = [
        Level::SevenA, Level::SixA, Level::FiveA, Level::FourA, Level::ThreeA, Level::TwoA,
        Level::A, Level::B, Level::C, Level::D, Level::E, Level::F, Level::G, Level::H,
        Level::I, Level::J, Level::K, Level::L, Level::M, Level::N, Level::O,
        Level::XV, Level::XM, Level::XP, Level::XS,
    ];

    /// Zero-based index in curriculum order.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn code(self) -> &'static str {
        match self {
            Level::SevenA => "7A",
            Level::SixA   => "6A",
            Level::FiveA  => "5A",
            Level::FourA  => "4A",
            Level::ThreeA => "3A",
            Level::TwoA   => "2A",
            Level::A => "A", Level::B => "B", Level::C => "C", Level::D => "D",
            Level::E => "E", Level::F => "F", Level::G => "G", Level::H => "H",
            Level::I => "I", Level::J => "J", Level::K => "K", Level::L => "L",
            Level::M => "M", Level::N => "N", Level::O => "O",
            Level::XV => "XV", Level::XM => "XM", Level::XP => "XP", Level::XS => "XS",
        }
    }

    /// Short description of the topic band this tier covers.
    pub fn topic(self) -> &'static str {
        match self {
            Level::SevenA => "Counting to 10",
            Level::SixA   => "Counting to 30",
            Level::FiveA  => "Sequences to 50",
            Level::FourA  => "Writing numbers to 50",
            Level::ThreeA => "Adding 1 to 3",
            Level::TwoA   => "Adding 4 to 10",
            Level::A      => "Addition and subtraction facts",
            Level::B      => "Vertical addition and subtraction",
            Level::C      => "Multiplication and division",
            Level::D      => "Long multiplication, long division, fractions",
            Level::E      => "Fraction addition and subtraction",
            Level::F      => "Fraction operations, decimals, order of operations",
            Level::G      => "Negative numbers and algebraic expressions",
            Level::H      => "Linear equations and functions",
            Level::I      => "Factorisation, square roots, quadratics",
            Level::J      => "Advanced algebra and complex numbers",
            Level::K      => "Quadratic, exponential and logarithmic functions",
            Level::L      => "Logarithms, limits, differentiation",
            Level::M      => "Trigonometry",
            Level::N      => "Sequences and limits",
            Level::O      => "Advanced calculus",
            Level::XV     => "Vectors and transformations",
            Level::XM     => "Matrices",
            Level::XP     => "Probability and combinatorics",
            Level::XS     => "Statistics and sets",
        }
    }

    pub fn worksheet_count(self) -> u32 {
        WORKSHEETS_PER_LEVEL
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Level {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Level::ALL
            .iter()
            .copied()
            .find(|level| level.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EngineError::UnknownLevel(s.to_string()))
    }
}

/// A point in the curriculum. Ordered by level first, then worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CurriculumPosition {
    pub level: Level,
    pub worksheet: u32,
}

impl CurriculumPosition {
    pub const fn new(level: Level, worksheet: u32) -> Self {
        CurriculumPosition { level, worksheet }
    }
}

impl fmt::Display for CurriculumPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.level, self.worksheet)
    }
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// The strand a worksheet position practises. Chosen by the sequencer before
/// the resolver picks a subtype inside that strand's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Counting,
    NumberWriting,
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Fractions,
    Decimals,
    OrderOfOperations,
    Integers,
    Expressions,
    Equations,
    Functions,
    Radicals,
    Quadratics,
    ComplexNumbers,
    Exponents,
    Logarithms,
    Trigonometry,
    Sequences,
    Limits,
    Differentiation,
    Integration,
    Vectors,
    Matrices,
    Transformations,
    Probability,
    Statistics,
    Sets,
}

impl OperationKind {
    /// Lowercase name, used for keyword matching in animation lookup.
    pub fn name(self) -> &'static str {
        match self {
            OperationKind::Counting          => "counting",
            OperationKind::NumberWriting     => "number writing",
            OperationKind::Addition          => "addition",
            OperationKind::Subtraction       => "subtraction",
            OperationKind::Multiplication    => "multiplication",
            OperationKind::Division          => "division",
            OperationKind::Fractions         => "fractions",
            OperationKind::Decimals          => "decimals",
            OperationKind::OrderOfOperations => "order of operations",
            OperationKind::Integers          => "integers",
            OperationKind::Expressions       => "expressions",
            OperationKind::Equations         => "equations",
            OperationKind::Functions         => "functions",
            OperationKind::Radicals          => "radicals",
            OperationKind::Quadratics        => "quadratics",
            OperationKind::ComplexNumbers    => "complex numbers",
            OperationKind::Exponents         => "exponents",
            OperationKind::Logarithms        => "logarithms",
            OperationKind::Trigonometry      => "trigonometry",
            OperationKind::Sequences         => "sequences",
            OperationKind::Limits            => "limits",
            OperationKind::Differentiation   => "differentiation",
            OperationKind::Integration       => "integration",
            OperationKind::Vectors           => "vectors",
            OperationKind::Matrices          => "matrices",
            OperationKind::Transformations   => "transformations",
            OperationKind::Probability       => "probability",
            OperationKind::Statistics        => "statistics",
            OperationKind::Sets              => "sets",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ---------------------------------------------------------------------------
// Generation parameters
// ---------------------------------------------------------------------------

/// Numeric ranges and constraint flags a subtype constructor reads.
///
/// Every builder is a `const fn` so curriculum tables can live in `static`
/// slices. Ranges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenParams {
    pub range_a: (i64, i64),
    pub range_b: (i64, i64),
    pub fixed: Option<i64>,
    pub terms: u8,
    pub allow_carry: bool,
    pub require_carry: bool,
    pub allow_borrow: bool,
    pub require_borrow: bool,
    pub allow_remainder: bool,
    pub allow_missing_operand: bool,
    pub allow_negative: bool,
}

impl GenParams {
    pub const fn new() -> Self {
        GenParams {
            range_a: (1, 9),
            range_b: (1, 9),
            fixed: None,
            terms: 2,
            allow_carry: true,
            require_carry: false,
            allow_borrow: true,
            require_borrow: false,
            allow_remainder: false,
            allow_missing_operand: false,
            allow_negative: false,
        }
    }

    pub const fn a(mut self, lo: i64, hi: i64) -> Self {
        self.range_a = (lo, hi);
        self
    }

    pub const fn b(mut self, lo: i64, hi: i64) -> Self {
        self.range_b = (lo, hi);
        self
    }

    pub const fn fixed(mut self, value: i64) -> Self {
        self.fixed = Some(value);
        self
    }

    pub const fn terms(mut self, terms: u8) -> Self {
        self.terms = terms;
        self
    }

    pub const fn no_carry(mut self) -> Self {
        self.allow_carry = false;
        self.require_carry = false;
        self
    }

    pub const fn carry(mut self) -> Self {
        self.allow_carry = true;
        self.require_carry = true;
        self
    }

    pub const fn no_borrow(mut self) -> Self {
        self.allow_borrow = false;
        self.require_borrow = false;
        self
    }

    pub const fn borrow(mut self) -> Self {
        self.allow_borrow = true;
        self.require_borrow = true;
        self
    }

    pub const fn remainder(mut self) -> Self {
        self.allow_remainder = true;
        self
    }

    pub const fn missing(mut self) -> Self {
        self.allow_missing_operand = true;
        self
    }

    pub const fn negative(mut self) -> Self {
        self.allow_negative = true;
        self
    }
}

impl Default for GenParams {
    fn default() -> Self {
        GenParams::new()
    }
}

/// The resolved recipe for one worksheet position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorksheetConfig {
    pub level: Level,
    pub worksheet: u32,
    pub operation: OperationKind,
    pub subtype: Subtype,
    pub params: GenParams,
}

impl WorksheetConfig {
    pub fn position(&self) -> CurriculumPosition {
        CurriculumPosition::new(self.level, self.worksheet)
    }
}

// ---------------------------------------------------------------------------
// Problem output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayFormat {
    Horizontal,
    Vertical,
    Expression,
    Graph,
    Geometry,
    Table,
    SequenceBoxes,
    Matching,
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DisplayFormat::Horizontal    => "horizontal",
            DisplayFormat::Vertical      => "vertical",
            DisplayFormat::Expression    => "expression",
            DisplayFormat::Graph         => "graph",
            DisplayFormat::Geometry      => "geometry",
            DisplayFormat::Table         => "table",
            DisplayFormat::SequenceBoxes => "sequence_boxes",
            DisplayFormat::Matching      => "matching",
        };
        write!(f, "{}", s)
    }
}

/// Which operand of a binary problem is hidden from the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPosition {
    First,
    Second,
}

/// A rational number kept in lowest terms with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fraction {
    pub num: i64,
    pub den: i64,
}

impl Fraction {
    /// Build a reduced fraction. A zero denominator is treated as 1.
    pub fn new(num: i64, den: i64) -> Self {
        let den = if den == 0 { 1 } else { den };
        let g = crate::curriculum_engine::arithmetic::gcd(num, den).max(1);
        let sign = if den < 0 { -1 } else { 1 };
        Fraction { num: sign * num / g, den: sign * den / g }
    }

    pub fn is_whole(self) -> bool {
        self.den == 1
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Answer {
    Integer(i64),
    Decimal { value: f64, places: u32 },
    Fraction(Fraction),
    Text(String),
    Expression(String),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Integer(n)                => write!(f, "{}", n),
            Answer::Decimal { value, places } => write!(f, "{:.*}", *places as usize, value),
            Answer::Fraction(fr)              => write!(f, "{}", fr),
            Answer::Text(s)                   => write!(f, "{}", s),
            Answer::Expression(s)             => write!(f, "{}", s),
        }
    }
}

/// A fully worked comparable problem shown in the teaching hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkedExample {
    pub question: String,
    pub operands: Vec<i64>,
    pub steps: Vec<String>,
    pub answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HintData {
    pub text: String,
    pub animation_id: Option<String>,
    pub duration_secs: u32,
    /// Seconds the learner must watch before skipping is allowed.
    pub min_view_secs: Option<u32>,
    pub example: Option<WorkedExample>,
}

/// Three escalating tiers of help for one problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemHints {
    pub micro: HintData,
    pub visual: HintData,
    pub teaching: HintData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub level: Level,
    pub worksheet: u32,
    /// The strand this problem practises (the problem "type").
    pub operation: OperationKind,
    pub subtype: Subtype,
    pub difficulty: u8,
    pub display_format: DisplayFormat,
    pub question: String,
    pub operands: Vec<i64>,
    pub correct_answer: Answer,
    pub missing_position: Option<MissingPosition>,
    pub hints: ProblemHints,
    /// Set when bounded rejection sampling ran out of attempts and the
    /// operands may violate the subtype's declared constraint.
    pub degraded: bool,
}

impl Problem {
    pub fn position(&self) -> CurriculumPosition {
        CurriculumPosition::new(self.level, self.worksheet)
    }
}

/// Input for [`generate_problem`](crate::curriculum_engine::generator::generate_problem).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemRequest {
    pub level: Level,
    pub worksheet: u32,
    pub rng_seed: Option<u64>,
}

impl ProblemRequest {
    /// Request with entropy seeding.
    pub fn new(level: Level, worksheet: u32) -> Self {
        ProblemRequest { level, worksheet, rng_seed: None }
    }

    pub fn seeded(level: Level, worksheet: u32, seed: u64) -> Self {
        ProblemRequest { level, worksheet, rng_seed: Some(seed) }
    }
}
