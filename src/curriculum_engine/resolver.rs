//! Curriculum position → worksheet configuration.
//!
//! Every `(level, operation)` pair the curriculum defines owns an ordered
//! bucket list. A bucket covers every worksheet up to and including its
//! `upper` bound that an earlier bucket did not claim; the last bucket of a
//! well-formed table has `upper: None` and catches the rest. The same
//! first-covering scan drives the sequencer's phase tables.

use tracing::{debug, error};

use crate::curriculum_engine::{
    error::{EngineError, EngineResult},
    models::{GenParams, Level, OperationKind, WorksheetConfig, WORKSHEETS_PER_LEVEL},
    subtype::Subtype,
    tables,
};

/// One row of a curriculum table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// Inclusive upper worksheet bound; `None` is the catch-all.
    pub upper: Option<u32>,
    pub subtype: Subtype,
    pub params: GenParams,
}

impl Bucket {
    /// Bucket covering worksheets up to `upper`.
    pub const fn upto(upper: u32, subtype: Subtype, params: GenParams) -> Self {
        Bucket { upper: Some(upper), subtype, params }
    }

    /// Catch-all bucket.
    pub const fn rest(subtype: Subtype, params: GenParams) -> Self {
        Bucket { upper: None, subtype, params }
    }
}

/// Anything with an optional inclusive upper worksheet bound.
pub trait Bounded {
    fn upper(&self) -> Option<u32>;
}

impl Bounded for Bucket {
    fn upper(&self) -> Option<u32> {
        self.upper
    }
}

/// First row whose bound covers `worksheet`.
pub fn first_covering<T: Bounded>(rows: &[T], worksheet: u32) -> Option<&T> {
    rows.iter().find(|row| row.upper().map_or(true, |upper| worksheet <= upper))
}

/// Reject worksheets outside `1..=WORKSHEETS_PER_LEVEL`.
pub fn check_worksheet(level: Level, worksheet: u32) -> EngineResult<()> {
    if (1..=level.worksheet_count()).contains(&worksheet) {
        Ok(())
    } else {
        Err(EngineError::WorksheetOutOfRange { level, worksheet, max: WORKSHEETS_PER_LEVEL })
    }
}

/// The raw bucket list for a `(level, operation)` pair, if the curriculum
/// defines one.
pub fn table_for(level: Level, operation: OperationKind) -> Option<&'static [Bucket]> {
    tables::table(level, operation)
}

/// Resolve a curriculum position to its worksheet configuration.
///
/// # Errors
///
/// - [`EngineError::WorksheetOutOfRange`] outside `1..=200`.
/// - [`EngineError::InvalidLevelForOperation`] when the level has no table
///   for `operation`.
/// - [`EngineError::ConfigurationGap`] when the table does not cover the
///   worksheet (a table authoring bug).
pub fn resolve(level: Level, worksheet: u32, operation: OperationKind) -> EngineResult<WorksheetConfig> {
    check_worksheet(level, worksheet)?;
    let table = table_for(level, operation)
        .ok_or(EngineError::InvalidLevelForOperation { level, operation })?;

    let Some(bucket) = first_covering(table, worksheet) else {
        error!(%level, worksheet, operation = operation.name(), "curriculum table has no covering bucket");
        return Err(EngineError::ConfigurationGap { level, operation, worksheet });
    };

    debug!(%level, worksheet, operation = operation.name(), subtype = bucket.subtype.key(), "resolved worksheet");
    Ok(WorksheetConfig {
        level,
        worksheet,
        operation,
        subtype: bucket.subtype,
        params: bucket.params,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAPPY: &[Bucket] = &[
        Bucket::upto(10, Subtype::AddOne, GenParams::new()),
        Bucket::upto(20, Subtype::AddTwo, GenParams::new()),
    ];

    #[test]
    fn first_covering_respects_inclusive_bounds() {
        assert_eq!(first_covering(GAPPY, 1).map(|b| b.subtype), Some(Subtype::AddOne));
        assert_eq!(first_covering(GAPPY, 10).map(|b| b.subtype), Some(Subtype::AddOne));
        assert_eq!(first_covering(GAPPY, 11).map(|b| b.subtype), Some(Subtype::AddTwo));
        assert!(first_covering(GAPPY, 21).is_none());
    }

    #[test]
    fn times_tables_to_three() {
        let config = resolve(Level::C, 12, OperationKind::Multiplication).unwrap();
        assert_eq!(config.subtype, Subtype::TimesTablesToThree);
        assert_eq!(config.params.range_a, (0, 12));
        assert_eq!(config.params.range_b, (1, 3));
    }

    #[test]
    fn subtract_two_bucket() {
        for ws in 91..=100 {
            let config = resolve(Level::A, ws, OperationKind::Subtraction).unwrap();
            assert_eq!(config.subtype, Subtype::SubtractTwo);
            assert_eq!(config.params.range_a, (3, 12));
        }
    }

    #[test]
    fn division_catch_all_reaches_the_last_worksheet() {
        let config = resolve(Level::C, 200, OperationKind::Division).unwrap();
        assert_eq!(config.subtype, Subtype::TwoDigitBySingleDivision);
        assert!(!config.params.allow_remainder);
    }

    #[test]
    fn undefined_pairs_and_bad_worksheets_fail() {
        assert_eq!(
            resolve(Level::SevenA, 5, OperationKind::Matrices),
            Err(EngineError::InvalidLevelForOperation { level: Level::SevenA, operation: OperationKind::Matrices })
        );
        assert!(matches!(
            resolve(Level::A, 0, OperationKind::Addition),
            Err(EngineError::WorksheetOutOfRange { worksheet: 0, .. })
        ));
        assert!(matches!(
            resolve(Level::A, 201, OperationKind::Addition),
            Err(EngineError::WorksheetOutOfRange { worksheet: 201, .. })
        ));
    }

    #[test]
    fn resolution_is_deterministic() {
        let a = resolve(Level::E, 77, OperationKind::Fractions).unwrap();
        let b = resolve(Level::E, 77, OperationKind::Fractions).unwrap();
        assert_eq!(a, b);
    }
}
