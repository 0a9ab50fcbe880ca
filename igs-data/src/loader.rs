use std::io::Read;

use igs_core::{IgsBracket, IgsSchedule, IgsScheduleError};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading an IGS schedule.
#[derive(Debug, Error)]
pub enum IgsScheduleLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("invalid schedule: {0}")]
    Schedule(#[from] IgsScheduleError),
}

impl From<csv::Error> for IgsScheduleLoaderError {
    fn from(err: csv::Error) -> Self {
        IgsScheduleLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from an IGS schedule CSV file.
///
/// The CSV format mirrors the schedule table:
/// - `tax_class`: the ordinal class of the bracket (1..N)
/// - `min_revenue`: the inclusive lower revenue bound
/// - `max_revenue`: the inclusive upper revenue bound
/// - `standard_amount`: the levy owed under the standard regime
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct IgsScheduleRecord {
    pub tax_class: u8,
    pub min_revenue: Decimal,
    pub max_revenue: Decimal,
    pub standard_amount: Decimal,
}

/// Loader for IGS schedule data from CSV files.
///
/// The loader parses CSV rows and hands them to [`IgsSchedule::new`] for
/// invariant checking, so a loaded schedule is always valid. Only the
/// standard amount appears in the file; reduced amounts are derived at
/// resolution time.
pub struct IgsScheduleLoader;

impl IgsScheduleLoader {
    /// Parse schedule records from a CSV reader.
    ///
    /// Returns a vector of parsed records. The reader can be any type
    /// that implements `Read`, such as a file or a string slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<IgsScheduleRecord>, IgsScheduleLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: IgsScheduleRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Build a validated schedule from parsed records.
    ///
    /// Records are sorted by class before construction, so row order in
    /// the file does not matter. The ceiling is derived from the top
    /// bracket (`max_revenue + 1`), which [`IgsSchedule::new`] requires
    /// to sit flush against it.
    pub fn build(
        records: Vec<IgsScheduleRecord>
    ) -> Result<IgsSchedule, IgsScheduleLoaderError> {
        let mut brackets: Vec<IgsBracket> = records
            .into_iter()
            .map(|record| IgsBracket {
                tax_class: record.tax_class,
                min_revenue: record.min_revenue,
                max_revenue: record.max_revenue,
                standard_amount: record.standard_amount,
            })
            .collect();
        brackets.sort_by_key(|bracket| bracket.tax_class);

        let ceiling = brackets
            .last()
            .map(|top| top.max_revenue + Decimal::ONE)
            .unwrap_or(Decimal::ZERO);

        debug!(brackets = brackets.len(), %ceiling, "building schedule from records");

        Ok(IgsSchedule::new(brackets, ceiling)?)
    }

    /// Parse and build in one step.
    pub fn load<R: Read>(reader: R) -> Result<IgsSchedule, IgsScheduleLoaderError> {
        let records = Self::parse(reader)?;
        Self::build(records)
    }
}
