//! Batch payroll deductions from CSV.
//!
//! ## CSV Format
//!
//! | Column     | Required | Type    | Notes                                      |
//! |------------|----------|---------|--------------------------------------------|
//! | `employee` | yes      | string  | Free-form name or identifier               |
//! | `gross`    | yes      | decimal | `1518.00` or quoted Brazilian `"1.518,00"` |
//!
//! The output CSV has the columns `employee,gross,deduction,net,ceiling_applied`.

use std::io::{Read, Write};

use calc_core::{ProgressiveCalculator, ProgressiveError, parse_amount};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when processing a payroll batch.
#[derive(Debug, Error)]
pub enum PayrollError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    /// `row` is 1-based, not counting the header.
    #[error("row {row} ({employee}): {source}")]
    Calculation {
        row: usize,
        employee: String,
        #[source]
        source: ProgressiveError,
    },

    #[error("CSV write error: {0}")]
    CsvWrite(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for PayrollError {
    fn from(err: csv::Error) -> Self {
        PayrollError::CsvParse(err.to_string())
    }
}

/// A single input row.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PayrollRecord {
    pub employee: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub gross: Decimal,
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_amount(&s).map_err(serde::de::Error::custom)
}

/// A single output row.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PayrollResult {
    pub employee: String,
    pub gross: Decimal,
    pub deduction: Decimal,
    pub net: Decimal,
    pub ceiling_applied: bool,
}

/// Column totals over a processed batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayrollTotals {
    pub employees: usize,
    pub gross: Decimal,
    pub deduction: Decimal,
    pub net: Decimal,
}

/// Reads payroll rows, runs them through a [`ProgressiveCalculator`], and
/// writes the results back out as CSV.
pub struct PayrollLoader;

impl PayrollLoader {
    /// Parse payroll records from a CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<PayrollRecord>, PayrollError> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: PayrollRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Compute the deduction for every record.
    ///
    /// Stops at the first record the calculator rejects.
    pub fn compute(
        calculator: &ProgressiveCalculator,
        records: &[PayrollRecord],
    ) -> Result<Vec<PayrollResult>, PayrollError> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let result = calculator.compute_deduction(record.gross).map_err(|source| {
                    PayrollError::Calculation {
                        row: index + 1,
                        employee: record.employee.clone(),
                        source,
                    }
                })?;
                debug!(employee = %record.employee, deduction = %result.deduction, "row computed");

                Ok(PayrollResult {
                    employee: record.employee.clone(),
                    gross: result.gross,
                    deduction: result.deduction,
                    net: result.net,
                    ceiling_applied: result.ceiling_applied,
                })
            })
            .collect()
    }

    /// Write results as CSV, header included.
    pub fn write<W: Write>(
        writer: W,
        results: &[PayrollResult],
    ) -> Result<(), PayrollError> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        for result in results {
            csv_writer
                .serialize(result)
                .map_err(|e| PayrollError::CsvWrite(e.to_string()))?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Sum the gross, deduction and net columns.
    pub fn totals(results: &[PayrollResult]) -> PayrollTotals {
        results
            .iter()
            .fold(PayrollTotals::default(), |mut totals, result| {
                totals.employees += 1;
                totals.gross += result.gross;
                totals.deduction += result.deduction;
                totals.net += result.net;
                totals
            })
    }
}
