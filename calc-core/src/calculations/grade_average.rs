//! Arithmetic mean of a student's grades with a pass/fail verdict.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_GRADE: Decimal = Decimal::ZERO;
pub const MAX_GRADE: Decimal = Decimal::TEN;

/// Averages strictly above this pass.
pub const PASSING_AVERAGE: Decimal = dec!(7);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GradeError {
    #[error("no grades to average")]
    NoGrades,

    #[error("grade {index} must be between 0 and 10, got {grade}")]
    OutOfRange { index: usize, grade: Decimal },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeStatus {
    Approved,
    Failed,
}

impl GradeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Failed => "Failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeAverage {
    pub average: Decimal,
    pub status: GradeStatus,
}

/// Averages `grades` and decides whether the student passed.
///
/// # Errors
///
/// Returns [`GradeError::NoGrades`] for an empty slice and
/// [`GradeError::OutOfRange`] for the first grade outside [0, 10].
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::calculations::{GradeStatus, average_grades};
///
/// let result = average_grades(&[dec!(8), dec!(7), dec!(9)]).unwrap();
///
/// assert_eq!(result.average, dec!(8));
/// assert_eq!(result.status, GradeStatus::Approved);
/// ```
pub fn average_grades(grades: &[Decimal]) -> Result<GradeAverage, GradeError> {
    if grades.is_empty() {
        return Err(GradeError::NoGrades);
    }
    if let Some((index, grade)) = grades
        .iter()
        .enumerate()
        .find(|(_, grade)| **grade < MIN_GRADE || **grade > MAX_GRADE)
    {
        return Err(GradeError::OutOfRange {
            index,
            grade: *grade,
        });
    }

    let total: Decimal = grades.iter().sum();
    let average = total / Decimal::from(grades.len());
    let status = if average > PASSING_AVERAGE {
        GradeStatus::Approved
    } else {
        GradeStatus::Failed
    };

    Ok(GradeAverage { average, status })
}
