//! Progressive bracket deductions (INSS-style payroll contributions).
//!
//! A gross amount is split across an ascending table of brackets, each slice
//! charged at its bracket's marginal rate. Amounts at or above the table's
//! ceiling skip the brackets and pay the flat maximum deduction.
//!
//! # Algorithm
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Reject negative gross amounts |
//! | 2    | `gross >= ceiling`: deduction is `max_deduction` |
//! | 3    | Walk brackets from zero; `gross > upper_bound` accrues the full width |
//! | 4    | Otherwise accrue `(gross - previous_bound) * rate` and stop |
//! | 5    | Clamp the sum at `max_deduction` (flagged), round once to cents |
//! | 6    | `net = gross - deduction`, rounded to cents |
//!
//! A gross amount exactly equal to a bracket's upper bound takes the partial
//! path of that bracket, which accrues the same amount as crossing it fully.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use calc_core::{BracketTable, ProgressiveCalculator};
//!
//! let calculator = ProgressiveCalculator::new(BracketTable::inss_2025());
//! let result = calculator.compute_deduction(dec!(2000.00)).unwrap();
//!
//! // 1518.00 × 7.5% + (2000.00 − 1518.00) × 9%
//! assert_eq!(result.deduction, dec!(157.23));
//! assert_eq!(result.net, dec!(1842.77));
//! assert!(!result.ceiling_applied);
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::round_half_up;
use crate::models::{BracketContribution, BracketTable, CalculationResult, DeductionBreakdown};

/// Errors raised by [`ProgressiveCalculator`] and [`BracketTable::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProgressiveError {
    /// The gross amount is outside the calculator's domain.
    #[error("gross amount must be non-negative, got {0}")]
    InvalidInput(Decimal),

    #[error("bracket table has no brackets")]
    EmptyTable,

    #[error("first bracket upper bound must be positive, got {0}")]
    NonPositiveBound(Decimal),

    #[error("bracket {index} upper bound {bound} does not exceed the previous bound")]
    NonAscendingBound { index: usize, bound: Decimal },

    #[error("bracket {index} rate must be between 0 and 1, got {rate}")]
    InvalidRate { index: usize, rate: Decimal },

    #[error("ceiling must be non-negative, got {0}")]
    NegativeCeiling(Decimal),

    #[error("maximum deduction must be non-negative, got {0}")]
    NegativeMaxDeduction(Decimal),

    /// Income between the last bound and the ceiling would go untaxed.
    #[error("ceiling {ceiling} lies above the last bracket upper bound {last_bound}")]
    CeilingAboveLastBracket { ceiling: Decimal, last_bound: Decimal },
}

/// Calculator for progressive bracket deductions over an injected table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressiveCalculator {
    table: BracketTable,
}

impl ProgressiveCalculator {
    pub fn new(table: BracketTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &BracketTable {
        &self.table
    }

    /// Computes the deduction and net amount for `gross`.
    ///
    /// `net` is rounded to cents like the deduction, so a gross amount with
    /// sub-cent digits yields `round(gross - deduction)` rather than the exact
    /// difference.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressiveError::InvalidInput`] for a negative gross amount,
    /// or a validation variant if the table is malformed.
    ///
    /// # Example: Above the Ceiling
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use calc_core::{BracketTable, ProgressiveCalculator};
    ///
    /// let calculator = ProgressiveCalculator::new(BracketTable::inss_2025());
    /// let result = calculator.compute_deduction(dec!(9000.00)).unwrap();
    ///
    /// assert!(result.ceiling_applied);
    /// assert_eq!(result.deduction, dec!(876.96));
    /// assert_eq!(result.net, dec!(8123.04));
    /// ```
    pub fn compute_deduction(
        &self,
        gross: Decimal,
    ) -> Result<CalculationResult, ProgressiveError> {
        self.check_domain(gross)?;

        if gross >= self.table.ceiling {
            debug!(%gross, ceiling = %self.table.ceiling, "gross at or above ceiling");
            let deduction = self.table.max_deduction;
            return Ok(CalculationResult {
                gross,
                deduction,
                net: round_half_up(gross - deduction),
                ceiling_applied: true,
                max_deduction_applied: false,
            });
        }

        let accrued: Decimal = self
            .contributions(gross)
            .iter()
            .map(|contribution| contribution.amount)
            .sum();
        let capped = self.clamp_to_maximum(accrued);
        let deduction = round_half_up(capped);

        Ok(CalculationResult {
            gross,
            deduction,
            net: round_half_up(gross - deduction),
            ceiling_applied: false,
            max_deduction_applied: capped != accrued,
        })
    }

    /// Returns the unrounded per-bracket contributions for `gross`, plus the
    /// adjustment the cap makes to their sum.
    ///
    /// The brackets are walked even when `gross` meets the ceiling, so the
    /// breakdown shows what the table alone would charge. In that case the
    /// adjustment is the bracket sum minus `max_deduction`.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use calc_core::{BracketTable, ProgressiveCalculator};
    ///
    /// let calculator = ProgressiveCalculator::new(BracketTable::inss_2025());
    /// let breakdown = calculator.breakdown(dec!(2000.00)).unwrap();
    ///
    /// assert_eq!(breakdown.contributions.len(), 2);
    /// assert_eq!(breakdown.contributions[1].taxable, dec!(482.00));
    /// assert_eq!(breakdown.contributions[1].amount, dec!(43.3800));
    /// assert_eq!(breakdown.cap_adjustment, dec!(0));
    /// ```
    pub fn breakdown(
        &self,
        gross: Decimal,
    ) -> Result<DeductionBreakdown, ProgressiveError> {
        self.check_domain(gross)?;

        let contributions = self.contributions(gross);
        let accrued: Decimal = contributions.iter().map(|c| c.amount).sum();
        let deduction = if gross >= self.table.ceiling {
            self.table.max_deduction
        } else {
            self.clamp_to_maximum(accrued)
        };

        Ok(DeductionBreakdown {
            contributions,
            cap_adjustment: accrued - deduction,
        })
    }

    fn check_domain(
        &self,
        gross: Decimal,
    ) -> Result<(), ProgressiveError> {
        self.table.validate()?;
        if gross < Decimal::ZERO {
            warn!(%gross, "rejected negative gross amount");
            return Err(ProgressiveError::InvalidInput(gross));
        }
        Ok(())
    }

    fn contributions(
        &self,
        gross: Decimal,
    ) -> Vec<BracketContribution> {
        let mut previous_bound = Decimal::ZERO;
        let mut contributions = Vec::with_capacity(self.table.brackets.len());

        for bracket in &self.table.brackets {
            let crosses = gross > bracket.upper_bound;
            let taxable = if crosses {
                bracket.upper_bound - previous_bound
            } else {
                gross - previous_bound
            };

            contributions.push(BracketContribution {
                lower_bound: previous_bound,
                upper_bound: bracket.upper_bound,
                rate: bracket.rate,
                taxable,
                amount: taxable * bracket.rate,
            });

            if !crosses {
                break;
            }
            previous_bound = bracket.upper_bound;
        }

        contributions
    }

    /// Keeps the bracket sum inside the cap when a table charges more below
    /// the ceiling than its stated maximum.
    fn clamp_to_maximum(
        &self,
        accrued: Decimal,
    ) -> Decimal {
        if accrued > self.table.max_deduction {
            debug!(
                %accrued,
                max_deduction = %self.table.max_deduction,
                "bracket sum exceeds maximum deduction, clamping"
            );
            self.table.max_deduction
        } else {
            accrued
        }
    }
}

impl Default for ProgressiveCalculator {
    fn default() -> Self {
        Self::new(BracketTable::default())
    }
}
