use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::ProgressiveError;

/// A contiguous income range taxed at a single marginal rate.
///
/// The range starts at the previous bracket's `upper_bound` (or zero for the
/// first bracket) and ends at this bracket's `upper_bound`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    pub upper_bound: Decimal,
    pub rate: Decimal,
}

impl Bracket {
    pub fn new(
        upper_bound: Decimal,
        rate: Decimal,
    ) -> Self {
        Self { upper_bound, rate }
    }
}

/// An ordered bracket table plus the cap that short-circuits it.
///
/// Any gross amount at or above `ceiling` is charged `max_deduction` flat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketTable {
    pub brackets: Vec<Bracket>,
    pub ceiling: Decimal,
    pub max_deduction: Decimal,
}

impl BracketTable {
    /// The INSS employee contribution table in force from January 2025.
    ///
    /// | Up to      | Rate  |
    /// |------------|-------|
    /// | 1.518,00   | 7,5%  |
    /// | 2.793,88   | 9%    |
    /// | 4.190,83   | 12%   |
    /// | 8.157,41   | 14%   |
    ///
    /// Ceiling 8.154,41 with a maximum deduction of 876,96.
    pub fn inss_2025() -> Self {
        Self {
            brackets: vec![
                Bracket::new(dec!(1518.00), dec!(0.075)),
                Bracket::new(dec!(2793.88), dec!(0.09)),
                Bracket::new(dec!(4190.83), dec!(0.12)),
                Bracket::new(dec!(8157.41), dec!(0.14)),
            ],
            ceiling: dec!(8154.41),
            max_deduction: dec!(876.96),
        }
    }

    /// Validates the table.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressiveError`] if:
    /// - there are no brackets
    /// - the first upper bound is not positive
    /// - upper bounds are not strictly ascending
    /// - a rate is outside [0, 1]
    /// - `ceiling` or `max_deduction` is negative
    /// - `ceiling` lies above the last bracket's upper bound
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use calc_core::{Bracket, BracketTable, ProgressiveError};
    ///
    /// let table = BracketTable {
    ///     brackets: vec![
    ///         Bracket::new(dec!(2000), dec!(0.10)),
    ///         Bracket::new(dec!(1000), dec!(0.20)),
    ///     ],
    ///     ceiling: dec!(1000),
    ///     max_deduction: dec!(100),
    /// };
    ///
    /// assert_eq!(
    ///     table.validate(),
    ///     Err(ProgressiveError::NonAscendingBound { index: 1, bound: dec!(1000) })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ProgressiveError> {
        let Some(last) = self.brackets.last() else {
            return Err(ProgressiveError::EmptyTable);
        };

        let mut previous = Decimal::ZERO;
        for (index, bracket) in self.brackets.iter().enumerate() {
            if bracket.upper_bound <= previous {
                return Err(if index == 0 {
                    ProgressiveError::NonPositiveBound(bracket.upper_bound)
                } else {
                    ProgressiveError::NonAscendingBound {
                        index,
                        bound: bracket.upper_bound,
                    }
                });
            }
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(ProgressiveError::InvalidRate {
                    index,
                    rate: bracket.rate,
                });
            }
            previous = bracket.upper_bound;
        }

        if self.ceiling < Decimal::ZERO {
            return Err(ProgressiveError::NegativeCeiling(self.ceiling));
        }
        if self.max_deduction < Decimal::ZERO {
            return Err(ProgressiveError::NegativeMaxDeduction(self.max_deduction));
        }
        if self.ceiling > last.upper_bound {
            return Err(ProgressiveError::CeilingAboveLastBracket {
                ceiling: self.ceiling,
                last_bound: last.upper_bound,
            });
        }
        Ok(())
    }
}

impl Default for BracketTable {
    fn default() -> Self {
        Self::inss_2025()
    }
}
