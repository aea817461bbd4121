use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of a progressive deduction calculation.
///
/// `deduction` and `net` are rounded to cents; `net == gross - deduction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub gross: Decimal,
    pub deduction: Decimal,
    pub net: Decimal,

    /// Set when the gross amount met the ceiling and the flat maximum
    /// deduction was used instead of the brackets.
    pub ceiling_applied: bool,

    /// Set when the gross amount was below the ceiling but the bracket sum
    /// went over the maximum deduction and was capped to it.
    pub max_deduction_applied: bool,
}

/// The unrounded share of a deduction owed to a single bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketContribution {
    pub lower_bound: Decimal,
    pub upper_bound: Decimal,
    pub rate: Decimal,
    /// Portion of the gross amount falling inside this bracket.
    pub taxable: Decimal,
    pub amount: Decimal,
}

/// Per-bracket contributions together with the amount taken off their sum
/// to reach the unrounded deduction.
///
/// `cap_adjustment` is zero unless the maximum deduction replaced the bracket
/// sum, so `total()` always matches the deduction before rounding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    pub contributions: Vec<BracketContribution>,
    pub cap_adjustment: Decimal,
}

impl DeductionBreakdown {
    /// Sum of the bracket amounts, before the cap adjustment.
    pub fn bracket_sum(&self) -> Decimal {
        self.contributions.iter().map(|c| c.amount).sum()
    }

    /// The unrounded deduction.
    pub fn total(&self) -> Decimal {
        self.bracket_sum() - self.cap_adjustment
    }
}
