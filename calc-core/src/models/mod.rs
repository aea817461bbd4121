mod bracket_table;
mod calculation_result;

pub use bracket_table::{Bracket, BracketTable};
pub use calculation_result::{BracketContribution, CalculationResult, DeductionBreakdown};
