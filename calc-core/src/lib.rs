pub mod calculations;
pub mod input;
pub mod models;
pub mod screens;

pub use calculations::{ProgressiveCalculator, ProgressiveError};
pub use input::{ParseAmountError, parse_amount};
pub use models::*;
