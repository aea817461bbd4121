//! Length conversion between metres and centimetres.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

pub const CENTIMETRES_PER_METRE: Decimal = dec!(100);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("length cannot be negative, got {0}")]
    NegativeLength(Decimal),

    #[error("length {0} is too large to convert")]
    Overflow(Decimal),
}

/// Converts a length in metres to centimetres.
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::calculations::metres_to_centimetres;
///
/// assert_eq!(metres_to_centimetres(dec!(1.75)).unwrap(), dec!(175));
/// ```
pub fn metres_to_centimetres(metres: Decimal) -> Result<Decimal, ConversionError> {
    if metres < Decimal::ZERO {
        return Err(ConversionError::NegativeLength(metres));
    }
    metres
        .checked_mul(CENTIMETRES_PER_METRE)
        .ok_or(ConversionError::Overflow(metres))
}
