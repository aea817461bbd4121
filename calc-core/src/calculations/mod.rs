//! Pure calculations behind each calculator screen.
//!
//! Every function here is deterministic and side-effect free apart from
//! diagnostic logging; callers parse and validate raw text first.

pub mod common;
pub mod grade_average;
pub mod progressive;
pub mod unit_conversion;

pub use grade_average::{GradeAverage, GradeError, GradeStatus, average_grades};
pub use progressive::{ProgressiveCalculator, ProgressiveError};
pub use unit_conversion::{ConversionError, metres_to_centimetres};
