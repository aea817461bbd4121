//! Screen state for each calculator.
//!
//! Every screen is an immutable value. User interactions are expressed as an
//! action enum and applied with `update`, which returns the next state and
//! leaves the current one untouched. Rendering is left to the caller.

mod counter;
mod grade_average;
mod inss;
mod login;
mod unit_converter;

pub use counter::{CounterAction, CounterScreen};
pub use grade_average::{GradeAverageAction, GradeAverageScreen, GradeField};
pub use inss::{InssAction, InssScreen};
pub use login::{LoginAction, LoginScreen};
pub use unit_converter::{UnitConverterAction, UnitConverterScreen};

/// A message popped up to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
}

impl AlertKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Success => "Success",
        }
    }
}

impl Alert {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == AlertKind::Error
    }
}

impl std::fmt::Display for Alert {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.title(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn alert_kind_titles() {
        assert_eq!(AlertKind::Error.title(), "Error");
        assert_eq!(AlertKind::Success.title(), "Success");
    }

    #[test]
    fn alert_displays_title_then_message() {
        let error = Alert::error("The value cannot be negative.");
        let success = Alert::success("Welcome, maria!");

        assert!(error.is_error());
        assert!(!success.is_error());
        assert_eq!(error.to_string(), "Error: The value cannot be negative.");
        assert_eq!(success.to_string(), "Success: Welcome, maria!");
    }
}
