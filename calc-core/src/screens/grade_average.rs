use super::Alert;
use crate::calculations::{GradeAverage, GradeError, average_grades};
use crate::input::parse_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeField {
    First,
    Second,
    Third,
}

impl GradeField {
    fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradeAverageAction {
    Input(GradeField, String),
    Calculate,
    Clear,
}

/// State of the three-grade average screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeAverageScreen {
    /// Raw text of the three grade fields, in order.
    pub inputs: [String; 3],
    pub outcome: Option<GradeAverage>,
    pub alert: Option<Alert>,
}

impl GradeAverageScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(
        &self,
        action: GradeAverageAction,
    ) -> Self {
        match action {
            GradeAverageAction::Input(field, text) => {
                let mut next = self.clone();
                next.inputs[field.index()] = text;
                next.alert = None;
                next
            }
            GradeAverageAction::Calculate => self.calculate(),
            GradeAverageAction::Clear => Self::default(),
        }
    }

    fn calculate(&self) -> Self {
        let parsed: Result<Vec<_>, _> = self.inputs.iter().map(|s| parse_amount(s)).collect();
        let Ok(grades) = parsed else {
            return self.with_alert(Alert::error("Please fill in every grade with a valid value."));
        };

        match average_grades(&grades) {
            Ok(outcome) => Self {
                inputs: self.inputs.clone(),
                outcome: Some(outcome),
                alert: None,
            },
            Err(GradeError::OutOfRange { .. }) => {
                self.with_alert(Alert::error("Grades must be between 0 and 10."))
            }
            Err(error) => self.with_alert(Alert::error(error.to_string())),
        }
    }

    fn with_alert(
        &self,
        alert: Alert,
    ) -> Self {
        Self {
            alert: Some(alert),
            ..self.clone()
        }
    }
}
