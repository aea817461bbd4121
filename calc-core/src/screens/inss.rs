use rust_decimal::Decimal;
use tracing::debug;

use super::Alert;
use crate::calculations::ProgressiveCalculator;
use crate::input::parse_amount;
use crate::models::CalculationResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InssAction {
    /// The gross salary field changed.
    Input(String),
    Calculate,
    Clear,
}

/// State of the payroll deduction screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InssScreen {
    /// Raw text of the gross salary field.
    pub gross_input: String,

    /// Last successful calculation. Kept while the field is edited so the
    /// result panel does not flicker.
    pub result: Option<CalculationResult>,

    pub alert: Option<Alert>,
}

impl InssScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(
        &self,
        action: InssAction,
        calculator: &ProgressiveCalculator,
    ) -> Self {
        match action {
            InssAction::Input(text) => Self {
                gross_input: text,
                alert: None,
                ..self.clone()
            },
            InssAction::Calculate => self.calculate(calculator),
            InssAction::Clear => Self::default(),
        }
    }

    fn calculate(
        &self,
        calculator: &ProgressiveCalculator,
    ) -> Self {
        let Ok(gross) = parse_amount(&self.gross_input) else {
            return self.with_alert(Alert::error("Please enter a valid numeric value."));
        };
        if gross <= Decimal::ZERO {
            return self.with_alert(Alert::error("The gross salary must be greater than zero."));
        }

        match calculator.compute_deduction(gross) {
            Ok(result) => {
                debug!(%gross, deduction = %result.deduction, "payroll deduction calculated");
                Self {
                    gross_input: self.gross_input.clone(),
                    result: Some(result),
                    alert: None,
                }
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

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::BracketTable;

    fn calculator() -> ProgressiveCalculator {
        ProgressiveCalculator::new(BracketTable::inss_2025())
    }

    fn screen_with(text: &str) -> InssScreen {
        InssScreen::new().update(InssAction::Input(text.to_string()), &calculator())
    }

    #[test]
    fn calculate_stores_result() {
        let screen = screen_with("2000").update(InssAction::Calculate, &calculator());

        let result = screen.result.expect("result should be set");
        assert_eq!(result.deduction, dec!(157.23));
        assert_eq!(result.net, dec!(1842.77));
        assert_eq!(screen.alert, None);
    }

    #[test]
    fn calculate_accepts_brazilian_format() {
        let screen = screen_with("9.000,00").update(InssAction::Calculate, &calculator());

        let result = screen.result.unwrap();
        assert!(result.ceiling_applied);
        assert_eq!(result.net, dec!(8123.04));
    }

    #[test]
    fn non_numeric_input_raises_alert() {
        let screen = screen_with("abc").update(InssAction::Calculate, &calculator());

        assert_eq!(
            screen.alert,
            Some(Alert::error("Please enter a valid numeric value."))
        );
        assert_eq!(screen.result, None);
    }

    #[test]
    fn empty_input_raises_alert() {
        let screen = InssScreen::new().update(InssAction::Calculate, &calculator());

        assert!(screen.alert.unwrap().is_error());
    }

    #[test]
    fn zero_and_negative_input_raise_alert() {
        for text in ["0", "-100"] {
            let screen = screen_with(text).update(InssAction::Calculate, &calculator());

            assert_eq!(
                screen.alert,
                Some(Alert::error("The gross salary must be greater than zero."))
            );
        }
    }

    #[test]
    fn failed_calculation_keeps_previous_result() {
        let calculated = screen_with("1000").update(InssAction::Calculate, &calculator());
        let failed = calculated
            .update(InssAction::Input("x".to_string()), &calculator())
            .update(InssAction::Calculate, &calculator());

        assert_eq!(failed.result, calculated.result);
        assert!(failed.alert.is_some());
    }

    #[test]
    fn editing_input_dismisses_alert() {
        let alerted = screen_with("abc").update(InssAction::Calculate, &calculator());
        let edited = alerted.update(InssAction::Input("1000".to_string()), &calculator());

        assert_eq!(edited.alert, None);
        assert_eq!(edited.gross_input, "1000");
    }

    #[test]
    fn clear_resets_everything() {
        let screen = screen_with("1000")
            .update(InssAction::Calculate, &calculator())
            .update(InssAction::Clear, &calculator());

        assert_eq!(screen, InssScreen::default());
    }

    #[test]
    fn update_does_not_mutate_previous_state() {
        let before = screen_with("1000");
        let _after = before.update(InssAction::Calculate, &calculator());

        assert_eq!(before.result, None);
    }
}
