use rust_decimal::Decimal;

use super::Alert;
use crate::calculations::{ConversionError, metres_to_centimetres};
use crate::input::parse_amount;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitConverterAction {
    Input(String),
    Convert,
    Clear,
}

/// State of the metres-to-centimetres screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitConverterScreen {
    pub metres_input: String,
    pub centimetres: Option<Decimal>,
    pub alert: Option<Alert>,
}

impl UnitConverterScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(
        &self,
        action: UnitConverterAction,
    ) -> Self {
        match action {
            UnitConverterAction::Input(text) => Self {
                metres_input: text,
                alert: None,
                ..self.clone()
            },
            UnitConverterAction::Convert => self.convert(),
            UnitConverterAction::Clear => Self::default(),
        }
    }

    fn convert(&self) -> Self {
        let Ok(metres) = parse_amount(&self.metres_input) else {
            return self.with_alert(Alert::error("Please enter a valid numeric value."));
        };

        match metres_to_centimetres(metres) {
            Ok(centimetres) => Self {
                metres_input: self.metres_input.clone(),
                centimetres: Some(centimetres),
                alert: None,
            },
            Err(ConversionError::NegativeLength(_)) => {
                self.with_alert(Alert::error("The value cannot be negative."))
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

    fn with_input(text: &str) -> UnitConverterScreen {
        UnitConverterScreen::new().update(UnitConverterAction::Input(text.to_string()))
    }

    #[test]
    fn converts_metres() {
        let screen = with_input("2,5").update(UnitConverterAction::Convert);

        assert_eq!(screen.centimetres, Some(dec!(250)));
        assert_eq!(screen.alert, None);
    }

    #[test]
    fn zero_is_allowed() {
        let screen = with_input("0").update(UnitConverterAction::Convert);

        assert_eq!(screen.centimetres, Some(Decimal::ZERO));
    }

    #[test]
    fn negative_raises_alert() {
        let screen = with_input("-1").update(UnitConverterAction::Convert);

        assert_eq!(
            screen.alert,
            Some(Alert::error("The value cannot be negative."))
        );
        assert_eq!(screen.centimetres, None);
    }

    #[test]
    fn non_numeric_raises_alert() {
        let screen = with_input("ten").update(UnitConverterAction::Convert);

        assert!(screen.alert.unwrap().is_error());
    }

    #[test]
    fn clear_resets() {
        let screen = with_input("3")
            .update(UnitConverterAction::Convert)
            .update(UnitConverterAction::Clear);

        assert_eq!(screen, UnitConverterScreen::default());
    }
}
