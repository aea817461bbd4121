#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
    Reset,
}

/// A counter that never goes below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterScreen {
    pub value: u64,
}

impl CounterScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// The decrement button is disabled at zero.
    pub fn can_decrement(&self) -> bool {
        self.value > 0
    }

    pub fn update(
        &self,
        action: CounterAction,
    ) -> Self {
        let value = match action {
            CounterAction::Increment => self.value.saturating_add(1),
            CounterAction::Decrement => self.value.saturating_sub(1),
            CounterAction::Reset => 0,
        };
        Self { value }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn increments_and_decrements() {
        let screen = CounterScreen::new()
            .update(CounterAction::Increment)
            .update(CounterAction::Increment)
            .update(CounterAction::Decrement);

        assert_eq!(screen.value, 1);
    }

    #[test]
    fn decrement_at_zero_stays_zero() {
        let screen = CounterScreen::new().update(CounterAction::Decrement);

        assert_eq!(screen.value, 0);
        assert!(!screen.can_decrement());
    }

    #[test]
    fn reset_returns_to_zero() {
        let screen = CounterScreen { value: 42 }.update(CounterAction::Reset);

        assert_eq!(screen, CounterScreen::default());
    }

    #[test]
    fn increment_saturates() {
        let screen = CounterScreen { value: u64::MAX }.update(CounterAction::Increment);

        assert_eq!(screen.value, u64::MAX);
    }
}
