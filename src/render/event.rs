//! Discrete UI events forwarded by the renderer.

use serde::{Deserialize, Serialize};

use crate::core::error::Operation;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiEvent {
    /// Player tapped the option at this display index.
    Tap(usize),
    /// Player dismissed the answer feedback.
    DismissFeedback,
    /// Player dismissed the end-of-round summary.
    DismissSummary,
}

impl UiEvent {
    /// Round operation this event triggers.
    #[must_use]
    pub const fn operation(self) -> Operation {
        match self {
            UiEvent::Tap(_) => Operation::SubmitChoice,
            UiEvent::DismissFeedback => Operation::Advance,
            UiEvent::DismissSummary => Operation::Reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_operations() {
        assert_eq!(UiEvent::Tap(2).operation(), Operation::SubmitChoice);
        assert_eq!(UiEvent::DismissFeedback.operation(), Operation::Advance);
        assert_eq!(UiEvent::DismissSummary.operation(), Operation::Reset);
    }
}
