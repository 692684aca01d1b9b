//! Modal dialogs shown after a judgement and at the end of a round.

use serde::Serialize;

use crate::core::state::{Outcome, RoundState};

/// A blocking dialog with a single dismiss button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Modal {
    /// Result of the last tap. Dismissing it advances the round.
    Feedback { title: String, message: String },
    /// Final score. Dismissing it starts a new round.
    FinalSummary { title: String, message: String },
}

impl Modal {
    /// Feedback for `outcome` given the score after judging.
    #[must_use]
    pub fn feedback(outcome: &Outcome, score: u32) -> Self {
        let title = match outcome {
            Outcome::Correct => "Correct".to_string(),
            Outcome::Wrong { correct } => format!("Wrong! The correct answer is {correct}"),
        };
        Modal::Feedback {
            title,
            message: format!("Your score is {score}"),
        }
    }

    /// Summary for a finished round.
    #[must_use]
    pub fn final_summary(state: &RoundState) -> Self {
        Modal::FinalSummary {
            title: "Game Over".to_string(),
            message: format!(
                "You answered all {} questions. Your final score is {}.",
                state.total_questions(),
                state.score()
            ),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Modal::Feedback { title, .. } | Modal::FinalSummary { title, .. } => title,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Modal::Feedback { message, .. } | Modal::FinalSummary { message, .. } => message,
        }
    }

    /// Label of the dismiss button.
    #[must_use]
    pub fn button(&self) -> &'static str {
        match self {
            Modal::Feedback { .. } => "Continue",
            Modal::FinalSummary { .. } => "Restart?",
        }
    }
}
