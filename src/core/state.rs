//! Round state: the single mutable entity of a quiz round.
//!
//! ## Phases
//!
//! ```text
//! Asking(q) --submit_choice--> AwaitingAdvance
//! AwaitingAdvance --advance, q < total--> Asking(q + 1)
//! AwaitingAdvance --advance, q == total--> RoundOver
//! RoundOver --reset--> Asking(1)
//! ```
//!
//! Only `RoundEngine` mutates a `RoundState`. Everyone else reads it
//! through the accessors below.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::option::{OptionId, VISIBLE_OPTIONS};

/// Where a round is in its question cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the player to pick an option.
    Asking,
    /// Answer judged; waiting for the feedback to be acknowledged.
    AwaitingAdvance,
    /// Final question answered and acknowledged. Terminal until reset.
    RoundOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Asking => write!(f, "asking"),
            Phase::AwaitingAdvance => write!(f, "awaiting advance"),
            Phase::RoundOver => write!(f, "over"),
        }
    }
}

/// Judged result of a single submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Correct,
    /// Wrong pick; carries the option that was correct.
    Wrong { correct: OptionId },
}

impl Outcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Outcome::Correct)
    }
}

/// Visible options for one question.
pub type VisibleOptions = SmallVec<[OptionId; VISIBLE_OPTIONS]>;

/// State of the live round.
#[derive(Clone, Debug, Serialize)]
pub struct RoundState {
    /// Full pool in its current shuffled order.
    pub(crate) pool: Vec<OptionId>,

    /// First `VISIBLE_OPTIONS` entries of `pool`.
    pub(crate) options: VisibleOptions,

    pub(crate) correct_index: usize,

    pub(crate) score: u32,

    /// 1-based; never exceeds `total_questions`.
    pub(crate) question_number: u32,

    pub(crate) total_questions: u32,

    pub(crate) last_outcome: Option<Outcome>,

    pub(crate) phase: Phase,
}

impl RoundState {
    /// Options shown for the current question, in display order.
    #[must_use]
    pub fn options(&self) -> &[OptionId] {
        &self.options
    }

    /// Index into `options()` of the correct answer.
    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// The option the player is asked to find.
    #[must_use]
    pub fn correct_option(&self) -> &OptionId {
        &self.options[self.correct_index]
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn question_number(&self) -> u32 {
        self.question_number
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    /// Outcome of the most recent submission, until the next advance.
    #[must_use]
    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last_outcome.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.phase == Phase::RoundOver
    }

    /// Full option pool in its current order.
    #[must_use]
    pub fn pool(&self) -> &[OptionId] {
        &self.pool
    }

    /// Refill the visible options from the front of the pool.
    pub(crate) fn refresh_options(&mut self) {
        self.options = self.pool.iter().take(VISIBLE_OPTIONS).cloned().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_pool(names: &[&str]) -> RoundState {
        let mut state = RoundState {
            pool: names.iter().map(|&n| OptionId::new(n)).collect(),
            options: VisibleOptions::new(),
            correct_index: 1,
            score: 0,
            question_number: 1,
            total_questions: 8,
            last_outcome: None,
            phase: Phase::Asking,
        };
        state.refresh_options();
        state
    }

    #[test]
    fn test_refresh_takes_front_of_pool() {
        let state = state_with_pool(&["A", "B", "C", "D", "E"]);
        let names: Vec<_> = state.options().iter().map(OptionId::as_str).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(state.pool().len(), 5);
    }

    #[test]
    fn test_correct_option() {
        let state = state_with_pool(&["A", "B", "C"]);
        assert_eq!(state.correct_option().as_str(), "B");
    }

    #[test]
    fn test_outcome_is_correct() {
        assert!(Outcome::Correct.is_correct());
        assert!(!Outcome::Wrong { correct: OptionId::new("A") }.is_correct());
    }

    #[test]
    fn test_round_over_follows_phase() {
        let mut state = state_with_pool(&["A", "B", "C"]);
        assert!(!state.is_round_over());
        state.phase = Phase::RoundOver;
        assert!(state.is_round_over());
    }
}
