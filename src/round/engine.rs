//! Round transitions.
//!
//! `RoundEngine` holds the randomness source and applies the four round
//! operations to a `RoundState`. A rejected operation returns a
//! `ContractViolation` and leaves the state untouched.

use log::debug;

use crate::core::config::validate_round;
use crate::core::error::{ContractViolation, Operation};
use crate::core::option::{OptionId, VISIBLE_OPTIONS};
use crate::core::rng::{GameRng, RandomSource};
use crate::core::state::{Outcome, Phase, RoundState, VisibleOptions};

/// Applies round transitions using an injected randomness source.
#[derive(Clone, Debug)]
pub struct RoundEngine<R: RandomSource = GameRng> {
    rng: R,
}

impl<R: RandomSource> RoundEngine<R> {
    /// Create an engine drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Access the randomness source.
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Start a fresh round over `pool`.
    ///
    /// The pool is shuffled, its first three entries become the visible
    /// options, and the correct index is drawn from `[0, 3)`.
    pub fn start_round(&mut self, pool: &[OptionId], total_questions: u32) -> Result<RoundState, ContractViolation> {
        validate_round(pool, total_questions)?;

        let mut state = RoundState {
            pool: pool.to_vec(),
            options: VisibleOptions::new(),
            correct_index: 0,
            score: 0,
            question_number: 1,
            total_questions,
            last_outcome: None,
            phase: Phase::Asking,
        };
        self.deal(&mut state);

        debug!(
            "round started: {} questions over {} options",
            total_questions,
            state.pool.len()
        );
        Ok(state)
    }

    /// Judge the player's pick for the current question.
    ///
    /// Does not move to the next question; call `advance` once the
    /// outcome has been acknowledged.
    pub fn submit_choice(&mut self, state: &mut RoundState, index: usize) -> Result<Outcome, ContractViolation> {
        require_phase(state, Operation::SubmitChoice)?;
        if index >= state.options.len() {
            return Err(ContractViolation::ChoiceOutOfRange {
                index,
                len: state.options.len(),
            });
        }

        let outcome = if index == state.correct_index {
            state.score += 1;
            Outcome::Correct
        } else {
            Outcome::Wrong {
                correct: state.correct_option().clone(),
            }
        };

        debug!(
            "question {}/{}: picked {} ({:?}), score {}",
            state.question_number, state.total_questions, index, outcome, state.score
        );

        state.last_outcome = Some(outcome.clone());
        state.phase = Phase::AwaitingAdvance;
        Ok(outcome)
    }

    /// Move past an acknowledged outcome.
    ///
    /// Returns `Phase::Asking` with a new question dealt, or
    /// `Phase::RoundOver` if the final question was just answered. Score
    /// and question number are frozen once the round is over.
    pub fn advance(&mut self, state: &mut RoundState) -> Result<Phase, ContractViolation> {
        require_phase(state, Operation::Advance)?;
        state.last_outcome = None;

        if state.question_number >= state.total_questions {
            state.phase = Phase::RoundOver;
            debug!("round over: score {}/{}", state.score, state.total_questions);
        } else {
            self.deal(state);
            state.question_number += 1;
            state.phase = Phase::Asking;
            debug!("question {}/{}", state.question_number, state.total_questions);
        }

        Ok(state.phase)
    }

    /// Restart a finished round in place with the same pool and length.
    pub fn reset(&mut self, state: &mut RoundState) -> Result<(), ContractViolation> {
        require_phase(state, Operation::Reset)?;

        state.score = 0;
        state.question_number = 1;
        state.last_outcome = None;
        state.phase = Phase::Asking;
        self.deal(state);

        debug!("round reset");
        Ok(())
    }

    /// Shuffle the pool, then draw the correct index independently.
    fn deal(&mut self, state: &mut RoundState) {
        self.rng.shuffle(&mut state.pool);
        state.refresh_options();
        state.correct_index = self.rng.gen_range_usize(0..VISIBLE_OPTIONS);
    }
}

fn require_phase(state: &RoundState, operation: Operation) -> Result<(), ContractViolation> {
    if state.phase == operation.required_phase() {
        Ok(())
    } else {
        Err(ContractViolation::InvalidTransition {
            operation,
            phase: state.phase,
        })
    }
}
