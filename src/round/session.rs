//! The live quiz: one engine, one round state.
//!
//! `QuizSession` is what a renderer talks to. It forwards taps and
//! dismissals to the engine and decides which modal comes next.

use log::{debug, info, warn};

use crate::core::config::QuizConfig;
use crate::core::error::{ContractViolation, Operation};
use crate::core::rng::{GameRng, RandomSource};
use crate::core::state::{Outcome, Phase, RoundState};
use crate::render::{Modal, Prompt, Renderer, UiEvent};

use super::engine::RoundEngine;

/// A quiz session holding exactly one live round.
#[derive(Clone, Debug)]
pub struct QuizSession<R: RandomSource = GameRng> {
    config: QuizConfig,
    engine: RoundEngine<R>,
    state: RoundState,
    rounds_completed: u32,
}

impl QuizSession<GameRng> {
    /// Start a session using the RNG described by `config`.
    pub fn new(config: QuizConfig) -> Result<Self, ContractViolation> {
        config.validate()?;
        let rng = config.build_rng();
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> QuizSession<R> {
    /// Start a session drawing from `rng`. `config.seed` is ignored.
    pub fn with_rng(config: QuizConfig, rng: R) -> Result<Self, ContractViolation> {
        let mut engine = RoundEngine::new(rng);
        let state = engine.start_round(&config.pool, config.total_questions)?;
        Ok(Self {
            config,
            engine,
            state,
            rounds_completed: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    #[must_use]
    pub fn engine(&self) -> &RoundEngine<R> {
        &self.engine
    }

    /// Read-only view of the live round.
    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Rounds played through to the end.
    #[must_use]
    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    /// Question screen for the current state.
    #[must_use]
    pub fn prompt(&self) -> Prompt {
        Prompt::from_state(&self.state)
    }

    pub fn submit_choice(&mut self, index: usize) -> Result<Outcome, ContractViolation> {
        let result = self.engine.submit_choice(&mut self.state, index);
        reject(Operation::SubmitChoice, result)
    }

    pub fn advance(&mut self) -> Result<Phase, ContractViolation> {
        let phase = reject(Operation::Advance, self.engine.advance(&mut self.state))?;
        if phase == Phase::RoundOver {
            self.rounds_completed += 1;
            info!(
                "round {} finished with {}/{}",
                self.rounds_completed,
                self.state.score(),
                self.state.total_questions()
            );
        }
        Ok(phase)
    }

    pub fn reset(&mut self) -> Result<(), ContractViolation> {
        let result = self.engine.reset(&mut self.state);
        reject(Operation::Reset, result)
    }

    /// Apply a UI event and return the modal to show next, if any.
    ///
    /// - `Tap` judges the pick and yields feedback
    /// - `DismissFeedback` advances; yields the summary when the round ends
    /// - `DismissSummary` starts a new round
    pub fn dispatch(&mut self, event: UiEvent) -> Result<Option<Modal>, ContractViolation> {
        debug!("{:?} -> {}", event, event.operation());
        match event {
            UiEvent::Tap(index) => {
                let outcome = self.submit_choice(index)?;
                Ok(Some(Modal::feedback(&outcome, self.state.score())))
            }
            UiEvent::DismissFeedback => match self.advance()? {
                Phase::RoundOver => Ok(Some(Modal::final_summary(&self.state))),
                _ => Ok(None),
            },
            UiEvent::DismissSummary => {
                self.reset()?;
                Ok(None)
            }
        }
    }

    /// Show the current question.
    pub fn present(&self, renderer: &mut impl Renderer) {
        renderer.show_prompt(&self.prompt());
    }

    /// Dispatch `event`, then show either the resulting modal or the
    /// current question.
    pub fn drive(&mut self, event: UiEvent, renderer: &mut impl Renderer) -> Result<(), ContractViolation> {
        match self.dispatch(event)? {
            Some(modal) => renderer.show_modal(&modal),
            None => self.present(renderer),
        }
        Ok(())
    }
}

fn reject<T>(operation: Operation, result: Result<T, ContractViolation>) -> Result<T, ContractViolation> {
    result.map_err(|err| {
        warn!("rejected {operation}: {err}");
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedRng;

    fn session(total: u32) -> QuizSession<ScriptedRng> {
        let config = QuizConfig::default()
            .with_pool(["France", "Spain", "Italy", "UK"])
            .with_total_questions(total);
        QuizSession::with_rng(config, ScriptedRng::new()).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = QuizConfig::default().with_pool(["France"]);
        assert!(matches!(
            QuizSession::new(config),
            Err(ContractViolation::PoolTooSmall { len: 1, .. })
        ));
    }

    #[test]
    fn test_tap_yields_feedback() {
        let mut session = session(8);
        let modal = session.dispatch(UiEvent::Tap(0)).unwrap();
        assert_eq!(
            modal,
            Some(Modal::Feedback {
                title: "Correct".to_string(),
                message: "Your score is 1".to_string(),
            })
        );
    }

    #[test]
    fn test_dismiss_feedback_moves_on() {
        let mut session = session(8);
        session.dispatch(UiEvent::Tap(1)).unwrap();
        assert_eq!(session.dispatch(UiEvent::DismissFeedback).unwrap(), None);
        assert_eq!(session.state().question_number(), 2);
        assert_eq!(session.state().score(), 0);
    }

    #[test]
    fn test_summary_and_restart() {
        let mut session = session(1);
        session.dispatch(UiEvent::Tap(0)).unwrap();

        let summary = session.dispatch(UiEvent::DismissFeedback).unwrap().unwrap();
        assert_eq!(summary.title(), "Game Over");
        assert_eq!(summary.message(), "You answered all 1 questions. Your final score is 1.");
        assert_eq!(summary.button(), "Restart?");
        assert_eq!(session.rounds_completed(), 1);

        assert_eq!(session.dispatch(UiEvent::DismissSummary).unwrap(), None);
        assert_eq!(session.state().phase(), Phase::Asking);
        assert_eq!(session.state().score(), 0);
    }

    #[test]
    fn test_out_of_order_event_rejected() {
        let mut session = session(8);
        assert!(session.dispatch(UiEvent::DismissSummary).is_err());
        assert!(session.dispatch(UiEvent::DismissFeedback).is_err());
        assert_eq!(session.state().phase(), Phase::Asking);
    }
}
