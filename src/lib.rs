//! # flag-quiz
//!
//! Round engine for a "guess the flag" quiz: three options are shown,
//! the player taps the one matching a named country, and score and
//! question count are tracked across a fixed-length round.
//!
//! ## Design Principles
//!
//! 1. **Rendering-Agnostic**: The engine holds no UI state. A `Renderer`
//!    displays a `Prompt` or a `Modal` and reports `UiEvent`s back.
//!
//! 2. **Injected Randomness**: Every shuffle and pick goes through a
//!    `RandomSource`, so rounds are reproducible from a seed and tests
//!    can script exact draws.
//!
//! 3. **Judge, Then Advance**: Answering and moving on are separate
//!    transitions. The feedback modal sits between them.
//!
//! ## Modules
//!
//! - `core`: Option identifiers, RNG, configuration, errors, round state
//! - `round`: `RoundEngine` transitions and the `QuizSession` shell
//! - `render`: Renderer trait, UI events, prompt and modal text
//!
//! ## Example
//!
//! ```
//! use flag_quiz::{Modal, QuizConfig, QuizSession, UiEvent};
//!
//! let mut session = QuizSession::new(QuizConfig::default().with_seed(42)).unwrap();
//! let correct = session.state().correct_index();
//!
//! let modal = session.dispatch(UiEvent::Tap(correct)).unwrap();
//! assert!(matches!(modal, Some(Modal::Feedback { .. })));
//! assert_eq!(session.state().score(), 1);
//! ```

pub mod core;
pub mod round;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    OptionId, GameRng, RandomSource, ScriptedRng, QuizConfig,
    ContractViolation, Operation, Outcome, Phase, RoundState,
};

pub use crate::round::{RoundEngine, QuizSession};

pub use crate::render::{Modal, Prompt, Renderer, UiEvent};
