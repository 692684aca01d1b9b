//! Core types: option identifiers, randomness, configuration, errors, round state.

pub mod option;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use option::{OptionId, DEFAULT_POOL, DEFAULT_TOTAL_QUESTIONS, VISIBLE_OPTIONS};
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use config::{validate_round, QuizConfig};
pub use error::{ContractViolation, Operation};
pub use state::{Outcome, Phase, RoundState, VisibleOptions};
