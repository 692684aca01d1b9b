//! Quiz configuration.
//!
//! The pool and round length are fixed inputs read once at startup.
//! `seed` pins the randomness for replays and tests; without it the
//! session seeds from the operating system.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ContractViolation;
use super::option::{OptionId, DEFAULT_TOTAL_QUESTIONS, VISIBLE_OPTIONS};
use super::rng::GameRng;

/// Configuration for a quiz session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Candidate options, at least `VISIBLE_OPTIONS` distinct entries.
    pub pool: Vec<OptionId>,

    /// Questions per round.
    pub total_questions: u32,

    /// RNG seed. `None` draws one from the operating system.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            pool: OptionId::default_pool(),
            total_questions: DEFAULT_TOTAL_QUESTIONS,
            seed: None,
        }
    }
}

impl QuizConfig {
    /// Replace the option pool.
    #[must_use]
    pub fn with_pool<I, T>(mut self, pool: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OptionId>,
    {
        self.pool = pool.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_total_questions(mut self, total: u32) -> Self {
        self.total_questions = total;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the pool and round length.
    pub fn validate(&self) -> Result<(), ContractViolation> {
        validate_round(&self.pool, self.total_questions)
    }

    /// Build the RNG this configuration asks for.
    #[must_use]
    pub fn build_rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

/// Check that `pool` can fill every question and `total_questions` is usable.
pub fn validate_round(pool: &[OptionId], total_questions: u32) -> Result<(), ContractViolation> {
    if pool.len() < VISIBLE_OPTIONS {
        return Err(ContractViolation::PoolTooSmall {
            len: pool.len(),
            required: VISIBLE_OPTIONS,
        });
    }

    let mut seen = FxHashSet::default();
    for id in pool {
        if !seen.insert(id) {
            return Err(ContractViolation::DuplicateOption(id.clone()));
        }
    }

    if total_questions == 0 {
        return Err(ContractViolation::NoQuestions);
    }

    Ok(())
}
