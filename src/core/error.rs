//! Contract violations.
//!
//! Every error the crate reports is a caller bug: a pool that cannot
//! fill a question, an index outside the visible options, or an
//! operation issued in the wrong phase. A wrong answer is an `Outcome`,
//! never an error.

use thiserror::Error;

use super::option::OptionId;
use super::state::Phase;

/// Round operations that are only valid in one phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    SubmitChoice,
    Advance,
    Reset,
}

impl Operation {
    /// Phase in which this operation may be issued.
    #[must_use]
    pub const fn required_phase(self) -> Phase {
        match self {
            Operation::SubmitChoice => Phase::Asking,
            Operation::Advance => Phase::AwaitingAdvance,
            Operation::Reset => Phase::RoundOver,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::SubmitChoice => write!(f, "submit_choice"),
            Operation::Advance => write!(f, "advance"),
            Operation::Reset => write!(f, "reset"),
        }
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ContractViolation {
    #[error("option pool has {len} entries, at least {required} are required")]
    PoolTooSmall { len: usize, required: usize },
    #[error("option pool contains {0} more than once")]
    DuplicateOption(OptionId),
    #[error("a round needs at least one question")]
    NoQuestions,
    #[error("choice {index} is outside the {len} visible options")]
    ChoiceOutOfRange { index: usize, len: usize },
    #[error("{operation} is not allowed while the round is {phase}")]
    InvalidTransition { operation: Operation, phase: Phase },
}
