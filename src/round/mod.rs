//! Round sequencing.
//!
//! - `RoundEngine`: transition rules over a `RoundState`
//! - `QuizSession`: owns the engine and the single live round, and maps
//!   renderer events onto transitions

pub mod engine;
pub mod session;

pub use engine::RoundEngine;
pub use session::QuizSession;
