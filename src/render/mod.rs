//! Renderer boundary.
//!
//! The engine knows nothing about drawing. A renderer receives:
//! - a `Prompt` describing the current question
//! - a `Modal` after each judgement and at the end of a round
//!
//! and reports taps and dismissals back as `UiEvent`s.

pub mod event;
pub mod modal;
pub mod prompt;

pub use event::UiEvent;
pub use modal::Modal;
pub use prompt::Prompt;

/// Display side of the quiz.
pub trait Renderer {
    /// Show the current question.
    fn show_prompt(&mut self, prompt: &Prompt);

    /// Show a blocking modal. The next event must dismiss it.
    fn show_modal(&mut self, modal: &Modal);
}
