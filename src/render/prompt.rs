//! Question screen text.

use serde::Serialize;

use crate::core::option::OptionId;
use crate::core::state::RoundState;

pub const HEADING: &str = "Guess the Flag";
pub const INSTRUCTION: &str = "Tap the flag of";

/// Everything the question screen displays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Prompt {
    pub heading: &'static str,
    /// "Score: N"
    pub score_line: String,
    pub instruction: &'static str,
    /// Name of the option to find.
    pub target: OptionId,
    /// Options in display order, used for image lookup.
    pub options: Vec<OptionId>,
    pub question_number: u32,
    pub total_questions: u32,
}

impl Prompt {
    #[must_use]
    pub fn from_state(state: &RoundState) -> Self {
        Self {
            heading: HEADING,
            score_line: format!("Score: {}", state.score()),
            instruction: INSTRUCTION,
            target: state.correct_option().clone(),
            options: state.options().to_vec(),
            question_number: state.question_number(),
            total_questions: state.total_questions(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedRng;
    use crate::round::RoundEngine;

    #[test]
    fn test_prompt_from_fresh_round() {
        let mut engine = RoundEngine::new(ScriptedRng::new().with_picks([1]));
        let pool: Vec<OptionId> = ["France", "Spain", "Italy"].into_iter().map(OptionId::from).collect();
        let state = engine.start_round(&pool, 8).unwrap();

        let prompt = Prompt::from_state(&state);
        assert_eq!(prompt.heading, "Guess the Flag");
        assert_eq!(prompt.score_line, "Score: 0");
        assert_eq!(prompt.instruction, "Tap the flag of");
        assert_eq!(prompt.target.as_str(), "Spain");
        assert_eq!(prompt.options, pool);
        assert_eq!((prompt.question_number, prompt.total_questions), (1, 8));
    }
}
