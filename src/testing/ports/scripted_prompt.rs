use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::ConfirmPrompt;

/// Answers every question with a fixed reply and records what was asked.
pub struct ScriptedPrompt {
    answer: bool,
    pub asked: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self { answer, asked: RefCell::new(Vec::new()) }
    }
}

impl ConfirmPrompt for ScriptedPrompt {
    fn confirm(&self, question: &str) -> Result<bool, AppError> {
        self.asked.borrow_mut().push(question.to_string());
        Ok(self.answer)
    }
}
