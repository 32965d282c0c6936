use crate::domain::AppError;

/// Port for yes/no questions asked of the operator.
pub trait ConfirmPrompt {
    fn confirm(&self, question: &str) -> Result<bool, AppError>;
}
