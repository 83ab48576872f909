use colored::Colorize;
use inquire::{Confirm, InquireError};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PromptError {
    #[error("Error occurred trying to prompt user")]
    #[diagnostic(
        code(ds_skeleton::prompt::inquire),
        help("Run without --preview when no interactive terminal is available")
    )]
    Inquire(#[from] InquireError),
}

/// Asks whether the previewed structure should be written.
///
/// Escaping or interrupting the prompt counts as a "no".
pub fn apply_changes() -> Result<bool, PromptError> {
    let question = format!("{}", "Create project structure?".bright_green());

    match Confirm::new(&question).with_default(true).prompt() {
        Ok(answer) => Ok(answer),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(false),
        Err(error) => Err(error.into()),
    }
}
