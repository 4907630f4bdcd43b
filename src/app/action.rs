/// Work the key handlers request from the main loop. Handlers never touch
/// the parser, the logger, or the terminal themselves.
#[derive(Debug, PartialEq)]
pub enum Action {
    /// Parse the paste buffer and install the result as the current quiz.
    LoadQuiz { raw: String },
    /// Grade the current session against the recorded picks.
    GradeQuiz,
    /// Push the assistant prompt to the terminal clipboard.
    CopyPrompt,
    Quit,
}
