//! Question parsing and quiz session state.
//!
//! This module is deliberately free of any UI concern: `parser` turns pasted
//! text into [`model::Question`] records, `session` owns the loaded set plus
//! the player's picks and verdicts. Everything above it talks to these types.

pub mod extract;
pub mod model;
pub mod parser;
pub mod session;

pub use model::{Question, QuestionId};
pub use parser::{parse, ParseError};
pub use session::QuizSession;
