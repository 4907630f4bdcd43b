//! Question data model.
//!
//! Questions arrive as JSON pasted from a chat assistant. Fields the app
//! does not understand are carried through verbatim, so a set that goes
//! through the parser keeps whatever explanations or tags the assistant
//! attached to it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identity of a question within a loaded set. Picks and verdicts are keyed
/// by this, so duplicate ids share one slot.
pub type QuestionId = u64;

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    /// Kind tag from the payload. Only "mcq" is rendered today; the tag is
    /// kept as a plain string so future kinds stay representable.
    #[serde(rename = "type", default = "default_qtype")]
    pub qtype: String,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    /// Everything else the assistant emitted (explanations, topics,
    /// difficulty...). Round-trips untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Question {
    /// Whether the declared answer actually appears among the options.
    /// Grading works either way; a missing answer just means no pick can
    /// ever be correct.
    pub fn answer_is_listed(&self) -> bool {
        self.options.iter().any(|o| o == &self.answer)
    }
}

pub(crate) fn default_qtype() -> String {
    "mcq".to_string()
}
