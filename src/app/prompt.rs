//! The request suffix handed to the chat assistant, plus the escape
//! sequence that pushes it onto the clipboard.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

/// Appended to a topic request ("Generate 5 MCQs about Python...") so the
/// assistant answers in the JSON shape the parser expects.
pub const PROMPT_SUFFIX: &str = "and output the entire result as a single JSON array where each question object MUST contain the fields: \"type\" (value must be \"mcq\"), \"question\", \"options\" (an array of strings), and \"answer\" (the correct option string).";

/// Wrap `payload` in an OSC 52 sequence. Terminals that support it copy the
/// base64 content to the system clipboard; terminals that do not simply
/// swallow the escape.
pub fn osc52_sequence(payload: &str) -> String {
    format!("\x1b]52;c;{}\x07", BASE64.encode(payload))
}
