//! Candidate-array extraction.
//!
//! Assistant replies wrap the question array in prose, markdown fences, or
//! both, so the JSON parser cannot be pointed at the paste directly. This
//! scanner finds the first `[` that plausibly opens an array of objects and
//! walks brackets to its matching `]`, ignoring brackets inside string
//! literals. Candidates that never balance are skipped and the scan resumes,
//! so a stray `[` in the surrounding text cannot shadow the real payload.

/// Extract the first plausible JSON array slice from pasted text.
///
/// Returns `None` when no balanced `[ { ... } ]` region exists; callers fall
/// back to parsing the whole paste, which keeps bare payloads like `[]`
/// working without a special case here.
pub fn extract_array(raw: &str) -> Option<&str> {
    let bytes = raw.as_bytes();
    let mut from = 0;
    while let Some(rel) = raw[from..].find('[') {
        let open = from + rel;
        if opens_object_array(&raw[open + 1..]) {
            if let Some(end) = balanced_end(bytes, open) {
                return Some(&raw[open..=end]);
            }
        }
        from = open + 1;
    }
    None
}

/// True when the text after a `[` leads with `{`, i.e. the bracket opens an
/// array of objects rather than a markdown link or a plain list.
fn opens_object_array(after: &str) -> bool {
    after.trim_start().starts_with('{')
}

/// Walk from the opening `[` to its matching `]`, tracking bracket depth.
/// String literals are skipped wholesale, including escaped quotes, so
/// option text like `"a ] b"` cannot close the array early.
fn balanced_end(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate().skip(open) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' | b'{' => depth += 1,
            b']' | b'}' => {
                depth -= 1;
                if depth == 0 {
                    // A `}` landing here means the nesting is mismatched;
                    // treat the candidate as dead rather than guessing.
                    return if b == b']' { Some(i) } else { None };
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_array_from_prose() {
        let raw = "Sure! Here are your questions:\n```json\n[{\"id\": 1}]\n```\nGood luck!";
        assert_eq!(extract_array(raw), Some("[{\"id\": 1}]"));
    }

    #[test]
    fn test_brackets_inside_strings_do_not_close_early() {
        let raw = r#"[{"question": "what does ] mean?", "answer": "a \" ] quote"}] trailing"#;
        assert_eq!(
            extract_array(raw),
            Some(r#"[{"question": "what does ] mean?", "answer": "a \" ] quote"}]"#)
        );
    }

    #[test]
    fn test_nested_arrays_stay_inside() {
        let raw = r#"text [{"options": ["a", "b"], "grid": [[1, 2]]}] text"#;
        assert_eq!(
            extract_array(raw),
            Some(r#"[{"options": ["a", "b"], "grid": [[1, 2]]}]"#)
        );
    }

    #[test]
    fn test_plain_lists_are_not_candidates() {
        assert_eq!(extract_array("pick [one] of [1, 2, 3]"), None);
        assert_eq!(extract_array("[]"), None);
        assert_eq!(extract_array("no brackets at all"), None);
    }

    #[test]
    fn test_unbalanced_candidate_is_skipped() {
        assert_eq!(extract_array("[{\"id\": 1"), None);
        // A dead candidate earlier in the text must not hide a later one.
        let raw = "broken [{ oops... then real: [{\"id\": 2}] done";
        assert_eq!(extract_array(raw), Some("[{\"id\": 2}]"));
    }

    #[test]
    fn test_first_balanced_candidate_wins() {
        let raw = "[{\"id\": 1}] and also [{\"id\": 2}]";
        assert_eq!(extract_array(raw), Some("[{\"id\": 1}]"));
    }

    #[test]
    fn test_multibyte_text_around_and_inside() {
        let raw = "вопросы → [{\"question\": \"什么?\"}] ←";
        assert_eq!(extract_array(raw), Some("[{\"question\": \"什么?\"}]"));
    }
}
