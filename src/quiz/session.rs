//! Quiz session state machine.
//!
//! Owns the loaded question set together with the player's picks and the
//! graded verdicts. Loading replaces all three at once, and grading rebuilds
//! every verdict from scratch rather than patching the previous pass.
//! No UI state lives here, which is what keeps the whole flow testable.

use std::collections::HashMap;

use crate::quiz::model::{Question, QuestionId};

/// One loaded quiz. Picks and verdicts are keyed by question id, so when a
/// paste carries duplicate ids those questions share a slot, faithful to
/// the payloads this app is fed.
#[derive(Debug, Default)]
pub struct QuizSession {
    questions: Vec<Question>,
    picks: HashMap<QuestionId, String>,
    verdicts: HashMap<QuestionId, bool>,
}

impl QuizSession {
    /// Replace the loaded set. Previous picks and verdicts are dropped even
    /// when the new set is empty.
    pub fn load(&mut self, questions: Vec<Question>) {
        self.questions = questions;
        self.picks.clear();
        self.verdicts.clear();
    }

    /// Record the player's pick for one question, overwriting any earlier
    /// pick for the same id.
    pub fn select(&mut self, id: QuestionId, option: impl Into<String>) {
        self.picks.insert(id, option.into());
    }

    /// Grade every loaded question against the current picks. An unanswered
    /// question grades wrong. Verdicts are rebuilt wholesale so nothing
    /// stale survives a re-grade.
    pub fn grade(&mut self) {
        self.verdicts.clear();
        for q in &self.questions {
            let correct = self.picks.get(&q.id).is_some_and(|pick| *pick == q.answer);
            self.verdicts.insert(q.id, correct);
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The pick recorded for a question, if any.
    pub fn pick(&self, id: QuestionId) -> Option<&str> {
        self.picks.get(&id).map(String::as_str)
    }

    /// The verdict for a question. `None` until [`grade`](Self::grade) runs.
    pub fn verdict(&self, id: QuestionId) -> Option<bool> {
        self.verdicts.get(&id).copied()
    }

    /// Whether a grading pass has produced verdicts for the current set.
    pub fn is_graded(&self) -> bool {
        !self.verdicts.is_empty()
    }

    /// How many loaded questions have a recorded pick.
    pub fn answered_count(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| self.picks.contains_key(&q.id))
            .count()
    }

    /// Correct verdicts from the last grading pass.
    pub fn score(&self) -> usize {
        self.verdicts.values().filter(|correct| **correct).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn q(id: QuestionId, answer: &str) -> Question {
        Question {
            id,
            qtype: "mcq".into(),
            question: format!("question {id}?"),
            options: vec!["yes".into(), "no".into(), answer.into()],
            answer: answer.into(),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_load_replaces_previous_picks() {
        let mut session = QuizSession::default();
        session.load(vec![q(1, "yes"), q(2, "no")]);
        session.select(1, "yes");
        session.grade();

        session.load(vec![q(1, "no")]);
        assert_eq!(session.pick(1), None);
        assert_eq!(session.verdict(1), None);
        assert!(!session.is_graded());
    }

    #[test]
    fn test_load_empty_set_still_clears() {
        let mut session = QuizSession::default();
        session.load(vec![q(1, "yes")]);
        session.select(1, "yes");

        session.load(Vec::new());
        assert!(session.is_empty());
        assert_eq!(session.pick(1), None);
    }

    #[test]
    fn test_unanswered_questions_grade_wrong() {
        let mut session = QuizSession::default();
        session.load(vec![q(1, "alpha"), q(2, "beta")]);
        session.select(1, "alpha");
        session.grade();

        assert_eq!(session.verdict(1), Some(true));
        assert_eq!(session.verdict(2), Some(false));
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_reselect_overwrites_pick() {
        let mut session = QuizSession::default();
        session.load(vec![q(1, "alpha")]);
        session.select(1, "no");
        session.select(1, "alpha");
        assert_eq!(session.pick(1), Some("alpha"));

        session.grade();
        assert_eq!(session.verdict(1), Some(true));
    }

    #[test]
    fn test_regrade_rebuilds_all_verdicts() {
        let mut session = QuizSession::default();
        session.load(vec![q(1, "alpha"), q(2, "beta")]);
        session.grade();
        assert_eq!(session.verdict(2), Some(false));

        session.load(vec![q(7, "gamma")]);
        session.select(7, "gamma");
        session.grade();
        assert_eq!(session.verdict(7), Some(true));
        // Nothing from the earlier set leaks through.
        assert_eq!(session.verdict(1), None);
        assert_eq!(session.verdict(2), None);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_counts() {
        let mut session = QuizSession::default();
        session.load(vec![q(1, "a"), q(2, "b"), q(3, "c")]);
        assert_eq!(session.len(), 3);
        assert_eq!(session.answered_count(), 0);

        session.select(2, "b");
        session.select(3, "no");
        assert_eq!(session.answered_count(), 2);

        session.grade();
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_grading_empty_set_produces_nothing() {
        let mut session = QuizSession::default();
        session.grade();
        assert!(!session.is_graded());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_duplicate_ids_share_one_slot() {
        let mut session = QuizSession::default();
        session.load(vec![q(5, "alpha"), q(5, "beta")]);
        session.select(5, "beta");
        session.grade();

        // One key, one verdict; the later question owns it.
        assert_eq!(session.answered_count(), 2);
        assert_eq!(session.verdict(5), Some(true));
        assert_eq!(session.score(), 1);
    }
}
