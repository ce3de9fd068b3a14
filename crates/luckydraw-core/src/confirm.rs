// Confirmation capability for destructive operations.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// Synchronous yes/no prompt. Returning `false` aborts the operation with no
/// state change.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Answers every prompt the same way. Handy for headless use and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&mut self, _message: &str) -> bool {
        self.0
    }
}

/// Answers from a queue and records every message it was shown.
///
/// Clones share the queue and the log, so a test can keep one handle while
/// the engine owns another. Declines once the queue runs dry.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConfirm {
    inner: Arc<Mutex<Script>>,
}

#[derive(Debug, Default)]
struct Script {
    answers: VecDeque<bool>,
    prompts: Vec<String>,
}

impl ScriptedConfirm {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        ScriptedConfirm {
            inner: Arc::new(Mutex::new(Script {
                answers: answers.into_iter().collect(),
                prompts: Vec::new(),
            })),
        }
    }

    /// Queue another answer.
    pub fn push(&self, answer: bool) {
        self.script().answers.push_back(answer);
    }

    /// Every message shown so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.script().prompts.clone()
    }

    fn script(&self) -> MutexGuard<'_, Script> {
        self.inner.lock().expect("confirm script mutex poisoned")
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        let mut script = self.script();
        script.prompts.push(message.to_string());
        script.answers.pop_front().unwrap_or(false)
    }
}

/// Prompt shown before drawing `k` winners.
pub fn pick_message(k: usize) -> String {
    format!("Are you ready? We will pick {k} winner(s).")
}

/// Prompt shown before removing one pool entry.
pub fn remove_message(value: &impl std::fmt::Display) -> String {
    format!("Do you want to remove \"{value}\"?")
}

/// Prompt shown before wiping everything.
pub const RESET_MESSAGE: &str = "Everything will be gone. Are you sure?";

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;

    #[test]
    fn scripted_answers_in_order_then_declines() {
        let mut confirm = ScriptedConfirm::new([true, false]);
        assert!(confirm.confirm("one"));
        assert!(!confirm.confirm("two"));
        assert!(!confirm.confirm("three"));
        assert_eq!(confirm.prompts(), vec!["one", "two", "three"]);
    }

    #[test]
    fn clones_share_script() {
        let handle = ScriptedConfirm::new([]);
        let mut owned = handle.clone();
        handle.push(true);
        assert!(owned.confirm("go?"));
        assert_eq!(handle.prompts(), vec!["go?"]);
    }

    #[test]
    fn messages() {
        assert_eq!(pick_message(5), "Are you ready? We will pick 5 winner(s).");
        assert_eq!(
            remove_message(&Entry::text("Alice")),
            "Do you want to remove \"Alice\"?"
        );
        assert_eq!(remove_message(&Entry::Number(12)), "Do you want to remove \"12\"?");
    }
}
