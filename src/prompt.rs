// Interactive prompts for edit and delete flows

use std::io::{self, BufRead, Write};

/// Source of interactive answers.
///
/// `prompt` shows the current value and returns `None` when the user
/// cancels (end of input). An empty answer means the user kept the
/// pre-filled current value. `confirm` defaults to no.
pub trait Prompter {
    fn prompt(&mut self, label: &str, current: &str) -> Option<String>;
    fn confirm(&mut self, question: &str) -> bool;
}

/// Prompter backed by standard input.
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn prompt(&mut self, label: &str, current: &str) -> Option<String> {
        print!("{label} [{current}]: ");
        let _ = io::stdout().flush();

        let answer = read_line()?;
        if answer.is_empty() {
            Some(current.to_string())
        } else {
            Some(answer)
        }
    }

    fn confirm(&mut self, question: &str) -> bool {
        print!("{question} [y/N]: ");
        let _ = io::stdout().flush();

        match read_line() {
            Some(answer) => answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"),
            None => false,
        }
    }
}

/// One line from stdin without its newline. `None` at end of input
/// or on a read error, both of which count as cancelling.
fn read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        Err(_) => None,
    }
}

/// Prompter with canned answers, recording every prompt it was shown.
#[cfg(test)]
pub struct ScriptedPrompter {
    answers: std::collections::VecDeque<Option<String>>,
    confirmations: std::collections::VecDeque<bool>,
    pub prompts_seen: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new(answers: Vec<Option<&str>>, confirmations: Vec<bool>) -> Self {
        Self {
            answers: answers.into_iter().map(|answer| answer.map(str::to_string)).collect(),
            confirmations: confirmations.into_iter().collect(),
            prompts_seen: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn prompt(&mut self, label: &str, current: &str) -> Option<String> {
        self.prompts_seen.push(format!("{label} [{current}]"));
        match self.answers.pop_front() {
            // Empty scripted answer keeps the current value, as with stdin
            Some(Some(answer)) if answer.is_empty() => Some(current.to_string()),
            Some(answer) => answer,
            None => None,
        }
    }

    fn confirm(&mut self, question: &str) -> bool {
        self.prompts_seen.push(question.to_string());
        self.confirmations.pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_empty_answer_keeps_current() {
        let mut prompter = ScriptedPrompter::new(vec![Some("")], vec![]);
        assert_eq!(prompter.prompt("Edit task", "old text"), Some("old text".to_string()));
    }

    #[test]
    fn test_scripted_cancel_and_exhaustion() {
        let mut prompter = ScriptedPrompter::new(vec![None], vec![]);
        assert_eq!(prompter.prompt("Edit task", "x"), None);
        // Running out of scripted answers also reads as cancel
        assert_eq!(prompter.prompt("Edit task", "x"), None);
        assert!(!prompter.confirm("Sure?"));
    }

    #[test]
    fn test_scripted_records_prompts() {
        let mut prompter = ScriptedPrompter::new(vec![Some("a")], vec![true]);
        prompter.prompt("Edit task", "old");
        assert!(prompter.confirm("Sure?"));
        assert_eq!(prompter.prompts_seen, ["Edit task [old]", "Sure?"]);
    }
}
