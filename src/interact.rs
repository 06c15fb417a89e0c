// Interactive edit and delete flows

use crate::models::{Priority, TaskId};
use crate::prompt::Prompter;
use crate::store::TaskStore;
use eyre::Result;
use tracing::debug;

/// Prompt for replacement text, category, and priority, then apply all
/// three in one step.
///
/// Every prompt is issued before anything is validated. The edit goes
/// through only when none was cancelled, the priority is exactly `low`,
/// `medium`, or `high`, and the store accepts the text and category.
/// Any other outcome leaves the task untouched.
pub fn edit_task(store: &mut TaskStore, prompter: &mut dyn Prompter, id: TaskId) -> Result<bool> {
    let Some(task) = store.get(id) else {
        debug!(id, "edit requested for unknown task");
        return Ok(false);
    };

    let current_text = task.text.clone();
    let current_category = task.category.clone();
    let current_priority = task.priority;

    let text = prompter.prompt("Edit task", &current_text);
    let category = prompter.prompt("Edit category", &current_category);
    let priority = prompter.prompt("Edit priority (low/medium/high)", current_priority.as_str());

    let (Some(text), Some(category), Some(priority)) = (text, category, priority) else {
        debug!(id, "edit cancelled");
        return Ok(false);
    };

    let Some(priority) = Priority::parse(&priority) else {
        debug!(id, "edit discarded, invalid priority");
        return Ok(false);
    };

    store.edit(id, &text, &category, priority)
}

/// Ask for confirmation, then delete.
///
/// The confirmation comes first; the id is only looked up after a yes.
/// Unknown ids are ignored without error, as in the store.
pub fn delete_task(store: &mut TaskStore, prompter: &mut dyn Prompter, id: TaskId) -> Result<bool> {
    if !prompter.confirm("Are you sure you want to delete this task?") {
        debug!(id, "delete not confirmed");
        return Ok(false);
    }

    store.delete(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;
    use tempfile::TempDir;

    fn store_with_task() -> (TempDir, TaskStore, TaskId) {
        let temp = TempDir::new().unwrap();
        let mut store = TaskStore::open(temp.path()).unwrap();
        let id = store.add("draft email", "Work", Priority::Low).unwrap().unwrap();
        (temp, store, id)
    }

    #[test]
    fn test_edit_applies_all_answers() {
        let (_temp, mut store, id) = store_with_task();
        let mut prompter =
            ScriptedPrompter::new(vec![Some("send email"), Some("Office"), Some("high")], vec![]);

        assert!(edit_task(&mut store, &mut prompter, id).unwrap());

        let task = store.get(id).unwrap();
        assert_eq!(task.text, "send email");
        assert_eq!(task.category, "Office");
        assert_eq!(task.priority, Priority::High);

        // Prompts carry the pre-filled current values
        assert_eq!(
            prompter.prompts_seen,
            [
                "Edit task [draft email]",
                "Edit category [Work]",
                "Edit priority (low/medium/high) [low]",
            ]
        );
    }

    #[test]
    fn test_edit_empty_answers_keep_current_values() {
        let (_temp, mut store, id) = store_with_task();
        let mut prompter = ScriptedPrompter::new(vec![Some(""), Some(""), Some("")], vec![]);

        assert!(edit_task(&mut store, &mut prompter, id).unwrap());

        let task = store.get(id).unwrap();
        assert_eq!(task.text, "draft email");
        assert_eq!(task.category, "Work");
        assert_eq!(task.priority, Priority::Low);
    }

    #[test]
    fn test_edit_cancel_discards_but_still_asks_everything() {
        let (_temp, mut store, id) = store_with_task();
        let mut prompter = ScriptedPrompter::new(vec![Some("new text"), None, Some("high")], vec![]);

        assert!(!edit_task(&mut store, &mut prompter, id).unwrap());
        assert_eq!(store.get(id).unwrap().text, "draft email");
        assert_eq!(prompter.prompts_seen.len(), 3);
    }

    #[test]
    fn test_edit_rejects_bad_priority_wholesale() {
        let (_temp, mut store, id) = store_with_task();
        let mut prompter =
            ScriptedPrompter::new(vec![Some("new text"), Some("Office"), Some("High")], vec![]);

        assert!(!edit_task(&mut store, &mut prompter, id).unwrap());

        // Valid text and category answers were discarded along with it
        let task = store.get(id).unwrap();
        assert_eq!(task.text, "draft email");
        assert_eq!(task.category, "Work");
    }

    #[test]
    fn test_edit_rejects_whitespace_answers() {
        let (_temp, mut store, id) = store_with_task();
        let mut prompter = ScriptedPrompter::new(vec![Some("   "), Some("Office"), Some("low")], vec![]);

        assert!(!edit_task(&mut store, &mut prompter, id).unwrap());
        assert_eq!(store.get(id).unwrap().category, "Work");

        let mut prompter = ScriptedPrompter::new(vec![Some("new text"), Some("   "), Some("low")], vec![]);

        assert!(!edit_task(&mut store, &mut prompter, id).unwrap());
        assert_eq!(store.get(id).unwrap().text, "draft email");
    }

    #[test]
    fn test_edit_unknown_id_asks_nothing() {
        let (_temp, mut store, _id) = store_with_task();
        let mut prompter = ScriptedPrompter::new(vec![], vec![]);

        assert!(!edit_task(&mut store, &mut prompter, 999).unwrap());
        assert!(prompter.prompts_seen.is_empty());
    }

    #[test]
    fn test_delete_confirmed() {
        let (_temp, mut store, id) = store_with_task();
        let mut prompter = ScriptedPrompter::new(vec![], vec![true]);

        assert!(delete_task(&mut store, &mut prompter, id).unwrap());
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_delete_declined() {
        let (_temp, mut store, id) = store_with_task();
        let mut prompter = ScriptedPrompter::new(vec![], vec![false]);

        assert!(!delete_task(&mut store, &mut prompter, id).unwrap());
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(prompter.prompts_seen, ["Are you sure you want to delete this task?"]);
    }

    #[test]
    fn test_delete_unknown_id_still_asks() {
        let (_temp, mut store, _id) = store_with_task();
        let mut prompter = ScriptedPrompter::new(vec![], vec![true]);

        assert!(!delete_task(&mut store, &mut prompter, 999).unwrap());
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(prompter.prompts_seen.len(), 1);
    }
}
