// Read-only projection of the task list into printable rows

use crate::filter::{ALL, FilterSelection};
use crate::models::{Priority, Task, TaskId};
use colored::Colorize;

/// One displayable line of the task view.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    pub category: String,
    pub priority: Priority,
    pub completed: bool,
}

impl TaskRow {
    /// Action name offered for the completion toggle.
    pub fn toggle_label(&self) -> &'static str {
        if self.completed { "Undo" } else { "Complete" }
    }
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            text: task.text.clone(),
            category: task.category.clone(),
            priority: task.priority,
            completed: task.completed,
        }
    }
}

/// Project tasks through the filter, preserving store order.
///
/// Pure: never touches the terminal or the store.
pub fn render(tasks: &[Task], filter: &FilterSelection) -> Vec<TaskRow> {
    tasks
        .iter()
        .filter(|task| filter.matches(task))
        .map(TaskRow::from)
        .collect()
}

/// Format one row for the terminal.
pub fn format_row(row: &TaskRow) -> String {
    let marker = if row.completed { "[x]" } else { "[ ]" };
    let badge = format!("[{}]", row.category).bold();

    let text = match row.priority {
        Priority::High => row.text.as_str().red(),
        Priority::Medium => row.text.as_str().yellow(),
        Priority::Low => row.text.as_str().green(),
    };
    let text = if row.completed {
        text.strikethrough().dimmed()
    } else {
        text
    };

    let actions = format!("{} | Edit | Delete", row.toggle_label()).dimmed();

    format!("{:>13}  {} {} {}  {}", row.id, marker, badge, text, actions)
}

/// Print rows to stdout, or a placeholder when nothing matched.
pub fn print_rows(rows: &[TaskRow]) {
    if rows.is_empty() {
        println!("No tasks found.");
        return;
    }

    for row in rows {
        println!("{}", format_row(row));
    }
}

/// Category choices for the filter, with the catch-all first.
pub fn category_options(categories: &[String]) -> Vec<String> {
    let mut options = Vec::with_capacity(categories.len() + 1);
    options.push(ALL.to_string());
    options.extend(categories.iter().cloned());
    options
}

/// Print the category choices, spelling out the catch-all.
pub fn print_category_options(categories: &[String]) {
    for option in category_options(categories) {
        if option == ALL {
            println!("{}", "All Categories".bold());
        } else {
            println!("{option}");
        }
    }
}
