// Task storage over the key-value persistence layer

use crate::kv;
use crate::models::{Priority, Task, TaskId, now_ms};
use eyre::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const TASKS_ENTRY: &str = "tasks";
const CATEGORIES_ENTRY: &str = "categories";

/// Categories every fresh store starts with.
const DEFAULT_CATEGORIES: [&str; 3] = ["Work", "Personal", "Shopping"];

/// In-memory task list with durable state under a single directory.
///
/// Two entries back the store: `tasks` (the full task list) and
/// `categories` (the grow-only category registry). Every mutation
/// rewrites both, so dropping the store never loses an acknowledged
/// change.
pub struct TaskStore {
    base_path: PathBuf,
    tasks: Vec<Task>,
    categories: Vec<String>,
}

impl TaskStore {
    /// Open or create a store at the given directory.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let base_path = path.as_ref().to_path_buf();

        // Create directory if it doesn't exist
        fs::create_dir_all(&base_path).context("Failed to create store directory")?;

        let tasks: Vec<Task> = kv::read_entry(&base_path, TASKS_ENTRY, Vec::new)?;
        let categories: Vec<String> = kv::read_entry(&base_path, CATEGORIES_ENTRY, default_categories)?;

        debug!(
            path = %base_path.display(),
            tasks = tasks.len(),
            categories = categories.len(),
            "opened store"
        );

        Ok(Self {
            base_path,
            tasks,
            categories,
        })
    }

    /// Get the base path of this store
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// All tasks, oldest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The registered categories, defaults first, then in registration order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Look up a task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Append a new task. Whitespace-only text or category is ignored
    /// without error.
    ///
    /// Returns the id of the created task, or `None` when nothing was added.
    pub fn add(&mut self, text: &str, category: &str, priority: Priority) -> Result<Option<TaskId>> {
        let text = text.trim();
        let category = category.trim();
        if text.is_empty() || category.is_empty() {
            debug!("add with empty text or category ignored");
            return Ok(None);
        }

        let id = self.next_id();
        self.tasks.push(Task::new(id, text, category, priority));
        self.register_category(category);
        self.persist()?;

        debug!(id, category, "added task");
        Ok(Some(id))
    }

    /// Flip a task between pending and completed.
    ///
    /// Returns false (without error) when no task has the given id.
    pub fn toggle(&mut self, id: TaskId) -> Result<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!(id, "toggle target not found");
            return Ok(false);
        };

        task.completed = !task.completed;
        let completed = task.completed;
        self.persist()?;

        debug!(id, completed, "toggled task");
        Ok(true)
    }

    /// Replace a task's text, category, and priority in one step.
    ///
    /// Whitespace-only text or category and unknown ids are ignored
    /// without error, leaving the task untouched. Completion state is
    /// preserved.
    pub fn edit(&mut self, id: TaskId, text: &str, category: &str, priority: Priority) -> Result<bool> {
        let text = text.trim();
        let category = category.trim();
        if text.is_empty() || category.is_empty() {
            debug!(id, "edit with empty text or category ignored");
            return Ok(false);
        }

        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!(id, "edit target not found");
            return Ok(false);
        };

        task.text = text.to_string();
        task.category = category.to_string();
        task.priority = priority;

        self.register_category(category);
        self.persist()?;

        debug!(id, "edited task");
        Ok(true)
    }

    /// Remove a task. Unknown ids are ignored without error.
    ///
    /// The task's category stays registered.
    pub fn delete(&mut self, id: TaskId) -> Result<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);

        if self.tasks.len() == before {
            debug!(id, "delete target not found");
            return Ok(false);
        }

        self.persist()?;
        debug!(id, "deleted task");
        Ok(true)
    }

    /// Next task id: the current time in milliseconds, bumped past the
    /// highest existing id so rapid additions stay unique.
    fn next_id(&self) -> TaskId {
        let max = self.tasks.iter().map(|task| task.id).max().unwrap_or(0);
        now_ms().max(max + 1)
    }

    fn register_category(&mut self, category: &str) {
        if !self.categories.iter().any(|known| known == category) {
            self.categories.push(category.to_string());
            debug!(category, "registered category");
        }
    }

    fn persist(&self) -> Result<()> {
        kv::write_entry(&self.base_path, TASKS_ENTRY, &self.tasks)?;
        kv::write_entry(&self.base_path, CATEGORIES_ENTRY, &self.categories)?;
        Ok(())
    }
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|name| name.to_string()).collect()
}
