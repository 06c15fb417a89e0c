// ToDoList - single-user task list with local persistence and PDF export

pub mod export;
pub mod filter;
pub mod interact;
pub mod kv;
pub mod models;
pub mod prompt;
pub mod render;
pub mod store;

// Re-export main types for convenience
pub use export::export_tasks;
pub use filter::{ALL, FilterSelection, Selection};
pub use interact::{delete_task, edit_task};
pub use models::{Priority, Task, TaskId, now_ms};
pub use prompt::{Prompter, StdinPrompter};
pub use render::{TaskRow, print_category_options, print_rows, render};
pub use store::TaskStore;
