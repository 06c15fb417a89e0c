// Category and priority filtering for task views

use crate::models::{Priority, Task};

/// Sentinel accepted on the command line to clear a filter dimension.
pub const ALL: &str = "all";

/// Either every value of a dimension, or exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

impl std::str::FromStr for Selection<String> {
    type Err = std::convert::Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw == ALL {
            Ok(Selection::All)
        } else {
            Ok(Selection::Only(raw.to_string()))
        }
    }
}

impl std::str::FromStr for Selection<Priority> {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw == ALL {
            Ok(Selection::All)
        } else {
            raw.parse().map(Selection::Only)
        }
    }
}

/// Combined view filter. A task is shown only when both dimensions accept it.
#[derive(Debug, Clone, Default)]
pub struct FilterSelection {
    pub category: Selection<String>,
    pub priority: Selection<Priority>,
}

impl FilterSelection {
    pub fn new(category: Selection<String>, priority: Selection<Priority>) -> Self {
        Self { category, priority }
    }

    pub fn matches(&self, task: &Task) -> bool {
        self.category.matches(&task.category) && self.priority.matches(&task.priority)
    }
}
