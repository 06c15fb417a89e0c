//! Example 02: Filtered Views and PDF Export
//!
//! This example demonstrates narrowing the task view by category and
//! priority, listing the category choices, and exporting every task to
//! a PDF document.
//!
//! Run with: cargo run --example 02_filtering_and_export

use eyre::Result;
use todolist::export;
use todolist::filter::{FilterSelection, Selection};
use todolist::models::Priority;
use todolist::render;
use todolist::store::TaskStore;

fn main() -> Result<()> {
    // Create a temporary directory for this example
    let temp_dir = tempfile::tempdir()?;
    let store_path = temp_dir.path().to_path_buf();

    println!("ToDoList Filtering and Export Example");
    println!("=====================================\n");
    println!("Store path: {}\n", store_path.display());

    let mut store = TaskStore::open(&store_path)?;

    // Seed a list that spans categories and priorities. "Garden" is new,
    // so adding it grows the category registry.
    store.add("Prepare slides", "Work", Priority::High)?;
    store.add("Review budget", "Work", Priority::Low)?;
    store.add("Plan birthday dinner", "Personal", Priority::Medium)?;
    store.add("Order groceries", "Shopping", Priority::High)?;
    store.add("Water the plants", "Garden", Priority::Low)?;

    println!("1. ALL - Every task:");
    show(&store, &FilterSelection::default());
    println!();

    println!("2. CATEGORY - Only Work:");
    show(
        &store,
        &FilterSelection::new(Selection::Only("Work".to_string()), Selection::All),
    );
    println!();

    println!("3. PRIORITY - Only high:");
    show(
        &store,
        &FilterSelection::new(Selection::All, Selection::Only(Priority::High)),
    );
    println!();

    println!("4. BOTH - Work tasks at high priority:");
    show(
        &store,
        &FilterSelection::new(Selection::Only("Work".to_string()), Selection::Only(Priority::High)),
    );
    println!();

    println!("5. CATEGORIES - Choices for the filter:");
    render::print_category_options(store.categories());
    println!();

    // The export always covers the full list, never the filtered view
    println!("6. EXPORT - Writing the PDF...");
    let path = export::export_tasks(store.tasks(), temp_dir.path())?;
    let bytes = std::fs::metadata(&path)?.len();
    println!("   Wrote {} ({} bytes)\n", path.display(), bytes);

    println!("Example complete!");
    Ok(())
}

fn show(store: &TaskStore, filter: &FilterSelection) {
    render::print_rows(&render::render(store.tasks(), filter));
}
