//! Example 01: Basic Task Management
//!
//! This example demonstrates adding, toggling, editing, and deleting tasks,
//! and shows that the list survives reopening the store.
//!
//! Run with: cargo run --example 01_basic_crud

use eyre::Result;
use todolist::filter::FilterSelection;
use todolist::models::Priority;
use todolist::render;
use todolist::store::TaskStore;

fn main() -> Result<()> {
    // Create a temporary directory for this example
    let temp_dir = tempfile::tempdir()?;
    let store_path = temp_dir.path().to_path_buf();

    println!("ToDoList Basic Example");
    println!("======================\n");
    println!("Store path: {}\n", store_path.display());

    // Open (or create) the store
    let mut store = TaskStore::open(&store_path)?;
    println!("Store opened with {} seeded categories.\n", store.categories().len());

    // ADD: Create a few tasks
    println!("1. ADD - Adding three tasks...");
    store.add("Write quarterly report", "Work", Priority::High)?;
    store.add("Book dentist appointment", "Personal", Priority::Medium)?;
    store.add("Buy milk", "Shopping", Priority::Low)?;
    show(&store);
    println!();

    let report_id = store.tasks()[0].id;
    let milk_id = store.tasks()[2].id;

    // TOGGLE: Mark the report as done
    println!("2. TOGGLE - Completing the report...");
    store.toggle(report_id)?;
    show(&store);
    println!();

    // EDIT: Rewrite the report task in one step
    println!("3. EDIT - Rewriting the report task...");
    store.edit(report_id, "Send quarterly report", "Work", Priority::Medium)?;
    show(&store);
    println!();

    // DELETE: Remove the shopping task
    println!("4. DELETE - Removing the milk run...");
    store.delete(milk_id)?;
    show(&store);
    println!();

    // REOPEN: Everything above was written through to disk
    println!("5. REOPEN - Reading the list back from disk...");
    drop(store);
    let store = TaskStore::open(&store_path)?;
    println!("   {} tasks survived the restart:", store.tasks().len());
    show(&store);
    println!();

    println!("Example complete!");
    Ok(())
}

fn show(store: &TaskStore) {
    render::print_rows(&render::render(store.tasks(), &FilterSelection::default()));
}
