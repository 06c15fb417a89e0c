use clap::{Parser, Subcommand};
use eyre::{Result, eyre};
use std::path::{Path, PathBuf};
use todolist::filter::{FilterSelection, Selection};
use todolist::models::{Priority, TaskId};
use todolist::prompt::StdinPrompter;
use todolist::store::TaskStore;
use todolist::{export, interact, render};

#[derive(Parser)]
#[command(name = "todolist")]
#[command(about = "ToDoList CLI - a personal task list with categories, priorities, and PDF export")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Path to the store directory (default: todolist in the user data directory)
    #[arg(short, long)]
    store_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a task and show the updated list
    Add {
        /// Task description
        text: String,

        /// Category for the task
        #[arg(short, long, default_value = "Work")]
        category: String,

        /// Priority: low, medium, or high
        #[arg(short, long, default_value = "low")]
        priority: Priority,
    },

    /// Show tasks, optionally narrowed by category and priority
    List {
        /// Category to show, or "all"
        #[arg(short, long, default_value = "all")]
        category: Selection<String>,

        /// Priority to show, or "all"
        #[arg(short, long, default_value = "all")]
        priority: Selection<Priority>,
    },

    /// Flip a task between pending and completed
    Toggle {
        /// Id of the task to toggle
        id: TaskId,
    },

    /// Rewrite a task's text, category, and priority interactively
    Edit {
        /// Id of the task to edit
        id: TaskId,
    },

    /// Delete a task after confirmation
    Delete {
        /// Id of the task to delete
        id: TaskId,
    },

    /// Show the category choices available for filtering
    Categories,

    /// Export all tasks to todolist_tasks.pdf in the current directory
    Export,
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let store_path = match cli.store_path {
        Some(path) => path,
        None => default_store_path()?,
    };

    let mut store = TaskStore::open(&store_path)?;

    match cli.command {
        Commands::Add {
            text,
            category,
            priority,
        } => {
            store.add(&text, &category, priority)?;
            render_all(&store);
        }
        Commands::List { category, priority } => {
            let filter = FilterSelection::new(category, priority);
            render::print_rows(&render::render(store.tasks(), &filter));
        }
        Commands::Toggle { id } => {
            store.toggle(id)?;
            render_all(&store);
        }
        Commands::Edit { id } => {
            interact::edit_task(&mut store, &mut StdinPrompter, id)?;
            render_all(&store);
        }
        Commands::Delete { id } => {
            interact::delete_task(&mut store, &mut StdinPrompter, id)?;
            render_all(&store);
        }
        Commands::Categories => {
            render::print_category_options(store.categories());
        }
        Commands::Export => {
            let path = export::export_tasks(store.tasks(), Path::new("."))?;
            println!("Exported {} tasks to {}", store.tasks().len(), path.display());
        }
    }

    Ok(())
}

/// Every change ends with a full, unfiltered view of the list.
fn render_all(store: &TaskStore) {
    render::print_rows(&render::render(store.tasks(), &FilterSelection::default()));
}

fn default_store_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| eyre!("Could not determine the user data directory"))?;
    Ok(data_dir.join("todolist"))
}
