mod menu;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use tarefas_core::{
    parse_description, parse_due_date, parse_duration, parse_position, JsonFileStore, Priority,
    Task, TaskService,
};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tarefas")]
#[command(about = "A file-backed personal task manager", long_about = None)]
struct Cli {
    /// Directory holding tarefas.json (defaults to ~/.tarefas)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// What needs doing
        description: String,
        /// Estimated duration: hh:mm or decimal hours (e.g. 01:30 or 1.5)
        #[arg(long)]
        duration: String,
        /// Alta, Média or Baixa (any capitalization)
        #[arg(long)]
        priority: String,
        /// Due date, dd/mm/yyyy, strictly in the future
        #[arg(long)]
        due: Option<String>,
    },
    /// List tasks
    List {
        /// Sort order for the listing
        #[arg(long, value_enum, default_value = "priority")]
        by: SortOrder,
    },
    /// Remove the task at a position shown by the priority listing
    Remove {
        /// 1-based position
        position: String,
    },
    /// Show aggregate statistics
    Stats,
    /// Run the interactive menu
    Menu,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortOrder {
    Priority,
    Date,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let store = JsonFileStore::new(cli.data_dir)?;
    debug!(path = %store.file_path().display(), "using task file");
    let service = TaskService::new(store);

    match cli.command {
        Some(Commands::Add {
            description,
            duration,
            priority,
            due,
        }) => {
            let description = parse_description(&description)?;
            let estimated_minutes = parse_duration(&duration)?;
            let priority: Priority = priority.parse()?;
            let due_date = due
                .map(|d| parse_due_date(&d, Local::now().date_naive()))
                .transpose()?;
            let task = service.add(Task::new(description, estimated_minutes, priority, due_date))?;
            render::confirm_added(&task);
        }
        Some(Commands::List { by }) => {
            let tasks = match by {
                SortOrder::Priority => service.list_by_priority()?,
                SortOrder::Date => service.list_by_due_date()?,
            };
            render::task_table(&tasks);
        }
        Some(Commands::Remove { position }) => {
            let position = parse_position(&position)?;
            let removed = service.remove(position)?;
            render::confirm_removed(&removed);
        }
        Some(Commands::Stats) => {
            render::statistics(service.statistics()?.as_ref());
        }
        Some(Commands::Menu) | None => {
            menu::run(&service)?;
        }
    }
    Ok(())
}
