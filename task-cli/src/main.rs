use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use task_cli::service::{TaskService, TaskServiceError};
use task_cli::store::TaskStore;
use task_cli::task::{Status, Task};

#[derive(Parser, Debug)]
#[command(about = "Track tasks in a local JSON file")]
struct Cli {
    /// File the task list is persisted to
    #[arg(long, global = true, default_value = "tasks.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Subcommand)]
enum Commands {
    /// Add a new task
    Add { description: String },
    /// Update the description of a task
    Update { id: String, description: String },
    /// Delete a task
    Delete { id: String },
    /// Mark a task as in-progress
    MarkInProgress { id: String },
    /// Mark a task as done
    MarkDone { id: String },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let Some(command) = args.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let store = TaskStore::new(args.file);
    let service = TaskService::new(&store);
    let mut tasks = store.load()?;

    match run(&service, &mut tasks, command) {
        Ok(()) => Ok(()),
        // Not fatal, the process still exits normally.
        Err(TaskServiceError::TaskNotFound(_)) => {
            println!("Task not found.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn run(
    service: &TaskService<'_>,
    tasks: &mut Vec<Task>,
    command: Commands,
) -> Result<(), TaskServiceError> {
    match command {
        Commands::Add { description } => {
            let task = service.add(tasks, description)?;
            println!("Task added: {} (ID {})", task.description(), task.id());
        }
        Commands::Update { id, description } => {
            service.update_description(tasks, &id, description)?;
            println!("Description updated.");
        }
        Commands::Delete { id } => {
            service.delete(tasks, &id)?;
            println!("Task deleted.");
        }
        Commands::MarkInProgress { id } => {
            let status = service.change_status(tasks, &id, Status::InProgress)?;
            println!("Marked as {}", status);
        }
        Commands::MarkDone { id } => {
            let status = service.change_status(tasks, &id, Status::Done)?;
            println!("Marked as {}", status);
        }
    };

    Ok(())
}
