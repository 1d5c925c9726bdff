mod report;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tasklist_core::{parse_task_spec, primes_in, Priority, TaskId, TaskStore};
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::report::{render, OutputFormat, Report};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "In-memory task list demo and prime printer", long_about = None)]
struct Cli {
    /// Log debug events to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print every prime from 1 up to the limit
    Primes {
        #[arg(short, long, default_value_t = 100)]
        limit: i64,
    },
    /// Run the built-in example scenario
    Demo {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Build a fresh task list from the given operations and print its views
    Tasks {
        /// Task to add (usage: --add "Task title pri:high"), repeatable
        #[arg(long = "add", value_name = "SPEC")]
        add: Vec<String>,
        /// Toggle a task's completion by id, repeatable
        #[arg(long = "complete", value_name = "ID")]
        complete: Vec<u64>,
        /// Change a task's priority (usage: --priority 3=low), repeatable
        #[arg(long = "priority", value_name = "ID=PRIORITY")]
        priority: Vec<String>,
        /// Delete a task by id, repeatable
        #[arg(long = "delete", value_name = "ID")]
        delete: Vec<u64>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "tasklist=debug,tasklist_core=debug"
    } else {
        "tasklist=warn,tasklist_core=warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Primes { limit }) => print_primes(limit),
        Some(Commands::Demo { format }) => {
            let store = demo_store();
            println!("{}", render(&Report::from_store(&store), format)?);
        }
        Some(Commands::Tasks {
            add,
            complete,
            priority,
            delete,
            format,
        }) => {
            let store = build_store(&add, &complete, &priority, &delete)?;
            println!("{}", render(&Report::from_store(&store), format)?);
        }
        None => {
            let store = demo_store();
            println!("{}", render(&Report::from_store(&store), OutputFormat::Table)?);
        }
    }
    Ok(())
}

fn print_primes(limit: i64) {
    debug!(limit, "printing primes");
    for n in primes_in(1..=limit) {
        println!("{} is a prime number", n);
    }
}

fn demo_store() -> TaskStore {
    let mut store = TaskStore::new();
    store.add_task("Learn JavaScript", Priority::High);
    store.add_task("Practice coding", Priority::High);
    store.add_task("Read documentation", Priority::Medium);
    store.add_task("Take a break", Priority::Low);

    if let Some(first) = store.get_task_mut(TaskId::new(1)) {
        first.toggle_complete();
    }
    store
}

/// Adds, then completions, then priority changes, then deletes.
/// Misses are warnings; only malformed arguments fail.
fn build_store(
    add: &[String],
    complete: &[u64],
    priority: &[String],
    delete: &[u64],
) -> Result<TaskStore> {
    let mut store = TaskStore::new();

    for spec in add {
        let new_task = parse_task_spec(spec)?;
        store.add_task(new_task.title, new_task.priority);
    }

    for &id in complete {
        match store.get_task_mut(TaskId::new(id)) {
            Some(task) => {
                task.toggle_complete();
            }
            None => warn!(id, "no task to complete"),
        }
    }

    for change in priority {
        let (id, value) = parse_priority_change(change)?;
        match store.get_task_mut(id) {
            Some(task) => {
                if !task.update_priority(value) {
                    warn!(%id, value, "priority not changed");
                }
            }
            None => warn!(%id, "no task to reprioritize"),
        }
    }

    for &id in delete {
        if !store.delete_task(TaskId::new(id)) {
            warn!(id, "no task to delete");
        }
    }

    Ok(store)
}

fn parse_priority_change(change: &str) -> Result<(TaskId, &str)> {
    let (id, value) = change
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected ID=PRIORITY, got '{}'", change))?;
    let id: u64 = id
        .trim()
        .parse()
        .with_context(|| format!("Invalid task id in '{}'", change))?;
    Ok((TaskId::new(id), value.trim()))
}
