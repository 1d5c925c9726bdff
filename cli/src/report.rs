use anyhow::Result;
use chrono::{DateTime, Local};
use clap::ValueEnum;
use serde::Serialize;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use tasklist_core::{Priority, Task, TaskStats, TaskStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// The four views printed at the end of a run, in print order.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    pub stats: TaskStats,
    pub all_tasks: Vec<&'a Task>,
    pub pending_tasks: Vec<&'a Task>,
    pub high_priority_tasks: Vec<&'a Task>,
}

impl<'a> Report<'a> {
    pub fn from_store(store: &'a TaskStore) -> Self {
        Self {
            stats: store.task_stats(),
            all_tasks: store.tasks().iter().collect(),
            pending_tasks: store.pending_tasks(),
            high_priority_tasks: store.tasks_by_priority(Priority::High),
        }
    }
}

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Done")]
    done: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        let created: DateTime<Local> = DateTime::from(task.created_at());
        Self {
            id: task.id().to_string(),
            title: task.title().to_string(),
            priority: task.priority().to_string(),
            done: if task.is_completed() { "x" } else { " " }.to_string(),
            created: created.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Count")]
    count: usize,
}

pub fn render(report: &Report<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => Ok(render_tables(report)),
    }
}

fn render_tables(report: &Report<'_>) -> String {
    let sections = [
        ("Task Statistics", stats_table(&report.stats)),
        ("All Tasks", task_table(&report.all_tasks)),
        ("Pending Tasks", task_table(&report.pending_tasks)),
        ("High Priority Tasks", task_table(&report.high_priority_tasks)),
    ];

    sections
        .iter()
        .map(|(title, body)| format!("\x1b[1;36m{}\x1b[0m\n{}", title, body))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn stats_table(stats: &TaskStats) -> String {
    let mut rows = vec![
        StatRow {
            metric: "total".to_string(),
            count: stats.total,
        },
        StatRow {
            metric: "completed".to_string(),
            count: stats.completed,
        },
        StatRow {
            metric: "pending".to_string(),
            count: stats.pending,
        },
    ];
    rows.extend(stats.by_priority.iter().map(|(priority, count)| StatRow {
        metric: format!("priority: {}", priority),
        count: *count,
    }));

    style(Table::new(rows))
}

fn task_table(tasks: &[&Task]) -> String {
    if tasks.is_empty() {
        return "(none)".to_string();
    }
    let rows: Vec<TaskRow> = tasks.iter().map(|t| TaskRow::from(*t)).collect();
    style(Table::new(rows))
}

fn style(mut table: Table) -> String {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table.to_string()
}
