use tracing::debug;

use crate::model::stats::TaskStats;
use crate::model::task::{Priority, Task, TaskId};

/// In-memory, insertion-ordered task list.
///
/// Ids come from a counter that only moves forward, so an id is never
/// handed out twice even after the task holding it is deleted.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    pub fn add_task(&mut self, title: impl Into<String>, priority: Priority) -> &Task {
        let id = TaskId::new(self.next_id);
        self.next_id += 1;

        let task = Task::new(id, title.into(), priority);
        debug!(%id, title = task.title(), %priority, "task added");
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    /// Shorthand for [`TaskStore::add_task`] with the default priority.
    pub fn add(&mut self, title: impl Into<String>) -> &Task {
        self.add_task(title, Priority::default())
    }

    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let initial_len = self.tasks.len();
        self.tasks.retain(|t| t.id() != id);
        let removed = self.tasks.len() != initial_len;
        debug!(%id, removed, "delete requested");
        removed
    }

    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    pub fn get_task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id() == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks_by_priority(&self, priority: Priority) -> Vec<&Task> {
        self.filter(|t| t.priority() == priority)
    }

    /// Unknown priority names simply match nothing.
    pub fn tasks_by_priority_str(&self, priority: &str) -> Vec<&Task> {
        match priority.parse::<Priority>() {
            Ok(p) => self.tasks_by_priority(p),
            Err(_) => Vec::new(),
        }
    }

    pub fn completed_tasks(&self) -> Vec<&Task> {
        self.filter(|t| t.is_completed())
    }

    pub fn pending_tasks(&self) -> Vec<&Task> {
        self.filter(|t| !t.is_completed())
    }

    pub fn task_stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    fn filter<F>(&self, predicate: F) -> Vec<&Task>
    where
        F: Fn(&Task) -> bool,
    {
        self.tasks.iter().filter(|t| predicate(t)).collect()
    }
}
