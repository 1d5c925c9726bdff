use serde::Serialize;
use std::collections::BTreeMap;

use crate::model::task::{Priority, Task};

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Only priorities held by at least one task appear here.
    pub by_priority: BTreeMap<Priority, usize>,
}

impl TaskStats {
    pub fn from_tasks<'a, I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut stats = TaskStats::default();
        for task in tasks {
            stats.add(task);
        }
        stats.pending = stats.total - stats.completed;
        stats
    }

    fn add(&mut self, task: &Task) {
        self.total += 1;
        if task.is_completed() {
            self.completed += 1;
        }
        *self.by_priority.entry(task.priority()).or_default() += 1;
    }

    pub fn count_for(&self, priority: Priority) -> usize {
        self.by_priority.get(&priority).copied().unwrap_or(0)
    }
}
