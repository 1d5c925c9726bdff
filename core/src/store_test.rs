#[cfg(test)]
mod tests {
    use crate::model::task::{Priority, TaskId};
    use crate::store::TaskStore;

    fn ids(tasks: &[&crate::Task]) -> Vec<u64> {
        tasks.iter().map(|t| t.id().get()).collect()
    }

    fn demo_store() -> TaskStore {
        let mut store = TaskStore::new();
        store.add_task("Learn JavaScript", Priority::High);
        store.add_task("Practice coding", Priority::High);
        store.add_task("Read documentation", Priority::Medium);
        store.add_task("Take a break", Priority::Low);
        store
    }

    #[test]
    fn test_add_then_get() {
        let mut store = TaskStore::new();
        let id = store.add("x").id();

        let task = store.get_task(id).unwrap();
        assert_eq!(task.title(), "x");
        assert_eq!(task.priority(), Priority::Medium);
        assert!(!task.is_completed());
        assert_eq!(id, TaskId::new(1));
    }

    #[test]
    fn test_ids_never_reused_after_delete() {
        let mut store = TaskStore::new();
        let first = store.add("a").id();
        let second = store.add("b").id();
        assert!(store.delete_task(second));
        assert!(store.delete_task(first));
        assert!(store.is_empty());

        let third = store.add("c").id();
        assert!(third > second);
        assert_eq!(third, TaskId::new(3));
    }

    #[test]
    fn test_delete_missing_id_leaves_sequence_unchanged() {
        let mut store = demo_store();
        let before: Vec<_> = store.tasks().to_vec();

        assert!(!store.delete_task(TaskId::new(99)));
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_delete_preserves_relative_order() {
        let mut store = demo_store();
        assert!(store.delete_task(TaskId::new(2)));
        assert!(!store.delete_task(TaskId::new(2)));

        let remaining: Vec<&str> = store.tasks().iter().map(|t| t.title()).collect();
        assert_eq!(remaining, vec!["Learn JavaScript", "Read documentation", "Take a break"]);
    }

    #[test]
    fn test_get_missing_is_none() {
        let mut store = demo_store();
        assert!(store.get_task(TaskId::new(0)).is_none());
        assert!(store.get_task_mut(TaskId::new(5)).is_none());
    }

    #[test]
    fn test_demo_scenario_stats() {
        let mut store = demo_store();
        if let Some(task) = store.get_task_mut(TaskId::new(1)) {
            task.toggle_complete();
        }

        let stats = store.task_stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 3);
        assert_eq!(stats.count_for(Priority::High), 2);
        assert_eq!(stats.count_for(Priority::Medium), 1);
        assert_eq!(stats.count_for(Priority::Low), 1);

        assert_eq!(ids(&store.tasks_by_priority(Priority::High)), vec![1, 2]);
        assert_eq!(ids(&store.pending_tasks()), vec![2, 3, 4]);
        assert_eq!(ids(&store.completed_tasks()), vec![1]);
    }

    #[test]
    fn test_priority_query_by_name() {
        let store = demo_store();
        assert_eq!(ids(&store.tasks_by_priority_str("high")), vec![1, 2]);
        assert!(store.tasks_by_priority_str("urgent").is_empty());
        assert!(store.tasks_by_priority_str("High").is_empty());
    }

    #[test]
    fn test_queries_reflect_latest_mutations() {
        let mut store = demo_store();
        assert!(store.tasks_by_priority(Priority::Low).len() == 1);

        let task = store.get_task_mut(TaskId::new(3)).unwrap();
        assert!(task.update_priority("low"));
        assert!(!task.update_priority("invalid-value"));

        assert_eq!(ids(&store.tasks_by_priority(Priority::Low)), vec![3, 4]);
        assert_eq!(store.task_stats().count_for(Priority::Medium), 0);
        assert!(!store.task_stats().by_priority.contains_key(&Priority::Medium));
    }

    #[test]
    fn test_completed_and_pending_partition_store() {
        let mut store = TaskStore::new();
        for i in 0..10 {
            store.add(format!("task {}", i));
        }
        for id in [2, 3, 5, 7] {
            store.get_task_mut(TaskId::new(id)).unwrap().toggle_complete();
        }
        store.get_task_mut(TaskId::new(3)).unwrap().toggle_complete();
        store.delete_task(TaskId::new(5));
        store.delete_task(TaskId::new(6));
        store.add("late");

        let completed = store.completed_tasks();
        let pending = store.pending_tasks();
        assert_eq!(completed.len() + pending.len(), store.len());
        assert!(completed.iter().all(|c| !pending.iter().any(|p| p.id() == c.id())));

        let mut merged = ids(&completed);
        merged.extend(ids(&pending));
        merged.sort_unstable();
        let all: Vec<u64> = store.tasks().iter().map(|t| t.id().get()).collect();
        assert_eq!(merged, all);

        let stats = store.task_stats();
        assert_eq!(stats.total, stats.completed + stats.pending);
        assert_eq!(ids(&completed), vec![2, 7]);
    }
}
