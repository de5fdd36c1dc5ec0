use std::cmp::Reverse;

use tracing::debug;

use crate::error::TaskError;
use crate::model::stats::TaskStats;
use crate::model::task::Task;
use crate::repository::traits::TaskStore;

/// The operations of the tool, layered over any [`TaskStore`]. Every call
/// loads the store fresh and mutating calls write the whole sequence
/// back, so operations never share in-memory state.
pub struct TaskService<S: TaskStore> {
    store: S,
}

impl<S: TaskStore> TaskService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Appends an already-validated task and persists the full sequence.
    pub fn add(&self, task: Task) -> Result<Task, TaskError> {
        let mut tasks = self.store.load()?;
        tasks.push(task.clone());
        self.store.save(&tasks)?;
        debug!(description = %task.description, "task added");
        Ok(task)
    }

    /// Tasks ordered by priority rank, highest first; equal ranks keep
    /// their insertion order. An empty vec means an empty store.
    pub fn list_by_priority(&self) -> Result<Vec<Task>, TaskError> {
        let tasks = self.store.load()?;
        let order = priority_order(&tasks);
        Ok(order.into_iter().map(|i| tasks[i].clone()).collect())
    }

    /// Tasks ordered by due date, earliest first, stable on ties. Fails
    /// when any task lacks a due date; a partial listing would silently
    /// hide the dateless ones.
    pub fn list_by_due_date(&self) -> Result<Vec<Task>, TaskError> {
        let mut tasks = self.store.load()?;
        let missing = tasks.iter().filter(|t| t.due_date.is_none()).count();
        if missing > 0 {
            return Err(TaskError::MissingDueDate {
                missing,
                total: tasks.len(),
            });
        }
        tasks.sort_by_key(|t| t.due_date);
        Ok(tasks)
    }

    /// Removes the task shown at `position` (1-based) in the priority
    /// listing. The position is resolved against that view, never applied
    /// to the insertion order directly.
    pub fn remove(&self, position: usize) -> Result<Task, TaskError> {
        let mut tasks = self.store.load()?;
        let order = priority_order(&tasks);
        if position < 1 || position > order.len() {
            return Err(TaskError::OutOfRange {
                position,
                count: order.len(),
            });
        }
        let removed = tasks.remove(order[position - 1]);
        self.store.save(&tasks)?;
        debug!(description = %removed.description, "task removed");
        Ok(removed)
    }

    /// Aggregate statistics, or `None` for an empty store.
    pub fn statistics(&self) -> Result<Option<TaskStats>, TaskError> {
        let tasks = self.store.load()?;
        Ok(TaskStats::from_tasks(&tasks))
    }
}

// Standalone function for the pure ordering logic

/// Indices of `tasks` in the priority listing's display order: rank
/// descending, insertion order on ties. Listing and removal share this,
/// so a displayed position always resolves to the same task.
pub fn priority_order(tasks: &[Task]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..tasks.len()).collect();
    order.sort_by_key(|&i| Reverse(tasks[i].priority.rank()));
    order
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::task::Priority;
    use crate::repository::memory::MemoryStore;

    fn task(description: &str, minutes: u32, priority: Priority) -> Task {
        Task::new(description.to_string(), minutes, priority, None)
    }

    fn dated(description: &str, priority: Priority, date: (i32, u32, u32)) -> Task {
        Task::new(
            description.to_string(),
            60,
            priority,
            NaiveDate::from_ymd_opt(date.0, date.1, date.2),
        )
    }

    fn descriptions(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.description.as_str()).collect()
    }

    #[test]
    fn add_persists_to_the_store() {
        let store = MemoryStore::new();
        let service = TaskService::new(store.clone());
        service.add(task("primeira", 30, Priority::Low)).unwrap();
        service.add(task("segunda", 45, Priority::High)).unwrap();
        let stored = store.load().unwrap();
        assert_eq!(descriptions(&stored), vec!["primeira", "segunda"]);
    }

    #[test]
    fn priority_listing_ranks_high_first_and_keeps_ties_stable() {
        let store = MemoryStore::with_tasks(vec![
            task("a", 10, Priority::Low),
            task("b", 10, Priority::High),
            task("c", 10, Priority::Medium),
            task("d", 10, Priority::High),
        ]);
        let service = TaskService::new(store);
        let listed = service.list_by_priority().unwrap();
        assert_eq!(descriptions(&listed), vec!["b", "d", "c", "a"]);
    }

    #[test]
    fn priority_listing_of_an_empty_store_is_empty() {
        let service = TaskService::new(MemoryStore::new());
        assert!(service.list_by_priority().unwrap().is_empty());
    }

    #[test]
    fn date_listing_sorts_ascending_and_keeps_ties_stable() {
        let store = MemoryStore::with_tasks(vec![
            dated("x", Priority::Low, (2027, 1, 5)),
            dated("y", Priority::High, (2026, 12, 31)),
            dated("z", Priority::Medium, (2027, 1, 5)),
        ]);
        let service = TaskService::new(store);
        let listed = service.list_by_due_date().unwrap();
        assert_eq!(descriptions(&listed), vec!["y", "x", "z"]);
    }

    #[test]
    fn date_listing_requires_a_date_on_every_task() {
        let store = MemoryStore::with_tasks(vec![
            dated("com data", Priority::High, (2027, 1, 5)),
            task("sem data", 20, Priority::Low),
        ]);
        let service = TaskService::new(store);
        assert!(matches!(
            service.list_by_due_date(),
            Err(TaskError::MissingDueDate {
                missing: 1,
                total: 2
            })
        ));
    }

    #[test]
    fn remove_resolves_positions_against_the_priority_listing() {
        // Insertion order differs from display order: the priority
        // listing shows b, c, a.
        let store = MemoryStore::with_tasks(vec![
            task("a", 10, Priority::Low),
            task("b", 10, Priority::High),
            task("c", 10, Priority::Medium),
        ]);
        let service = TaskService::new(store.clone());
        let removed = service.remove(1).unwrap();
        assert_eq!(removed.description, "b");
        // The survivors keep their insertion order.
        assert_eq!(descriptions(&store.load().unwrap()), vec!["a", "c"]);
    }

    #[test]
    fn remove_of_the_last_position_works() {
        let store = MemoryStore::with_tasks(vec![
            task("a", 10, Priority::Low),
            task("b", 10, Priority::High),
            task("c", 10, Priority::Medium),
        ]);
        let service = TaskService::new(store.clone());
        let removed = service.remove(3).unwrap();
        assert_eq!(removed.description, "a");
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn remove_out_of_range_leaves_the_store_untouched() {
        let tasks = vec![
            task("a", 10, Priority::Low),
            task("b", 10, Priority::High),
            task("c", 10, Priority::Medium),
        ];
        let store = MemoryStore::with_tasks(tasks.clone());
        let service = TaskService::new(store.clone());

        assert!(matches!(
            service.remove(0),
            Err(TaskError::OutOfRange { position: 0, count: 3 })
        ));
        assert!(matches!(
            service.remove(4),
            Err(TaskError::OutOfRange { position: 4, count: 3 })
        ));
        assert_eq!(store.load().unwrap(), tasks);
    }

    #[test]
    fn remove_from_an_empty_store_is_out_of_range() {
        let service = TaskService::new(MemoryStore::new());
        assert!(matches!(
            service.remove(1),
            Err(TaskError::OutOfRange { position: 1, count: 0 })
        ));
    }

    #[test]
    fn statistics_signal_an_empty_store() {
        let service = TaskService::new(MemoryStore::new());
        assert_eq!(service.statistics().unwrap(), None);
    }

    #[test]
    fn statistics_aggregate_durations() {
        let store = MemoryStore::with_tasks(vec![
            task("a", 60, Priority::High),
            task("b", 90, Priority::Medium),
            task("c", 30, Priority::High),
        ]);
        let service = TaskService::new(store);
        let stats = service.statistics().unwrap().unwrap();
        assert_eq!(stats.total_tasks, 3);
        assert_eq!(stats.total_minutes, 180);
        assert_eq!(stats.mean_minutes, 60.0);
        assert_eq!(stats.priorities, vec![Priority::High, Priority::Medium]);
    }

    #[test]
    fn priority_order_is_identity_for_equal_ranks() {
        let tasks = vec![
            task("a", 10, Priority::Medium),
            task("b", 10, Priority::Medium),
            task("c", 10, Priority::Medium),
        ];
        assert_eq!(priority_order(&tasks), vec![0, 1, 2]);
    }
}
