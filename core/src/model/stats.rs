use crate::model::task::{Priority, Task};

/// Aggregate figures over the whole store.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskStats {
    pub total_tasks: usize,
    pub total_minutes: u64,
    pub mean_minutes: f64,
    /// Distinct priorities present, highest rank first.
    pub priorities: Vec<Priority>,
}

impl TaskStats {
    /// Returns `None` for an empty store, the explicit "nothing to
    /// summarize" signal, instead of a row of zeros.
    pub fn from_tasks(tasks: &[Task]) -> Option<Self> {
        if tasks.is_empty() {
            return None;
        }
        let total_minutes: u64 = tasks
            .iter()
            .map(|task| u64::from(task.estimated_minutes))
            .sum();
        let mean_minutes = total_minutes as f64 / tasks.len() as f64;
        let priorities = Priority::ALL
            .into_iter()
            .filter(|level| tasks.iter().any(|task| task.priority == *level))
            .collect();
        Some(TaskStats {
            total_tasks: tasks.len(),
            total_minutes,
            mean_minutes,
            priorities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(minutes: u32, priority: Priority) -> Task {
        Task::new(format!("{minutes} min"), minutes, priority, None)
    }

    #[test]
    fn empty_store_yields_no_stats() {
        assert_eq!(TaskStats::from_tasks(&[]), None);
    }

    #[test]
    fn totals_and_mean_over_three_tasks() {
        let tasks = vec![
            task(60, Priority::High),
            task(90, Priority::Low),
            task(30, Priority::High),
        ];
        let stats = TaskStats::from_tasks(&tasks).unwrap();
        assert_eq!(stats.total_tasks, 3);
        assert_eq!(stats.total_minutes, 180);
        assert_eq!(stats.mean_minutes, 60.0);
    }

    #[test]
    fn priorities_are_distinct_and_rank_ordered() {
        let tasks = vec![
            task(10, Priority::Low),
            task(20, Priority::High),
            task(30, Priority::Low),
        ];
        let stats = TaskStats::from_tasks(&tasks).unwrap();
        assert_eq!(stats.priorities, vec![Priority::High, Priority::Low]);
    }
}
