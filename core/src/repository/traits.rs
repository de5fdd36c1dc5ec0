use crate::error::StoreError;
use crate::model::task::Task;

/// Whole-set persistence boundary. The backing store is always read and
/// rewritten as one unit; there is no partial update.
pub trait TaskStore {
    /// Every persisted task, in insertion order. A store that has never
    /// been written is an empty sequence, not an error.
    fn load(&self) -> Result<Vec<Task>, StoreError>;

    /// Replaces the persisted state with exactly `tasks`.
    fn save(&self, tasks: &[Task]) -> Result<(), StoreError>;
}
