use std::cell::RefCell;
use std::rc::Rc;

use crate::error::StoreError;
use crate::model::task::Task;
use crate::repository::traits::TaskStore;

/// In-memory task store, the substitute for [`JsonFileStore`] in tests
/// and embedded use. Clones share the same backing storage, mirroring
/// how file store clones share the same file.
///
/// [`JsonFileStore`]: crate::repository::file::JsonFileStore
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tasks: Rc<RefCell<Vec<Task>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with `tasks`.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Rc::new(RefCell::new(tasks)),
        }
    }
}

impl TaskStore for MemoryStore {
    fn load(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.tasks.borrow().clone())
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        *self.tasks.borrow_mut() = tasks.to_vec();
        Ok(())
    }
}
