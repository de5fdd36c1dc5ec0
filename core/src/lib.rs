pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;

pub use error::{StoreError, TaskError, ValidationError};
pub use input::{parse_description, parse_position};
pub use model::stats::TaskStats;
pub use model::task::{Priority, Task};
pub use repository::{JsonFileStore, MemoryStore, TaskStore};
pub use service::task_service::{priority_order, TaskService};
pub use time::{parse_due_date, parse_duration, DATE_FORMAT};
