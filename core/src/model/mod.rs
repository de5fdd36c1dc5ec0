pub mod stats;
pub mod task;

// Re-export
pub use stats::TaskStats;
pub use task::{Priority, Task};
