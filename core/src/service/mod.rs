pub mod task_service;

// Re-export
pub use task_service::TaskService;
