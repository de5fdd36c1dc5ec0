use tabled::settings::Style;
use tabled::{Table, Tabled};
use tarefas_core::time::hours_minutes;
use tarefas_core::{Task, TaskStats, DATE_FORMAT};

// Helper struct for Table Row
#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Due")]
    due: String,
}

/// Prints tasks in display order with 1-based positions, the numbers
/// `remove` accepts when the order is the priority listing.
pub fn task_table(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }
    let rows: Vec<TaskRow> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| TaskRow {
            position: i + 1,
            description: task.description.clone(),
            duration: format_minutes(u64::from(task.estimated_minutes)),
            priority: task.priority.to_string(),
            due: task
                .due_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::modern());
    println!("{}", table);
}

pub fn confirm_added(task: &Task) {
    println!("Task added: {}", task.description);
    println!("  Duration: {}", format_minutes(u64::from(task.estimated_minutes)));
    println!("  Priority: {}", task.priority);
    if let Some(due) = task.due_date {
        println!("  Due: {}", due.format(DATE_FORMAT));
    }
}

pub fn confirm_removed(task: &Task) {
    println!("Task removed: {}", task.description);
}

pub fn statistics(stats: Option<&TaskStats>) {
    let Some(stats) = stats else {
        println!("No statistics available, the task list is empty.");
        return;
    };
    let priorities: Vec<String> = stats.priorities.iter().map(|p| p.to_string()).collect();
    println!("Total tasks:          {}", stats.total_tasks);
    println!("Total estimated time: {}", format_minutes(stats.total_minutes));
    println!("Mean per task:        {:.1} min", stats.mean_minutes);
    println!("Priorities present:   {}", priorities.join(", "));
}

fn format_minutes(total: u64) -> String {
    let (hours, minutes) = hours_minutes(total);
    format!("{}h {}m", hours, minutes)
}
