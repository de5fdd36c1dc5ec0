use std::io::{self, Write};

use anyhow::Result;
use chrono::Local;
use tarefas_core::{
    parse_description, parse_due_date, parse_duration, parse_position, Priority, Task, TaskError,
    TaskService, TaskStore, ValidationError,
};

use crate::render;

/// Runs the numbered menu until the user quits or stdin closes. Prompts
/// re-ask on invalid input; the single-attempt accept/reject rules live
/// in the core predicates.
pub fn run<S: TaskStore>(service: &TaskService<S>) -> Result<()> {
    let mut lines = io::stdin().lines();
    loop {
        println!();
        println!("=== tarefas ===");
        println!("1) Add task");
        println!("2) List by priority");
        println!("3) List by due date");
        println!("4) Remove task");
        println!("5) Statistics");
        println!("6) Quit");
        let Some(choice) = prompt(&mut lines, "Choose an option: ")? else {
            break;
        };
        match choice.trim() {
            "1" => {
                if add_flow(service, &mut lines)?.is_none() {
                    break;
                }
            }
            "2" => render::task_table(&service.list_by_priority()?),
            "3" => match service.list_by_due_date() {
                Ok(tasks) => render::task_table(&tasks),
                Err(err @ TaskError::MissingDueDate { .. }) => println!("{err}"),
                Err(err) => return Err(err.into()),
            },
            "4" => {
                if remove_flow(service, &mut lines)?.is_none() {
                    break;
                }
            }
            "5" => render::statistics(service.statistics()?.as_ref()),
            "6" => break,
            other => println!("Unknown option {other:?}, try again."),
        }
    }
    Ok(())
}

type InputLines<'a> = io::Lines<io::StdinLock<'a>>;

fn prompt(lines: &mut InputLines<'_>, label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

/// Prompts until `parse` accepts the input, echoing each rejection.
/// `None` means stdin closed mid-flow.
fn prompt_until<T>(
    lines: &mut InputLines<'_>,
    label: &str,
    parse: impl Fn(&str) -> Result<T, ValidationError>,
) -> Result<Option<T>> {
    loop {
        let Some(raw) = prompt(lines, label)? else {
            return Ok(None);
        };
        match parse(&raw) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => println!("{err}"),
        }
    }
}

fn add_flow<S: TaskStore>(
    service: &TaskService<S>,
    lines: &mut InputLines<'_>,
) -> Result<Option<()>> {
    let Some(description) = prompt_until(lines, "Description: ", parse_description)? else {
        return Ok(None);
    };
    let Some(estimated_minutes) =
        prompt_until(lines, "Duration (hh:mm or hours): ", parse_duration)?
    else {
        return Ok(None);
    };
    let Some(priority) = prompt_until(lines, "Priority (Alta, Média, Baixa): ", |raw| {
        raw.parse::<Priority>()
    })?
    else {
        return Ok(None);
    };
    let today = Local::now().date_naive();
    let Some(due_date) = prompt_until(lines, "Due date (dd/mm/yyyy, blank for none): ", |raw| {
        if raw.trim().is_empty() {
            Ok(None)
        } else {
            parse_due_date(raw, today).map(Some)
        }
    })?
    else {
        return Ok(None);
    };

    let task = service.add(Task::new(description, estimated_minutes, priority, due_date))?;
    render::confirm_added(&task);
    Ok(Some(()))
}

fn remove_flow<S: TaskStore>(
    service: &TaskService<S>,
    lines: &mut InputLines<'_>,
) -> Result<Option<()>> {
    let tasks = service.list_by_priority()?;
    render::task_table(&tasks);
    if tasks.is_empty() {
        return Ok(Some(()));
    }
    loop {
        let Some(position) = prompt_until(lines, "Task number to remove: ", parse_position)? else {
            return Ok(None);
        };
        match service.remove(position) {
            Ok(removed) => {
                render::confirm_removed(&removed);
                return Ok(Some(()));
            }
            Err(err @ TaskError::OutOfRange { .. }) => println!("{err}"),
            Err(err) => return Err(err.into()),
        }
    }
}
