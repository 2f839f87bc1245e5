use anyhow::Result;
use owo_colors::OwoColorize;
use teamcal_core::{LocalStorage, TaskStore};

use crate::TaskCommand;
use crate::render::Render;

pub fn run(command: TaskCommand, storage: LocalStorage) -> Result<()> {
    let mut store = TaskStore::open(storage)?;

    match command {
        TaskCommand::Add { text } => {
            if let Some(task) = store.add_task(&text.join(" "))? {
                println!("{}", task.render());
            }
        }
        TaskCommand::List => {
            if store.tasks().is_empty() {
                println!("{}", "No tasks".dimmed());
            }
            for task in store.tasks() {
                println!("{}", task.render());
            }
        }
        TaskCommand::Toggle { id } => match store.toggle_task(id)? {
            Some(true) => println!("Completed {}", id),
            Some(false) => println!("Reopened {}", id),
            None => println!("{}", format!("No task with id {}", id).dimmed()),
        },
        TaskCommand::Delete { id } => match store.delete_task(id)? {
            Some(task) => println!("Deleted: {}", task.text),
            None => println!("{}", format!("No task with id {}", id).dimmed()),
        },
    }

    Ok(())
}
