//! Task list with write-through persistence.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::constants::TASKS_KEY;
use crate::error::TeamCalResult;
use crate::storage::LocalStorage;

pub type TaskId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

/// Ordered task list, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList(Vec<Task>);

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        TaskList(tasks)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.0.iter().find(|t| t.id == id)
    }

    /// Prepend a task. Returns `None` (and changes nothing) when the trimmed
    /// text is empty.
    pub fn add(&mut self, text: &str, now_millis: u64) -> Option<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let task = Task {
            id: self.fresh_id(now_millis),
            text: text.to_string(),
            completed: false,
        };
        self.0.insert(0, task);
        self.0.first()
    }

    /// Flip `completed`. Returns the new value, or `None` if no task matched.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        let task = self.0.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        Some(task.completed)
    }

    /// Remove the task. Returns it, or `None` if no task matched.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let pos = self.0.iter().position(|t| t.id == id)?;
        Some(self.0.remove(pos))
    }

    // Timestamp-derived, bumped past the largest existing id so rapid adds
    // stay unique and increasing.
    fn fresh_id(&self, now_millis: u64) -> TaskId {
        match self.0.iter().map(|t| t.id).max() {
            Some(max) if now_millis <= max => max + 1,
            _ => now_millis,
        }
    }
}

/// Task list backed by local storage. Every mutation is written through.
pub struct TaskStore {
    storage: LocalStorage,
    list: TaskList,
}

impl TaskStore {
    pub fn open(storage: LocalStorage) -> TeamCalResult<Self> {
        let list = storage.get_item::<TaskList>(TASKS_KEY)?.unwrap_or_default();
        Ok(TaskStore { storage, list })
    }

    pub fn tasks(&self) -> &[Task] {
        self.list.tasks()
    }

    pub fn add_task(&mut self, text: &str) -> TeamCalResult<Option<Task>> {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let Some(task) = self.list.add(text, now).cloned() else {
            return Ok(None);
        };
        self.persist()?;
        tracing::info!(id = task.id, "task added");
        Ok(Some(task))
    }

    pub fn toggle_task(&mut self, id: TaskId) -> TeamCalResult<Option<bool>> {
        let toggled = self.list.toggle(id);
        if toggled.is_some() {
            self.persist()?;
        }
        Ok(toggled)
    }

    pub fn delete_task(&mut self, id: TaskId) -> TeamCalResult<Option<Task>> {
        let removed = self.list.delete(id);
        if removed.is_some() {
            self.persist()?;
        }
        Ok(removed)
    }

    fn persist(&self) -> TeamCalResult<()> {
        self.storage.set_item(TASKS_KEY, &self.list)
    }
}
