//! Todo list: tasks with due dates, priorities and reminders.

use super::collection::{Collection, Draft, Placement, Record};
use super::storage::{Storage, StorageKey};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_time: Option<NaiveTime>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub reminder_enabled: bool,
}

impl Task {
    /// Moment the task is due; a date without a time means the start of that day.
    pub fn due_at(&self) -> Option<NaiveDateTime> {
        self.due_date.map(|date| date.and_time(self.due_time.unwrap_or(NaiveTime::MIN)))
    }
}

impl Record for Task {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<NaiveTime>,
    pub priority: Priority,
    pub reminder_enabled: bool,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            due_date: None,
            due_time: None,
            priority: Priority::Medium,
            reminder_enabled: true,
        }
    }
}

impl Draft for TaskDraft {
    type Record = Task;

    fn into_record(self, id: u64) -> Option<Task> {
        if self.title.trim().is_empty() {
            return None;
        }
        Some(Task {
            id,
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            due_time: self.due_time,
            priority: self.priority,
            completed: false,
            reminder_enabled: self.reminder_enabled,
        })
    }
}

/// The persisted todo list. New tasks go first.
pub struct Todos {
    tasks: Collection<Task>,
}

impl Todos {
    pub fn open(storage: &Storage) -> Self {
        Self {
            tasks: Collection::open(storage, StorageKey::TODOS, Placement::Front),
        }
    }

    pub fn list(&self) -> &[Task] {
        self.tasks.items()
    }

    /// The first `limit` tasks, as shown in the compact dashboard widget.
    pub fn compact(&self, limit: usize) -> &[Task] {
        let tasks = self.list();
        &tasks[..tasks.len().min(limit)]
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn add(&mut self, draft: TaskDraft) -> Option<Task> {
        self.tasks.add(draft)
    }

    pub fn toggle_completed(&mut self, id: u64) -> bool {
        self.tasks.update(id, |task| Task {
            completed: !task.completed,
            ..task.clone()
        })
    }

    pub fn toggle_reminder(&mut self, id: u64) -> bool {
        self.tasks.update(id, |task| Task {
            reminder_enabled: !task.reminder_enabled,
            ..task.clone()
        })
    }

    pub fn delete(&mut self, id: u64) -> bool {
        self.tasks.delete(id)
    }

    pub fn active_count(&self) -> usize {
        active_count(self.list())
    }
}

pub fn active_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|task| !task.completed).count()
}

/// A reminder window of `minutes`, saturating at the longest representable span.
pub fn lookahead(minutes: i64) -> Duration {
    Duration::try_minutes(minutes).unwrap_or(if minutes < 0 { Duration::MIN } else { Duration::MAX })
}

/// Open tasks with reminders on that fall due between `now` and `now + lookahead`, soonest first.
pub fn due_reminders(tasks: &[Task], now: NaiveDateTime, lookahead: Duration) -> Vec<&Task> {
    if lookahead < Duration::zero() {
        return Vec::new();
    }
    let horizon = now.checked_add_signed(lookahead).unwrap_or(NaiveDateTime::MAX);
    let mut due: Vec<&Task> = tasks
        .iter()
        .filter(|task| !task.completed && task.reminder_enabled)
        .filter(|task| task.due_at().is_some_and(|at| at >= now && at <= horizon))
        .collect();
    due.sort_by_key(|task| task.due_at());
    due
}

/// Tasks ordered by priority (high first), keeping insertion order among equals.
pub fn by_priority(tasks: &[Task]) -> Vec<&Task> {
    let mut ordered: Vec<&Task> = tasks.iter().collect();
    ordered.sort_by(|a, b| b.priority.cmp(&a.priority));
    ordered
}
