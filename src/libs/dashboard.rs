//! Cross-module summary counters.
//!
//! The dashboard owns no data. It reads the raw collections of the todo,
//! money, schedule, habit and GPA modules straight from storage and derives
//! its counters from them. A mounted [`Dashboard`] subscribes to those keys
//! and recomputes inside the write's notification, so a read right after any
//! module write already sees fresh numbers.
//!
//! A missing key counts as an empty collection. A key holding malformed JSON
//! also counts as empty, without affecting the other keys.

use super::bus::Subscription;
use super::gpa::{self, Course, Weighting};
use super::habits::Habit;
use super::money::{self, Transaction};
use super::schedule::{self, Event};
use super::storage::{Storage, StorageKey};
use super::todo::{self, Task};
use chrono::{Local, NaiveDate};
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const DEFAULT_UPCOMING_DAYS: i64 = 7;

/// Keys the dashboard derives from.
pub const WATCHED_KEYS: [StorageKey; 6] = [
    StorageKey::TODOS,
    StorageKey::TRANSACTIONS,
    StorageKey::SCHEDULE_EVENTS,
    StorageKey::HABITS,
    StorageKey::GPA_COURSES,
    StorageKey::GPA_WEIGHTED,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub active_tasks: usize,
    pub balance: f64,
    pub events: usize,
    pub upcoming_events: usize,
    pub habits: usize,
    pub gpa: String,
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self {
            active_tasks: 0,
            balance: 0.0,
            events: 0,
            upcoming_events: 0,
            habits: 0,
            gpa: gpa::gpa(&[], Weighting::Credits),
        }
    }
}

/// Reads the watched keys and derives fresh counters.
pub fn compute(storage: &Storage, today: NaiveDate, upcoming_days: i64) -> DashboardStats {
    let tasks: Vec<Task> = storage.get(&StorageKey::TODOS, Vec::new());
    let transactions: Vec<Transaction> = storage.get(&StorageKey::TRANSACTIONS, Vec::new());
    let events: Vec<Event> = storage.get(&StorageKey::SCHEDULE_EVENTS, Vec::new());
    let habits: Vec<Habit> = storage.get(&StorageKey::HABITS, Vec::new());
    let courses: Vec<Course> = storage.get(&StorageKey::GPA_COURSES, Vec::new());
    let weighted: bool = storage.get(&StorageKey::GPA_WEIGHTED, true);

    DashboardStats {
        active_tasks: todo::active_count(&tasks),
        balance: money::balance(&transactions),
        events: events.len(),
        upcoming_events: schedule::upcoming(&events, today, upcoming_days).len(),
        habits: habits.len(),
        gpa: gpa::gpa(&courses, Weighting::from_flag(weighted)),
    }
}

type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// Live counters kept current by change notifications.
pub struct Dashboard {
    stats: Arc<Mutex<DashboardStats>>,
    refreshes: Arc<AtomicUsize>,
    _subscriptions: Vec<Subscription>,
}

impl Dashboard {
    pub fn mount(storage: &Storage, upcoming_days: i64) -> Self {
        Self::mount_with_clock(storage, upcoming_days, || Local::now().date_naive())
    }

    /// Like [`Dashboard::mount`] with a custom source for "today".
    pub fn mount_with_clock<C>(storage: &Storage, upcoming_days: i64, today: C) -> Self
    where
        C: Fn() -> NaiveDate + Send + Sync + 'static,
    {
        let clock: Clock = Arc::new(today);
        let stats = Arc::new(Mutex::new(compute(storage, clock(), upcoming_days)));
        let refreshes = Arc::new(AtomicUsize::new(1));
        let bus = storage.bus().clone();

        let subscriptions = WATCHED_KEYS
            .iter()
            .map(|key| {
                let storage = storage.clone();
                let clock = Arc::clone(&clock);
                let stats = Arc::clone(&stats);
                let refreshes = Arc::clone(&refreshes);
                bus.subscribe(key.clone(), move |_| {
                    let fresh = compute(&storage, clock(), upcoming_days);
                    *stats.lock() = fresh;
                    refreshes.fetch_add(1, Ordering::SeqCst);
                })
            })
            .collect();

        Self {
            stats,
            refreshes,
            _subscriptions: subscriptions,
        }
    }

    pub fn stats(&self) -> DashboardStats {
        self.stats.lock().clone()
    }

    /// How many times the counters have been computed, including the initial mount.
    pub fn refreshes(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }
}
