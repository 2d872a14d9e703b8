//! Habit tracker with daily check-offs and streaks.

use super::collection::{Collection, Draft, Placement, Record};
use super::storage::{Storage, StorageKey};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Colors handed to new habits in rotation.
pub const PALETTE: [&str; 6] = ["#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899"];

/// Furthest a streak is counted back.
pub const STREAK_HORIZON_DAYS: i64 = 365;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub completed_dates: BTreeSet<NaiveDate>,
    pub color: String,
}

impl Habit {
    pub fn is_done_on(&self, date: NaiveDate) -> bool {
        self.completed_dates.contains(&date)
    }

    /// Consecutive completed days ending today; an unchecked today does not break it.
    pub fn streak(&self, today: NaiveDate) -> u32 {
        let mut streak = 0;
        for offset in 0..STREAK_HORIZON_DAYS {
            let day = today - Duration::days(offset);
            if self.is_done_on(day) {
                streak += 1;
            } else if offset != 0 {
                break;
            }
        }
        streak
    }
}

impl Record for Habit {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct HabitDraft {
    pub name: String,
    pub color: Option<String>,
}

impl HabitDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
        }
    }
}

impl Draft for HabitDraft {
    type Record = Habit;

    fn into_record(self, id: u64) -> Option<Habit> {
        if self.name.trim().is_empty() {
            return None;
        }
        Some(Habit {
            id,
            name: self.name,
            completed_dates: BTreeSet::new(),
            color: self.color.unwrap_or_else(|| PALETTE[0].to_string()),
        })
    }
}

/// The last seven days ending with `today`, oldest first.
pub fn recent_days(today: NaiveDate) -> [NaiveDate; 7] {
    std::array::from_fn(|i| today - Duration::days(6 - i as i64))
}

/// The persisted habit list. New habits are appended.
pub struct Habits {
    habits: Collection<Habit>,
}

impl Habits {
    pub fn open(storage: &Storage) -> Self {
        Self {
            habits: Collection::open(storage, StorageKey::HABITS, Placement::Back),
        }
    }

    pub fn list(&self) -> &[Habit] {
        self.habits.items()
    }

    pub fn get(&self, id: u64) -> Option<&Habit> {
        self.habits.get(id)
    }

    /// Adds a habit; without an explicit color it gets the next palette entry.
    pub fn add(&mut self, mut draft: HabitDraft) -> Option<Habit> {
        if draft.color.is_none() {
            draft.color = Some(PALETTE[self.habits.len() % PALETTE.len()].to_string());
        }
        self.habits.add(draft)
    }

    /// Checks `date` off, or un-checks it when it was already done.
    pub fn toggle_date(&mut self, id: u64, date: NaiveDate) -> bool {
        self.habits.update(id, |habit| {
            let mut next = habit.clone();
            if !next.completed_dates.remove(&date) {
                next.completed_dates.insert(date);
            }
            next
        })
    }

    pub fn delete(&mut self, id: u64) -> bool {
        self.habits.delete(id)
    }

    pub fn streak(&self, id: u64, today: NaiveDate) -> Option<u32> {
        self.get(id).map(|habit| habit.streak(today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn habit_with(days: &[NaiveDate]) -> Habit {
        Habit {
            id: 1,
            name: "Gym".into(),
            completed_dates: days.iter().copied().collect(),
            color: PALETTE[0].into(),
        }
    }

    #[test]
    fn test_streak_stops_at_first_gap() {
        let today = date(2024, 5, 10);
        let habit = habit_with(&[today, date(2024, 5, 9), date(2024, 5, 7), date(2024, 5, 6)]);
        assert_eq!(habit.streak(today), 2);
    }

    #[test]
    fn test_unchecked_today_keeps_streak() {
        let today = date(2024, 5, 10);
        assert_eq!(habit_with(&[date(2024, 5, 9)]).streak(today), 1);
        assert_eq!(habit_with(&[date(2024, 5, 8)]).streak(today), 0);
        assert_eq!(habit_with(&[]).streak(today), 0);
    }

    #[test]
    fn test_streak_is_capped_at_horizon() {
        let today = date(2024, 12, 31);
        let year: Vec<NaiveDate> = (0..400).map(|i| today - Duration::days(i)).collect();
        assert_eq!(habit_with(&year).streak(today), STREAK_HORIZON_DAYS as u32);
    }

    #[test]
    fn test_recent_days_end_today() {
        let days = recent_days(date(2024, 3, 1));
        assert_eq!(days[0], date(2024, 2, 24));
        assert_eq!(days[6], date(2024, 3, 1));
    }

    #[test]
    fn test_completed_dates_serialize_as_iso_strings() {
        let json = serde_json::to_value(habit_with(&[date(2024, 5, 9)])).unwrap();
        assert_eq!(json["completedDates"], serde_json::json!(["2024-05-09"]));
    }
}
