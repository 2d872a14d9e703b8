//! Weekly scheduler for classes, study sessions and meetings.

use super::collection::{Collection, Draft, Placement, Record};
use super::storage::{Storage, StorageKey};
use chrono::{Datelike, Days, Duration, NaiveDate, NaiveTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    #[default]
    Class,
    Study,
    Meeting,
    Other,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::Class => "class",
            EventKind::Study => "study",
            EventKind::Meeting => "meeting",
            EventKind::Other => "other",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u64,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    #[serde(rename = "type", default)]
    pub kind: EventKind,
}

impl Record for Event {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub title: String,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub kind: EventKind,
}

impl Draft for EventDraft {
    type Record = Event;

    fn into_record(self, id: u64) -> Option<Event> {
        if self.title.trim().is_empty() {
            return None;
        }
        Some(Event {
            id,
            title: self.title,
            date: self.date?,
            start_time: self.start_time,
            end_time: self.end_time,
            kind: self.kind,
        })
    }
}

/// The persisted schedule. New events are appended.
pub struct Schedule {
    events: Collection<Event>,
}

impl Schedule {
    pub fn open(storage: &Storage) -> Self {
        Self {
            events: Collection::open(storage, StorageKey::SCHEDULE_EVENTS, Placement::Back),
        }
    }

    pub fn list(&self) -> &[Event] {
        self.events.items()
    }

    pub fn add(&mut self, draft: EventDraft) -> Option<Event> {
        self.events.add(draft)
    }

    pub fn delete(&mut self, id: u64) -> bool {
        self.events.delete(id)
    }

    pub fn on(&self, date: NaiveDate) -> Vec<&Event> {
        events_on(self.list(), date)
    }

    /// Each day of the week containing `date`, with that day's events.
    pub fn week(&self, date: NaiveDate) -> Vec<(NaiveDate, Vec<&Event>)> {
        week_of(date).into_iter().map(|day| (day, self.on(day))).collect()
    }

    pub fn upcoming(&self, today: NaiveDate, days: i64) -> Vec<&Event> {
        upcoming(self.list(), today, days)
    }
}

/// Events on `date`, untimed first, then by start time.
pub fn events_on(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    let mut day: Vec<&Event> = events.iter().filter(|event| event.date == date).collect();
    day.sort_by_key(|event| event.start_time);
    day
}

/// The seven days of the Sunday-to-Saturday week containing `date`, clipped to the calendar.
pub fn week_of(date: NaiveDate) -> [NaiveDate; 7] {
    let back = Days::new(u64::from(date.weekday().num_days_from_sunday()));
    let start = date.checked_sub_days(back).unwrap_or(NaiveDate::MIN);
    std::array::from_fn(|i| start.checked_add_days(Days::new(i as u64)).unwrap_or(NaiveDate::MAX))
}

/// Moves `date` by `weeks` whole weeks (negative goes back). `None` past the end of the calendar.
pub fn shift_week(date: NaiveDate, weeks: i64) -> Option<NaiveDate> {
    let span = Duration::try_days(weeks.checked_mul(7)?)?;
    date.checked_add_signed(span)
}

/// Events dated from `today` through `today + days`, inclusive, in date order.
///
/// A window longer than the calendar runs to its last date; a negative one is empty.
pub fn upcoming(events: &[Event], today: NaiveDate, days: i64) -> Vec<&Event> {
    if days < 0 {
        return Vec::new();
    }
    let until = Duration::try_days(days)
        .and_then(|span| today.checked_add_signed(span))
        .unwrap_or(NaiveDate::MAX);
    let mut soon: Vec<&Event> = events.iter().filter(|event| event.date >= today && event.date <= until).collect();
    soon.sort_by_key(|event| (event.date, event.start_time));
    soon
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(id: u64, on: NaiveDate, start: Option<u32>) -> Event {
        Event {
            id,
            title: format!("event {id}"),
            date: on,
            start_time: start.map(|h| NaiveTime::from_hms_opt(h, 0, 0).unwrap()),
            end_time: None,
            kind: EventKind::Class,
        }
    }

    #[test]
    fn test_week_starts_on_sunday() {
        // 2024-03-06 is a Wednesday
        let week = week_of(date(2024, 3, 6));
        assert_eq!(week[0], date(2024, 3, 3));
        assert_eq!(week[6], date(2024, 3, 9));
        assert_eq!(week_of(date(2024, 3, 3))[0], date(2024, 3, 3));
    }

    #[test]
    fn test_shift_week() {
        assert_eq!(shift_week(date(2024, 3, 6), -1), Some(date(2024, 2, 28)));
        assert_eq!(shift_week(date(2024, 3, 6), 2), Some(date(2024, 3, 20)));
        assert_eq!(shift_week(date(2024, 3, 6), 100_000_000), None);
        assert_eq!(shift_week(date(2024, 3, 6), i64::MIN), None);
    }

    #[test]
    fn test_week_near_calendar_edges() {
        let first = week_of(NaiveDate::MIN);
        assert_eq!(first[0], NaiveDate::MIN);
        let last = week_of(NaiveDate::MAX);
        assert_eq!(last[6], NaiveDate::MAX);
    }

    #[test]
    fn test_events_on_sorted_by_start() {
        let day = date(2024, 3, 6);
        let events = vec![event(1, day, Some(14)), event(2, day, Some(9)), event(3, date(2024, 3, 7), Some(8))];
        let ids: Vec<u64> = events_on(&events, day).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_upcoming_window_is_inclusive() {
        let today = date(2024, 3, 6);
        let events = vec![
            event(1, date(2024, 3, 5), None),
            event(2, today, None),
            event(3, date(2024, 3, 13), None),
            event(4, date(2024, 3, 14), None),
        ];
        let ids: Vec<u64> = upcoming(&events, today, 7).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_oversized_upcoming_window() {
        let today = date(2024, 5, 10);
        let events = vec![event(1, date(2030, 1, 1), None), event(2, date(2024, 5, 9), None)];
        let ids: Vec<u64> = upcoming(&events, today, 1_000_000_000).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1]);
        assert_eq!(upcoming(&events, today, i64::MAX).len(), 1);
        assert!(upcoming(&events, today, i64::MIN).is_empty());
    }

    #[test]
    fn test_draft_requires_title_and_date() {
        let missing_date = EventDraft {
            title: "Lecture".into(),
            ..EventDraft::default()
        };
        assert!(missing_date.into_record(1).is_none());

        let missing_title = EventDraft {
            date: Some(date(2024, 3, 6)),
            ..EventDraft::default()
        };
        assert!(missing_title.into_record(1).is_none());
    }
}
