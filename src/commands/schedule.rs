use crate::{
    libs::{
        config::Config,
        formatter::format_date,
        messages::Message,
        schedule::{self, EventDraft, EventKind, Schedule},
        storage::Storage,
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveTime};
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ScheduleArgs {
    #[command(subcommand)]
    command: Option<ScheduleCommand>,
}

#[derive(Debug, Subcommand)]
enum ScheduleCommand {
    /// Add an event
    Add {
        title: String,
        /// Event date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Start time (HH:MM)
        #[arg(long)]
        start: Option<NaiveTime>,
        /// End time (HH:MM)
        #[arg(long)]
        end: Option<NaiveTime>,
        #[arg(short, long, value_enum, default_value_t = EventKind::Class)]
        kind: EventKind,
    },
    /// List all events
    List,
    /// Events on one day, today by default
    Day { date: Option<NaiveDate> },
    /// The Sunday-to-Saturday week around a date
    Week {
        date: Option<NaiveDate>,
        /// Weeks to move forward (negative goes back)
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i64,
    },
    /// Events in the coming days
    Upcoming {
        #[arg(short, long)]
        days: Option<i64>,
    },
    /// Delete an event
    Delete { id: u64 },
}

pub fn cmd(args: ScheduleArgs, storage: &Storage) -> Result<()> {
    let mut schedule = Schedule::open(storage);
    let today = Local::now().date_naive();

    match args.command {
        Some(ScheduleCommand::Add {
            title,
            date,
            start,
            end,
            kind,
        }) => {
            let draft = EventDraft {
                title,
                date: Some(date),
                start_time: start,
                end_time: end,
                kind,
            };
            match schedule.add(draft) {
                Some(event) => msg_success!(Message::EventAdded(event.title)),
                None => msg_warning!(Message::EventInvalid),
            }
            Ok(())
        }
        Some(ScheduleCommand::List) => list(&schedule),
        Some(ScheduleCommand::Day { date }) => {
            let date = date.unwrap_or(today);
            let events = schedule.on(date);
            if events.is_empty() {
                msg_info!(Message::NoEvents);
                return Ok(());
            }
            msg_print!(Message::EventsOnHeader(format_date(Some(date))), true);
            View::events(events)
        }
        Some(ScheduleCommand::Week { date, offset }) => {
            let Some(anchor) = schedule::shift_week(date.unwrap_or(today), offset) else {
                msg_bail_anyhow!(Message::DateOutOfRange(offset));
            };
            let week = schedule.week(anchor);
            if let (Some((first, _)), Some((last, _))) = (week.first(), week.last()) {
                msg_print!(Message::WeekHeader(format_date(Some(*first)), format_date(Some(*last))), true);
            }
            View::week(&week)
        }
        Some(ScheduleCommand::Upcoming { days }) => {
            let days = match days {
                Some(days) => days,
                None => Config::read()?.dashboard().upcoming_days,
            };
            let events = schedule.upcoming(today, days);
            if events.is_empty() {
                msg_info!(Message::NoEvents);
                return Ok(());
            }
            msg_print!(Message::UpcomingHeader(days), true);
            View::events(events)
        }
        Some(ScheduleCommand::Delete { id }) => {
            if schedule.delete(id) {
                msg_success!(Message::EventDeleted(id));
            } else {
                msg_info!(Message::EventNotFound(id));
            }
            Ok(())
        }
        None => list(&schedule),
    }
}

/// Renders the week around today; used by the shell.
pub fn show(storage: &Storage) -> Result<()> {
    let schedule = Schedule::open(storage);
    View::week(&schedule.week(Local::now().date_naive()))
}

fn list(schedule: &Schedule) -> Result<()> {
    if schedule.list().is_empty() {
        msg_info!(Message::NoEvents);
        return Ok(());
    }

    msg_print!(Message::EventsHeader, true);
    View::events(schedule.list())
}
