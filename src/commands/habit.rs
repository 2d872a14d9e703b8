use crate::{
    libs::{
        formatter::format_date,
        habits::{HabitDraft, Habits},
        messages::Message,
        storage::Storage,
        view::View,
    },
    msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct HabitArgs {
    #[command(subcommand)]
    command: Option<HabitCommand>,
}

#[derive(Debug, Subcommand)]
enum HabitCommand {
    /// Start tracking a habit
    Add {
        name: String,
        /// Hex color, e.g. #10b981
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Habits with streaks and the last seven days
    List,
    /// Check a day off, or uncheck it when already done
    Check {
        id: u64,
        /// Day to toggle (YYYY-MM-DD), today by default
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Stop tracking a habit
    Delete { id: u64 },
}

pub fn cmd(args: HabitArgs, storage: &Storage) -> Result<()> {
    let mut habits = Habits::open(storage);
    let today = Local::now().date_naive();

    match args.command {
        Some(HabitCommand::Add { name, color }) => {
            match habits.add(HabitDraft { name, color }) {
                Some(habit) => msg_success!(Message::HabitAdded(habit.name)),
                None => msg_warning!(Message::HabitInvalid),
            }
            Ok(())
        }
        Some(HabitCommand::Check { id, date }) => {
            let date = date.unwrap_or(today);
            if !habits.toggle_date(id, date) {
                msg_info!(Message::HabitNotFound(id));
                return Ok(());
            }
            if let Some(habit) = habits.get(id) {
                let day = format_date(Some(date));
                if habit.is_done_on(date) {
                    msg_success!(Message::HabitChecked(habit.name.clone(), day));
                } else {
                    msg_info!(Message::HabitUnchecked(habit.name.clone(), day));
                }
            }
            Ok(())
        }
        Some(HabitCommand::Delete { id }) => {
            if habits.delete(id) {
                msg_success!(Message::HabitDeleted(id));
            } else {
                msg_info!(Message::HabitNotFound(id));
            }
            Ok(())
        }
        Some(HabitCommand::List) | None => list(&habits, today),
    }
}

/// Renders the habit grid; used by the shell.
pub fn show(storage: &Storage) -> Result<()> {
    list(&Habits::open(storage), Local::now().date_naive())
}

fn list(habits: &Habits, today: NaiveDate) -> Result<()> {
    if habits.list().is_empty() {
        msg_info!(Message::NoHabits);
        return Ok(());
    }

    msg_print!(Message::HabitsHeader, true);
    View::habits(habits.list(), today)
}
