//! Table rendering for list output.

use super::dashboard::DashboardStats;
use super::formatter::{format_date, format_money, format_signed_money, format_time, format_time_range};
use super::gpa::Course;
use super::habits::{recent_days, Habit};
use super::jobs::{ApplicationStatus, JobApplication};
use super::marketplace::Listing;
use super::money::{Totals, Transaction};
use super::schedule::Event;
use super::todo::Task;
use anyhow::Result;
use chrono::NaiveDate;
use prettytable::{format, row, Cell, Table};
use std::collections::BTreeMap;

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "", "TITLE", "PRIORITY", "DUE", "REMINDER", "DESCRIPTION"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                if task.completed { "✔" } else { " " },
                task.title,
                task.priority,
                format!("{} {}", format_date(task.due_date), format_time(task.due_time)).trim(),
                if task.reminder_enabled { "on" } else { "off" },
                task.description
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn events<'a>(events: impl IntoIterator<Item = &'a Event>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "TIME", "TYPE", "TITLE"]);
        for event in events {
            table.add_row(row![
                event.id,
                format_date(Some(event.date)),
                format_time_range(event.start_time, event.end_time),
                event.kind,
                event.title
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// One row per day, Sunday first; days without events show a dash.
    pub fn week(days: &[(NaiveDate, Vec<&Event>)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DAY", "DATE", "EVENTS"]);
        for (date, events) in days {
            let listed = if events.is_empty() {
                "-".to_string()
            } else {
                events
                    .iter()
                    .map(|event| format!("{} {}", format_time(event.start_time), event.title).trim().to_string())
                    .collect::<Vec<_>>()
                    .join("\n")
            };
            table.add_row(row![date.format("%a"), format_date(Some(*date)), listed]);
        }
        table.printstd();

        Ok(())
    }

    pub fn transactions(transactions: &[Transaction]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "TITLE", "CATEGORY", "AMOUNT"]);
        for transaction in transactions {
            table.add_row(row![
                transaction.id,
                format_date(Some(transaction.date)),
                transaction.title,
                transaction.category,
                r->format_signed_money(transaction.signed_amount())
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn totals(totals: &Totals) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        table.add_row(row!["Income", r->format_money(totals.income)]);
        table.add_row(row!["Expenses", r->format_money(totals.expense)]);
        table.add_row(row![b->"Balance", rb->format_money(totals.balance())]);
        table.printstd();

        Ok(())
    }

    pub fn category_totals(categories: &BTreeMap<String, f64>) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        for (category, amount) in categories {
            table.add_row(row![category, r->format_money(*amount)]);
        }
        table.printstd();

        Ok(())
    }

    /// Habits with their streak and a check mark per day of the last week.
    pub fn habits(habits: &[Habit], today: NaiveDate) -> Result<()> {
        let days = recent_days(today);
        let mut table = Table::new();

        let mut header = row!["ID", "HABIT", "STREAK"];
        for day in &days {
            header.add_cell(Cell::new(&day.format("%a").to_string()));
        }
        table.add_row(header);

        for habit in habits {
            let mut line = row![habit.id, habit.name, format!("🔥 {}", habit.streak(today))];
            for day in &days {
                line.add_cell(Cell::new(if habit.is_done_on(*day) { "●" } else { "○" }));
            }
            table.add_row(line);
        }
        table.printstd();

        Ok(())
    }

    pub fn applications<'a>(applications: impl IntoIterator<Item = &'a JobApplication>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "COMPANY", "POSITION", "STATUS", "NOTES"]);
        for application in applications {
            table.add_row(row![
                application.id,
                application.company,
                application.position,
                application.status,
                application.notes
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn status_counts(counts: &BTreeMap<ApplicationStatus, usize>) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

        for (status, count) in counts {
            table.add_row(row![status, r->count]);
        }
        table.printstd();

        Ok(())
    }

    pub fn listings<'a>(listings: impl IntoIterator<Item = &'a Listing>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "CATEGORY", "CONDITION", "PRICE", "DESCRIPTION"]);
        for listing in listings {
            table.add_row(row![
                listing.id,
                listing.title,
                listing.category,
                listing.condition,
                r->format_money(listing.price),
                listing.description
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn courses(courses: &[Course]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "COURSE", "CREDITS", "GRADE", "POINTS"]);
        for course in courses {
            table.add_row(row![
                course.id,
                course.name,
                r->course.credits,
                course.grade,
                r->format!("{:.1}", course.grade.points())
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn dashboard(stats: &DashboardStats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ACTIVE TASKS", "BALANCE", "EVENTS", "UPCOMING", "HABITS", "GPA"]);
        table.add_row(row![
            c->stats.active_tasks,
            c->format_money(stats.balance),
            c->stats.events,
            c->stats.upcoming_events,
            c->stats.habits,
            c->stats.gpa
        ]);
        table.printstd();

        Ok(())
    }
}
