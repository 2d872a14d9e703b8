use crate::{
    libs::{
        config::Config,
        dashboard::Dashboard,
        messages::Message,
        schedule::Schedule,
        storage::Storage,
        todo::Todos,
        view::View,
    },
    msg_print,
};
use anyhow::Result;
use chrono::Local;

/// Counters plus the compact task list and the upcoming events.
pub fn cmd(storage: &Storage) -> Result<()> {
    let settings = Config::read()?.dashboard();
    let dashboard = Dashboard::mount(storage, settings.upcoming_days);

    msg_print!(Message::DashboardHeader, true);
    View::dashboard(&dashboard.stats())?;

    let todos = Todos::open(storage);
    let compact = todos.compact(settings.compact_tasks);
    if !compact.is_empty() {
        msg_print!(Message::DashboardTasksHeader, true);
        View::tasks(compact)?;
    }

    let schedule = Schedule::open(storage);
    let upcoming = schedule.upcoming(Local::now().date_naive(), settings.upcoming_days);
    if !upcoming.is_empty() {
        msg_print!(Message::DashboardUpcomingHeader(settings.upcoming_days), true);
        View::events(upcoming)?;
    }

    Ok(())
}
