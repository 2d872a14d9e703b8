use crate::{
    libs::{
        config::Config,
        formatter::{format_date, format_time},
        messages::Message,
        notify::{self, TerminalNotifier},
        storage::Storage,
        todo::{self, Priority, TaskDraft, Todos},
        view::View,
    },
    msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveTime};
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct TodoArgs {
    #[command(subcommand)]
    command: Option<TodoCommand>,
}

#[derive(Debug, Subcommand)]
enum TodoCommand {
    /// Add a task
    Add {
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
        /// Due time (HH:MM)
        #[arg(long)]
        at: Option<NaiveTime>,
        #[arg(short, long, value_enum, default_value_t = Priority::Medium)]
        priority: Priority,
        /// Do not remind about this task
        #[arg(long)]
        no_reminder: bool,
    },
    /// List tasks
    List {
        /// Only the first few tasks
        #[arg(short, long)]
        compact: bool,
        /// Highest priority first
        #[arg(long)]
        by_priority: bool,
    },
    /// Toggle a task between done and open
    Done { id: u64 },
    /// Toggle the reminder of a task
    Remind { id: u64 },
    /// Delete a task
    Delete { id: u64 },
    /// Notify about tasks that are due soon
    Reminders,
}

pub fn cmd(args: TodoArgs, storage: &Storage) -> Result<()> {
    let mut todos = Todos::open(storage);

    match args.command {
        Some(TodoCommand::Add {
            title,
            description,
            due,
            at,
            priority,
            no_reminder,
        }) => {
            let draft = TaskDraft {
                description,
                due_date: due,
                due_time: at,
                priority,
                reminder_enabled: !no_reminder,
                ..TaskDraft::new(title)
            };
            match todos.add(draft) {
                Some(task) => msg_success!(Message::TaskAdded(task.title)),
                None => msg_warning!(Message::TaskInvalid),
            }
            Ok(())
        }
        Some(TodoCommand::List { compact, by_priority }) => {
            let limit = Config::read()?.dashboard().compact_tasks;
            let tasks = if compact { todos.compact(limit) } else { todos.list() };
            if by_priority {
                let ordered: Vec<_> = todo::by_priority(tasks).into_iter().cloned().collect();
                list(&ordered)
            } else {
                list(tasks)
            }
        }
        Some(TodoCommand::Done { id }) => {
            if !todos.toggle_completed(id) {
                msg_info!(Message::TaskNotFound(id));
                return Ok(());
            }
            if let Some(task) = todos.get(id) {
                if task.completed {
                    msg_success!(Message::TaskCompleted(task.title.clone()));
                } else {
                    msg_info!(Message::TaskReopened(task.title.clone()));
                }
            }
            Ok(())
        }
        Some(TodoCommand::Remind { id }) => {
            if !todos.toggle_reminder(id) {
                msg_info!(Message::TaskNotFound(id));
                return Ok(());
            }
            if let Some(task) = todos.get(id) {
                if task.reminder_enabled {
                    msg_success!(Message::ReminderEnabled(task.title.clone()));
                } else {
                    msg_info!(Message::ReminderDisabled(task.title.clone()));
                }
            }
            Ok(())
        }
        Some(TodoCommand::Delete { id }) => {
            if todos.delete(id) {
                msg_success!(Message::TaskDeleted(id));
            } else {
                msg_info!(Message::TaskNotFound(id));
            }
            Ok(())
        }
        Some(TodoCommand::Reminders) => reminders(&todos),
        None => list(todos.list()),
    }
}

/// Renders the task list; used by the shell.
pub fn show(storage: &Storage) -> Result<()> {
    list(Todos::open(storage).list())
}

fn list(tasks: &[todo::Task]) -> Result<()> {
    if tasks.is_empty() {
        msg_info!(Message::NoTasks);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(tasks)
}

fn reminders(todos: &Todos) -> Result<()> {
    let config = Config::read()?;
    let lookahead = config.reminders().lookahead_minutes;
    let due = todo::due_reminders(todos.list(), Local::now().naive_local(), todo::lookahead(lookahead));

    if due.is_empty() {
        msg_info!(Message::NoDueReminders(lookahead));
        return Ok(());
    }

    msg_print!(Message::DueRemindersHeader(lookahead), true);
    let mut notifier = TerminalNotifier::new(config.timer().notifications);
    notify::ensure_permission(&mut notifier);
    for task in due {
        let when = format!("{} {}", format_date(task.due_date), format_time(task.due_time));
        notify::notify(
            &mut notifier,
            &Message::TaskDueTitle.to_string(),
            &Message::TaskDueBody(task.title.clone(), when.trim().to_string()).to_string(),
        );
    }
    Ok(())
}
