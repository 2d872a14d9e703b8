use crate::{
    libs::{
        jobs::{self, ApplicationDraft, ApplicationStatus, JobBoard},
        messages::Message,
        storage::Storage,
        view::View,
    },
    msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct JobArgs {
    #[command(subcommand)]
    command: Option<JobCommand>,
}

#[derive(Debug, Subcommand)]
enum JobCommand {
    /// Record an application
    Add {
        company: String,
        position: String,
        #[arg(short, long, value_enum, default_value_t = ApplicationStatus::Applied)]
        status: ApplicationStatus,
        #[arg(short, long, default_value = "")]
        notes: String,
    },
    /// List applications with counts per status
    List,
    /// Move an application to another status
    Status {
        id: u64,
        #[arg(value_enum)]
        status: ApplicationStatus,
    },
    /// Replace the notes of an application
    Notes { id: u64, notes: String },
    /// Find applications by company or position
    Search { query: String },
    /// Delete an application
    Delete { id: u64 },
}

pub fn cmd(args: JobArgs, storage: &Storage) -> Result<()> {
    let mut board = JobBoard::open(storage);

    match args.command {
        Some(JobCommand::Add {
            company,
            position,
            status,
            notes,
        }) => {
            let draft = ApplicationDraft {
                company,
                position,
                status,
                notes,
            };
            match board.add(draft) {
                Some(application) => msg_success!(Message::ApplicationAdded(application.position, application.company)),
                None => msg_warning!(Message::ApplicationInvalid),
            }
            Ok(())
        }
        Some(JobCommand::Status { id, status }) => {
            if board.set_status(id, status) {
                msg_success!(Message::ApplicationStatusUpdated(id, status.to_string()));
            } else {
                msg_info!(Message::ApplicationNotFound(id));
            }
            Ok(())
        }
        Some(JobCommand::Notes { id, notes }) => {
            if board.set_notes(id, notes) {
                msg_success!(Message::ApplicationNotesUpdated(id));
            } else {
                msg_info!(Message::ApplicationNotFound(id));
            }
            Ok(())
        }
        Some(JobCommand::Search { query }) => {
            let found = board.search(&query);
            if found.is_empty() {
                msg_info!(Message::NoApplicationsMatching(query));
                return Ok(());
            }
            msg_print!(Message::ApplicationsHeader, true);
            View::applications(found)
        }
        Some(JobCommand::Delete { id }) => {
            if board.delete(id) {
                msg_success!(Message::ApplicationDeleted(id));
            } else {
                msg_info!(Message::ApplicationNotFound(id));
            }
            Ok(())
        }
        Some(JobCommand::List) | None => list(&board),
    }
}

/// Renders the application board; used by the shell.
pub fn show(storage: &Storage) -> Result<()> {
    list(&JobBoard::open(storage))
}

fn list(board: &JobBoard) -> Result<()> {
    if board.list().is_empty() {
        msg_info!(Message::NoApplications);
        return Ok(());
    }

    msg_print!(Message::ApplicationsHeader, true);
    View::applications(board.list())?;
    msg_print!(Message::ApplicationStatusHeader, true);
    View::status_counts(&jobs::count_by_status(board.list()))
}
