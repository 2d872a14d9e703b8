use crate::{
    libs::{
        gpa::{CourseDraft, Grade, Transcript, MAX_CREDITS},
        messages::Message,
        storage::Storage,
        view::View,
    },
    msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};

#[derive(Debug, Args)]
pub struct GpaArgs {
    #[command(subcommand)]
    command: Option<GpaCommand>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum WeightingMode {
    /// Weight grade points by credits
    Credits,
    /// Plain mean of grade points
    Unweighted,
    /// Switch to the other mode
    Toggle,
}

#[derive(Debug, Subcommand)]
enum GpaCommand {
    /// Add a course
    Add {
        name: String,
        #[arg(value_enum)]
        grade: Grade,
        /// Credit hours; blank or invalid means 3
        #[arg(short, long, default_value = "")]
        credits: String,
    },
    /// Courses and the current GPA
    List,
    /// Choose how the GPA is averaged
    Weighting {
        #[arg(value_enum, default_value_t = WeightingMode::Toggle)]
        mode: WeightingMode,
    },
    /// Delete a course
    Delete { id: u64 },
}

pub fn cmd(args: GpaArgs, storage: &Storage) -> Result<()> {
    let mut transcript = Transcript::open(storage);

    match args.command {
        Some(GpaCommand::Add { name, grade, credits }) => {
            match transcript.add(CourseDraft { name, credits, grade }) {
                Some(course) => {
                    msg_success!(Message::CourseAdded(course.name));
                    summary(&transcript);
                }
                None => msg_warning!(Message::CourseInvalid(MAX_CREDITS)),
            }
            Ok(())
        }
        Some(GpaCommand::Weighting { mode }) => {
            let weighting = match mode {
                WeightingMode::Credits => {
                    transcript.set_weighted(true);
                    transcript.weighting()
                }
                WeightingMode::Unweighted => {
                    transcript.set_weighted(false);
                    transcript.weighting()
                }
                WeightingMode::Toggle => transcript.toggle_weighting(),
            };
            msg_success!(Message::WeightingChanged(weighting.to_string()));
            summary(&transcript);
            Ok(())
        }
        Some(GpaCommand::Delete { id }) => {
            if transcript.delete(id) {
                msg_success!(Message::CourseDeleted(id));
            } else {
                msg_info!(Message::CourseNotFound(id));
            }
            Ok(())
        }
        Some(GpaCommand::List) | None => list(&transcript),
    }
}

/// Renders the transcript; used by the shell.
pub fn show(storage: &Storage) -> Result<()> {
    list(&Transcript::open(storage))
}

fn list(transcript: &Transcript) -> Result<()> {
    if transcript.list().is_empty() {
        msg_info!(Message::NoCourses);
        return Ok(());
    }

    msg_print!(Message::CoursesHeader, true);
    View::courses(transcript.list())?;
    summary(transcript);
    Ok(())
}

fn summary(transcript: &Transcript) {
    msg_print!(
        Message::GpaSummary(
            transcript.gpa(),
            transcript.total_credits(),
            transcript.weighting().to_string()
        ),
        true
    );
}
