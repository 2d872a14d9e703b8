//! Command-line surface.
//!
//! Each section of the dashboard is a subcommand with its own actions, e.g.
//! `universe todo add "Read chapter 3"`. Running a section without an action
//! lists its records.

pub mod dashboard;
pub mod gpa;
pub mod habit;
pub mod init;
pub mod job;
pub mod market;
pub mod money;
pub mod schedule;
pub mod shell;
pub mod timer;
pub mod todo;

use crate::libs::{messages::Message, storage::Storage};
use crate::msg_info;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Show the dashboard summary")]
    Dashboard,
    #[command(about = "Manage tasks")]
    Todo(todo::TodoArgs),
    #[command(about = "Manage class and study events")]
    Schedule(schedule::ScheduleArgs),
    #[command(about = "Track income and expenses")]
    Money(money::MoneyArgs),
    #[command(about = "Track daily habits")]
    Habit(habit::HabitArgs),
    #[command(about = "Track job applications")]
    Job(job::JobArgs),
    #[command(about = "Buy, sell and rent listings")]
    Market(market::MarketArgs),
    #[command(about = "Courses and GPA")]
    Gpa(gpa::GpaArgs),
    #[command(about = "Run a focus session")]
    Timer(timer::TimerArgs),
    #[command(about = "Interactive section browser")]
    Shell,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Keep all data in memory for this run only
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        if let Commands::Init = cli.command {
            return init::cmd();
        }

        let storage = if cli.ephemeral {
            msg_info!(Message::EphemeralStorage);
            Storage::in_memory()
        } else {
            Storage::open()?
        };

        match cli.command {
            Commands::Init => Ok(()),
            Commands::Dashboard => dashboard::cmd(&storage),
            Commands::Todo(args) => todo::cmd(args, &storage),
            Commands::Schedule(args) => schedule::cmd(args, &storage),
            Commands::Money(args) => money::cmd(args, &storage),
            Commands::Habit(args) => habit::cmd(args, &storage),
            Commands::Job(args) => job::cmd(args, &storage),
            Commands::Market(args) => market::cmd(args, &storage),
            Commands::Gpa(args) => gpa::cmd(args, &storage),
            Commands::Timer(args) => timer::cmd(args).await,
            Commands::Shell => shell::cmd(&storage).await,
        }
    }
}
