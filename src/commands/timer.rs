use crate::{
    libs::{
        config::Config,
        messages::Message,
        notify::TerminalNotifier,
        timer::{FocusTimer, Tick, TimerState, MAX_MINUTES},
    },
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Select};
use std::io::Write;
use std::time::Duration;

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Args)]
pub struct TimerArgs {
    /// Session length in minutes; the configured default otherwise
    #[arg(short, long)]
    minutes: Option<u32>,
}

pub async fn cmd(args: TimerArgs) -> Result<()> {
    let config = Config::read()?.timer();
    let minutes = args.minutes.unwrap_or(config.minutes);
    if !(1..=MAX_MINUTES).contains(&minutes) {
        msg_bail_anyhow!(Message::TimerInvalidMinutes);
    }

    let mut timer = FocusTimer::new(minutes, Box::new(TerminalNotifier::new(config.notifications)));
    run(&mut timer).await
}

/// Runs sessions until the user quits. Ctrl+C pauses the countdown.
pub async fn run(timer: &mut FocusTimer) -> Result<()> {
    timer.start();
    msg_info!(Message::TimerStarted(timer.display()));

    loop {
        let interrupted = tokio::select! {
            _ = timer.run(TICK, draw) => false,
            _ = tokio::signal::ctrl_c() => true,
        };
        println!();

        if interrupted {
            timer.pause();
            msg_info!(Message::TimerPaused(timer.display()));
        } else if timer.state() == TimerState::Expired {
            msg_success!(Message::TimerExpired);
        }

        let actions = match timer.state() {
            TimerState::Paused => vec!["Resume", "Reset", "Quit"],
            _ => vec!["Start another session", "Quit"],
        };
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTimerAction.to_string())
            .items(&actions)
            .default(0)
            .interact()?;

        match actions[selection] {
            "Resume" => timer.start(),
            "Reset" => {
                timer.reset();
                msg_info!(Message::TimerReset(timer.display()));
                timer.start();
            }
            "Start another session" => {
                timer.reset();
                timer.start();
                msg_info!(Message::TimerStarted(timer.display()));
            }
            _ => return Ok(()),
        }
    }
}

fn draw(timer: &FocusTimer, tick: Tick) {
    if let Tick::Counted(_) = tick {
        print!("\r⏱  {}  {:>3.0}%", timer.display(), timer.progress());
        let _ = std::io::stdout().flush();
    }
}
