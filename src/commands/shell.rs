use crate::{
    commands::{dashboard, gpa, habit, job, market, money, schedule, timer, todo},
    libs::{
        config::Config,
        messages::Message,
        notify::TerminalNotifier,
        shell::{Section, Shell},
        storage::Storage,
        timer::FocusTimer,
    },
    msg_print,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

/// Lets the user pick a section and renders it, until they choose to quit.
pub async fn cmd(storage: &Storage) -> Result<()> {
    let mut shell = Shell::new();
    let mut items: Vec<String> = Section::ALL.iter().map(|section| section.title().to_string()).collect();
    items.push("Quit".to_string());

    loop {
        let current = Section::ALL.iter().position(|section| *section == shell.active()).unwrap_or(0);
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectSection.to_string())
            .items(&items)
            .default(current)
            .interact()?;

        let Some(&section) = Section::ALL.get(selection) else {
            msg_print!(Message::ShellExit);
            return Ok(());
        };

        shell.navigate(section);
        msg_print!(Message::SectionHeader(shell.active().title().to_string()), true);
        mount(shell.active(), storage).await?;
    }
}

async fn mount(section: Section, storage: &Storage) -> Result<()> {
    match section {
        Section::Dashboard => dashboard::cmd(storage),
        Section::Todo => todo::show(storage),
        Section::Schedule => schedule::show(storage),
        Section::Money => money::show(storage),
        Section::Habits => habit::show(storage),
        Section::Jobs => job::show(storage),
        Section::Marketplace => market::show(storage),
        Section::Gpa => gpa::show(storage),
        Section::Timer => {
            let config = Config::read()?.timer();
            let mut focus = FocusTimer::new(config.minutes, Box::new(TerminalNotifier::new(config.notifications)));
            timer::run(&mut focus).await
        }
    }
}
