//! Configuration management for the dashboard.
//!
//! Settings are stored as pretty-printed JSON (`config.json`) next to the
//! database in the platform data directory. Every section is optional; a
//! missing section, or a missing file, means defaults.
//!
//! ## Sections
//!
//! - **Timer**: default focus session length and whether completion notifications are shown
//! - **Dashboard**: upcoming-events window and compact task list size
//! - **Reminders**: how far ahead task reminders look
//!
//! ```rust,no_run
//! use universe::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Focus sessions last {} minutes", config.timer().minutes);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::timer::{DEFAULT_MINUTES, DURATION_CHOICES};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Focus timer settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TimerConfig {
    /// Session length in minutes used when none is given on the command line.
    pub minutes: u32,
    /// Show a notification when a session completes.
    pub notifications: bool,
}

impl Default for TimerConfig {
    fn default() -> Self {
        TimerConfig {
            minutes: DEFAULT_MINUTES,
            notifications: true,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    /// Length of the rolling upcoming-events window, in days.
    pub upcoming_days: i64,
    /// Number of tasks in the compact task widget.
    pub compact_tasks: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            upcoming_days: 7,
            compact_tasks: 5,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReminderConfig {
    /// Tasks due within this many minutes trigger a reminder.
    pub lookahead_minutes: i64,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        ReminderConfig { lookahead_minutes: 30 }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer: Option<TimerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<DashboardConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminders: Option<ReminderConfig>,
}

impl Config {
    /// Reads the configuration from the platform data directory.
    ///
    /// A missing file yields the default configuration; a file that exists
    /// but cannot be parsed is an error.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(data_storage: &DataStorage) -> Result<Config> {
        let config_file_path = data_storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, data_storage: &DataStorage) -> Result<()> {
        let config_file_path = data_storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn timer(&self) -> TimerConfig {
        self.timer.clone().unwrap_or_default()
    }

    pub fn dashboard(&self) -> DashboardConfig {
        self.dashboard.clone().unwrap_or_default()
    }

    pub fn reminders(&self) -> ReminderConfig {
        self.reminders.clone().unwrap_or_default()
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [
            ConfigModule {
                key: "timer".to_string(),
                name: "Focus timer".to_string(),
            },
            ConfigModule {
                key: "dashboard".to_string(),
                name: "Dashboard".to_string(),
            },
            ConfigModule {
                key: "reminders".to_string(),
                name: "Reminders".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "timer" => {
                    let default = config.timer();
                    msg_print!(Message::ConfigModuleTimer);
                    let current = DURATION_CHOICES.iter().position(|&m| m == default.minutes).unwrap_or(1);
                    let choice = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptTimerMinutes.to_string())
                        .items(&DURATION_CHOICES.iter().map(|m| format!("{} min", m)).collect::<Vec<_>>())
                        .default(current)
                        .interact()?;
                    config.timer = Some(TimerConfig {
                        minutes: DURATION_CHOICES[choice],
                        notifications: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTimerNotifications.to_string())
                            .default(default.notifications)
                            .interact()?,
                    });
                }
                "dashboard" => {
                    let default = config.dashboard();
                    msg_print!(Message::ConfigModuleDashboard);
                    config.dashboard = Some(DashboardConfig {
                        upcoming_days: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptUpcomingDays.to_string())
                            .default(default.upcoming_days)
                            .interact_text()?,
                        compact_tasks: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptCompactTasks.to_string())
                            .default(default.compact_tasks)
                            .interact_text()?,
                    });
                }
                "reminders" => {
                    let default = config.reminders();
                    msg_print!(Message::ConfigModuleReminders);
                    config.reminders = Some(ReminderConfig {
                        lookahead_minutes: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptReminderLookahead.to_string())
                            .default(default.lookahead_minutes)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
