//! Pomodoro-style focus timer.
//!
//! ```text
//!            start              tick (remaining = 0)
//!   Idle ───────────▶ Running ──────────────────────▶ Expired
//!     ▲                │   ▲                             │
//!     │          pause │   │ start                       │
//!     │                ▼   │                             │
//!     └──── reset ──── Paused ◀──────── reset ───────────┘
//! ```
//!
//! Each tick removes one second while running. Reaching zero fires the
//! completion notification once; further ticks are ignored until reset.
//! Notification permission is requested the first time the timer starts.

use super::formatter::format_clock;
use super::notify::{self, Notifier, Permission};
use crate::libs::messages::Message;
use crate::msg_debug;
use std::time::Duration;

pub const DEFAULT_MINUTES: u32 = 25;
/// Longest session: one day.
pub const MAX_MINUTES: u32 = 24 * 60;
pub const DURATION_CHOICES: [u32; 5] = [15, 25, 30, 45, 60];
pub const COMPLETION_TITLE: &str = "Focus Session Complete!";
pub const COMPLETION_BODY: &str = "Time for a break, UniVerse user!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// One second elapsed; seconds left.
    Counted(u32),
    /// The session just finished.
    Expired,
    /// The timer was not running.
    Ignored,
}

pub struct FocusTimer {
    minutes: u32,
    remaining: u32,
    state: TimerState,
    notifier: Box<dyn Notifier>,
    permission_requested: bool,
}

impl FocusTimer {
    pub fn new(minutes: u32, notifier: Box<dyn Notifier>) -> Self {
        let minutes = minutes.clamp(1, MAX_MINUTES);
        Self {
            minutes,
            remaining: minutes * 60,
            state: TimerState::Idle,
            notifier,
            permission_requested: false,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn total_seconds(&self) -> u32 {
        self.minutes * 60
    }

    /// Share of the session already elapsed, 0 to 100.
    pub fn progress(&self) -> f64 {
        let total = f64::from(self.total_seconds());
        (total - f64::from(self.remaining)) / total * 100.0
    }

    pub fn display(&self) -> String {
        format_clock(self.remaining)
    }

    /// Starts or resumes. Starting an expired timer begins a fresh session.
    pub fn start(&mut self) {
        if !self.permission_requested {
            self.permission_requested = true;
            if self.notifier.permission() == Permission::Default {
                let permission = self.notifier.request_permission();
                msg_debug!(Message::NotificationPermission(format!("{:?}", permission)));
            }
        }

        match self.state {
            TimerState::Idle | TimerState::Paused => self.state = TimerState::Running,
            TimerState::Expired => {
                self.remaining = self.total_seconds();
                self.state = TimerState::Running;
            }
            TimerState::Running => {}
        }
    }

    pub fn pause(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Paused;
        }
    }

    /// Start when stopped, pause when running.
    pub fn toggle(&mut self) {
        if self.state == TimerState::Running {
            self.pause();
        } else {
            self.start();
        }
    }

    pub fn reset(&mut self) {
        self.state = TimerState::Idle;
        self.remaining = self.total_seconds();
    }

    /// Changes the session length. A stopped timer (idle, paused or expired)
    /// resets to the new length; a running one keeps counting down the old
    /// session and picks up the new length on the next reset.
    pub fn set_minutes(&mut self, minutes: u32) {
        self.minutes = minutes.clamp(1, MAX_MINUTES);
        if self.state != TimerState::Running {
            self.reset();
        }
    }

    pub fn tick(&mut self) -> Tick {
        if self.state != TimerState::Running {
            return Tick::Ignored;
        }
        if self.remaining <= 1 {
            self.remaining = 0;
            self.state = TimerState::Expired;
            notify::notify(self.notifier.as_mut(), COMPLETION_TITLE, COMPLETION_BODY);
            return Tick::Expired;
        }
        self.remaining -= 1;
        Tick::Counted(self.remaining)
    }

    /// Ticks every `period` while the timer is running, calling `on_tick` after each tick.
    pub async fn run<F>(&mut self, period: Duration, mut on_tick: F) -> TimerState
    where
        F: FnMut(&FocusTimer, Tick),
    {
        let mut interval = tokio::time::interval(period);
        // The first tick of a tokio interval completes immediately.
        interval.tick().await;

        while self.state == TimerState::Running {
            interval.tick().await;
            let tick = self.tick();
            on_tick(self, tick);
        }
        self.state
    }
}
