//! Section selection for the navigation shell.
//!
//! The shell shows exactly one section at a time. Unknown section names fall
//! back to the dashboard.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Todo,
    Schedule,
    Money,
    Habits,
    Jobs,
    Marketplace,
    Gpa,
    Timer,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::Dashboard,
        Section::Todo,
        Section::Schedule,
        Section::Money,
        Section::Habits,
        Section::Jobs,
        Section::Marketplace,
        Section::Gpa,
        Section::Timer,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Todo => "todo",
            Section::Schedule => "schedule",
            Section::Money => "money",
            Section::Habits => "habits",
            Section::Jobs => "jobs",
            Section::Marketplace => "marketplace",
            Section::Gpa => "gpa",
            Section::Timer => "timer",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Todo => "Todo List",
            Section::Schedule => "Schedule",
            Section::Money => "Money Manager",
            Section::Habits => "Habits",
            Section::Jobs => "Job Hub",
            Section::Marketplace => "Marketplace",
            Section::Gpa => "GPA Calculator",
            Section::Timer => "Focus Timer",
        }
    }

    /// Section with the given id, or the dashboard when none matches.
    pub fn from_id(id: &str) -> Section {
        let id = id.trim().to_lowercase();
        Section::ALL.into_iter().find(|section| section.id() == id).unwrap_or_default()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Holds the single active section.
#[derive(Debug, Default)]
pub struct Shell {
    active: Section,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Switches sections; returns `true` when the active section changed.
    pub fn navigate(&mut self, section: Section) -> bool {
        let changed = self.active != section;
        self.active = section;
        changed
    }

    pub fn navigate_to(&mut self, id: &str) -> bool {
        self.navigate(Section::from_id(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_section_falls_back_to_dashboard() {
        assert_eq!(Section::from_id("gpa"), Section::Gpa);
        assert_eq!(Section::from_id(" Timer "), Section::Timer);
        assert_eq!(Section::from_id("settings"), Section::Dashboard);
    }

    #[test]
    fn test_navigation_keeps_one_active_section() {
        let mut shell = Shell::new();
        assert_eq!(shell.active(), Section::Dashboard);
        assert!(shell.navigate_to("habits"));
        assert!(!shell.navigate(Section::Habits));
        assert_eq!(shell.active(), Section::Habits);
        assert!(shell.navigate_to("nowhere"));
        assert_eq!(shell.active(), Section::Dashboard);
    }
}
