//! User-facing text for every [`Message`].
//!
//! All wording lives here so commands only pick the message and its
//! parameters.

use super::types::Message;
use crate::libs::timer::MAX_MINUTES;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            // === STORAGE MESSAGES ===
            Message::StorageReadFailed(key, e) => format!("Could not read '{}', using defaults: {}", key, e),
            Message::StorageParseFailed(key, e) => format!("Stored data for '{}' is malformed, using defaults: {}", key, e),
            Message::StorageWriteFailed(key, e) => {
                format!("Could not save '{}'; the change is kept for this session only: {}", key, e)
            }
            Message::EphemeralStorage => "Using in-memory storage; nothing will be saved.".to_string(),

            // === MIGRATION MESSAGES ===
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, e) => format!("Migration v{} failed: {}", version, e),

            // === CONFIG MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleTimer => "Focus timer settings".to_string(),
            Message::ConfigModuleDashboard => "Dashboard settings".to_string(),
            Message::ConfigModuleReminders => "Reminder settings".to_string(),
            Message::PromptSelectModules => "Select sections to configure".to_string(),
            Message::PromptTimerMinutes => "Default session length".to_string(),
            Message::PromptTimerNotifications => "Notify when a session completes?".to_string(),
            Message::PromptUpcomingDays => "Upcoming events window (days)".to_string(),
            Message::PromptCompactTasks => "Tasks shown on the dashboard".to_string(),
            Message::PromptReminderLookahead => "Remind about tasks due within (minutes)".to_string(),

            // === NOTIFICATION MESSAGES ===
            Message::Notification(title, body) => format!("\x07🔔 {}\n   {}", title, body),
            Message::NotificationSkipped(title) => format!("Notification '{}' skipped: permission not granted", title),
            Message::NotificationPermission(permission) => format!("Notification permission: {}", permission),

            // === TODO MESSAGES ===
            Message::TaskAdded(title) => format!("Task '{}' added", title),
            Message::TaskInvalid => "A task needs a title".to_string(),
            Message::TaskCompleted(title) => format!("Task '{}' completed", title),
            Message::TaskReopened(title) => format!("Task '{}' reopened", title),
            Message::ReminderEnabled(title) => format!("Reminder on for '{}'", title),
            Message::ReminderDisabled(title) => format!("Reminder off for '{}'", title),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFound(id) => format!("No task with id {}", id),
            Message::NoTasks => "No tasks yet".to_string(),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::DueRemindersHeader(minutes) => format!("Due within {} minutes:", minutes),
            Message::NoDueReminders(minutes) => format!("Nothing due within {} minutes", minutes),
            Message::TaskDueTitle => "Task Reminder".to_string(),
            Message::TaskDueBody(title, due) => format!("'{}' is due {}", title, due),

            // === SCHEDULE MESSAGES ===
            Message::EventAdded(title) => format!("Event '{}' added", title),
            Message::EventInvalid => "An event needs a title and a date".to_string(),
            Message::EventDeleted(id) => format!("Event {} deleted", id),
            Message::EventNotFound(id) => format!("No event with id {}", id),
            Message::NoEvents => "No events scheduled".to_string(),
            Message::EventsHeader => "Schedule:".to_string(),
            Message::EventsOnHeader(date) => format!("Events on {}:", date),
            Message::WeekHeader(first, last) => format!("Week of {} to {}:", first, last),
            Message::UpcomingHeader(days) => format!("Upcoming in the next {} days:", days),
            Message::DateOutOfRange(weeks) => format!("Cannot move {} weeks from that date", weeks),

            // === MONEY MESSAGES ===
            Message::TransactionAdded(title) => format!("Transaction '{}' recorded", title),
            Message::TransactionInvalid => "A transaction needs a title and a positive amount".to_string(),
            Message::TransactionDeleted(id) => format!("Transaction {} deleted", id),
            Message::TransactionNotFound(id) => format!("No transaction with id {}", id),
            Message::NoTransactions => "No transactions yet".to_string(),
            Message::TransactionsHeader => "Transactions:".to_string(),
            Message::MoneySummaryHeader => "Summary:".to_string(),
            Message::ExpensesByCategoryHeader => "Expenses by category:".to_string(),

            // === HABIT MESSAGES ===
            Message::HabitAdded(name) => format!("Habit '{}' added", name),
            Message::HabitInvalid => "A habit needs a name".to_string(),
            Message::HabitChecked(name, date) => format!("'{}' done on {}", name, date),
            Message::HabitUnchecked(name, date) => format!("'{}' unchecked for {}", name, date),
            Message::HabitDeleted(id) => format!("Habit {} deleted", id),
            Message::HabitNotFound(id) => format!("No habit with id {}", id),
            Message::NoHabits => "No habits tracked yet".to_string(),
            Message::HabitsHeader => "Habits:".to_string(),

            // === JOB MESSAGES ===
            Message::ApplicationAdded(position, company) => format!("Application for {} at {} added", position, company),
            Message::ApplicationInvalid => "An application needs a company and a position".to_string(),
            Message::ApplicationStatusUpdated(id, status) => format!("Application {} is now {}", id, status),
            Message::ApplicationNotesUpdated(id) => format!("Notes for application {} updated", id),
            Message::ApplicationDeleted(id) => format!("Application {} deleted", id),
            Message::ApplicationNotFound(id) => format!("No application with id {}", id),
            Message::NoApplications => "No applications yet".to_string(),
            Message::NoApplicationsMatching(query) => format!("No applications match '{}'", query),
            Message::ApplicationsHeader => "Applications:".to_string(),
            Message::ApplicationStatusHeader => "By status:".to_string(),

            // === MARKETPLACE MESSAGES ===
            Message::ListingAdded(title) => format!("Listing '{}' posted", title),
            Message::ListingInvalid => "A listing needs a title and a non-negative price".to_string(),
            Message::ListingDeleted(id) => format!("Listing {} removed", id),
            Message::ListingNotFound(id) => format!("No listing with id {}", id),
            Message::NoListings => "No listings yet".to_string(),
            Message::NoListingsMatching(query) => format!("No listings match '{}'", query),
            Message::ListingsHeader => "Listings:".to_string(),

            // === GPA MESSAGES ===
            Message::CourseAdded(name) => format!("Course '{}' added", name),
            Message::CourseInvalid(max) => format!("A course needs a name and 1 to {} credits", max),
            Message::CourseDeleted(id) => format!("Course {} deleted", id),
            Message::CourseNotFound(id) => format!("No course with id {}", id),
            Message::NoCourses => "No courses yet".to_string(),
            Message::CoursesHeader => "Courses:".to_string(),
            Message::GpaSummary(gpa, credits, weighting) => {
                format!("GPA {} over {} credits ({})", gpa, credits, weighting)
            }
            Message::WeightingChanged(weighting) => format!("GPA is now {}", weighting),

            // === TIMER MESSAGES ===
            Message::TimerStarted(clock) => format!("Focus session started ({}). Press Ctrl+C to pause.", clock),
            Message::TimerPaused(clock) => format!("Paused at {}", clock),
            Message::TimerReset(clock) => format!("Timer reset to {}", clock),
            Message::TimerExpired => "Session complete".to_string(),
            Message::TimerInvalidMinutes => format!("Session length must be between 1 and {} minutes", MAX_MINUTES),
            Message::PromptTimerAction => "What next?".to_string(),

            // === DASHBOARD & SHELL MESSAGES ===
            Message::DashboardHeader => "📊 Dashboard".to_string(),
            Message::DashboardTasksHeader => "Recent tasks:".to_string(),
            Message::DashboardUpcomingHeader(days) => format!("Coming up in the next {} days:", days),
            Message::PromptSelectSection => "Go to".to_string(),
            Message::SectionHeader(title) => format!("== {} ==", title),
            Message::ShellExit => "See you later!".to_string(),
        };
        write!(f, "{}", s)
    }
}
