#[derive(Debug, Clone)]
pub enum Message {
    // === STORAGE MESSAGES ===
    StorageReadFailed(String, String),  // key, error
    StorageParseFailed(String, String), // key, error
    StorageWriteFailed(String, String), // key, error
    EphemeralStorage,

    // === MIGRATION MESSAGES ===
    DatabaseUpToDate,
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationFailed(u32, String),

    // === CONFIG MESSAGES ===
    ConfigSaved,
    ConfigModuleTimer,
    ConfigModuleDashboard,
    ConfigModuleReminders,
    PromptSelectModules,
    PromptTimerMinutes,
    PromptTimerNotifications,
    PromptUpcomingDays,
    PromptCompactTasks,
    PromptReminderLookahead,

    // === NOTIFICATION MESSAGES ===
    Notification(String, String), // title, body
    NotificationSkipped(String),
    NotificationPermission(String),

    // === TODO MESSAGES ===
    TaskAdded(String),
    TaskInvalid,
    TaskCompleted(String),
    TaskReopened(String),
    ReminderEnabled(String),
    ReminderDisabled(String),
    TaskDeleted(u64),
    TaskNotFound(u64),
    NoTasks,
    TasksHeader,
    DueRemindersHeader(i64),
    NoDueReminders(i64),
    TaskDueTitle,
    TaskDueBody(String, String), // title, due

    // === SCHEDULE MESSAGES ===
    EventAdded(String),
    EventInvalid,
    EventDeleted(u64),
    EventNotFound(u64),
    NoEvents,
    EventsHeader,
    EventsOnHeader(String),
    WeekHeader(String, String), // first day, last day
    UpcomingHeader(i64),
    DateOutOfRange(i64),

    // === MONEY MESSAGES ===
    TransactionAdded(String),
    TransactionInvalid,
    TransactionDeleted(u64),
    TransactionNotFound(u64),
    NoTransactions,
    TransactionsHeader,
    MoneySummaryHeader,
    ExpensesByCategoryHeader,

    // === HABIT MESSAGES ===
    HabitAdded(String),
    HabitInvalid,
    HabitChecked(String, String),   // name, date
    HabitUnchecked(String, String), // name, date
    HabitDeleted(u64),
    HabitNotFound(u64),
    NoHabits,
    HabitsHeader,

    // === JOB MESSAGES ===
    ApplicationAdded(String, String), // position, company
    ApplicationInvalid,
    ApplicationStatusUpdated(u64, String),
    ApplicationNotesUpdated(u64),
    ApplicationDeleted(u64),
    ApplicationNotFound(u64),
    NoApplications,
    NoApplicationsMatching(String),
    ApplicationsHeader,
    ApplicationStatusHeader,

    // === MARKETPLACE MESSAGES ===
    ListingAdded(String),
    ListingInvalid,
    ListingDeleted(u64),
    ListingNotFound(u64),
    NoListings,
    NoListingsMatching(String),
    ListingsHeader,

    // === GPA MESSAGES ===
    CourseAdded(String),
    CourseInvalid(u32),
    CourseDeleted(u64),
    CourseNotFound(u64),
    NoCourses,
    CoursesHeader,
    GpaSummary(String, u32, String), // gpa, credits, weighting
    WeightingChanged(String),

    // === TIMER MESSAGES ===
    TimerStarted(String),
    TimerPaused(String),
    TimerReset(String),
    TimerExpired,
    TimerInvalidMinutes,
    PromptTimerAction,

    // === DASHBOARD & SHELL MESSAGES ===
    DashboardHeader,
    DashboardTasksHeader,
    DashboardUpcomingHeader(i64),
    PromptSelectSection,
    SectionHeader(String),
    ShellExit,
}
