#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use universe::libs::dashboard::{self, Dashboard, DashboardStats, DEFAULT_UPCOMING_DAYS};
    use universe::libs::data_storage::DataStorage;
    use universe::libs::gpa::{CourseDraft, Grade, Transcript};
    use universe::libs::habits::{HabitDraft, Habits};
    use universe::libs::money::{Ledger, TransactionDraft, TransactionKind};
    use universe::libs::schedule::{EventDraft, Schedule};
    use universe::libs::shell::{Section, Shell};
    use universe::libs::storage::{Storage, StorageKey};
    use universe::libs::todo::{TaskDraft, Todos};

    struct DashboardTestContext {
        _temp_dir: TempDir,
        storage: Storage,
    }

    impl TestContext for DashboardTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = Storage::open_in(&DataStorage::at(temp_dir.path())).unwrap();
            DashboardTestContext {
                _temp_dir: temp_dir,
                storage,
            }
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 2).unwrap()
    }

    fn mount(storage: &Storage) -> Dashboard {
        Dashboard::mount_with_clock(storage, DEFAULT_UPCOMING_DAYS, today)
    }

    fn money(title: &str, amount: &str, kind: TransactionKind) -> TransactionDraft {
        TransactionDraft {
            title: title.to_string(),
            amount: amount.to_string(),
            kind,
            ..TransactionDraft::default()
        }
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_empty_storage_shows_zeroes(ctx: &mut DashboardTestContext) {
        let dashboard = mount(&ctx.storage);
        assert_eq!(dashboard.stats(), DashboardStats::default());
        assert_eq!(dashboard.stats().gpa, "0.00");
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_every_module_write_is_visible_immediately(ctx: &mut DashboardTestContext) {
        let dashboard = mount(&ctx.storage);

        let mut todos = Todos::open(&ctx.storage);
        let task = todos.add(TaskDraft::new("Essay")).unwrap();
        todos.add(TaskDraft::new("Lab")).unwrap();
        assert_eq!(dashboard.stats().active_tasks, 2);
        todos.toggle_completed(task.id);
        assert_eq!(dashboard.stats().active_tasks, 1);

        let mut ledger = Ledger::open(&ctx.storage);
        ledger.add(money("Stipend", "100", TransactionKind::Income)).unwrap();
        ledger.add(money("Books", "40", TransactionKind::Expense)).unwrap();
        assert_eq!(dashboard.stats().balance, 60.0);

        let mut schedule = Schedule::open(&ctx.storage);
        for (title, date) in [("Soon", today()), ("Edge", today() + chrono::Duration::days(7)), ("Later", today() + chrono::Duration::days(8))] {
            schedule
                .add(EventDraft {
                    title: title.to_string(),
                    date: Some(date),
                    ..EventDraft::default()
                })
                .unwrap();
        }
        assert_eq!(dashboard.stats().events, 3);
        assert_eq!(dashboard.stats().upcoming_events, 2);

        Habits::open(&ctx.storage).add(HabitDraft::new("Stretch")).unwrap();
        assert_eq!(dashboard.stats().habits, 1);

        let mut transcript = Transcript::open(&ctx.storage);
        transcript
            .add(CourseDraft {
                name: "Calculus".to_string(),
                credits: "3".to_string(),
                grade: Grade::A,
            })
            .unwrap();
        assert_eq!(dashboard.stats().gpa, "4.00");
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_unrelated_keys_do_not_trigger_refresh(ctx: &mut DashboardTestContext) {
        let dashboard = mount(&ctx.storage);
        let initial = dashboard.refreshes();

        ctx.storage.set(&StorageKey::JOB_APPLICATIONS, &Vec::<u8>::new());
        ctx.storage.set(&StorageKey::LISTINGS, &Vec::<u8>::new());
        assert_eq!(dashboard.refreshes(), initial);

        ctx.storage.set(&StorageKey::GPA_WEIGHTED, &false);
        assert_eq!(dashboard.refreshes(), initial + 1);
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_malformed_key_counts_as_empty(ctx: &mut DashboardTestContext) {
        let mut ledger = Ledger::open(&ctx.storage);
        ledger.add(money("Stipend", "100", TransactionKind::Income)).unwrap();
        ctx.storage.set(&StorageKey::TODOS, "{ definitely not tasks");

        let stats = dashboard::compute(&ctx.storage, today(), DEFAULT_UPCOMING_DAYS);
        assert_eq!(stats.active_tasks, 0);
        assert_eq!(stats.balance, 100.0);
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_oversized_upcoming_window_counts_all_future_events(ctx: &mut DashboardTestContext) {
        let mut schedule = Schedule::open(&ctx.storage);
        for (title, date) in [("Past", today() - chrono::Duration::days(1)), ("Far", today() + chrono::Duration::days(4000))] {
            schedule
                .add(EventDraft {
                    title: title.to_string(),
                    date: Some(date),
                    ..EventDraft::default()
                })
                .unwrap();
        }

        let stats = dashboard::compute(&ctx.storage, today(), i64::MAX);
        assert_eq!(stats.events, 2);
        assert_eq!(stats.upcoming_events, 1);

        let dashboard = Dashboard::mount_with_clock(&ctx.storage, 1_000_000_000, today);
        assert_eq!(dashboard.stats().upcoming_events, 1);
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_unmounted_dashboard_stops_listening(ctx: &mut DashboardTestContext) {
        let dashboard = mount(&ctx.storage);
        assert!(ctx.storage.bus().subscriber_count() > 0);

        drop(dashboard);
        assert_eq!(ctx.storage.bus().subscriber_count(), 0);
    }

    #[test]
    fn test_shell_mounts_one_section_at_a_time() {
        let mut shell = Shell::new();
        for section in Section::ALL {
            shell.navigate(section);
            assert_eq!(shell.active(), section);
        }
        shell.navigate_to("not-a-section");
        assert_eq!(shell.active(), Section::Dashboard);
    }
}
