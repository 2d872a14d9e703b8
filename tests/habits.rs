#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use universe::libs::data_storage::DataStorage;
    use universe::libs::habits::{HabitDraft, Habits, PALETTE};
    use universe::libs::storage::Storage;

    struct HabitTestContext {
        _temp_dir: TempDir,
        data_storage: DataStorage,
        storage: Storage,
    }

    impl TestContext for HabitTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let data_storage = DataStorage::at(temp_dir.path());
            let storage = Storage::open_in(&data_storage).unwrap();
            HabitTestContext {
                _temp_dir: temp_dir,
                data_storage,
                storage,
            }
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 10).unwrap()
    }

    #[test_context(HabitTestContext)]
    #[test]
    fn test_colors_cycle_through_palette(ctx: &mut HabitTestContext) {
        let mut habits = Habits::open(&ctx.storage);
        for i in 0..=PALETTE.len() {
            habits.add(HabitDraft::new(format!("habit {i}"))).unwrap();
        }

        let colors: Vec<_> = habits.list().iter().map(|h| h.color.as_str()).collect();
        assert_eq!(&colors[..PALETTE.len()], &PALETTE[..]);
        assert_eq!(colors[PALETTE.len()], PALETTE[0]);
        assert!(habits.add(HabitDraft::new("")).is_none());
    }

    #[test_context(HabitTestContext)]
    #[test]
    fn test_streak_counts_back_from_today(ctx: &mut HabitTestContext) {
        let mut habits = Habits::open(&ctx.storage);
        let habit = habits.add(HabitDraft::new("Stretch")).unwrap();

        habits.toggle_date(habit.id, today() - Duration::days(1));
        assert_eq!(habits.streak(habit.id, today()), Some(1));

        habits.toggle_date(habit.id, today());
        habits.toggle_date(habit.id, today() - Duration::days(3));
        assert_eq!(habits.streak(habit.id, today()), Some(2));

        assert_eq!(habits.streak(habit.id + 1, today()), None);
    }

    #[test_context(HabitTestContext)]
    #[test]
    fn test_toggle_twice_unchecks(ctx: &mut HabitTestContext) {
        let mut habits = Habits::open(&ctx.storage);
        let habit = habits.add(HabitDraft::new("Read")).unwrap();

        assert!(habits.toggle_date(habit.id, today()));
        assert!(habits.get(habit.id).unwrap().is_done_on(today()));
        assert!(habits.toggle_date(habit.id, today()));
        assert!(!habits.get(habit.id).unwrap().is_done_on(today()));
        assert!(!habits.toggle_date(habit.id + 1, today()));
    }

    #[test_context(HabitTestContext)]
    #[test]
    fn test_checked_days_persist(ctx: &mut HabitTestContext) {
        let id = {
            let mut habits = Habits::open(&ctx.storage);
            let habit = habits.add(HabitDraft::new("Run")).unwrap();
            habits.toggle_date(habit.id, today());
            habit.id
        };

        let reopened = Storage::open_in(&ctx.data_storage).unwrap();
        let mut habits = Habits::open(&reopened);
        assert!(habits.get(id).unwrap().is_done_on(today()));
        assert!(habits.delete(id));
        assert!(habits.list().is_empty());
    }
}
