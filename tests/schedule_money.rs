#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use universe::libs::data_storage::DataStorage;
    use universe::libs::money::{Ledger, TransactionDraft, TransactionKind, DEFAULT_CATEGORY};
    use universe::libs::schedule::{EventDraft, EventKind, Schedule};
    use universe::libs::storage::Storage;

    struct PlannerTestContext {
        _temp_dir: TempDir,
        storage: Storage,
    }

    impl TestContext for PlannerTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = Storage::open_in(&DataStorage::at(temp_dir.path())).unwrap();
            PlannerTestContext {
                _temp_dir: temp_dir,
                storage,
            }
        }
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, d).unwrap()
    }

    fn event(title: &str, day: u32, hour: Option<u32>) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            date: Some(date(day)),
            start_time: hour.and_then(|h| NaiveTime::from_hms_opt(h, 0, 0)),
            end_time: None,
            kind: EventKind::Class,
        }
    }

    #[test_context(PlannerTestContext)]
    #[test]
    fn test_events_are_appended_and_filtered(ctx: &mut PlannerTestContext) {
        let mut schedule = Schedule::open(&ctx.storage);
        schedule.add(event("Calculus", 2, Some(10))).unwrap();
        schedule.add(event("Physics", 2, Some(8))).unwrap();
        schedule.add(event("Club", 9, None)).unwrap();
        assert!(schedule.add(EventDraft { date: None, ..event("Undated", 2, None) }).is_none());

        let titles: Vec<_> = schedule.list().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Calculus", "Physics", "Club"]);

        let monday: Vec<_> = schedule.on(date(2)).iter().map(|e| e.title.as_str()).collect();
        assert_eq!(monday, ["Physics", "Calculus"]);
    }

    #[test_context(PlannerTestContext)]
    #[test]
    fn test_week_and_upcoming(ctx: &mut PlannerTestContext) {
        let mut schedule = Schedule::open(&ctx.storage);
        schedule.add(event("Calculus", 2, Some(10))).unwrap();
        schedule.add(event("Club", 9, None)).unwrap();
        schedule.add(event("Exam", 20, None)).unwrap();

        // 2024-09-04 is a Wednesday; its week runs Sunday 1st to Saturday 7th.
        let week = schedule.week(date(4));
        assert_eq!(week.first().unwrap().0, date(1));
        assert_eq!(week.last().unwrap().0, date(7));
        assert_eq!(week.iter().map(|(_, events)| events.len()).sum::<usize>(), 1);

        let soon: Vec<_> = schedule.upcoming(date(2), 7).iter().map(|e| e.title.as_str()).collect();
        assert_eq!(soon, ["Calculus", "Club"]);
    }

    #[test_context(PlannerTestContext)]
    #[test]
    fn test_event_delete_miss_is_a_no_op(ctx: &mut PlannerTestContext) {
        let mut schedule = Schedule::open(&ctx.storage);
        let added = schedule.add(event("Calculus", 2, None)).unwrap();

        assert!(!schedule.delete(added.id + 1));
        assert_eq!(schedule.list().len(), 1);
        assert!(schedule.delete(added.id));
        assert!(schedule.list().is_empty());
    }

    #[test_context(PlannerTestContext)]
    #[test]
    fn test_ledger_balance(ctx: &mut PlannerTestContext) {
        let mut ledger = Ledger::open(&ctx.storage);
        ledger
            .add(TransactionDraft {
                title: "Stipend".to_string(),
                amount: "100".to_string(),
                kind: TransactionKind::Income,
                ..TransactionDraft::default()
            })
            .unwrap();
        let books = ledger
            .add(TransactionDraft {
                title: "Books".to_string(),
                amount: "40".to_string(),
                kind: TransactionKind::Expense,
                category: String::new(),
                date: Some(date(3)),
            })
            .unwrap();

        assert_eq!(ledger.list()[0].title, "Books");
        assert_eq!(books.category, DEFAULT_CATEGORY);
        assert_eq!(ledger.balance(), 60.0);
        assert_eq!(ledger.totals().income, 100.0);
        assert_eq!(ledger.totals().expense, 40.0);

        assert!(ledger.delete(books.id));
        assert_eq!(ledger.balance(), 100.0);
    }

    #[test_context(PlannerTestContext)]
    #[test]
    fn test_invalid_amount_is_rejected(ctx: &mut PlannerTestContext) {
        let mut ledger = Ledger::open(&ctx.storage);
        let draft = TransactionDraft {
            title: "Snacks".to_string(),
            amount: "lots".to_string(),
            ..TransactionDraft::default()
        };

        assert!(ledger.add(draft).is_none());
        assert!(ledger.list().is_empty());
    }
}
