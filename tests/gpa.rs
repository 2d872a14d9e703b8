#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use universe::libs::data_storage::DataStorage;
    use universe::libs::gpa::{CourseDraft, Grade, Transcript, Weighting, DEFAULT_CREDITS};
    use universe::libs::storage::{Storage, StorageKey};

    struct GpaTestContext {
        _temp_dir: TempDir,
        data_storage: DataStorage,
        storage: Storage,
    }

    impl TestContext for GpaTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let data_storage = DataStorage::at(temp_dir.path());
            let storage = Storage::open_in(&data_storage).unwrap();
            GpaTestContext {
                _temp_dir: temp_dir,
                data_storage,
                storage,
            }
        }
    }

    fn course(name: &str, credits: &str, grade: Grade) -> CourseDraft {
        CourseDraft {
            name: name.to_string(),
            credits: credits.to_string(),
            grade,
        }
    }

    #[test_context(GpaTestContext)]
    #[test]
    fn test_empty_transcript(ctx: &mut GpaTestContext) {
        let transcript = Transcript::open(&ctx.storage);
        assert_eq!(transcript.gpa(), "0.00");
        assert_eq!(transcript.total_credits(), 0);
        assert_eq!(transcript.weighting(), Weighting::Credits);
    }

    #[test_context(GpaTestContext)]
    #[test]
    fn test_weighted_gpa(ctx: &mut GpaTestContext) {
        let mut transcript = Transcript::open(&ctx.storage);
        transcript.add(course("Calculus", "3", Grade::A)).unwrap();
        assert_eq!(transcript.gpa(), "4.00");

        transcript.add(course("Seminar", "1", Grade::C)).unwrap();
        // (4.0 * 3 + 2.0 * 1) / 4
        assert_eq!(transcript.gpa(), "3.50");
        assert_eq!(transcript.total_credits(), 4);
    }

    #[test_context(GpaTestContext)]
    #[test]
    fn test_weighting_toggle_persists(ctx: &mut GpaTestContext) {
        {
            let mut transcript = Transcript::open(&ctx.storage);
            transcript.add(course("Calculus", "3", Grade::A)).unwrap();
            transcript.add(course("Seminar", "1", Grade::C)).unwrap();
            assert_eq!(transcript.toggle_weighting(), Weighting::Unweighted);
            assert_eq!(transcript.gpa(), "3.00");
        }

        let reopened = Storage::open_in(&ctx.data_storage).unwrap();
        assert!(!reopened.get(&StorageKey::GPA_WEIGHTED, true));
        let mut transcript = Transcript::open(&reopened);
        assert_eq!(transcript.weighting(), Weighting::Unweighted);

        transcript.set_weighted(true);
        assert_eq!(transcript.gpa(), "3.50");
    }

    #[test_context(GpaTestContext)]
    #[test]
    fn test_credit_validation(ctx: &mut GpaTestContext) {
        let mut transcript = Transcript::open(&ctx.storage);

        let defaulted = transcript.add(course("History", "lots", Grade::BPlus)).unwrap();
        assert_eq!(defaulted.credits, DEFAULT_CREDITS);
        assert!(transcript.add(course("Thesis", "12", Grade::A)).is_none());
        assert!(transcript.add(course(" ", "3", Grade::A)).is_none());

        assert_eq!(transcript.list().len(), 1);
        assert!(!transcript.delete(defaulted.id + 1));
        assert!(transcript.delete(defaulted.id));
        assert_eq!(transcript.gpa(), "0.00");
    }
}
