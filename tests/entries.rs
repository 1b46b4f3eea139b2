#[cfg(test)]
mod tests {
    use chrono::{Duration, FixedOffset};
    use ponto::db::entries::TimeEntries;
    use ponto::libs::accumulator::DailyAccumulator;
    use ponto::libs::data_storage::DataStorage;
    use ponto::libs::day::Locale;
    use ponto::libs::event::{EventKind, IntoClockEvents};
    use ponto::libs::timestamp::EventNormalizer;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct EntriesTestContext {
        _temp_dir: TempDir,
        entries: TimeEntries,
        normalizer: EventNormalizer,
    }

    impl TestContext for EntriesTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let entries = TimeEntries::in_storage(&DataStorage::at(temp_dir.path())).unwrap();
            EntriesTestContext {
                _temp_dir: temp_dir,
                entries,
                normalizer: EventNormalizer::default(),
            }
        }
    }

    #[test_context(EntriesTestContext)]
    #[test]
    fn test_insert_and_fetch(ctx: &mut EntriesTestContext) {
        let start = ctx.normalizer.now() - Duration::hours(3);
        let end = start + Duration::hours(2);
        ctx.entries.insert("alice", &EventKind::ClockIn, &start, Some("remote")).unwrap();
        ctx.entries.insert("alice", &EventKind::ClockOut, &end, None).unwrap();

        let rows = ctx.entries.fetch_window("alice", 7).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].kind, "entrada");
        assert_eq!(rows[0].note.as_deref(), Some("remote"));
        assert_eq!(rows[1].kind, "saida");
        assert_eq!(rows[1].note, None);

        // stored with microsecond precision
        let stored = ctx.normalizer.parse(&rows[0].timestamp).unwrap();
        assert_eq!(stored.timestamp_micros(), start.timestamp_micros());
    }

    #[test_context(EntriesTestContext)]
    #[test]
    fn test_fetch_orders_by_instant(ctx: &mut EntriesTestContext) {
        let now = ctx.normalizer.now();
        ctx.entries.insert("alice", &EventKind::ClockOut, &(now - Duration::hours(1)), None).unwrap();
        ctx.entries.insert("alice", &EventKind::ClockIn, &(now - Duration::hours(5)), None).unwrap();

        let rows = ctx.entries.fetch_window("alice", 7).unwrap();
        let kinds: Vec<&str> = rows.iter().map(|row| row.kind.as_str()).collect();
        assert_eq!(kinds, vec!["entrada", "saida"]);
    }

    #[test_context(EntriesTestContext)]
    #[test]
    fn test_fetch_orders_across_offsets(ctx: &mut EntriesTestContext) {
        let now = ctx.normalizer.now();
        let earlier_utc = (now - Duration::hours(2)).with_timezone(&FixedOffset::east_opt(0).unwrap());
        ctx.entries.insert("alice", &EventKind::ClockOut, &(now - Duration::hours(1)), None).unwrap();
        ctx.entries.insert("alice", &EventKind::ClockIn, &earlier_utc, None).unwrap();

        let rows = ctx.entries.fetch_window("alice", 7).unwrap();
        assert_eq!(rows[0].kind, "entrada");
        assert_eq!(rows[1].kind, "saida");
    }

    #[test_context(EntriesTestContext)]
    #[test]
    fn test_equal_timestamps_keep_insertion_order(ctx: &mut EntriesTestContext) {
        let at = ctx.normalizer.now() - Duration::hours(1);
        ctx.entries.insert("alice", &EventKind::Pause, &at, None).unwrap();
        ctx.entries.insert("alice", &EventKind::Resume, &at, None).unwrap();

        let rows = ctx.entries.fetch_window("alice", 7).unwrap();
        let kinds: Vec<&str> = rows.iter().map(|row| row.kind.as_str()).collect();
        assert_eq!(kinds, vec!["pausa", "retorno"]);
    }

    #[test_context(EntriesTestContext)]
    #[test]
    fn test_window_excludes_old_rows(ctx: &mut EntriesTestContext) {
        let now = ctx.normalizer.now();
        ctx.entries.insert("alice", &EventKind::ClockIn, &(now - Duration::days(30)), None).unwrap();
        ctx.entries.insert("alice", &EventKind::ClockIn, &(now - Duration::days(2)), None).unwrap();

        assert_eq!(ctx.entries.fetch_window("alice", 7).unwrap().len(), 1);
        assert_eq!(ctx.entries.fetch_window("alice", 60).unwrap().len(), 2);
    }

    #[test_context(EntriesTestContext)]
    #[test]
    fn test_subjects_are_isolated(ctx: &mut EntriesTestContext) {
        let at = ctx.normalizer.now() - Duration::hours(1);
        ctx.entries.insert("alice", &EventKind::ClockIn, &at, None).unwrap();
        ctx.entries.insert("bob", &EventKind::Pause, &at, None).unwrap();

        assert_eq!(ctx.entries.fetch_window("alice", 7).unwrap().len(), 1);
        assert_eq!(ctx.entries.count("bob").unwrap(), 1);
        assert!(ctx.entries.fetch_window("carol", 7).unwrap().is_empty());
    }

    #[test_context(EntriesTestContext)]
    #[test]
    fn test_last_kind(ctx: &mut EntriesTestContext) {
        assert_eq!(ctx.entries.last_kind("alice").unwrap(), None);

        let now = ctx.normalizer.now();
        ctx.entries.insert("alice", &EventKind::ClockIn, &(now - Duration::hours(2)), None).unwrap();
        ctx.entries.insert("alice", &EventKind::Pause, &(now - Duration::hours(1)), None).unwrap();

        assert_eq!(ctx.entries.last_kind("alice").unwrap(), Some(EventKind::Pause));
    }

    #[test_context(EntriesTestContext)]
    #[test]
    fn test_count_and_clear(ctx: &mut EntriesTestContext) {
        let at = ctx.normalizer.now();
        ctx.entries.insert("alice", &EventKind::ClockIn, &at, None).unwrap();
        ctx.entries.insert("alice", &EventKind::ClockOut, &at, None).unwrap();
        ctx.entries.insert("bob", &EventKind::ClockIn, &at, None).unwrap();

        assert_eq!(ctx.entries.count("alice").unwrap(), 2);
        assert_eq!(ctx.entries.clear("alice").unwrap(), 2);
        assert_eq!(ctx.entries.count("alice").unwrap(), 0);
        assert_eq!(ctx.entries.count("bob").unwrap(), 1);
        assert_eq!(ctx.entries.clear("alice").unwrap(), 0);
    }

    #[test_context(EntriesTestContext)]
    #[test]
    fn test_raw_rows_are_stored_verbatim(ctx: &mut EntriesTestContext) {
        ctx.entries.insert_raw("alice", "almoco", "not a date", None).unwrap();

        assert_eq!(ctx.entries.count("alice").unwrap(), 1);
        assert_eq!(
            ctx.entries.last_kind("alice").unwrap(),
            Some(EventKind::Unknown("almoco".to_string()))
        );
    }

    #[test_context(EntriesTestContext)]
    #[test]
    fn test_stored_day_accumulates(ctx: &mut EntriesTestContext) {
        let start = ctx.normalizer.now() - Duration::days(1);
        ctx.entries.insert("alice", &EventKind::ClockIn, &start, None).unwrap();
        ctx.entries.insert("alice", &EventKind::Pause, &(start + Duration::minutes(30)), None).unwrap();
        ctx.entries.insert("alice", &EventKind::Resume, &(start + Duration::minutes(45)), None).unwrap();
        ctx.entries.insert("alice", &EventKind::ClockOut, &(start + Duration::hours(2)), None).unwrap();

        let events = ctx
            .entries
            .fetch_window("alice", 7)
            .unwrap()
            .into_clock_events("alice", &ctx.normalizer);
        assert!(events.iter().all(|event| event.recovered.is_none()));

        let result = DailyAccumulator::new(Locale::PtBr).accumulate(&events);
        assert_eq!(result.total, Duration::hours(1) + Duration::minutes(45));
    }

    #[test]
    fn test_in_memory_store() {
        let entries = TimeEntries::in_memory().unwrap();
        let at = EventNormalizer::default().now();
        entries.insert("alice", &EventKind::ClockIn, &at, None).unwrap();

        let shared = entries.clone();
        assert_eq!(shared.count("alice").unwrap(), 1);
    }
}
