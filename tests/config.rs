#[cfg(test)]
mod tests {
    use ponto::libs::config::{ClockConfig, Config, CONFIG_FILE_NAME};
    use ponto::libs::data_storage::DataStorage;
    use ponto::libs::day::Locale;
    use ponto::libs::error::PontoError;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::at(temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                storage,
            }
        }
    }

    #[test]
    fn test_clock_defaults() {
        let clock = Config::default().clock();
        assert_eq!(clock.utc_offset_minutes, -180);
        assert_eq!(clock.window_days, 7);
        assert_eq!(clock.locale, Locale::PtBr);
        assert!(!clock.carry_pause_across_days);
        assert_eq!(clock.subject, None);
        assert_eq!(clock.normalizer().unwrap().offset().local_minus_utc(), -3 * 3600);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_reads_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let config = Config {
            clock: Some(ClockConfig {
                utc_offset_minutes: 60,
                window_days: 14,
                locale: Locale::En,
                carry_pause_across_days: true,
                subject: Some("alice".to_string()),
            }),
        };
        config.save_to(&ctx.storage).unwrap();

        assert!(ctx.storage.get_path(CONFIG_FILE_NAME).unwrap().exists());
        assert_eq!(Config::read_from(&ctx.storage).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_fills_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(path, r#"{"clock": {"window_days": 30, "locale": "en"}}"#).unwrap();

        let clock = Config::read_from(&ctx.storage).unwrap().clock();
        assert_eq!(clock.window_days, 30);
        assert_eq!(clock.locale, Locale::En);
        assert_eq!(clock.utc_offset_minutes, -180);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_file_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(path, "{ not json").unwrap();

        assert!(Config::read_from(&ctx.storage).is_err());
    }

    #[test]
    fn test_invalid_offset_is_rejected() {
        let clock = ClockConfig {
            utc_offset_minutes: 2000,
            ..ClockConfig::default()
        };
        assert_eq!(clock.normalizer(), Err(PontoError::InvalidOffset(2000)));
    }

    #[test]
    fn test_explicit_subject_wins() {
        let config = Config {
            clock: Some(ClockConfig {
                subject: Some("alice".to_string()),
                ..ClockConfig::default()
            }),
        };
        assert_eq!(config.resolve_subject(Some("bob".to_string())).unwrap(), "bob");
    }

    #[test]
    fn test_blank_explicit_subject_is_skipped() {
        let config = Config {
            clock: Some(ClockConfig {
                subject: Some("alice".to_string()),
                ..ClockConfig::default()
            }),
        };
        let subject = config.resolve_subject(Some("  ".to_string())).unwrap();
        assert!(!subject.trim().is_empty());
    }
}
