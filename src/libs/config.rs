//! Configuration management for the ponto application.
//!
//! Settings are kept as pretty-printed JSON in the platform application data
//! directory (see [`DataStorage`]). A missing file is not an error: every
//! setting has a default, so ponto runs without any setup.
//!
//! ## Configuration Structure
//!
//! - **Clock Config**: target UTC offset, default report window, weekday
//!   language, pause handling across midnight and the default subject
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use ponto::libs::config::Config;
//!
//! let config = Config::read()?;
//! let clock = config.clock();
//! println!("Reports cover {} days", clock.window_days);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::day::Locale;
use crate::libs::error::PontoError;
use crate::libs::messages::Message;
use crate::libs::timestamp::{EventNormalizer, DEFAULT_UTC_OFFSET_MINUTES};
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the configured subject.
pub const SUBJECT_ENV: &str = "PONTO_SUBJECT";

/// Clock and report settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ClockConfig {
    /// Target offset east of UTC, in minutes. Day buckets and displayed times
    /// use this offset; stored timestamps without an offset are read in it.
    pub utc_offset_minutes: i32,

    /// Number of days a report covers when `--days` is not given.
    pub window_days: u32,

    /// Language of weekday abbreviations in day labels.
    pub locale: Locale,

    /// Keep a pause open across midnight instead of dropping it when the
    /// report moves on to the next day.
    pub carry_pause_across_days: bool,

    /// Subject used when none is passed on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl Default for ClockConfig {
    /// Brasília time, a 7 day window and pt-BR weekday names.
    fn default() -> Self {
        ClockConfig {
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
            window_days: 7,
            locale: Locale::PtBr,
            carry_pause_across_days: false,
            subject: None,
        }
    }
}

impl ClockConfig {
    /// Normalizer for the configured offset.
    ///
    /// # Errors
    ///
    /// Returns [`PontoError::InvalidOffset`] if the offset is a day or more.
    pub fn normalizer(&self) -> Result<EventNormalizer, PontoError> {
        EventNormalizer::from_minutes(self.utc_offset_minutes)
    }
}

/// Main configuration container.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Clock and report settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock: Option<ClockConfig>,
}

impl Config {
    /// Reads configuration from the platform data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    /// Reads configuration from `storage`, or defaults if there is no file.
    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration to the platform data directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Clock settings, falling back to defaults when the module is not configured.
    pub fn clock(&self) -> ClockConfig {
        self.clock.clone().unwrap_or_default()
    }

    /// Picks the subject: explicit argument, then `PONTO_SUBJECT`, then the config.
    ///
    /// # Errors
    ///
    /// Returns [`PontoError::SubjectRequired`] when none of them is set.
    pub fn resolve_subject(&self, explicit: Option<String>) -> Result<String, PontoError> {
        let configured = self.clock.as_ref().and_then(|clock| clock.subject.clone());
        [explicit, env::var(SUBJECT_ENV).ok(), configured]
            .into_iter()
            .flatten()
            .find(|subject| !subject.trim().is_empty())
            .ok_or(PontoError::SubjectRequired)
    }

    /// Runs the interactive configuration wizard, using current values as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.clock();
        let theme = ColorfulTheme::default();

        msg_print!(Message::ConfigModuleClock);

        let subject: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptSubject.to_string())
            .default(default.subject.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let utc_offset_minutes: i32 = Input::with_theme(&theme)
            .with_prompt(Message::PromptUtcOffset.to_string())
            .default(default.utc_offset_minutes)
            .validate_with(|minutes: &i32| -> Result<(), String> {
                EventNormalizer::from_minutes(*minutes).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()?;

        let window_days: u32 = Input::with_theme(&theme)
            .with_prompt(Message::PromptWindowDays.to_string())
            .default(default.window_days)
            .interact_text()?;

        let locales = [Locale::PtBr, Locale::En];
        let locale_index = Select::with_theme(&theme)
            .with_prompt(Message::PromptLocale.to_string())
            .items(&locales)
            .default(locales.iter().position(|l| *l == default.locale).unwrap_or(0))
            .interact()?;

        let carry_pause_across_days = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptCarryPause.to_string())
            .default(default.carry_pause_across_days)
            .interact()?;

        config.clock = Some(ClockConfig {
            utc_offset_minutes,
            window_days,
            locale: locales[locale_index],
            carry_pause_across_days,
            subject: Some(subject).filter(|s| !s.trim().is_empty()),
        });

        Ok(config)
    }
}
