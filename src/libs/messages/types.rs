#[derive(Debug, Clone)]
pub enum Message {
    // === CLOCK MESSAGES ===
    ClockRegistered {
        action: String,
        subject: String,
        time: String,
        offset: String,
    },
    ClockNote(String),
    ClockHintIn,
    ClockHintOut,
    ClockHintPause,
    ClockHintResume,
    ClockRejected(String), // reason

    // === REPORT MESSAGES ===
    ReportTitle(String, u32), // subject, days
    ReportPage(usize, usize), // page, pages
    PeriodSummary(String),    // total
    NoRecordsFound(String, u32),
    TimestampsRecovered(usize),

    // === CLEAR MESSAGES ===
    NothingToClear(String),
    ConfirmClear(String, usize),
    RecordsCleared(String, usize),
    ClearIrreversible,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleClock,
    PromptSubject,
    PromptUtcOffset,
    PromptWindowDays,
    PromptLocale,
    PromptCarryPause,

    // === GENERAL MESSAGES ===
    OperationCancelled,
    DebugModeEnabled(String), // filter
}
