/// Every user-facing message of the application.
///
/// Text lives in the `Display` implementation in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === DURATION MESSAGES ===
    DurationComputed(String), // humanized duration, e.g. "2h30"
    DurationPersisted(String), // persisted field text
    DurationPending,

    // === FORM MESSAGES ===
    FormLoaded(String), // path
    FormSaved(String), // path
    FormFieldsMissing(String), // comma-separated field names
    FormAlreadyAttached,
    FormAttached,
    FormUnchanged,
    FormLoadFailed(String), // path

    // === WATCH MESSAGES ===
    WatchStarted,
    WatchUsage,
    WatchStopped,
    WatchInvalidLine(String),
    WatchReadFailed(String), // io error
    WatchFieldsConflict(String), // configured field names

    // === AUDIT MESSAGES ===
    AuditHeader(String), // path
    AuditSummary(usize, usize, usize), // ok, mismatched, unparseable
    AuditAllConsistent,
    AuditFixWritten(String), // path
    AuditReadFailed(String), // path

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    ConfigSaveError,
    ConfigModuleFields,
    ConfigModuleAudit,
    ConfigModuleStatus,
    PromptSelectModules,
    PromptDepartureField,
    PromptArrivalField,
    PromptDurationField,
    PromptCsvDelimiter,
    PromptStatusPrefix,
    InvalidCsvDelimiter,
}
