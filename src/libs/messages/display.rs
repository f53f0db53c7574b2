//! Display implementation for application messages.
//!
//! All message text is defined here, in one match, so wording stays
//! consistent across commands and can be localized in one place.

use super::types::Message;
use crate::libs::deriver::DEFAULT_STATUS_PREFIX;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === DURATION MESSAGES ===
            Message::DurationComputed(humanized) => format!("{}: {}", DEFAULT_STATUS_PREFIX, humanized),
            Message::DurationPersisted(value) => format!("Duration field value: {}", value),
            Message::DurationPending => "Both departure and arrival times are required to compute the duration".to_string(),

            // === FORM MESSAGES ===
            Message::FormLoaded(path) => format!("Form loaded from {}", path),
            Message::FormSaved(path) => format!("Form saved to {}", path),
            Message::FormFieldsMissing(fields) => format!("Form fields not found: {}", fields),
            Message::FormAlreadyAttached => "Duration deriver is already attached to this form".to_string(),
            Message::FormAttached => "Duration deriver attached to form".to_string(),
            Message::FormUnchanged => "Form left unchanged".to_string(),
            Message::FormLoadFailed(path) => format!("Failed to load form from {}", path),

            // === WATCH MESSAGES ===
            Message::WatchStarted => "Watching for departure/arrival changes".to_string(),
            Message::WatchUsage => "Enter '<departure> <arrival>' per line, an empty time as '-', Ctrl+D to stop".to_string(),
            Message::WatchStopped => "Watch stopped".to_string(),
            Message::WatchInvalidLine(line) => format!("Ignoring line '{}': expected two values", line),
            Message::WatchReadFailed(error) => format!("Skipping unreadable input line: {}", error),
            Message::WatchFieldsConflict(fields) => format!("Watch needs three distinct field names, got: {}", fields),

            // === AUDIT MESSAGES ===
            Message::AuditHeader(path) => format!("Duration audit of {}", path),
            Message::AuditSummary(ok, mismatched, unparseable) => format!(
                "{} consistent, {} mismatched, {} unparseable",
                ok, mismatched, unparseable
            ),
            Message::AuditAllConsistent => "All stored durations match their departure and arrival times".to_string(),
            Message::AuditFixWritten(path) => format!("Corrected timetable written to {}", path),
            Message::AuditReadFailed(path) => format!("Failed to read timetable {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigSaveError => "Failed to save configuration".to_string(),
            Message::ConfigModuleFields => "Form field names".to_string(),
            Message::ConfigModuleAudit => "Timetable audit".to_string(),
            Message::ConfigModuleStatus => "Status message".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptDepartureField => "Departure time field name".to_string(),
            Message::PromptArrivalField => "Arrival time field name".to_string(),
            Message::PromptDurationField => "Duration field name".to_string(),
            Message::PromptCsvDelimiter => "CSV delimiter".to_string(),
            Message::PromptStatusPrefix => "Status message prefix".to_string(),
            Message::InvalidCsvDelimiter => "Delimiter must be a single ASCII character".to_string(),
        };
        write!(f, "{}", s)
    }
}
