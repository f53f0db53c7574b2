//! Timetable duration audit.
//!
//! Stored timetables carry a hand-entered duration next to each train's
//! departure and arrival times. The audit re-derives every duration with the
//! same rule the form uses and classifies each row:
//!
//! - `Ok`: the stored duration equals the derived one
//! - `Mismatch`: both are readable but differ
//! - `Unparseable`: times are incomplete, or the stored text is not a duration
//!
//! Input is CSV with the header `numero,heure_depart,heure_arrivee,duree`.

use super::duration::{compute_duration, Duration};
use super::formatter::{format_duration, parse_persisted};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// One timetable entry as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableRow {
    pub numero: String,
    pub heure_depart: String,
    pub heure_arrivee: String,
    #[serde(default)]
    pub duree: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditStatus {
    Ok,
    Mismatch,
    Unparseable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditFinding {
    pub row: TimetableRow,
    pub stored: Option<Duration>,
    pub derived: Option<Duration>,
    pub status: AuditStatus,
}

impl AuditFinding {
    pub fn check(row: TimetableRow) -> Self {
        let derived = compute_duration(&row.heure_depart, &row.heure_arrivee);
        let stored = parse_persisted(&row.duree).ok();

        let status = match (stored, derived) {
            (Some(s), Some(d)) if s == d => AuditStatus::Ok,
            (Some(_), Some(_)) => AuditStatus::Mismatch,
            _ => AuditStatus::Unparseable,
        };

        Self {
            row,
            stored,
            derived,
            status,
        }
    }

    /// Derived minus stored duration, in minutes, when both are known.
    pub fn drift_minutes(&self) -> Option<i64> {
        match (self.stored, self.derived) {
            (Some(stored), Some(derived)) => Some((derived.to_chrono() - stored.to_chrono()).num_minutes()),
            _ => None,
        }
    }

    /// The row with its duration replaced by the derived value, when known.
    pub fn corrected(&self) -> TimetableRow {
        let mut row = self.row.clone();
        if let Some(derived) = &self.derived {
            row.duree = format_duration(derived);
        }
        row
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    pub findings: Vec<AuditFinding>,
}

impl AuditReport {
    pub fn count(&self, status: AuditStatus) -> usize {
        self.findings.iter().filter(|f| f.status == status).count()
    }

    pub fn is_consistent(&self) -> bool {
        self.findings.iter().all(|f| f.status == AuditStatus::Ok)
    }
}

/// Reads a timetable from CSV and checks every row.
pub fn audit<R: Read>(reader: R, delimiter: u8) -> Result<AuditReport> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut findings = Vec::new();
    for record in csv_reader.deserialize::<TimetableRow>() {
        findings.push(AuditFinding::check(record?));
    }

    Ok(AuditReport { findings })
}

/// Writes the timetable back with derived durations in place of stored ones.
pub fn write_corrected<W: Write>(report: &AuditReport, writer: W, delimiter: u8) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new().delimiter(delimiter).from_writer(writer);
    for finding in &report.findings {
        csv_writer.serialize(finding.corrected())?;
    }
    csv_writer.flush()?;
    Ok(())
}
