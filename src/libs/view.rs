use super::audit::{AuditReport, AuditStatus};
use super::binding::{FieldNames, FormSnapshot};
use super::formatter::format_duration;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn audit(report: &AuditReport) {
        let mut table = Table::new();

        table.add_row(row!["NUMERO", "DEPART", "ARRIVEE", "STORED", "DERIVED", "DRIFT", "STATUS"]);
        for finding in &report.findings {
            table.add_row(row![
                finding.row.numero,
                finding.row.heure_depart,
                finding.row.heure_arrivee,
                finding.row.duree,
                finding.derived.as_ref().map(format_duration).unwrap_or_else(|| "-".to_string()),
                finding.drift_minutes().map(|m| format!("{:+}m", m)).unwrap_or_default(),
                status_label(finding.status)
            ]);
        }
        table.printstd();
    }

    pub fn form(form: &FormSnapshot, fields: &FieldNames) {
        let mut table = Table::new();

        table.add_row(row!["FIELD", "VALUE", "ERROR", "STATUS"]);
        for name in fields.all() {
            table.add_row(row![
                name,
                form.fields.get(name).map(String::as_str).unwrap_or("-"),
                if form.has_error(name) { "yes" } else { "" },
                form.status(name).unwrap_or("")
            ]);
        }
        table.printstd();
    }
}

fn status_label(status: AuditStatus) -> &'static str {
    match status {
        AuditStatus::Ok => "ok",
        AuditStatus::Mismatch => "mismatch",
        AuditStatus::Unparseable => "unparseable",
    }
}
