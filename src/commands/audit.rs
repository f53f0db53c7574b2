use crate::{
    libs::{
        audit::{self, AuditStatus},
        config::Config,
        messages::Message,
        view::View,
    },
    msg_error_anyhow, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::fs::File;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct AuditArgs {
    /// CSV timetable with numero, heure_depart, heure_arrivee and duree columns
    #[arg(required = true)]
    pub path: PathBuf,

    /// Write a corrected timetable to this file
    #[arg(long)]
    pub fix: Option<PathBuf>,

    /// Field delimiter, overrides the configured one
    #[arg(long, short)]
    pub delimiter: Option<char>,
}

pub fn cmd(args: AuditArgs) -> Result<()> {
    let mut audit_config = Config::read()?.audit();
    if let Some(delimiter) = args.delimiter {
        audit_config.delimiter = delimiter;
    }
    let delimiter = audit_config.delimiter_byte()?;

    let path_str = args.path.display().to_string();
    let file = File::open(&args.path).map_err(|_| msg_error_anyhow!(Message::AuditReadFailed(path_str.clone())))?;
    let report = audit::audit(file, delimiter)?;

    msg_print!(Message::AuditHeader(path_str), true);
    View::audit(&report);

    let summary = Message::AuditSummary(
        report.count(AuditStatus::Ok),
        report.count(AuditStatus::Mismatch),
        report.count(AuditStatus::Unparseable),
    );
    if report.is_consistent() {
        msg_success!(Message::AuditAllConsistent);
    } else {
        msg_warning!(summary);
    }

    if let Some(fix_path) = args.fix {
        audit::write_corrected(&report, File::create(&fix_path)?, delimiter)?;
        msg_success!(Message::AuditFixWritten(fix_path.display().to_string()));
    }

    Ok(())
}
