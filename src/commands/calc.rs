use crate::{
    libs::{duration::compute_duration, formatter::format_duration, messages::Message, time_of_day::TimeOfDay},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct CalcArgs {
    /// Departure time, HH:MM or HH:MM:SS, or "now"
    #[arg(required = true)]
    pub depart: String,

    /// Arrival time, HH:MM or HH:MM:SS, or "now"
    #[arg(required = true)]
    pub arrivee: String,

    /// Print only the persisted field value
    #[arg(long, short)]
    pub quiet: bool,
}

pub fn cmd(args: CalcArgs) -> Result<()> {
    let depart = resolve_time(&args.depart);
    let arrivee = resolve_time(&args.arrivee);

    match compute_duration(&depart, &arrivee) {
        Some(duration) if args.quiet => msg_print!(format_duration(&duration)),
        Some(duration) => {
            msg_print!(Message::DurationPersisted(format_duration(&duration)));
            msg_success!(Message::DurationComputed(duration.humanize()));
        }
        None => msg_info!(Message::DurationPending),
    }

    Ok(())
}

/// Replaces the `now` keyword with the current local time.
pub fn resolve_time(arg: &str) -> String {
    if arg.eq_ignore_ascii_case("now") {
        TimeOfDay::from(Local::now().time()).to_string()
    } else {
        arg.to_string()
    }
}
