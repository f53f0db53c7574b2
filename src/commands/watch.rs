use crate::{
    libs::{
        binding::{FormBinding, FormSnapshot},
        config::Config,
        deriver::{AttachOutcome, DeriverState, DurationDeriver, TriggerEvent, Wiring},
        formatter::format_duration,
        messages::Message,
    },
    msg_bail_anyhow, msg_error, msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use std::collections::BTreeSet;
use std::io::{self, BufRead};

pub fn cmd() -> Result<()> {
    let deriver = Config::read()?.deriver();

    msg_info!(Message::WatchStarted);
    msg_info!(Message::WatchUsage);
    run(io::stdin().lock(), deriver)?;
    msg_info!(Message::WatchStopped);

    Ok(())
}

/// Feeds each `<depart> <arrivee>` line to a live form.
///
/// Both fields are updated before a single change event fires, so every
/// derivation sees the pair as entered. `-` stands for an empty field.
/// Returns the form as left by the last line.
pub fn run<R: BufRead>(input: R, deriver: DurationDeriver) -> Result<FormSnapshot> {
    let fields = deriver.fields().clone();
    let names = fields.all();
    if names.iter().collect::<BTreeSet<_>>().len() != names.len() {
        msg_bail_anyhow!(Message::WatchFieldsConflict(names.join(", ")));
    }

    let mut form = FormSnapshot::new()
        .with_field(&fields.departure, "")
        .with_field(&fields.arrival, "")
        .with_field(&fields.duration, "");

    let mut wiring = Wiring::new(deriver);
    match wiring.attach(&mut form) {
        AttachOutcome::Attached(_) => {}
        AttachOutcome::FieldsMissing(missing) => msg_bail_anyhow!(Message::FormFieldsMissing(missing.join(", "))),
        AttachOutcome::AlreadyAttached => msg_bail_anyhow!(Message::FormAlreadyAttached),
    }

    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                msg_error!(Message::WatchReadFailed(e.to_string()));
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let values: Vec<&str> = line.split_whitespace().collect();
        let [depart, arrivee] = values[..] else {
            msg_warning!(Message::WatchInvalidLine(line.to_string()));
            continue;
        };

        form.set_value(&fields.departure, if depart == "-" { "" } else { depart });
        form.set_value(&fields.arrival, if arrivee == "-" { "" } else { arrivee });

        match wiring.dispatch(&mut form, &TriggerEvent::Change(fields.arrival.clone())) {
            Some(DeriverState::Computed(duration)) => msg_print!(format!(
                "{} → {}  {}  ({})",
                depart,
                arrivee,
                format_duration(&duration),
                duration.humanize()
            )),
            _ => msg_info!(Message::DurationPending),
        }
    }

    Ok(form)
}
