use crate::{
    libs::{
        binding::FormSnapshot,
        config::Config,
        deriver::{AttachOutcome, DeriverState, DurationDeriver, Wiring},
        messages::Message,
        view::View,
    },
    msg_bail_anyhow, msg_debug, msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct FormArgs {
    /// JSON form snapshot to update
    #[arg(required = true)]
    pub path: PathBuf,

    /// Write the updated snapshot here instead of overwriting the input
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Show the result without saving it
    #[arg(long)]
    pub dry_run: bool,
}

pub fn cmd(args: FormArgs) -> Result<()> {
    let config = Config::read()?;
    let mut form =
        FormSnapshot::load(&args.path).map_err(|_| msg_error_anyhow!(Message::FormLoadFailed(args.path.display().to_string())))?;

    msg_debug!(Message::FormLoaded(args.path.display().to_string()));

    let fields = config.field_names();
    let state = apply(&mut form, config.deriver())?;
    View::form(&form, &fields);

    match state {
        DeriverState::Computed(_) => {
            if let Some(status) = form.status(&fields.duration) {
                msg_success!(status);
            }
        }
        DeriverState::Pending => {
            msg_info!(Message::DurationPending);
            msg_info!(Message::FormUnchanged);
            return Ok(());
        }
    }

    if !args.dry_run {
        let output = args.output.unwrap_or(args.path);
        form.save(&output)?;
        msg_success!(Message::FormSaved(output.display().to_string()));
    }

    Ok(())
}

/// Attaches a fresh wiring to `form` and runs the initial derivation.
pub fn apply(form: &mut FormSnapshot, deriver: DurationDeriver) -> Result<DeriverState> {
    let mut wiring = Wiring::new(deriver);
    match wiring.attach(form) {
        AttachOutcome::Attached(state) => Ok(state.unwrap_or(DeriverState::Pending)),
        AttachOutcome::FieldsMissing(fields) => msg_bail_anyhow!(Message::FormFieldsMissing(fields.join(", "))),
        AttachOutcome::AlreadyAttached => msg_bail_anyhow!(Message::FormAlreadyAttached),
    }
}
