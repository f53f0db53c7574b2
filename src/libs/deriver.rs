//! Automatic duration field derivation.
//!
//! [`DurationDeriver`] keeps the duration field of a form in sync with its
//! departure and arrival time fields. It is a pure function of the two
//! current input values:
//!
//! ```text
//!   ┌─────────┐  both inputs parse   ┌──────────┐
//!   │ Pending │ ───────────────────▶ │ Computed │
//!   │         │ ◀─────────────────── │          │
//!   └─────────┘  either unparseable  └──────────┘
//! ```
//!
//! In `Computed`, the formatted duration overwrites whatever the duration
//! field held, manual edits included, the field's validation error is
//! cleared and an advisory status message is set. In `Pending` nothing is
//! touched. Re-running with the same inputs writes the same value again.
//!
//! [`Wiring`] is the component state a host keeps per form: whether the
//! deriver is attached, and which [`TriggerEvent`]s cause a re-derivation.
//! Hosts call [`Wiring::attach`] again on their own readiness signal when
//! fields were not available yet, rather than polling.

use super::binding::{FieldNames, FormBinding};
use super::duration::{compute_duration, Duration};
use super::formatter::format_duration;
use super::messages::Message;
use crate::msg_debug;

/// Status message prefix used unless configured otherwise.
pub const DEFAULT_STATUS_PREFIX: &str = "Duration computed automatically";

/// Outcome of one derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeriverState {
    /// One or both inputs unparseable. No field was written.
    Pending,
    /// Both inputs valid. The duration field now holds this value.
    Computed(Duration),
}

impl DeriverState {
    pub fn is_computed(&self) -> bool {
        matches!(self, DeriverState::Computed(_))
    }
}

/// Field events that may trigger a re-derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerEvent {
    Change(String),
    Blur(String),
    Input(String),
    /// A keystroke in a field. Only re-derives once the other input is filled.
    KeyUp(String),
    /// The host finished initializing the form, possibly with pre-filled fields.
    Ready,
}

/// Writes the duration derived from a form's time fields back into it.
#[derive(Debug, Clone)]
pub struct DurationDeriver {
    fields: FieldNames,
    status_prefix: String,
}

impl Default for DurationDeriver {
    fn default() -> Self {
        Self::new(FieldNames::default())
    }
}

impl DurationDeriver {
    pub fn new(fields: FieldNames) -> Self {
        Self {
            fields,
            status_prefix: DEFAULT_STATUS_PREFIX.to_string(),
        }
    }

    /// Replaces the text written before the humanized duration in the status message.
    pub fn with_status_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.status_prefix = prefix.into();
        self
    }

    pub fn fields(&self) -> &FieldNames {
        &self.fields
    }

    pub fn status_prefix(&self) -> &str {
        &self.status_prefix
    }

    /// Derives from explicit input values and applies the result to `binding`.
    pub fn apply_to_form<B: FormBinding + ?Sized>(&self, binding: &mut B, depart: &str, arrivee: &str) -> DeriverState {
        let Some(duration) = compute_duration(depart, arrivee) else {
            msg_debug!(format!("pending: depart='{}' arrivee='{}'", depart, arrivee));
            return DeriverState::Pending;
        };

        let persisted = format_duration(&duration);
        binding.set_value(&self.fields.duration, &persisted);
        binding.clear_error(&self.fields.duration);
        binding.set_status(&self.fields.duration, &format!("{}: {}", self.status_prefix, duration.humanize()));

        msg_debug!(format!("computed: {} -> {} = {}", depart, arrivee, persisted));
        DeriverState::Computed(duration)
    }

    /// Reads both input fields once and applies the derived duration.
    ///
    /// A field missing from the binding reads as empty.
    pub fn derive<B: FormBinding + ?Sized>(&self, binding: &mut B) -> DeriverState {
        let depart = binding.value(&self.fields.departure).unwrap_or_default();
        let arrivee = binding.value(&self.fields.arrival).unwrap_or_default();
        self.apply_to_form(binding, &depart, &arrivee)
    }

    /// Handles a field event. Returns `None` when the event does not
    /// trigger a derivation.
    pub fn handle<B: FormBinding + ?Sized>(&self, binding: &mut B, event: &TriggerEvent) -> Option<DeriverState> {
        let triggers = match event {
            TriggerEvent::Change(field) | TriggerEvent::Blur(field) | TriggerEvent::Input(field) => {
                self.fields.counterpart(field).is_some()
            }
            TriggerEvent::KeyUp(field) => self
                .fields
                .counterpart(field)
                .is_some_and(|other| is_filled(binding.value(other))),
            TriggerEvent::Ready => {
                is_filled(binding.value(&self.fields.departure)) && is_filled(binding.value(&self.fields.arrival))
            }
        };

        triggers.then(|| self.derive(binding))
    }
}

fn is_filled(value: Option<String>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Result of [`Wiring::attach`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachOutcome {
    /// Newly attached; carries the derivation run for pre-filled fields, if any.
    Attached(Option<DeriverState>),
    AlreadyAttached,
    /// The form does not expose these fields yet.
    FieldsMissing(Vec<String>),
}

/// Per-form attachment state of a [`DurationDeriver`].
#[derive(Debug, Clone, Default)]
pub struct Wiring {
    deriver: DurationDeriver,
    attached: bool,
}

impl Wiring {
    pub fn new(deriver: DurationDeriver) -> Self {
        Self { deriver, attached: false }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Attaches to `binding` once all three fields exist, then derives
    /// immediately if both inputs are already filled.
    pub fn attach<B: FormBinding + ?Sized>(&mut self, binding: &mut B) -> AttachOutcome {
        if self.attached {
            return AttachOutcome::AlreadyAttached;
        }

        let missing: Vec<String> = self
            .deriver
            .fields()
            .all()
            .iter()
            .filter(|name| !binding.has_field(name))
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            msg_debug!(format!("attach deferred, missing fields: {}", missing.join(", ")));
            return AttachOutcome::FieldsMissing(missing);
        }

        self.attached = true;
        msg_debug!(Message::FormAttached);
        AttachOutcome::Attached(self.deriver.handle(binding, &TriggerEvent::Ready))
    }

    /// Forwards an event to the deriver. Ignored until attached.
    pub fn dispatch<B: FormBinding + ?Sized>(&self, binding: &mut B, event: &TriggerEvent) -> Option<DeriverState> {
        if !self.attached {
            return None;
        }
        self.deriver.handle(binding, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::binding::FormSnapshot;

    fn form(depart: &str, arrivee: &str, duree: &str) -> FormSnapshot {
        FormSnapshot::new()
            .with_field("heure_depart", depart)
            .with_field("heure_arrivee", arrivee)
            .with_field("duree", duree)
    }

    #[test]
    fn apply_writes_value_status_and_clears_error() {
        let deriver = DurationDeriver::default();
        let mut f = form("", "", "").with_error("duree");

        let state = deriver.apply_to_form(&mut f, "08:00", "10:30");

        assert_eq!(state, DeriverState::Computed(Duration::new(0, 2, 30)));
        assert_eq!(f.value("duree").as_deref(), Some("02:30:00"));
        assert!(!f.has_error("duree"));
        assert_eq!(f.status("duree"), Some("Duration computed automatically: 2h30"));
    }

    #[test]
    fn custom_status_prefix() {
        let deriver = DurationDeriver::default().with_status_prefix("Durée calculée");
        let mut f = form("09:00", "09:05", "");

        deriver.derive(&mut f);
        assert_eq!(f.status("duree"), Some("Durée calculée: 0h05"));
    }

    #[test]
    fn pending_leaves_form_untouched() {
        let deriver = DurationDeriver::default();
        let mut f = form("", "10:00", "01:00:00").with_error("duree");
        let before = f.clone();

        assert_eq!(deriver.derive(&mut f), DeriverState::Pending);
        assert_eq!(f, before);
    }

    #[test]
    fn overwrites_manual_value() {
        let deriver = DurationDeriver::default();
        let mut f = form("23:00", "01:00", "5 00:00:00");

        deriver.derive(&mut f);
        assert_eq!(f.value("duree").as_deref(), Some("02:00:00"));
    }

    #[test]
    fn change_and_blur_always_derive() {
        let deriver = DurationDeriver::default();
        let mut f = form("08:00", "09:15", "");

        let state = deriver.handle(&mut f, &TriggerEvent::Change("heure_depart".into()));
        assert_eq!(state, Some(DeriverState::Computed(Duration::new(0, 1, 15))));

        let state = deriver.handle(&mut f, &TriggerEvent::Blur("heure_arrivee".into()));
        assert!(state.is_some_and(|s| s.is_computed()));
    }

    #[test]
    fn change_on_unrelated_field_is_ignored() {
        let deriver = DurationDeriver::default();
        let mut f = form("08:00", "09:15", "");

        assert_eq!(deriver.handle(&mut f, &TriggerEvent::Input("prix_base".into())), None);
        assert_eq!(deriver.handle(&mut f, &TriggerEvent::Change("duree".into())), None);
        assert_eq!(f.value("duree").as_deref(), Some(""));
    }

    #[test]
    fn keyup_waits_for_other_field() {
        let deriver = DurationDeriver::default();
        let mut f = form("08:0", "", "");

        assert_eq!(deriver.handle(&mut f, &TriggerEvent::KeyUp("heure_depart".into())), None);

        f.set_value("heure_arrivee", "09");
        // Arrival is filled but not yet parseable: derivation runs, stays pending.
        assert_eq!(
            deriver.handle(&mut f, &TriggerEvent::KeyUp("heure_depart".into())),
            Some(DeriverState::Pending)
        );
    }

    #[test]
    fn ready_requires_both_inputs() {
        let deriver = DurationDeriver::default();

        let mut empty = form("08:00", "", "");
        assert_eq!(deriver.handle(&mut empty, &TriggerEvent::Ready), None);

        let mut filled = form("08:00", "08:45", "");
        assert_eq!(
            deriver.handle(&mut filled, &TriggerEvent::Ready),
            Some(DeriverState::Computed(Duration::new(0, 0, 45)))
        );
    }

    #[test]
    fn custom_field_names() {
        let deriver = DurationDeriver::new(FieldNames {
            departure: "start".into(),
            arrival: "end".into(),
            duration: "elapsed".into(),
        });
        let mut f = FormSnapshot::new()
            .with_field("start", "10:00")
            .with_field("end", "11:00")
            .with_field("elapsed", "");

        deriver.derive(&mut f);
        assert_eq!(f.value("elapsed").as_deref(), Some("01:00:00"));
    }

    #[test]
    fn attach_reports_missing_fields() {
        let mut wiring = Wiring::default();
        let mut f = FormSnapshot::new().with_field("heure_depart", "08:00");

        assert_eq!(
            wiring.attach(&mut f),
            AttachOutcome::FieldsMissing(vec!["heure_arrivee".into(), "duree".into()])
        );
        assert!(!wiring.is_attached());
        assert_eq!(wiring.dispatch(&mut f, &TriggerEvent::Change("heure_depart".into())), None);
    }

    #[test]
    fn attach_once_and_derive_prefilled() {
        let mut wiring = Wiring::default();
        let mut f = form("07:10", "09:40", "");

        assert_eq!(
            wiring.attach(&mut f),
            AttachOutcome::Attached(Some(DeriverState::Computed(Duration::new(0, 2, 30))))
        );
        assert_eq!(f.value("duree").as_deref(), Some("02:30:00"));
        assert_eq!(wiring.attach(&mut f), AttachOutcome::AlreadyAttached);
    }

    #[test]
    fn dispatch_after_attach() {
        let mut wiring = Wiring::default();
        let mut f = form("", "", "");
        assert_eq!(wiring.attach(&mut f), AttachOutcome::Attached(None));

        f.set_value("heure_depart", "22:00");
        f.set_value("heure_arrivee", "03:30");
        let state = wiring.dispatch(&mut f, &TriggerEvent::Input("heure_arrivee".into()));
        assert_eq!(state, Some(DeriverState::Computed(Duration::new(0, 5, 30))));
    }
}
