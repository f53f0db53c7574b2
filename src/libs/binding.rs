//! Seam between the duration deriver and the live form fields.
//!
//! The form layer owns its fields; the deriver only sees them as named
//! read/write slots through [`FormBinding`]. [`FormSnapshot`] is an
//! in-memory binding that serializes to JSON, used by the command line
//! front end and by tests.
//!
//! ## Snapshot format
//!
//! ```json
//! {
//!   "fields": { "heure_depart": "08:00", "heure_arrivee": "10:30", "duree": "" },
//!   "errors": ["duree"],
//!   "status": {}
//! }
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::{self, File};
use std::path::Path;

/// Stable names of the three fields the deriver works with.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FieldNames {
    pub departure: String,
    pub arrival: String,
    pub duration: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        FieldNames {
            departure: "heure_depart".to_string(),
            arrival: "heure_arrivee".to_string(),
            duration: "duree".to_string(),
        }
    }
}

impl FieldNames {
    /// The field paired with `name` for derivation, if `name` is an input field.
    pub fn counterpart(&self, name: &str) -> Option<&str> {
        if name == self.departure {
            Some(&self.arrival)
        } else if name == self.arrival {
            Some(&self.departure)
        } else {
            None
        }
    }

    pub fn all(&self) -> [&str; 3] {
        [&self.departure, &self.arrival, &self.duration]
    }
}

/// Read/write access to named form fields.
///
/// Implementations are provided by whatever hosts the form. A field the
/// host does not know about reads as `None`; writes to it are ignored.
pub trait FormBinding {
    fn has_field(&self, name: &str) -> bool;

    fn value(&self, name: &str) -> Option<String>;

    fn set_value(&mut self, name: &str, value: &str);

    /// Removes the validation-error indicator attached to a field.
    fn clear_error(&mut self, name: &str);

    /// Sets the advisory status text displayed next to a field.
    fn set_status(&mut self, name: &str, message: &str);
}

/// Serializable form state: field values, fields flagged with a
/// validation error, and per-field status messages.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    #[serde(default)]
    pub fields: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub errors: BTreeSet<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub status: BTreeMap<String, String>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field initialization.
    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_error(mut self, name: &str) -> Self {
        self.errors.insert(name.to_string());
        self
    }

    pub fn has_error(&self, name: &str) -> bool {
        self.errors.contains(name)
    }

    pub fn status(&self, name: &str) -> Option<&str> {
        self.status.get(name).map(String::as_str)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let snapshot = serde_json::from_str(&content)?;
        Ok(snapshot)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(&file, &self)?;
        Ok(())
    }
}

impl FormBinding for FormSnapshot {
    fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    fn value(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    fn set_value(&mut self, name: &str, value: &str) {
        if let Some(slot) = self.fields.get_mut(name) {
            *slot = value.to_string();
        }
    }

    fn clear_error(&mut self, name: &str) {
        self.errors.remove(name);
    }

    fn set_status(&mut self, name: &str, message: &str) {
        self.status.insert(name.to_string(), message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_field_names() {
        let names = FieldNames::default();
        assert_eq!(names.all(), ["heure_depart", "heure_arrivee", "duree"]);
    }

    #[test]
    fn counterpart_pairs_inputs() {
        let names = FieldNames::default();
        assert_eq!(names.counterpart("heure_depart"), Some("heure_arrivee"));
        assert_eq!(names.counterpart("heure_arrivee"), Some("heure_depart"));
        assert_eq!(names.counterpart("duree"), None);
        assert_eq!(names.counterpart("prix_base"), None);
    }

    #[test]
    fn set_value_ignores_unknown_fields() {
        let mut form = FormSnapshot::new().with_field("duree", "");
        form.set_value("duree", "01:00:00");
        form.set_value("numero", "TGV 6201");
        assert_eq!(form.value("duree").as_deref(), Some("01:00:00"));
        assert!(!form.has_field("numero"));
    }

    #[test]
    fn clear_error_removes_flag() {
        let mut form = FormSnapshot::new().with_field("duree", "").with_error("duree");
        assert!(form.has_error("duree"));
        form.clear_error("duree");
        assert!(!form.has_error("duree"));
    }

    #[test]
    fn deserializes_without_optional_sections() {
        let form: FormSnapshot = serde_json::from_str(r#"{"fields": {"duree": "02:00:00"}}"#).unwrap();
        assert_eq!(form.value("duree").as_deref(), Some("02:00:00"));
        assert!(form.errors.is_empty());
        assert!(form.status.is_empty());
    }
}
