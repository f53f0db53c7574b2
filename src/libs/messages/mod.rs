//! Centralized user-facing messages and the macros that print them.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameterized_messages() {
        assert_eq!(
            Message::DurationComputed("2h30".into()).to_string(),
            "Duration computed automatically: 2h30"
        );
        assert_eq!(Message::AuditSummary(3, 1, 0).to_string(), "3 consistent, 1 mismatched, 0 unparseable");
        assert_eq!(
            Message::FormFieldsMissing("duree".into()).to_string(),
            "Form fields not found: duree"
        );
    }
}
