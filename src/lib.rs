//! # Duree - automatic train duration derivation
//!
//! Keeps the duration field of a train timetable form in sync with its
//! departure and arrival times, in the persisted `HH:MM:SS` /
//! `D HH:MM:SS` format.
//!
//! ## Features
//!
//! - **Duration Derivation**: modular time difference with a one-day wrap
//! - **Form Binding**: idempotent, last-writer-wins updates of a bound field
//! - **Trigger Handling**: explicit attachment state and field-event rules
//! - **Timetable Audit**: check stored durations in CSV timetables
//!
//! ## Usage
//!
//! ```rust
//! use duree::libs::duration::compute_duration;
//! use duree::libs::formatter::format_duration;
//!
//! let duration = compute_duration("08:00", "10:30").unwrap();
//! assert_eq!(format_duration(&duration), "02:30:00");
//! ```

pub mod commands;
pub mod libs;
