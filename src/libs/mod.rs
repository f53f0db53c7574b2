//! Core library modules.
//!
//! ## Features
//!
//! - **Derivation**: time-of-day parsing, duration arithmetic, the deriver
//!   and its trigger handling
//! - **Formats**: persisted duration-field text, form snapshots
//! - **Audit**: batch checking of stored timetables
//! - **Infrastructure**: configuration, data storage, messaging, console views
//!
//! ## Usage
//!
//! ```rust
//! use duree::libs::binding::FormSnapshot;
//! use duree::libs::deriver::DurationDeriver;
//!
//! let mut form = FormSnapshot::new()
//!     .with_field("heure_depart", "23:00")
//!     .with_field("heure_arrivee", "01:00")
//!     .with_field("duree", "");
//! DurationDeriver::default().derive(&mut form);
//! assert_eq!(form.fields["duree"], "02:00:00");
//! ```

pub mod audit;
pub mod binding;
pub mod config;
pub mod data_storage;
pub mod deriver;
pub mod duration;
pub mod formatter;
pub mod messages;
pub mod time_of_day;
pub mod view;
