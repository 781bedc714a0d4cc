//! Vital Signs Domain
//!
//! The `Vital` record captures a set of clinical observations taken during an
//! examination: weight, height, and the examiner's general findings, tagged
//! with the patient identifiers the observation belongs to.
//!
//! The service layer treats this crate as the source of truth for the entity
//! shape and for which fields a collection query may sort by. Persistence is
//! behind the [`VitalStore`] port.

pub mod ports;
pub mod vital;

pub use ports::{VitalSortField, VitalStore};
pub use vital::{NewVital, Vital};
