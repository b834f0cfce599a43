//! Data-transfer shapes exchanged with the inventory backend.

mod record;
mod wire;

pub use record::{RecordStatus, StatusParseError, VaccineRecord, PLACEHOLDER_ID};
