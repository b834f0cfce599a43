use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::wire::lenient_string;

/// Soft-delete state of a record as encoded by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordStatus {
    #[serde(rename = "A")]
    Active,
    #[serde(rename = "I")]
    Inactive,
}

impl RecordStatus {
    /// Single-letter wire code.
    pub fn code(self) -> &'static str {
        match self {
            RecordStatus::Active => "A",
            RecordStatus::Inactive => "I",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RecordStatus::Active => "Active",
            RecordStatus::Inactive => "Inactive",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            RecordStatus::Active => RecordStatus::Inactive,
            RecordStatus::Inactive => RecordStatus::Active,
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown record status '{0}' (expected 'A' or 'I')")]
pub struct StatusParseError(pub String);

impl FromStr for RecordStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(RecordStatus::Active),
            "I" => Ok(RecordStatus::Inactive),
            other => Err(StatusParseError(other.to_string())),
        }
    }
}

/// One vaccine inventory entry.
///
/// Numeric fields are kept as the text the user typed; the backend may
/// answer with JSON numbers, which are decoded back into text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccineRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "nameVaccine", default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(rename = "typeVaccine", default, deserialize_with = "lenient_string")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub manufacturing_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub expiration_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub price: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub stock: String,
    #[serde(rename = "active", default)]
    pub status: Option<RecordStatus>,
}

impl Default for VaccineRecord {
    /// Blank form for a record that has not been persisted yet.
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            kind: String::new(),
            description: String::new(),
            manufacturing_date: String::new(),
            expiration_date: String::new(),
            price: String::new(),
            stock: String::new(),
            status: Some(RecordStatus::Active),
        }
    }
}

/// Id a blank form carries until the backend assigns a real one.
pub const PLACEHOLDER_ID: i64 = 0;

impl VaccineRecord {
    /// A record is new until the backend has assigned it a non-zero id.
    pub fn is_new(&self) -> bool {
        self.persisted_id().is_none()
    }

    /// Persisted identifier, if any.
    pub fn persisted_id(&self) -> Option<i64> {
        self.id.filter(|id| *id != PLACEHOLDER_ID)
    }

    /// Drop the zero placeholder id so the backend assigns a fresh one.
    pub fn without_placeholder_id(mut self) -> Self {
        if self.id == Some(PLACEHOLDER_ID) {
            self.id = None;
        }
        self
    }
}
