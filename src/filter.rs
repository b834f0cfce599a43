//! List filtering for the inventory screen.

use crate::model::{RecordStatus, VaccineRecord};

/// The three criteria a record must satisfy to stay visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub status: RecordStatus,
    pub name: String,
    pub description: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            status: RecordStatus::Active,
            name: String::new(),
            description: String::new(),
        }
    }
}

impl FilterCriteria {
    pub fn with_status(status: RecordStatus) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    /// Status must match exactly; name and description are case-insensitive
    /// substring matches. A record with no status never matches.
    pub fn matches(&self, record: &VaccineRecord) -> bool {
        record.status == Some(self.status)
            && contains_ignore_case(&record.name, &self.name)
            && contains_ignore_case(&record.description, &self.description)
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Derive the visible list. Pure: identical inputs give identical output.
pub fn filter_records(records: &[VaccineRecord], criteria: &FilterCriteria) -> Vec<VaccineRecord> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}
