use std::fmt;

use shared::AddressRecord;

pub const SUMMARY_TITLE: &str = "Saved Address (summary)";
pub const EMPTY_SUMMARY: &str = "No address saved yet.";

/// Read-only composed address shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressSummary {
    pub name: String,
    pub phone: String,
    pub street: String,
    pub locality: String,
}

impl AddressSummary {
    /// `None` when every field of the record is empty.
    pub fn from_record(record: &AddressRecord) -> Option<Self> {
        if record.is_empty() {
            return None;
        }
        Some(Self {
            name: record.full_name.clone(),
            phone: record.phone.clone(),
            street: record.street.clone(),
            locality: format!("{}, {} - {}", record.city, record.state, record.pincode),
        })
    }

    pub fn lines(&self) -> [&str; 4] {
        [
            self.name.as_str(),
            self.phone.as_str(),
            self.street.as_str(),
            self.locality.as_str(),
        ]
    }
}

impl fmt::Display for AddressSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}
