use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::UnknownFieldError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressField {
    FullName,
    Phone,
    Street,
    City,
    State,
    Pincode,
}

impl AddressField {
    /// Form order. City and state share a row when rendered.
    pub const ALL: [AddressField; 6] = [
        AddressField::FullName,
        AddressField::Phone,
        AddressField::Street,
        AddressField::City,
        AddressField::State,
        AddressField::Pincode,
    ];

    /// Persisted JSON key for this field.
    pub fn key(self) -> &'static str {
        match self {
            AddressField::FullName => "fullName",
            AddressField::Phone => "phone",
            AddressField::Street => "street",
            AddressField::City => "city",
            AddressField::State => "state",
            AddressField::Pincode => "pincode",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AddressField::FullName => "Full Name",
            AddressField::Phone => "Phone (10 digits)",
            AddressField::Street => "Street Address",
            AddressField::City => "City",
            AddressField::State => "State",
            AddressField::Pincode => "Pincode (6 digits)",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            AddressField::FullName => "John Doe",
            AddressField::Phone => "9876543210",
            AddressField::Street => "123, ABC street",
            AddressField::City => "Chennai",
            AddressField::State => "Tamil Nadu",
            AddressField::Pincode => "600001",
        }
    }

    /// Fields that only ever hold ASCII digits once edited.
    pub fn is_numeric(self) -> bool {
        matches!(self, AddressField::Phone | AddressField::Pincode)
    }

    /// Exact digit count required by validation, for numeric fields.
    pub fn digit_count(self) -> Option<usize> {
        match self {
            AddressField::Phone => Some(10),
            AddressField::Pincode => Some(6),
            _ => None,
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AddressField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AddressField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}

/// The six-field shipping address being edited.
///
/// Serializes to a flat JSON object with camelCase keys. Every field is
/// required on deserialization; a record missing any of them is unparsable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    pub full_name: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

impl AddressRecord {
    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::FullName => &self.full_name,
            AddressField::Phone => &self.phone,
            AddressField::Street => &self.street,
            AddressField::City => &self.city,
            AddressField::State => &self.state,
            AddressField::Pincode => &self.pincode,
        }
    }

    pub fn set(&mut self, field: AddressField, value: impl Into<String>) {
        let slot = match field {
            AddressField::FullName => &mut self.full_name,
            AddressField::Phone => &mut self.phone,
            AddressField::Street => &mut self.street,
            AddressField::City => &mut self.city,
            AddressField::State => &mut self.state,
            AddressField::Pincode => &mut self.pincode,
        };
        *slot = value.into();
    }

    /// True when every field is the empty string. Whitespace counts as content.
    pub fn is_empty(&self) -> bool {
        AddressField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }
}
