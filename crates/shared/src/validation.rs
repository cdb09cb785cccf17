use crate::{
    domain::{AddressField, AddressRecord},
    error::FieldErrors,
};

/// Keeps only ASCII digits.
pub fn clean_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

fn has_exact_digits(value: &str, count: usize) -> bool {
    value.len() == count && value.bytes().all(|b| b.is_ascii_digit())
}

/// Blank after trimming Unicode whitespace and the byte-order mark.
fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

fn field_error(field: AddressField, value: &str) -> Option<&'static str> {
    match field {
        AddressField::FullName if is_blank(value) => Some("Full Name is required."),
        AddressField::Street if is_blank(value) => Some("Street Address is required."),
        AddressField::City if is_blank(value) => Some("City is required."),
        AddressField::State if is_blank(value) => Some("State is required."),
        AddressField::Phone if !has_exact_digits(value, 10) => Some("Phone must be 10 digits."),
        AddressField::Pincode if !has_exact_digits(value, 6) => Some("Pincode must be 6 digits."),
        _ => None,
    }
}

/// Checks every field of `record`. The result is empty iff the record is valid.
pub fn validate(record: &AddressRecord) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in AddressField::ALL {
        if let Some(message) = field_error(field, record.get(field)) {
            errors.insert(field, message);
        }
    }
    errors
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
