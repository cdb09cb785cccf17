use shared::{AddressField, AddressRecord, FieldErrors};

#[test]
fn record_serializes_with_camel_case_keys() {
    let record = AddressRecord {
        full_name: "Jane Doe".to_string(),
        phone: "9876543210".to_string(),
        street: "12, Lake View Road".to_string(),
        city: "Chennai".to_string(),
        state: "Tamil Nadu".to_string(),
        pincode: "600001".to_string(),
    };

    let value = serde_json::to_value(&record).expect("serialize");
    let object = value.as_object().expect("object");
    assert_eq!(object.len(), 6);
    assert_eq!(object["fullName"], "Jane Doe");
    assert_eq!(object["pincode"], "600001");
}

#[test]
fn record_missing_a_field_does_not_parse() {
    let raw = r#"{"fullName":"Jane","phone":"9876543210","street":"x","city":"y","state":"z"}"#;
    assert!(serde_json::from_str::<AddressRecord>(raw).is_err());
}

#[test]
fn record_with_non_string_value_does_not_parse() {
    let raw = r#"{"fullName":"Jane","phone":9876543210,"street":"x","city":"y",
        "state":"z","pincode":"600001"}"#;
    assert!(serde_json::from_str::<AddressRecord>(raw).is_err());
}

#[test]
fn field_names_parse_from_persisted_keys() {
    for field in AddressField::ALL {
        assert_eq!(field.key().parse::<AddressField>().expect("parse"), field);
    }
    assert!("zip".parse::<AddressField>().is_err());
}

#[test]
fn empty_record_detection_treats_whitespace_as_content() {
    let mut record = AddressRecord::default();
    assert!(record.is_empty());
    record.set(AddressField::State, " ");
    assert!(!record.is_empty());
}

#[test]
fn field_errors_iterate_in_form_order_and_clear_per_field() {
    let mut errors = FieldErrors::new();
    errors.insert(AddressField::Pincode, "Pincode must be 6 digits.");
    errors.insert(AddressField::FullName, "Full Name is required.");

    let order: Vec<_> = errors.iter().map(|(field, _)| field).collect();
    assert_eq!(order, vec![AddressField::FullName, AddressField::Pincode]);

    assert!(errors.clear_field(AddressField::FullName));
    assert!(!errors.clear_field(AddressField::FullName));
    assert_eq!(errors.len(), 1);
}
