use super::*;

use client_core::ManualClock;
use storage::{AddressStore, MemoryStore};

fn form() -> FormController<AddressStore<MemoryStore>, ManualClock> {
    FormController::with_clock(AddressStore::new(MemoryStore::new()), ManualClock::new())
}

fn command(argv: &[&str]) -> Command {
    let mut full = vec!["shipping-address"];
    full.extend_from_slice(argv);
    Args::try_parse_from(full).expect("args").command
}

fn run_to_string(
    form: &mut FormController<AddressStore<MemoryStore>, ManualClock>,
    argv: &[&str],
) -> (Result<()>, String) {
    let mut out = Vec::new();
    let result = run(command(argv), form, &mut out);
    (result, String::from_utf8(out).expect("utf8"))
}

const JANE: &[&str] = &[
    "save",
    "--full-name",
    "Jane Doe",
    "--phone",
    "98765a4321b0",
    "--street",
    "12, Lake View Road",
    "--city",
    "Chennai",
    "--state",
    "Tamil Nadu",
    "--pincode",
    "600001",
];

#[test]
fn show_prints_placeholder_when_empty() {
    let mut form = form();
    let (result, out) = run_to_string(&mut form, &["show"]);
    result.expect("show");
    assert_eq!(out, "Saved Address (summary)\nNo address saved yet.\n");
}

#[test]
fn save_prints_status_and_summary() {
    let mut form = form();
    let (result, out) = run_to_string(&mut form, JANE);
    result.expect("save");
    assert_eq!(
        out,
        "Address saved successfully ✅\nSaved Address (summary)\nJane Doe\n9876543210\n12, Lake View Road\nChennai, Tamil Nadu - 600001\n"
    );
}

#[test]
fn save_with_short_phone_lists_error_and_fails() {
    let mut form = form();
    let mut argv = JANE.to_vec();
    argv[4] = "12345";
    let (result, out) = run_to_string(&mut form, &argv);

    assert!(result.is_err());
    assert_eq!(out, "Phone (10 digits): Phone must be 10 digits.\n");
    assert_eq!(form.persistence().load(), None);
}

#[test]
fn partial_save_builds_on_saved_record() {
    let mut form = form();
    run_to_string(&mut form, JANE).0.expect("first save");

    let (result, _) = run_to_string(&mut form, &["save", "--city", "Madurai"]);
    result.expect("second save");
    assert_eq!(form.persistence().load().expect("saved").city, "Madurai");
}

#[test]
fn clear_prints_cleared_status() {
    let mut form = form();
    run_to_string(&mut form, JANE).0.expect("save");

    let (result, out) = run_to_string(&mut form, &["clear"]);
    result.expect("clear");
    assert_eq!(out, "Address cleared.\n");
    assert_eq!(form.persistence().load(), None);
}

#[test]
fn storage_path_flag_is_global() {
    let args = Args::try_parse_from(["shipping-address", "show", "--storage-path", "/tmp/a.json"])
        .expect("args");
    assert_eq!(args.storage_path, Some(PathBuf::from("/tmp/a.json")));
}
