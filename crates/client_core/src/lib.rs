//! Form controller for the shipping address form, shared by the desktop GUI
//! and the CLI.

pub mod clock;
pub mod config;
mod controller;
pub mod status;
pub mod summary;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{load_settings, Settings};
pub use controller::{FormController, SubmitOutcome};
pub use status::{StatusKind, StatusMessage, StatusTimings};
pub use summary::AddressSummary;
