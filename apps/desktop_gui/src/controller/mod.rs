//! Controller layer: UI actions and their application to the form.

pub mod events;
pub mod orchestration;
