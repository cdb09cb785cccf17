//! Actions the form UI raises during a frame.

use shared::AddressField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Edit { field: AddressField, value: String },
    Submit,
    Clear,
}

impl UiAction {
    pub fn name(&self) -> &'static str {
        match self {
            UiAction::Edit { .. } => "edit",
            UiAction::Submit => "submit",
            UiAction::Clear => "clear",
        }
    }
}
