//! Applies queued UI actions to the form controller after rendering.

use client_core::{Clock, FormController, SubmitOutcome};
use storage::AddressPersistence;

use crate::controller::events::UiAction;

pub fn apply_action<P, C>(
    form: &mut FormController<P, C>,
    action: UiAction,
) -> Option<SubmitOutcome>
where
    P: AddressPersistence,
    C: Clock,
{
    tracing::debug!(action = action.name(), "applying ui action");
    match action {
        UiAction::Edit { field, value } => {
            form.update_field(field, &value);
            None
        }
        UiAction::Submit => Some(form.submit()),
        UiAction::Clear => {
            form.clear();
            None
        }
    }
}

/// Applies every action in order. Returns the last submit outcome, if any.
pub fn apply_actions<P, C>(
    form: &mut FormController<P, C>,
    actions: impl IntoIterator<Item = UiAction>,
) -> Option<SubmitOutcome>
where
    P: AddressPersistence,
    C: Clock,
{
    actions
        .into_iter()
        .fold(None, |last, action| apply_action(form, action).or(last))
}
