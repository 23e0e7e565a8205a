//! Applies renderer events to the navigation shell and the mounted order form.

use order_core::{OrderForm, SubmitOutcome};

use crate::controller::{
    events::UiEvent,
    navigation::{Navigator, View},
};

/// Owns the navigator and, while the order view is shown, its one order form.
#[derive(Debug, Default)]
pub struct ShellState {
    navigator: Navigator,
    order_form: Option<OrderForm>,
}

impl ShellState {
    pub fn current_view(&self) -> View {
        self.navigator.current()
    }

    pub fn can_go_back(&self) -> bool {
        self.navigator.can_go_back()
    }

    pub fn order_form(&self) -> Option<&OrderForm> {
        self.order_form.as_ref()
    }

    fn sync_mounted_form(&mut self) {
        match (self.navigator.current(), self.order_form.is_some()) {
            (View::Order, false) => {
                tracing::debug!("order form mounted");
                self.order_form = Some(OrderForm::new());
            }
            (View::Landing, true) => {
                tracing::debug!("order form unmounted");
                self.order_form = None;
            }
            _ => {}
        }
    }
}

pub fn dispatch_ui_event(state: &mut ShellState, event: UiEvent) {
    tracing::debug!(event = event.name(), "dispatching ui event");

    match event {
        UiEvent::Navigate(view) => {
            if state.navigator.navigate(view) {
                tracing::debug!(path = view.path(), "navigated");
            }
            state.sync_mounted_form();
        }
        UiEvent::Back => {
            state.navigator.back();
            state.sync_mounted_form();
        }
        form_event => {
            let Some(form) = state.order_form.as_mut() else {
                tracing::debug!(
                    event = form_event.name(),
                    "dropping form event without a mounted form"
                );
                return;
            };
            apply_form_event(form, form_event);
        }
    }
}

fn apply_form_event(form: &mut OrderForm, event: UiEvent) {
    match event {
        UiEvent::FullNameEdited(raw) => form.set_full_name(&raw),
        UiEvent::SizeSelected(code) => form.select_size(&code),
        UiEvent::ToppingToggled(id) => {
            if let Err(err) = form.toggle_topping(id) {
                tracing::warn!("ignoring topping toggle: {err}");
            }
        }
        UiEvent::SubmitClicked => match form.submit() {
            SubmitOutcome::Placed(order) => match serde_json::to_string(&order) {
                Ok(json) => tracing::debug!(order = %json, "submitted order"),
                Err(err) => tracing::warn!("failed to serialize submitted order: {err}"),
            },
            SubmitOutcome::Rejected(errors) => {
                tracing::debug!(?errors, "submit rejected by re-validation");
            }
            SubmitOutcome::Ignored => {}
        },
        UiEvent::Navigate(_) | UiEvent::Back => {}
    }
}
