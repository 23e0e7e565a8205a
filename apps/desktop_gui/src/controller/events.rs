//! Events emitted by the renderer while a frame is laid out.

use shared::domain::ToppingId;

use crate::controller::navigation::View;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Navigate(View),
    Back,
    FullNameEdited(String),
    /// Raw option value of the size picker; the placeholder is the empty string.
    SizeSelected(String),
    ToppingToggled(ToppingId),
    SubmitClicked,
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::Navigate(_) => "navigate",
            UiEvent::Back => "back",
            UiEvent::FullNameEdited(_) => "full_name_edited",
            UiEvent::SizeSelected(_) => "size_selected",
            UiEvent::ToppingToggled(_) => "topping_toggled",
            UiEvent::SubmitClicked => "submit_clicked",
        }
    }
}
