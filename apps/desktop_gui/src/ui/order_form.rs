//! Renders the mounted [`OrderForm`] and turns widget interaction into [`UiEvent`]s.

use eframe::egui;
use order_core::{FormField, OrderForm};
use shared::{catalog, domain::PizzaSize};

use crate::{
    controller::events::UiEvent,
    ui::theme::{ERROR_TEXT, SUCCESS_TEXT},
};

const SIZE_PLACEHOLDER: &str = "----Choose Size----";
const FIELD_WIDTH: f32 = 320.0;

/// Widget-side state that must outlive a frame.
#[derive(Debug, Default)]
pub struct OrderFormView {
    name_buffer: String,
}

impl OrderFormView {
    /// The draft stores the trimmed name, so the buffer is only replaced when
    /// the two disagree beyond whitespace (e.g. after a reset).
    fn sync_name_buffer(&mut self, form: &OrderForm) {
        if self.name_buffer.trim() != form.draft().full_name {
            self.name_buffer = form.draft().full_name.clone();
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, form: &OrderForm, events: &mut Vec<UiEvent>) {
        self.sync_name_buffer(form);

        ui.heading("Order Your Pizza");
        ui.add_space(6.0);

        if let Some(confirmation) = form.confirmation() {
            ui.label(egui::RichText::new(confirmation).color(SUCCESS_TEXT).strong());
            ui.add_space(6.0);
        }

        ui.label(egui::RichText::new("Full Name").strong());
        let name_response = ui.add(
            egui::TextEdit::singleline(&mut self.name_buffer)
                .id_salt("order_full_name")
                .hint_text("Type full name")
                .desired_width(FIELD_WIDTH),
        );
        if name_response.changed() {
            events.push(UiEvent::FullNameEdited(self.name_buffer.clone()));
        }
        field_error(ui, form, FormField::FullName);
        ui.add_space(8.0);

        ui.label(egui::RichText::new("Size").strong());
        let selected = form.draft().size;
        egui::ComboBox::from_id_salt("order_size")
            .width(FIELD_WIDTH)
            .selected_text(selected.map_or(SIZE_PLACEHOLDER, PizzaSize::label))
            .show_ui(ui, |ui| {
                if ui
                    .selectable_label(selected.is_none(), SIZE_PLACEHOLDER)
                    .clicked()
                {
                    events.push(UiEvent::SizeSelected(String::new()));
                }
                for size in PizzaSize::ALL {
                    if ui
                        .selectable_label(selected == Some(size), size.label())
                        .clicked()
                    {
                        events.push(UiEvent::SizeSelected(size.code().to_string()));
                    }
                }
            });
        field_error(ui, form, FormField::Size);
        ui.add_space(8.0);

        for topping in catalog::all() {
            let mut checked = form.draft().is_selected(topping.id);
            if ui.checkbox(&mut checked, topping.name).changed() {
                events.push(UiEvent::ToppingToggled(topping.id));
            }
        }
        ui.add_space(10.0);

        let submit = egui::Button::new(egui::RichText::new("Submit").strong())
            .min_size(egui::vec2(120.0, 32.0));
        let enter_in_name =
            name_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.add_enabled(form.is_submit_enabled(), submit).clicked() || enter_in_name {
            events.push(UiEvent::SubmitClicked);
        }
    }
}

fn field_error(ui: &mut egui::Ui, form: &OrderForm, field: FormField) {
    if let Some(message) = form.errors().message(field) {
        ui.label(egui::RichText::new(message).color(ERROR_TEXT).small());
    }
}
