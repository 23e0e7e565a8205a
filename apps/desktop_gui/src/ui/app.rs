use eframe::egui;

use crate::{
    config::StartupConfig,
    controller::{
        events::UiEvent,
        navigation::View,
        orchestration::{dispatch_ui_event, ShellState},
    },
    ui::{
        home::{load_home_image, show_home},
        order_form::OrderFormView,
        theme::{
            scaled_text_styles, visuals_for_theme, PersistedUiSettings, ThemePreset, UiSettings,
            MAX_TEXT_SCALE, MIN_TEXT_SCALE, SETTINGS_STORAGE_KEY,
        },
    },
};

#[derive(Debug, Clone)]
struct StatusBanner {
    message: String,
}

pub struct PizzaApp {
    shell: ShellState,
    order_view: OrderFormView,
    home_image: Option<egui::TextureHandle>,
    status_banner: Option<StatusBanner>,

    settings: UiSettings,
    applied_settings: Option<UiSettings>,
    settings_open: bool,
}

impl PizzaApp {
    pub fn new(
        ctx: &egui::Context,
        config: &StartupConfig,
        persisted_settings: Option<PersistedUiSettings>,
    ) -> Self {
        let settings = persisted_settings
            .map(PersistedUiSettings::into_runtime)
            .unwrap_or_else(|| UiSettings::with_preset(config.theme));

        let mut status_banner = None;
        let home_image = config.home_image.as_deref().and_then(|path| {
            match load_home_image(ctx, path) {
                Ok(texture) => Some(texture),
                Err(err) => {
                    tracing::warn!("falling back to painted home image: {err:#}");
                    status_banner = Some(StatusBanner {
                        message: format!("Could not load home image: {err:#}"),
                    });
                    None
                }
            }
        });

        Self {
            shell: ShellState::default(),
            order_view: OrderFormView::default(),
            home_image,
            status_banner,
            settings,
            applied_settings: None,
            settings_open: false,
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_settings == Some(self.settings) {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = visuals_for_theme(self.settings.preset);
        style.text_styles = scaled_text_styles(self.settings.text_scale);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        ctx.set_style(style);
        self.applied_settings = Some(self.settings);
    }

    fn show_nav_bar(&mut self, ctx: &egui::Context, events: &mut Vec<UiEvent>) {
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for view in [View::Landing, View::Order] {
                    let current = self.shell.current_view() == view;
                    let label = egui::RichText::new(view.label());
                    let label = if current { label.strong() } else { label };
                    if ui.link(label).clicked() {
                        events.push(UiEvent::Navigate(view));
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Settings").clicked() {
                        self.settings_open = !self.settings_open;
                    }
                    if ui
                        .add_enabled(self.shell.can_go_back(), egui::Button::new("Back"))
                        .clicked()
                    {
                        events.push(UiEvent::Back);
                    }
                });
            });
        });
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        let Some(banner) = self.status_banner.clone() else {
            return;
        };
        egui::Frame::new()
            .fill(egui::Color32::from_rgb(111, 53, 53))
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)))
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.status_banner = None;
                        }
                    });
                });
            });
        ui.add_space(8.0);
    }

    fn show_settings_window(&mut self, ctx: &egui::Context) {
        if !self.settings_open {
            return;
        }

        egui::Window::new("Settings")
            .open(&mut self.settings_open)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Theme preset");
                egui::ComboBox::from_id_salt("theme_preset")
                    .selected_text(self.settings.preset.label())
                    .show_ui(ui, |ui| {
                        for preset in ThemePreset::ALL {
                            ui.selectable_value(&mut self.settings.preset, preset, preset.label());
                        }
                    });
                ui.add(
                    egui::Slider::new(
                        &mut self.settings.text_scale,
                        MIN_TEXT_SCALE..=MAX_TEXT_SCALE,
                    )
                    .text("Text scale")
                    .step_by(0.05),
                );
                if ui.button("Reset to defaults").clicked() {
                    self.settings = UiSettings::default();
                }
            });
    }
}

impl eframe::App for PizzaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme_if_needed(ctx);

        let mut events = Vec::new();
        self.show_nav_bar(ctx, &mut events);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_status_banner(ui);
            match (self.shell.current_view(), self.shell.order_form()) {
                (View::Order, Some(form)) => {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        self.order_view.show(ui, form, &mut events);
                    });
                }
                _ => show_home(ui, self.home_image.as_ref(), &mut events),
            }
        });

        self.show_settings_window(ctx);

        for event in events {
            dispatch_ui_event(&mut self.shell, event);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedUiSettings::from_runtime(self.settings);
        match serde_json::to_string(&settings) {
            Ok(serialized) => storage.set_string(SETTINGS_STORAGE_KEY, serialized),
            Err(err) => tracing::warn!("failed to serialize ui settings: {err}"),
        }
    }
}
