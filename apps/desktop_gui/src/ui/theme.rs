use std::collections::BTreeMap;

use eframe::egui;
use serde::{Deserialize, Serialize};

pub const SETTINGS_STORAGE_KEY: &str = "desktop_gui.settings";

pub const MIN_TEXT_SCALE: f32 = 0.8;
pub const MAX_TEXT_SCALE: f32 = 1.6;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(214, 69, 45);
pub const SUCCESS_TEXT: egui::Color32 = egui::Color32::from_rgb(46, 139, 87);
pub const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(200, 45, 45);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreset {
    #[default]
    Classic,
    Dark,
    #[value(alias = "egui_light")]
    EguiLight,
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 3] = [
        ThemePreset::Classic,
        ThemePreset::Dark,
        ThemePreset::EguiLight,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ThemePreset::Classic => "Classic",
            ThemePreset::Dark => "Dark",
            ThemePreset::EguiLight => "Egui Light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiSettings {
    pub preset: ThemePreset,
    pub text_scale: f32,
}

impl UiSettings {
    pub fn with_preset(preset: ThemePreset) -> Self {
        Self {
            preset,
            text_scale: 1.0,
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self::with_preset(ThemePreset::default())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedUiSettings {
    pub theme_preset: ThemePreset,
    pub text_scale: f32,
}

impl Default for PersistedUiSettings {
    fn default() -> Self {
        Self::from_runtime(UiSettings::default())
    }
}

impl PersistedUiSettings {
    pub fn into_runtime(self) -> UiSettings {
        let text_scale = if self.text_scale.is_finite() {
            self.text_scale.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE)
        } else {
            1.0
        };
        UiSettings {
            preset: self.theme_preset,
            text_scale,
        }
    }

    pub fn from_runtime(settings: UiSettings) -> Self {
        Self {
            theme_preset: settings.preset,
            text_scale: settings.text_scale.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE),
        }
    }

    pub fn from_json(text: &str) -> Option<Self> {
        match serde_json::from_str(text) {
            Ok(settings) => Some(settings),
            Err(err) => {
                tracing::warn!("discarding unreadable persisted settings: {err}");
                None
            }
        }
    }
}

pub fn visuals_for_theme(preset: ThemePreset) -> egui::Visuals {
    let mut visuals = match preset {
        ThemePreset::Classic => {
            let mut v = egui::Visuals::light();
            v.panel_fill = egui::Color32::from_rgb(253, 246, 236);
            v.window_fill = egui::Color32::from_rgb(255, 250, 243);
            v.faint_bg_color = egui::Color32::from_rgb(245, 232, 214);
            v.extreme_bg_color = egui::Color32::WHITE;
            v
        }
        ThemePreset::Dark => {
            let mut v = egui::Visuals::dark();
            v.override_text_color = Some(egui::Color32::from_rgb(236, 232, 226));
            v.panel_fill = egui::Color32::from_rgb(34, 30, 28);
            v.window_fill = egui::Color32::from_rgb(44, 39, 36);
            v.faint_bg_color = egui::Color32::from_rgb(52, 46, 42);
            v.extreme_bg_color = egui::Color32::from_rgb(24, 21, 20);
            v
        }
        ThemePreset::EguiLight => return egui::Visuals::light(),
    };

    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT;
    visuals.widgets.active.bg_fill = ACCENT;
    visuals.widgets.hovered.bg_fill = ACCENT.gamma_multiply(0.85);
    visuals
}

pub fn scaled_text_styles(text_scale: f32) -> BTreeMap<egui::TextStyle, egui::FontId> {
    let mut styles = egui::Style::default().text_styles;
    for font in styles.values_mut() {
        font.size *= text_scale;
    }
    styles
}
