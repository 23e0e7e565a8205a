//! Landing view: greeting plus a pizza picture that leads to the order form.

use std::{fs, path::Path};

use anyhow::Context;
use eframe::egui;

use crate::controller::{events::UiEvent, navigation::View};

const IMAGE_MAX_SIDE: u32 = 640;
const PAINTED_PIZZA_SIDE: f32 = 280.0;

pub fn decode_home_image(bytes: &[u8]) -> anyhow::Result<egui::ColorImage> {
    let dynamic = image::load_from_memory(bytes).context("unsupported or corrupt image data")?;
    let resized = if dynamic.width() > IMAGE_MAX_SIDE || dynamic.height() > IMAGE_MAX_SIDE {
        dynamic.thumbnail(IMAGE_MAX_SIDE, IMAGE_MAX_SIDE).to_rgba8()
    } else {
        dynamic.to_rgba8()
    };
    let size = [resized.width() as usize, resized.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        resized.as_raw(),
    ))
}

pub fn load_home_image(ctx: &egui::Context, path: &Path) -> anyhow::Result<egui::TextureHandle> {
    let bytes = fs::read(path)
        .with_context(|| format!("failed to read home image '{}'", path.display()))?;
    let image = decode_home_image(&bytes)
        .with_context(|| format!("failed to decode home image '{}'", path.display()))?;
    Ok(ctx.load_texture("home_image", image, egui::TextureOptions::LINEAR))
}

pub fn show_home(ui: &mut egui::Ui, image: Option<&egui::TextureHandle>, events: &mut Vec<UiEvent>) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.heading("Welcome to Bloom Pizza!");
        ui.add_space(16.0);

        let response = match image {
            Some(texture) => ui.add(
                egui::Image::new(texture)
                    .max_width(ui.available_width().min(IMAGE_MAX_SIDE as f32))
                    .sense(egui::Sense::click()),
            ),
            None => paint_pizza(ui),
        };
        let response = response
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .on_hover_text("order-pizza");
        if response.clicked() {
            events.push(UiEvent::Navigate(View::Order));
        }
    });
}

fn paint_pizza(ui: &mut egui::Ui) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(PAINTED_PIZZA_SIDE, PAINTED_PIZZA_SIDE),
        egui::Sense::click(),
    );
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = rect.width() * 0.5 - 4.0;
    let lift = if response.hovered() { 1.03 } else { 1.0 };

    painter.circle_filled(center, radius * lift, egui::Color32::from_rgb(201, 140, 66));
    painter.circle_filled(center, radius * 0.88 * lift, egui::Color32::from_rgb(196, 52, 32));
    painter.circle_filled(center, radius * 0.82 * lift, egui::Color32::from_rgb(247, 208, 96));

    let pepperoni = egui::Color32::from_rgb(168, 36, 30);
    for i in 0..7 {
        let angle = i as f32 * std::f32::consts::TAU / 7.0 + 0.4;
        let offset = egui::vec2(angle.cos(), angle.sin()) * radius * 0.52 * lift;
        painter.circle_filled(center + offset, radius * 0.11 * lift, pepperoni);
    }
    painter.circle_filled(center, radius * 0.11 * lift, pepperoni);

    response
}
