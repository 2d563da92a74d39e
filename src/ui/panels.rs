use std::time::Instant;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::color;
use crate::data::catalog::{HEATMAP_TITLE, TablePreview};
use crate::sim::roster;
use crate::state::{AppState, LiveMessage, ViewModel};
use crate::ui::table::table_preview;

pub const PAGE_TITLE: &str = "🚀 Bias Analysis in Large Language Models";
pub const RUN_BUTTON: &str = "▶ Run All Models";
pub const DONE_BANNER: &str = "🎉 All models executed successfully!";

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Reload artifacts").clicked() {
                log::info!(
                    "Reloading artifacts from {}",
                    state.config.artifact_dir.display()
                );
                state.reload();
                ui.close_menu();
            }
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.separator();
        ui.label(format!("Artifacts: {}", state.config.artifact_dir.display()));
    });
}

// ---------------------------------------------------------------------------
// Page sections, top to bottom
// ---------------------------------------------------------------------------

/// Shown instead of the whole page when an artifact failed to load.
pub fn error_page(ui: &mut Ui, message: &str) {
    ui.heading(PAGE_TITLE);
    ui.add_space(8.0);
    callout(ui, color::ERROR, &format!("Error: {message}"));
    ui.add_space(4.0);
    ui.label("Fix the file and use File → Reload artifacts.");
}

/// A titled table preview followed by a divider.
pub fn table_section(ui: &mut Ui, preview: &TablePreview) {
    ui.heading(preview.spec.title);
    if let Some(caption) = preview.spec.caption {
        ui.small(caption);
    }
    table_preview(ui, preview);
    ui.separator();
}

pub fn model_queue(ui: &mut Ui) {
    ui.small("Models execute one by one with live status updates");
    ui.heading("📦 Models Queue");
    for (n, model) in roster::numbered() {
        ui.horizontal(|ui: &mut Ui| {
            ui.label(RichText::new(format!("{n}.")).strong());
            ui.label(RichText::new(model).code());
        });
    }
    ui.separator();
}

/// Run button plus the live progress, log and status slots.
pub fn run_controls(ui: &mut Ui, state: &mut AppState) {
    if ui.button(RUN_BUTTON).clicked() {
        state.start_run(Instant::now());
        ui.ctx().request_repaint();
    }
    live_status(ui, &state.view);
}

fn live_status(ui: &mut Ui, view: &ViewModel) {
    if view.running || view.has_run {
        ui.add(egui::ProgressBar::new(view.progress).show_percentage());
    }
    match &view.live {
        Some(LiveMessage::Info(text)) => callout(ui, color::INFO, text),
        Some(LiveMessage::Success(text)) => callout(ui, color::SUCCESS, text),
        None => {}
    }
    if let Some(banner) = &view.banner {
        ui.heading(RichText::new(banner).strong());
    }
}

/// Result tables and heatmaps. `heatmaps` pairs each texture with its caption.
pub fn results(ui: &mut Ui, tables: &[TablePreview], heatmaps: &[(&str, egui::TextureHandle)]) {
    for preview in tables {
        table_section(ui, preview);
    }

    ui.heading(HEATMAP_TITLE);
    ui.columns(heatmaps.len().max(1), |columns: &mut [Ui]| {
        for (ui, (caption, texture)) in columns.iter_mut().zip(heatmaps) {
            let width = ui.available_width();
            ui.add(
                egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                    .max_width(width),
            );
            ui.vertical_centered(|ui: &mut Ui| {
                ui.small(*caption);
            });
        }
    });

    ui.add_space(8.0);
    callout(ui, color::SUCCESS, DONE_BANNER);
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn callout(ui: &mut Ui, (fill, text_color): (Color32, Color32), text: &str) {
    egui::Frame::default()
        .fill(fill)
        .corner_radius(4.0)
        .inner_margin(8.0)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(text).color(text_color));
        });
}
