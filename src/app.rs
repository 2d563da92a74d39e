use std::time::Instant;

use eframe::egui::{self, Ui};

use crate::config::ViewerConfig;
use crate::state::AppState;
use crate::ui::balloons::Balloons;
use crate::ui::panels;

/// Width of the centred content column.
const CONTENT_WIDTH: f32 = 736.0;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BiasViewerApp {
    pub state: AppState,
    /// Heatmap textures for `state.results`, tagged with the generation they
    /// were uploaded for.
    heatmaps: Option<(u64, Vec<(&'static str, egui::TextureHandle)>)>,
    balloons: Option<Balloons>,
}

impl BiasViewerApp {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            state: AppState::new(config),
            heatmaps: None,
            balloons: None,
        }
    }

    /// Upload heatmaps and launch the balloons once per reveal.
    fn sync_results(&mut self, ctx: &egui::Context) {
        let Some(results) = self.state.results.as_ref().filter(|_| self.state.results_visible())
        else {
            self.heatmaps = None;
            self.balloons = None;
            return;
        };
        let generation = self.state.results_generation;
        if matches!(&self.heatmaps, Some((g, _)) if *g == generation) {
            return;
        }

        let textures = results
            .heatmaps
            .iter()
            .map(|h| {
                let image =
                    egui::ColorImage::from_rgba_unmultiplied(h.image.size, &h.image.rgba);
                let texture = ctx.load_texture(
                    format!("heatmap-{}-{generation}", h.caption),
                    image,
                    egui::TextureOptions::LINEAR,
                );
                (h.caption, texture)
            })
            .collect();
        self.heatmaps = Some((generation, textures));
        self.balloons = Some(Balloons::launch(ctx.input(|i| i.time)));
    }

    fn page(&mut self, ui: &mut Ui) {
        if let Some(message) = &self.state.error {
            panels::error_page(ui, message);
            return;
        }

        ui.heading(panels::PAGE_TITLE);
        ui.add_space(8.0);

        for preview in &self.state.datasets {
            panels::table_section(ui, preview);
        }
        panels::model_queue(ui);
        panels::run_controls(ui, &mut self.state);

        if let (Some(results), Some((_, heatmaps))) = (&self.state.results, &self.heatmaps) {
            if self.state.results_visible() {
                panels::results(ui, &results.tables, heatmaps);
            }
        }
    }
}

impl eframe::App for BiasViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(wait) = self.state.tick(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
        self.sync_results(ctx);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: the page, in a centred column ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    let width = ui.available_width().min(CONTENT_WIDTH);
                    let margin = (ui.available_width() - width) / 2.0;
                    ui.horizontal(|ui: &mut Ui| {
                        ui.add_space(margin);
                        ui.vertical(|ui: &mut Ui| {
                            ui.set_width(width);
                            self.page(ui);
                        });
                    });
                });
        });

        if let Some(balloons) = &self.balloons {
            if balloons.is_done(ctx.input(|i| i.time)) {
                self.balloons = None;
            } else {
                balloons.paint(ctx);
            }
        }
    }
}
