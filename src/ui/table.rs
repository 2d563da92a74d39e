use eframe::egui::{self, Align, Layout, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::catalog::{TablePreview, VIEWPORT_HEIGHT};

const HEADER_HEIGHT: f32 = 22.0;
const ROW_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Table preview widget
// ---------------------------------------------------------------------------

/// Render a preview table in a bounded, scrollable viewport.
///
/// No index column is drawn. When the preview has a group label it is drawn
/// once, as a band spanning every column, above the regular headers.
pub fn table_preview(ui: &mut Ui, preview: &TablePreview) {
    let table = &preview.table;
    ui.push_id(preview.spec.title, |ui: &mut Ui| {
        ScrollArea::horizontal()
            .id_salt("hscroll")
            .auto_shrink([false, true])
            .show(ui, |ui: &mut Ui| {
                if let Some(label) = preview.spec.group_label {
                    egui::Frame::default()
                        .fill(ui.visuals().faint_bg_color)
                        .inner_margin(4.0)
                        .show(ui, |ui: &mut Ui| {
                            ui.add(
                                egui::Label::new(RichText::new(label).monospace().strong())
                                    .truncate(),
                            );
                        });
                }

                let mut builder = TableBuilder::new(ui)
                    .striped(true)
                    .resizable(true)
                    .cell_layout(Layout::left_to_right(Align::Center))
                    .min_scrolled_height(0.0)
                    .max_scroll_height(VIEWPORT_HEIGHT);

                for idx in 0..table.columns.len() {
                    let width = preview.column_width(idx).points();
                    builder = builder.column(Column::initial(width).at_least(40.0).clip(true));
                }

                builder
                    .header(HEADER_HEIGHT, |mut header| {
                        for name in &table.columns {
                            header.col(|ui: &mut Ui| {
                                ui.strong(name);
                            });
                        }
                    })
                    .body(|mut body| {
                        for row in &table.rows {
                            body.row(ROW_HEIGHT, |mut cells| {
                                for cell in row {
                                    cells.col(|ui: &mut Ui| {
                                        let text = cell.to_string();
                                        if cell.is_numeric() {
                                            ui.with_layout(
                                                Layout::right_to_left(Align::Center),
                                                |ui: &mut Ui| ui.label(text),
                                            );
                                        } else {
                                            ui.label(&text).on_hover_text(text);
                                        }
                                    });
                                }
                            });
                        }
                    });
            });
    });
}
