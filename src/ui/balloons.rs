use eframe::egui::{self, Color32, Pos2, Rect, Stroke, vec2};

use crate::color::generate_palette;

/// Seconds from launch until the last balloon has left the window.
pub const DURATION: f64 = 4.0;

const COUNT: usize = 24;
const STAGGER: f64 = 0.15;
const STRING_LENGTH: f32 = 26.0;

fn frac(v: f64) -> f64 {
    v - v.floor()
}

/// One balloon as drawn at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balloon {
    pub center: Pos2,
    pub radius: f32,
    pub color: Color32,
}

/// Balloons rising from the bottom edge of the window.
#[derive(Debug, Clone)]
pub struct Balloons {
    started: f64,
    colors: Vec<Color32>,
}

impl Balloons {
    /// `now` is the egui input time, in seconds.
    pub fn launch(now: f64) -> Self {
        Self {
            started: now,
            colors: generate_palette(COUNT),
        }
    }

    pub fn is_done(&self, now: f64) -> bool {
        now - self.started >= DURATION
    }

    /// Balloons still visible in `screen` at `now`.
    pub fn positions(&self, now: f64, screen: Rect) -> Vec<Balloon> {
        let height = screen.height() as f64;
        let width = screen.width() as f64;
        let base_speed = (height + 120.0) / 2.5;

        self.colors
            .iter()
            .enumerate()
            .filter_map(|(i, &color)| {
                let fi = i as f64;
                let t = now - self.started - (i % 7) as f64 * STAGGER;
                if t < 0.0 {
                    return None;
                }
                let radius = 14.0 + 8.0 * frac(fi * 0.4142) as f32;
                let speed = base_speed * (1.0 + 0.3 * frac(fi * 0.377));
                let sway = (t * 2.0 + fi).sin() * 12.0;
                let x = screen.left() as f64 + frac(0.137 + fi * 0.618_034) * width + sway;
                let y = screen.bottom() as f64 + radius as f64 - t * speed;
                if y < screen.top() as f64 - 2.0 * radius as f64 - STRING_LENGTH as f64 {
                    return None;
                }
                Some(Balloon {
                    center: Pos2::new(x as f32, y as f32),
                    radius,
                    color,
                })
            })
            .collect()
    }

    /// Paint above every other layer and keep the animation running.
    pub fn paint(&self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        let screen = ctx.screen_rect();
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("balloons"),
        ));

        for b in self.positions(now, screen) {
            let knot = b.center + vec2(0.0, b.radius);
            painter.line_segment(
                [knot, knot + vec2(0.0, STRING_LENGTH)],
                Stroke::new(1.0, Color32::GRAY),
            );
            painter.circle_filled(b.center, b.radius, b.color);
            painter.circle_filled(
                b.center + vec2(-b.radius * 0.35, -b.radius * 0.35),
                b.radius * 0.2,
                Color32::from_white_alpha(90),
            );
        }
        ctx.request_repaint();
    }
}
