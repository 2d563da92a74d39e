use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Message tints
// ---------------------------------------------------------------------------

/// Fill and text colours for an informational callout.
pub const INFO: (Color32, Color32) = (
    Color32::from_rgb(28, 52, 84),
    Color32::from_rgb(160, 205, 255),
);

/// Fill and text colours for a success callout.
pub const SUCCESS: (Color32, Color32) = (
    Color32::from_rgb(23, 62, 40),
    Color32::from_rgb(140, 230, 170),
);

/// Fill and text colours for the error page.
pub const ERROR: (Color32, Color32) = (
    Color32::from_rgb(80, 28, 28),
    Color32::from_rgb(255, 170, 170),
);
