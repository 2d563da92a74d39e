use std::path::Path;

use anyhow::{Context, Result};

/// A raster decoded verbatim into RGBA pixels, ready to become a texture.
#[derive(Clone)]
pub struct RasterImage {
    /// `[width, height]` in pixels.
    pub size: [usize; 2],
    /// Row-major, unmultiplied RGBA; `width * height * 4` bytes.
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterImage")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Read and decode an image file.
pub fn load_image(path: &Path) -> Result<RasterImage> {
    let decoded = image::open(path).context("decoding image")?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(RasterImage {
        size,
        rgba: rgba.into_raw(),
    })
}
