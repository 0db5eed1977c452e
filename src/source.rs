//! Source image loading and RGBA normalization

use crate::exceptions::{FaviconError, Result};
use image::{ImageReader, RgbaImage};
use std::path::Path;

/// Rasterized SVG sources are scaled so their longer side reaches this,
/// matching the largest PNG target in the matrix.
pub const SVG_RASTER_MIN_SIDE: u32 = 1024;

/// Whether the path's extension names a vector format
pub fn is_vector_source(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("svg") || ext.eq_ignore_ascii_case("svgz"))
        .unwrap_or(false)
}

/// Load the source image as straight-alpha RGBA8.
///
/// SVG files go through the rasterizer; everything else is decoded with
/// the format sniffed from the file contents.
pub fn load_source(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(FaviconError::SourceNotFound(path.to_path_buf()));
    }

    let image = if is_vector_source(path) {
        log::debug!("Rasterizing vector source {:?}", path);
        let data = std::fs::read(path)?;
        rasterize_svg(&data)?
    } else {
        log::debug!("Decoding raster source {:?}", path);
        ImageReader::open(path)?
            .with_guessed_format()?
            .decode()?
            .into_rgba8()
    };

    log::info!(
        "Loaded source {:?} ({}x{})",
        path,
        image.width(),
        image.height()
    );
    Ok(image)
}

#[cfg(feature = "svg")]
fn rasterize_svg(data: &[u8]) -> Result<RgbaImage> {
    use resvg::{tiny_skia, usvg};

    let options = usvg::Options::default();
    let tree = usvg::Tree::from_data(data, &options)
        .map_err(|e| FaviconError::DecodeError(format!("Failed to parse SVG: {e}")))?;

    let size = tree.size();
    let longest = size.width().max(size.height());
    let scale = if longest > 0.0 && longest < SVG_RASTER_MIN_SIDE as f32 {
        SVG_RASTER_MIN_SIDE as f32 / longest
    } else {
        1.0
    };
    let width = (size.width() * scale).round().max(1.0) as u32;
    let height = (size.height() * scale).round().max(1.0) as u32;
    log::trace!("SVG natural size {:?}, rendering at {}x{}", size, width, height);

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        FaviconError::DecodeError(format!("Cannot allocate {width}x{height} pixmap"))
    })?;
    let transform = tiny_skia::Transform::from_scale(
        width as f32 / size.width(),
        height as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| FaviconError::DecodeError("Rasterized buffer size mismatch".to_string()))
}

#[cfg(not(feature = "svg"))]
fn rasterize_svg(_data: &[u8]) -> Result<RgbaImage> {
    Err(FaviconError::RasterizerUnavailable(
        "faviconx was built without the `svg` feature".to_string(),
    ))
}
