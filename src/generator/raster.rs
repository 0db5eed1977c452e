//! Lanczos resampling and PNG encoding

use anyhow::{Context, Result, bail};
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

/// Every resample goes through this filter; icons are viewed small enough
/// that nearest/bilinear aliasing shows.
pub(super) const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Resample `source` to exactly `width` x `height`
pub(super) fn resample(source: &RgbaImage, width: u32, height: u32) -> Result<RgbaImage> {
    if width == 0 || height == 0 {
        bail!("cannot resample to {width}x{height}");
    }
    if source.width() == 0 || source.height() == 0 {
        bail!("source image is empty");
    }
    Ok(imageops::resize(source, width, height, RESAMPLE_FILTER))
}

/// Encode as PNG with maximum compression
pub(super) fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, PngFilter::Adaptive)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .with_context(|| format!("encoding {}x{} PNG", image.width(), image.height()))?;
    Ok(buffer)
}

/// Resample then encode a single PNG icon
pub(super) fn render_png(source: &RgbaImage, width: u32, height: u32) -> Result<Vec<u8>> {
    let resized = resample(source, width, height)?;
    encode_png(&resized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_render_png_exact_dimensions() {
        let source = RgbaImage::from_pixel(256, 256, Rgba([255, 0, 0, 255]));
        let bytes = render_png(&source, 57, 57).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap().into_rgba8();
        assert_eq!(decoded.dimensions(), (57, 57));
        assert_eq!(*decoded.get_pixel(28, 28), Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_non_square_source_is_stretched() {
        let source = RgbaImage::from_pixel(300, 100, Rgba([0, 0, 255, 255]));
        let resized = resample(&source, 32, 32).unwrap();
        assert_eq!(resized.dimensions(), (32, 32));
    }

    #[test]
    fn test_zero_size_rejected() {
        let source = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        assert!(resample(&source, 0, 16).is_err());
        assert!(render_png(&RgbaImage::new(0, 0), 16, 16).is_err());
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let source = RgbaImage::from_fn(64, 64, |x, y| Rgba([x as u8 * 4, y as u8 * 4, 128, 255]));
        assert_eq!(
            render_png(&source, 48, 48).unwrap(),
            render_png(&source, 48, 48).unwrap()
        );
    }
}
