//! Multi-resolution ICO bundle

use super::raster::resample;
use anyhow::{Context, Result};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::RgbaImage;

/// Sizes packed into the ICO, smallest first
pub(super) const ICO_SIZES: [u32; 3] = [16, 32, 48];

/// Resample to every [`ICO_SIZES`] entry and pack them into one ICO file
pub(super) fn render_ico(source: &RgbaImage) -> Result<Vec<u8>> {
    let mut icon_dir = IconDir::new(ResourceType::Icon);

    for size in ICO_SIZES {
        let resized = resample(source, size, size)?;
        let image = IconImage::from_rgba_data(size, size, resized.into_raw());
        let entry = IconDirEntry::encode(&image)
            .with_context(|| format!("encoding {size}x{size} ICO entry"))?;
        icon_dir.add_entry(entry);
        log::trace!("ICO layer: {size}x{size}");
    }

    let mut buffer = Vec::new();
    icon_dir
        .write(&mut buffer)
        .context("writing ICO directory")?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::io::Cursor;

    #[test]
    fn test_ico_holds_three_sizes() {
        let source = RgbaImage::from_pixel(256, 256, Rgba([0, 128, 0, 255]));
        let bytes = render_ico(&source).unwrap();

        let icon_dir = IconDir::read(Cursor::new(bytes)).unwrap();
        let sizes: Vec<u32> = icon_dir.entries().iter().map(|e| e.width()).collect();
        assert_eq!(sizes, ICO_SIZES);
        for entry in icon_dir.entries() {
            assert_eq!(entry.width(), entry.height());
            let decoded = entry.decode().unwrap();
            assert_eq!(&decoded.rgba_data()[..4], &[0, 128, 0, 255]);
        }
    }
}
