//! SVG wrapper embedding the source bitmap

use super::raster::encode_png;
use anyhow::Result;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::RgbaImage;

/// Logical viewport of the wrapper document
pub(super) const SVG_VIEWPORT: u32 = 32;

/// Wrap `source` as a base64 PNG inside a fixed-viewport SVG document
pub(super) fn render_svg(source: &RgbaImage) -> Result<Vec<u8>> {
    let png = encode_png(source)?;
    let data = STANDARD.encode(png);
    let side = SVG_VIEWPORT;

    let document = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg width=\"{side}\" height=\"{side}\" viewBox=\"0 0 {side} {side}\" xmlns=\"http://www.w3.org/2000/svg\">\n  \
         <image href=\"data:image/png;base64,{data}\" width=\"{side}\" height=\"{side}\"/>\n\
         </svg>"
    );
    Ok(document.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_svg_embeds_decodable_png() {
        let source = RgbaImage::from_pixel(40, 20, Rgba([9, 9, 9, 255]));
        let svg = String::from_utf8(render_svg(&source).unwrap()).unwrap();

        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg "));
        assert!(svg.contains("viewBox=\"0 0 32 32\""));
        assert!(svg.ends_with("</svg>"));

        let start = svg.find("base64,").unwrap() + "base64,".len();
        let end = start + svg[start..].find('"').unwrap();
        let png = STANDARD.decode(&svg[start..end]).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (40, 20));
    }
}
