//! Metadata emitter: HTML link tags and the web app manifest, built only
//! from icons that were actually generated.

mod html;
mod manifest;

pub use html::render_html;
pub use manifest::{ManifestIcon, WebManifest, build_manifest, render_manifest};

use crate::exceptions::Result;
use crate::generator::GenerationResult;
use std::fs;
use std::path::{Path, PathBuf};

/// HTML document written next to the icons
pub const HTML_FILENAME: &str = "index.html";

/// Web app manifest written next to the icons
pub const MANIFEST_FILENAME: &str = "site.webmanifest";

/// Background and theme color used by both documents
const THEME_COLOR: &str = "#ffffff";

/// Write `index.html`, replacing any existing file
pub fn write_html(output_dir: &Path, results: &[GenerationResult]) -> Result<PathBuf> {
    let path = output_dir.join(HTML_FILENAME);
    fs::write(&path, render_html(results))?;
    log::debug!("📄 Wrote {:?}", path);
    Ok(path)
}

/// Write `site.webmanifest`, replacing any existing file
pub fn write_manifest(output_dir: &Path, results: &[GenerationResult]) -> Result<PathBuf> {
    let path = output_dir.join(MANIFEST_FILENAME);
    fs::write(&path, render_manifest(results)?)?;
    log::debug!("📄 Wrote {:?}", path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{ICON_MATRIX, effective_filename};
    use tempfile::TempDir;

    #[test]
    fn test_write_overwrites_existing_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(HTML_FILENAME), "stale").unwrap();
        fs::write(temp_dir.path().join(MANIFEST_FILENAME), "stale").unwrap();

        let results: Vec<GenerationResult> = ICON_MATRIX
            .iter()
            .map(|spec| GenerationResult {
                spec: *spec,
                filename: effective_filename(spec, "icon"),
                generated: true,
            })
            .collect();

        let html = write_html(temp_dir.path(), &results).unwrap();
        let manifest = write_manifest(temp_dir.path(), &results).unwrap();

        assert!(fs::read_to_string(html).unwrap().contains("icon.ico"));
        let manifest: WebManifest =
            serde_json::from_str(&fs::read_to_string(manifest).unwrap()).unwrap();
        assert_eq!(manifest.icons.len(), 2);
    }
}
