//! High-level API: load, generate, emit

use crate::emitter::{write_html, write_manifest};
use crate::exceptions::Result;
use crate::generator::{GenerationResult, generate};
use crate::matrix::{DEFAULT_PREFIX, ICON_MATRIX, TierSelection};
use crate::source::load_source;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Options for a generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Which tiers to produce
    pub selection: TierSelection,
    /// Replacement for the leading `favicon` in every filename
    pub prefix: String,
    /// Write `index.html` and `site.webmanifest` after the icons
    pub emit_metadata: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            selection: TierSelection::All,
            prefix: DEFAULT_PREFIX.to_string(),
            emit_metadata: true,
        }
    }
}

/// Outcome of a full run
#[derive(Debug)]
pub struct GenerationReport {
    pub results: Vec<GenerationResult>,
    pub html_path: Option<PathBuf>,
    pub manifest_path: Option<PathBuf>,
}

impl GenerationReport {
    pub fn generated_count(&self) -> usize {
        self.results.iter().filter(|r| r.generated).count()
    }
}

/// Generate the favicon set for `source` into `output_dir`.
///
/// The source is loaded before the output directory is touched, so a
/// missing or unreadable source leaves the filesystem unchanged.
pub fn generate_favicons(
    source: &Path,
    output_dir: &Path,
    options: &GenerateOptions,
) -> Result<GenerationReport> {
    debug!("🔧 Generate options: {:?}", options);

    let image = load_source(source)?;
    println!("Loaded source image: {}", source.display());

    let results = generate(
        &ICON_MATRIX,
        &options.selection,
        &image,
        output_dir,
        &options.prefix,
    )?;

    let (html_path, manifest_path) = if options.emit_metadata {
        let html = write_html(output_dir, &results)?;
        println!("Generated: {}", html.display());
        let manifest = write_manifest(output_dir, &results)?;
        println!("Generated: {}", manifest.display());
        (Some(html), Some(manifest))
    } else {
        info!("Skipping HTML and manifest");
        (None, None)
    };

    Ok(GenerationReport {
        results,
        html_path,
        manifest_path,
    })
}
