//! Icon generation: renders each selected matrix row into the output
//! directory and reports which ones made it.

mod bundle;
mod raster;
mod vector;

use crate::exceptions::{FaviconError, Result};
use crate::matrix::{IconSpec, TargetSize, TierSelection, effective_filename, select_specs};
use image::RgbaImage;
use log::{debug, error, info, trace};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Outcome for one selected icon spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub spec: IconSpec,
    /// Filename after prefix substitution
    pub filename: String,
    pub generated: bool,
}

/// Encode one spec into file bytes
fn render(spec: &IconSpec, source: &RgbaImage) -> anyhow::Result<Vec<u8>> {
    match spec.size {
        TargetSize::MultiResolution => bundle::render_ico(source),
        TargetSize::Vector => vector::render_svg(source),
        TargetSize::Pixels { width, height } => raster::render_png(source, width, height),
    }
}

/// Generate every selected spec of `table` into `output_dir`.
///
/// The directory is created if missing. A failure on one icon is logged
/// and recorded as `generated: false`; the remaining icons still run.
pub fn generate(
    table: &[IconSpec],
    selection: &TierSelection,
    source: &RgbaImage,
    output_dir: &Path,
    prefix: &str,
) -> Result<Vec<GenerationResult>> {
    let start = Instant::now();
    fs::create_dir_all(output_dir)?;

    let selected = select_specs(table, selection);
    debug!(
        "🎯 {} of {} icons selected ({})",
        selected.len(),
        table.len(),
        selection
    );

    let mut results = Vec::with_capacity(selected.len());
    for spec in selected {
        let filename = effective_filename(spec, prefix);
        let target = output_dir.join(&filename);
        trace!("🖼️ Rendering {} -> {:?}", spec.size, target);

        let outcome = render(spec, source)
            .and_then(|bytes| fs::write(&target, bytes).map_err(anyhow::Error::from));
        let generated = match outcome {
            Ok(()) => {
                debug!("✅ Wrote {:?}", target);
                true
            }
            Err(e) => {
                let err = FaviconError::EncodeError(format!("{filename} ({}): {e:#}", spec.size));
                error!("❌ {}", err);
                false
            }
        };

        results.push(GenerationResult {
            spec: *spec,
            filename,
            generated,
        });
    }

    let produced = results.iter().filter(|r| r.generated).count();
    info!(
        "Generated {}/{} icons in {:?}",
        produced,
        results.len(),
        start.elapsed()
    );
    Ok(results)
}
