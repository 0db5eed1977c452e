//! `site.webmanifest` for installable web apps

use crate::generator::GenerationResult;
use crate::matrix::TargetSize;
use serde::{Deserialize, Serialize};

/// Only these sizes go into the manifest
const MANIFEST_SIZES: [TargetSize; 2] = [TargetSize::square(192), TargetSize::square(512)];

/// Web app manifest document
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub display: String,
    pub background_color: String,
    pub theme_color: String,
    pub icons: Vec<ManifestIcon>,
}

/// One entry of the manifest `icons` array
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// Build the manifest from the generated 192x192 and 512x512 icons
pub fn build_manifest(results: &[GenerationResult]) -> WebManifest {
    let icons = results
        .iter()
        .filter(|r| r.generated && MANIFEST_SIZES.contains(&r.spec.size))
        .filter_map(|r| {
            r.spec.size.sizes_attr().map(|sizes| ManifestIcon {
                src: r.filename.clone(),
                sizes,
                mime_type: "image/png".to_string(),
            })
        })
        .collect();

    WebManifest {
        name: "Your Website".to_string(),
        short_name: "Your App".to_string(),
        description: "Your website description".to_string(),
        start_url: "/".to_string(),
        display: "standalone".to_string(),
        background_color: super::THEME_COLOR.to_string(),
        theme_color: super::THEME_COLOR.to_string(),
        icons,
    }
}

/// Serialize the manifest as two-space indented JSON
pub fn render_manifest(results: &[GenerationResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&build_manifest(results))
}
