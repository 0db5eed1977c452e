//! `index.html` with one `<link>` tag per generated icon

use crate::generator::GenerationResult;
use crate::matrix::TargetSize;

/// Square sizes announced as `apple-touch-icon`
const APPLE_TOUCH_SIDES: [u32; 9] = [180, 167, 152, 120, 57, 72, 114, 144, 150];

/// Square sizes announced as plain PNG icons ahead of the generic fallback
const ANDROID_SIDES: [u32; 2] = [192, 512];

/// Link tag for one generated icon, or `None` if no rule matches.
/// Rules are checked in order and the first hit wins.
pub(super) fn link_tag(result: &GenerationResult) -> Option<String> {
    let filename = result.filename.as_str();
    let side = result.spec.size.square_side();

    match result.spec.size {
        TargetSize::MultiResolution => {
            return Some(format!(
                r#"<link rel="icon" type="image/x-icon" href="{filename}">"#
            ));
        }
        TargetSize::Vector => {
            return Some(format!(
                r#"<link rel="icon" type="image/svg+xml" href="{filename}">"#
            ));
        }
        TargetSize::Pixels { .. } => {}
    }

    let sizes = result.spec.size.sizes_attr()?;
    if filename.contains("apple") || side.is_some_and(|s| APPLE_TOUCH_SIDES.contains(&s)) {
        Some(format!(
            r#"<link rel="apple-touch-icon" sizes="{sizes}" href="{filename}">"#
        ))
    } else if side.is_some_and(|s| ANDROID_SIDES.contains(&s)) || filename.ends_with(".png") {
        // Android sizes and the generic PNG fallback share one tag shape
        Some(format!(
            r#"<link rel="icon" type="image/png" sizes="{sizes}" href="{filename}">"#
        ))
    } else {
        None
    }
}

/// Render the full HTML document for the generated icons
pub fn render_html(results: &[GenerationResult]) -> String {
    let tags: Vec<String> = results
        .iter()
        .filter(|r| r.generated)
        .filter_map(link_tag)
        .collect();
    let tags = tags.join("\n    ");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Your Website</title>
    {tags}
    <meta name="theme-color" content="{theme}">
</head>
<body>
    <h1>Welcome to Your Website</h1>
    <p>Your favicons have been generated successfully!</p>
    <p>Check the browser tab to see your favicon in action.</p>
</body>
</html>"#,
        theme = super::THEME_COLOR
    )
}
