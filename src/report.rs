//! Terminal reporting: resolved configuration and the per-icon status table

use crate::api::GenerateOptions;
use crate::generator::GenerationResult;
use crate::matrix::{ICON_MATRIX, effective_filename};
use std::path::Path;

/// Lines printed by `--verbose` before generation starts
pub fn config_lines(source: &Path, output_dir: &Path, options: &GenerateOptions) -> Vec<String> {
    vec![
        format!("Source image: {}", source.display()),
        format!("Output directory: {}", output_dir.display()),
        format!("Icon options: {}", options.selection),
        format!("Filename prefix: {}", options.prefix),
        format!("Metadata files: {}", if options.emit_metadata { "yes" } else { "no" }),
    ]
}

/// Status table covering every matrix row. Rows that were filtered out or
/// failed show `No`.
pub fn summary_table(results: &[GenerationResult], prefix: &str) -> String {
    let header = format!(
        "{:<10} {:<24} {:<12} {:<10} Usage",
        "Size", "Filename", "Option", "Generated"
    );
    let mut lines = vec![header.clone(), "-".repeat(header.chars().count())];

    for spec in &ICON_MATRIX {
        let filename = effective_filename(spec, prefix);
        let generated = results
            .iter()
            .any(|r| r.filename == filename && r.generated);
        lines.push(format!(
            "{:<10} {:<24} {:<12} {:<10} {}",
            spec.size.to_string(),
            filename,
            spec.tier.as_str(),
            if generated { "Yes" } else { "No" },
            spec.usage
        ));
    }
    lines.join("\n")
}

/// Print the status table to stdout
pub fn print_summary(results: &[GenerationResult], prefix: &str) {
    println!();
    println!("📊 Favicon Generation Summary:");
    println!("{}", summary_table(results, prefix));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{Tier, TierSelection};

    #[test]
    fn test_summary_covers_whole_matrix() {
        let results: Vec<GenerationResult> = ICON_MATRIX
            .iter()
            .filter(|s| s.tier == Tier::Required)
            .map(|spec| GenerationResult {
                spec: *spec,
                filename: effective_filename(spec, "icon"),
                generated: spec.filename != "favicon-512x512.png",
            })
            .collect();

        let table = summary_table(&results, "icon");
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), ICON_MATRIX.len() + 2);
        assert!(lines[0].starts_with("Size"));

        let row = |name: &str| {
            lines
                .iter()
                .find(|l| l.contains(&format!(" {name} ")))
                .copied()
                .unwrap()
        };
        assert!(row("icon.ico").contains("Yes"));
        assert!(row("icon-512x512.png").contains("No"));
        assert!(row("icon-32x32.png").contains("Recommended"));
        assert!(row("icon-32x32.png").contains("No"));
        assert!(row("icon-16x16.png").starts_with("16×16"));
    }

    #[test]
    fn test_config_lines() {
        let options = GenerateOptions {
            selection: TierSelection::only([Tier::Required]),
            prefix: "brand".to_string(),
            emit_metadata: false,
        };
        let lines = config_lines(Path::new("logo.png"), Path::new("out"), &options);
        assert_eq!(lines[0], "Source image: logo.png");
        assert_eq!(lines[1], "Output directory: out");
        assert_eq!(lines[2], "Icon options: Required");
        assert_eq!(lines[3], "Filename prefix: brand");
    }
}
