//! The favicon matrix: every asset faviconx knows how to produce, its
//! canonical filename and its importance tier.

use crate::exceptions::{FaviconError, Result};
use std::collections::BTreeSet;
use std::fmt;

/// Literal every canonical filename starts with
pub const CANONICAL_PREFIX: &str = "favicon";

/// Default replacement for [`CANONICAL_PREFIX`]
pub const DEFAULT_PREFIX: &str = "icon";

/// What an icon spec renders to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetSize {
    /// Single PNG at exact dimensions
    Pixels { width: u32, height: u32 },
    /// Legacy ICO bundle holding several sizes
    MultiResolution,
    /// SVG wrapper around embedded bitmap data
    Vector,
}

impl TargetSize {
    /// Square pixel size shorthand
    pub const fn square(side: u32) -> Self {
        TargetSize::Pixels {
            width: side,
            height: side,
        }
    }

    /// Pixel dimensions, if this is a raster target
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match *self {
            TargetSize::Pixels { width, height } => Some((width, height)),
            TargetSize::MultiResolution | TargetSize::Vector => None,
        }
    }

    /// Side length when the target is a square raster
    pub fn square_side(&self) -> Option<u32> {
        match self.dimensions() {
            Some((w, h)) if w == h => Some(w),
            _ => None,
        }
    }

    /// Value for HTML `sizes` and manifest `sizes` attributes
    pub fn sizes_attr(&self) -> Option<String> {
        self.dimensions().map(|(w, h)| format!("{w}x{h}"))
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetSize::Pixels { width, height } => write!(f, "{width}×{height}"),
            TargetSize::MultiResolution => write!(f, "ICO"),
            TargetSize::Vector => write!(f, "SVG"),
        }
    }
}

/// Importance tier. Tiers compose as sets; the derived order only keeps
/// selections displaying in table-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Required,
    Recommended,
    Optional,
    Legacy,
}

impl Tier {
    pub const ALL: [Tier; 4] = [
        Tier::Required,
        Tier::Recommended,
        Tier::Optional,
        Tier::Legacy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Required => "Required",
            Tier::Recommended => "Recommended",
            Tier::Optional => "Optional",
            Tier::Legacy => "Legacy",
        }
    }

    /// Map a legacy status code (`R`, `RC`, `O`, `L`)
    pub fn from_status_code(code: &str) -> Option<Tier> {
        match code.trim().to_uppercase().as_str() {
            "R" => Some(Tier::Required),
            "RC" => Some(Tier::Recommended),
            "O" => Some(Tier::Optional),
            "L" => Some(Tier::Legacy),
            _ => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the icon matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub size: TargetSize,
    pub filename: &'static str,
    pub usage: &'static str,
    pub tier: Tier,
}

const fn png(side: u32, filename: &'static str, usage: &'static str, tier: Tier) -> IconSpec {
    IconSpec {
        size: TargetSize::square(side),
        filename,
        usage,
        tier,
    }
}

/// Every asset faviconx generates, in output order
pub const ICON_MATRIX: [IconSpec; 22] = [
    IconSpec {
        size: TargetSize::MultiResolution,
        filename: "favicon.ico",
        usage: "Windows icon format. Contains multiple sizes in one file.",
        tier: Tier::Required,
    },
    png(
        16,
        "favicon-16x16.png",
        "Browser tab favicon (classic). Minimum requirement for all browsers.",
        Tier::Required,
    ),
    IconSpec {
        size: TargetSize::Vector,
        filename: "favicon.svg",
        usage: "Scalable vector format. Perfect for crisp display at any size.",
        tier: Tier::Required,
    },
    png(
        32,
        "favicon-32x32.png",
        "High-DPI favicons / pinned tabs. Used on retina screens, tab previews.",
        Tier::Recommended,
    ),
    png(
        48,
        "favicon-48x48.png",
        "Windows .ico format (legacy). Included in .ico bundles.",
        Tier::Optional,
    ),
    png(
        64,
        "favicon-64x64.png",
        "Windows 7+ tile icon (legacy). Rarely used now.",
        Tier::Optional,
    ),
    png(
        57,
        "favicon-57x57.png",
        "iOS 6 (iPhone 1–3) home screen. Deprecated but used for backward compatibility.",
        Tier::Legacy,
    ),
    png(
        72,
        "favicon-72x72.png",
        "iOS 6 (iPad). For old iPad models.",
        Tier::Legacy,
    ),
    png(
        96,
        "favicon-96x96.png",
        "Android 2.3+ launcher icons (deprecated). Historical support.",
        Tier::Optional,
    ),
    png(
        114,
        "favicon-114x114.png",
        "iPhone Retina (iOS 4–6). Useful for legacy iPhones.",
        Tier::Optional,
    ),
    png(
        120,
        "favicon-120x120.png",
        "iPhone Retina (iOS 7+). Still used on some devices.",
        Tier::Recommended,
    ),
    png(
        128,
        "favicon-128x128.png",
        "Chrome Web Store app icon (legacy). Only needed for Chrome Web Store apps.",
        Tier::Optional,
    ),
    png(
        144,
        "favicon-144x144.png",
        "Windows 8+ tile icon. Required for Microsoft tiles.",
        Tier::Recommended,
    ),
    png(
        150,
        "favicon-150x150.png",
        "Microsoft Teams / Outlook preview. Some Microsoft services prefer this.",
        Tier::Optional,
    ),
    png(
        152,
        "favicon-152x152.png",
        "iPad Retina (iOS 7+). Common for newer iPads.",
        Tier::Recommended,
    ),
    png(
        167,
        "favicon-167x167.png",
        "iPad Pro Retina. Used in newer iPads (Pro).",
        Tier::Recommended,
    ),
    png(
        180,
        "favicon-180x180.png",
        "iOS Safari home screen (iOS 8+). Most used for iPhones and iPads added to home screen.",
        Tier::Required,
    ),
    png(
        192,
        "favicon-192x192.png",
        "Android Chrome home screen / PWA icon. Must-have for PWAs on Android.",
        Tier::Required,
    ),
    png(
        256,
        "favicon-256x256.png",
        "Windows & Linux high-res icons. Used by some desktop environments.",
        Tier::Optional,
    ),
    png(
        384,
        "favicon-384x384.png",
        "Android launcher (high-res devices). For high-DPI Android devices.",
        Tier::Optional,
    ),
    png(
        512,
        "favicon-512x512.png",
        "Android splash / PWA install dialog icon. Required by manifest.webmanifest.",
        Tier::Required,
    ),
    png(
        1024,
        "favicon-1024x1024.png",
        "iOS App Store icons (for native apps, not web). Not used in web, but can be included for completeness.",
        Tier::Optional,
    ),
];

/// Which tiers a run should produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TierSelection {
    /// Wildcard: the whole table, unfiltered
    All,
    /// Only specs whose tier is in the set
    Only(BTreeSet<Tier>),
}

impl TierSelection {
    pub fn only<I: IntoIterator<Item = Tier>>(tiers: I) -> Self {
        TierSelection::Only(tiers.into_iter().collect())
    }

    pub fn contains(&self, tier: Tier) -> bool {
        match self {
            TierSelection::All => true,
            TierSelection::Only(tiers) => tiers.contains(&tier),
        }
    }

    /// Parse the legacy comma-coded `--icon-status` value (`R,RC,O,L,ALL`).
    ///
    /// `ALL` anywhere in the list selects the wildcard. Unrecognised codes
    /// fall back to `Required` with a warning; a list with no codes at all
    /// is rejected.
    pub fn from_status_codes(codes: &str) -> Result<Self> {
        let mut tiers = BTreeSet::new();
        for code in codes.split(',') {
            let code = code.trim();
            if code.is_empty() {
                continue;
            }
            if code.eq_ignore_ascii_case("all") {
                return Ok(TierSelection::All);
            }
            match Tier::from_status_code(code) {
                Some(tier) => {
                    tiers.insert(tier);
                }
                None => {
                    log::warn!("Unknown icon status '{}', treating it as R (Required)", code);
                    tiers.insert(Tier::Required);
                }
            }
        }
        if tiers.is_empty() {
            return Err(FaviconError::InvalidArgs(format!(
                "no icon status codes in '{codes}'"
            )));
        }
        Ok(TierSelection::Only(tiers))
    }
}

impl fmt::Display for TierSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TierSelection::All => write!(f, "all"),
            TierSelection::Only(tiers) => {
                let names: Vec<&str> = tiers.iter().map(Tier::as_str).collect();
                write!(f, "{}", names.join(", "))
            }
        }
    }
}

/// Named importance filter for `--option`. Levels are cumulative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ImportanceOption {
    Required,
    Recommended,
    RequiredRecommended,
    Optional,
    #[default]
    All,
}

impl ImportanceOption {
    pub fn selection(&self) -> TierSelection {
        match self {
            ImportanceOption::Required => TierSelection::only([Tier::Required]),
            ImportanceOption::Recommended | ImportanceOption::RequiredRecommended => {
                TierSelection::only([Tier::Required, Tier::Recommended])
            }
            ImportanceOption::Optional => {
                TierSelection::only([Tier::Required, Tier::Recommended, Tier::Optional])
            }
            ImportanceOption::All => TierSelection::only(Tier::ALL),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImportanceOption::Required => "required",
            ImportanceOption::Recommended => "recommended",
            ImportanceOption::RequiredRecommended => "required-recommended",
            ImportanceOption::Optional => "optional",
            ImportanceOption::All => "all",
        }
    }
}

/// Resolve `--option` against `--icon-status`: a named option other than
/// `all` wins, otherwise the status codes decide.
pub fn resolve_selection(option: ImportanceOption, icon_status: &str) -> Result<TierSelection> {
    if option != ImportanceOption::All {
        return Ok(option.selection());
    }
    TierSelection::from_status_codes(icon_status)
}

/// Ordered subsequence of `table` whose tier is selected
pub fn select_specs<'a>(table: &'a [IconSpec], selection: &TierSelection) -> Vec<&'a IconSpec> {
    match selection {
        TierSelection::All => table.iter().collect(),
        TierSelection::Only(_) => table
            .iter()
            .filter(|spec| selection.contains(spec.tier))
            .collect(),
    }
}

/// Canonical filename with a leading `favicon` swapped for `prefix`
pub fn effective_filename(spec: &IconSpec, prefix: &str) -> String {
    match spec.filename.strip_prefix(CANONICAL_PREFIX) {
        Some(rest) => format!("{prefix}{rest}"),
        None => spec.filename.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_matrix_invariants() {
        let names: HashSet<_> = ICON_MATRIX.iter().map(|s| s.filename).collect();
        assert_eq!(names.len(), ICON_MATRIX.len());

        let ico = ICON_MATRIX
            .iter()
            .filter(|s| s.size == TargetSize::MultiResolution)
            .count();
        let svg = ICON_MATRIX
            .iter()
            .filter(|s| s.size == TargetSize::Vector)
            .count();
        assert_eq!((ico, svg), (1, 1));

        let dims: Vec<_> = ICON_MATRIX
            .iter()
            .filter_map(|s| s.size.dimensions())
            .collect();
        let unique: HashSet<_> = dims.iter().collect();
        assert_eq!(dims.len(), ICON_MATRIX.len() - 2);
        assert_eq!(unique.len(), dims.len());

        for spec in &ICON_MATRIX {
            assert!(spec.filename.starts_with(CANONICAL_PREFIX));
        }
    }

    #[test]
    fn test_select_specs_preserves_table_order() {
        let selections = [
            TierSelection::only([Tier::Required]),
            TierSelection::only([Tier::Legacy, Tier::Optional]),
            TierSelection::only([Tier::Recommended]),
            TierSelection::only(Tier::ALL),
        ];
        for selection in &selections {
            let selected = select_specs(&ICON_MATRIX, selection);
            let expected: Vec<&IconSpec> = ICON_MATRIX
                .iter()
                .filter(|s| selection.contains(s.tier))
                .collect();
            assert_eq!(selected, expected);
        }
    }

    #[test]
    fn test_select_specs_wildcard_and_empty() {
        assert_eq!(
            select_specs(&ICON_MATRIX, &TierSelection::All).len(),
            ICON_MATRIX.len()
        );
        assert!(select_specs(&ICON_MATRIX, &TierSelection::only([])).is_empty());
    }

    #[test]
    fn test_required_tier_contents() {
        let names: Vec<_> = select_specs(&ICON_MATRIX, &TierSelection::only([Tier::Required]))
            .iter()
            .map(|s| s.filename)
            .collect();
        assert_eq!(
            names,
            [
                "favicon.ico",
                "favicon-16x16.png",
                "favicon.svg",
                "favicon-180x180.png",
                "favicon-192x192.png",
                "favicon-512x512.png",
            ]
        );
    }

    #[test]
    fn test_effective_filename() {
        let spec32 = ICON_MATRIX[3];
        assert_eq!(effective_filename(&spec32, "icon"), "icon-32x32.png");
        assert_eq!(effective_filename(&ICON_MATRIX[0], "icon"), "icon.ico");

        let custom = IconSpec {
            size: TargetSize::square(180),
            filename: "apple-touch-icon.png",
            usage: "",
            tier: Tier::Required,
        };
        assert_eq!(effective_filename(&custom, "icon"), "apple-touch-icon.png");

        // Only the leading occurrence is replaced
        let doubled = IconSpec {
            filename: "faviconfavicon.png",
            ..custom
        };
        assert_eq!(effective_filename(&doubled, "x"), "xfavicon.png");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            TierSelection::from_status_codes("R,RC,O,L").unwrap(),
            TierSelection::only(Tier::ALL)
        );
        assert_eq!(
            TierSelection::from_status_codes(" r , l ").unwrap(),
            TierSelection::only([Tier::Required, Tier::Legacy])
        );
        assert_eq!(
            TierSelection::from_status_codes("O,ALL").unwrap(),
            TierSelection::All
        );
        assert_eq!(
            TierSelection::from_status_codes("X").unwrap(),
            TierSelection::only([Tier::Required])
        );
        assert!(TierSelection::from_status_codes(" , ").is_err());
    }

    #[test]
    fn test_named_option_wins_unless_all() {
        assert_eq!(
            resolve_selection(ImportanceOption::Required, "L").unwrap(),
            TierSelection::only([Tier::Required])
        );
        assert_eq!(
            resolve_selection(ImportanceOption::All, "L").unwrap(),
            TierSelection::only([Tier::Legacy])
        );
        assert_eq!(
            resolve_selection(ImportanceOption::Optional, "R").unwrap(),
            TierSelection::only([Tier::Required, Tier::Recommended, Tier::Optional])
        );
    }

    #[test]
    fn test_target_size_display() {
        assert_eq!(TargetSize::square(16).to_string(), "16×16");
        assert_eq!(TargetSize::MultiResolution.to_string(), "ICO");
        assert_eq!(TargetSize::square(192).sizes_attr().as_deref(), Some("192x192"));
        assert_eq!(TargetSize::Vector.sizes_attr(), None);
    }
}
