//! Dye color names used in analysis results, mapped to display swatches.

/// Swatch hex values for the dye color names the analysis pipeline emits.
const SWATCHES: &[(&str, &str)] = &[
    ("Dark Choco", "#4B2E2B"),
    ("Whale Deep Blue", "#002E5D"),
    ("Dark Ash", "#3B3B3B"),
    ("Dusty Ash", "#6E6E6E"),
    ("Ash Taupe Gray", "#8B8589"),
    ("Ash Rose", "#C48B9F"),
    ("Matt Brown", "#5C4033"),
    ("Ferry Violet", "#7F60A0"),
    ("Ash Beige", "#D3C6B3"),
    ("Milk Tea Gray", "#C2B7A3"),
    ("Deep Bordo Rose", "#7A2937"),
    ("Rose Pink", "#F4838A"),
    ("Sunset Orange", "#FF7043"),
    ("Ash Black", "#1B1B1B"),
    ("Gold Brown", "#A67B2E"),
    ("Ash Blue", "#607D8B"),
    ("Pink Red", "#E53935"),
    ("Red Brown", "#8B2500"),
    ("Burgundy", "#800020"),
    ("Red Wine", "#722F37"),
];

/// A recommended dye color with its swatch, when the name is a known one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DyeColor {
    pub name: String,
    pub swatch: Option<&'static str>,
}

/// Look up the swatch hex value for a color name.
pub fn swatch_for(name: &str) -> Option<&'static str> {
    SWATCHES
        .iter()
        .find(|(color, _)| *color == name)
        .map(|(_, hex)| *hex)
}

/// Parse the comma-delimited `rec_color` field into named swatches.
/// Names are trimmed; empty segments are dropped; unknown names pass
/// through without a swatch rather than being discarded.
pub fn parse_rec_colors(rec_color: &str) -> Vec<DyeColor> {
    rec_color
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| DyeColor {
            name: name.to_string(),
            swatch: swatch_for(name),
        })
        .collect()
}
