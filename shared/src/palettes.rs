use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::constants::{CUSTOM_FALLBACK_COLORS, CUSTOM_PALETTE_ID};

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

static CUSTOM_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s,]+").unwrap());

/// A named color sequence. Segment `i` of a wheel uses `colors[i % len]`.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Palette {
    pub id: &'static str,
    pub name: &'static str,
    pub colors: &'static [&'static str],
}

impl Palette {
    pub fn is_custom(&self) -> bool {
        self.id == CUSTOM_PALETTE_ID
    }
}

pub static PALETTES: &[Palette] = &[
    Palette {
        id: "tailwind-vivid",
        name: "Tailwind Vivid",
        colors: &[
            "#ef4444", "#f97316", "#f59e0b", "#eab308", "#84cc16", "#22c55e",
            "#10b981", "#14b8a6", "#06b6d4", "#0ea5e9", "#3b82f6", "#6366f1",
            "#8b5cf6", "#a855f7", "#d946ef", "#ec4899", "#f43f5e",
        ],
    },
    Palette {
        id: "material",
        name: "Material (Classic)",
        colors: &[
            "#F44336", "#E91E63", "#9C27B0", "#673AB7", "#3F51B5", "#2196F3",
            "#03A9F4", "#00BCD4", "#009688", "#4CAF50", "#8BC34A", "#CDDC39",
            "#FFEB3B", "#FFC107", "#FF9800", "#FF5722",
        ],
    },
    Palette {
        id: "nord",
        name: "Nord",
        colors: &[
            "#5E81AC", "#81A1C1", "#88C0D0", "#8FBCBB", "#A3BE8C", "#EBCB8B",
            "#D08770", "#BF616A", "#B48EAD",
        ],
    },
    Palette {
        id: "pastel",
        name: "Pastel",
        colors: &[
            "#FFB3BA", "#FFDFBA", "#FFFFBA", "#BAFFC9", "#BAE1FF", "#E5BAFF",
            "#FFC6FF", "#C7FFD8",
        ],
    },
    Palette {
        id: "ocean",
        name: "Ocean",
        colors: &[
            "#023E8A", "#0077B6", "#0096C7", "#00B4D8", "#48CAE4", "#90E0EF",
            "#ADE8F4", "#CAF0F8",
        ],
    },
    Palette {
        id: "sunset",
        name: "Sunset",
        colors: &[
            "#ff6b6b", "#f06595", "#e8590c", "#f08c00", "#ffd43b", "#94d82d",
            "#20c997", "#15aabf",
        ],
    },
    Palette {
        id: CUSTOM_PALETTE_ID,
        name: "Custom (enter colors)",
        colors: &[],
    },
];

/// Looks up a palette by id, falling back to the first catalog entry.
pub fn find_palette(id: &str) -> &'static Palette {
    PALETTES.iter().find(|p| p.id == id).unwrap_or(&PALETTES[0])
}

pub fn is_valid_color_hex(value: &str) -> bool {
    HEX_COLOR.is_match(value.trim())
}

/// Parses user-entered colors separated by whitespace and/or commas,
/// keeping only valid `#RGB` / `#RRGGBB` values in input order.
pub fn parse_custom_colors(text: &str) -> Vec<String> {
    CUSTOM_SEPARATORS
        .split(text)
        .map(str::trim)
        .filter(|c| is_valid_color_hex(c))
        .map(str::to_string)
        .collect()
}

/// Resolves the color sequence for a palette selection.
///
/// Catalog palettes return their fixed colors. The custom slot parses
/// `custom_text` and falls back to a two-color default when nothing
/// validates.
pub fn resolve_colors(palette_id: &str, custom_text: &str) -> Vec<String> {
    let palette = find_palette(palette_id);
    if !palette.is_custom() {
        return palette.colors.iter().map(|c| c.to_string()).collect();
    }

    let colors = parse_custom_colors(custom_text);
    if colors.is_empty() {
        CUSTOM_FALLBACK_COLORS.iter().map(|c| c.to_string()).collect()
    } else {
        colors
    }
}
