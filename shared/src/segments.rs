use std::f64::consts::PI;

use serde::Serialize;

use crate::constants::{DEFAULT_WHEEL_COLORS, DIMMED_ALPHA_SUFFIX, EMPTY_SEGMENT_COLOR};
use crate::rotation::segment_angle;

/// One wedge of a wheel, in a frame centred on the origin.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Segment {
    pub index: usize,
    pub start_deg: f64,
    pub end_deg: f64,
    /// SVG path data for the filled wedge.
    pub path: String,
    pub label_x: f64,
    pub label_y: f64,
}

fn polar(deg: f64, radius: f64) -> (f64, f64) {
    let rad = deg * PI / 180.0;
    (rad.cos() * radius, rad.sin() * radius)
}

/// Lays out `max(name_count, 1)` equal wedges. An empty wheel still
/// draws a single blank disc.
pub fn layout(name_count: usize, radius: f64, label_radius: f64) -> Vec<Segment> {
    let count = name_count.max(1);
    let angle = segment_angle(count);

    (0..count)
        .map(|index| {
            let start_deg = index as f64 * angle;
            let end_deg = (index + 1) as f64 * angle;
            let large_arc = if end_deg - start_deg > 180.0 { 1 } else { 0 };
            let (x1, y1) = polar(start_deg, radius);
            let (x2, y2) = polar(end_deg, radius);
            let (label_x, label_y) = polar(start_deg + angle / 2.0, label_radius);

            // an arc whose endpoints coincide is not drawn, so a lone
            // segment is two half-circle arcs instead
            let path = if count == 1 {
                format!(
                    "M {} 0 A {} {} 0 1 1 {} 0 A {} {} 0 1 1 {} 0 Z",
                    -radius, radius, radius, radius, radius, radius, -radius
                )
            } else {
                format!(
                    "M 0 0 L {} {} A {} {} 0 {} 1 {} {} Z",
                    x1, y1, radius, radius, large_arc, x2, y2
                )
            };

            Segment {
                index,
                start_deg,
                end_deg,
                path,
                label_x,
                label_y,
            }
        })
        .collect()
}

/// Fill for segment `index`: the palette color cycled by index, dimmed
/// unless the segment is the highlighted winner. Without a palette the
/// default wheel colors are cycled instead.
pub fn segment_fill(colors: &[String], index: usize, highlighted: bool) -> String {
    let base = if colors.is_empty() {
        DEFAULT_WHEEL_COLORS
            .get(index % DEFAULT_WHEEL_COLORS.len())
            .copied()
            .unwrap_or(EMPTY_SEGMENT_COLOR)
    } else {
        colors[index % colors.len()].as_str()
    };

    if highlighted {
        base.to_string()
    } else {
        format!("{}{}", base, DIMMED_ALPHA_SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_counts_and_spans() {
        let segments = layout(4, 88.0, 60.0);
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[1].start_deg, 90.0);
        assert_eq!(segments[1].end_deg, 180.0);
        assert!(segments.iter().all(|s| s.path.starts_with("M 0 0 L ")));
        assert!(segments.iter().all(|s| s.path.contains(" 0 0 1 ")));
    }

    #[test]
    fn test_empty_wheel_draws_full_disc() {
        let segments = layout(0, 88.0, 60.0);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].path, "M -88 0 A 88 88 0 1 1 88 0 A 88 88 0 1 1 -88 0 Z");
        assert_eq!(segments[0].end_deg, 360.0);
    }

    #[test]
    fn test_label_sits_on_center_angle() {
        let segments = layout(2, 88.0, 60.0);
        // first wedge spans 0..180, so its label is straight down (+y)
        assert!(segments[0].label_x.abs() < 1e-9);
        assert!((segments[0].label_y - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_fill_cycles_and_dims() {
        let colors = vec!["#111111".to_string(), "#222222".to_string()];
        assert_eq!(segment_fill(&colors, 0, true), "#111111");
        assert_eq!(segment_fill(&colors, 3, false), "#22222226");
    }

    #[test]
    fn test_fill_without_palette_uses_default_wheel_colors() {
        assert_eq!(segment_fill(&[], 0, true), "#ef4444");
        assert_eq!(segment_fill(&[], 3, false), "#0ea5e926");
        assert_eq!(segment_fill(&[], 5, true), "#ef4444");
    }
}
