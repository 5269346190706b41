//! Column geometry derived from terminal width and the region set.

use crate::model::Region;

/// Hard floor for plain-layout bytes per row.
const MIN_BYTES_PER_ROW: usize = 8;

/// Offset column plus separators reserved out of the terminal width in
/// the plain layout.
const PLAIN_FIXED_MARGIN: u16 = 20;

/// Minimum Smart hex-column width, so the view stays usable even with no
/// detected regions.
const MIN_HEX_COL_WIDTH: usize = 65;

/// Offset column and separators reserved around the Smart columns.
const SMART_FIXED_OVERHEAD: usize = 15;

/// Floor for the Smart content column.
const MIN_CONTENT_COL_WIDTH: usize = 20;

/// Derived column widths and row capacities.
///
/// Recomputed wholesale whenever the terminal size, layout selection, or
/// region set changes; never mutated incrementally. Depends on the region
/// set because the Smart hex column must fit the longest pretty-printed
/// line of any detected region without truncation (structured content
/// wraps at line boundaries, not byte boundaries).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Bytes per plain-layout row; also the navigation row granularity.
    pub bytes_per_row: usize,
    /// Character width of the Smart-layout hex column.
    pub hex_col_width: usize,
    /// Character width of the Smart-layout content column.
    pub content_col_width: usize,
    /// Bytes consumed per raw hex+ASCII row in the Smart layout.
    pub hex_bytes_per_row: usize,
}

impl Geometry {
    /// Compute geometry for the given region set and terminal width.
    pub fn compute(regions: &[Region], width: u16) -> Self {
        let hex_col_width = hex_col_width(regions, width);
        Self {
            bytes_per_row: plain_bytes_per_row(width),
            hex_col_width,
            content_col_width: (width as usize)
                .saturating_sub(hex_col_width + SMART_FIXED_OVERHEAD)
                .max(MIN_CONTENT_COL_WIDTH),
            hex_bytes_per_row: smart_hex_bytes_per_row(width),
        }
    }
}

impl Default for Geometry {
    /// Geometry for an 80-column terminal with no regions.
    fn default() -> Self {
        Self::compute(&[], 80)
    }
}

/// Bytes per row for the fixed-width layout.
///
/// One byte costs three hex characters plus one ASCII character, so a
/// quarter of the width left after the fixed margin, floored at 8 and
/// rounded down to a multiple of 8 for clean display.
fn plain_bytes_per_row(width: u16) -> usize {
    let available = width.saturating_sub(PLAIN_FIXED_MARGIN) as usize;
    let raw = available / 4;
    if raw < MIN_BYTES_PER_ROW {
        MIN_BYTES_PER_ROW
    } else {
        raw / 8 * 8
    }
}

/// Smart hex-column width: the longest trimmed pretty-printed line over
/// all decoded regions costs three characters per byte; floored at the
/// usable minimum, then capped at half the terminal so the content column
/// keeps room.
fn hex_col_width(regions: &[Region], width: u16) -> usize {
    let mut max_width = MIN_HEX_COL_WIDTH;
    for region in regions {
        let Some(lines) = region.pretty_lines() else {
            continue;
        };
        for line in &lines {
            let content_len = line.trim().len();
            if content_len > 0 {
                max_width = max_width.max(content_len * 3);
            }
        }
    }
    max_width.min(width as usize / 2)
}

/// Raw-run row capacity in the Smart layout, responsive to width.
fn smart_hex_bytes_per_row(width: u16) -> usize {
    if width > 100 {
        16
    } else if width < 80 {
        4
    } else {
        8
    }
}
