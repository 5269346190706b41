//! Frame rendering.
//!
//! Turns (buffer, regions, cursor, geometry, layout) into the full text
//! block for one redraw. Pure given its inputs; the terminal shell only
//! paints the returned string.

use crate::model::{Layout, Region};
use crate::view_state::geometry::Geometry;
use std::fmt::Write as _;

/// Message shown when the buffer is empty, in any layout.
pub const NO_DATA_MESSAGE: &str = "No data to display. Press q to quit.";

/// Render one frame.
///
/// `cursor` is the top-of-viewport byte offset; `visible_rows` bounds how
/// many data rows are emitted. Always terminates: the byte position
/// strictly advances every iteration of either row loop.
pub fn render(
    data: &[u8],
    regions: &[Region],
    cursor: usize,
    geometry: Geometry,
    layout: &Layout,
    visible_rows: usize,
) -> String {
    if data.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }
    if layout.is_smart() {
        render_smart(data, regions, cursor, geometry, layout, visible_rows)
    } else {
        render_plain(data, cursor, geometry, layout, visible_rows)
    }
}

/// Fixed-width offset/hex/ASCII table.
fn render_plain(
    data: &[u8],
    cursor: usize,
    geometry: Geometry,
    layout: &Layout,
    visible_rows: usize,
) -> String {
    let bpr = geometry.bytes_per_row;
    let hex_width = bpr * 3 - 1;
    let mut out = String::new();

    let _ = writeln!(out, "Layout: {}\n", layout.name);
    let _ = writeln!(out, "Offset    | {:<hex_width$} | {:<bpr$}", "Hexadecimal", "ASCII");
    let _ = writeln!(
        out,
        "{}+-{}-+-{}",
        "-".repeat(10),
        "-".repeat(hex_width),
        "-".repeat(bpr)
    );

    // Snap the viewport top to a row boundary.
    let start = cursor - cursor % bpr;
    for row in 0..visible_rows {
        let row_start = start + row * bpr;
        if row_start >= data.len() {
            break;
        }
        let row_bytes = &data[row_start..data.len().min(row_start + bpr)];
        let _ = writeln!(
            out,
            "0x{row_start:08X} | {:<hex_width$} | {}",
            hex_cells(row_bytes),
            ascii_cells(row_bytes, bpr)
        );
    }

    let shown = data.len().min(bpr * visible_rows);
    let _ = write!(
        out,
        "\nShowing {}/{} bytes. Use arrow keys to navigate, 'l' to switch layout, 'q' to quit.",
        shown,
        data.len()
    );
    out
}

/// Smart layout: merge raw-byte rows with pretty-printed region rows over
/// one byte-offset coordinate space.
fn render_smart(
    data: &[u8],
    regions: &[Region],
    cursor: usize,
    geometry: Geometry,
    layout: &Layout,
    visible_rows: usize,
) -> String {
    let hex_width = geometry.hex_col_width;
    let mut out = String::new();

    let _ = writeln!(out, "Layout: {}\n", layout.name);
    let _ = writeln!(out, "{:<10} | {:<hex_width$} | Content", "Offset", "Hex");
    let _ = writeln!(
        out,
        "{}+-{}-+-{}",
        "-".repeat(10),
        "-".repeat(hex_width),
        "-".repeat(geometry.content_col_width)
    );

    // A region is an atomic rendering unit: a cursor landing inside one
    // pulls the frame back to the region's start so its rows are never
    // split across the top of the viewport.
    let mut pos = match region_at(regions, cursor) {
        Some(region) => region.start,
        None => cursor,
    };

    let mut rows = 0;
    while rows < visible_rows && pos < data.len() {
        if let Some(region) = region_starting_at(regions, pos) {
            rows += render_region_rows(&mut out, data, region, geometry, visible_rows - rows);
            pos = region.end + 1;
        } else {
            // pos never lands strictly inside a region: the initial pull
            // to the region start and the end + 1 jumps keep it outside,
            // and raw runs stop at the next region start.
            debug_assert!(region_at(regions, pos).is_none());
            let next_start = next_region_start(regions, pos).unwrap_or(data.len());
            let end = data
                .len()
                .min(next_start)
                .min(pos + geometry.hex_bytes_per_row);
            let run = &data[pos..end];
            let _ = writeln!(
                out,
                "0x{pos:08X} | {} | {}",
                padded_hex(run, hex_width),
                ascii_cells(run, run.len())
            );
            rows += 1;
            pos = end;
        }
    }

    let _ = write!(
        out,
        "\nFound {} JSON objects. Use arrow keys to navigate, 'l' to switch layout, 'q' to quit.",
        regions.len()
    );
    out
}

/// Emit the display rows for one region, bounded by `budget`. Returns the
/// number of rows written.
///
/// The offset column shows `start + line_index` per row; a display
/// convenience, not a true byte offset per line. The hex column shows the
/// bracket byte on the first and last lines and the trimmed printable
/// characters of interior lines.
fn render_region_rows(
    out: &mut String,
    data: &[u8],
    region: &Region,
    geometry: Geometry,
    budget: usize,
) -> usize {
    let hex_width = geometry.hex_col_width;

    let Some(lines) = region.pretty_lines() else {
        // Degraded fallback: one hex+raw row rather than aborting the
        // frame.
        let raw = region.raw(data);
        let shown = &raw[..raw.len().min(geometry.hex_bytes_per_row)];
        let _ = writeln!(
            out,
            "0x{:08X} | {} | {}",
            region.start,
            padded_hex(shown, hex_width),
            sanitize(&String::from_utf8_lossy(raw))
        );
        return 1;
    };

    let last = lines.len() - 1;
    let mut used = 0;
    for (index, line) in lines.iter().enumerate() {
        if used >= budget {
            break;
        }
        let hex_cell = if index == 0 {
            padded_hex(&data[region.start..=region.start], hex_width)
        } else if index == last {
            padded_hex(&data[region.end..=region.end], hex_width)
        } else {
            let visible: Vec<u8> = line
                .trim()
                .bytes()
                .filter(|byte| (32..127).contains(byte))
                .collect();
            padded_hex(&visible, hex_width)
        };
        let _ = writeln!(
            out,
            "0x{:08X} | {} | {}",
            region.start + index,
            hex_cell,
            sanitize(line)
        );
        used += 1;
    }
    used
}

/// Hex byte pairs separated by spaces, no trailing space, no padding.
fn hex_cells(bytes: &[u8]) -> String {
    let mut cell = String::with_capacity(bytes.len() * 3);
    for &byte in bytes {
        let _ = write!(cell, "{byte:02X} ");
    }
    cell.truncate(cell.len().saturating_sub(1));
    cell
}

/// Hex byte pairs padded (or truncated) to exactly `width` characters,
/// showing as many bytes as fit.
fn padded_hex(bytes: &[u8], width: usize) -> String {
    let capacity = width / 3;
    let mut cell = String::with_capacity(width + 2);
    for &byte in bytes.iter().take(capacity) {
        let _ = write!(cell, "{byte:02X} ");
    }
    while cell.len() < width {
        cell.push(' ');
    }
    cell.truncate(width);
    cell
}

/// ASCII column: printable bytes verbatim, everything else as `.`, padded
/// with spaces to `width`.
fn ascii_cells(bytes: &[u8], width: usize) -> String {
    let mut cell = String::with_capacity(width);
    for &byte in bytes {
        cell.push(if (32..=126).contains(&byte) {
            byte as char
        } else {
            '.'
        });
    }
    while cell.len() < width {
        cell.push(' ');
    }
    cell
}

/// Replace non-printable characters so a rendered line can never corrupt
/// the terminal.
fn sanitize(text: &str) -> String {
    text.chars()
        .map(|ch| if (' '..='~').contains(&ch) { ch } else { '.' })
        .collect()
}

/// Region covering `offset`, if any. Regions are sorted and disjoint, so
/// the first region ending at or after `offset` is the only candidate.
fn region_at(regions: &[Region], offset: usize) -> Option<&Region> {
    let index = regions.partition_point(|region| region.end < offset);
    regions.get(index).filter(|region| region.contains(offset))
}

/// Region whose start is exactly `offset`, if any.
fn region_starting_at(regions: &[Region], offset: usize) -> Option<&Region> {
    regions
        .binary_search_by_key(&offset, |region| region.start)
        .ok()
        .map(|index| &regions[index])
}

/// Start offset of the first region at or after `offset`.
fn next_region_start(regions: &[Region], offset: usize) -> Option<usize> {
    let index = regions.partition_point(|region| region.start < offset);
    regions.get(index).map(|region| region.start)
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod renderer_tests;
