//! Property-based tests for scanner and geometry invariants.
//!
//! Validates:
//! 1. Regions are sorted, non-overlapping, and bracket-matched
//! 2. Scanning is idempotent
//! 3. Geometry bounds hold across terminal widths
//! 4. The renderer is total and respects its row budget

use hexsift::model::{Region, PREDEFINED_LAYOUTS};
use hexsift::scanner;
use hexsift::view_state::{render, Geometry};
use proptest::prelude::*;

/// Bytes biased toward JSON-ish content so candidate spans actually
/// occur.
fn jsonish_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop::sample::select(b"{}[]\"0123456789,:.ab \xff\x00".to_vec()),
        0..256,
    )
}

/// Recount nesting over a span using the scanner's same-character rule.
fn depth_at_end(span: &[u8]) -> i64 {
    let open = span[0];
    let close = match open {
        b'{' => b'}',
        b'[' => b']',
        other => panic!("region must start with a bracket, got {other:#x}"),
    };
    let mut depth = 0i64;
    for &byte in span {
        if byte == open {
            depth += 1;
        } else if byte == close {
            depth -= 1;
        }
    }
    depth
}

fn assert_region_invariants(data: &[u8], regions: &[Region]) {
    for pair in regions.windows(2) {
        assert!(pair[0].start < pair[1].start, "regions must ascend by start");
        assert!(pair[0].end < pair[1].start, "regions must not overlap");
    }
    for region in regions {
        assert!(region.start <= region.end);
        assert!(region.end < data.len());
        let span = region.raw(data);
        assert!(matches!(span[0], b'{' | b'['));
        let expected_close = if span[0] == b'{' { b'}' } else { b']' };
        assert_eq!(span[span.len() - 1], expected_close);
        assert_eq!(depth_at_end(span), 0, "nesting must balance at region end");
    }
}

proptest! {
    // ===== Scanner invariants =====

    #[test]
    fn regions_sorted_nonoverlapping_bracket_matched(
        data in prop::collection::vec(any::<u8>(), 0..512)
    ) {
        let regions = scanner::scan(&data);
        assert_region_invariants(&data, &regions);
    }

    #[test]
    fn regions_hold_invariants_on_jsonish_input(data in jsonish_bytes()) {
        let regions = scanner::scan(&data);
        assert_region_invariants(&data, &regions);
    }

    #[test]
    fn scan_is_idempotent(data in jsonish_bytes()) {
        prop_assert_eq!(scanner::scan(&data), scanner::scan(&data));
    }

    #[test]
    fn decoded_regions_reparse_and_undecoded_are_long(data in jsonish_bytes()) {
        for region in scanner::scan(&data) {
            match &region.decoded {
                Some(value) => {
                    let reparsed: serde_json::Value = serde_json::from_slice(region.raw(&data))
                        .expect("decoded region must reparse");
                    prop_assert_eq!(value, &reparsed);
                }
                None => prop_assert!(region.len() > 10, "short invalid spans must be dropped"),
            }
        }
    }

    // ===== Geometry bounds =====

    #[test]
    fn plain_bytes_per_row_at_least_eight_and_multiple_of_eight(width in 0u16..1000) {
        let geometry = Geometry::compute(&[], width);
        prop_assert!(geometry.bytes_per_row >= 8);
        prop_assert_eq!(geometry.bytes_per_row % 8, 0);
    }

    #[test]
    fn smart_hex_column_within_floor_and_half_width(
        width in 130u16..1000,
        data in jsonish_bytes(),
    ) {
        let regions = scanner::scan(&data);
        let geometry = Geometry::compute(&regions, width);
        prop_assert!(geometry.hex_col_width >= 65);
        prop_assert!(geometry.hex_col_width <= width as usize / 2);
    }

    #[test]
    fn smart_content_column_has_floor(width in 0u16..1000, data in jsonish_bytes()) {
        let regions = scanner::scan(&data);
        let geometry = Geometry::compute(&regions, width);
        prop_assert!(geometry.content_col_width >= 20);
    }

    // ===== Renderer totality =====

    #[test]
    fn renderer_is_total_and_respects_row_budget(
        data in jsonish_bytes(),
        cursor_seed in 0usize..256,
        width in 40u16..300,
        visible_rows in 1usize..40,
    ) {
        let regions = scanner::scan(&data);
        let geometry = Geometry::compute(&regions, width);
        let cursor = if data.is_empty() { 0 } else { cursor_seed % data.len() };

        for layout in &PREDEFINED_LAYOUTS {
            let frame = render(&data, &regions, cursor, geometry, layout, visible_rows);
            let data_rows = frame.lines().filter(|line| line.starts_with("0x")).count();
            prop_assert!(data_rows <= visible_rows);
        }
    }
}
