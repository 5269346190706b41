//! Byte-region scanner.
//!
//! Detects JSON-shaped sub-slices inside an arbitrary byte stream with a
//! single left-to-right pass plus bounded look-ahead for bracket matching.
//! Pure function of the buffer: same input, same region set.

use crate::model::Region;
use tracing::debug;

/// Bracket-balanced spans that fail semantic parsing are still kept as
/// regions when longer than this many bytes; shorter ones are dropped as
/// noise.
const UNDECODED_KEEP_THRESHOLD: usize = 10;

/// Scan a buffer for bracket-balanced JSON-shaped regions.
///
/// Returned regions are sorted by ascending `start` and never overlap:
/// after a span closes (whether the candidate is kept or dropped), the
/// scan resumes strictly after it, so nested candidates never surface as
/// siblings and no byte is examined as a candidate start twice.
///
/// An opening bracket qualifies as a candidate start only when followed by
/// a quote, another opening bracket, or a decimal digit; that heuristic
/// rejects most binary noise that happens to contain a brace byte. A
/// bracket with nothing after it, or with no matching close before
/// end-of-buffer, produces no region.
pub fn scan(data: &[u8]) -> Vec<Region> {
    let mut regions = Vec::new();
    let mut i = 0;

    while i < data.len() {
        let open = data[i];
        let Some(close) = closing_bracket(open) else {
            i += 1;
            continue;
        };
        let Some(&next) = data.get(i + 1) else {
            // Opening bracket as the final byte can never close.
            break;
        };
        if !plausible_follow(next) {
            i += 1;
            continue;
        }

        let Some(end) = matching_close(data, i, open, close) else {
            i += 1;
            continue;
        };

        let span = &data[i..=end];
        match serde_json::from_slice(span) {
            Ok(value) => {
                regions.push(Region {
                    start: i,
                    end,
                    decoded: Some(value),
                });
            }
            Err(err) if span.len() > UNDECODED_KEEP_THRESHOLD => {
                // Balanced but not strictly valid JSON; long enough to be
                // worth showing undecoded.
                debug!(start = i, end, %err, "keeping undecoded span");
                regions.push(Region {
                    start: i,
                    end,
                    decoded: None,
                });
            }
            Err(_) => {}
        }

        // Resume after the span whether or not it was kept; its interior
        // was already consumed by the bracket match.
        i = end + 1;
    }

    regions
}

fn closing_bracket(open: u8) -> Option<u8> {
    match open {
        b'{' => Some(b'}'),
        b'[' => Some(b']'),
        _ => None,
    }
}

/// Bytes that may plausibly start a JSON value right after the bracket.
fn plausible_follow(byte: u8) -> bool {
    matches!(byte, b'"' | b'{' | b'[' | b'0'..=b'9')
}

/// Find the matching closing bracket for the opener at `start`.
///
/// Nesting counts only the exact opener byte and its own closer; the other
/// bracket type passes through uncounted. A span such as `{"a":[1,2}]`
/// therefore mis-matches. Deliberately kept: the heuristic tolerates false
/// positives/negatives, and the semantic parse sorts out the rest.
fn matching_close(data: &[u8], start: usize, open: u8, close: u8) -> Option<usize> {
    let mut depth = 1usize;
    for (j, &byte) in data.iter().enumerate().skip(start + 1) {
        if byte == open {
            depth += 1;
        } else if byte == close {
            depth -= 1;
            if depth == 0 {
                return Some(j);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_buffer_yields_no_regions() {
        assert!(scan(b"").is_empty());
    }

    #[test]
    fn buffer_without_brackets_yields_no_regions() {
        assert!(scan(b"plain old text 123").is_empty());
    }

    #[test]
    fn detects_object_spanning_whole_buffer() {
        let data = br#"{"id":1,"name":"Test Object","active":true,"values":[1,2,3]}"#;
        let regions = scan(data);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].start, 0);
        assert_eq!(regions[0].end, data.len() - 1);
        assert_eq!(
            regions[0].decoded,
            Some(json!({
                "id": 1,
                "name": "Test Object",
                "active": true,
                "values": [1, 2, 3]
            }))
        );
    }

    #[test]
    fn detects_object_after_filler() {
        let mut data = vec![b'x'; 600];
        data.extend_from_slice(br#"{"id":1,"ok":true}"#);
        let regions = scan(&data);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].start, 600);
        assert!(regions[0].decoded.is_some());
    }

    #[test]
    fn nested_object_inside_array_yields_one_region() {
        let data = br#"[1,2,3,{"test":"nested"}]"#;
        let regions = scan(data);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].start, 0);
        assert_eq!(regions[0].end, data.len() - 1);
    }

    #[test]
    fn unterminated_brace_yields_no_regions() {
        assert!(scan(b"{unterminated").is_empty());
        assert!(scan(b"xxx{\"never\":closed").is_empty());
    }

    #[test]
    fn bracket_as_final_byte_is_discarded() {
        assert!(scan(b"abc{").is_empty());
        assert!(scan(b"[").is_empty());
    }

    #[test]
    fn implausible_follow_byte_rejects_candidate() {
        // `{+` is arithmetic-looking noise, not a structure start.
        assert!(scan(b"{+1}").is_empty());
        assert!(scan(b"{ \"spaced\": 1 }").is_empty());
    }

    #[test]
    fn balanced_but_invalid_long_span_kept_undecoded() {
        // Balanced braces, bad interior, length > 10.
        let data = br#"{"broken" 12345}"#;
        let regions = scan(data);
        assert_eq!(regions.len(), 1);
        assert!(regions[0].decoded.is_none());
    }

    #[test]
    fn balanced_but_invalid_short_span_dropped() {
        // Balanced, invalid, and <= 10 bytes: discarded as noise.
        let data = b"{1 2}";
        assert!(scan(data).is_empty());
    }

    #[test]
    fn two_separate_objects_yield_two_regions() {
        let data = br#"{"a":1} pad {"b":2}"#;
        let regions = scan(data);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].start, 0);
        assert_eq!(regions[1].start, 12);
        assert!(regions[0].end < regions[1].start);
    }

    #[test]
    fn same_depth_nesting_counts_only_same_bracket() {
        let data = br#"{"outer":{"inner":1}}"#;
        let regions = scan(data);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].end, data.len() - 1);
    }

    #[test]
    fn scan_is_deterministic() {
        let mut data = vec![b'.'; 64];
        data.extend_from_slice(br#"[1,2,{"k":"v"}]"#);
        data.extend(vec![0u8; 32]);
        assert_eq!(scan(&data), scan(&data));
    }
}
