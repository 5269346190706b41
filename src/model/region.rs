//! Detected structured regions within a byte buffer.

use serde_json::Value;

/// A detected, bracket-balanced, JSON-shaped sub-slice of the buffer.
///
/// Offsets are inclusive byte indices into the buffer the region was
/// scanned from. A region set never outlives its buffer: the scanner
/// reruns and produces a fresh set whenever new data arrives.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Inclusive byte offset of the opening bracket.
    pub start: usize,
    /// Inclusive byte offset of the matching closing bracket.
    pub end: usize,
    /// Parsed value, or `None` when the span was bracket-balanced but
    /// failed semantic parsing.
    pub decoded: Option<Value>,
}

impl Region {
    /// Borrow the raw bytes of this region from its source buffer.
    pub fn raw<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        &data[self.start..=self.end]
    }

    /// Number of bytes covered, including both brackets.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// A region always covers at least its two brackets.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether a byte offset falls inside this region.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset <= self.end
    }

    /// Pretty-printed lines of the decoded value, two-space indentation
    /// per nesting level. `None` when the region never decoded; callers
    /// fall back to a single raw row in that case.
    pub fn pretty_lines(&self) -> Option<Vec<String>> {
        let value = self.decoded.as_ref()?;
        let text = serde_json::to_string_pretty(value).ok()?;
        Some(text.lines().map(str::to_owned).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_borrows_inclusive_span() {
        let data = b"xx{\"a\":1}yy";
        let region = Region {
            start: 2,
            end: 8,
            decoded: None,
        };
        assert_eq!(region.raw(data), b"{\"a\":1}");
        assert_eq!(region.len(), 7);
    }

    #[test]
    fn contains_covers_both_endpoints() {
        let region = Region {
            start: 5,
            end: 9,
            decoded: None,
        };
        assert!(region.contains(5));
        assert!(region.contains(9));
        assert!(!region.contains(4));
        assert!(!region.contains(10));
    }

    #[test]
    fn pretty_lines_uses_two_space_indent() {
        let region = Region {
            start: 0,
            end: 7,
            decoded: Some(json!({"id": 1})),
        };
        let lines = region.pretty_lines().expect("decoded region");
        assert_eq!(lines, vec!["{", "  \"id\": 1", "}"]);
    }

    #[test]
    fn pretty_lines_absent_for_undecoded_region() {
        let region = Region {
            start: 0,
            end: 12,
            decoded: None,
        };
        assert!(region.pretty_lines().is_none());
    }
}
