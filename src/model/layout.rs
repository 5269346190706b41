//! Column layouts.
//!
//! Exactly two layouts exist: the fixed-width hex/ASCII table and the
//! Smart layout that interleaves pretty-printed region rows. Layouts are
//! immutable; selection is by index into [`PREDEFINED_LAYOUTS`].

/// The type of column to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Byte offset column.
    Offset,
    /// Hexadecimal byte column.
    Hex,
    /// Printable-ASCII column.
    Ascii,
    /// Pretty-printed structured content column (Smart layout only).
    Content,
}

/// A named, ordered arrangement of columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Display name shown in the frame title.
    pub name: &'static str,
    /// Columns in left-to-right order.
    pub columns: &'static [ColumnKind],
}

impl Layout {
    /// Whether this layout renders detected regions as structured content.
    pub fn is_smart(&self) -> bool {
        self.columns.contains(&ColumnKind::Content)
    }
}

/// The fixed, ordered list of available layouts.
pub static PREDEFINED_LAYOUTS: [Layout; 2] = [
    Layout {
        name: "Hex View",
        columns: &[ColumnKind::Offset, ColumnKind::Hex, ColumnKind::Ascii],
    },
    Layout {
        name: "Smart View",
        columns: &[
            ColumnKind::Offset,
            ColumnKind::Hex,
            ColumnKind::Content,
            ColumnKind::Ascii,
        ],
    },
];

/// Resolve a layout name from config/CLI ("hex" or "smart") to its index.
pub fn index_for(name: &str) -> Option<usize> {
    match name {
        "hex" => Some(0),
        "smart" => Some(1),
        _ => None,
    }
}
