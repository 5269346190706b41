//! Event sum type for the navigation state machine.

use crate::model::KeyAction;

/// One variant per state transition.
///
/// The event loop serializes these through a single queue and applies them
/// one at a time, so no transition ever observes a partially updated
/// state.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A key press already resolved to a domain action.
    Key(KeyAction),
    /// Terminal resized to the given width/height in cells. Recomputes
    /// geometry; never moves the cursor.
    Resize(u16, u16),
    /// Replace the viewed buffer wholesale. The region scanner reruns
    /// synchronously before the next frame.
    ReplaceData(Vec<u8>),
    /// Select a layout by index into the predefined list; out-of-range
    /// indices are ignored.
    SelectLayout(usize),
}
