//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// `config::keybindings::KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Move the viewport up by one row. Default: k/↑
    ScrollUp,
    /// Move the viewport down by one row. Default: j/↓
    ScrollDown,
    /// Move up by one page of rows. Default: Ctrl+u/Page Up
    PageUp,
    /// Move down by one page of rows. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to offset zero. Default: g/Home
    ScrollToTop,
    /// Jump to the last row of the buffer. Default: G/End
    ScrollToBottom,
    /// Cycle to the next layout in the predefined list. Default: l
    CycleLayout,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
