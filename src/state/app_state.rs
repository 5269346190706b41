//! Viewer state and transitions.
//!
//! `AppState` owns the buffer, its region set, the scroll cursor, the
//! layout selection, and the terminal size. Mutable behind single-threaded
//! access; every transition goes through [`AppState::apply`].

use crate::model::{KeyAction, Layout, Region, PREDEFINED_LAYOUTS};
use crate::scanner;
use crate::state::AppEvent;
use crate::view_state::{renderer, Geometry};
use tracing::debug;

/// Root state for one viewing session.
///
/// The buffer and region set are created together and replaced together;
/// geometry is recomputed wholesale on every resize, layout switch, or
/// buffer replacement. The cursor persists across redraws and layout
/// switches.
#[derive(Debug, Clone)]
pub struct AppState {
    data: Vec<u8>,
    regions: Vec<Region>,
    /// Top-of-viewport byte offset; kept within the buffer (0 when empty)
    /// and on a row boundary by every transition.
    cursor: usize,
    layout_index: usize,
    width: u16,
    height: u16,
    geometry: Geometry,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Empty session with conventional 80x24 geometry until the first
    /// resize event arrives.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            regions: Vec::new(),
            cursor: 0,
            layout_index: 0,
            width: 80,
            height: 24,
            geometry: Geometry::default(),
        }
    }

    /// The viewed bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Detected regions, ascending by start, non-overlapping.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Current top-of-viewport byte offset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Currently selected layout.
    pub fn layout(&self) -> &'static Layout {
        &PREDEFINED_LAYOUTS[self.layout_index]
    }

    /// Current derived geometry.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Data rows available per frame once title, header, separator, and
    /// footer chrome are subtracted.
    pub fn visible_rows(&self) -> usize {
        (self.height as usize).saturating_sub(5).max(1)
    }

    /// Rows moved by a page command.
    fn page_rows(&self) -> usize {
        (self.height as usize).saturating_sub(2).max(1)
    }

    /// Apply one event; returns `true` when the session should end.
    pub fn apply(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::Key(action) => return self.apply_key(action),
            AppEvent::Resize(width, height) => {
                self.width = width.max(1);
                self.height = height;
                self.recompute_geometry();
            }
            AppEvent::ReplaceData(data) => self.replace_data(data),
            AppEvent::SelectLayout(index) => {
                if index < PREDEFINED_LAYOUTS.len() {
                    self.layout_index = index;
                    self.recompute_geometry();
                }
            }
        }
        false
    }

    fn apply_key(&mut self, action: KeyAction) -> bool {
        let row = self.geometry.bytes_per_row;
        match action {
            KeyAction::ScrollUp => {
                self.cursor = self.cursor.saturating_sub(row);
            }
            KeyAction::ScrollDown => {
                if self.cursor + row < self.data.len() {
                    self.cursor += row;
                }
            }
            KeyAction::PageUp => {
                self.cursor = self.cursor.saturating_sub(row * self.page_rows());
            }
            KeyAction::PageDown => {
                let step = row * self.page_rows();
                if self.cursor + step < self.data.len() {
                    self.cursor += step;
                }
            }
            KeyAction::ScrollToTop => self.cursor = 0,
            KeyAction::ScrollToBottom => self.cursor = self.last_row_start(),
            KeyAction::CycleLayout => {
                self.layout_index = (self.layout_index + 1) % PREDEFINED_LAYOUTS.len();
                self.recompute_geometry();
            }
            KeyAction::Quit => return true,
        }
        false
    }

    /// Replace the buffer, rescan regions, and clamp the cursor: the new
    /// buffer may be shorter than wherever the user had scrolled.
    fn replace_data(&mut self, data: Vec<u8>) {
        self.regions = scanner::scan(&data);
        self.data = data;
        debug!(
            len = self.data.len(),
            regions = self.regions.len(),
            "buffer replaced"
        );
        if self.cursor >= self.data.len() {
            self.cursor = self.last_row_start();
        }
        self.recompute_geometry();
    }

    /// Offset of the last row boundary, or 0 for an empty buffer.
    fn last_row_start(&self) -> usize {
        let row = self.geometry.bytes_per_row;
        match self.data.len() {
            0 => 0,
            len => (len - 1) / row * row,
        }
    }

    fn recompute_geometry(&mut self) {
        self.geometry = Geometry::compute(&self.regions, self.width);
    }

    /// Produce the text block for the next redraw.
    pub fn render_frame(&self) -> String {
        renderer::render(
            &self.data,
            &self.regions,
            self.cursor,
            self.geometry,
            self.layout(),
            self.visible_rows(),
        )
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
