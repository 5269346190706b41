//! hexsift
//!
//! TUI viewer over an in-memory byte buffer. Renders the buffer as
//! navigable offset/hex/ASCII rows and detects embedded JSON-shaped
//! regions, which the Smart layout interleaves as pretty-printed,
//! width-aware overlay rows sharing the same byte-offset space.

pub mod config;
pub mod logging;
pub mod model;
pub mod sample;
pub mod scanner;
pub mod state;
pub mod view;
pub mod view_state;
