//! Derived display state: column geometry and frame rendering.
//!
//! Everything here is pure with respect to its inputs; the impure terminal
//! shell lives in `view`.

pub mod geometry;
pub mod renderer;

pub use geometry::Geometry;
pub use renderer::render;
