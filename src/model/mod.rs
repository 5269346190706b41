//! Domain types shared across the crate.

pub mod error;
pub mod key_action;
pub mod layout;
pub mod region;

pub use error::AppError;
pub use key_action::KeyAction;
pub use layout::{ColumnKind, Layout, PREDEFINED_LAYOUTS};
pub use region::Region;
