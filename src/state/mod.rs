//! Navigation state machine (pure core).

pub mod app_state;
pub mod event;

pub use app_state::AppState;
pub use event::AppEvent;
