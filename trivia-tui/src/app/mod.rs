//! Application module
//!
//! - Actions: what can happen
//! - State: what is true right now
//! - Reducer: pure function (State, Action) -> State
//! - Keymap: which key means which action on which screen

pub mod actions;
pub mod event;
pub mod keymap;
pub mod reducer;
pub mod state;

pub use actions::{Action, Focus};
pub use event::{EventHandler, TuiEvent};
pub use keymap::map_key;
pub use reducer::reduce;
pub use state::{AppState, UiConfig};
