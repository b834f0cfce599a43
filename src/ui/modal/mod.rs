//! Dialog state for the inventory screen.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - One tagged enum for every dialog the screen can show
//! - `intent.rs` - User actions and gateway completions
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::ModalIntent;
pub use reducer::ModalReducer;
pub use state::ModalState;
