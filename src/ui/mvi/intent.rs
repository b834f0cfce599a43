//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses on the list or inside a dialog)
/// - Gateway completions that move a dialog forward
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
