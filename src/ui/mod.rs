pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod modal;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod screen;
pub mod terminal_guard;
pub mod theme;
