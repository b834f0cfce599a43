pub mod cli;
pub mod config;
pub mod filter;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod ui;
pub mod validation;
