pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
mod context;
mod logging;

pub use context::AppContext;
