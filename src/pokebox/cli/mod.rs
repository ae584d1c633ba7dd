mod commands;
mod render;
pub mod setup;

pub use commands::run;
