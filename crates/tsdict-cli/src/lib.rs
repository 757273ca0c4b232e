//! Library components of the `tsdict` generator CLI.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
