//! Library components of the DM builder CLI.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod sample;
