//! CLI library components for the VFD stock report generator.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
