//! GitHub Actions step outputs and workflow commands

pub mod commands;
pub mod writer;

pub use commands::error_annotation;
pub use writer::OutputWriter;
