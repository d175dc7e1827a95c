//! Command-line arguments

pub mod args;
