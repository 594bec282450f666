//! CLI library components for the contact roster normalizer.

pub mod commands;
pub mod logging;
pub mod output;
