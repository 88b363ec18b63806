//! kokoro-cli
//!
//! Library half of the `kokoro` binary: config file handling and the
//! aggregated patient overview the binary prints.

pub mod config;
pub mod overview;
