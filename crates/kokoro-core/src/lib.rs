//! kokoro-core
//!
//! Pure domain types and identifier conventions for synthetic patient records.
//! No generation logic lives here; this is the shared vocabulary of the
//! generator, the insight views, and the presentation layer.

pub mod error;
pub mod ids;
pub mod models;
