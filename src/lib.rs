//! Umbrella crate re-exporting [`eurostat_core`] for the demos.
pub use eurostat_core::*;
