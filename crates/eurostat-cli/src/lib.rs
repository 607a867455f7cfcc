//! eurostat-cli
//! ============
//!
//! Command-line interface for the `eurostat-core` library.
//!
//! This crate primarily provides a binary (`eurostat`). The library target
//! exists so that docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! eurostat --help
//! eurostat dictionary geo
//! eurostat dataset tps00001 --keep geo
//! eurostat geodata --level 1
//! ```
//!
//! For programmatic access use [`eurostat-core`] directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
