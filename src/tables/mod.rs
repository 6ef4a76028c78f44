//! Symbol tables produced by a scan.
//!
//! Four append-only tables (service words, identifiers, literals,
//! separators) and the address log recording, in scan order, where each
//! recorded token lives.

pub mod tables;
