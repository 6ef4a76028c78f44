//! Error types and error handling for the scanner.
//!
//! This module defines the error types used throughout a scan and by the
//! command-line shell around it. It includes:
//!
//! - Scan errors with source position information
//! - Configuration validation errors
//! - Shell-level errors (I/O, JSON, file pattern)
//! - Error names and suggestions for diagnostics

pub mod errors;
