//! Scanner and shell configuration.
//!
//! Lexer settings (keywords, comment markers, operators), the realtime
//! output mode and input file discovery, loaded from a JSON file.

pub mod config;
