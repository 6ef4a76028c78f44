//! Lexical analysis module for the scanner.
//!
//! This module contains the finite-state scanner that partitions source
//! text into classified lexemes. It handles:
//!
//! - Character class membership (letters, digits, punctuation, ignorables)
//! - Recognition of identifiers, service words, literals and separators
//! - Multi-character operators and both comment forms
//! - Fatal errors on malformed input, with source positions

pub mod charsets;
pub mod lexer;
pub mod tokens;
