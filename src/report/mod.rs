//! Text rendering of scan results.
//!
//! - `Report` renders the symbol tables and the address log
//! - `RealtimePrinter` streams each token as the scanner records it

pub mod report;

#[cfg(test)]
mod tests;
