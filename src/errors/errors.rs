use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A fatal scan failure together with where it happened.
///
/// Tokens recorded before the failure stay in the tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at {position}")]
pub struct ScanError {
    internal_error: ScanErrorKind,
    position: Position,
}

impl ScanError {
    pub fn new(error_impl: ScanErrorKind, position: Position) -> Self {
        ScanError {
            internal_error: error_impl,
            position,
        }
    }

    pub fn kind(&self) -> &ScanErrorKind {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ScanErrorKind::IdentifierTooLong { .. } => "IdentifierTooLong",
            ScanErrorKind::InvalidIdentifier { .. } => "InvalidIdentifier",
            ScanErrorKind::InvalidLiteral { .. } => "InvalidLiteral",
            ScanErrorKind::UnterminatedComment => "UnterminatedComment",
            ScanErrorKind::InvalidOperator { .. } => "InvalidOperator",
            ScanErrorKind::OutputFailed { .. } => "OutputFailed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ScanErrorKind::IdentifierTooLong { token, max } => ErrorTip::Suggestion(format!(
                "Identifier `{}` is longer than {} characters",
                token, max
            )),
            ScanErrorKind::InvalidIdentifier { token } => {
                ErrorTip::Suggestion(format!("Invalid identifier: `{}`", token))
            }
            ScanErrorKind::InvalidLiteral { token } => {
                ErrorTip::Suggestion(format!("Invalid literal: `{}`", token))
            }
            ScanErrorKind::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("Comment was never closed"))
            }
            ScanErrorKind::InvalidOperator { token } => {
                ErrorTip::Suggestion(format!("Invalid operator (separator): `{}`", token))
            }
            ScanErrorKind::OutputFailed { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanErrorKind {
    #[error("identifier too long: {token:?} (max {max})")]
    IdentifierTooLong { token: String, max: usize },
    #[error("invalid identifier: {token:?}")]
    InvalidIdentifier { token: String },
    #[error("invalid literal: {token:?}")]
    InvalidLiteral { token: String },
    #[error("comment was not closed")]
    UnterminatedComment,
    #[error("invalid operator (separator): {token:?}")]
    InvalidOperator { token: String },
    #[error("failed to write realtime output: {message}")]
    OutputFailed { message: String },
}

/// Rejected lexer configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("comment marker `{name}` must not be empty")]
    EmptyCommentMarker { name: &'static str },
    #[error("identifier max length must be greater than zero")]
    ZeroIdentifierLength,
    #[error("unknown realtime output mode {0}, expected 0, 1 or 2")]
    UnknownRealtimeMode(u8),
}

/// Errors raised by the command-line shell around the scanner.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid input file pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("scan failed: {0}")]
    Scan(#[from] ScanError),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
