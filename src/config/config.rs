use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::errors::{ConfigError, Result};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// How recognised tokens are echoed while scanning.
///
/// Stored in config files as 0, 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(try_from = "u8", into = "u8")]
pub enum RealtimeOutputMode {
    #[default]
    Off,
    #[value(name = "tokens")]
    TokensOnly,
    /// Column header printed once before the first token row
    #[value(name = "header")]
    TokensWithHeader,
}

impl TryFrom<u8> for RealtimeOutputMode {
    type Error = ConfigError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(RealtimeOutputMode::Off),
            1 => Ok(RealtimeOutputMode::TokensOnly),
            2 => Ok(RealtimeOutputMode::TokensWithHeader),
            other => Err(ConfigError::UnknownRealtimeMode(other)),
        }
    }
}

impl From<RealtimeOutputMode> for u8 {
    fn from(mode: RealtimeOutputMode) -> Self {
        match mode {
            RealtimeOutputMode::Off => 0,
            RealtimeOutputMode::TokensOnly => 1,
            RealtimeOutputMode::TokensWithHeader => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentMarkers {
    /// Runs to the next carriage return
    pub single: String,
    pub start: String,
    pub end: String,
}

impl Default for CommentMarkers {
    fn default() -> Self {
        CommentMarkers {
            single: String::from("//"),
            start: String::from("/*"),
            end: String::from("*/"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LexerConfig {
    #[serde(rename = "serviceWords")]
    pub keywords: Vec<String>,
    pub identifier_max_length: usize,
    /// Forces identifier classification when it opens a lexeme.
    #[serde(rename = "globalVariableSymbol")]
    pub global_variable_prefix: char,
    pub comment: CommentMarkers,
    pub operators: Vec<String>,
    pub display_comments: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            keywords: ["if", "else", "while", "for", "return", "int", "void", "print"]
                .map(String::from)
                .to_vec(),
            identifier_max_length: 16,
            global_variable_prefix: '$',
            comment: CommentMarkers::default(),
            operators: [
                "=", "+", "-", "*", "/", ",", ";", "!", "<", ">", "(", ")", "{", "}", "==", "!=",
                "<=", ">=", "&&", "++", "--", "+=", "-=",
            ]
            .map(String::from)
            .to_vec(),
            display_comments: false,
        }
    }
}

impl LexerConfig {
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.identifier_max_length == 0 {
            return Err(ConfigError::ZeroIdentifierLength);
        }

        let markers = [
            ("single", &self.comment.single),
            ("start", &self.comment.start),
            ("end", &self.comment.end),
        ];
        for (name, marker) in markers {
            if marker.is_empty() {
                return Err(ConfigError::EmptyCommentMarker { name });
            }
        }

        Ok(())
    }
}

/// Everything the shell reads from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(flatten)]
    pub lexer: LexerConfig,

    #[serde(default)]
    pub realtime_output_mode: RealtimeOutputMode,

    /// Names relative to `data_directory`, scanned in order.
    #[serde(default)]
    pub input_file_names: Vec<String>,

    #[serde(default = "default_data_directory")]
    pub data_directory: PathBuf,

    /// Used to discover inputs when `input_file_names` is empty.
    #[serde(default = "default_input_file_pattern")]
    pub input_file_pattern: String,
}

fn default_data_directory() -> PathBuf {
    PathBuf::from("data")
}

fn default_input_file_pattern() -> String {
    String::from(r"\.txt$")
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            lexer: LexerConfig::default(),
            realtime_output_mode: RealtimeOutputMode::default(),
            input_file_names: Vec::new(),
            data_directory: default_data_directory(),
            input_file_pattern: default_input_file_pattern(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.lexer.validate()?;

        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading configuration");
        let json = fs::read_to_string(path)?;

        AppConfig::from_json(&json)
    }

    /// Loads `config.json` from the working directory, or the defaults when
    /// there is none.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE_NAME);
        if path.exists() {
            AppConfig::load_from_path(path)
        } else {
            debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            Ok(AppConfig::default())
        }
    }

    /// Input files in scan order.
    ///
    /// Configured names win; otherwise every file in the data directory whose
    /// name matches the input pattern, sorted by name.
    pub fn input_files(&self) -> Result<Vec<PathBuf>> {
        if !self.input_file_names.is_empty() {
            return Ok(self
                .input_file_names
                .iter()
                .map(|name| self.data_directory.join(name))
                .collect());
        }

        let pattern = Regex::new(&self.input_file_pattern)?;
        let mut files = Vec::new();

        for entry in fs::read_dir(&self.data_directory)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }

            let name = entry.file_name();
            if pattern.is_match(&name.to_string_lossy()) {
                files.push(entry.path());
            }
        }

        files.sort();
        Ok(files)
    }
}
