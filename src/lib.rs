#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{ErrorTip, ScanError};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod report;
pub mod tables;

extern crate regex;

/// Character offset into a scanned buffer, tagged with the name of the
/// buffer it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub usize, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

/// Finds the line holding the character at `position`.
///
/// Returns the 1-based line number, the line text (with its terminator) and
/// the character offset of `position` within that line.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.chars().count();

        if (start..end).contains(&position) {
            return Some((line_number, line.to_string(), position - start));
        }

        start = end;
        line_number += 1;
    }

    None
}

pub fn display_error(error: &ScanError, source: &str) -> String {
    /*
        Error: name (tip)
        -> main.toy
           |
        20 | x = 12a;
           | -----^
    */

    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ' || *c == '\t').count();

    (string.chars().skip(start).collect(), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::errors::errors::{ScanError, ScanErrorKind};
    use crate::Position;

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nsecond\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_past_end() {
        assert!(super::get_line_at_position("abc", 3).is_none());
    }

    #[test]
    fn test_display_error_points_at_offset() {
        let source = "x = 1;\n  y = 12a;\n";
        let error = ScanError::new(
            ScanErrorKind::InvalidLiteral { token: "12a".to_string() },
            Position(13, Rc::new("main.toy".to_string())),
        );

        let rendered = super::display_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: InvalidLiteral (Invalid literal: `12a`)");
        assert_eq!(lines[1], "-> main.toy");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | y = 12a;");
        assert_eq!(lines[4], "  | ----^");
    }

    #[test]
    fn test_display_error_without_source_line() {
        let error = ScanError::new(ScanErrorKind::UnterminatedComment, Position::null());

        let rendered = super::display_error(&error, "");
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.starts_with("Error: UnterminatedComment"));
    }
}
