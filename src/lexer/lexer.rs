use std::{
    collections::HashSet,
    io::{self, Stdout, Write},
    mem,
    rc::Rc,
};

use tracing::{debug, trace};

use crate::{
    config::config::{LexerConfig, RealtimeOutputMode},
    errors::errors::{ScanError, ScanErrorKind},
    report::report::{RealtimePrinter, Report},
    tables::tables::SymbolTables,
    Position, MK_TOKEN,
};

use super::{
    charsets::CharacterClasses,
    tokens::{Token, TokenType},
};

const DEFAULT_FILE_NAME: &str = "shell";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum State {
    Unset,
    Identifier,
    Literal,
    Separator,
}

/// Read position over an immutable character buffer. Peeking never consumes.
struct Lexer<'s> {
    source: &'s [char],
    pos: usize,
}

impl<'s> Lexer<'s> {
    fn new(source: &'s [char]) -> Self {
        Lexer { source, pos: 0 }
    }

    fn at(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.advance_n(1);
    }

    fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    fn remainder(&self) -> &'s [char] {
        &self.source[self.pos..]
    }

    /// Up to `n` upcoming characters.
    fn lookahead(&self, n: usize) -> &'s [char] {
        let rest = self.remainder();
        &rest[..n.min(rest.len())]
    }

    fn starts_with(&self, pattern: &[char]) -> bool {
        self.remainder().starts_with(pattern)
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

/// Finite-state scanner filling one set of symbol tables.
///
/// Tables accumulate across `scan` calls on the same instance; use a fresh
/// instance per input for independent results.
pub struct Scanner<W: Write = Stdout> {
    classes: CharacterClasses,
    config: LexerConfig,
    keywords: HashSet<String>,
    operators: HashSet<String>,
    comment_start: Vec<char>,
    comment_end: Vec<char>,
    tables: SymbolTables,
    printer: RealtimePrinter<W>,
    file: Rc<String>,
}

impl Scanner<Stdout> {
    pub fn new(config: LexerConfig, classes: CharacterClasses, mode: RealtimeOutputMode) -> Self {
        Scanner::with_writer(config, classes, mode, io::stdout())
    }
}

impl<W: Write> Scanner<W> {
    pub fn with_writer(
        config: LexerConfig,
        classes: CharacterClasses,
        mode: RealtimeOutputMode,
        out: W,
    ) -> Self {
        Scanner {
            keywords: config.keywords.iter().cloned().collect(),
            operators: config.operators.iter().cloned().collect(),
            comment_start: config.comment.start.chars().collect(),
            comment_end: config.comment.end.chars().collect(),
            classes,
            config,
            tables: SymbolTables::new(),
            printer: RealtimePrinter::new(mode, out),
            file: Rc::new(String::from(DEFAULT_FILE_NAME)),
        }
    }

    pub fn scan(&mut self, text: &str) -> Result<(), ScanError> {
        self.scan_named(text, DEFAULT_FILE_NAME)
    }

    /// Scans `text`, naming it `file` in error positions.
    ///
    /// Stops at the first error; tokens recorded before it are kept.
    #[tracing::instrument(level = "debug", skip(self, text), fields(chars = text.len()))]
    pub fn scan_named(&mut self, text: &str, file: &str) -> Result<(), ScanError> {
        self.file = Rc::new(String::from(file));

        let source: Vec<char> = text.chars().collect();
        let mut lex = Lexer::new(&source);

        let mut state = State::Unset;
        let mut token = String::new();
        let mut start = 0;

        // End of input acts as an ignorable terminator for a pending token.
        loop {
            let c = lex.at();

            match state {
                State::Unset => {
                    let Some(c) = c else { break };

                    start = lex.pos;
                    if c == self.config.global_variable_prefix || self.classes.is_letter(c) {
                        state = State::Identifier;
                        token = c.to_string();
                    } else if self.classes.is_digit(c) {
                        state = State::Literal;
                        token = c.to_string();
                    } else if self.classes.is_punctuation(c) {
                        state = State::Separator;
                        token = c.to_string();
                    } else {
                        trace!(offset = lex.pos, ch = ?c, "skipping character");
                    }

                    lex.advance();
                }
                State::Identifier => match c {
                    Some(c) if self.classes.is_letter(c) || self.classes.is_digit(c) => {
                        token.push(c);
                        lex.advance();
                    }
                    Some(c) if !self.classes.is_terminator(c) => {
                        return Err(self.error(
                            ScanErrorKind::InvalidIdentifier { token },
                            lex.pos,
                        ));
                    }
                    _ => {
                        self.finish_identifier(mem::take(&mut token), start)?;
                        state = State::Unset;
                    }
                },
                State::Literal => match c {
                    Some(c) if self.classes.is_digit(c) => {
                        token.push(c);
                        lex.advance();
                    }
                    Some(c) if !self.classes.is_terminator(c) => {
                        token.push(c);
                        return Err(self.error(ScanErrorKind::InvalidLiteral { token }, start));
                    }
                    _ => {
                        self.record(MK_TOKEN!(TokenType::Literal, mem::take(&mut token)), start)?;
                        state = State::Unset;
                    }
                },
                State::Separator => {
                    if token == self.config.comment.single {
                        let comment = read_line_comment(&mut lex, mem::take(&mut token));
                        self.record(MK_TOKEN!(TokenType::Comment, comment), start)?;
                        state = State::Unset;
                    } else if let Some(c) = c.filter(|c| self.classes.is_punctuation(*c)) {
                        token.push(c);
                        lex.advance();
                    } else if let Some(needed) = self.block_comment_opens(&lex, &token) {
                        lex.advance_n(needed);
                        let opened = self.config.comment.start.clone();

                        let Some(comment) = read_block_comment(&mut lex, opened, &self.comment_end)
                        else {
                            return Err(self.error(ScanErrorKind::UnterminatedComment, start));
                        };

                        token.clear();
                        self.record(MK_TOKEN!(TokenType::Comment, comment), start)?;
                        state = State::Unset;
                    } else if self.operators.contains(&token) {
                        self.record(MK_TOKEN!(TokenType::Separator, mem::take(&mut token)), start)?;
                        state = State::Unset;
                    } else {
                        return Err(self.error(ScanErrorKind::InvalidOperator { token }, start));
                    }
                }
            }
        }

        debug_assert!(lex.at_eof());
        Ok(())
    }

    /// Characters still needed from the input to complete the block comment
    /// opener that `token` begins, if the upcoming input completes it.
    fn block_comment_opens(&self, lex: &Lexer<'_>, token: &str) -> Option<usize> {
        let have: Vec<char> = token.chars().collect();
        let needed = self.comment_start.len().checked_sub(have.len())?;

        let upcoming = lex.lookahead(needed);
        let matches = upcoming.len() == needed
            && self.comment_start[..have.len()] == have[..]
            && self.comment_start[have.len()..] == *upcoming;

        matches.then_some(needed)
    }

    fn finish_identifier(&mut self, text: String, start: usize) -> Result<(), ScanError> {
        let kind = if self.keywords.contains(&text) {
            TokenType::Service
        } else {
            let max = self.config.identifier_max_length;
            if text.chars().count() > max {
                return Err(self.error(ScanErrorKind::IdentifierTooLong { token: text, max }, start));
            }

            TokenType::Identifier
        };

        self.record(MK_TOKEN!(kind, text), start)
    }

    fn record(&mut self, token: Token, start: usize) -> Result<(), ScanError> {
        if token.kind() == TokenType::Comment && !self.config.display_comments {
            trace!(offset = start, "discarding comment");
            return Ok(());
        }

        if let Err(e) = self.printer.emit(&token) {
            return Err(self.error(
                ScanErrorKind::OutputFailed {
                    message: e.to_string(),
                },
                start,
            ));
        }

        if let Some(entry) = self.tables.record(&token) {
            debug!(address = %entry, lexeme = token.value(), kind = %token.kind(), "recorded token");
        }

        Ok(())
    }

    fn error(&self, kind: ScanErrorKind, offset: usize) -> ScanError {
        ScanError::new(kind, Position(offset, Rc::clone(&self.file)))
    }

    pub fn tables(&self) -> &SymbolTables {
        &self.tables
    }

    pub fn into_tables(self) -> SymbolTables {
        self.tables
    }

    pub fn report(&self) -> Report<'_> {
        Report::new(&self.tables)
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    pub fn writer(&self) -> &W {
        self.printer.get_ref()
    }

    pub fn into_writer(self) -> W {
        self.printer.into_inner()
    }
}

/// Collects a single-line comment up to, not including, the next carriage
/// return or the end of input.
fn read_line_comment(lex: &mut Lexer<'_>, mut text: String) -> String {
    while let Some(c) = lex.at() {
        if c == '\r' {
            break;
        }

        text.push(c);
        lex.advance();
    }

    text
}

/// Collects a block comment through its end marker. `None` when the input
/// runs out first.
fn read_block_comment(lex: &mut Lexer<'_>, mut text: String, end: &[char]) -> Option<String> {
    while let Some(c) = lex.at() {
        if lex.starts_with(end) {
            text.extend(end);
            lex.advance_n(end.len());
            return Some(text);
        }

        text.push(c);
        lex.advance();
    }

    None
}

/// Scans `source` with a fresh scanner and no realtime output.
pub fn tokenize(source: &str, config: &LexerConfig) -> Result<SymbolTables, ScanError> {
    let mut scanner = Scanner::with_writer(
        config.clone(),
        CharacterClasses::standard(),
        RealtimeOutputMode::Off,
        io::sink(),
    );

    scanner.scan(source)?;
    Ok(scanner.into_tables())
}
