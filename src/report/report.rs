use std::{
    fmt::Display,
    io::{self, Write},
};

use crate::{
    config::config::RealtimeOutputMode,
    lexer::tokens::Token,
    tables::tables::{SymbolTables, TableId},
};

pub const REALTIME_HEADER: &str = "Lexeme\t|\tType";

/// Read-only view rendering the four tables, then the address log.
pub struct Report<'a> {
    tables: &'a SymbolTables,
}

impl<'a> Report<'a> {
    pub fn new(tables: &'a SymbolTables) -> Self {
        Report { tables }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }

    fn fmt_table(&self, f: &mut std::fmt::Formatter<'_>, id: TableId) -> std::fmt::Result {
        writeln!(f, "{} ({})", id.title(), id)?;

        for (index, item) in self.tables.table(id).iter().enumerate() {
            writeln!(f, "{}:\t{}", index, item)?;
        }

        Ok(())
    }

    fn fmt_address_log(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Standard symbol table")?;
        writeln!(f, "Position: (table, number)")?;
        writeln!(f)?;

        for entry in self.tables.addresses() {
            writeln!(f, "{}\t{}", entry, self.tables.resolve(*entry).unwrap_or_default())?;
        }

        Ok(())
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for id in TableId::ALL {
            self.fmt_table(f, id)?;
        }

        self.fmt_address_log(f)
    }
}

/// Streams token rows to `out` according to the realtime mode.
pub struct RealtimePrinter<W: Write> {
    mode: RealtimeOutputMode,
    header_printed: bool,
    out: W,
}

impl<W: Write> RealtimePrinter<W> {
    pub fn new(mode: RealtimeOutputMode, out: W) -> Self {
        RealtimePrinter {
            mode,
            header_printed: false,
            out,
        }
    }

    pub fn mode(&self) -> RealtimeOutputMode {
        self.mode
    }

    pub fn emit(&mut self, token: &Token) -> io::Result<()> {
        match self.mode {
            RealtimeOutputMode::Off => return Ok(()),
            RealtimeOutputMode::TokensWithHeader if !self.header_printed => {
                writeln!(self.out, "{}", REALTIME_HEADER)?;
                self.header_printed = true;
            }
            _ => {}
        }

        writeln!(self.out, "{}", token)
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
