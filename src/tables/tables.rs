use std::fmt::Display;

use crate::lexer::tokens::{Token, TokenType};

/// Numeric ids 1-4 of the symbol tables, in report order.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum TableId {
    Service = 1,
    Identifier = 2,
    Literal = 3,
    Separator = 4,
}

impl TableId {
    pub const ALL: [TableId; 4] = [
        TableId::Service,
        TableId::Identifier,
        TableId::Literal,
        TableId::Separator,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: u8) -> Option<TableId> {
        match number {
            1 => Some(TableId::Service),
            2 => Some(TableId::Identifier),
            3 => Some(TableId::Literal),
            4 => Some(TableId::Separator),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            TableId::Service => "Service words",
            TableId::Identifier => "Identifiers",
            TableId::Literal => "Literals",
            TableId::Separator => "Separators",
        }
    }

    pub fn token_type(self) -> TokenType {
        match self {
            TableId::Service => TokenType::Service,
            TableId::Identifier => TokenType::Identifier,
            TableId::Literal => TokenType::Literal,
            TableId::Separator => TokenType::Separator,
        }
    }
}

impl Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Location of one recorded token: table id and 0-based index in that table.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct AddressEntry {
    pub table: TableId,
    pub index: usize,
}

impl Display for AddressEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.table, self.index)
    }
}

/// The four symbol tables plus the address log of one scanner.
///
/// Identical lexemes are not merged; every occurrence gets its own slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTables {
    service_words: Vec<String>,
    identifiers: Vec<String>,
    literals: Vec<String>,
    separators: Vec<String>,
    addresses: Vec<AddressEntry>,
}

impl SymbolTables {
    pub fn new() -> Self {
        SymbolTables::default()
    }

    /// Appends `token` to its table and logs its address.
    ///
    /// Comments are never stored; `None` is returned for them.
    pub fn record(&mut self, token: &Token) -> Option<AddressEntry> {
        let table = token.kind().table()?;
        let entries = self.table_mut(table);
        entries.push(token.value().to_string());

        let entry = AddressEntry {
            table,
            index: entries.len() - 1,
        };
        self.addresses.push(entry);

        Some(entry)
    }

    pub fn table(&self, id: TableId) -> &[String] {
        match id {
            TableId::Service => &self.service_words,
            TableId::Identifier => &self.identifiers,
            TableId::Literal => &self.literals,
            TableId::Separator => &self.separators,
        }
    }

    fn table_mut(&mut self, id: TableId) -> &mut Vec<String> {
        match id {
            TableId::Service => &mut self.service_words,
            TableId::Identifier => &mut self.identifiers,
            TableId::Literal => &mut self.literals,
            TableId::Separator => &mut self.separators,
        }
    }

    pub fn service_words(&self) -> &[String] {
        &self.service_words
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    pub fn literals(&self) -> &[String] {
        &self.literals
    }

    pub fn separators(&self) -> &[String] {
        &self.separators
    }

    pub fn addresses(&self) -> &[AddressEntry] {
        &self.addresses
    }

    pub fn resolve(&self, entry: AddressEntry) -> Option<&str> {
        self.table(entry.table).get(entry.index).map(String::as_str)
    }

    /// Replays the address log as classified tokens, in scan order.
    pub fn tokens(&self) -> impl Iterator<Item = Token> + '_ {
        self.addresses.iter().filter_map(|entry| {
            self.resolve(*entry)
                .map(|text| Token::new(entry.table.token_type(), text.to_string()))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }
}
