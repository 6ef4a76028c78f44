use std::fmt::Display;

use crate::tables::tables::TableId;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenType {
    Identifier,
    Literal,
    Separator,
    // Reserved word; an identifier-shaped lexeme found in the keyword list
    Service,
    Comment,
}

impl TokenType {
    pub fn label(&self) -> &'static str {
        match self {
            TokenType::Identifier => "Identifier",
            TokenType::Literal => "Literal",
            TokenType::Separator => "Separator",
            TokenType::Service => "Service word",
            TokenType::Comment => "Comment",
        }
    }

    /// Label shown in realtime output. Service words are shown as identifiers.
    pub fn display_label(&self) -> &'static str {
        match self {
            TokenType::Service => TokenType::Identifier.label(),
            other => other.label(),
        }
    }

    /// The symbol table this type is recorded in. Comments have none.
    pub fn table(&self) -> Option<TableId> {
        match self {
            TokenType::Service => Some(TableId::Service),
            TokenType::Identifier => Some(TableId::Identifier),
            TokenType::Literal => Some(TableId::Literal),
            TokenType::Separator => Some(TableId::Separator),
            TokenType::Comment => None,
        }
    }
}

impl Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A finalized lexeme and its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenType,
    value: String,
}

impl Token {
    pub fn new(kind: TokenType, value: String) -> Self {
        Token { kind, value }
    }

    pub fn kind(&self) -> TokenType {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Realtime row: `text\t|\tlabel`.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t|\t{}", self.value, self.kind.display_label())
    }
}
