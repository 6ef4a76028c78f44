//! Unit tests for report rendering and realtime output.

use pretty_assertions::assert_eq;

use crate::{
    config::config::RealtimeOutputMode,
    lexer::tokens::{Token, TokenType},
    tables::tables::SymbolTables,
};

use super::report::{RealtimePrinter, Report, REALTIME_HEADER};

fn sample_tables() -> SymbolTables {
    let mut tables = SymbolTables::new();
    for (kind, value) in [
        (TokenType::Service, "if"),
        (TokenType::Identifier, "x"),
        (TokenType::Separator, "="),
        (TokenType::Literal, "1"),
        (TokenType::Separator, ";"),
    ] {
        tables.record(&Token::new(kind, value.to_string()));
    }
    tables
}

#[test]
fn test_render_full_report() {
    let tables = sample_tables();

    let expected = "\
Service words (1)
0:\tif
Identifiers (2)
0:\tx
Literals (3)
0:\t1
Separators (4)
0:\t=
1:\t;
Standard symbol table
Position: (table, number)

1,0\tif
2,0\tx
4,0\t=
3,0\t1
4,1\t;
";

    assert_eq!(Report::new(&tables).render(), expected);
}

#[test]
fn test_render_empty_tables() {
    let tables = SymbolTables::new();

    let expected = "\
Service words (1)
Identifiers (2)
Literals (3)
Separators (4)
Standard symbol table
Position: (table, number)

";

    assert_eq!(Report::new(&tables).render(), expected);
}

#[test]
fn test_write_to_matches_render() {
    let tables = sample_tables();
    let report = Report::new(&tables);

    let mut out = Vec::new();
    report.write_to(&mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), report.render());
}

#[test]
fn test_printer_modes() {
    let token = Token::new(TokenType::Literal, "7".to_string());

    let mut off = RealtimePrinter::new(RealtimeOutputMode::Off, Vec::new());
    off.emit(&token).unwrap();
    assert!(off.into_inner().is_empty());

    let mut only = RealtimePrinter::new(RealtimeOutputMode::TokensOnly, Vec::new());
    only.emit(&token).unwrap();
    assert_eq!(only.into_inner(), b"7\t|\tLiteral\n".to_vec());

    let mut header = RealtimePrinter::new(RealtimeOutputMode::TokensWithHeader, Vec::new());
    header.emit(&token).unwrap();
    header.emit(&token).unwrap();
    assert_eq!(header.mode(), RealtimeOutputMode::TokensWithHeader);
    assert_eq!(
        String::from_utf8(header.into_inner()).unwrap(),
        format!("{}\n7\t|\tLiteral\n7\t|\tLiteral\n", REALTIME_HEADER)
    );
}

#[test]
fn test_printer_labels_service_as_identifier() {
    let mut printer = RealtimePrinter::new(RealtimeOutputMode::TokensOnly, Vec::new());
    printer
        .emit(&Token::new(TokenType::Service, "while".to_string()))
        .unwrap();

    assert_eq!(printer.get_ref().as_slice(), b"while\t|\tIdentifier\n");
}
