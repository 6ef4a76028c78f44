//! Integration tests for end-to-end scanning.
//!
//! These tests drive the public scanner API from source text through the
//! symbol tables, the address log and the rendered report.

use std::io;

use lexscan::{
    config::config::{CommentMarkers, LexerConfig, RealtimeOutputMode},
    errors::errors::ScanErrorKind,
    lexer::{charsets::CharacterClasses, lexer::Scanner, tokens::TokenType},
    tables::tables::{AddressEntry, TableId},
};
use pretty_assertions::assert_eq;

fn scenario_config() -> LexerConfig {
    LexerConfig {
        keywords: vec!["if".to_string()],
        identifier_max_length: 10,
        global_variable_prefix: '$',
        comment: CommentMarkers {
            single: "//".to_string(),
            start: "/*".to_string(),
            end: "*/".to_string(),
        },
        operators: vec!["=".to_string(), ";".to_string()],
        display_comments: false,
    }
}

fn scanner(config: LexerConfig) -> Scanner<io::Sink> {
    Scanner::with_writer(
        config,
        CharacterClasses::standard(),
        RealtimeOutputMode::Off,
        io::sink(),
    )
}

fn addresses(pairs: &[(u8, usize)]) -> Vec<AddressEntry> {
    pairs
        .iter()
        .map(|(table, index)| AddressEntry {
            table: TableId::from_number(*table).unwrap(),
            index: *index,
        })
        .collect()
}

#[test]
fn test_statement_with_service_word() {
    let mut scanner = scanner(scenario_config());
    scanner.scan("if x=1;").unwrap();

    let tables = scanner.tables();
    let tokens: Vec<(TokenType, String)> = tables
        .tokens()
        .map(|t| (t.kind(), t.value().to_string()))
        .collect();

    assert_eq!(
        tokens,
        vec![
            (TokenType::Service, "if".to_string()),
            (TokenType::Identifier, "x".to_string()),
            (TokenType::Separator, "=".to_string()),
            (TokenType::Literal, "1".to_string()),
            (TokenType::Separator, ";".to_string()),
        ]
    );
    assert_eq!(
        tables.addresses().to_vec(),
        addresses(&[(1, 0), (2, 0), (4, 0), (3, 0), (4, 1)])
    );
}

#[test]
fn test_too_long_identifier_leaves_tables_empty() {
    let mut scanner = scanner(scenario_config());
    let err = scanner.scan("abcdefghijk;").unwrap_err();

    assert!(matches!(err.kind(), ScanErrorKind::IdentifierTooLong { .. }));
    assert!(scanner.tables().identifiers().is_empty());
    assert!(scanner.tables().separators().is_empty());
    assert!(scanner.tables().addresses().is_empty());
}

#[test]
fn test_hidden_block_comment() {
    let mut scanner = scanner(scenario_config());
    scanner.scan("/* note */x;").unwrap();

    assert_eq!(
        scanner.tables().addresses().to_vec(),
        addresses(&[(2, 0), (4, 0)])
    );
    assert_eq!(scanner.tables().identifiers(), &["x".to_string()]);
    assert_eq!(scanner.tables().separators(), &[";".to_string()]);
}

#[test]
fn test_unterminated_block_comment() {
    let mut scanner = scanner(scenario_config());
    let err = scanner.scan("x; /* open").unwrap_err();

    assert_eq!(err.kind(), &ScanErrorKind::UnterminatedComment);
}

#[test]
fn test_program_report() {
    let config = LexerConfig {
        keywords: vec!["int".to_string(), "while".to_string()],
        operators: ["=", ";", "(", ")", "{", "}", ">", "-="]
            .map(String::from)
            .to_vec(),
        ..scenario_config()
    };
    let source = "int n = 10;\r\n// countdown\r\nwhile (n > 0) {\r\n    n -= 1;\r\n}\r\n";

    let mut scanner = scanner(config);
    scanner.scan(source).unwrap();

    let report = scanner.report().render();
    let expected = "\
Service words (1)
0:\tint
1:\twhile
Identifiers (2)
0:\tn
1:\tn
2:\tn
Literals (3)
0:\t10
1:\t0
2:\t1
Separators (4)
0:\t=
1:\t;
2:\t(
3:\t>
4:\t)
5:\t{
6:\t-=
7:\t;
8:\t}
Standard symbol table
Position: (table, number)

1,0\tint
2,0\tn
4,0\t=
3,0\t10
4,1\t;
1,1\twhile
4,2\t(
2,1\tn
4,3\t>
3,1\t0
4,4\t)
4,5\t{
2,2\tn
4,6\t-=
3,2\t1
4,7\t;
4,8\t}
";

    assert_eq!(report, expected);
}

#[test]
fn test_round_trip_through_address_log() {
    let config = LexerConfig::default();
    let source = "int $g = 3;\r\nvoid main ( ) { print ( $g + 42 ) ; }\r\n";

    let mut scanner = scanner(config);
    scanner.scan(source).unwrap();

    let replayed: Vec<String> = scanner
        .tables()
        .addresses()
        .iter()
        .map(|entry| scanner.tables().resolve(*entry).unwrap().to_string())
        .collect();

    assert_eq!(
        replayed,
        [
            "int", "$g", "=", "3", ";", "void", "main", "(", ")", "{", "print", "(", "$g", "+",
            "42", ")", ";", "}"
        ]
        .map(String::from)
        .to_vec()
    );
}

#[test]
fn test_failed_file_keeps_earlier_tokens() {
    let mut scanner = scanner(scenario_config());
    scanner.scan("a=1;").unwrap();

    assert!(scanner.scan("b=2; c=3x;").is_err());
    // Tokens before the failing literal stay recorded.
    assert_eq!(scanner.tables().identifiers().len(), 3);
    assert_eq!(scanner.tables().literals(), &["1".to_string(), "2".to_string()]);
}
