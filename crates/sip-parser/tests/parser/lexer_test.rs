// Lexer behavior as seen by grammar code

use rvoip_sip_parser::lexer::{keyword, LexContext, Lexer, TokenKind};
use rvoip_sip_parser::types::{HeaderName, Method};
use rvoip_sip_parser::Error;

fn collect(lexer: &mut Lexer<'_>) -> Vec<(TokenKind, String, usize)> {
    let mut out = Vec::new();
    while !lexer.is_at_end() {
        let token = lexer.next_token().unwrap();
        out.push((token.kind.clone(), token.value.to_string(), token.offset));
    }
    out
}

#[test]
fn test_same_lexeme_per_context() {
    let cases = [
        (LexContext::HeaderName, TokenKind::Identifier),
        (LexContext::Method, TokenKind::Method(Method::Register)),
        (LexContext::Value, TokenKind::Identifier),
    ];
    for (context, expected) in cases {
        let mut lexer = Lexer::new("REGISTER");
        lexer.select_context(context);
        assert_eq!(lexer.next_token().unwrap().kind, expected, "context {:?}", context);
    }

    let mut lexer = Lexer::new("Via");
    assert_eq!(
        lexer.next_token().unwrap().kind,
        TokenKind::HeaderName(HeaderName::Via)
    );
}

#[test]
fn test_compact_header_names_are_keywords() {
    assert_eq!(
        keyword(LexContext::HeaderName, "v"),
        Some(TokenKind::HeaderName(HeaderName::Via))
    );
    assert_eq!(
        keyword(LexContext::HeaderName, "K"),
        Some(TokenKind::HeaderName(HeaderName::Supported))
    );
    assert_eq!(keyword(LexContext::Value, "v"), None);
}

#[test]
fn test_methods_are_case_sensitive() {
    let mut lexer = Lexer::new("invite");
    lexer.select_context(LexContext::Method);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
}

#[test]
fn test_token_stream_of_header_line() {
    let mut lexer = Lexer::new("CSeq: 1 ACK\r\n");
    let first = lexer.next_token().unwrap();
    assert_eq!(first.kind, TokenKind::HeaderName(HeaderName::CSeq));
    lexer.select_context(LexContext::Value);

    let rest = collect(&mut lexer);
    let kinds: Vec<TokenKind> = rest.iter().map(|(k, _, _)| k.clone()).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Separator(':'),
            TokenKind::Whitespace,
            TokenKind::Digits,
            TokenKind::Whitespace,
            TokenKind::Identifier,
            TokenKind::Newline,
        ]
    );
    let offsets: Vec<usize> = rest.iter().map(|(_, _, o)| *o).collect();
    assert_eq!(offsets, [4, 5, 6, 7, 8, 11]);
}

#[test]
fn test_quoted_string_unescaping() {
    let mut lexer = Lexer::new(r#""a \\ b \"c\"""#);
    lexer.select_context(LexContext::Value);
    let token = lexer.next_token().unwrap();
    assert_eq!(token.kind, TokenKind::QuotedString);
    assert_eq!(token.value, r#"a \ b "c""#);
    assert!(lexer.is_at_end());
}

#[test]
fn test_unterminated_quote_at_end_of_input() {
    let mut lexer = Lexer::new("\"never closed");
    match lexer.next_token() {
        Err(Error::PrematureEndOfInput { offset, .. }) => assert_eq!(offset, 13),
        other => panic!("Expected PrematureEndOfInput, got {:?}", other),
    }
}

#[test]
fn test_end_of_input() {
    let mut lexer = Lexer::new("");
    assert!(lexer.is_at_end());
    assert!(lexer.at_line_end());
    assert!(matches!(
        lexer.next_token(),
        Err(Error::PrematureEndOfInput { offset: 0, .. })
    ));
}

#[test]
fn test_peek_does_not_advance() {
    let mut lexer = Lexer::new("timer, 100rel");
    lexer.select_context(LexContext::Value);
    let peeked = lexer.peek_token().unwrap();
    let taken = lexer.next_token().unwrap();
    assert_eq!(peeked, taken);
    assert_eq!(lexer.offset(), 5);
}

#[test]
fn test_line_length_excludes_terminator() {
    let lexer = Lexer::new("Supported: timer\r\nNext: 1\r\n");
    assert_eq!(lexer.line_length(), 16);
}
