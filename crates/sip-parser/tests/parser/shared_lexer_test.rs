// Several headers parsed in order over one lexer

use rvoip_sip_parser::types::{
    Authorization, CSeq, CallId, HeaderName, MaxForwards, Method, ParsedHeader, Supported, To,
};
use rvoip_sip_parser::{parse_header_block, parse_next, Error, HeaderParser, Lexer, ParserConfig};

const INVITE_HEADERS: &str = "Via: SIP/2.0/UDP pc33.atlanta.com;branch=z9hG4bK776asdhds\r\n\
Max-Forwards: 70\r\n\
To: Bob <sip:bob@biloxi.com>\r\n\
From: Alice <sip:alice@atlanta.com>;tag=1928301774\r\n\
Call-ID: a84b4c76e66710@pc33.atlanta.com\r\n\
CSeq: 314159 INVITE\r\n\
Contact: <sip:alice@pc33.atlanta.com>\r\n\
Content-Type: application/sdp\r\n\
Content-Length: 142\r\n\
\r\n";

#[test]
fn test_typed_parsers_share_one_lexer() {
    let input = "Max-Forwards: 70\r\nTo: <sip:bob@example.com>\r\nCSeq: 2 ACK\r\n";
    let mut lexer = Lexer::new(input);

    let hops: MaxForwards = HeaderParser::with_lexer(&mut lexer).parse().unwrap();
    assert_eq!(lexer.offset(), 18);
    let to: To = HeaderParser::with_lexer(&mut lexer).parse().unwrap();
    let cseq: CSeq = HeaderParser::with_lexer(&mut lexer).parse().unwrap();

    assert_eq!(hops.value(), 70);
    assert_eq!(to.uri.host(), "example.com");
    assert_eq!(cseq, CSeq::new(2, Method::Ack));
    assert!(lexer.is_at_end());
}

#[test]
fn test_context_restored_between_headers() {
    // CSeq switches to the method table mid-value; the next header name must
    // still be recognized.
    let mut lexer = Lexer::new("CSeq: 1 INVITE\r\nSupported: timer\r\n");
    let _: CSeq = HeaderParser::with_lexer(&mut lexer).parse().unwrap();
    let supported: Supported = HeaderParser::with_lexer(&mut lexer).parse().unwrap();
    assert_eq!(supported.tags(), ["timer"]);
}

#[test]
fn test_parse_next_dispatches_in_order() {
    let config = ParserConfig::default();
    let mut lexer = Lexer::new("i: abc@host\nAuthorization: Digest realm=\"r\"\nX-Foo: bar\n");

    let call_id = parse_next(&mut lexer, &config).unwrap();
    let auth = parse_next(&mut lexer, &config).unwrap();
    let other = parse_next(&mut lexer, &config).unwrap();

    assert_eq!(call_id, ParsedHeader::CallId(CallId::new("abc@host")));
    match auth {
        ParsedHeader::Authorization(Authorization(credentials)) => {
            assert_eq!(credentials.realm(), Some("r"))
        }
        other => panic!("Expected Authorization, got {:?}", other),
    }
    assert_eq!(other.name(), HeaderName::Other("X-Foo".to_string()));
    assert!(lexer.is_at_end());
}

#[test]
fn test_header_block() {
    let headers = parse_header_block(INVITE_HEADERS, &ParserConfig::default()).unwrap();
    let names: Vec<HeaderName> = headers.iter().map(ParsedHeader::name).collect();
    assert_eq!(
        names,
        [
            HeaderName::Via,
            HeaderName::MaxForwards,
            HeaderName::To,
            HeaderName::From,
            HeaderName::CallId,
            HeaderName::CSeq,
            HeaderName::Contact,
            HeaderName::ContentType,
            HeaderName::ContentLength,
        ]
    );
}

#[test]
fn test_error_in_shared_lexer_reports_input_offset() {
    let mut lexer = Lexer::new("Max-Forwards: 70\r\nSupported: ,timer\r\n");
    let _: MaxForwards = HeaderParser::with_lexer(&mut lexer).parse().unwrap();
    let err = HeaderParser::with_lexer(&mut lexer)
        .parse::<Supported>()
        .unwrap_err();
    match err {
        Error::UnexpectedToken { header, offset, .. } => {
            assert_eq!(header, Some(HeaderName::Supported));
            assert_eq!(offset, 29);
        }
        other => panic!("Expected UnexpectedToken, got {:?}", other),
    }
}
