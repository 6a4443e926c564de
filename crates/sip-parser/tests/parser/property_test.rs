// Property tests over generated header lines

use proptest::prelude::*;

use rvoip_sip_parser::lexer::{LexContext, Lexer};
use rvoip_sip_parser::types::{Supported, To};
use rvoip_sip_parser::{parse_header, HeaderParser, ParsedHeader};

fn option_tag() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9.+-]{0,11}"
}

fn context() -> impl Strategy<Value = LexContext> {
    prop_oneof![
        Just(LexContext::HeaderName),
        Just(LexContext::Method),
        Just(LexContext::Value),
    ]
}

fn scan_with(input: &str, contexts: &[LexContext]) -> Vec<(String, usize)> {
    let mut lexer = Lexer::new(input);
    let mut out = Vec::new();
    let mut i = 0;
    while !lexer.is_at_end() {
        lexer.select_context(contexts[i % contexts.len()]);
        match lexer.next_token() {
            Ok(token) => out.push((token.value.to_string(), token.offset)),
            Err(_) => break,
        }
        i += 1;
    }
    out
}

proptest! {
    #[test]
    fn prop_option_tags_round_trip(tags in prop::collection::vec(option_tag(), 0..6)) {
        let line = format!("Supported: {}\r\n", tags.join(", "));
        let supported: Supported = HeaderParser::new(&line).parse().unwrap();
        prop_assert_eq!(supported.tags(), tags.as_slice());

        let rendered = format!("{}\r\n", ParsedHeader::Supported(supported.clone()));
        let reparsed: Supported = HeaderParser::new(&rendered).parse().unwrap();
        prop_assert_eq!(reparsed, supported);
    }

    #[test]
    fn prop_to_header_is_deterministic(
        display in proptest::option::of("[A-Za-z]{1,8}( [A-Za-z]{1,8})?"),
        user in "[a-z][a-z0-9]{0,7}",
        host in "[a-z]{1,8}\\.(com|org|net)",
        tag in proptest::option::of("[0-9a-f]{4,10}"),
    ) {
        let mut line = String::from("To: ");
        if let Some(name) = &display {
            line.push_str(&format!("\"{}\" ", name));
        }
        line.push_str(&format!("<sip:{}@{}>", user, host));
        if let Some(tag) = &tag {
            line.push_str(&format!(";tag={}", tag));
        }
        line.push_str("\r\n");

        let first: To = HeaderParser::new(&line).parse().unwrap();
        let second: To = HeaderParser::new(&line).parse().unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.display_name.as_deref(), display.as_deref());
        prop_assert_eq!(first.uri.user(), Some(user.as_str()));
        prop_assert_eq!(first.tag(), tag.as_deref());
    }

    #[test]
    fn prop_context_only_changes_classification(
        input in "[A-Za-z0-9 ,;:=<>@.\"-]{0,40}",
        schedule_a in prop::collection::vec(context(), 1..4),
        schedule_b in prop::collection::vec(context(), 1..4),
    ) {
        prop_assert_eq!(scan_with(&input, &schedule_a), scan_with(&input, &schedule_b));
    }

    #[test]
    fn prop_arbitrary_lines_never_panic(line in "[ -~\t]{0,60}(\r\n|\n)?") {
        let first = parse_header(&line);
        let second = parse_header(&line);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => {
                prop_assert_eq!(a.offset(), b.offset());
                if let Some(offset) = a.offset() {
                    prop_assert!(offset <= line.len());
                }
            }
            _ => prop_assert!(false, "parse result changed between runs"),
        }
    }
}
