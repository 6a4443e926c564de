use crate::error::Result;
use crate::lexer::Lexer;
use crate::parser::unexpected;

/// `[ element *( "," element ) ]`
///
/// Reads a leading element, then one more element per comma. Whitespace
/// around elements and commas is skipped. When the value is empty (the
/// cursor is at the line terminator) an empty list is returned if
/// `allow_empty`, otherwise an error naming `expected`.
///
/// A comma without a preceding element fails at the comma.
pub fn parse_comma_list<'a, T, F>(
    lexer: &mut Lexer<'a>,
    allow_empty: bool,
    expected: &str,
    mut element: F,
) -> Result<Vec<T>>
where
    F: FnMut(&mut Lexer<'a>) -> Result<T>,
{
    let mut items = Vec::new();
    lexer.sp_or_ht();
    if lexer.at_line_end() {
        if allow_empty {
            return Ok(items);
        }
        return Err(unexpected(lexer, expected));
    }

    items.push(element(lexer)?);
    lexer.sp_or_ht();
    while lexer.look_ahead(0) == Some(',') {
        lexer.match_char(',')?;
        lexer.sp_or_ht();
        items.push(element(lexer)?);
        lexer.sp_or_ht();
    }
    Ok(items)
}
