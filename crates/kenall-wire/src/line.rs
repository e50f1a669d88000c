use crate::error::WireError;
use crate::quote_mask::QuoteMask;

/// Field delimiter.
pub const DELIMITER: char = ',';

/// Quote character. Inside a quoted field a doubled quote (`""`) stands
/// for one literal quote.
pub const QUOTE: char = '"';

/// Split one line into its fields.
///
/// The line must not carry its terminator. Fields are separated by
/// [`DELIMITER`]; a field whose first character is [`QUOTE`] runs to the
/// matching closing quote and may contain delimiters. An empty line yields
/// a single empty field, the same as a line holding one empty column.
///
/// ```text
///   01101,"060  ","0600000","ﾎｯｶｲﾄﾞｳ",…,0,0
///   └─┬─┘ └──┬──┘ └───┬───┘ └───┬───┘   ┬ ┬
///   plain  quoted   quoted    quoted    plain
/// ```
///
/// # Errors
///
/// - [`WireError::BareQuote`] if a quote appears inside an unquoted field.
/// - [`WireError::UnterminatedQuote`] if the line ends inside a quoted field.
/// - [`WireError::TrailingAfterQuote`] if a closing quote is not followed by
///   a delimiter or the end of the line.
pub fn split_fields(line: &str) -> Result<Vec<String>, WireError> {
    let mut fields = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        let column = fields.len() + 1;
        let mut field = String::new();

        if chars.peek() == Some(&QUOTE) {
            chars.next();
            loop {
                match chars.next() {
                    Some(QUOTE) => {
                        if chars.peek() == Some(&QUOTE) {
                            chars.next();
                            field.push(QUOTE);
                        } else {
                            break;
                        }
                    }
                    Some(c) => field.push(c),
                    None => return Err(WireError::UnterminatedQuote { column }),
                }
            }
            match chars.next() {
                None => {
                    fields.push(field);
                    return Ok(fields);
                }
                Some(DELIMITER) => fields.push(field),
                Some(_) => return Err(WireError::TrailingAfterQuote { column }),
            }
        } else {
            loop {
                match chars.next() {
                    None => {
                        fields.push(field);
                        return Ok(fields);
                    }
                    Some(DELIMITER) => break,
                    Some(QUOTE) => return Err(WireError::BareQuote { column }),
                    Some(c) => field.push(c),
                }
            }
            fields.push(field);
        }
    }
}

/// Join fields into one line, quoting the columns selected by `quotes`.
///
/// Quoted fields have any embedded quote doubled, so the result always
/// splits back into the same fields with [`split_fields`]. Unquoted fields
/// are written as-is; callers are responsible for keeping delimiters and
/// quotes out of them.
pub fn join_fields<S: AsRef<str>>(fields: &[S], quotes: QuoteMask) -> String {
    let capacity = fields.iter().map(|f| f.as_ref().len() + 3).sum();
    let mut line = String::with_capacity(capacity);

    for (column, field) in fields.iter().enumerate() {
        if column > 0 {
            line.push(DELIMITER);
        }
        let field = field.as_ref();
        if quotes.is_quoted(column) {
            line.push(QUOTE);
            for c in field.chars() {
                if c == QUOTE {
                    line.push(QUOTE);
                }
                line.push(c);
            }
            line.push(QUOTE);
        } else {
            line.push_str(field);
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_plain_fields() {
        assert_eq!(split_fields("a,b,c").unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn split_quoted_fields_keep_inner_spaces() {
        let fields = split_fields(r#"01101,"060  ","0600000",0"#).unwrap();
        assert_eq!(fields, vec!["01101", "060  ", "0600000", "0"]);
    }

    #[test]
    fn split_quoted_field_with_delimiter_and_escaped_quote() {
        let fields = split_fields(r#""a,b","say ""hi""",c"#).unwrap();
        assert_eq!(fields, vec!["a,b", r#"say "hi""#, "c"]);
    }

    #[test]
    fn split_empty_line_is_one_empty_field() {
        assert_eq!(split_fields("").unwrap(), vec![""]);
    }

    #[test]
    fn split_trailing_delimiter_adds_empty_field() {
        assert_eq!(split_fields("a,").unwrap(), vec!["a", ""]);
        assert_eq!(split_fields(r#""a","#).unwrap(), vec!["a", ""]);
    }

    #[test]
    fn split_multibyte_text() {
        let fields = split_fields(r#""北海道","札幌市中央区",1"#).unwrap();
        assert_eq!(fields, vec!["北海道", "札幌市中央区", "1"]);
    }

    #[test]
    fn bare_quote_rejected() {
        assert_eq!(
            split_fields(r#"a,b"c"#),
            Err(WireError::BareQuote { column: 2 })
        );
    }

    #[test]
    fn unterminated_quote_rejected() {
        assert_eq!(
            split_fields(r#"a,"bc"#),
            Err(WireError::UnterminatedQuote { column: 2 })
        );
    }

    #[test]
    fn text_after_closing_quote_rejected() {
        assert_eq!(
            split_fields(r#""a"b,c"#),
            Err(WireError::TrailingAfterQuote { column: 1 })
        );
    }

    #[test]
    fn join_applies_mask() {
        let line = join_fields(&["a", "b", "c"], QuoteMask::span(1, 1));
        assert_eq!(line, r#"a,"b",c"#);
    }

    #[test]
    fn join_doubles_embedded_quotes() {
        let line = join_fields(&[r#"x"y"#], QuoteMask::span(0, 0));
        assert_eq!(line, r#""x""y""#);
    }

    #[test]
    fn join_then_split_restores_fields() {
        let fields = vec!["01101", "060  ", "a,b", r#"q"q"#, ""];
        let line = join_fields(&fields, QuoteMask::span(1, 4));
        assert_eq!(split_fields(&line).unwrap(), fields);
    }
}
