#![warn(clippy::uninlined_format_args)]

mod i18n;

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_till, take_until},
    character::complete::{char, multispace1},
    combinator::recognize,
    multi::many0,
    sequence::delimited,
};

/// One line of an expense sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'a> {
    /// `SPENT := <amount>`
    Spent { amount: &'a str },
    /// `<name>: <amount>`; both sides kept as typed.
    Participant(Participant<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Participant<'a> {
    pub name: &'a str,
    pub amount: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticipantWithLine<'a> {
    pub line: usize,
    pub participant: Participant<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet<'a> {
    pub spent: &'a str,
    pub spent_line: usize,
    pub participants: Vec<ParticipantWithLine<'a>>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("Syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
    #[error("Missing `SPENT := <amount>` declaration.")]
    MissingSpent,
    #[error("Duplicate `SPENT` declaration at line {line} (first declared at line {first_line}).")]
    DuplicateSpent { line: usize, first_line: usize },
}

fn sp(input: &str) -> IResult<&str, &str> {
    fn comment(input: &str) -> IResult<&str, &str> {
        delimited(tag("/*"), take_until("*/"), tag("*/")).parse(input)
    }

    fn line_comment(input: &str) -> IResult<&str, &str> {
        recognize((tag("//"), take_till(|c| c == '\n'))).parse(input)
    }

    recognize(many0(alt((multispace1, comment, line_comment)))).parse(input)
}

// Raw amount text; validation happens when the sheet is normalized.
fn amount_text(input: &str) -> IResult<&str, &str> {
    take_till(|c: char| c == '/')
        .map(str::trim_end)
        .parse(input)
}

fn spent_keyword(input: &str) -> IResult<&str, &str> {
    alt((tag_no_case("SPENT"), tag_no_case("GASTO"))).parse(input)
}

// SPENT := 120.50
fn spent(input: &str) -> IResult<&str, Statement<'_>> {
    (spent_keyword, sp, tag(":="), sp, amount_text)
        .map(|(_, _, _, _, amount)| Statement::Spent { amount })
        .parse(input)
}

// Ana: 30 (the name may be blank)
fn participant(input: &str) -> IResult<&str, Statement<'_>> {
    (
        take_till(|c: char| c == ':' || c == '/').map(str::trim),
        sp,
        char(':'),
        sp,
        amount_text,
    )
        .map(|(name, _, _, _, amount)| Statement::Participant(Participant { name, amount }))
        .parse(input)
}

fn statement(input: &str) -> IResult<&str, Statement<'_>> {
    alt((spent, participant)).parse(input)
}

fn statement_with_sp(input: &str) -> IResult<&str, Statement<'_>> {
    (sp, statement, sp).map(|(_, stmt, _)| stmt).parse(input)
}

/// Splits `input` at every newline outside a `/* */` comment, pairing each
/// chunk with the line it starts on.
fn logical_lines(input: &str) -> Vec<(usize, &str)> {
    let bytes = input.as_bytes();
    let mut chunks = Vec::new();
    let (mut start, mut start_line, mut line) = (0, 1, 1);
    let (mut in_block, mut in_line_comment) = (false, false);

    let mut i = 0;
    while i < bytes.len() {
        let next = bytes.get(i + 1).copied();
        match bytes[i] {
            b'\n' => {
                line += 1;
                in_line_comment = false;
                if !in_block {
                    chunks.push((start_line, &input[start..i]));
                    start = i + 1;
                    start_line = line;
                }
            }
            b'/' if !in_block && !in_line_comment && next == Some(b'/') => {
                in_line_comment = true;
                i += 1;
            }
            b'/' if !in_block && !in_line_comment && next == Some(b'*') => {
                in_block = true;
                i += 1;
            }
            b'*' if in_block && next == Some(b'/') => {
                in_block = false;
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }
    if start < input.len() {
        chunks.push((start_line, &input[start..]));
    }

    chunks
        .into_iter()
        .map(|(line_no, chunk)| (line_no, chunk.strip_suffix('\r').unwrap_or(chunk)))
        .collect()
}

/// Parse a whole sheet. Exactly one `SPENT` line is required; participant
/// lines keep their order. Block comments may span lines; errors point at
/// the line a statement starts on.
pub fn parse_sheet(input: &str) -> Result<Sheet<'_>, ParseError> {
    let mut spent_decl: Option<(&str, usize)> = None;
    let mut participants = Vec::new();

    for (line_no, line) in logical_lines(input) {
        let (rest, _) = sp(line).map_err(|e| ParseError::SyntaxError {
            line: line_no,
            detail: i18n::syntax_error_detail(e),
        })?;
        if rest.trim().is_empty() {
            continue;
        }

        let (rest, stmt) = statement_with_sp(rest).map_err(|e| ParseError::SyntaxError {
            line: line_no,
            detail: i18n::syntax_error_detail(e),
        })?;
        if !rest.trim().is_empty() {
            return Err(ParseError::SyntaxError {
                line: line_no,
                detail: i18n::syntax_error_unparsed_detail(rest.trim()),
            });
        }

        match stmt {
            Statement::Spent { amount } => {
                if let Some((_, first_line)) = spent_decl {
                    return Err(ParseError::DuplicateSpent {
                        line: line_no,
                        first_line,
                    });
                }
                spent_decl = Some((amount, line_no));
            }
            Statement::Participant(participant) => {
                participants.push(ParticipantWithLine {
                    line: line_no,
                    participant,
                });
            }
        }
    }

    let (spent, spent_line) = spent_decl.ok_or(ParseError::MissingSpent)?;
    Ok(Sheet {
        spent,
        spent_line,
        participants,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("SPENT := 100", "100")]
    #[case::decimal("SPENT := 99.95", "99.95")]
    #[case::lowercase("spent:=60", "60")]
    #[case::spanish("GASTO := 45.5", "45.5")]
    #[case::blank("SPENT :=", "")]
    #[case::trailing_comment("SPENT := 100 // dinner", "100")]
    fn test_parse_spent(#[case] input: &str, #[case] expected: &str) {
        let (_, stmt) = statement(input).unwrap();
        assert_eq!(stmt, Statement::Spent { amount: expected });
    }

    #[rstest]
    #[case::named("Ana: 30", "Ana", "30")]
    #[case::spaces_in_name("Ana María : 12.50", "Ana María", "12.50")]
    #[case::blank_name(": 20", "", "20")]
    #[case::blank_amount("Bob:", "Bob", "")]
    #[case::invalid_amount("Bob: lots", "Bob", "lots")]
    #[case::spent_without_assign("SPENT: 10", "SPENT", "10")]
    fn test_parse_participant(#[case] input: &str, #[case] name: &str, #[case] amount: &str) {
        let (_, stmt) = statement_with_sp(input).unwrap();
        assert_eq!(stmt, Statement::Participant(Participant { name, amount }));
    }

    #[test]
    fn test_parse_sheet_keeps_order_and_lines() {
        let input = "// trip\nAna: 30\n\nSPENT := 60\nBob: 30 /* train */\n: 30\n";
        let sheet = parse_sheet(input).expect("sheet should parse");

        assert_eq!(sheet.spent, "60");
        assert_eq!(sheet.spent_line, 4);
        let lines: Vec<(usize, &str, &str)> = sheet
            .participants
            .iter()
            .map(|p| (p.line, p.participant.name, p.participant.amount))
            .collect();
        assert_eq!(
            lines,
            vec![(2, "Ana", "30"), (5, "Bob", "30"), (6, "", "30")]
        );
    }

    #[rstest]
    #[case::empty("")]
    #[case::only_participants("Ana: 10\nBob: 20")]
    #[case::only_comments("// nothing here\n/* still nothing */")]
    fn test_missing_spent(#[case] input: &str) {
        assert_eq!(parse_sheet(input), Err(ParseError::MissingSpent));
    }

    #[test]
    fn test_duplicate_spent() {
        let result = parse_sheet("SPENT := 10\nAna: 5\nSPENT := 20");
        assert_eq!(
            result,
            Err(ParseError::DuplicateSpent {
                line: 3,
                first_line: 1
            })
        );
    }

    #[rstest]
    #[case::no_colon("Ana 30")]
    #[case::unterminated_comment("Ana: 30 /* lunch")]
    fn test_syntax_errors(#[case] body: &str) {
        let input = format!("SPENT := 10\n{body}");
        let result = parse_sheet(&input);
        assert!(
            matches!(result, Err(ParseError::SyntaxError { line: 2, .. })),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn test_block_comment_spanning_lines() {
        let input = "SPENT := 10\n/* settled\nlast week */\nAna: 4 /* cash\n */\nBob: 6\n";
        let sheet = parse_sheet(input).expect("sheet should parse");

        let lines: Vec<(usize, &str, &str)> = sheet
            .participants
            .iter()
            .map(|p| (p.line, p.participant.name, p.participant.amount))
            .collect();
        assert_eq!(lines, vec![(4, "Ana", "4"), (6, "Bob", "6")]);
    }

    #[test]
    fn test_line_numbers_after_multiline_comment() {
        let result = parse_sheet("/* a\nb\nc */\nSPENT := 1\nnot a statement");
        assert!(
            matches!(result, Err(ParseError::SyntaxError { line: 5, .. })),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn test_block_opener_inside_line_comment() {
        let sheet = parse_sheet("SPENT := 10 // see /* notes\nAna: 10").expect("sheet should parse");
        assert_eq!(sheet.participants[0].line, 2);
    }

    #[test]
    fn test_crlf_lines() {
        let sheet = parse_sheet("SPENT := 10\r\nAna: 10\r\n").expect("sheet should parse");
        assert_eq!(sheet.spent, "10");
        assert_eq!(sheet.participants[0].participant.amount, "10");
    }
}
