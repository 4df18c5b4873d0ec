use splitpot_application::{ExpenseSheet, ParticipantEntry, SheetParseError, SheetParser};
use splitpot_parser::{ParseError, Sheet, parse_sheet};

#[derive(Default)]
pub struct PlainTextSheetParser;

impl SheetParser for PlainTextSheetParser {
    fn parse<'a>(&self, content: &'a str) -> Result<ExpenseSheet<'a>, SheetParseError> {
        match parse_sheet(content) {
            Ok(sheet) => {
                let Sheet {
                    spent,
                    participants,
                    ..
                } = sheet;

                let participants = participants
                    .into_iter()
                    .map(|line| ParticipantEntry {
                        name: line.participant.name,
                        amount: line.participant.amount,
                    })
                    .collect();

                Ok(ExpenseSheet::new(spent, participants))
            }
            Err(err) => match err {
                ParseError::SyntaxError { line, detail } => {
                    Err(SheetParseError::SyntaxError { line, detail })
                }
                ParseError::MissingSpent => Err(SheetParseError::MissingTotalSpent),
                ParseError::DuplicateSpent { line, first_line } => {
                    Err(SheetParseError::DuplicateTotalSpent { line, first_line })
                }
            },
        }
    }
}
