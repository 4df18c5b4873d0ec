use splitpot_application::{ProcessError, SettlementBuildError, SheetParseError};
use splitpot_i18n as i18n;

pub fn format_sheet_parse_error(error: &SheetParseError) -> String {
    match error {
        SheetParseError::SyntaxError { line, detail } => i18n::syntax_error(*line, detail),
        SheetParseError::MissingTotalSpent => i18n::missing_total_spent().to_string(),
        SheetParseError::DuplicateTotalSpent { line, first_line } => {
            i18n::duplicate_total_spent(*line, *first_line)
        }
    }
}

pub fn format_settlement_error(error: &SettlementBuildError) -> String {
    match error {
        SettlementBuildError::NoParticipants => i18n::NO_PARTICIPANTS.to_string(),
        SettlementBuildError::Calculation(err) => {
            format!("{} ({err})", i18n::SETTLEMENT_CALCULATION_FAILED)
        }
    }
}

pub fn format_process_error(error: &ProcessError) -> String {
    match error {
        ProcessError::Parse(err) => format_sheet_parse_error(err),
        ProcessError::Settlement(err) => format_settlement_error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use splitpot_domain::SettlementError;

    #[rstest]
    #[case::syntax(
        SheetParseError::SyntaxError { line: 4, detail: "unparsed input: x".to_string() },
        "4"
    )]
    #[case::duplicate(
        SheetParseError::DuplicateTotalSpent { line: 7, first_line: 2 },
        "7"
    )]
    fn parse_errors_mention_line(#[case] error: SheetParseError, #[case] line: &str) {
        let message = format_process_error(&ProcessError::Parse(error));
        assert!(message.contains(line), "missing line in {message}");
    }

    #[test]
    fn missing_total_spent_has_its_own_message() {
        assert_eq!(
            format_sheet_parse_error(&SheetParseError::MissingTotalSpent),
            i18n::missing_total_spent()
        );
    }

    #[test]
    fn calculation_errors_are_prefixed() {
        let message = format_settlement_error(&SettlementBuildError::Calculation(
            SettlementError::AmountOutOfRange,
        ));
        assert!(message.starts_with(i18n::SETTLEMENT_CALCULATION_FAILED));
        assert_eq!(
            format_settlement_error(&SettlementBuildError::NoParticipants),
            i18n::NO_PARTICIPANTS
        );
    }
}
