use splitpot_domain::SettlementError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SheetParseError {
    #[error("Syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
    #[error("The sheet does not declare how much was spent")]
    MissingTotalSpent,
    #[error("Total spent declared twice (line {line}, first at line {first_line})")]
    DuplicateTotalSpent { line: usize, first_line: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettlementBuildError {
    #[error("At least one participant is required")]
    NoParticipants,
    #[error("Settlement calculation failed: {0}")]
    Calculation(SettlementError),
}

impl From<SettlementError> for SettlementBuildError {
    fn from(err: SettlementError) -> Self {
        match err {
            SettlementError::NoParticipants => SettlementBuildError::NoParticipants,
            other => SettlementBuildError::Calculation(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProcessError {
    #[error(transparent)]
    Parse(#[from] SheetParseError),
    #[error(transparent)]
    Settlement(#[from] SettlementBuildError),
}
