use crate::{
    error::{ProcessError, SettlementBuildError, SheetParseError},
    model::{ExpenseSheet, Roster},
    ports::SheetParser,
};
use splitpot_domain::{SettlementContext, SettlementPipeline, SettlementReport};

pub struct SettlementResult {
    pub report: SettlementReport,
    pub roster: Roster,
    pub context: SettlementContext,
}

#[derive(Clone, Copy)]
pub struct SettlementProcessor<'a> {
    parser: &'a dyn SheetParser,
    pipeline: SettlementPipeline,
}

impl<'a> SettlementProcessor<'a> {
    pub fn new(parser: &'a dyn SheetParser, context: SettlementContext) -> Self {
        Self {
            parser,
            pipeline: SettlementPipeline::new(context),
        }
    }

    pub fn parse_sheet<'b>(&self, content: &'b str) -> Result<ExpenseSheet<'b>, SheetParseError> {
        self.parser.parse(content)
    }

    pub fn settle(&self, sheet: &ExpenseSheet<'_>) -> Result<SettlementResult, SettlementBuildError> {
        if sheet.participants.is_empty() {
            return Err(SettlementBuildError::NoParticipants);
        }

        let normalized = sheet.normalize();
        let report = self
            .pipeline
            .run(&normalized.contributions, normalized.total_spent)?;

        Ok(SettlementResult {
            report,
            roster: normalized.roster,
            context: self.pipeline.context(),
        })
    }

    pub fn process(&self, content: &str) -> Result<SettlementResult, ProcessError> {
        let sheet = self.parse_sheet(content)?;
        tracing::debug!(
            participant_count = sheet.participants.len(),
            "Parsed expense sheet"
        );
        Ok(self.settle(&sheet)?)
    }
}
