#![warn(clippy::uninlined_format_args)]

mod bootstrap;

use bootstrap::{AppConfig, init_logging};
use splitpot_application::SettlementProcessor;
use splitpot_infrastructure::PlainTextSheetParser;
use splitpot_presentation::{SettlementPresenter, format_process_error};
use std::{borrow::Cow, env, fs, process};

type CliResult<T> = Result<T, Cow<'static, str>>;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    init_logging();

    let Some(path) = env::args().nth(1) else {
        return Err("Usage: splitpot <sheet-file>".into());
    };

    let config = AppConfig::from_env().map_err(|err| err.to_string())?;

    let source =
        fs::read_to_string(&path).map_err(|err| format!("Failed to read '{path}': {err}"))?;

    let output = settle_sheet(&source, config)?;
    print!("{output}");
    Ok(())
}

fn settle_sheet(source: &str, config: AppConfig) -> CliResult<String> {
    let processor = SettlementProcessor::new(&PlainTextSheetParser, config.context);
    let result = processor
        .process(source)
        .map_err(|err| format_process_error(&err))?;

    tracing::info!(
        participants = result.roster.len(),
        surplus_transfers = result.report.surplus_transfers.len(),
        settlement_transfers = result.report.settlement_transfers.len(),
        "Settled expense sheet"
    );

    Ok(SettlementPresenter::render(&result).to_text())
}
