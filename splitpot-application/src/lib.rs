#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod ports;
pub mod settlement_processor;

pub use error::{ProcessError, SettlementBuildError, SheetParseError};
pub use model::{ExpenseSheet, NormalizedSheet, ParticipantEntry, Roster};
pub use ports::{MemberDirectory, SheetParser};
pub use settlement_processor::{SettlementProcessor, SettlementResult};
