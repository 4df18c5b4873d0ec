#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    BalanceSheet, Balances, Contribution, Counterparty, MemberBalance, MemberId, Money,
    Settlement, SettlementError, SettlementReport, SurplusDistribution, Transfer,
};
pub use services::{
    BalanceCalculator, DebtMinimizer, RoundingMode, SettlementContext, SettlementPipeline,
    SurplusDistributor,
};
