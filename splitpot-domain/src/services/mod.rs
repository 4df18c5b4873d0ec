pub mod balance_calculator;
pub mod debt_minimizer;
pub mod settlement_context;
pub mod settlement_pipeline;
pub mod surplus_distributor;

pub use balance_calculator::BalanceCalculator;
pub use debt_minimizer::DebtMinimizer;
pub use settlement_context::{MAX_SETTLEMENT_SCALE, RoundingMode, SettlementContext};
pub use settlement_pipeline::SettlementPipeline;
pub use surplus_distributor::SurplusDistributor;
