use crate::{
    model::{Contribution, Money, SettlementError, SettlementReport},
    services::{BalanceCalculator, DebtMinimizer, SettlementContext, SurplusDistributor},
};

/// Runs balance calculation, surplus distribution and debt settlement in order.
#[derive(Clone, Copy, Debug, Default)]
pub struct SettlementPipeline {
    context: SettlementContext,
}

impl SettlementPipeline {
    pub fn new(context: SettlementContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> SettlementContext {
        self.context
    }

    pub fn run(
        &self,
        contributions: &[Contribution],
        total_spent: Money,
    ) -> Result<SettlementReport, SettlementError> {
        let sheet = BalanceCalculator.calculate(contributions, total_spent, self.context)?;

        let distribution =
            SurplusDistributor.distribute(sheet.balances, sheet.surplus, self.context);
        let balances = distribution.balances;

        let debtor_count = balances.debtors().count();
        let creditor_count = balances.creditors().count();
        let settlement = DebtMinimizer.minimize(balances.clone(), self.context);

        tracing::debug!(
            participant_count = contributions.len(),
            debtor_count,
            creditor_count,
            surplus_transfer_count = distribution.payouts.len(),
            settlement_transfer_count = settlement.transfers.len(),
            "Settlement finished"
        );

        Ok(SettlementReport {
            equal_share: sheet.equal_share,
            total_contributions: sheet.total_contributions,
            total_spent: sheet.total_spent,
            surplus: sheet.surplus,
            balances,
            final_balances: settlement.new_balances,
            surplus_transfers: distribution.payouts,
            settlement_transfers: settlement.transfers,
        })
    }
}
