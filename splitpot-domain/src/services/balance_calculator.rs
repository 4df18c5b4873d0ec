use crate::{
    model::{BalanceSheet, Balances, Contribution, MemberBalance, Money, SettlementError},
    services::SettlementContext,
};
use rust_decimal::Decimal;

/// Derives every participant's net position under an equal-share cost model.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Calculate balances for the given contributions
    ///
    /// # Arguments
    /// * `contributions` - What each participant paid in, in sheet order
    /// * `total_spent` - What the group actually spent
    /// * `context` - Rounding applied to the equal share and to each balance
    ///
    /// # Returns
    /// A snapshot with `balance = round(amount - round(total_spent / N))` per
    /// participant, `NoParticipants` when the list is empty, or
    /// `AmountOutOfRange` when the totals do not fit in a `Decimal`.
    pub fn calculate(
        &self,
        contributions: &[Contribution],
        total_spent: Money,
        context: SettlementContext,
    ) -> Result<BalanceSheet, SettlementError> {
        if contributions.is_empty() {
            return Err(SettlementError::NoParticipants);
        }

        let count = Decimal::from(contributions.len() as u64);
        let raw_share = total_spent
            .as_decimal()
            .checked_div(count)
            .ok_or(SettlementError::AmountOutOfRange)?;
        let equal_share = context.round(Money::from_decimal(raw_share));

        let total_contributions = contributions
            .iter()
            .try_fold(Money::ZERO, |acc, c| acc.checked_add(c.amount))
            .ok_or(SettlementError::AmountOutOfRange)?;
        let surplus = total_contributions
            .checked_sub(total_spent)
            .ok_or(SettlementError::AmountOutOfRange)?;

        let balances: Balances = contributions
            .iter()
            .map(|contribution| MemberBalance {
                member: contribution.member,
                balance: context.round(contribution.amount - equal_share),
            })
            .collect();

        tracing::debug!(
            participant_count = contributions.len(),
            total_contributions = %total_contributions,
            total_spent = %total_spent,
            equal_share = %equal_share,
            surplus = %surplus,
            "Calculated balances"
        );

        Ok(BalanceSheet {
            equal_share,
            total_contributions,
            total_spent,
            surplus,
            balances,
        })
    }
}
