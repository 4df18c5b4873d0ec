use crate::{
    model::{Balances, Counterparty, Money, SurplusDistribution, Transfer},
    services::SettlementContext,
};

/// Hands money collected beyond the total spend back to creditors.
pub struct SurplusDistributor;

impl SurplusDistributor {
    /// Distribute `surplus` among positive balances, smallest balance first
    ///
    /// Takes ownership of balances and returns new state. Creditors are paid
    /// down towards zero and never past it; equal balances keep sheet order.
    /// The pool is the surplus rounded to the context scale, so payouts never
    /// exceed it. A pool that rounds to zero or below leaves the snapshot
    /// untouched.
    pub fn distribute(
        &self,
        balances: Balances,
        surplus: Money,
        context: SettlementContext,
    ) -> SurplusDistribution {
        let mut working_balances = balances;
        let mut payouts = Vec::new();

        let pool = context.round(surplus);
        if !pool.is_positive() {
            return SurplusDistribution {
                balances: working_balances,
                payouts,
            };
        }

        let entries = working_balances.entries_mut();
        let mut order: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.balance.is_positive())
            .map(|(idx, _)| idx)
            .collect();
        order.sort_by_key(|&idx| entries[idx].balance);

        let mut remaining = pool;
        for idx in order {
            if !remaining.is_positive() {
                break;
            }

            let creditor = &mut entries[idx];
            let give = context
                .round(remaining.min(creditor.balance))
                .min(creditor.balance);
            if !give.is_positive() {
                continue;
            }

            creditor.balance -= give;
            remaining -= give;
            tracing::trace!(to = %creditor.member, amount = %give, "Surplus payout");
            payouts.push(Transfer {
                from: Counterparty::SurplusPool,
                to: creditor.member,
                amount: give,
            });
        }

        tracing::debug!(
            surplus = %surplus,
            pool = %pool,
            payout_count = payouts.len(),
            undistributed = %remaining.max(Money::ZERO),
            "Distributed surplus"
        );

        SurplusDistribution {
            balances: working_balances,
            payouts,
        }
    }
}
