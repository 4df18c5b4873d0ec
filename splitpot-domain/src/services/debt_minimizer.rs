use crate::{
    model::{Balances, Counterparty, Money, Settlement, Transfer},
    services::SettlementContext,
};

/// Debt settlement service
pub struct DebtMinimizer;

struct Position {
    index: usize,
    remaining: Money,
}

impl DebtMinimizer {
    /// Pair debtors with creditors in sheet order
    ///
    /// Takes ownership of balances and returns new state.
    ///
    /// # Arguments
    /// * `balances` - Current balance snapshot (negative: owes, positive: is owed)
    /// * `context` - Rounding applied to every transfer amount
    ///
    /// # Returns
    /// Balances after the transfers are applied and the transfer list. Each
    /// step exhausts at least one side, so at most `debtors + creditors - 1`
    /// transfers are emitted. When the two sides do not add up (rounding
    /// drift), whatever is left once one side runs out stays in the balances.
    pub fn minimize(&self, balances: Balances, context: SettlementContext) -> Settlement {
        let mut working_balances = balances;
        let entries = working_balances.entries_mut();

        let mut debtors: Vec<Position> = Vec::new();
        let mut creditors: Vec<Position> = Vec::new();
        for (index, entry) in entries.iter().enumerate() {
            if entry.balance.is_negative() {
                debtors.push(Position {
                    index,
                    remaining: entry.balance.abs(),
                });
            } else if entry.balance.is_positive() {
                creditors.push(Position {
                    index,
                    remaining: entry.balance,
                });
            }
        }

        let unit = context.atomic_unit();
        let mut transfers = Vec::with_capacity((debtors.len() + creditors.len()).saturating_sub(1));
        let (mut i, mut j) = (0, 0);

        while i < debtors.len() && j < creditors.len() {
            let debtor = &mut debtors[i];
            let creditor = &mut creditors[j];

            let amount = context.round(debtor.remaining.min(creditor.remaining));
            if amount >= unit {
                debtor.remaining -= amount;
                creditor.remaining -= amount;

                entries[debtor.index].balance += amount;
                entries[creditor.index].balance -= amount;

                let from = entries[debtor.index].member;
                let to = entries[creditor.index].member;
                tracing::trace!(from = %from, to = %to, amount = %amount, "Settlement transfer");
                transfers.push(Transfer {
                    from: Counterparty::Member(from),
                    to,
                    amount,
                });
            } else {
                // Below one atomic unit: nothing left to move between this pair.
                let drift = debtor.remaining.min(creditor.remaining);
                debtor.remaining -= drift;
                creditor.remaining -= drift;
            }

            let debtor_done = !debtor.remaining.is_positive();
            let creditor_done = !creditor.remaining.is_positive();
            if debtor_done {
                i += 1;
            }
            if creditor_done {
                j += 1;
            }
        }

        let residual = working_balances.total();
        if !residual.is_zero() {
            tracing::debug!(residual = %residual, "Settlement left rounding residual");
        }

        Settlement {
            new_balances: working_balances,
            transfers,
        }
    }
}
