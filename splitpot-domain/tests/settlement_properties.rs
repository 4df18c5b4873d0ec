use proptest::prelude::*;
use splitpot_domain::{
    BalanceCalculator, Balances, Contribution, Counterparty, DebtMinimizer, MemberBalance, MemberId,
    Money, SettlementContext, SettlementPipeline, SurplusDistributor,
};

fn contributions(cents: &[i64]) -> Vec<Contribution> {
    cents
        .iter()
        .enumerate()
        .map(|(idx, amount)| Contribution {
            member: MemberId(idx as u64 + 1),
            amount: Money::new(*amount, 2),
        })
        .collect()
}

proptest! {
    #[test]
    fn balances_conserve_contributions(
        cents in prop::collection::vec(0i64..=100_000, 1..=8),
        spent_cents in 0i64..=400_000,
    ) {
        let context = SettlementContext::cents_default();
        let input = contributions(&cents);
        let sheet = BalanceCalculator
            .calculate(&input, Money::new(spent_cents, 2), context)
            .expect("balance calculation failed");

        let participant_count = Money::from_i64(input.len() as i64).as_decimal();
        let expected = sheet.total_contributions
            - Money::from_decimal(sheet.equal_share.as_decimal() * participant_count);
        prop_assert_eq!(sheet.balances.total(), expected);

        let drift = (sheet.surplus - sheet.balances.total()).abs();
        let tolerance = Money::from_decimal(
            context.atomic_unit().as_decimal() * participant_count,
        );
        prop_assert!(drift <= tolerance);
    }
}

proptest! {
    #[test]
    fn surplus_payouts_match_available_credit(
        cents in prop::collection::vec(0i64..=100_000, 1..=8),
        spent_cents in 0i64..=400_000,
    ) {
        let context = SettlementContext::cents_default();
        let sheet = BalanceCalculator
            .calculate(&contributions(&cents), Money::new(spent_cents, 2), context)
            .expect("balance calculation failed");
        let positive_total: Money = sheet.balances.creditors().map(|entry| entry.balance).sum();
        let surplus = sheet.surplus;

        let before = sheet.balances.clone();
        let distribution = SurplusDistributor.distribute(sheet.balances, surplus, context);
        let paid: Money = distribution.payouts.iter().map(|t| t.amount).sum();

        if surplus.is_positive() {
            prop_assert_eq!(paid, surplus.min(positive_total));
        } else {
            prop_assert!(distribution.payouts.is_empty());
        }

        for payout in &distribution.payouts {
            prop_assert_eq!(payout.from, Counterparty::SurplusPool);
            prop_assert!(payout.amount.is_positive());
        }
        for (prev, next) in before.iter().zip(&distribution.balances) {
            if prev.balance.is_positive() {
                prop_assert!(!next.balance.is_negative());
                prop_assert!(next.balance <= prev.balance);
            } else {
                prop_assert_eq!(next.balance, prev.balance);
            }
        }
    }
}

proptest! {
    #[test]
    fn settlement_respects_transfer_bound(
        balance_cents in prop::collection::vec(-50_000i64..=50_000, 0..=10),
    ) {
        let context = SettlementContext::cents_default();
        let balances = balance_cents
            .iter()
            .enumerate()
            .map(|(idx, cents)| MemberBalance {
                member: MemberId(idx as u64 + 1),
                balance: Money::new(*cents, 2),
            })
            .collect::<Balances>();
        let debtor_count = balances.debtors().count();
        let creditor_count = balances.creditors().count();

        let settlement = DebtMinimizer.minimize(balances, context);

        prop_assert!(
            settlement.transfers.len() <= (debtor_count + creditor_count).saturating_sub(1)
        );
        for transfer in &settlement.transfers {
            prop_assert!(transfer.amount.is_positive());
            prop_assert_ne!(transfer.from, Counterparty::Member(transfer.to));
        }

        let remaining_debtors = settlement.new_balances.debtors().count();
        let remaining_creditors = settlement.new_balances.creditors().count();
        prop_assert!(remaining_debtors == 0 || remaining_creditors == 0);
    }
}

proptest! {
    #[test]
    fn pipeline_never_emits_non_positive_transfers(
        cents in prop::collection::vec(0i64..=100_000, 1..=8),
        spent_cents in 0i64..=400_000,
    ) {
        let pipeline = SettlementPipeline::new(SettlementContext::cents_default());
        let report = pipeline
            .run(&contributions(&cents), Money::new(spent_cents, 2))
            .expect("settlement failed");

        for transfer in report.surplus_transfers.iter().chain(&report.settlement_transfers) {
            prop_assert!(transfer.amount.is_positive());
        }
        if !report.surplus.is_positive() {
            prop_assert!(report.surplus_transfers.is_empty());
        }

        let debtors = report.balances.debtors().count();
        let creditors = report.balances.creditors().count();
        prop_assert!(
            report.settlement_transfers.len() <= (debtors + creditors).saturating_sub(1)
        );
    }
}
