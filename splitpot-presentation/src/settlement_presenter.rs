use crate::text_table::{Alignment, TextTableBuilder};
use splitpot_application::{MemberDirectory, SettlementResult};
use splitpot_domain::{Counterparty, MemberId, Money, SettlementContext, SettlementReport, Transfer};
use splitpot_i18n as i18n;
use std::borrow::Cow;

pub struct SettlementPresenter;

pub struct SettlementView {
    pub summary: Vec<String>,
    pub surplus_section: String,
    pub settlement_section: String,
    pub details: String,
}

impl SettlementView {
    pub fn to_text(&self) -> String {
        let mut text = self.summary.join("\n");
        for section in [
            &self.surplus_section,
            &self.settlement_section,
            &self.details,
        ] {
            text.push_str("\n\n");
            text.push_str(section.trim_end());
        }
        text.push('\n');
        text
    }
}

impl SettlementPresenter {
    pub fn render(result: &SettlementResult) -> SettlementView {
        Self::render_with_members(&result.report, result.context, &result.roster)
    }

    pub fn render_with_members(
        report: &SettlementReport,
        context: SettlementContext,
        member_directory: &dyn MemberDirectory,
    ) -> SettlementView {
        let scale = context.scale;
        let summary = vec![
            i18n::summary_line(
                i18n::TOTAL_CONTRIBUTED,
                report.total_contributions.to_fixed(scale),
            ),
            i18n::summary_line(i18n::TOTAL_SPENT, report.total_spent.to_fixed(scale)),
            i18n::summary_line(i18n::EQUAL_SHARE, report.equal_share.to_fixed(scale)),
            i18n::summary_line(i18n::INITIAL_SURPLUS, report.surplus.to_fixed(scale)),
        ];

        let surplus_section = if !report.surplus_transfers.is_empty() {
            let table = Self::build_transfer_table(
                &report.surplus_transfers,
                [i18n::FROM, i18n::TO, i18n::AMOUNT],
                scale,
                member_directory,
            );
            format!("{}\n{table}", i18n::SURPLUS_HEADING)
        } else if context.round(report.surplus).is_positive() {
            // Left over, but no positive balance to hand it to.
            i18n::SURPLUS_UNCLAIMED.to_string()
        } else {
            i18n::NO_SURPLUS_DISTRIBUTION.to_string()
        };

        let settlement_section = if report.settlement_transfers.is_empty() {
            i18n::NO_PENDING_PAYMENTS.to_string()
        } else {
            let table = Self::build_transfer_table(
                &report.settlement_transfers,
                [i18n::PAYER, i18n::PAYEE, i18n::AMOUNT],
                scale,
                member_directory,
            );
            format!("{}\n{table}", i18n::SETTLEMENT_HEADING)
        };

        let details = [
            i18n::DETAILS_HEADING,
            i18n::DETAILS_SURPLUS_STEP,
            i18n::DETAILS_SETTLEMENT_STEP,
        ]
        .join("\n");

        SettlementView {
            summary,
            surplus_section,
            settlement_section,
            details,
        }
    }

    pub fn build_transfer_table(
        transfers: &[Transfer],
        headers: [&str; 3],
        scale: u32,
        member_directory: &dyn MemberDirectory,
    ) -> String {
        let headers = headers.map(Cow::Borrowed);
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Left, Alignment::Right])
            .headers(&headers);

        for transfer in transfers {
            builder = builder.row([
                format_counterparty(transfer.from, member_directory),
                format_member_label(transfer.to, member_directory),
                Cow::Owned(format_amount(transfer.amount, scale)),
            ]);
        }

        builder.build()
    }
}

fn format_amount(amount: Money, scale: u32) -> String {
    amount.to_fixed(scale)
}

fn format_counterparty<'a>(
    counterparty: Counterparty,
    member_directory: &'a dyn MemberDirectory,
) -> Cow<'a, str> {
    match counterparty {
        Counterparty::SurplusPool => Cow::Borrowed(i18n::SURPLUS_POOL),
        Counterparty::Member(member) => format_member_label(member, member_directory),
    }
}

fn format_member_label<'a>(
    member: MemberId,
    member_directory: &'a dyn MemberDirectory,
) -> Cow<'a, str> {
    match member_directory.display_name(member) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(i18n::unknown_member(member.0)),
    }
}
