use rust_decimal::{Decimal, RoundingStrategy};
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// 1-based position of a participant in the expense sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberId(pub u64);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// `Money::new(1234, 2)` is `12.34`.
    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Formats with exactly `scale` fractional digits.
    pub fn to_fixed(self, scale: u32) -> String {
        let precision = scale as usize;
        let rounded = self
            .0
            .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
        let rounded = if rounded.is_zero() {
            Decimal::ZERO
        } else {
            rounded
        };
        format!("{rounded:.precision$}")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

/// What one participant put into the pot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contribution {
    pub member: MemberId,
    pub amount: Money,
}

/// Net position of a participant: positive is owed money, negative owes money.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemberBalance {
    pub member: MemberId,
    pub balance: Money,
}

/// Ordered balance snapshot handed from one settlement stage to the next.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Balances(Vec<MemberBalance>);

impl Balances {
    pub fn iter(&self) -> impl Iterator<Item = &MemberBalance> + '_ {
        self.0.iter()
    }

    #[cfg(test)]
    pub(crate) fn get(&self, member: MemberId) -> Option<Money> {
        self.0
            .iter()
            .find(|entry| entry.member == member)
            .map(|entry| entry.balance)
    }

    pub fn total(&self) -> Money {
        self.0.iter().map(|entry| entry.balance).sum()
    }

    pub fn creditors(&self) -> impl Iterator<Item = &MemberBalance> + '_ {
        self.0.iter().filter(|entry| entry.balance.is_positive())
    }

    pub fn debtors(&self) -> impl Iterator<Item = &MemberBalance> + '_ {
        self.0.iter().filter(|entry| entry.balance.is_negative())
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [MemberBalance] {
        &mut self.0
    }
}

impl FromIterator<MemberBalance> for Balances {
    fn from_iter<I: IntoIterator<Item = MemberBalance>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Balances {
    type Item = &'a MemberBalance;
    type IntoIter = std::slice::Iter<'a, MemberBalance>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Source side of a transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Counterparty {
    /// Money collected beyond what was spent.
    SurplusPool,
    Member(MemberId),
}

impl fmt::Display for Counterparty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurplusPool => f.write_str("surplus-pool"),
            Self::Member(member) => write!(f, "{member}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from: Counterparty,
    pub to: MemberId,
    pub amount: Money,
}

/// Output of the balance calculation stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalanceSheet {
    pub equal_share: Money,
    pub total_contributions: Money,
    pub total_spent: Money,
    /// `total_contributions - total_spent`, unrounded.
    pub surplus: Money,
    pub balances: Balances,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurplusDistribution {
    pub balances: Balances,
    pub payouts: Vec<Transfer>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub new_balances: Balances,
    pub transfers: Vec<Transfer>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettlementReport {
    pub equal_share: Money,
    pub total_contributions: Money,
    pub total_spent: Money,
    pub surplus: Money,
    /// Balances after the surplus has been handed out.
    pub balances: Balances,
    /// Balances after debt settlement; zero up to rounding drift.
    pub final_balances: Balances,
    pub surplus_transfers: Vec<Transfer>,
    pub settlement_transfers: Vec<Transfer>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SettlementError {
    #[error("At least one participant is required to split expenses")]
    NoParticipants,
    #[error("Amount is out of the supported decimal range")]
    AmountOutOfRange,
    #[error("Scale {scale} is not supported (max {max_supported})")]
    UnsupportedScale { scale: u32, max_supported: u32 },
}
