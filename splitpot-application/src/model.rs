use indexmap::IndexMap;
use rust_decimal::Decimal;
use splitpot_domain::{Contribution, MemberId, Money};
use std::str::FromStr;

pub type Roster = IndexMap<MemberId, String>;

/// A participant line exactly as typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticipantEntry<'a> {
    pub name: &'a str,
    pub amount: &'a str,
}

/// Raw sheet input; nothing has been validated yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseSheet<'a> {
    pub total_spent: &'a str,
    pub participants: Vec<ParticipantEntry<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSheet {
    pub total_spent: Money,
    pub contributions: Vec<Contribution>,
    pub roster: Roster,
}

impl<'a> ExpenseSheet<'a> {
    pub fn new(total_spent: &'a str, participants: Vec<ParticipantEntry<'a>>) -> Self {
        Self {
            total_spent,
            participants,
        }
    }

    /// Coerce every field into a usable value.
    ///
    /// Blank names become the localized `Person{n}` label and amounts that are
    /// missing, unparseable or negative become zero. Member ids follow sheet
    /// position starting at 1, so repeated names stay distinct participants.
    pub fn normalize(&self) -> NormalizedSheet {
        let total_spent = coerce_amount(self.total_spent, "total_spent", 0);

        let mut contributions = Vec::with_capacity(self.participants.len());
        let mut roster = Roster::with_capacity(self.participants.len());

        for (idx, entry) in self.participants.iter().enumerate() {
            let position = idx + 1;
            let member = MemberId(position as u64);

            let name = entry.name.trim();
            let name = if name.is_empty() {
                splitpot_i18n::default_participant_name(position)
            } else {
                name.to_owned()
            };

            let amount = coerce_amount(entry.amount, "contribution", position);
            contributions.push(Contribution { member, amount });
            roster.insert(member, name);
        }

        NormalizedSheet {
            total_spent,
            contributions,
            roster,
        }
    }
}

/// Why a raw amount could not be used as typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Coercion {
    Missing,
    Negative,
    Invalid,
}

// Plain decimal notation only: "1e2" and "12abc" are rejected.
fn parse_amount(raw: &str) -> Result<Money, Coercion> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Coercion::Missing);
    }

    match Decimal::from_str(trimmed) {
        Ok(value) if value.is_zero() => Ok(Money::ZERO),
        Ok(value) if value.is_sign_negative() => Err(Coercion::Negative),
        Ok(value) => Ok(Money::from_decimal(value)),
        Err(_) => Err(Coercion::Invalid),
    }
}

fn coerce_amount(raw: &str, field: &'static str, position: usize) -> Money {
    match parse_amount(raw) {
        Ok(amount) => amount,
        Err(coercion) => {
            tracing::warn!(
                field,
                position,
                raw = raw.trim(),
                reason = ?coercion,
                "Amount coerced to zero"
            );
            Money::ZERO
        }
    }
}
