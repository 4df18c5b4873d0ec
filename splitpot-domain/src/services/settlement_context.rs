//! Rounding configuration shared by every settlement stage.
//!
//! Each stage rounds at the point where a value is computed, so drift is
//! bounded per value. Nothing here guarantees that drift cancels across
//! participants; the debt minimizer tolerates the remainder.

use crate::model::{Money, SettlementError};
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounding mode for settlement amounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoundingMode {
    /// Round half away from zero (e.g., 0.005 -> 0.01, -0.005 -> -0.01).
    #[default]
    HalfUp,
    /// Round half to nearest even number (banker's rounding).
    HalfEven,
}

impl RoundingMode {
    fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// Context for settlement quantization.
///
/// # Example
/// ```
/// use splitpot_domain::{Money, services::{RoundingMode, SettlementContext}};
///
/// let ctx = SettlementContext::cents_default();
/// assert_eq!(ctx.scale, 2);
/// assert_eq!(ctx.rounding_mode, RoundingMode::HalfUp);
/// assert_eq!(ctx.round(Money::new(10005, 3)), Money::new(1001, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettlementContext {
    /// Number of decimal places of the atomic unit (2 for cents).
    pub scale: u32,
    pub rounding_mode: RoundingMode,
}

pub const MAX_SETTLEMENT_SCALE: u32 = 10;

impl SettlementContext {
    /// Scale 2, half away from zero.
    pub fn cents_default() -> Self {
        Self {
            scale: 2,
            rounding_mode: RoundingMode::HalfUp,
        }
    }

    pub fn try_new(scale: u32, rounding_mode: RoundingMode) -> Result<Self, SettlementError> {
        validate_scale(scale)?;
        Ok(Self {
            scale,
            rounding_mode,
        })
    }

    /// Smallest representable amount, e.g. `0.01`.
    pub fn atomic_unit(self) -> Money {
        Money::from_decimal(Decimal::new(1, self.scale))
    }

    pub fn round(self, amount: Money) -> Money {
        let rounded = amount
            .as_decimal()
            .round_dp_with_strategy(self.scale, self.rounding_mode.strategy());
        Money::from_decimal(rounded)
    }
}

impl Default for SettlementContext {
    fn default() -> Self {
        Self::cents_default()
    }
}

fn validate_scale(scale: u32) -> Result<(), SettlementError> {
    if scale > MAX_SETTLEMENT_SCALE {
        tracing::error!(
            scale,
            max_supported = MAX_SETTLEMENT_SCALE,
            "Settlement context rejected due to unsupported scale"
        );
        return Err(SettlementError::UnsupportedScale {
            scale,
            max_supported: MAX_SETTLEMENT_SCALE,
        });
    }
    Ok(())
}
