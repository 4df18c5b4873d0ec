use splitpot_domain::{RoundingMode, SettlementContext, SettlementError};
use std::env;
use tracing_subscriber::EnvFilter;

const SCALE_VAR: &str = "SPLITPOT_SCALE";
const ROUNDING_VAR: &str = "SPLITPOT_ROUNDING";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("SPLITPOT_SCALE must be a non-negative integer, got '{0}'")]
    InvalidScale(String),
    #[error("SPLITPOT_ROUNDING must be 'half-up' or 'half-even', got '{0}'")]
    InvalidRoundingMode(String),
    #[error("SPLITPOT_SCALE={scale} is above the supported maximum of {max_supported}")]
    UnsupportedScale { scale: u32, max_supported: u32 },
}

/// Settlement settings read from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub context: SettlementContext,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = SettlementContext::cents_default();

        let scale = match lookup(SCALE_VAR) {
            Some(raw) => parse_scale(&raw)?,
            None => defaults.scale,
        };
        let rounding_mode = match lookup(ROUNDING_VAR) {
            Some(raw) => parse_rounding_mode(&raw)?,
            None => defaults.rounding_mode,
        };

        let context = SettlementContext::try_new(scale, rounding_mode).map_err(|err| match err {
            SettlementError::UnsupportedScale {
                scale,
                max_supported,
            } => ConfigError::UnsupportedScale {
                scale,
                max_supported,
            },
            _ => ConfigError::InvalidScale(scale.to_string()),
        })?;

        tracing::debug!(
            scale = context.scale,
            rounding_mode = ?context.rounding_mode,
            "Loaded settlement configuration"
        );
        Ok(Self { context })
    }
}

fn parse_scale(raw: &str) -> Result<u32, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidScale(raw.to_string()))
}

fn parse_rounding_mode(raw: &str) -> Result<RoundingMode, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "half-up" | "half_up" => Ok(RoundingMode::HalfUp),
        "half-even" | "half_even" => Ok(RoundingMode::HalfEven),
        _ => Err(ConfigError::InvalidRoundingMode(raw.to_string())),
    }
}

/// Logs go to stderr so the report on stdout stays clean.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use splitpot_domain::services::MAX_SETTLEMENT_SCALE;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_string())
        }
    }

    #[test]
    fn defaults_to_cents_half_up() {
        let config = AppConfig::from_lookup(lookup(&[])).expect("defaults are valid");
        assert_eq!(config.context, SettlementContext::cents_default());
    }

    #[rstest]
    #[case::whole_units(&[("SPLITPOT_SCALE", "0")], 0, RoundingMode::HalfUp)]
    #[case::bankers(&[("SPLITPOT_ROUNDING", "half-even")], 2, RoundingMode::HalfEven)]
    #[case::both(
        &[("SPLITPOT_SCALE", " 3 "), ("SPLITPOT_ROUNDING", "HALF_UP")],
        3,
        RoundingMode::HalfUp
    )]
    fn reads_overrides(
        #[case] vars: &[(&str, &str)],
        #[case] scale: u32,
        #[case] rounding_mode: RoundingMode,
    ) {
        let config = AppConfig::from_lookup(lookup(vars)).expect("config should load");
        assert_eq!(config.context.scale, scale);
        assert_eq!(config.context.rounding_mode, rounding_mode);
    }

    #[rstest]
    #[case::negative_scale(
        &[("SPLITPOT_SCALE", "-1")],
        ConfigError::InvalidScale("-1".to_string())
    )]
    #[case::unknown_rounding(
        &[("SPLITPOT_ROUNDING", "floor")],
        ConfigError::InvalidRoundingMode("floor".to_string())
    )]
    #[case::scale_too_large(
        &[("SPLITPOT_SCALE", "11")],
        ConfigError::UnsupportedScale { scale: 11, max_supported: MAX_SETTLEMENT_SCALE }
    )]
    fn rejects_invalid_values(#[case] vars: &[(&str, &str)], #[case] expected: ConfigError) {
        assert_eq!(AppConfig::from_lookup(lookup(vars)), Err(expected));
    }
}
