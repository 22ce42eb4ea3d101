//! Trading parameter bundle.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::error::ConfigError;

/// Trading parameters.
///
/// Constructed once at startup and never mutated. Ratio fields are fractions
/// of capital, not percentages.
#[derive(Debug, Clone, Deserialize)]
pub struct TradingConfig {
    /// Starting capital for the portfolio.
    #[serde(default = "default_initial_capital")]
    pub initial_capital: Decimal,
    /// Maximum fraction of capital committed to a single position.
    #[serde(default = "default_max_position_size")]
    pub max_position_size: Decimal,
    /// Maximum tolerated portfolio drawdown before trading halts.
    #[serde(default = "default_max_drawdown")]
    pub max_drawdown: Decimal,
    /// Fraction of capital risked per trade.
    #[serde(default = "default_risk_per_trade")]
    pub risk_per_trade: Decimal,
    /// Minimum signal confidence required to act.
    #[serde(default = "default_min_confidence")]
    pub min_confidence: Decimal,
    /// Seconds to wait between trades.
    #[serde(default = "default_cooloff_secs")]
    pub cooloff_secs: u64,
}

fn default_initial_capital() -> Decimal {
    dec!(10000)
}

fn default_max_position_size() -> Decimal {
    dec!(0.1)
}

fn default_max_drawdown() -> Decimal {
    dec!(0.2)
}

fn default_risk_per_trade() -> Decimal {
    dec!(0.02)
}

fn default_min_confidence() -> Decimal {
    dec!(0.65)
}

fn default_cooloff_secs() -> u64 {
    60
}

impl Default for TradingConfig {
    fn default() -> Self {
        Self {
            initial_capital: default_initial_capital(),
            max_position_size: default_max_position_size(),
            max_drawdown: default_max_drawdown(),
            risk_per_trade: default_risk_per_trade(),
            min_confidence: default_min_confidence(),
            cooloff_secs: default_cooloff_secs(),
        }
    }
}

impl TradingConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capital <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "initial_capital",
                reason: "must be greater than 0".to_string(),
            });
        }
        for (field, value) in [
            ("max_position_size", self.max_position_size),
            ("max_drawdown", self.max_drawdown),
            ("risk_per_trade", self.risk_per_trade),
            ("min_confidence", self.min_confidence),
        ] {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be between 0 and 1".to_string(),
                });
            }
        }
        Ok(())
    }
}
