// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use cbn_parameters::{
    consensus::COMMISSION_MULTIPLIER,
    limits::{MAX_PAYLOAD_LENGTH, MAX_SERVICE_DATA_LENGTH, MAX_TX_LENGTH},
    BASE_COIN,
};
use cbn_types::{CoinSymbol, U256};

#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    #[error("invalid execution spec: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid execution spec: {0} must be positive")]
    NonPositive(&'static str),
}

/// Settings the executor needs from the network it runs in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExecutionSpec {
    /// Base coin of the states built with `State::from_spec`. Execution
    /// always prices commissions in the base coin of the state it runs on.
    pub base_coin: CoinSymbol,
    /// Base-coin units charged per unit of gas at gas price one.
    pub commission_multiplier: u64,
    pub max_tx_length: usize,
    pub max_payload_length: usize,
    pub max_service_data_length: usize,
}

impl Default for ExecutionSpec {
    fn default() -> Self {
        ExecutionSpec {
            base_coin: *BASE_COIN,
            commission_multiplier: COMMISSION_MULTIPLIER,
            max_tx_length: MAX_TX_LENGTH,
            max_payload_length: MAX_PAYLOAD_LENGTH,
            max_service_data_length: MAX_SERVICE_DATA_LENGTH,
        }
    }
}

impl ExecutionSpec {
    /// Parses operator-supplied settings. Missing keys keep their defaults.
    pub fn from_toml_str(config: &str) -> Result<Self, SpecError> {
        let spec: ExecutionSpec = toml::from_str(config)?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> Result<(), SpecError> {
        if self.commission_multiplier == 0 {
            return Err(SpecError::NonPositive("commission_multiplier"));
        }
        if self.max_tx_length == 0 {
            return Err(SpecError::NonPositive("max_tx_length"));
        }
        Ok(())
    }

    pub fn commission_multiplier(&self) -> U256 {
        U256::from(self.commission_multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::{ExecutionSpec, SpecError};

    #[test]
    fn empty_config_is_default() {
        assert_eq!(
            ExecutionSpec::from_toml_str("").unwrap(),
            ExecutionSpec::default()
        );
    }

    #[test]
    fn overrides() {
        let spec = ExecutionSpec::from_toml_str(
            r#"
            base_coin = "TEST"
            commission_multiplier = 1
            max_payload_length = 64
            "#,
        )
        .unwrap();
        assert_eq!(spec.base_coin, "TEST".parse().unwrap());
        assert_eq!(spec.commission_multiplier, 1);
        assert_eq!(spec.max_payload_length, 64);
        assert_eq!(
            spec.max_tx_length,
            ExecutionSpec::default().max_tx_length
        );
    }

    #[test]
    fn rejects_bad_config() {
        assert!(matches!(
            ExecutionSpec::from_toml_str("commission_multiplier = 0"),
            Err(SpecError::NonPositive("commission_multiplier"))
        ));
        assert!(matches!(
            ExecutionSpec::from_toml_str("unknown_key = 1"),
            Err(SpecError::Toml(_))
        ));
        assert!(matches!(
            ExecutionSpec::from_toml_str(r#"base_coin = "WAYTOOLONGTICKER""#),
            Err(SpecError::Toml(_))
        ));
    }
}
