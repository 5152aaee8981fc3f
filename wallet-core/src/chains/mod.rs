// wallet-core/src/chains/mod.rs
//
// Network identification + per-network configuration

pub mod radix;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Radix network identifier (one byte on ledger).
///
/// Well-known networks have named constants. Any other value is carried
/// through opaquely into paths and addresses.
///
/// Stokenet is id 2 (`tdx_2_`). Callers that used to pass network 0 as their
/// default test network want `NetworkId::from(0)` (`tdx_0_`), not `STOKENET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkId(u8);

impl NetworkId {
    pub const MAINNET: NetworkId = NetworkId(0x01);
    pub const STOKENET: NetworkId = NetworkId(0x02);
    pub const LOCALNET: NetworkId = NetworkId(0xf0);
    pub const INTEGRATION_TESTNET: NetworkId = NetworkId(0xf1);
    pub const SIMULATOR: NetworkId = NetworkId(0xf2);

    #[inline]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn id(self) -> u8 {
        self.0
    }
}

impl From<u8> for NetworkId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Shared config for a Radix network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadixNetworkConfig {
    pub id: NetworkId,
    pub logical_name: String,
    /// Appended to the entity prefix of every Bech32m address, e.g. `account_` + `rdx`
    pub hrp_suffix: String,
}

// Helpers for the well-known networks
impl RadixNetworkConfig {
    pub fn mainnet() -> Self {
        Self {
            id: NetworkId::MAINNET,
            logical_name: "mainnet".to_string(),
            hrp_suffix: "rdx".to_string(),
        }
    }

    pub fn stokenet() -> Self {
        Self {
            id: NetworkId::STOKENET,
            logical_name: "stokenet".to_string(),
            hrp_suffix: "tdx_2_".to_string(),
        }
    }

    pub fn localnet() -> Self {
        Self {
            id: NetworkId::LOCALNET,
            logical_name: "localnet".to_string(),
            hrp_suffix: "loc".to_string(),
        }
    }

    pub fn integration_testnet() -> Self {
        Self {
            id: NetworkId::INTEGRATION_TESTNET,
            logical_name: "inttestnet".to_string(),
            hrp_suffix: "test".to_string(),
        }
    }

    pub fn simulator() -> Self {
        Self {
            id: NetworkId::SIMULATOR,
            logical_name: "simulator".to_string(),
            hrp_suffix: "sim".to_string(),
        }
    }

    /// Config for any id. Unknown ids get a generic test-network suffix
    /// `tdx_{id:x}_`.
    pub fn from_id(id: NetworkId) -> Self {
        match id {
            NetworkId::MAINNET => Self::mainnet(),
            NetworkId::STOKENET => Self::stokenet(),
            NetworkId::LOCALNET => Self::localnet(),
            NetworkId::INTEGRATION_TESTNET => Self::integration_testnet(),
            NetworkId::SIMULATOR => Self::simulator(),
            other => Self {
                id: other,
                logical_name: format!("network_{:x}", other.id()),
                hrp_suffix: format!("tdx_{:x}_", other.id()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_known_networks() {
        assert_eq!(RadixNetworkConfig::from_id(NetworkId::MAINNET).hrp_suffix, "rdx");
        assert_eq!(RadixNetworkConfig::from_id(NetworkId::STOKENET).hrp_suffix, "tdx_2_");
        assert_eq!(RadixNetworkConfig::from_id(NetworkId::SIMULATOR).hrp_suffix, "sim");
        assert_eq!(RadixNetworkConfig::from_id(NetworkId::new(0xf0)).logical_name, "localnet");
    }

    #[test]
    fn test_unknown_network_passthrough() {
        let zero = RadixNetworkConfig::from_id(NetworkId::from(0));
        assert_eq!(zero.id.id(), 0);
        assert_eq!(zero.hrp_suffix, "tdx_0_");
        assert_ne!(NetworkId::from(0), NetworkId::STOKENET);

        let adapanet = RadixNetworkConfig::from_id(NetworkId::new(0x0a));
        assert_eq!(adapanet.hrp_suffix, "tdx_a_");
    }

    #[test]
    fn test_config_json() {
        let json = serde_json::to_string(&RadixNetworkConfig::stokenet()).unwrap();
        assert_eq!(
            json,
            r#"{"id":2,"logicalName":"stokenet","hrpSuffix":"tdx_2_"}"#
        );

        let parsed: RadixNetworkConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, RadixNetworkConfig::stokenet());
    }
}
