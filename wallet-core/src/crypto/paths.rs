// wallet-core/src/crypto/paths.rs
//
// Derivation Paths Module - Radix HD path model
// BIP-44 (Purpose), SLIP-44 (Coin Type 1022), SLIP-0010 (all levels hardened)
//
// Layout: m/44'/1022'/{network}'/{entityType}'/{keyType}'/{entityIndex}'

use crate::chains::NetworkId;
use crate::error::{CryptoError, WalletError, WalletResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Offset added to an index to mark it hardened (2^31).
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// BIP-44 purpose level.
pub const PURPOSE: u32 = 44;

/// SLIP-44 registered coin type for Radix.
pub const COIN_TYPE: u32 = 1022;

// =============================================================================
// PATH LEVEL CODES
// =============================================================================

/// Kind of on-ledger entity a key controls (4th level).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    /// Account entity, code 525
    Account,
    /// Identity (persona) entity, code 618
    Identity,
}

impl EntityType {
    #[inline]
    pub const fn code(self) -> u32 {
        match self {
            EntityType::Account => 525,
            EntityType::Identity => 618,
        }
    }
}

/// What the key is used for (5th level).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyType {
    /// Signing transactions, code 1460. Used for every derived account.
    TransactionSigning,
    /// ROLA / dApp authentication, code 1678
    AuthenticationSigning,
    /// Message encryption, code 1391
    MessageEncryption,
}

impl KeyType {
    #[inline]
    pub const fn code(self) -> u32 {
        match self {
            KeyType::TransactionSigning => 1460,
            KeyType::AuthenticationSigning => 1678,
            KeyType::MessageEncryption => 1391,
        }
    }
}

// =============================================================================
// CHILD INDEX
// =============================================================================

/// One level of a derivation path. The index itself is always < 2^31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildIndex {
    Hardened(u32),
    Normal(u32),
}

impl ChildIndex {
    pub fn hardened(index: u32) -> WalletResult<Self> {
        Self::check_range(index)?;
        Ok(ChildIndex::Hardened(index))
    }

    pub fn normal(index: u32) -> WalletResult<Self> {
        Self::check_range(index)?;
        Ok(ChildIndex::Normal(index))
    }

    /// Index without the hardened bit.
    #[inline]
    pub const fn index(self) -> u32 {
        match self {
            ChildIndex::Hardened(i) | ChildIndex::Normal(i) => i,
        }
    }

    #[inline]
    pub const fn is_hardened(self) -> bool {
        matches!(self, ChildIndex::Hardened(_))
    }

    /// Serialized form used by the derivation function (`ser32`).
    #[inline]
    pub const fn to_bits(self) -> u32 {
        match self {
            ChildIndex::Hardened(i) => i | HARDENED_OFFSET,
            ChildIndex::Normal(i) => i,
        }
    }

    fn check_range(index: u32) -> WalletResult<()> {
        if index >= HARDENED_OFFSET {
            return Err(WalletError::Crypto(CryptoError::InvalidPath(format!(
                "index {} does not fit in 31 bits",
                index
            ))));
        }
        Ok(())
    }
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildIndex::Hardened(i) => write!(f, "{}'", i),
            ChildIndex::Normal(i) => write!(f, "{}", i),
        }
    }
}

// =============================================================================
// DERIVATION PATH
// =============================================================================

/// Ordered list of child indices starting at the master node `m`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DerivationPath {
    segments: Vec<ChildIndex>,
}

impl DerivationPath {
    pub fn new(segments: Vec<ChildIndex>) -> Self {
        Self { segments }
    }

    /// Path of a transaction-signing key for an entity:
    /// `m/44'/1022'/{network}'/{entity_type}'/1460'/{index}'`
    pub fn account(
        network: NetworkId,
        entity_type: EntityType,
        index: u32,
    ) -> WalletResult<Self> {
        Self::entity(network, entity_type, KeyType::TransactionSigning, index)
    }

    /// Full six-level Radix path for any key type.
    pub fn entity(
        network: NetworkId,
        entity_type: EntityType,
        key_type: KeyType,
        index: u32,
    ) -> WalletResult<Self> {
        let segments = [
            PURPOSE,
            COIN_TYPE,
            u32::from(network.id()),
            entity_type.code(),
            key_type.code(),
            index,
        ]
        .into_iter()
        .map(ChildIndex::hardened)
        .collect::<WalletResult<Vec<_>>>()?;

        Ok(Self { segments })
    }

    #[inline]
    pub fn segments(&self) -> &[ChildIndex] {
        &self.segments
    }

    /// Number of levels below `m`.
    #[inline]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Last level, i.e. the entity index for Radix paths.
    pub fn entity_index(&self) -> Option<u32> {
        self.segments.last().map(|c| c.index())
    }

    pub fn is_fully_hardened(&self) -> bool {
        self.segments.iter().all(|c| c.is_hardened())
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for DerivationPath {
    type Err = WalletError;

    /// Parse `m/44'/1022'/1'/525'/1460'/0'`.
    ///
    /// `'` and `h` both mark a hardened level. Non-hardened levels parse
    /// fine; the Ed25519 deriver is the one that rejects them.
    fn from_str(path: &str) -> WalletResult<Self> {
        let path = path.trim();
        let invalid = |reason: String| WalletError::Crypto(CryptoError::InvalidPath(reason));

        if path == "m" {
            return Ok(Self::new(Vec::new()));
        }

        let rest = path
            .strip_prefix("m/")
            .ok_or_else(|| invalid(format!("path must start with 'm/': {}", path)))?;

        let segments = rest
            .split('/')
            .map(|segment| {
                let segment = segment.trim();
                if segment.is_empty() {
                    return Err(invalid(format!("empty level in '{}'", path)));
                }

                let (digits, hardened) = match segment
                    .strip_suffix('\'')
                    .or_else(|| segment.strip_suffix('h'))
                {
                    Some(digits) => (digits, true),
                    None => (segment, false),
                };

                let index: u32 = digits
                    .parse()
                    .map_err(|e| invalid(format!("invalid index '{}': {}", digits, e)))?;

                if hardened {
                    ChildIndex::hardened(index)
                } else {
                    ChildIndex::normal(index)
                }
            })
            .collect::<WalletResult<Vec<_>>>()?;

        Ok(Self::new(segments))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_path_mainnet() {
        let path = DerivationPath::account(NetworkId::MAINNET, EntityType::Account, 0).unwrap();
        assert_eq!(path.to_string(), "m/44'/1022'/1'/525'/1460'/0'");
        assert_eq!(path.depth(), 6);
        assert!(path.is_fully_hardened());
        assert_eq!(path.entity_index(), Some(0));
    }

    #[test]
    fn test_account_path_custom_network() {
        let path = DerivationPath::account(NetworkId::new(0), EntityType::Account, 100).unwrap();
        assert_eq!(path.to_string(), "m/44'/1022'/0'/525'/1460'/100'");
    }

    #[test]
    fn test_identity_and_key_types() {
        let identity = DerivationPath::account(NetworkId::STOKENET, EntityType::Identity, 3).unwrap();
        assert_eq!(identity.to_string(), "m/44'/1022'/2'/618'/1460'/3'");

        let auth = DerivationPath::entity(
            NetworkId::MAINNET,
            EntityType::Account,
            KeyType::AuthenticationSigning,
            0,
        )
        .unwrap();
        assert_eq!(auth.to_string(), "m/44'/1022'/1'/525'/1678'/0'");

        let enc = DerivationPath::entity(
            NetworkId::MAINNET,
            EntityType::Account,
            KeyType::MessageEncryption,
            0,
        )
        .unwrap();
        assert_eq!(enc.to_string(), "m/44'/1022'/1'/525'/1391'/0'");
    }

    #[test]
    fn test_index_out_of_range() {
        let result = DerivationPath::account(NetworkId::MAINNET, EntityType::Account, HARDENED_OFFSET);
        assert!(matches!(
            result,
            Err(WalletError::Crypto(CryptoError::InvalidPath(_)))
        ));

        let max = DerivationPath::account(NetworkId::MAINNET, EntityType::Account, HARDENED_OFFSET - 1)
            .unwrap();
        assert_eq!(max.entity_index(), Some(0x7FFF_FFFF));
    }

    #[test]
    fn test_child_index_bits() {
        assert_eq!(ChildIndex::Hardened(0).to_bits(), 0x8000_0000);
        assert_eq!(ChildIndex::Hardened(44).to_bits(), 0x8000_002C);
        assert_eq!(ChildIndex::Normal(44).to_bits(), 44);
    }

    #[test]
    fn test_parse_roundtrip() {
        let text = "m/44'/1022'/1'/525'/1460'/7'";
        let path: DerivationPath = text.parse().unwrap();
        assert_eq!(path.to_string(), text);
        assert_eq!(
            path,
            DerivationPath::account(NetworkId::MAINNET, EntityType::Account, 7).unwrap()
        );
    }

    #[test]
    fn test_parse_h_notation_and_master() {
        let path: DerivationPath = "m/44h/1022h".parse().unwrap();
        assert_eq!(path.to_string(), "m/44'/1022'");

        let master: DerivationPath = "m".parse().unwrap();
        assert_eq!(master.depth(), 0);
        assert_eq!(master.to_string(), "m");
    }

    #[test]
    fn test_parse_keeps_normal_levels() {
        let path: DerivationPath = "m/44'/1022'/0".parse().unwrap();
        assert_eq!(path.segments()[2], ChildIndex::Normal(0));
        assert!(!path.is_fully_hardened());
    }

    #[test]
    fn test_parse_invalid() {
        assert!("invalid".parse::<DerivationPath>().is_err());
        assert!("44'/1022'".parse::<DerivationPath>().is_err()); // Missing m/
        assert!("m/".parse::<DerivationPath>().is_err());
        assert!("m/44'//1'".parse::<DerivationPath>().is_err());
        assert!("m/abc'".parse::<DerivationPath>().is_err());
        assert!("m/2147483648'".parse::<DerivationPath>().is_err());
    }

    #[test]
    fn test_level_codes() {
        assert_eq!(EntityType::Account.code(), 525);
        assert_eq!(EntityType::Identity.code(), 618);
        assert_eq!(KeyType::TransactionSigning.code(), 1460);
        assert_eq!(KeyType::AuthenticationSigning.code(), 1678);
        assert_eq!(KeyType::MessageEncryption.code(), 1391);
    }
}
