// wallet-core/src/crypto/seed.rs
//
// Seed Module - BIP-39 mnemonic → 64-byte seed
// PBKDF2-HMAC-SHA512, 2048 rounds, salt = "mnemonic" + passphrase (both NFKD)

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Length of a BIP-39 seed in bytes.
pub const SEED_LEN: usize = 64;

const PBKDF2_ROUNDS: u32 = 2048;
const SALT_PREFIX: &str = "mnemonic";

/// Root key material for SLIP-0010 derivation.
///
/// Zeroized on drop; `Debug` never prints the bytes.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    /// Wrap raw seed bytes obtained elsewhere (hardware wallet, backup, ...).
    pub fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Seed").field(&"[REDACTED]").finish()
    }
}

/// Mnemonic → seed conversion.
pub struct SeedDeriver;

impl SeedDeriver {
    /// Derive the 64-byte seed for `phrase` and `passphrase`.
    ///
    /// The phrase is NOT checked against the wordlist or its checksum: any
    /// word sequence yields a seed, and the output for an invalid phrase is
    /// the same one other BIP-39 implementations produce. Callers that need
    /// validation go through [`WalletMnemonic::from_phrase`] first.
    ///
    /// [`WalletMnemonic::from_phrase`]: crate::crypto::WalletMnemonic::from_phrase
    pub fn to_seed(phrase: &str, passphrase: &str) -> Seed {
        let password = Zeroizing::new(phrase.nfkd().collect::<String>());
        let salt = Zeroizing::new(format!(
            "{}{}",
            SALT_PREFIX,
            passphrase.nfkd().collect::<String>()
        ));

        let mut out = [0u8; SEED_LEN];
        pbkdf2_hmac::<Sha512>(password.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut out);

        let seed = Seed(out);
        out.zeroize();
        seed
    }
}
