// wallet-core/src/crypto/mnemonic.rs
//
// Mnemonic Module - BIP-39 phrase generation and import
// Standards: BIP-39 (Mnemonic), PBKDF2-HMAC-SHA512 (Seed Derivation, see seed.rs)

use crate::crypto::seed::{Seed, SeedDeriver};
use crate::error::{MnemonicError, WalletError, WalletResult};
use bip39::{Language, Mnemonic};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Supported phrase lengths. Intermediate BIP-39 lengths are never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCount {
    /// 12 words (128-bit entropy)
    Twelve = 12,
    /// 24 words (256-bit entropy)
    TwentyFour = 24,
}

impl WordCount {
    #[inline]
    pub const fn entropy_bytes(self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::TwentyFour => 32,
        }
    }

    #[inline]
    pub const fn strength_bits(self) -> usize {
        self.entropy_bytes() * 8
    }

    pub fn from_count(count: usize) -> WalletResult<Self> {
        match count {
            12 => Ok(WordCount::Twelve),
            24 => Ok(WordCount::TwentyFour),
            other => Err(WalletError::Mnemonic(MnemonicError::InvalidWordCount(other))),
        }
    }
}

/// Wallet Mnemonic - BIP-39 phrase holder
///
/// # Security Architecture
/// - **ZeroizeOnDrop**: the phrase is overwritten when the struct is dropped
/// - **CSPRNG**: entropy comes from `OsRng` unless a caller injects another `CryptoRng`
/// - **No Debug Leak**: custom Debug impl never prints the phrase
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct WalletMnemonic {
    phrase: String,
    #[zeroize(skip)]
    length: WordCount,
}

impl std::fmt::Debug for WalletMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletMnemonic")
            .field("word_count", &self.word_count())
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl WalletMnemonic {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// New 12-word phrase (128-bit entropy).
    pub fn generate_12_words() -> WalletResult<Self> {
        Self::with_word_count(WordCount::Twelve)
    }

    /// New 24-word phrase (256-bit entropy).
    pub fn generate_24_words() -> WalletResult<Self> {
        Self::with_word_count(WordCount::TwentyFour)
    }

    /// New phrase drawing entropy from the operating system.
    pub fn with_word_count(word_count: WordCount) -> WalletResult<Self> {
        Self::generate_with_rng(&mut OsRng, word_count)
    }

    /// New phrase drawing entropy from `rng`.
    ///
    /// # Errors
    /// `MnemonicError::EntropySourceUnavailable` when `rng` cannot fill the
    /// entropy buffer. The failure is not retried.
    pub fn generate_with_rng<R>(rng: &mut R, word_count: WordCount) -> WalletResult<Self>
    where
        R: RngCore + CryptoRng,
    {
        let entropy_size = word_count.entropy_bytes();

        // Sized for the longest phrase
        let mut entropy = [0u8; 32];
        if let Err(e) = rng.try_fill_bytes(&mut entropy[..entropy_size]) {
            entropy.zeroize();
            return Err(WalletError::Mnemonic(
                MnemonicError::EntropySourceUnavailable(e.to_string()),
            ));
        }

        let mnemonic = Mnemonic::from_entropy_in(Language::English, &entropy[..entropy_size]);
        entropy.zeroize();
        let mnemonic =
            mnemonic.map_err(|e| WalletError::Mnemonic(MnemonicError::Bip39Error(e.to_string())))?;

        Ok(Self {
            phrase: mnemonic.to_string(),
            length: word_count,
        })
    }

    /// Import an existing phrase.
    ///
    /// # Validation
    /// - word count (12 or 24)
    /// - every word is in the English BIP-39 wordlist
    /// - checksum
    ///
    /// Whitespace is collapsed to single spaces before validation.
    pub fn from_phrase(phrase: &str) -> WalletResult<Self> {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        let length = WordCount::from_count(words.len())?;

        let joined = words.join(" ");
        Mnemonic::parse_in(Language::English, &joined).map_err(|e| {
            WalletError::Mnemonic(match e {
                bip39::Error::UnknownWord(i) => MnemonicError::UnknownWord(words[i].to_string()),
                bip39::Error::InvalidChecksum => MnemonicError::ChecksumFailed,
                bip39::Error::BadWordCount(n) => MnemonicError::InvalidWordCount(n),
                other => MnemonicError::Bip39Error(other.to_string()),
            })
        })?;

        Ok(Self {
            phrase: joined,
            length,
        })
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// The phrase as a single space-separated string.
    ///
    /// # Warning
    /// Never log this value.
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.length as usize
    }

    #[inline]
    pub fn length(&self) -> WordCount {
        self.length
    }

    pub fn words(&self) -> Vec<&str> {
        self.phrase.split_whitespace().collect()
    }

    pub fn strength_bits(&self) -> usize {
        self.length.strength_bits()
    }

    // =========================================================================
    // SEED DERIVATION
    // =========================================================================

    /// 64-byte BIP-39 seed for this phrase and an optional passphrase.
    pub fn to_seed(&self, passphrase: Option<&str>) -> Seed {
        SeedDeriver::to_seed(&self.phrase, passphrase.unwrap_or(""))
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Full validation: word count, wordlist, checksum.
    #[inline]
    pub fn validate(phrase: &str) -> bool {
        Self::from_phrase(phrase).is_ok()
    }

    /// Whether `word` is in the English BIP-39 wordlist.
    pub fn is_valid_word(word: &str) -> bool {
        Language::English.find_word(word).is_some()
    }
}

impl AsRef<str> for WalletMnemonic {
    fn as_ref(&self) -> &str {
        &self.phrase
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
