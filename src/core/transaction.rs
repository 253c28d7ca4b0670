//! Transaction handling for the ledger
//!
//! A transaction moves `amount` base units from a sender address to a
//! recipient address. Reward (coinbase) transactions have no sender and
//! carry no signature.

use crate::crypto::{verify_signature, KeyError, KeyPair};
use chrono::{DateTime, SecondsFormat, Utc};
use secp256k1::PublicKey;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Transaction-related errors
#[derive(Error, Debug)]
pub enum TransactionError {
    #[error("Transaction amount must be positive")]
    InvalidAmount,
    #[error("Transaction is already signed")]
    AlreadySigned,
    #[error("Reward transactions cannot be signed")]
    RewardNotSignable,
    #[error("Crypto error: {0}")]
    CryptoError(#[from] KeyError),
    #[error("Wire format error: {0}")]
    WireError(#[from] serde_json::Error),
}

/// A value transfer between two addresses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTransaction")]
pub struct Transaction {
    /// Sender address; `None` for mining rewards
    pub(crate) sender: Option<String>,
    /// Recipient address
    pub(crate) recipient: String,
    /// Amount in base units, always > 0
    pub(crate) amount: u64,
    /// Creation time
    pub(crate) timestamp: DateTime<Utc>,
    /// Compact ECDSA signature over [`Transaction::signing_payload`]
    #[serde(serialize_with = "signature_hex::serialize")]
    pub(crate) signature: Option<Vec<u8>>,
}

impl Transaction {
    /// Create an unsigned transfer from `sender` to `recipient`
    pub fn new(sender: &str, recipient: &str, amount: u64) -> Result<Self, TransactionError> {
        Self::build(Some(sender.to_string()), recipient, amount)
    }

    /// Create a reward transaction minting `amount` to `recipient`
    pub fn reward(recipient: &str, amount: u64) -> Result<Self, TransactionError> {
        Self::build(None, recipient, amount)
    }

    fn build(
        sender: Option<String>,
        recipient: &str,
        amount: u64,
    ) -> Result<Self, TransactionError> {
        if amount == 0 {
            return Err(TransactionError::InvalidAmount);
        }

        Ok(Self {
            sender,
            recipient: recipient.to_string(),
            amount,
            timestamp: Utc::now(),
            signature: None,
        })
    }

    pub fn sender(&self) -> Option<&str> {
        self.sender.as_deref()
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn signature(&self) -> Option<&[u8]> {
        self.signature.as_deref()
    }

    /// Check if this is a reward (coinbase) transaction
    pub fn is_reward(&self) -> bool {
        self.sender.is_none()
    }

    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }

    /// The exact bytes that get signed: sender, recipient and amount
    /// concatenated in that order. An absent sender renders as "".
    pub fn signing_payload(&self) -> Vec<u8> {
        format!(
            "{}{}{}",
            self.sender.as_deref().unwrap_or_default(),
            self.recipient,
            self.amount
        )
        .into_bytes()
    }

    /// Sign the transaction and attach the signature.
    ///
    /// Whether `key_pair` actually owns the sender address is checked by
    /// the ledger, not here.
    pub fn sign(&mut self, key_pair: &KeyPair) -> Result<(), TransactionError> {
        if self.is_reward() {
            return Err(TransactionError::RewardNotSignable);
        }
        if self.signature.is_some() {
            return Err(TransactionError::AlreadySigned);
        }

        self.signature = Some(key_pair.sign(&self.signing_payload())?);
        Ok(())
    }

    /// Verify the attached signature against `public_key`.
    /// Unsigned transactions never verify.
    pub fn verify(&self, public_key: &PublicKey) -> bool {
        match &self.signature {
            Some(signature) => verify_signature(public_key, signature, &self.signing_payload()),
            None => false,
        }
    }

    /// Encoding of every field, used when hashing the containing block.
    /// Field order is part of the persisted format.
    pub fn hash_encoding(&self) -> String {
        format!(
            "{}:{}:{}:{}:{}",
            self.sender.as_deref().unwrap_or_default(),
            self.recipient,
            self.amount,
            self.timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true),
            self.signature.as_deref().map(hex::encode).unwrap_or_default()
        )
    }

    pub fn to_wire(&self) -> Result<String, TransactionError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_wire(wire: &str) -> Result<Self, TransactionError> {
        let raw: RawTransaction = serde_json::from_str(wire)?;
        Self::try_from(raw)
    }
}

/// Wire fields as read, before the amount is checked. Every decoded
/// transaction, standalone or inside a block, passes through here.
#[derive(Deserialize)]
struct RawTransaction {
    sender: Option<String>,
    recipient: String,
    amount: u64,
    timestamp: DateTime<Utc>,
    #[serde(with = "signature_hex", default)]
    signature: Option<Vec<u8>>,
}

impl TryFrom<RawTransaction> for Transaction {
    type Error = TransactionError;

    fn try_from(raw: RawTransaction) -> Result<Self, Self::Error> {
        if raw.amount == 0 {
            return Err(TransactionError::InvalidAmount);
        }

        Ok(Self {
            sender: raw.sender,
            recipient: raw.recipient,
            amount: raw.amount,
            timestamp: raw.timestamp,
            signature: raw.signature,
        })
    }
}

/// Serde adapter storing the optional signature as a hex string
mod signature_hex {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        signature: &Option<Vec<u8>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match signature {
            Some(bytes) => serializer.serialize_some(&hex::encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<u8>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|encoded| hex::decode(encoded).map_err(D::Error::custom))
            .transpose()
    }
}
