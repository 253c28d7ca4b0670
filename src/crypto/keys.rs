//! ECDSA key management for the ledger
//!
//! Provides key pair generation, signing, and verification using
//! the secp256k1 elliptic curve (same as Bitcoin).

use rand::rngs::OsRng;
use ripemd::Ripemd160;
use secp256k1::{ecdsa::Signature, Message, PublicKey, Secp256k1, SecretKey};
use sha2::Digest;
use thiserror::Error;

use super::hash::{double_sha256, sha256};

/// Version byte prepended to every address (Bitcoin mainnet P2PKH)
pub const ADDRESS_VERSION: u8 = 0x00;

/// Errors that can occur during key operations
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("Invalid private key")]
    InvalidPrivateKey,
    #[error("Invalid public key")]
    InvalidPublicKey,
    #[error("Secp256k1 error: {0}")]
    Secp256k1Error(#[from] secp256k1::Error),
}

/// A signing identity: secp256k1 key pair plus its cached address
#[derive(Clone)]
pub struct KeyPair {
    secret_key: SecretKey,
    public_key: PublicKey,
    address: String,
}

impl KeyPair {
    /// Generate a new random key pair
    pub fn generate() -> Self {
        let secp = Secp256k1::new();
        let (secret_key, public_key) = secp.generate_keypair(&mut OsRng);
        Self::assemble(secret_key, public_key)
    }

    /// Derive a key pair deterministically from seed material.
    ///
    /// The secret key is `SHA256(seed)`, so the same seed always yields
    /// the same key pair and address.
    pub fn from_seed(seed: &[u8]) -> Result<Self, KeyError> {
        let secret_key =
            SecretKey::from_slice(&sha256(seed)).map_err(|_| KeyError::InvalidPrivateKey)?;
        Ok(Self::from_secret_key(secret_key))
    }

    /// Derive a key pair from a passphrase
    pub fn from_passphrase(passphrase: &str) -> Result<Self, KeyError> {
        Self::from_seed(passphrase.as_bytes())
    }

    /// Deterministic when a seed is supplied, random otherwise
    pub fn generate_with(seed: Option<&[u8]>) -> Result<Self, KeyError> {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Ok(Self::generate()),
        }
    }

    /// Create a key pair from an existing secret key
    pub fn from_secret_key(secret_key: SecretKey) -> Self {
        let secp = Secp256k1::new();
        let public_key = PublicKey::from_secret_key(&secp, &secret_key);
        Self::assemble(secret_key, public_key)
    }

    /// Create a key pair from a hex-encoded private key
    pub fn from_private_key_hex(hex_key: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(hex_key).map_err(|_| KeyError::InvalidPrivateKey)?;
        let secret_key =
            SecretKey::from_slice(&bytes).map_err(|_| KeyError::InvalidPrivateKey)?;
        Ok(Self::from_secret_key(secret_key))
    }

    fn assemble(secret_key: SecretKey, public_key: PublicKey) -> Self {
        let address = public_key_to_address(&public_key);
        Self {
            secret_key,
            public_key,
            address,
        }
    }

    /// Get the private key as a hex string
    pub fn private_key_hex(&self) -> String {
        hex::encode(self.secret_key.secret_bytes())
    }

    /// Get the public key as a hex string (compressed format)
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key.serialize())
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// The address derived from the public key.
    /// Computed once when the key pair is built.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Sign an exact byte payload with the private key
    pub fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, KeyError> {
        sign_message(&self.secret_key, payload)
    }

    /// Verify a signature against this key pair's public key
    pub fn verify(&self, payload: &[u8], signature: &[u8]) -> bool {
        verify_signature(&self.public_key, signature, payload)
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

/// Convert a public key to a ledger address
/// Base58Check(version || RIPEMD160(SHA256(pubkey)))
pub fn public_key_to_address(public_key: &PublicKey) -> String {
    let sha256_hash = sha256(&public_key.serialize());

    let mut ripemd = Ripemd160::new();
    ripemd.update(&sha256_hash);
    let ripemd_hash = ripemd.finalize();

    let mut address_bytes = vec![ADDRESS_VERSION];
    address_bytes.extend_from_slice(&ripemd_hash);

    // Checksum is the first 4 bytes of double SHA256
    let checksum = double_sha256(&address_bytes);
    address_bytes.extend_from_slice(&checksum[..4]);

    bs58::encode(address_bytes).into_string()
}

/// Parse a public key from hex string
pub fn public_key_from_hex(hex_key: &str) -> Result<PublicKey, KeyError> {
    let bytes = hex::decode(hex_key).map_err(|_| KeyError::InvalidPublicKey)?;
    PublicKey::from_slice(&bytes).map_err(|_| KeyError::InvalidPublicKey)
}

/// Sign a payload with a secret key. The payload is always hashed with
/// SHA-256 first; the result is a 64-byte compact signature.
pub fn sign_message(secret_key: &SecretKey, payload: &[u8]) -> Result<Vec<u8>, KeyError> {
    let secp = Secp256k1::new();
    let message = Message::from_digest_slice(&sha256(payload))?;
    let signature = secp.sign_ecdsa(&message, secret_key);
    Ok(signature.serialize_compact().to_vec())
}

/// Verify a signature over a payload.
///
/// Returns `false` for malformed signatures, a mismatched key or a
/// tampered payload; it never errors.
pub fn verify_signature(public_key: &PublicKey, signature: &[u8], payload: &[u8]) -> bool {
    let secp = Secp256k1::new();

    let Ok(message) = Message::from_digest_slice(&sha256(payload)) else {
        return false;
    };
    let Ok(sig) = Signature::from_compact(signature) else {
        return false;
    };

    secp.verify_ecdsa(&message, &sig, public_key).is_ok()
}
