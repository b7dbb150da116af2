//! 32-byte newtypes shared across the registry
//!
//! `Digest` identifies commitments and hashed keys, `Scalar` carries
//! blinding factors and edition values, `Address` is a ledger identity.
//! All three are plain 32-byte values with hex helpers, in the same shape
//! as the nullifier and commitment types elsewhere in the stack. They
//! serialize as hex strings so they can key JSON maps.

use crate::errors::CommitmentError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A 32-byte digest: commitment, hash, or mapping key
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest([u8; 32]);

impl Digest {
    /// The all-zero digest, used as the "unset" sentinel in mappings
    pub const ZERO: Digest = Digest([0u8; 32]);

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Whether this is the zero sentinel
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Create from hex string
    pub fn from_hex(s: &str) -> Result<Self, CommitmentError> {
        decode_hex32(s).map(Self)
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // First 8 hex chars are enough to tell entries apart in logs
        write!(f, "{}", &self.to_hex()[..8])
    }
}

/// A 32-byte scalar: blinding factor or edition value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Scalar([u8; 32]);

impl Scalar {
    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Create from a small integer (low 8 bytes, little-endian)
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&value.to_le_bytes());
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Create from hex string
    pub fn from_hex(s: &str) -> Result<Self, CommitmentError> {
        decode_hex32(s).map(Self)
    }
}

/// A ledger identity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Address([u8; 32]);

impl Address {
    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Create from hex string
    pub fn from_hex(s: &str) -> Result<Self, CommitmentError> {
        decode_hex32(s).map(Self)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.to_hex()[..8])
    }
}

fn decode_hex32(s: &str) -> Result<[u8; 32], CommitmentError> {
    let bytes = hex::decode(s).map_err(|e| CommitmentError::InvalidHex(e.to_string()))?;
    if bytes.len() != 32 {
        return Err(CommitmentError::InvalidLength(bytes.len()));
    }
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&bytes);
    Ok(arr)
}

macro_rules! impl_hex_serde {
    ($ty:ident) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                $ty::from_hex(&s).map_err(D::Error::custom)
            }
        }
    };
}

impl_hex_serde!(Digest);
impl_hex_serde!(Scalar);
impl_hex_serde!(Address);
