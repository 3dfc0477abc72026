//! Read-only view of an SSKR shard header.
//!
//! Shards are produced by an external secret-sharing backend and are opaque
//! to the codec. This module only splits the fixed 5-byte header into its
//! fields so a decoded shard can be identified; no parameter is validated.
//!
//! Layout (nibbles in big-endian order):
//!
//! ```text
//! [identifier: 16][group_threshold-1: 4][group_count-1: 4]
//! [group_index: 4][member_threshold-1: 4][reserved: 4][member_index: 4][share value...]
//! ```

use crate::error::{BytewordsError, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// Header size in bytes
pub const HEADER_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShardInfo {
    pub identifier: u16,
    pub group_threshold: u8,
    pub group_count: u8,
    pub group_index: u8,
    pub member_threshold: u8,
    pub reserved: u8,
    pub member_index: u8,
    #[serde(serialize_with = "serialize_hex")]
    pub share_value: Vec<u8>,
}

impl ShardInfo {
    /// Split raw shard bytes into header fields and share value
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(BytewordsError::InvalidShard(format!(
                "{} bytes is shorter than the {}-byte header",
                bytes.len(),
                HEADER_SIZE
            )));
        }

        let high = |b: u8| b >> 4;
        let low = |b: u8| b & 0x0F;

        Ok(Self {
            identifier: u16::from_be_bytes([bytes[0], bytes[1]]),
            group_threshold: high(bytes[2]) + 1,
            group_count: low(bytes[2]) + 1,
            group_index: high(bytes[3]),
            member_threshold: low(bytes[3]) + 1,
            reserved: high(bytes[4]),
            member_index: low(bytes[4]),
            share_value: bytes[HEADER_SIZE..].to_vec(),
        })
    }

    /// Parse a shard carried as a hex string
    pub fn parse_hex(shard_hex: &str) -> Result<Self> {
        Self::parse(&hex::decode(shard_hex.trim())?)
    }
}

impl fmt::Display for ShardInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Identifier: {:04x}", self.identifier)?;
        writeln!(f, "Group threshold: {}", self.group_threshold)?;
        writeln!(f, "Group count: {}", self.group_count)?;
        writeln!(f, "Group index: {}", self.group_index)?;
        writeln!(f, "Member threshold: {}", self.member_threshold)?;
        writeln!(f, "Reserved: {}", self.reserved)?;
        writeln!(f, "Member index: {}", self.member_index)?;
        writeln!(f, "Share value: {}", hex::encode(&self.share_value))
    }
}

fn serialize_hex<S, T>(bytes: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
    T: AsRef<[u8]>,
{
    serializer.serialize_str(&hex::encode(bytes.as_ref()))
}
