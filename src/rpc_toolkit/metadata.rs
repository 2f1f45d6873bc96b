//! `state_getMetadata` hands back hex encoded, SCALE encoded metadata. Decoding all of it
//! needs the runtime's type information, but the prefix is always the same: the 4 bytes
//! `"meta"` followed by a single version byte. That's enough to say what we've got.

use parity_scale_codec::Decode;
use thiserror::Error;

/// `"meta"` read as a little endian u32.
pub const METADATA_MAGIC: u32 = 0x6174_656d;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("metadata is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("metadata prefix could not be decoded: {0}")]
    Scale(#[from] parity_scale_codec::Error),

    #[error("unexpected metadata magic number {0:#010x}")]
    BadMagic(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataSummary {
    /// Size of the SCALE encoded metadata.
    pub len: usize,
    pub version: u8,
}

pub fn summarize(metadata_hex: &str) -> Result<MetadataSummary, MetadataError> {
    let bytes = hex::decode(metadata_hex.trim_start_matches("0x"))?;
    let (magic, version) = <(u32, u8)>::decode(&mut bytes.as_slice())?;
    if magic != METADATA_MAGIC {
        return Err(MetadataError::BadMagic(magic));
    }
    Ok(MetadataSummary {
        len: bytes.len(),
        version,
    })
}
