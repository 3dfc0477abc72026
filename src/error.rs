use thiserror::Error;

#[derive(Error, Debug)]
pub enum BytewordsError {
    #[error("Invalid style: {0}. Must be standard, uri, or minimal")]
    InvalidStyle(String),

    #[error("Invalid word length: expected {expected} characters, found {found}")]
    InvalidWordLength { expected: usize, found: usize },

    #[error("Invalid word: {0:?}")]
    InvalidWord(String),

    #[error("Invalid middle letters in word: {0:?}")]
    InvalidMiddleLetters(String),

    #[error("Invalid decoded length: {0} bytes cannot hold a checksum")]
    InvalidDecodedLength(usize),

    #[error("Checksum mismatch: expected {expected:#010x}, got {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    #[error("Invalid hex payload: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Invalid shard: {0}")]
    InvalidShard(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BytewordsError>;
