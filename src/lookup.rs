//! Reverse lookup from a word's first and last letters to its byte value.
//!
//! Every word in the vocabulary has a unique (first, last) letter pair, so a
//! 26x26 table indexed by those two letters resolves any token in one probe.
//! The table is derived from [`WORDS`](crate::wordlist::WORDS) on first use
//! and shared for the rest of the process.

use crate::wordlist::{end_letters, WORD_COUNT};
use std::sync::OnceLock;

/// Letters per axis of the table
pub const DIMENSION: usize = 26;

/// Dense (first, last) -> byte table with absent cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseIndex {
    cells: [Option<u8>; DIMENSION * DIMENSION],
}

impl ReverseIndex {
    /// Build the table from the wordlist
    pub fn build() -> Self {
        let mut cells = [None; DIMENSION * DIMENSION];

        for value in 0..WORD_COUNT {
            let byte = value as u8;
            let (first, last) = end_letters(byte);
            let offset = Self::offset((first - b'a') as usize, (last - b'a') as usize);
            debug_assert!(cells[offset].is_none(), "duplicate letter pair for byte {byte}");
            cells[offset] = Some(byte);
        }

        Self { cells }
    }

    /// Process-wide table, built on first call
    pub fn global() -> &'static ReverseIndex {
        static INDEX: OnceLock<ReverseIndex> = OnceLock::new();
        INDEX.get_or_init(|| {
            tracing::debug!("building byteword reverse index");
            Self::build()
        })
    }

    /// Resolve a (first, last) letter pair. Either letter may be upper case.
    /// Returns None for non-letters and for pairs no word uses.
    pub fn lookup(&self, first: u8, last: u8) -> Option<u8> {
        let x = Self::coordinate(first)?;
        let y = Self::coordinate(last)?;
        self.cells[Self::offset(x, y)]
    }

    #[cfg(test)]
    fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    fn coordinate(letter: u8) -> Option<usize> {
        let lower = letter.to_ascii_lowercase();
        lower.is_ascii_lowercase().then(|| (lower - b'a') as usize)
    }

    fn offset(x: usize, y: usize) -> usize {
        y * DIMENSION + x
    }
}
