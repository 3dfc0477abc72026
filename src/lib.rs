//! Bytewords - human-transcribable encoding for binary data
//!
//! Every byte value maps to one word from a fixed 256-word vocabulary. The
//! first and last letters of each word are unique across the list, so a word
//! can also be written as a 2-letter minimal code. A CRC-32 of the payload is
//! appended before mapping, so transcription errors are caught on decode.
//!
//! ## Encoding
//!
//! ```text
//! Input → Append CRC-32 → Map bytes to words → Join per style → Output
//! ```
//!
//! ## Styles
//!
//! - **standard**: `able tied also webs lung`
//! - **uri**: `able-tied-also-webs-lung`
//! - **minimal**: `aetdaowslg`
//!
//! ## Example
//!
//! ```
//! use bytewords::{decode, encode, Style};
//!
//! let text = encode(&[0x00], Style::Standard);
//! assert_eq!(text, "able tied also webs lung");
//!
//! let data = decode("aetdaowslg", Style::Minimal).unwrap();
//! assert_eq!(data, vec![0x00]);
//! ```

pub mod checksum;
pub mod cli;
pub mod codec;
pub mod error;
pub mod lookup;
pub mod shard;
pub mod style;
pub mod wordlist;

pub use codec::{decode, decode_to_hex, decode_word, encode, encode_hex};
pub use error::{BytewordsError, Result};
pub use shard::ShardInfo;
pub use style::Style;
