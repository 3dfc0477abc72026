use crate::checksum::{crc32, split_checksum};
use crate::error::{BytewordsError, Result};
use crate::lookup::ReverseIndex;
use crate::style::Style;
use crate::wordlist::{middle_letters, MINIMAL_WORD_LENGTH, WORD_LENGTH};

/// Decode a single token of `word_length` characters (4 for full words,
/// 2 for minimal codes) back to its byte value. Any other `word_length` is
/// rejected with `InvalidWordLength`.
///
/// Letters are matched case-insensitively. Full words are also checked
/// against the canonical spelling of their two middle letters; minimal codes
/// carry no such redundancy.
pub fn decode_word(token: &str, word_length: usize) -> Result<u8> {
    decode_token(token.as_bytes(), word_length)
}

/// Decode bytewords text in the given style, verify its trailing CRC-32 and
/// return the payload without the checksum.
///
/// Surrounding whitespace is ignored.
pub fn decode(text: &str, style: Style) -> Result<Vec<u8>> {
    let text = text.trim();
    let word_length = style.word_length();

    let buffer = match style.separator() {
        Some(separator) => text
            .split(separator)
            .map(|token| decode_token(token.as_bytes(), word_length))
            .collect::<Result<Vec<u8>>>(),
        None => text
            .as_bytes()
            .chunks(word_length)
            .map(|token| decode_token(token, word_length))
            .collect::<Result<Vec<u8>>>(),
    }
    .inspect_err(|e| tracing::debug!(style = %style, error = %e, "rejected bytewords"))?;

    let (body, trailer) =
        split_checksum(&buffer).ok_or(BytewordsError::InvalidDecodedLength(buffer.len()))?;

    let expected = crc32(body);
    let actual = u32::from_be_bytes(trailer);
    if expected != actual {
        tracing::debug!(style = %style, expected, actual, "bytewords checksum mismatch");
        return Err(BytewordsError::ChecksumMismatch { expected, actual });
    }

    tracing::trace!(style = %style, bytes = body.len(), "decoded bytewords");
    Ok(body.to_vec())
}

fn decode_token(token: &[u8], word_length: usize) -> Result<u8> {
    if word_length != WORD_LENGTH && word_length != MINIMAL_WORD_LENGTH {
        return Err(BytewordsError::InvalidWordLength {
            expected: WORD_LENGTH,
            found: token.len(),
        });
    }

    if token.len() != word_length {
        return Err(BytewordsError::InvalidWordLength {
            expected: word_length,
            found: token.len(),
        });
    }

    let first = token[0];
    let last = token[word_length - 1];
    let value = ReverseIndex::global()
        .lookup(first, last)
        .ok_or_else(|| BytewordsError::InvalidWord(lossy(token)))?;

    if word_length == WORD_LENGTH {
        let (c1, c2) = middle_letters(value);
        if token[1].to_ascii_lowercase() != c1 || token[2].to_ascii_lowercase() != c2 {
            return Err(BytewordsError::InvalidMiddleLetters(lossy(token)));
        }
    }

    Ok(value)
}

fn lossy(token: &[u8]) -> String {
    String::from_utf8_lossy(token).into_owned()
}
