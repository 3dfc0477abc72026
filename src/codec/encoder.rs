use crate::checksum::append_checksum;
use crate::style::Style;
use crate::wordlist::{minimal_word_at, word_at};

/// Encode bytes as bytewords in the given style.
/// The CRC-32 of `data` is appended before mapping, so the output carries
/// `data.len() + 4` tokens.
pub fn encode(data: &[u8], style: Style) -> String {
    let buffer = append_checksum(data);

    let encoded = match style.separator() {
        Some(separator) => join_words(&buffer, separator),
        None => concat_minimal(&buffer),
    };

    tracing::trace!(style = %style, bytes = data.len(), "encoded bytewords");
    encoded
}

fn join_words(buffer: &[u8], separator: char) -> String {
    let mut result = String::with_capacity(buffer.len() * 5);
    for (i, &byte) in buffer.iter().enumerate() {
        if i > 0 {
            result.push(separator);
        }
        result.push_str(word_at(byte));
    }
    result
}

fn concat_minimal(buffer: &[u8]) -> String {
    buffer.iter().map(|&byte| minimal_word_at(byte)).collect()
}
