pub mod decoder;
pub mod encoder;

pub use decoder::*;
pub use encoder::*;

use crate::error::Result;
use crate::style::Style;

/// Encode a hex payload. Surrounding whitespace is ignored.
pub fn encode_hex(payload_hex: &str, style: Style) -> Result<String> {
    let data = hex::decode(payload_hex.trim())?;
    Ok(encode(&data, style))
}

/// Decode bytewords text and render the payload as lowercase hex
pub fn decode_to_hex(text: &str, style: Style) -> Result<String> {
    decode(text, style).map(hex::encode)
}

/// Encode with the style given by name (`standard`, `uri`, `minimal`)
pub fn encode_with_style_name(data: &[u8], style: &str) -> Result<String> {
    Ok(encode(data, style.parse()?))
}

/// Decode with the style given by name (`standard`, `uri`, `minimal`)
pub fn decode_with_style_name(text: &str, style: &str) -> Result<Vec<u8>> {
    decode(text, style.parse()?)
}
