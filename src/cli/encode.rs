use crate::codec::{encode, encode_hex};
use crate::error::Result;
use crate::style::Style;
use std::path::Path;

/// Options for the encode command
#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    pub style: Style,
}

/// Encode a hex payload given on the command line
pub fn encode_hex_payload(payload_hex: &str, options: &EncodeOptions) -> Result<String> {
    encode_hex(payload_hex, options.style)
}

/// Encode the raw bytes of a file
pub fn encode_file(input_path: &Path, options: &EncodeOptions) -> Result<String> {
    let data = std::fs::read(input_path)?;
    tracing::info!(path = %input_path.display(), bytes = data.len(), "encoding file");
    Ok(encode(&data, options.style))
}
