use crate::codec::decode;
use crate::error::Result;
use crate::style::Style;
use std::path::Path;

/// Options for the decode command
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    pub style: Style,
}

/// Decode bytewords text and return the payload as hex
pub fn decode_text(text: &str, options: &DecodeOptions) -> Result<String> {
    Ok(hex::encode(decode(text, options.style)?))
}

/// Decode bytewords text and write the raw payload to a file.
/// Returns the number of bytes written.
pub fn decode_to_file(text: &str, output_path: &Path, options: &DecodeOptions) -> Result<usize> {
    let data = decode(text, options.style)?;
    std::fs::write(output_path, &data)?;
    tracing::info!(path = %output_path.display(), bytes = data.len(), "wrote decoded payload");
    Ok(data.len())
}

/// Read bytewords text from a file
pub fn read_text(input_path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(input_path)?)
}
