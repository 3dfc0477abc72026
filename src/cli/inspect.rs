use crate::codec::decode;
use crate::error::Result;
use crate::shard::ShardInfo;
use crate::style::Style;

/// Options for the inspect command
#[derive(Debug, Clone, Default)]
pub struct InspectOptions {
    pub style: Style,
    pub json: bool,
}

/// Decode a bytewords-encoded shard and describe its header
pub fn inspect_shard(text: &str, options: &InspectOptions) -> Result<String> {
    let bytes = decode(text, options.style)?;
    let info = ShardInfo::parse(&bytes)?;

    if options.json {
        let mut output = serde_json::to_string_pretty(&info)?;
        output.push('\n');
        Ok(output)
    } else {
        let mut output = String::new();
        output.push_str("SSKR Shard\n");
        output.push_str("==========\n\n");
        output.push_str(&format!("Style: {}\n", options.style));
        output.push_str(&format!("Shard size: {} bytes\n", bytes.len()));
        output.push_str(&info.to_string());
        Ok(output)
    }
}
