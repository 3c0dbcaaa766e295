
use anyhow::Result;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as Base64;

// the resize service expects standard base64 with padding, no line wrapping
pub fn to_base64(data: &[u8]) -> String {
    Base64.encode(data)
}

pub fn from_base64(text: &str) -> Result<Vec<u8>> {
    let decoded = Base64.decode(text)?;
    Ok(decoded)
}
