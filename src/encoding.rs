use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Blob bytes rendered for a JSON payload, tagged with how they were encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBlob {
    pub encoding: &'static str,
    pub content: String,
}

pub trait BlobEncoder: Send + Sync {
    fn encode(&self, data: &[u8]) -> EncodedBlob;
}

/// UTF-8 text is passed through as-is, anything else goes out as base64.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultBlobEncoder;

impl BlobEncoder for DefaultBlobEncoder {
    fn encode(&self, data: &[u8]) -> EncodedBlob {
        match std::str::from_utf8(data) {
            Ok(text) => EncodedBlob {
                encoding: "utf-8",
                content: text.to_string(),
            },
            Err(_) => EncodedBlob {
                encoding: "base64",
                content: STANDARD.encode(data),
            },
        }
    }
}
