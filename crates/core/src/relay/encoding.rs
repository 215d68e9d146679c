//! Pure helpers for preparing attachments for transport.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Encodes raw attachment bytes as standard padded base64.
#[must_use]
pub fn encode_attachment(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Derives the display filename from an uploaded storage key.
///
/// Upload keys carry a generated prefix before the first `-` (the form
/// prepends a timestamp segment); everything after it is the original
/// filename. Keys with no recoverable name fall back to `attachment`.
#[must_use]
pub fn display_filename(key: &str) -> String {
    let name = key.split('-').skip(1).collect::<Vec<_>>().join("-");
    if name.is_empty() {
        "attachment".to_string()
    } else {
        name
    }
}
