//! Serialized size estimation.

use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeEstimate {
    /// Length of the compact JSON text in UTF-16 code units.
    pub utf16_units: usize,
    /// Length of the same text encoded as UTF-8.
    pub utf8_bytes: usize,
}

/// Serializes `value` to compact JSON and returns the length of that text.
///
/// Despite the name this is a *character-length estimate*: the length is
/// counted in UTF-16 code units, not in encoded bytes. For ASCII-only output
/// the two agree; any non-ASCII character makes the result smaller than the
/// UTF-8 byte count. Use [`estimate`] when the real byte count is needed.
///
/// Serializer failures (non-string map keys, a `Serialize` impl that errors)
/// are returned unchanged as `TextKitError::SerializationError`.
///
/// ```
/// use small_textkit::size_bytes;
/// use serde_json::json;
///
/// assert_eq!(size_bytes(&json!([1, 2, 3])).unwrap(), 7);
/// assert_eq!(size_bytes(&json!(null)).unwrap(), 4);
/// ```
pub fn size_bytes<T: Serialize + ?Sized>(value: &T) -> Result<usize> {
    Ok(estimate(value)?.utf16_units)
}

/// Like [`size_bytes`], but also reports the UTF-8 byte length of the
/// serialized text.
pub fn estimate<T: Serialize + ?Sized>(value: &T) -> Result<SizeEstimate> {
    let text = serde_json::to_string(value).inspect_err(|e| {
        tracing::debug!("Value could not be serialized: {}", e);
    })?;

    let estimate = SizeEstimate {
        utf16_units: text.encode_utf16().count(),
        utf8_bytes: text.len(),
    };
    tracing::trace!(
        "Serialized size: {} UTF-16 units, {} bytes",
        estimate.utf16_units,
        estimate.utf8_bytes
    );

    Ok(estimate)
}
