use log::warn;

use super::codec_options::CapacityPolicy;
use crate::error::StegImgError;
use crate::result::Result;

/// color channels per pixel triple
pub const CHANNELS: usize = 3;
/// pixel triples carrying the 32 bit length prefix
pub const LENGTH_PREFIX_TRIPLES: usize = 32;
/// pixel triples carrying one message byte
pub const TRIPLES_PER_BYTE: usize = 8;

/// pixel bytes the compatible check accounts for: 4 for the length plus 8 per message byte
pub fn compatible_required(message_len: usize) -> usize {
    message_len.saturating_mul(8).saturating_add(4)
}

/// pixel bytes a hide operation really touches: 96 for the length plus 24 per message byte
pub fn required_pixel_bytes(message_len: usize) -> usize {
    message_len
        .saturating_mul(TRIPLES_PER_BYTE)
        .saturating_add(LENGTH_PREFIX_TRIPLES)
        .saturating_mul(CHANNELS)
}

/// smallest pixel buffer that passes the check of `policy` for a message of `message_len` bytes
pub fn minimum_pixel_bytes(message_len: usize, policy: CapacityPolicy) -> usize {
    match policy {
        // the compatible check needs strictly more than 4 + 8n
        CapacityPolicy::Compatible => compatible_required(message_len).saturating_add(1),
        CapacityPolicy::Strict => required_pixel_bytes(message_len),
    }
}

/// Checks if a message of `message_len` bytes fits into `available` pixel bytes.
///
/// Logs the required and available byte counts when it does not.
pub fn fits(available: usize, message_len: usize, policy: CapacityPolicy) -> bool {
    let required = minimum_pixel_bytes(message_len, policy);
    let ok = available >= required;
    if !ok {
        warn!("Message too long: needs {required} pixel bytes, {available} available");
    }
    ok
}

/// [`fits`] as a `Result`, failing with [`StegImgError::CapacityExceeded`]
pub fn ensure_fits(available: usize, message_len: usize, policy: CapacityPolicy) -> Result<()> {
    if fits(available, message_len, policy) {
        return Ok(());
    }
    Err(StegImgError::CapacityExceeded {
        required: minimum_pixel_bytes(message_len, policy),
        available,
    })
}
