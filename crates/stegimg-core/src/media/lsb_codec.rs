//! LSB codec for the flat pixel buffer
//!
//! Layout, in pixel triples of 3 channel bytes each:
//! - triples `0..32` carry the message length in bytes. Channel byte `n` of that range
//!   holds bit `n` of the length as `u32` (bit 0 first). Bytes past bit 31 carry a 0.
//! - message byte `i` lives in the 8 triples starting at `32 + i * 8`. Triple `j` holds
//!   bit `j` of the byte (bit 0 first) redundantly in all three channels.
//!
//! Only the least significant bit of a touched byte changes.

use log::debug;

use super::capacity::{required_pixel_bytes, CHANNELS, LENGTH_PREFIX_TRIPLES, TRIPLES_PER_BYTE};
use crate::error::StegImgError;
use crate::result::Result;

const PREFIX_BYTES: usize = LENGTH_PREFIX_TRIPLES * CHANNELS;
const BYTES_PER_MESSAGE_BYTE: usize = TRIPLES_PER_BYTE * CHANNELS;

pub trait HideBit {
    fn hide_bit(self, bit: bool);
}

impl HideBit for &mut u8 {
    fn hide_bit(self, bit: bool) {
        *self = (*self & (u8::MAX - 1)) | u8::from(bit);
    }
}

/// Hides the length prefixed `message` in the LSBs of `pixels`.
///
/// Fails with [`StegImgError::CapacityExceeded`] before touching any byte
/// when the layout does not fit into `pixels`.
pub fn hide(pixels: &mut [u8], message: &[u8]) -> Result<()> {
    let available = pixels.len();
    let required = required_pixel_bytes(message.len());
    let length = u32::try_from(message.len()).map_err(|_| StegImgError::CapacityExceeded {
        required,
        available,
    })?;
    if available < required {
        return Err(StegImgError::CapacityExceeded {
            required,
            available,
        });
    }

    let (prefix, body) = pixels.split_at_mut(PREFIX_BYTES);
    for (i, channel) in prefix.iter_mut().enumerate() {
        let bit = length
            .checked_shr(i as u32)
            .map_or(false, |rest| rest & 1 == 1);
        channel.hide_bit(bit);
    }

    for (byte, slots) in message
        .iter()
        .zip(body.chunks_exact_mut(BYTES_PER_MESSAGE_BYTE))
    {
        for (j, triple) in slots.chunks_exact_mut(CHANNELS).enumerate() {
            let bit = (byte >> j) & 1 == 1;
            for channel in triple {
                channel.hide_bit(bit);
            }
        }
    }

    debug!("hid {length} bytes in {required} of {available} pixel bytes");
    Ok(())
}

/// Reads the length prefix and the message that follows it out of `pixels`.
///
/// A length that points past the end of the buffer, as found in images that carry no
/// message at all, fails with [`StegImgError::DecodeOutOfRange`].
pub fn unveil(pixels: &[u8]) -> Result<Vec<u8>> {
    let Some(prefix) = pixels.get(..PREFIX_BYTES) else {
        return Err(StegImgError::DecodeOutOfRange {
            length: 0,
            required: PREFIX_BYTES as u64,
            available: pixels.len(),
        });
    };
    let length = prefix
        .iter()
        .take(u32::BITS as usize)
        .enumerate()
        .fold(0u32, |acc, (i, channel)| acc | (u32::from(channel & 1) << i));

    let required = (LENGTH_PREFIX_TRIPLES as u64 + u64::from(length) * TRIPLES_PER_BYTE as u64)
        * CHANNELS as u64;
    if required > pixels.len() as u64 {
        return Err(StegImgError::DecodeOutOfRange {
            length,
            required,
            available: pixels.len(),
        });
    }
    debug!("unveiling {length} bytes");

    let message = pixels[PREFIX_BYTES..required as usize]
        .chunks_exact(BYTES_PER_MESSAGE_BYTE)
        .map(|slots| {
            slots
                .chunks_exact(CHANNELS)
                .enumerate()
                .fold(0u8, |byte, (j, triple)| {
                    // all channels carry the bit, the last one read decides
                    byte | ((triple[CHANNELS - 1] & 1) << j)
                })
        })
        .collect();

    Ok(message)
}
