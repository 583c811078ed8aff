//! Payload value encodings
//!
//! The display exchanges big-endian integers. Physical quantities use a
//! per-VP fixed-point scale: positions are ×10 (one decimal), probe
//! offsets ×1000 (three decimals), PID coefficients ×100. The scale must
//! be symmetric between the push and write direction of the same quantity
//! so that values round-trip within one fixed-point unit.

use heapless::Vec;

/// Largest payload any descriptor may declare, in bytes.
pub const MAX_PAYLOAD_SIZE: usize = 32;

/// Bounded buffer holding one outbound payload.
pub type PayloadBuf = Vec<u8, MAX_PAYLOAD_SIZE>;

/// Encode a quantity as a big-endian scaled `i16`.
///
/// Rounds to the nearest fixed-point unit and saturates at the `i16`
/// range.
pub fn encode_scaled_i16(value: f32, scale: i32) -> [u8; 2] {
    let scaled = value * scale as f32;
    let rounded = if scaled >= 0.0 {
        scaled + 0.5
    } else {
        scaled - 0.5
    };
    let clamped = if rounded > i16::MAX as f32 {
        i16::MAX
    } else if rounded < i16::MIN as f32 {
        i16::MIN
    } else {
        rounded as i16
    };
    clamped.to_be_bytes()
}

/// Decode a big-endian scaled `i16` back to the firmware's units.
///
/// Returns `None` unless given exactly two bytes.
pub fn decode_scaled_i16(payload: &[u8], scale: i32) -> Option<f32> {
    let raw: [u8; 2] = payload.try_into().ok()?;
    Some(i16::from_be_bytes(raw) as f32 / scale as f32)
}

/// Encode an unscaled value as a big-endian `u16`.
pub fn encode_u16(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}

/// Decode a big-endian `u16`.
///
/// Returns `None` unless given exactly two bytes.
pub fn decode_u16(payload: &[u8]) -> Option<u16> {
    let raw: [u8; 2] = payload.try_into().ok()?;
    Some(u16::from_be_bytes(raw))
}

/// Append `text` to `out` as a blank-padded span of exactly `len` bytes.
///
/// Over-long text is truncated. String VPs are push-only; the display
/// never edits firmware strings.
pub fn encode_padded_str(text: &str, len: usize, out: &mut PayloadBuf) {
    let bytes = text.as_bytes();
    for i in 0..len.min(MAX_PAYLOAD_SIZE) {
        let b = if i < bytes.len() { bytes[i] } else { b' ' };
        // Cannot fail: i is bounded by the buffer capacity
        let _ = out.push(b);
    }
}
