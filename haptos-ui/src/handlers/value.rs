//! Fixed-point and string value helpers
//!
//! Numeric VPs carry big-endian integers with a per-VP scale; the scale is
//! part of each handler's contract and must match between the push and
//! write direction of the same quantity.

use haptos_core::{value, PayloadBuf};

use crate::vp::VpDescriptor;

/// Append a quantity as a big-endian scaled `i16`.
pub fn push_scaled(quantity: f32, scale: i32, out: &mut PayloadBuf) {
    let _ = out.extend_from_slice(&value::encode_scaled_i16(quantity, scale));
}

/// Decode a written payload back to the firmware's units.
pub fn write_scaled(payload: &[u8], scale: i32) -> Option<f32> {
    value::decode_scaled_i16(payload, scale)
}

/// Append an unscaled big-endian `u16`.
pub fn push_u16(raw: u16, out: &mut PayloadBuf) {
    let _ = out.extend_from_slice(&value::encode_u16(raw));
}

/// Append text as a blank-padded span of exactly the descriptor's
/// declared size. String VPs are push-only.
pub fn push_text(desc: &VpDescriptor, text: &str, out: &mut PayloadBuf) {
    value::encode_padded_str(text, desc.size as usize, out);
}
