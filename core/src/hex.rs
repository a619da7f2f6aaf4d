//! IEEE-754 binary32 to hex text
//!
//! A value is rendered as the big-endian bytes of its bit pattern, two
//! lowercase digits per byte, so `1.0` becomes `3f800000`. Bits go through
//! `f32::to_bits` unchanged: NaN payloads, signed zeros, subnormals and
//! infinities all survive, and the consumer's parser sees the exact value.

use num_complex::Complex32;

/// Length of one encoded value
pub const HEX_DIGITS: usize = 8;

/// Zero-padded hex of the bit pattern, most significant digit first
pub fn encode_f32(value: f32) -> String {
    format!("{:08x}", value.to_bits())
}

/// `"<re> <im>"` without the line terminator
pub fn encode_complex(sample: Complex32) -> String {
    format!("{} {}", encode_f32(sample.re), encode_f32(sample.im))
}
