//! Signed Q-format conversion for the compact version 1 slots.
//!
//! A value in Qm.n is stored as `round(value * 2^n)` in a signed integer of
//! `m + n` bits. Conversion fails instead of saturating when the scaled value
//! does not fit.

fn scale(frac_bits: u32) -> f64 {
    (1u64 << frac_bits) as f64
}

fn scaled(value: f64, frac_bits: u32, min: f64, max: f64) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    let raw = (value * scale(frac_bits)).round();
    if raw < min || raw > max {
        return None;
    }
    Some(raw)
}

pub fn to_fixed_i32(value: f64, frac_bits: u32) -> Option<i32> {
    scaled(value, frac_bits, i32::MIN as f64, i32::MAX as f64).map(|raw| raw as i32)
}

pub fn to_fixed_i16(value: f64, frac_bits: u32) -> Option<i16> {
    scaled(value, frac_bits, i16::MIN as f64, i16::MAX as f64).map(|raw| raw as i16)
}

pub fn from_fixed_i32(raw: i32, frac_bits: u32) -> f64 {
    raw as f64 / scale(frac_bits)
}

pub fn from_fixed_i16(raw: i16, frac_bits: u32) -> f64 {
    raw as f64 / scale(frac_bits)
}
