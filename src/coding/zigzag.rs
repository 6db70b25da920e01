//! Zigzag mapping between signed residuals and non-negative codes
//!
//! Interleaves sign and magnitude so that residuals near zero land on small
//! codes: 0, -1, 1, -2, 2, ... map to 0, 1, 2, 3, 4, ...

/// Map a signed residual to its non-negative code
///
/// Non-negative values map to even codes (`2v`), negative values to odd
/// codes (`-2v - 1`). Defined for the whole `i64` range, `i64::MIN` included.
pub const fn zigzag_encode(value: i64) -> u64 {
    // Arithmetic shift smears the sign bit, the left shift drops it
    ((value << 1) ^ (value >> 63)) as u64
}

/// Recover the signed residual from its code
pub const fn zigzag_decode(code: u64) -> i64 {
    ((code >> 1) as i64) ^ -((code & 1) as i64)
}
