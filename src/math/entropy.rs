//! Order-0 empirical Shannon entropy over occurrence counts

/// Average information content in bits per symbol
///
/// Each non-empty bucket with count `c` contributes `-(c/total) * log2(c/total)`.
/// Returns zero when `total` is zero.
pub fn shannon_bits_per_symbol<'a>(counts: impl IntoIterator<Item = &'a u64>, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    counts
        .into_iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let probability = count as f64 / total;
            -probability * probability.log2()
        })
        .sum()
}

/// Total information content in bits, rounded to the nearest integer
///
/// Idealized lower bound for an optimal order-0 code over the observed
/// alphabet.
pub fn total_bits<'a>(counts: impl IntoIterator<Item = &'a u64>, total: u64) -> u64 {
    round_bits(shannon_bits_per_symbol(counts, total) * total as f64)
}

/// Round a bit count to the nearest integer, halves to even
pub fn round_bits(bits: f64) -> u64 {
    // Summation error can push a zero-entropy stream just below zero
    bits.max(0.0).round_ties_even() as u64
}
