//! Tests for order-0 entropy over frequency tables

#[cfg(test)]
mod tests {
    use pixel_entropy::math::entropy::{round_bits, shannon_bits_per_symbol, total_bits};

    // Tests an empty table carries no information
    // Verified by dividing by a zero total
    #[test]
    fn test_empty_table() {
        assert!(shannon_bits_per_symbol(&[], 0).abs() < f64::EPSILON);
        assert_eq!(total_bits(&[0, 0, 0], 0), 0);
    }

    // Tests a single occupied bucket has zero entropy
    // Verified by counting empty buckets as probability one
    #[test]
    fn test_single_bucket_is_zero() {
        assert!(shannon_bits_per_symbol(&[0, 0, 42], 42).abs() < f64::EPSILON);
        assert_eq!(total_bits(&[0, 0, 42], 42), 0);
    }

    // Tests two equally likely buckets cost one bit each
    // Verified by using the natural logarithm
    #[test]
    fn test_two_equal_buckets() {
        let bits = shannon_bits_per_symbol(&[8, 0, 8], 16);
        assert!((bits - 1.0).abs() < 1e-12);
        assert_eq!(total_bits(&[8, 0, 8], 16), 16);
    }

    // Tests uniform distributions approach log2(N) bits per symbol
    // Verified by omitting the probability factor
    #[test]
    fn test_uniform_distribution() {
        let counts = [5u64; 8];
        let bits = shannon_bits_per_symbol(&counts, 40);
        assert!((bits - 3.0).abs() < 1e-12);
        assert_eq!(total_bits(&counts, 40), 120);
    }

    // Tests the total is rounded to the nearest bit
    // Verified by truncating the product
    #[test]
    fn test_total_bits_rounding() {
        // 1:3 split carries 0.811278 bits per symbol
        let bits = shannon_bits_per_symbol(&[3, 1], 4);
        assert!((bits - 0.811_278_124_459_132_8).abs() < 1e-12);
        assert_eq!(total_bits(&[3, 1], 4), 3);
        // 1:7 split carries 0.543564 bits per symbol, 4.35 in total
        assert_eq!(total_bits(&[7, 1], 8), 4);
    }

    // Tests exact halves round to the even neighbour like the luma conversion
    // Verified by rounding halves away from zero
    #[test]
    fn test_round_bits_ties_to_even() {
        assert_eq!(round_bits(2.5), 2);
        assert_eq!(round_bits(3.5), 4);
        assert_eq!(round_bits(3.4), 3);
        assert_eq!(round_bits(-1e-12), 0);
    }

    // Tests counts from several buckets collections add up
    // Verified by only reading the first collection
    #[test]
    fn test_chained_counts() {
        let dense = [8u64, 0];
        let sparse = [8u64];
        assert_eq!(total_bits(dense.iter().chain(sparse.iter()), 16), 16);
    }
}
