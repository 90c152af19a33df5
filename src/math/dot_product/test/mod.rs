//! Tests for the dot product kernel contract.

#[cfg(test)]
mod tests {
    use crate::math::dot_product::code::*;
    use crate::utils::bench::SeededRng;

    #[test]
    fn test_original_basic() {
        let a = [1, 2, 3, 4];
        let b = [5, 6, 7, 8];
        // 1*5 + 2*6 + 3*7 + 4*8 = 5 + 12 + 21 + 32 = 70
        assert_eq!(dot_product_original(&a, &b), 70);
    }

    #[test]
    fn test_original_empty() {
        let a: [i8; 0] = [];
        let b: [i8; 0] = [];
        assert_eq!(dot_product_original(&a, &b), 0);
    }

    #[test]
    fn test_original_single() {
        assert_eq!(dot_product_original(&[3], &[4]), 12);
    }

    #[test]
    fn test_original_negative_values() {
        let a = [-1, 2, -3];
        let b = [4, -5, 6];
        // -4 - 10 - 18 = -32
        assert_eq!(dot_product_original(&a, &b), -32);
    }

    #[test]
    fn test_demo_vectors() {
        // The two fixed 8-element vectors the demo loop reports on
        let a: [i8; 8] = [0, 0, 0, 0, 1, 1, 1, 1];
        let b: [i8; 8] = [8, 7, 6, 5, 4, 3, 2, 1];
        // 1*4 + 1*3 + 1*2 + 1*1
        assert_eq!(dot_product_original(&a, &b), 10);
    }

    #[test]
    fn test_ascending_descending() {
        let a: [i8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];
        let b: [i8; 8] = [8, 7, 6, 5, 4, 3, 2, 1];
        // 8 + 14 + 18 + 20 + 20 + 18 + 14 + 8
        assert_eq!(dot_product_original(&a, &b), 120);
    }

    #[test]
    fn test_zero_vector_annihilates() {
        let a = [0i8; 8];
        let b: [i8; 8] = [127, -128, 55, -1, 3, 99, -77, 12];
        assert_eq!(dot_product_original(&a, &b), 0);
    }

    #[test]
    fn test_sum_exceeds_narrow_accumulator() {
        // 8 * 100 * 100 = 80000: far outside i8 (and i16) range. An
        // implementation accumulating in 8 bits would wrap to garbage.
        let a = [100i8; 8];
        let b = [100i8; 8];
        assert_eq!(dot_product_original(&a, &b), 80_000);
    }

    #[test]
    fn test_extreme_values_do_not_wrap() {
        let a = [i8::MIN; 16];
        let b = [i8::MIN; 16];
        assert_eq!(dot_product_original(&a, &b), 16 * 128 * 128);

        let c = [i8::MAX; 16];
        assert_eq!(dot_product_original(&a, &c), 16 * -128 * 127);
    }

    #[test]
    fn test_commutative() {
        let mut rng = SeededRng::new(0xD07);
        let a: Vec<i8> = (0..33).map(|_| rng.next_i8()).collect();
        let b: Vec<i8> = (0..33).map(|_| rng.next_i8()).collect();

        assert_eq!(dot_product_original(&a, &b), dot_product_original(&b, &a));
    }

    #[test]
    fn test_scaling_is_linear() {
        // Keep operands small enough that k*a stays within i8
        let a: [i8; 8] = [1, -2, 3, -4, 5, -6, 7, -8];
        let b: [i8; 8] = [8, 7, 6, 5, 4, 3, 2, 1];
        let k: i8 = 3;

        let scaled: Vec<i8> = a.iter().map(|&x| x * k).collect();
        assert_eq!(
            dot_product_original(&scaled, &b),
            k as i32 * dot_product_original(&a, &b)
        );
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_length_mismatch_panics() {
        dot_product_original(&[1, 2, 3], &[1, 2]);
    }

    #[test]
    fn test_scalar_opt_matches_original_across_sizes() {
        let mut rng = SeededRng::new(42);
        for size in [0, 1, 2, 3, 4, 5, 7, 8, 15, 16, 17, 63, 64, 65, 1023] {
            let a: Vec<i8> = (0..size).map(|_| rng.next_i8()).collect();
            let b: Vec<i8> = (0..size).map(|_| rng.next_i8()).collect();

            assert_eq!(
                dot_product_scalar_opt(&a, &b),
                dot_product_original(&a, &b),
                "size {}",
                size
            );
        }
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn test_sse2_matches_original_across_sizes() {
        let mut rng = SeededRng::new(43);
        for size in [0, 1, 15, 16, 17, 31, 32, 33, 255, 1023] {
            let a: Vec<i8> = (0..size).map(|_| rng.next_i8()).collect();
            let b: Vec<i8> = (0..size).map(|_| rng.next_i8()).collect();

            assert_eq!(
                dot_product_x86_64_sse2(&a, &b),
                dot_product_original(&a, &b),
                "size {}",
                size
            );
        }
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn test_sse2_extreme_values() {
        // i8::MIN * i8::MIN stresses the sign-extension path
        let a = [i8::MIN; 33];
        let b = [i8::MIN; 33];
        assert_eq!(
            dot_product_x86_64_sse2(&a, &b),
            dot_product_original(&a, &b)
        );
    }

    // Variant cross-checking against randomized input is handled by the
    // generic verify() method via the registry.
}
