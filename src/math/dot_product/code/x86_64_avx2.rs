//! x86_64 AVX2 SIMD implementation.
//!
//! AVX2 provides VPMOVSXBW for direct i8 to i16 sign extension and 256-bit
//! PMADDWD, halving the instruction count of the SSE2 version.

use std::arch::x86_64::*;

/// Compute the dot product using AVX2 SIMD instructions.
///
/// Processes 16 i8 values per iteration, widened into a single 256-bit
/// register of i16 lanes.
///
/// # Panics
/// Panics if the vectors have different lengths.
pub fn dot_product_x86_64_avx2(a: &[i8], b: &[i8]) -> i32 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");

    let len = a.len();

    if len < 16 {
        return a
            .iter()
            .zip(b.iter())
            .map(|(&x, &y)| x as i32 * y as i32)
            .sum();
    }

    unsafe {
        let chunks = len / 16;
        let remainder = len % 16;

        let mut acc = _mm256_setzero_si256();

        for i in 0..chunks {
            let idx = i * 16;
            let a_vec = _mm_loadu_si128(a.as_ptr().add(idx) as *const __m128i);
            let b_vec = _mm_loadu_si128(b.as_ptr().add(idx) as *const __m128i);

            let a_wide = _mm256_cvtepi8_epi16(a_vec);
            let b_wide = _mm256_cvtepi8_epi16(b_vec);

            acc = _mm256_add_epi32(acc, _mm256_madd_epi16(a_wide, b_wide));
        }

        // Horizontal sum of the 8 i32 lanes
        let lo = _mm256_castsi256_si128(acc);
        let hi = _mm256_extracti128_si256::<1>(acc);
        let sum4 = _mm_add_epi32(lo, hi);
        let hi64 = _mm_unpackhi_epi64(sum4, sum4);
        let sum2 = _mm_add_epi32(sum4, hi64);
        let hi32 = _mm_shuffle_epi32::<0b01>(sum2);
        let sum1 = _mm_add_epi32(sum2, hi32);

        let mut result = _mm_cvtsi128_si32(sum1);

        // Handle remainder
        let base = chunks * 16;
        for i in 0..remainder {
            result += a[base + i] as i32 * b[base + i] as i32;
        }

        result
    }
}
