//! Original (reference) implementation of the integer dot product.
//!
//! This is a clean, idiomatic Rust implementation that serves as the
//! baseline for correctness and performance comparison.

/// Compute the dot product of two signed 8-bit vectors.
///
/// Products are widened to `i32` before accumulation, so the sum is exact
/// for any input up to 65536 elements (|sum| ≤ len · 2^14).
///
/// # Arguments
/// * `a` - First vector
/// * `b` - Second vector
///
/// # Panics
/// Panics if the vectors have different lengths.
///
/// # Example
/// ```
/// use vecdot_demo::math::dot_product::dot_product_original;
///
/// let a = [1, 2, 3];
/// let b = [4, 5, 6];
/// assert_eq!(dot_product_original(&a, &b), 32);
/// ```
pub fn dot_product_original(a: &[i8], b: &[i8]) -> i32 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");

    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| x as i32 * y as i32)
        .sum()
}
