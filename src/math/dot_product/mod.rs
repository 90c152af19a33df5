//! # Dot Product Kernel
//!
//! The dot product (also known as scalar product) computes the sum of
//! products of corresponding elements in two vectors:
//!
//! `dot(a, b) = Σ(a[i] * b[i])`
//!
//! The operands are signed 8-bit integers, the accumulator is `i32`. An
//! 8-bit accumulator silently wraps for any nontrivial input, so every
//! variant widens before accumulating and the sum is exact.
//!
//! ## Optimization Strategies
//!
//! - **Loop unrolling**: Process multiple elements per iteration to reduce loop overhead
//! - **SIMD**: Sign-extend i8 blocks to i16 lanes and reduce with multiply-add
//!   instructions (PMADDWD) that produce i32 partial sums
//! - **Cache optimization**: Ensure sequential memory access patterns

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::registry::KernelRunner;
use crate::utils::timer::Variant;
use rand::Rng;

/// Runner for the dot product kernel
pub struct DotProductRunner;

impl KernelRunner for DotProductRunner {
    fn name(&self) -> &'static str {
        "dot_product"
    }

    fn description(&self) -> &'static str {
        "Sum of products of paired signed 8-bit vector elements"
    }

    fn category(&self) -> &'static str {
        "math"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures(&self, size: usize, seed: u64) -> Vec<Variant<'_>> {
        bench::variant_closures(size, seed)
    }

    fn verify(&self) -> Result<(), String> {
        let mut rng = rand::rng();
        // Use a non-multiple-of-lane-width size to exercise the SIMD tails
        let size = 1023;
        let a: Vec<i8> = (0..size)
            .map(|_| rng.random_range(i8::MIN..=i8::MAX))
            .collect();
        let b: Vec<i8> = (0..size)
            .map(|_| rng.random_range(i8::MIN..=i8::MAX))
            .collect();

        let variants = code::available_variants();
        let reference = variants
            .iter()
            .find(|v| v.name == "original")
            .ok_or("No 'original' variant found for reference")?;

        let expected = (reference.function)(&a, &b);

        // Integer kernel: every variant must match the reference exactly
        for variant in &variants {
            if variant.name == "original" {
                continue;
            }

            let result = (variant.function)(&a, &b);
            if result != expected {
                return Err(format!(
                    "Variant '{}' failed verification. Expected {}, got {}",
                    variant.name, expected, result
                ));
            }
        }

        Ok(())
    }
}
