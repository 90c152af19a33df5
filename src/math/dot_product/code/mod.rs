//! Dot product implementations.
//!
//! This module contains all implementation variants of the dot product
//! kernel. Every variant returns the exact same `i32` for the same input.

pub mod c_impl;
mod original;
mod scalar_opt;
#[cfg(target_arch = "x86_64")]
mod x86_64_sse2;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
mod x86_64_avx2;

pub use c_impl::{dot_product_c_original, dot_product_c_scalar_opt, C_IMPL_AVAILABLE};
pub use original::dot_product_original;
pub use scalar_opt::dot_product_scalar_opt;
#[cfg(target_arch = "x86_64")]
pub use x86_64_sse2::dot_product_x86_64_sse2;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub use x86_64_avx2::dot_product_x86_64_avx2;

use crate::utils::VariantInfo;

/// Type alias for dot product function signature
pub type DotProductFn = fn(&[i8], &[i8]) -> i32;

/// Get all available variants for the current CPU
pub fn available_variants() -> Vec<VariantInfo<DotProductFn>> {
    let mut variants: Vec<VariantInfo<DotProductFn>> = vec![
        VariantInfo {
            name: "original",
            description: "Clean, idiomatic Rust reference implementation",
            function: dot_product_original,
        },
        VariantInfo {
            name: "scalar_opt",
            description: "Optimized scalar implementation (manual loop unrolling)",
            function: dot_product_scalar_opt,
        },
    ];

    #[cfg(target_arch = "x86_64")]
    {
        variants.push(VariantInfo {
            name: "x86_64-sse2",
            description: "x86_64 with SSE2 SIMD intrinsics",
            function: dot_product_x86_64_sse2,
        });
    }

    #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
    {
        variants.push(VariantInfo {
            name: "x86_64-avx2",
            description: "x86_64 with AVX2 SIMD intrinsics",
            function: dot_product_x86_64_avx2,
        });
    }

    // Add C implementations if compiled in
    if C_IMPL_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-original",
            description: "C reference implementation",
            function: dot_product_c_original,
        });
        variants.push(VariantInfo {
            name: "c-scalar_opt",
            description: "C optimized scalar implementation",
            function: dot_product_c_scalar_opt,
        });
    }

    variants
}

/// Look up a variant function by name
pub fn find_variant(name: &str) -> Option<DotProductFn> {
    available_variants()
        .into_iter()
        .find(|v| v.name == name)
        .map(|v| v.function)
}
