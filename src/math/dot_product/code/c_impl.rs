//! FFI bindings for the C comparison kernels.

#[cfg(c_implementation_active)]
mod ffi {
    use libc::size_t;

    extern "C" {
        pub fn dot_product_c_original(a: *const i8, b: *const i8, len: size_t) -> i32;
        pub fn dot_product_c_scalar_opt(a: *const i8, b: *const i8, len: size_t) -> i32;
    }
}

/// C original implementation wrapper
#[cfg(c_implementation_active)]
pub fn dot_product_c_original(a: &[i8], b: &[i8]) -> i32 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");
    unsafe { ffi::dot_product_c_original(a.as_ptr(), b.as_ptr(), a.len()) }
}

/// C scalar_opt implementation wrapper
#[cfg(c_implementation_active)]
pub fn dot_product_c_scalar_opt(a: &[i8], b: &[i8]) -> i32 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");
    unsafe { ffi::dot_product_c_scalar_opt(a.as_ptr(), b.as_ptr(), a.len()) }
}

/// Check if C implementations are available
#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

// Stub implementations for missing C compiler
#[cfg(not(c_implementation_active))]
pub fn dot_product_c_original(_a: &[i8], _b: &[i8]) -> i32 {
    panic!("C implementation not compiled (requires GCC/Clang/MSVC)")
}

#[cfg(not(c_implementation_active))]
pub fn dot_product_c_scalar_opt(_a: &[i8], _b: &[i8]) -> i32 {
    panic!("C implementation not compiled (requires GCC/Clang/MSVC)")
}
