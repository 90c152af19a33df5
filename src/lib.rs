//! # Vecdot Demo
//!
//! Tick-driven evaluation demo and micro-benchmarks for small integer
//! vector kernels.
//!
//! The crate centers on one kernel, the signed 8-bit dot product, offered
//! in several implementation variants that all produce the exact same
//! `i32` result. Around it sit a demo loop that reports the kernel's
//! output once per timer tick and a measurement harness for comparing the
//! variants.

pub mod demo;
pub mod math;
pub mod registry;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::demo::{run_demo, DemoConfig, PeriodicTicker, StdoutSink};
    pub use crate::math::dot_product;
    pub use crate::registry::{build_registry, KernelRegistry, KernelRunner};
}

#[cfg(test)]
mod tests {
    use crate::registry::build_registry;

    #[test]
    fn test_all_kernels_registry_verify() {
        let registry = build_registry();
        let kernels = registry.all();

        println!("Verifying {} kernels...", kernels.len());

        for kernel in kernels {
            println!("Verifying kernel: {}", kernel.name());
            match kernel.verify() {
                Ok(_) => println!("  ✅ Kernel '{}' passed verification", kernel.name()),
                Err(e) => panic!("  ❌ Kernel '{}' failed verification: {}", kernel.name(), e),
            }
        }
    }
}
