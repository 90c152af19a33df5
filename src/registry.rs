//! Kernel registry for dynamic kernel discovery and execution.
//!
//! This module provides a generic interface for registering and running
//! kernels without needing separate binary files for each.

use crate::utils::timer::Variant;

/// Trait that all kernel benchmarkers must implement
pub trait KernelRunner: Send + Sync {
    /// Name of the kernel (e.g., "dot_product")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "math")
    fn category(&self) -> &'static str;

    /// Get list of available variant names
    fn available_variants(&self) -> Vec<&'static str>;

    /// Get closures for each variant, ready to be measured.
    /// Each closure does ONE execution and returns a result value.
    /// The harness handles warmup, timing, and repetition.
    fn get_variant_closures(&self, size: usize, seed: u64) -> Vec<Variant<'_>>;

    /// Verify correctness of all variants against the reference
    fn verify(&self) -> Result<(), String>;
}

/// Global registry of all kernels
pub struct KernelRegistry {
    kernels: Vec<Box<dyn KernelRunner>>,
}

impl KernelRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            kernels: Vec::new(),
        }
    }

    /// Register a kernel
    pub fn register<K: KernelRunner + 'static>(&mut self, kernel: K) {
        self.kernels.push(Box::new(kernel));
    }

    /// Get all registered kernels
    pub fn all(&self) -> &[Box<dyn KernelRunner>] {
        &self.kernels
    }

    /// Find kernel by name
    pub fn find(&self, name: &str) -> Option<&dyn KernelRunner> {
        self.kernels
            .iter()
            .find(|k| k.name() == name)
            .map(|k| k.as_ref())
    }

    /// List kernel names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.kernels.iter().map(|k| k.name()).collect()
    }

    /// List kernels by category
    pub fn by_category(&self, category: &str) -> Vec<&dyn KernelRunner> {
        self.kernels
            .iter()
            .filter(|k| k.category() == category)
            .map(|k| k.as_ref())
            .collect()
    }
}

impl Default for KernelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all kernels
pub fn build_registry() -> KernelRegistry {
    let mut registry = KernelRegistry::new();

    registry.register(crate::math::dot_product::DotProductRunner);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_name() {
        let registry = build_registry();
        assert!(registry.find("dot_product").is_some());
        assert!(registry.find("no_such_kernel").is_none());
    }

    #[test]
    fn test_list_names_and_category() {
        let registry = build_registry();
        assert_eq!(registry.list_names(), vec!["dot_product"]);
        assert_eq!(registry.by_category("math").len(), 1);
        assert!(registry.by_category("sorting").is_empty());
    }
}
