//! Unified timing system for micro-benchmarks.
//!
//! This module provides the single timing infrastructure with:
//! - Support for both CPU cycles and wall-clock time (via features)
//! - Automatic CPU core pinning for stable measurements
//! - Randomized variant execution to avoid ordering bias

use std::hint::black_box;
use std::time::Duration;

use super::bench::{shuffle, time_seed, to_nanos, Measurement};
use super::cpu_affinity::CpuPinGuard;

/// CPU pinning strategy during measurements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Pin once before all measurements (minimal overhead)
    Global,
    /// Pin/unpin for each execution (more accurate per-call)
    #[default]
    PerExecution,
}

/// Configuration for timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Number of samples to collect per variant (default: 30)
    pub runs_per_variant: usize,
    /// Number of warmup iterations before measurement (default: 10)
    pub warmup_iterations: usize,
    /// CPU pinning strategy (default: PerExecution)
    pub pin_strategy: PinStrategy,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 10,
            pin_strategy: PinStrategy::default(),
        }
    }
}

/// A variant to be measured
pub struct Variant<'a> {
    /// Unique name of the variant
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The function to benchmark - returns (measurement, optional result value).
    /// Timing happens inside the closure to eliminate Fn trait overhead.
    pub run: Box<dyn FnMut() -> (Measurement, Option<f64>) + 'a>,
}

/// Result from measuring a single variant
#[derive(Clone, Debug)]
pub struct VariantResult {
    /// Name of the variant
    pub name: String,
    /// Description of the variant
    pub description: String,
    /// Average measurement (as Duration for compatibility)
    pub avg_time: Duration,
    /// Precise average in nanoseconds/cycles as f64
    pub avg_nanos_f64: f64,
    /// Median measurement
    pub median_time: Duration,
    /// Minimum measurement
    pub min_time: Duration,
    /// Maximum measurement
    pub max_time: Duration,
    /// Standard deviation
    pub std_dev: Duration,
    /// Number of samples collected
    pub samples: usize,
    /// Sample result value, used for cross-variant consistency reporting
    pub result_sample: Option<f64>,
}

/// Measure multiple variants with randomized execution order.
///
/// This is the main entry point for benchmarking. It:
/// 1. Warms up all variants
/// 2. Creates a randomized task schedule
/// 3. Measures each variant with CPU pinning
/// 4. Returns results for all variants
pub fn measure_variants(mut variants: Vec<Variant>, config: &TimingConfig) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    let samples = config.runs_per_variant;

    // Warmup all variants
    for variant in &mut variants {
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }

    // Randomized task schedule: (variant_idx, sample_idx)
    let mut tasks: Vec<(usize, usize)> = (0..variants.len())
        .flat_map(|v| (0..samples).map(move |s| (v, s)))
        .collect();
    shuffle(&mut tasks, time_seed());

    let mut measurements: Vec<Vec<Measurement>> = (0..variants.len())
        .map(|_| Vec::with_capacity(samples))
        .collect();
    let mut result_samples: Vec<Option<f64>> = vec![None; variants.len()];

    let _global_pin = (config.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);

    for (variant_idx, _) in tasks {
        let variant = &mut variants[variant_idx];
        let _per_exec_pin =
            (config.pin_strategy == PinStrategy::PerExecution).then(CpuPinGuard::new);
        let (elapsed_time, result) = (variant.run)();

        measurements[variant_idx].push(elapsed_time);
        result_samples[variant_idx] = result;
    }

    variants
        .into_iter()
        .enumerate()
        .map(|(idx, variant)| {
            let times = std::mem::take(&mut measurements[idx]);
            let result_sample = result_samples[idx].take();
            compute_variant_result(variant.name, variant.description, times, result_sample)
        })
        .collect()
}

/// Compute statistics from raw measurements
fn compute_variant_result(
    name: &'static str,
    description: &'static str,
    measurements: Vec<Measurement>,
    result_sample: Option<f64>,
) -> VariantResult {
    if measurements.is_empty() {
        return VariantResult {
            name: name.to_string(),
            description: description.to_string(),
            avg_time: Duration::ZERO,
            avg_nanos_f64: 0.0,
            median_time: Duration::ZERO,
            min_time: Duration::ZERO,
            max_time: Duration::ZERO,
            std_dev: Duration::ZERO,
            samples: 0,
            result_sample: None,
        };
    }

    let nanos: Vec<u64> = measurements.iter().map(|m| to_nanos(*m)).collect();

    let mut sorted = nanos.clone();
    sorted.sort();

    let min_ns = sorted[0];
    let max_ns = sorted[sorted.len() - 1];
    let median_ns = sorted[sorted.len() / 2];

    let sum: u64 = nanos.iter().sum();
    let avg_nanos_f64 = sum as f64 / nanos.len() as f64;
    let avg_ns = avg_nanos_f64 as u64;

    let variance: f64 = nanos
        .iter()
        .map(|&n| {
            let diff = n as f64 - avg_nanos_f64;
            diff * diff
        })
        .sum::<f64>()
        / (nanos.len() - 1).max(1) as f64;
    let std_dev_ns = variance.sqrt() as u64;

    VariantResult {
        name: name.to_string(),
        description: description.to_string(),
        avg_time: Duration::from_nanos(avg_ns),
        avg_nanos_f64,
        median_time: Duration::from_nanos(median_ns),
        min_time: Duration::from_nanos(min_ns),
        max_time: Duration::from_nanos(max_ns),
        std_dev: Duration::from_nanos(std_dev_ns),
        samples: nanos.len(),
        result_sample,
    }
}
