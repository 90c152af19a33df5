//! Benchmark closures for the dot product kernel.

use super::code::available_variants;
use crate::measure;
use crate::utils::bench::SeededRng;
use crate::utils::timer::Variant;
use std::sync::Arc;

/// Build one measurable closure per available variant.
///
/// All variants share the same seeded random input so their results are
/// directly comparable.
pub fn variant_closures<'a>(size: usize, seed: u64) -> Vec<Variant<'a>> {
    let mut rng = SeededRng::new(seed);
    let a: Arc<Vec<i8>> = Arc::new((0..size).map(|_| rng.next_i8()).collect());
    let b: Arc<Vec<i8>> = Arc::new((0..size).map(|_| rng.next_i8()).collect());

    available_variants()
        .into_iter()
        .map(|v| {
            let a = Arc::clone(&a);
            let b = Arc::clone(&b);
            let func = v.function;

            Variant {
                name: v.name,
                description: v.description,
                run: Box::new(move || {
                    let (elapsed, result) = measure!(func(&a, &b));
                    (elapsed, Some(result as f64))
                }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::timer::{measure_variants, PinStrategy, TimingConfig};

    #[test]
    fn test_variant_closures_share_input() {
        let closures = variant_closures(257, 99);
        assert!(closures.len() >= 2);

        let config = TimingConfig {
            runs_per_variant: 3,
            warmup_iterations: 1,
            pin_strategy: PinStrategy::Global,
        };
        let results = measure_variants(closures, &config);

        // Same seeded input for every variant, so every result must agree
        let first = results[0].result_sample.unwrap();
        for r in &results {
            assert_eq!(r.result_sample, Some(first), "variant {} diverged", r.name);
        }
    }
}
