//! Shared benchmark utilities.
//!
//! By default (`cpu_cycles` feature), measurements use CPU cycle counters
//! for precise micro-benchmarking. Use `--features use_time` or
//! `--no-default-features` to use wall-clock time instead.

use std::time::Duration;

// ============================================================================
// Measurement abstraction: cycles or time depending on feature flags
// ============================================================================
//
// Use CPU cycles if: cpu_cycles is enabled AND use_time is NOT enabled
// Use wall-clock time if: use_time is enabled OR cpu_cycles is disabled

/// Measurement value type - cycles (u64) or Duration depending on feature
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Measurement = u64;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Measurement = Duration;

/// Read current measurement (cycles or time)
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn now() -> Measurement {
    crate::utils::cycles::read_cycles()
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn now() -> std::time::Instant {
    std::time::Instant::now()
}

/// Calculate elapsed measurement
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn elapsed(start: Measurement) -> Measurement {
    crate::utils::cycles::read_cycles().saturating_sub(start)
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn elapsed(start: std::time::Instant) -> Measurement {
    start.elapsed()
}

/// Convert measurement to nanoseconds (raw cycles under `cpu_cycles`)
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub fn to_nanos(m: Measurement) -> u64 {
    m
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub fn to_nanos(m: Measurement) -> u64 {
    m.as_nanos() as u64
}

/// Get the measurement unit name
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub const fn unit_name() -> &'static str {
    #[cfg(target_arch = "aarch64")]
    {
        "ticks"
    }
    #[cfg(target_arch = "x86_64")]
    {
        "cycles"
    }
    #[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64")))]
    {
        "units"
    }
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub const fn unit_name() -> &'static str {
    "ns"
}

/// Format a stored measurement for display.
///
/// Under `cpu_cycles` the `Duration` holds a raw cycle count in its
/// nanosecond field, so it is printed as an integer with the unit name.
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub fn format_measurement(m: Duration) -> String {
    format!("{} {}", m.as_nanos() as u64, unit_name())
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub fn format_measurement(m: Duration) -> String {
    format!("{:?}", m)
}

/// Time a single expression, returning `(measurement, value)`.
///
/// The expression result goes through `black_box` so the compiler cannot
/// drop the computation being timed.
#[macro_export]
macro_rules! measure {
    ($e:expr) => {{
        let start = $crate::utils::bench::now();
        let value = ::std::hint::black_box($e);
        ($crate::utils::bench::elapsed(start), value)
    }};
}

/// Simple fast random shuffle using Fisher-Yates algorithm
pub fn shuffle<T>(slice: &mut [T], seed: u64) {
    let mut rng = SeededRng::new(seed);
    shuffle_with_rng(slice, &mut rng);
}

/// Shuffle using an existing RNG (allows sequential shuffles with state preserved)
pub fn shuffle_with_rng<T>(slice: &mut [T], rng: &mut SeededRng) {
    for i in (1..slice.len()).rev() {
        let j = (rng.next_u64() >> 33) as usize % (i + 1);
        slice.swap(i, j);
    }
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

/// Simple seeded PRNG for reproducible benchmarks
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    /// Generate a full-range i8
    pub fn next_i8(&mut self) -> i8 {
        (self.next_u64() >> 56) as u8 as i8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let mut a = SeededRng::new(42);
        let mut b = SeededRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_next_i8_covers_negative_values() {
        let mut rng = SeededRng::new(7);
        let mut saw_negative = false;
        for _ in 0..256 {
            if rng.next_i8() < 0 {
                saw_negative = true;
                break;
            }
        }
        assert!(saw_negative, "full-range i8 should produce negatives");
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut data: Vec<u32> = (0..64).collect();
        shuffle(&mut data, 12345);
        let mut sorted = data.clone();
        sorted.sort();
        let expected: Vec<u32> = (0..64).collect();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_measure_macro_returns_value() {
        let (_, value) = measure!(21 * 2);
        assert_eq!(value, 42);
    }
}
