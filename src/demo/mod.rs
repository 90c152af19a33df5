//! Tick-driven demo loop.
//!
//! Host-side rendition of the classic evaluation-board demo: print a
//! greeting, then once per timer tick emit a report showing two fixed
//! 8-element vectors, their memory addresses, and their dot product.
//!
//! The loop polls a latched tick flag and clears it after each report,
//! the same contract an RTC update flag gives firmware. Output goes to a
//! pluggable [`TextSink`] so tests can capture it.

mod sink;
mod tick;

pub use sink::{StdoutSink, TextSink};
pub use tick::{PeriodicTicker, TickSource};

use crate::math::dot_product::{dot_product_original, DotProductFn};
use std::fmt::Write as _;
use std::io;
use std::time::Duration;

/// First demo operand.
pub const DEMO_A: [i8; 8] = [0, 0, 0, 0, 1, 1, 1, 1];
/// Second demo operand.
pub const DEMO_B: [i8; 8] = [8, 7, 6, 5, 4, 3, 2, 1];

const GREETING: &str = "\n\t  ******* Integer Vector Kernel Demo *******\n\n\
One report is printed per timer tick. Each report shows the demo\n\
vectors, their memory addresses, and their dot product.\n\n";

/// Capacity reserved for one formatted report line.
const LINE_CAPACITY: usize = 64;

/// Granularity of the tick poll loop.
const POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Demo loop settings.
#[derive(Clone)]
pub struct DemoConfig {
    /// Tick period for the built-in wall-clock ticker.
    pub period: Duration,
    /// Number of reports to emit; `None` runs until the process is killed.
    pub max_ticks: Option<usize>,
    /// Kernel variant used to compute the reported dot product.
    pub kernel: DotProductFn,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            period: Duration::from_secs(1),
            max_ticks: Some(3),
            kernel: dot_product_original,
        }
    }
}

/// Run the demo loop against an arbitrary tick source and sink.
///
/// Prints the greeting once, then one report per tick until the configured
/// tick budget is exhausted. Sink failures propagate; allocation failure of
/// the per-tick line buffer skips the report with a diagnostic instead.
pub fn run_demo(
    ticks: &mut dyn TickSource,
    sink: &mut dyn TextSink,
    config: &DemoConfig,
) -> io::Result<()> {
    sink.write_text(GREETING)?;

    let mut emitted = 0usize;
    loop {
        if let Some(limit) = config.max_ticks {
            if emitted >= limit {
                return Ok(());
            }
        }

        if !ticks.update_pending() {
            std::thread::sleep(POLL_INTERVAL);
            continue;
        }

        emit_report(sink, config.kernel)?;
        ticks.clear_update();
        emitted += 1;
    }
}

/// Format and emit one per-tick report.
fn emit_report(sink: &mut dyn TextSink, kernel: DotProductFn) -> io::Result<()> {
    // Per-report line buffer. Reservation failure skips this report
    // instead of aborting the loop.
    let mut line = String::new();
    if line.try_reserve_exact(LINE_CAPACITY).is_err() {
        sink.write_text("Memory allocation failed!\n")?;
        return Ok(());
    }

    let a = DEMO_A;
    let b = DEMO_B;

    for i in 0..a.len() {
        line.clear();
        let _ = writeln!(line, "A[{}] = {}", i, a[i]);
        sink.write_text(&line)?;
        line.clear();
        let _ = writeln!(line, "B[{}] = {}", i, b[i]);
        sink.write_text(&line)?;
    }

    line.clear();
    let _ = writeln!(line, "Array A memory address: {:p}", a.as_ptr());
    sink.write_text(&line)?;

    line.clear();
    let _ = writeln!(line, "Array B memory address: {:p}", b.as_ptr());
    sink.write_text(&line)?;

    let dot = kernel(&a, &b);
    line.clear();
    let _ = writeln!(line, "Dot Product of A and B: {}", dot);
    sink.write_text(&line)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tick source that reports a fixed number of already-elapsed periods.
    struct ScriptedTicks {
        pending: usize,
    }

    impl TickSource for ScriptedTicks {
        fn update_pending(&mut self) -> bool {
            self.pending > 0
        }

        fn clear_update(&mut self) {
            self.pending = self.pending.saturating_sub(1);
        }
    }

    fn run_captured(ticks: usize) -> String {
        let mut source = ScriptedTicks { pending: ticks + 1 };
        let mut captured: Vec<u8> = Vec::new();
        let config = DemoConfig {
            max_ticks: Some(ticks),
            ..DemoConfig::default()
        };

        run_demo(&mut source, &mut captured, &config).unwrap();
        String::from_utf8(captured).unwrap()
    }

    #[test]
    fn test_greeting_printed_once() {
        let output = run_captured(2);
        assert_eq!(output.matches("Integer Vector Kernel Demo").count(), 1);
    }

    #[test]
    fn test_report_contents() {
        let output = run_captured(1);

        assert!(output.contains("A[0] = 0"));
        assert!(output.contains("A[4] = 1"));
        assert!(output.contains("B[0] = 8"));
        assert!(output.contains("B[7] = 1"));
        assert!(output.contains("Array A memory address: 0x"));
        assert!(output.contains("Array B memory address: 0x"));
        assert!(output.contains("Dot Product of A and B: 10"));
    }

    #[test]
    fn test_one_report_per_tick() {
        let output = run_captured(3);
        assert_eq!(output.matches("Dot Product of A and B:").count(), 3);
    }

    #[test]
    fn test_zero_tick_budget_emits_only_greeting() {
        let output = run_captured(0);
        assert!(output.contains("Integer Vector Kernel Demo"));
        assert!(!output.contains("Dot Product"));
    }

    #[test]
    fn test_kernel_variant_is_used() {
        let mut source = ScriptedTicks { pending: 2 };
        let mut captured: Vec<u8> = Vec::new();
        let config = DemoConfig {
            max_ticks: Some(1),
            kernel: crate::math::dot_product::dot_product_scalar_opt,
            ..DemoConfig::default()
        };

        run_demo(&mut source, &mut captured, &config).unwrap();
        let output = String::from_utf8(captured).unwrap();
        assert!(output.contains("Dot Product of A and B: 10"));
    }
}
