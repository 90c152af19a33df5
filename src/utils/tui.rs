//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::registry::{KernelRegistry, KernelRunner};
use crate::utils::bench::format_measurement;
use crate::utils::timer::VariantResult;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Get sorting priority for a variant based on its name and compiler.
/// Lower values sort first.
/// Order: original (0), Rust (1), C by compiler then name (2), ASM/SIMD (3)
fn variant_sort_key(result: &VariantResult) -> (u8, String, String) {
    let name = result.name.to_lowercase();
    let compiler = if name.starts_with("c-") || name.starts_with("c_") {
        crate::utils::C_COMPILER_NAME
            .unwrap_or("unknown")
            .to_lowercase()
    } else {
        String::new()
    };

    if name == "original" {
        (0, String::new(), String::new())
    } else if name.contains("asm")
        || name.contains("simd")
        || name.contains("sse")
        || name.contains("avx")
        || name.contains("neon")
    {
        (3, name.clone(), compiler)
    } else if name.starts_with("c-") || name.starts_with("c_") {
        (2, compiler.clone(), name.clone())
    } else {
        (1, name.clone(), String::new())
    }
}

/// Sort variants: original first, then grouped by language (Rust, C, ASM/SIMD)
pub fn sort_variants(results: &mut [VariantResult]) {
    results.sort_by_key(variant_sort_key);
}

/// Print kernel info box
pub fn print_kernel_info_box(kernel: &dyn KernelRunner) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let variants_str = kernel.available_variants().join(", ");
    let name_line = format!("Kernel:   {}", kernel.name());
    let cat_line = format!("Category: {}", kernel.category());
    let desc_line = kernel.description();
    let var_line = format!("Variants: {}", variants_str);

    let content_width = [
        name_line.len(),
        cat_line.len(),
        desc_line.len(),
        var_line.len(),
    ]
    .iter()
    .cloned()
    .max()
    .unwrap_or(60)
    .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    println!(
        "│ {:<width$} │",
        truncate(&name_line, content_width),
        width = content_width
    );
    println!(
        "│ {:<width$} │",
        truncate(&cat_line, content_width),
        width = content_width
    );
    println!(
        "│ {:<width$} │",
        truncate(desc_line, content_width),
        width = content_width
    );
    println!("├{}┤", border);
    println!(
        "│ {:<width$} │",
        truncate(&var_line, content_width),
        width = content_width
    );
    println!("└{}┘", border);
    println!();
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print results table for a single size
pub fn print_results_table(results: &[VariantResult], size: usize, runs: usize) {
    if results.is_empty() {
        return;
    }

    let term_width = get_term_width();
    // Compact columns: 12+12+12+9+9+10 = 64 chars + 6 spaces + 2 indent = 72
    let fixed_width = 72;
    let variant_col_width = term_width.saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + 64 + 6;

    let baseline_time = results
        .first()
        .map(|r| r.avg_time.as_nanos() as f64)
        .unwrap_or(1.0);

    let baseline_result = results.first().and_then(|r| r.result_sample);

    println!("  Size: {} ({} runs)", size, runs);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>9} {:>9} {:>10}",
        "Variant",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Rel. Error",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let speedup = baseline_time / result.avg_time.as_nanos().max(1) as f64;

        let avg_ns = result.avg_time.as_nanos() as f64;
        let std_dev_ns = result.std_dev.as_nanos() as f64;

        let cv = if avg_ns > 0.0 {
            std_dev_ns / avg_ns
        } else {
            0.0
        };

        let relative_error = match (result.result_sample, baseline_result) {
            (Some(res), Some(base)) => {
                let diff = (res - base).abs();
                if base.abs() > 1e-9 {
                    diff / base.abs()
                } else {
                    diff
                }
            }
            _ => 0.0,
        };

        let display_name = if result.name.starts_with("c-") || result.name.starts_with("c_") {
            match crate::utils::C_COMPILER_NAME {
                Some(c) => format!("{} ({})", result.name, c),
                None => result.name.clone(),
            }
        } else {
            result.name.clone()
        };

        println!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}% {:>10.2e}",
            truncate(&display_name, variant_col_width),
            format_measurement(result.avg_time),
            format_measurement(result.min_time),
            format_measurement(result.max_time),
            speedup,
            cv * 100.0,
            relative_error,
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Vecdot Kernel Demo & Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: vecdot [OPTIONS] [KERNEL]");
    println!("       vecdot demo [--ticks N] [--period-ms N] [--variant NAME]");
    println!();
    println!("Options:");
    println!("  --list, -l       List all available kernels");
    println!("  --help, -h       Show this help message");
    println!("  --sizes SIZES    Comma-separated vector sizes (default: 8,64,256,1024,4096)");
    println!("  --runs N         Number of measurement runs per variant (default: 30)");
    println!("  --seed N         Random seed for reproducible benchmarks (default: time-based)");
    println!("  --csv PATH       Export raw timings to CSV");
    println!();
    println!("Demo mode:");
    println!("  --ticks N        Number of reports to print, 0 = run forever (default: 3)");
    println!("  --period-ms N    Tick period in milliseconds (default: 1000)");
    println!("  --variant NAME   Kernel variant used for the report (default: original)");
    println!();
    println!("Arguments:");
    println!("  KERNEL           Name of specific kernel to benchmark (omit for all)");
    println!();
    println!("Examples:");
    println!("  vecdot                        # Benchmark all kernels");
    println!("  vecdot dot_product            # Benchmark only dot_product");
    println!("  vecdot --list                 # List kernels");
    println!("  vecdot --sizes 128,512        # Custom sizes");
    println!("  vecdot --seed 12345           # Reproducible run");
    println!("  vecdot --csv data.csv         # Export raw timings to CSV");
    println!("  vecdot demo --ticks 5         # Five demo reports, one per second");
}

/// Print the list of available kernels
pub fn print_available_kernels(registry: &KernelRegistry) {
    println!("Available kernels:");
    println!();
    for kernel in registry.all() {
        println!(
            "  {:<20} [{}] - {}",
            kernel.name(),
            kernel.category(),
            kernel.description()
        );
    }
}
