//! Generic CLI for benchmarking kernels and running the demo loop.
//!
//! Usage:
//!   vecdot                  # Benchmark all kernels
//!   vecdot --list           # List available kernels
//!   vecdot dot_product      # Benchmark specific kernel
//!   vecdot demo             # Run the tick-driven demo loop
//!   vecdot --help           # Show help

use std::env;
use std::time::Duration;

use vecdot_demo::demo::{run_demo, DemoConfig, PeriodicTicker, StdoutSink};
use vecdot_demo::math::dot_product;
use vecdot_demo::registry::{build_registry, KernelRunner};
use vecdot_demo::utils::bench::time_seed;
use vecdot_demo::utils::runner::{export_csv, RawTimingData};
use vecdot_demo::utils::timer::{measure_variants, TimingConfig};

fn main() {
    let args: Vec<String> = env::args().collect();

    // `vecdot demo [...]` runs the report loop instead of the benchmarks
    if args.get(1).map(String::as_str) == Some("demo") {
        demo_main(&args[2..]);
        return;
    }

    bench_main(&args[1..]);
}

fn bench_main(args: &[String]) {
    let registry = build_registry();

    // Parse arguments
    let mut show_list = false;
    let mut show_help = false;
    let mut sample_sizes: Vec<usize> = vec![8, 64, 256, 1024, 4096];
    let mut runs: usize = 30;
    let mut seed: Option<u64> = None;
    let mut csv_path: Option<String> = None;
    let mut kernel_filter: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => show_list = true,
            "--help" | "-h" => show_help = true,
            "--sizes" => {
                i += 1;
                if i < args.len() {
                    sample_sizes = args[i]
                        .split(',')
                        .filter_map(|s| s.trim().parse().ok())
                        .collect();
                }
            }
            "--runs" => {
                i += 1;
                if i < args.len() {
                    runs = args[i].parse().unwrap_or(30);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().ok();
                }
            }
            "--csv" => {
                i += 1;
                if i < args.len() {
                    csv_path = Some(args[i].clone());
                }
            }
            arg if !arg.starts_with('-') => {
                kernel_filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if show_help {
        vecdot_demo::tui::print_help();
        return;
    }

    if show_list {
        vecdot_demo::tui::print_available_kernels(&registry);
        return;
    }

    let selected: Vec<&dyn KernelRunner> = match &kernel_filter {
        Some(name) => match registry.find(name) {
            Some(kernel) => vec![kernel],
            None => {
                eprintln!("Kernel '{}' not found.", name);
                eprintln!("Available: {:?}", registry.list_names());
                std::process::exit(1);
            }
        },
        None => registry.all().iter().map(|k| k.as_ref()).collect(),
    };

    vecdot_demo::tui::print_header();

    let seed = seed.unwrap_or_else(time_seed);
    let config = TimingConfig {
        runs_per_variant: runs,
        ..TimingConfig::default()
    };

    let mut raw_data: Vec<RawTimingData> = Vec::new();

    for kernel in &selected {
        vecdot_demo::tui::print_kernel_info_box(*kernel);

        for &size in &sample_sizes {
            let variants = kernel.get_variant_closures(size, seed);
            let mut results = measure_variants(variants, &config);
            vecdot_demo::tui::sort_variants(&mut results);
            vecdot_demo::tui::print_results_table(&results, size, runs);

            for result in &results {
                raw_data.push(RawTimingData {
                    kernel_name: kernel.name().to_string(),
                    variant_name: result.name.clone(),
                    input_size: size,
                    avg_time: result.avg_nanos_f64 as u64,
                    result_sample: result.result_sample,
                });
            }
        }
    }

    if let Some(path) = csv_path {
        match export_csv(&path, &raw_data) {
            Ok(()) => println!("  Raw data exported to: {}", path),
            Err(e) => eprintln!("  Warning: Failed to export CSV: {}", e),
        }
        println!();
    }

    println!("Note: Speedup is relative to the first variant (usually 'original').");
}

fn demo_main(args: &[String]) {
    let mut config = DemoConfig::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                vecdot_demo::tui::print_help();
                return;
            }
            "--ticks" => {
                i += 1;
                if i < args.len() {
                    let n: usize = args[i].parse().unwrap_or(3);
                    config.max_ticks = if n == 0 { None } else { Some(n) };
                }
            }
            "--period-ms" => {
                i += 1;
                if i < args.len() {
                    let ms: u64 = args[i].parse().unwrap_or(1000);
                    config.period = Duration::from_millis(ms.max(1));
                }
            }
            "--variant" => {
                i += 1;
                if i < args.len() {
                    match dot_product::find_variant(&args[i]) {
                        Some(func) => config.kernel = func,
                        None => {
                            eprintln!("Variant '{}' not found.", args[i]);
                            let names: Vec<_> = dot_product::available_variants()
                                .iter()
                                .map(|v| v.name)
                                .collect();
                            eprintln!("Available: {:?}", names);
                            std::process::exit(1);
                        }
                    }
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut ticker = PeriodicTicker::new(config.period);
    let mut sink = StdoutSink;

    if let Err(e) = run_demo(&mut ticker, &mut sink, &config) {
        eprintln!("Demo output failed: {}", e);
        std::process::exit(1);
    }
}
