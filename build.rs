//! Build script to compile the C comparison kernels.

use std::env;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(c_implementation_active)");

    // The C kernels are optional: probe the toolchain and disable them
    // cleanly when no usable compiler is around.
    let probe = cc::Build::new();
    let compiler = probe.get_compiler();
    let is_gnu_like = compiler.is_like_gnu() || compiler.is_like_clang();
    let is_msvc = compiler.is_like_msvc();

    if !is_gnu_like && !is_msvc {
        println!("cargo:warning=No GCC/Clang/MSVC toolchain detected. C kernels disabled.");
        return;
    }

    let compiler_name = if compiler.is_like_clang() {
        let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
        if target_os == "macos" {
            "Apple Clang"
        } else {
            "Clang"
        }
    } else if compiler.is_like_gnu() {
        "GCC"
    } else {
        "MSVC"
    };

    let mut build = cc::Build::new();

    // Auto-detect all C files under src/
    let c_files = glob::glob("src/**/*.c")
        .expect("Failed to read glob pattern")
        .filter_map(|entry| entry.ok());

    let mut found_any = false;
    for file in c_files {
        println!("cargo:rerun-if-changed={}", file.display());
        build.file(file);
        found_any = true;
    }

    if !found_any {
        println!("cargo:warning=No C sources found under src/. C kernels disabled.");
        return;
    }

    build.opt_level(3);

    // Match -march=native to Rust's target-cpu=native so the comparison
    // stays apples-to-apples.
    let rustflags = env::var("RUSTFLAGS").unwrap_or_default();
    let encoded_rustflags = env::var("CARGO_ENCODED_RUSTFLAGS").unwrap_or_default();
    if rustflags.contains("target-cpu=native") || encoded_rustflags.contains("target-cpu=native") {
        build.flag_if_supported("-march=native");
    }

    build.compile("vecdot_kernels_c");

    println!("cargo:rustc-cfg=c_implementation_active");
    println!("cargo:rustc-env=C_COMPILER_NAME={}", compiler_name);
}
