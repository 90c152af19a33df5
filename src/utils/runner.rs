//! Benchmark result collection and CSV export.

/// Raw timing data for a single variant (used for CSV export)
pub struct RawTimingData {
    pub kernel_name: String,
    pub variant_name: String,
    pub input_size: usize,
    pub avg_time: u64,
    pub result_sample: Option<f64>,
}

/// Export timing data to CSV file
pub fn export_csv(path: &str, data: &[RawTimingData]) -> std::io::Result<()> {
    use std::io::Write;

    let mut file = std::fs::File::create(path)?;

    writeln!(
        file,
        "kernel,variant,compiler,input_size,avg_time,unit,result"
    )?;

    for entry in data {
        let compiler = if entry.variant_name.starts_with("c-") {
            crate::utils::C_COMPILER_NAME.unwrap_or("Unknown")
        } else {
            ""
        };

        writeln!(
            file,
            "{},{},{},{},{},{},{}",
            entry.kernel_name,
            entry.variant_name,
            compiler,
            entry.input_size,
            entry.avg_time,
            crate::utils::bench::unit_name(),
            entry
                .result_sample
                .map(|v| v.to_string())
                .unwrap_or_default()
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_csv_writes_header_and_rows() {
        let dir = std::env::temp_dir();
        let path = dir.join("vecdot_csv_test.csv");
        let path_str = path.to_str().unwrap();

        let data = vec![RawTimingData {
            kernel_name: "dot_product".to_string(),
            variant_name: "original".to_string(),
            input_size: 8,
            avg_time: 123,
            result_sample: Some(10.0),
        }];

        export_csv(path_str, &data).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("kernel,variant,compiler,input_size,avg_time,unit,result")
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("dot_product,original,"));
        assert!(row.contains(",8,123,"));
        assert!(row.ends_with(",10"));
    }
}
