//! Tests for report formatting

#[cfg(test)]
mod tests {
    use pixel_entropy::analysis::pipeline::EntropyEstimate;
    use pixel_entropy::io::report::EntropyReport;
    use std::path::PathBuf;

    fn report(total_bits: u64, width: usize, height: usize) -> EntropyReport {
        EntropyReport::new(
            PathBuf::from("lena.png"),
            EntropyEstimate {
                total_bits,
                width,
                height,
                order: "ScanLine",
            },
        )
    }

    // Tests the four report lines and their order
    // Verified by swapping the order and image lines
    #[test]
    fn test_report_lines() {
        let text = report(3, 2, 2).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "3",
                "Image: lena.png[2x2]",
                "Order: ScanLine",
                "Average entropy: 0.75 bits per pixel",
            ]
        );
    }

    // Tests the average uses two decimals and a point separator
    // Verified by printing the full float
    #[test]
    fn test_average_precision() {
        let text = report(10, 3, 1).to_string();
        assert!(text.ends_with("Average entropy: 3.33 bits per pixel"), "{text}");

        let text = report(0, 5, 5).to_string();
        assert!(text.ends_with("Average entropy: 0.00 bits per pixel"), "{text}");
    }

    // Tests the report has no trailing newline
    // Verified by using writeln for the last line
    #[test]
    fn test_no_trailing_newline() {
        assert!(!report(1, 1, 1).to_string().ends_with('\n'));
    }
}
