use county::{app::count_file, args::OutputFormat, presentation};

use crate::common::{config, file_with};

#[test]
fn text_report_for_real_file() {
    let tmp = file_with(b"1\n2\n3\n4\n");
    let cfg = config(tmp.path(), 1024, 2);
    let report = count_file(&cfg).unwrap();
    let text = presentation::render(&report, cfg.file_path(), OutputFormat::Text).unwrap();

    assert!(text.contains("Total lines: 4"));
    assert!(text.contains("Total workers: 2"));
    assert!(text.contains("File size: 8 B"));
    assert!(text.contains("Time elapsed: "));
    assert!(!text.contains("Degraded"));
}

#[test]
fn json_report_for_real_file() {
    let tmp = file_with(b"x\ny\n");
    let cfg = config(tmp.path(), 1024, 3);
    let report = count_file(&cfg).unwrap();
    let json = presentation::render(&report, cfg.file_path(), OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["total_lines"], 2);
    assert_eq!(value["workers"], 3);
    assert_eq!(value["file_size_bytes"], 4);
    assert!(value["elapsed_ms"].is_u64());
}
