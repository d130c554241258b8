use county::app::count_file;
use county_domain::partition;

use crate::common::{config, file_with, generated_lines};

fn total(contents: &[u8], chunk_size: usize, workers: usize) -> u64 {
    let tmp = file_with(contents);
    count_file(&config(tmp.path(), chunk_size, workers))
        .expect("count succeeds")
        .total_lines
        .value()
}

#[test]
fn example_file_with_two_workers() {
    let tmp = file_with(b"a\nb\nc\n");
    let report = count_file(&config(tmp.path(), 1024, 2)).unwrap();
    assert_eq!(report.total_lines.value(), 3);
    assert_eq!(report.worker_count, 2);
    assert_eq!(report.file_size.bytes(), 6);
    assert_eq!(report.degraded_ranges, 0);
}

#[test]
fn total_is_independent_of_worker_count() {
    let data = generated_lines(2_000);
    for workers in [1, 2, 3, 4, 7, 16, 33] {
        assert_eq!(total(&data, 4096, workers), 2_000, "workers={workers}");
    }
}

#[test]
fn total_is_independent_of_chunk_size() {
    let data = generated_lines(500);
    for chunk_size in [1, 2, 7, 64, 1024, 1 << 20] {
        assert_eq!(total(&data, chunk_size, 4), 500, "chunk_size={chunk_size}");
    }
}

#[test]
fn newline_on_partition_boundary_is_counted_once() {
    // 4 workers over 16 bytes split at 4, 8 and 12.
    let ranges = partition(16, std::num::NonZeroUsize::new(4).unwrap());
    let boundary = ranges[1].start() as usize;
    assert_eq!(boundary, 4);

    for offset in [boundary - 1, boundary] {
        let mut data = vec![b'x'; 16];
        data[offset] = b'\n';
        assert_eq!(total(&data, 3, 4), 1, "newline at {offset}");
    }
}

#[test]
fn empty_file_counts_zero_for_any_worker_count() {
    for workers in [1, 2, 8] {
        let tmp = file_with(b"");
        let report = count_file(&config(tmp.path(), 1024, workers)).unwrap();
        assert_eq!(report.total_lines.value(), 0);
        assert_eq!(report.file_size.bytes(), 0);
        assert_eq!(report.degraded_ranges, 0);
    }
}

#[test]
fn missing_trailing_newline_is_not_a_line() {
    // Three text lines, two newline bytes.
    assert_eq!(total(b"first\nsecond\nthird", 4, 3), 2);
}

#[test]
fn more_workers_than_bytes() {
    assert_eq!(total(b"\n\n\n", 1024, 10), 3);
}

#[test]
fn repeated_runs_agree() {
    let tmp = file_with(&generated_lines(10_000));
    let cfg = config(tmp.path(), 512, 8);
    let first = count_file(&cfg).unwrap().total_lines;
    for _ in 0..10 {
        assert_eq!(count_file(&cfg).unwrap().total_lines, first);
    }
}

#[test]
fn missing_file_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = count_file(&config(&dir.path().join("absent.txt"), 1024, 2)).unwrap_err();
    assert!(err.is_configuration());
}
