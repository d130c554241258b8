// crates/domain/tests/partition_props.rs
use std::num::NonZeroUsize;

use county_domain::partition;
use proptest::prelude::*;

proptest! {
    /// Ranges are sorted, contiguous and cover exactly `[0, file_size)`.
    #[test]
    fn ranges_cover_file_exactly(file_size in 0u64..10_000_000, workers in 1usize..256) {
        let ranges = partition(file_size, NonZeroUsize::new(workers).unwrap());

        prop_assert_eq!(ranges.len(), workers);
        prop_assert_eq!(ranges[0].start(), 0);
        prop_assert_eq!(ranges[workers - 1].end(), file_size);
        for pair in ranges.windows(2) {
            prop_assert_eq!(pair[0].end(), pair[1].start());
        }

        let covered: u64 = ranges.iter().map(|r| r.len()).sum();
        prop_assert_eq!(covered, file_size);
    }

    /// Each byte offset belongs to exactly one range.
    #[test]
    fn every_offset_has_one_owner(file_size in 1u64..4096, workers in 1usize..64, probe in 0u64..4096) {
        let offset = probe % file_size;
        let ranges = partition(file_size, NonZeroUsize::new(workers).unwrap());
        let owners = ranges.iter().filter(|r| r.contains(offset)).count();
        prop_assert_eq!(owners, 1);
    }

    #[test]
    fn huge_sizes_do_not_overflow(file_size in (u64::MAX - 1024)..u64::MAX, workers in 1usize..16) {
        let ranges = partition(file_size, NonZeroUsize::new(workers).unwrap());
        prop_assert_eq!(ranges[workers - 1].end(), file_size);
    }
}
