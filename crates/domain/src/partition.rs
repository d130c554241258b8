// crates/domain/src/partition.rs
use std::num::NonZeroUsize;

use county_shared_kernel::ByteRange;

/// Split `[0, file_size)` into `worker_count` contiguous half-open ranges.
///
/// Every range but possibly the last has `ceil(file_size / worker_count)`
/// bytes. When there are more workers than bytes the trailing ranges are
/// empty and sit at `file_size`.
pub fn partition(file_size: u64, worker_count: NonZeroUsize) -> Vec<ByteRange> {
    let workers = worker_count.get() as u64;
    let partition_size = file_size.div_ceil(workers);

    (0..workers)
        .map(|i| {
            let start = i.saturating_mul(partition_size).min(file_size);
            ByteRange::spanning(start, partition_size.min(file_size - start))
        })
        .collect()
}
