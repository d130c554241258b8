use std::sync::Arc;

use county_domain::{CountConfig, CountReport, partition};
use county_ports::{FileProbe, RangeCounter};
use county_shared_kernel::{ByteRange, InfrastructureError, Result};
use tracing::{debug, error, warn};

use crate::sync::{CompletionAggregator, StartBarrier, Stopwatch};

/// Counts the newline bytes of one file with a fixed set of parallel workers.
pub struct CountFileLines<'a> {
    probe: &'a dyn FileProbe,
    counter: Arc<dyn RangeCounter>,
}

/// State every worker of a run holds a handle to.
struct WorkerContext {
    config: CountConfig,
    counter: Arc<dyn RangeCounter>,
    barrier: StartBarrier,
    aggregator: CompletionAggregator,
}

impl<'a> CountFileLines<'a> {
    pub fn new(probe: &'a dyn FileProbe, counter: Arc<dyn RangeCounter>) -> Self {
        Self { probe, counter }
    }

    /// Run one counting pass over `config.file_path()`.
    ///
    /// Per-range I/O failures degrade that range to zero lines and are
    /// reported through [`CountReport::degraded_ranges`].
    ///
    /// # Errors
    ///
    /// Fails before any worker starts when the file cannot be inspected or
    /// the thread pool cannot be built, and after the run when a
    /// synchronization invariant was violated.
    pub fn run(&self, config: &CountConfig) -> Result<CountReport> {
        let file_size = self.probe.file_size(config.file_path())?;
        let workers = config.worker_count();
        let pool = build_pool(workers.get())?;
        let ranges = partition(file_size.bytes(), workers);
        debug!(
            file = %config.file_path(),
            size = file_size.bytes(),
            workers = workers.get(),
            chunk_size = config.chunk_size().get(),
            "partitioned file"
        );

        let stopwatch = Arc::new(Stopwatch::new());
        let context = Arc::new(WorkerContext {
            config: config.clone(),
            counter: Arc::clone(&self.counter),
            barrier: StartBarrier::new(workers.get(), Arc::clone(&stopwatch))?,
            aggregator: CompletionAggregator::new(workers.get(), Arc::clone(&stopwatch))?,
        });

        for (index, range) in ranges.into_iter().enumerate() {
            let context = Arc::clone(&context);
            pool.spawn(move || run_worker(index, range, &context));
        }

        let total_lines = context.aggregator.wait_and_collect()?;
        let report = CountReport {
            total_lines,
            elapsed: stopwatch.elapsed(),
            worker_count: workers.get(),
            file_size,
            degraded_ranges: context.aggregator.degraded(),
        };
        debug!(
            total = report.total_lines.value(),
            elapsed_ms = report.elapsed_millis(),
            degraded = report.degraded_ranges,
            "count finished"
        );
        Ok(report)
    }
}

/// Build a pool with exactly one thread per worker.
///
/// Every worker parks on the start barrier, so a pool with fewer threads than
/// workers could never release it.
fn build_pool(workers: usize) -> Result<rayon::ThreadPool> {
    let limit = rayon::max_num_threads();
    if workers > limit {
        return Err(InfrastructureError::ThreadPoolCreation {
            details: format!("{workers} workers requested, at most {limit} threads supported"),
        }
        .into());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|index| format!("county-worker-{index}"))
        .build()
        .map_err(|e| InfrastructureError::ThreadPoolCreation { details: e.to_string() })?;

    let threads = pool.current_num_threads();
    if threads != workers {
        return Err(InfrastructureError::ThreadPoolCreation {
            details: format!("pool started {threads} threads for {workers} workers"),
        }
        .into());
    }
    Ok(pool)
}

/// 1ワーカー分の処理: 準備 → バリア待ち → 計測 → 報告
fn run_worker(index: usize, range: ByteRange, context: &WorkerContext) {
    // Setup stays outside the timed window, and a failed setup still arrives
    // so that the remaining workers are released.
    let prepared = context.counter.prepare(&context.config, range);

    if let Err(err) = context.barrier.arrive_and_wait() {
        context.aggregator.record_fault(err);
    }

    let reported = match prepared.and_then(|prepared| prepared.count()) {
        Ok(lines) => {
            debug!(worker = index, %range, lines = lines.value(), "range counted");
            context.aggregator.report(lines)
        }
        Err(err) => {
            warn!(worker = index, %range, error = %err, "range degraded to zero lines");
            context.aggregator.report_degraded()
        }
    };

    if let Err(err) = reported {
        error!(worker = index, %range, error = %err, "partial count rejected");
    }
}
