//! Latency statistics for decode benchmarks.
//!
//! Collects per-batch service times and reports minimum, maximum, average and
//! a coarse histogram. Trackers can be merged so each worker thread keeps its
//! own and the results are combined at the end.

/// Number of histogram buckets; the last one collects everything above.
const NUM_BUCKETS: usize = 20;

/// Tracks latency statistics with minimal overhead.
///
/// Accumulates latency measurements in nanoseconds and keeps a histogram of
/// fixed-width buckets. The bucket width is chosen by the caller to suit the
/// expected scale of the measurements.
#[derive(Clone, Debug)]
pub struct LatencyStats {
    pub min: u64,
    pub max: u64,
    pub sum: u64,
    pub count: u64,
    pub bucket_ns: u64,
    pub buckets: [u64; NUM_BUCKETS],
}

impl LatencyStats {
    /// Creates an empty tracker.
    ///
    /// # Arguments
    ///
    /// * `bucket_ns` - Width of one histogram bucket in nanoseconds
    pub fn new(bucket_ns: u64) -> Self {
        Self {
            min: u64::MAX,
            max: 0,
            sum: 0,
            count: 0,
            bucket_ns: bucket_ns.max(1),
            buckets: [0; NUM_BUCKETS],
        }
    }

    /// Records a latency measurement in nanoseconds.
    pub fn update(&mut self, nanos: u64) {
        self.min = self.min.min(nanos);
        self.max = self.max.max(nanos);
        self.sum += nanos;
        self.count += 1;

        let idx = (nanos / self.bucket_ns).min(NUM_BUCKETS as u64 - 1) as usize;
        self.buckets[idx] += 1;
    }

    /// Folds another tracker with the same bucket width into this one.
    pub fn merge(mut self, other: Self) -> Self {
        debug_assert_eq!(self.bucket_ns, other.bucket_ns);
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.sum += other.sum;
        self.count += other.count;
        for (mine, theirs) in self.buckets.iter_mut().zip(other.buckets) {
            *mine += theirs;
        }
        self
    }

    /// Average latency in nanoseconds, or 0.0 with no measurements.
    pub fn avg(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        }
    }

    /// Prints a formatted report of latency statistics.
    ///
    /// Units switch from nanoseconds to microseconds once the average reaches
    /// one microsecond.
    pub fn print_report(&self) {
        println!("\nLatency Metrics (per batch)");
        println!("Count: {}", self.count);
        if self.count == 0 {
            return;
        }

        let avg_ns = self.avg();
        if avg_ns < 1000.0 {
            println!("Min:   {:.2} ns", self.min as f64);
            println!("Avg:   {:.2} ns", avg_ns);
            println!("Max:   {:.2} ns", self.max as f64);
        } else {
            println!("Min:   {:.2} us", self.min as f64 / 1000.0);
            println!("Avg:   {:.2} us", avg_ns / 1000.0);
            println!("Max:   {:.2} us", self.max as f64 / 1000.0);
        }

        println!("Distribution ({} ns buckets):", self.bucket_ns);
        for (i, &count) in self.buckets.iter().enumerate() {
            if count > 0 {
                let range_end = if i == NUM_BUCKETS - 1 { ">" } else { "" };
                let lower = i as u64 * self.bucket_ns;
                let upper = (i as u64 + 1) * self.bucket_ns;
                println!("[{:6}-{:6}{} ns]: {}", lower, upper, range_end, count);
            }
        }
    }
}
