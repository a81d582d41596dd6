use serde::{Deserialize, Serialize};

/// Shape of the terminal-distance histogram: `buckets` bins of
/// `bucket_width`, starting at distance 0.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistogramSpec {
    pub bucket_width: f32,
    pub buckets: usize,
}

impl Default for HistogramSpec {
    fn default() -> Self {
        Self {
            bucket_width: 1.0,
            buckets: 32,
        }
    }
}

impl HistogramSpec {
    pub fn is_valid(&self) -> bool {
        self.bucket_width.is_finite() && self.bucket_width > 0.0 && self.buckets > 0
    }
}

/// Counts of evaluated goal distances. Distances are unsigned, so landings
/// on either side of the goal at the same offset share a bucket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistanceHistogram {
    pub bucket_width: f32,
    pub counts: Vec<u64>,
    pub exact: u64,
    pub overflow: u64,
    pub min: Option<f32>,
}

impl DistanceHistogram {
    pub fn new(spec: HistogramSpec) -> Self {
        Self {
            bucket_width: spec.bucket_width,
            counts: vec![0; spec.buckets],
            exact: 0,
            overflow: 0,
            min: None,
        }
    }

    pub fn record(&mut self, distance: f32) {
        if distance == 0.0 {
            self.exact += 1;
        }
        self.min = Some(self.min.map_or(distance, |min| min.min(distance)));

        let bucket = (distance / self.bucket_width) as usize;
        match self.counts.get_mut(bucket) {
            Some(count) => *count += 1,
            None => self.overflow += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum::<u64>() + self.overflow
    }
}

impl Default for DistanceHistogram {
    fn default() -> Self {
        Self::new(HistogramSpec::default())
    }
}

/// Counters for one search run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States dequeued and expanded.
    pub expanded: u64,
    /// Children produced by the transition function.
    pub generated: u64,
    pub duplicates: u64,
    pub beyond_depth: u64,
    pub pruned: u64,
    /// Children compared against the goal.
    pub evaluated: u64,
    pub improvements: u64,
    /// States retained in the arena, root included.
    pub retained: u64,
    pub max_frontier: usize,
    pub deepest: u32,
    pub solved: bool,
    pub terminal_distances: DistanceHistogram,
}

impl SearchStats {
    pub fn new(spec: HistogramSpec) -> Self {
        Self {
            retained: 1,
            terminal_distances: DistanceHistogram::new(spec),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_buckets_and_overflow() {
        let mut histogram = DistanceHistogram::new(HistogramSpec {
            bucket_width: 0.5,
            buckets: 4,
        });
        for distance in [0.0, 0.2, 0.6, 1.9, 2.0, 50.0] {
            histogram.record(distance);
        }
        assert_eq!(histogram.counts, vec![2, 1, 0, 1]);
        assert_eq!(histogram.overflow, 2);
        assert_eq!(histogram.exact, 1);
        assert_eq!(histogram.min, Some(0.0));
        assert_eq!(histogram.total(), 6);
    }

    #[test]
    fn spec_validation() {
        assert!(HistogramSpec::default().is_valid());
        assert!(!HistogramSpec {
            bucket_width: 0.0,
            buckets: 4
        }
        .is_valid());
        assert!(!HistogramSpec {
            bucket_width: 1.0,
            buckets: 0
        }
        .is_valid());
    }
}
