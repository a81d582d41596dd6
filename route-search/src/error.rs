use core::fmt;

use crate::stats::SearchStats;

/// Reasons a search configuration is rejected before the loop starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigIssue {
    InvertedInputRange,
    EmptyInputSpace,
    ZeroMaxDepth,
    EvaluationDepthOutOfRange { depth: u32, max_depth: u32 },
    NonFiniteRoot,
    NonFiniteGoal,
    RootPruned,
    ZeroJobs,
    InvalidHistogram { bucket_width: f32, buckets: usize },
    InvalidRule(&'static str),
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedInputRange => write!(f, "input range has min > max on an axis"),
            Self::EmptyInputSpace => write!(f, "input range contains no admissible input"),
            Self::ZeroMaxDepth => write!(f, "max depth must be at least 1"),
            Self::EvaluationDepthOutOfRange { depth, max_depth } => write!(
                f,
                "evaluation depth {depth} outside 1..={max_depth}"
            ),
            Self::NonFiniteRoot => write!(f, "root state has a non-finite component"),
            Self::NonFiniteGoal => write!(f, "goal has a non-finite coordinate"),
            Self::RootPruned => write!(f, "pruning policy rejects the root state"),
            Self::ZeroJobs => write!(f, "jobs must be >= 1 when provided"),
            Self::InvalidHistogram {
                bucket_width,
                buckets,
            } => write!(
                f,
                "histogram needs a positive bucket width and at least one bucket (width={bucket_width}, buckets={buckets})"
            ),
            Self::InvalidRule(detail) => write!(f, "invalid rule: {detail}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SearchError {
    InvalidSearchConfiguration(ConfigIssue),
    NoSolutionFound { stats: Box<SearchStats> },
    ThreadPool(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSearchConfiguration(issue) => {
                write!(f, "invalid search configuration: {issue}")
            }
            Self::NoSolutionFound { stats } => write!(
                f,
                "no solution found: expanded={} evaluated={} pruned={}",
                stats.expanded, stats.evaluated, stats.pruned
            ),
            Self::ThreadPool(detail) => write!(f, "failed to build thread pool: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<ConfigIssue> for SearchError {
    fn from(issue: ConfigIssue) -> Self {
        Self::InvalidSearchConfiguration(issue)
    }
}
