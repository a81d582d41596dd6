//! Breadth-first route search over the airborne movement model.
//!
//! One generic engine ([`engine::search`]) driven by a [`policy::SearchPolicy`];
//! the built-in [`catalog`] and JSON scenario files are both plain
//! [`scenario::Scenario`] values.

pub mod arena;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod policy;
pub mod progress;
pub mod report;
pub mod scenario;
pub mod settings;
pub mod stats;
pub mod util;

pub use arena::{Arena, Node, NodeId};
pub use engine::{replay, search, Route, SearchOptions, SearchReport};
pub use error::{ConfigIssue, SearchError};
pub use policy::SearchPolicy;
pub use progress::{NoProgress, Progress, ProgressSink, TracingProgress};
pub use scenario::Scenario;
pub use stats::SearchStats;
