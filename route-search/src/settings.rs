//! Engine tuning read from the environment once at startup. CLI flags are
//! applied on top by the binary.

use std::env;

use crate::engine::{SearchOptions, DEFAULT_PARALLEL_MIN_INPUTS};

pub const JOBS_ENV: &str = "TAS_ROUTE_JOBS";
pub const PARALLEL_MIN_INPUTS_ENV: &str = "TAS_ROUTE_PARALLEL_MIN_INPUTS";

/// Defaults with any valid environment overrides applied. Unparseable or
/// zero values are ignored with a warning.
pub fn from_env() -> SearchOptions {
    from_lookup(|name| env::var(name).ok())
}

pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> SearchOptions {
    SearchOptions {
        dedup: true,
        jobs: read_positive(&lookup, JOBS_ENV),
        parallel_min_inputs: read_positive(&lookup, PARALLEL_MIN_INPUTS_ENV)
            .unwrap_or(DEFAULT_PARALLEL_MIN_INPUTS),
    }
}

fn read_positive(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<usize> {
    let raw = lookup(name)?;
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Some(value),
        _ => {
            tracing::warn!("{name}={raw:?} is not a positive integer; ignoring it.");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn unset_environment_gives_defaults() {
        assert_eq!(from_lookup(lookup_from(&[])), SearchOptions::default());
    }

    #[test]
    fn valid_overrides_apply() {
        let options = from_lookup(lookup_from(&[
            (JOBS_ENV, "4"),
            (PARALLEL_MIN_INPUTS_ENV, " 16 "),
        ]));
        assert_eq!(options.jobs, Some(4));
        assert_eq!(options.parallel_min_inputs, 16);
    }

    #[test]
    fn bad_values_fall_back() {
        let options = from_lookup(lookup_from(&[
            (JOBS_ENV, "0"),
            (PARALLEL_MIN_INPUTS_ENV, "lots"),
        ]));
        assert_eq!(options.jobs, None);
        assert_eq!(options.parallel_min_inputs, DEFAULT_PARALLEL_MIN_INPUTS);
    }
}
