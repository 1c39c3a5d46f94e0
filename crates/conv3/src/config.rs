//! Applier configuration, validation, and error types.
//!
//! [`ApplierConfig`] is the builder-input for a
//! [`ConvolutionKernelApplier`](crate::ConvolutionKernelApplier).
//! [`validate()`](ApplierConfig::validate) checks it once at build time so
//! that application itself only fails on grid or arithmetic problems.

use std::error::Error;
use std::fmt;

use crate::accumulate::Accumulation;
use conv3_core::EdgeBehavior;

// ── Execution ──────────────────────────────────────────────────────

/// Where the interior loop runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Execution {
    /// On the calling thread.
    #[default]
    Sequential,
    /// Split output rows into bands across scoped worker threads.
    ///
    /// Results are identical to [`Execution::Sequential`].
    Parallel {
        /// Number of worker threads. Must be in `1..=MAX_WORKERS`.
        workers: usize,
    },
}

impl Execution {
    /// Upper bound on configured workers.
    pub const MAX_WORKERS: usize = 256;

    /// Parallel execution with one worker per available CPU, clamped to
    /// `[1, MAX_WORKERS]`.
    pub fn auto() -> Self {
        let cpus = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);
        Self::Parallel {
            workers: cpus.clamp(1, Self::MAX_WORKERS),
        }
    }

    /// Workers actually spawned for `computed_rows` output rows.
    ///
    /// Never more than one per row; `Sequential` always resolves to 1.
    pub fn resolved_workers(&self, computed_rows: usize) -> usize {
        match *self {
            Self::Sequential => 1,
            Self::Parallel { workers } => workers.min(computed_rows).max(1),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`ApplierConfig::validate()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `Execution::Parallel` with zero workers.
    ZeroWorkers,
    /// `Execution::Parallel` above [`Execution::MAX_WORKERS`].
    TooManyWorkers {
        /// The configured worker count.
        requested: usize,
        /// The maximum allowed.
        max: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWorkers => write!(f, "parallel execution needs at least 1 worker"),
            Self::TooManyWorkers { requested, max } => {
                write!(f, "{requested} workers requested, maximum is {max}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── ApplierConfig ──────────────────────────────────────────────────

/// Complete configuration for a convolution kernel applier.
///
/// The default reproduces the plain interior-only convolution: border
/// cells absorbed, wrapping `i32` arithmetic, sequential execution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ApplierConfig {
    /// How border cells are treated. Default: `Absorb`.
    pub edge: EdgeBehavior,
    /// Overflow policy for `i32` output. Default: `Wrapping`.
    pub accumulation: Accumulation,
    /// Sequential or parallel execution. Default: `Sequential`.
    pub execution: Execution,
}

impl ApplierConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Execution::Parallel { workers } = self.execution {
            if workers == 0 {
                return Err(ConfigError::ZeroWorkers);
            }
            if workers > Execution::MAX_WORKERS {
                return Err(ConfigError::TooManyWorkers {
                    requested: workers,
                    max: Execution::MAX_WORKERS,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = ApplierConfig::default();
        assert_eq!(cfg.edge, EdgeBehavior::Absorb);
        assert_eq!(cfg.accumulation, Accumulation::Wrapping);
        assert_eq!(cfg.execution, Execution::Sequential);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_workers_rejected() {
        let cfg = ApplierConfig {
            execution: Execution::Parallel { workers: 0 },
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroWorkers));
    }

    #[test]
    fn too_many_workers_rejected() {
        let cfg = ApplierConfig {
            execution: Execution::Parallel { workers: 1000 },
            ..Default::default()
        };
        match cfg.validate() {
            Err(ConfigError::TooManyWorkers { requested, max }) => {
                assert_eq!(requested, 1000);
                assert_eq!(max, Execution::MAX_WORKERS);
            }
            other => panic!("expected TooManyWorkers, got {other:?}"),
        }
    }

    #[test]
    fn resolved_workers_capped_by_rows() {
        assert_eq!(Execution::Sequential.resolved_workers(100), 1);
        assert_eq!(Execution::Parallel { workers: 8 }.resolved_workers(3), 3);
        assert_eq!(Execution::Parallel { workers: 2 }.resolved_workers(10), 2);
        assert_eq!(Execution::Parallel { workers: 4 }.resolved_workers(0), 1);
    }

    #[test]
    fn auto_is_valid() {
        let cfg = ApplierConfig {
            execution: Execution::auto(),
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());
    }
}
