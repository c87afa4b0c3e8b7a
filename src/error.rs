//! Error taxonomy for construction-time and sampling-time failures.
//!
//! `OutOfDomain` and `DegenerateHit` from the design's error table are
//! deliberately absent here: both are silent, by-design runtime outcomes
//! (a zero emissivity lookup, a forced hit-miss on an exact-tie ray) rather
//! than exceptional conditions, so they carry no variant.

use std::path::PathBuf;

/// Errors raised while constructing or sampling from the wall-load engine.
#[derive(Debug, thiserror::Error)]
pub enum WallLoadError {
    /// An eqdsk or `.msh` input file could not be opened.
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// An eqdsk or `.msh` input file was opened but its contents did not
    /// match the expected format.
    #[error("malformed file {path}: {reason}")]
    MalformedFile {
        /// Path of the offending file.
        path: PathBuf,
        /// Human-readable description of what was expected.
        reason: String,
    },

    /// A construction-time invariant was violated: a PDF with non-positive
    /// integral, a degenerate equilibrium (ψ_axis = ψ_edge), or a mesh with
    /// zero triangles.
    #[error("domain error: {0}")]
    DomainError(String),

    /// A rejection sampler exceeded its trial budget without accepting a
    /// candidate, indicating an effectively all-zero target distribution.
    #[error("rejection sampling stalled after {trials} trials")]
    RejectionStall {
        /// Number of trials attempted before giving up.
        trials: u32,
    },

    /// Wraps I/O failures other than "file not found" encountered while
    /// reading an eqdsk or `.msh` file.
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// Path being read when the error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl WallLoadError {
    pub(crate) fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            WallLoadError::FileNotFound(path.to_path_buf())
        } else {
            WallLoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub(crate) fn malformed(path: &std::path::Path, reason: impl Into<String>) -> Self {
        WallLoadError::MalformedFile {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WallLoadError>;
