/// Crate-level error types for freshdoc.
///
/// Configuration errors surface to the caller before any task runs.
/// Everything that happens inside a running task is caught at the task
/// boundary and turned into a diagnostic instead (see `task.rs`), so only
/// pre-flight failures ever propagate out of the core entry point.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An exclusion pattern could not be compiled into a matcher.
    #[error("invalid exclusion glob `{pattern}`: {reason}")]
    InvalidGlob {
        /// The glob pattern as supplied by the caller.
        pattern: String,
        /// Why compilation failed.
        reason: String,
    },

    /// A repository URL failed syntactic validation.
    #[error("invalid repository URL: {url}")]
    InvalidRepoUrl {
        /// The rejected URL, verbatim.
        url: String,
    },

    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// The HTTP client for liveness probing could not be constructed.
    #[error("link prober setup failed: {reason}")]
    ProberSetup {
        /// Description of the construction failure.
        reason: String,
    },

    /// A repository could not be cloned or prepared (branch-not-found is
    /// handled separately and never reaches this variant).
    #[error("checkout failed: {reason}")]
    Checkout {
        /// Description of the checkout failure, credential-free.
        reason: String,
    },
}
