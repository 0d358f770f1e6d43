use thiserror::Error;

/// Everything that can go wrong while parsing context strings, resolving
/// filters against the universe, or reading/writing the YAML files.
#[derive(Debug, Error)]
pub enum SelectError {
    // Grammar errors. The offending string is carried so the caller can name
    // the filter (or universe entry) that failed.
    #[error("context string is empty")]
    EmptyContext,

    #[error("invalid context '{context}': at most one '.' and one '+' separator is allowed")]
    MalformedSeparators { context: String },

    #[error("invalid context '{context}': the build type ('.') must come before the target type ('+')")]
    SeparatorOrder { context: String },

    /// A syntactically valid filter selected nothing from the universe.
    #[error("no known context matches filter '{filter}'")]
    NoMatch { filter: String },

    // File errors from the index/set loader.
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("YAML error in '{path}': {source}")]
    Yaml {
        path: String,
        source: serde_yaml::Error,
    },
}

// Type alias for results that use `SelectError` as the error type
pub type Result<T> = std::result::Result<T, SelectError>;
