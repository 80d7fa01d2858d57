use thiserror::Error;

/// Errors raised while rewriting a parsed tree into the domain model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("Shape mismatch: expected {expected}, but found {found}")]
    ShapeMismatch { expected: String, found: String },

    #[error("Comparison operator '{0}' not recognised")]
    InvalidOperator(String),

    #[error("A combined predicate must hold at least one predicate")]
    MalformedCombination,

    #[error("Document nesting exceeds the maximum depth of {limit}")]
    DepthExceeded { limit: usize },
}

/// Errors detected while assembling a rule registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Rules '{first}' and '{second}' can match the same shape")]
    AmbiguousPattern { first: String, second: String },

    #[error(
        "Rule '{later}' is more specific than '{earlier}' in family '{family}' but was registered after it"
    )]
    PrecedenceOrder {
        family: String,
        earlier: String,
        later: String,
    },
}

/// Errors produced by the bundled document parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Failed to parse tree JSON: {0}")]
    Json(String),

    #[error("Unsupported value in parsed tree: {0}")]
    UnsupportedValue(String),
}

/// Errors raised when persisting or loading a compiled node.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("Artifact error: {0}")]
    Generic(String),
}

/// Every failure the interpreter entry point can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpretError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Transform(#[from] TransformError),
}
