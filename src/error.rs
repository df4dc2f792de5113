use thiserror::Error;

/// Top-level error type for the Fenestra floor-plan resolvers.
#[derive(Debug, Error)]
pub enum FenestraError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric input.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),
}

/// Errors raised when a caller-supplied id is not present in the floor plan.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),
}

/// Errors related to resolver configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tolerance {name} = {value} must be finite and non-negative")]
    InvalidTolerance { name: &'static str, value: f64 },
}

/// Convenience type alias for results using [`FenestraError`].
pub type Result<T> = std::result::Result<T, FenestraError>;
