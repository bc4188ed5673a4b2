/// Convenience result type used across the crate.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error taxonomy used by config-editing APIs.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Errors while introspecting a config default into a schema.
    #[error("introspection error: {0}")]
    Introspection(String),

    /// Errors while repairing a legacy or degraded value shape.
    #[error("normalization error: {0}")]
    Normalization(String),

    /// Errors while importing user-supplied bulk values.
    #[error("import error: {0}")]
    Import(String),

    /// Errors surfaced by the update queue (replaced, cleared, timed out).
    #[error("queue error: {0}")]
    Queue(String),

    /// Errors when serializing or deserializing config data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ConfigError {
    /// Build a [`ConfigError::Introspection`] value.
    pub fn introspection(msg: impl Into<String>) -> Self {
        Self::Introspection(msg.into())
    }

    /// Build a [`ConfigError::Normalization`] value.
    pub fn normalization(msg: impl Into<String>) -> Self {
        Self::Normalization(msg.into())
    }

    /// Build a [`ConfigError::Import`] value.
    pub fn import(msg: impl Into<String>) -> Self {
        Self::Import(msg.into())
    }

    /// Build a [`ConfigError::Queue`] value.
    pub fn queue(msg: impl Into<String>) -> Self {
        Self::Queue(msg.into())
    }

    /// Build a [`ConfigError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
