/// Convenience result type used across curtain.
pub type CurtainResult<T> = Result<T, CurtainError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum CurtainError {
    /// Invalid user-provided page or section configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed keyframe tables or choreography channels.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while laying out sections or resolving scroll extents.
    #[error("layout error: {0}")]
    Layout(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CurtainError {
    /// Build a [`CurtainError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CurtainError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`CurtainError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`CurtainError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Prefix the message with `scope`, keeping the error kind.
    pub fn within(self, scope: impl std::fmt::Display) -> Self {
        match self {
            Self::Validation(m) => Self::Validation(format!("{scope}: {m}")),
            Self::Animation(m) => Self::Animation(format!("{scope}: {m}")),
            Self::Layout(m) => Self::Layout(format!("{scope}: {m}")),
            Self::Serde(m) => Self::Serde(format!("{scope}: {m}")),
            Self::Other(e) => Self::Other(e.context(scope.to_string())),
        }
    }
}

impl From<serde_json::Error> for CurtainError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
