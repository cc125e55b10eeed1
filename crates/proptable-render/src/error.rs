//! Error types for props table rendering.

use thiserror::Error;

/// Errors from loading render configuration or running templates.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The configuration was not valid YAML or did not match its shape.
    #[error("invalid panel config: {0}")]
    Config(#[from] serde_yaml::Error),

    /// The configuration parsed but holds an unusable value.
    #[error("invalid panel config: {0}")]
    InvalidConfig(String),

    /// A template using the props filters failed to compile or render.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RenderError::InvalidConfig("width must be greater than zero".into());
        assert!(err.to_string().contains("invalid panel config"));
        assert!(err.to_string().contains("width"));
    }

    #[test]
    fn from_minijinja_error() {
        let mj_err = minijinja::Error::new(minijinja::ErrorKind::SyntaxError, "unexpected end");
        let err: RenderError = mj_err.into();
        assert!(matches!(err, RenderError::Template(_)));
    }
}
