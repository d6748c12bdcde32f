#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Math/markdown conversion failed. The message is surfaced verbatim in
    /// the fallback error block.
    #[error("{message}")]
    Math { message: String },
}

impl RenderError {
    pub fn math(message: impl Into<String>) -> Self {
        RenderError::Math {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
