pub type DotreelResult<T> = Result<T, DotreelError>;

#[derive(thiserror::Error, Debug)]
pub enum DotreelError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("frame source error: {0}")]
    Source(String),

    #[error("playback error: {0}")]
    Playback(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DotreelError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }

    pub fn playback(msg: impl Into<String>) -> Self {
        Self::Playback(msg.into())
    }
}
