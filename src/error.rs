use std::path::PathBuf;

pub type FadeloopResult<T> = Result<T, FadeloopError>;

#[derive(thiserror::Error, Debug)]
pub enum FadeloopError {
    #[error("no images found in '{}' (recognized extensions only, case-sensitive)", .0.display())]
    NoImagesFound(PathBuf),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("invalid crop box: {0}")]
    InvalidCropBox(String),

    #[error("invalid transition count: {0}")]
    InvalidTransitionCount(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FadeloopError {
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn invalid_crop_box(msg: impl Into<String>) -> Self {
        Self::InvalidCropBox(msg.into())
    }

    pub fn invalid_transition_count(msg: impl Into<String>) -> Self {
        Self::InvalidTransitionCount(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
