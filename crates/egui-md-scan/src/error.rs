use std::io;

/// Errors from loading styles and images
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("image error: {0}")]
    Image(#[from] image::error::ImageError),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("open error: {0}")]
    Open(#[from] opener::OpenError),
}

pub type Result<T> = std::result::Result<T, Error>;
