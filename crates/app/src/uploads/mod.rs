//! Image uploads to the hosted media service.

use thiserror::Error;

pub mod cloudinary;

pub use cloudinary::{ImageUploader, UploadResponse};

/// Errors raised while uploading an image.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Reading the image from disk failed.
    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),

    /// An HTTP transport or body decoding error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}
