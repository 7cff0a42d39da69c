use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PixswapError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("source has {src_pixels} pixels but target has {tgt_pixels}; pixel counts must match")]
    DimensionMismatch { src_pixels: usize, tgt_pixels: usize },

    #[error("failed to decode image {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode image {}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, PixswapError>;
