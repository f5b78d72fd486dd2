use thiserror::Error;

/// Errors surfaced by the board to its host
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Invalid surface size {width}x{height} at scale {scale}")]
    InvalidSurfaceSize { width: f32, height: f32, scale: f32 },

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to parse config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;
