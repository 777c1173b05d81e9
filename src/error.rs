//! Crate error type
//!
//! Geometry, motion and timing never fail. Only the edges that touch text or
//! the filesystem (tile maps, settings) return errors.

use thiserror::Error;

/// Convenience alias used by fallible crate APIs
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("tile map error: {0}")]
    TileMap(#[from] TileMapError),

    #[error("unknown quality preset {0:?}")]
    UnknownPreset(String),
}

/// Problems found while reading a tile map
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileMapError {
    /// The map ran out of tokens before every tile was read
    #[error("unexpected end of map at tile {index}")]
    UnexpectedEof { index: usize },

    /// A token could not be read as an integer
    #[error("invalid token {token:?} at tile {index}")]
    InvalidToken { index: usize, token: String },

    /// A tile number outside the sprite sheet
    #[error("invalid tile type {value} at tile {index}")]
    InvalidTileType { index: usize, value: i64 },
}
