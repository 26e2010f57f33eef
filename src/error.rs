//! Error types for logo generation

use thiserror::Error;

/// Result type alias for logo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or emitting a logo
#[derive(Error, Debug)]
pub enum Error {
    /// Variant name is not one of the known presets
    #[error("Unknown variant '{0}' (expected one of: light, dark, wine, none)")]
    UnknownVariant(String),

    /// The crate was built without a rasterizer backend
    #[error("No rasterizer available: PNG output requires the `raster` feature")]
    RasterizerUnavailable,

    /// Failed to rasterize the vector document
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// The markup could not be read or written
    #[error("Markup error: {0}")]
    Markup(#[from] quick_xml::Error),

    /// The markup was readable but not a single well-formed document
    #[error("Malformed document: {0}")]
    Malformed(String),

    /// Reading or writing the output file failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
