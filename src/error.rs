use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid hex colour (expected #rrggbb): {0}")]
    InvalidHex(String),
}

#[derive(Error, Debug)]
pub enum RasterError {
    #[error("Invalid coordinate for {text:?}: ({x}, {y})")]
    InvalidCoordinate { text: String, x: f64, y: f64 },

    #[error("Font style {0:?} is not supported, only normal text is rendered")]
    UnsupportedFontStyle(crate::surface::FontStyle),

    #[error("Failed to parse font data")]
    InvalidFont,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum BrandingError {
    #[error("Configuration error: {0}")]
    Config(#[from] toml_edit::de::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Render error: {0}")]
    Raster(#[from] RasterError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
