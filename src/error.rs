use std::path::PathBuf;

use thiserror::Error;

/// Returned when a zero-length (or non-finite) vector is normalized.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cannot normalize a zero-length vector")]
pub struct DegenerateVectorError;

/// A scene that cannot be rendered. Raised once, before any pixel is produced.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("scene has no camera")]
    MissingCamera,

    #[error("camera view plane must have positive size, got {width} x {height}")]
    InvalidCamera { width: f64, height: f64 },

    #[error("sphere at index {index} has non-positive radius {radius}")]
    DegenerateSphere { index: usize, radius: f64 },

    #[error("plane at index {index} has a zero-length normal")]
    DegeneratePlane { index: usize },

    #[error("spotlight at index {index} has a zero-length direction")]
    DegenerateSpotDirection { index: usize },

    #[error("spotlight at index {index} has invalid cone angle {degrees} degrees")]
    InvalidConeAngle { index: usize, degrees: f64 },

    #[error("{field} of object at index {index} has a component outside [0, 1]")]
    ColorOutOfRange { index: usize, field: &'static str },

    #[error("{field} of object at index {index} is not finite")]
    NonFinite { index: usize, field: &'static str },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read scene file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed scene description: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("resolution must be positive, got {width} x {height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("cannot infer an image format from {0:?}, pass --format")]
    UnknownFormat(PathBuf),

    #[error("could not write image {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}
