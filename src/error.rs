use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BakeError {
    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Scaling '{path}' to {percent}% produces an empty image")]
    ScaleTooSmall { path: PathBuf, percent: u32 },

    #[error("Image '{path}' is fully transparent, nothing left after trimming")]
    FullyTransparent { path: PathBuf },

    #[error("No valid images found in input")]
    NoImages,

    #[error("Input path does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error(
        "Sprite '{path}' ({width}x{height}) exceeds the atlas size ({canvas_width}x{canvas_height})"
    )]
    SpriteTooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
        canvas_width: u32,
        canvas_height: u32,
    },

    #[error(
        "Unable to pack all images into {canvas_width}x{canvas_height}, consider a bigger output image"
    )]
    InsufficientSpace {
        canvas_width: u32,
        canvas_height: u32,
    },

    #[error("Failed to save image '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to compress PNG '{path}': {message}")]
    PngCompress { path: PathBuf, message: String },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
