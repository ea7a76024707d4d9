use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::Result;
use image::ImageFormat;

use crate::atlas::Atlas;
use crate::cli::CompressionLevel;
use crate::error::BakeError;

/// Save the atlas image as PNG, optionally optimized with oxipng
pub fn save_atlas_image(
    atlas: &Atlas,
    path: &Path,
    compress: Option<CompressionLevel>,
) -> Result<()> {
    // Encode to PNG in memory
    let mut png_data = Cursor::new(Vec::new());
    atlas
        .image
        .write_to(&mut png_data, ImageFormat::Png)
        .map_err(|e| BakeError::ImageSave {
            path: path.to_path_buf(),
            source: e,
        })?;

    let output_data = if let Some(level) = compress {
        let opts = match level {
            CompressionLevel::Level(n) => oxipng::Options::from_preset(n),
            CompressionLevel::Max => oxipng::Options::max_compression(),
        };
        oxipng::optimize_from_memory(&png_data.into_inner(), &opts).map_err(|e| {
            BakeError::PngCompress {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?
    } else {
        png_data.into_inner()
    };

    fs::write(path, output_data).map_err(|e| BakeError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
