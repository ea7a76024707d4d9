use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::atlas::Atlas;
use crate::error::BakeError;

#[derive(Serialize)]
struct GenericSheet {
    frames: Vec<GenericFrame>,
    meta: Meta,
}

#[derive(Serialize)]
struct GenericFrame {
    filename: String,
    rotated: bool,
    trimmed: bool,
    frame: Region,
    pivot: Pivot,
    source_size: Size,
    sprite_source_size: Region,
}

#[derive(Serialize)]
struct Region {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct Pivot {
    x: f32,
    y: f32,
}

#[derive(Serialize)]
struct Size {
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct Meta {
    app: &'static str,
    version: &'static str,
    image: String,
    format: &'static str,
    size: Size,
    scale: &'static str,
}

/// Write the flat metadata document: one frame per placement, no grouping,
/// pivot fixed at the frame center.
///
/// The document lands next to the atlas image, with the extension replaced
/// by `.json`. Returns the written path.
pub fn write_generic_sheet(
    atlas: &Atlas,
    input_files: &[String],
    output_image: &Path,
    trimmed: bool,
) -> Result<PathBuf> {
    let frames = atlas
        .sprites
        .iter()
        .map(|sprite| GenericFrame {
            filename: input_files[sprite.source_index].clone(),
            rotated: false,
            trimmed,
            frame: Region {
                x: sprite.x,
                y: sprite.y,
                w: sprite.width,
                h: sprite.height,
            },
            pivot: Pivot { x: 0.5, y: 0.5 },
            source_size: Size {
                w: sprite.width,
                h: sprite.height,
            },
            sprite_source_size: Region {
                x: 0,
                y: 0,
                w: sprite.width,
                h: sprite.height,
            },
        })
        .collect();

    let sheet = GenericSheet {
        frames,
        meta: Meta {
            app: "spritebake",
            version: env!("CARGO_PKG_VERSION"),
            image: output_image.to_string_lossy().into_owned(),
            format: "RGBA8888",
            size: Size {
                w: atlas.width,
                h: atlas.height,
            },
            scale: "1",
        },
    };

    let json_path = output_image.with_extension("json");
    let content = serde_json::to_string_pretty(&sheet)?;

    fs::write(&json_path, content).map_err(|e| BakeError::OutputWrite {
        path: json_path.clone(),
        source: e,
    })?;

    Ok(json_path)
}
