use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{info, warn};
use serde::Serialize;
use serde_json::Value;

use crate::atlas::Atlas;
use crate::error::BakeError;
use crate::metadata::{SpriteGroup, frame_name, group_frames};

#[derive(Serialize)]
struct Size {
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct DocFrame {
    name: String,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct FrameOffset {
    x: f32,
    y: f32,
}

#[derive(Serialize)]
struct AnimationDescriptor {
    name: String,
    #[serde(rename = "loop")]
    looping: bool,
    frame_duration: u32,
    frames: Vec<usize>,
}

/// Persisted per-sprite metadata.
///
/// `frames_offsets` and `animations` are authored data: they are kept as raw
/// JSON so content carried over from a pre-existing document survives
/// byte-for-byte, custom fields included.
#[derive(Serialize)]
struct SpriteDocument {
    texture: String,
    source_folder: String,
    texture_size: Size,
    frames: Vec<DocFrame>,
    frames_offsets: Value,
    animations: Value,
}

/// Authored arrays recovered from a document written by a previous bake
#[derive(Default)]
struct ExistingOverrides {
    animations: Option<Value>,
    frames_offsets: Option<Value>,
}

/// Write one `.sprite` document per sprite name plus the index document
/// listing them all. Returns the sprite document paths.
///
/// `animations` and `frames_offsets` of a pre-existing document at the same
/// path are carried over verbatim; everything else is recomputed from the
/// current placements.
pub fn write_sprite_documents(
    atlas: &Atlas,
    input_files: &[String],
    output_image: &Path,
    sprite_folder: Option<&Path>,
) -> Result<Vec<PathBuf>> {
    let out_dir = sprite_folder
        .map(Path::to_path_buf)
        .or_else(|| output_image.parent().map(Path::to_path_buf))
        .unwrap_or_default();

    let groups = group_frames(input_files);
    let mut written = Vec::with_capacity(groups.len());

    for (sprite_name, group) in &groups {
        let doc_path = out_dir.join(format!("{sprite_name}.sprite"));
        let overrides = load_existing_overrides(&doc_path);

        let document = build_document(atlas, output_image, sprite_name, group, overrides)?;
        let content = serde_json::to_string_pretty(&document)?;

        fs::write(&doc_path, content).map_err(|e| BakeError::OutputWrite {
            path: doc_path.clone(),
            source: e,
        })?;

        info!("Wrote {}", doc_path.display());
        written.push(doc_path);
    }

    write_index(&out_dir, &written)?;

    Ok(written)
}

fn build_document(
    atlas: &Atlas,
    output_image: &Path,
    sprite_name: &str,
    group: &SpriteGroup,
    overrides: ExistingOverrides,
) -> Result<SpriteDocument> {
    let mut frames = Vec::with_capacity(group.frames.len());
    let mut offsets = Vec::with_capacity(group.frames.len());

    for frame in &group.frames {
        let placed = &atlas.sprites[frame.placement_id];
        frames.push(DocFrame {
            name: frame_name(sprite_name, frame),
            x: placed.x,
            y: placed.y,
            w: placed.width,
            h: placed.height,
        });

        // Trimming moves a frame's origin; the recorded delta lets a
        // renderer keep the frame anchored where the untrimmed art was.
        let (dx, dy) = placed.trim_info.center_delta();
        offsets.push(FrameOffset { x: dx, y: dy });
    }

    let animations = synthesize_animations(group);

    Ok(SpriteDocument {
        texture: output_image.to_string_lossy().into_owned(),
        source_folder: group.source_folder.clone(),
        texture_size: Size {
            w: atlas.width,
            h: atlas.height,
        },
        frames,
        frames_offsets: match overrides.frames_offsets {
            Some(existing) => existing,
            None => serde_json::to_value(&offsets)?,
        },
        animations: match overrides.animations {
            Some(existing) => existing,
            None => serde_json::to_value(&animations)?,
        },
    })
}

/// Derive animations from the tagged frames; a sprite with no tags gets a
/// single-frame `default` animation.
fn synthesize_animations(group: &SpriteGroup) -> Vec<AnimationDescriptor> {
    let mut by_name: BTreeMap<&str, Vec<usize>> = BTreeMap::new();

    for (index, frame) in group.frames.iter().enumerate() {
        if let Some(animation) = &frame.animation {
            by_name.entry(animation).or_default().push(index);
        }
    }

    if by_name.is_empty() {
        by_name.insert("default", vec![0]);
    }

    by_name
        .into_iter()
        .map(|(name, frames)| AnimationDescriptor {
            name: name.to_string(),
            looping: true,
            frame_duration: 100,
            frames,
        })
        .collect()
}

/// Recover the authored arrays from a previous bake's document.
///
/// Absence and corruption both yield no overrides; a document that exists
/// but cannot be parsed is reported and otherwise ignored, it must not
/// abort the bake.
fn load_existing_overrides(path: &Path) -> ExistingOverrides {
    let Ok(content) = fs::read_to_string(path) else {
        return ExistingOverrides::default();
    };

    let value: Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring malformed sprite document '{}': {}", path.display(), e);
            return ExistingOverrides::default();
        }
    };

    let pick = |key: &str| value.get(key).filter(|v| v.is_array()).cloned();

    ExistingOverrides {
        animations: pick("animations"),
        frames_offsets: pick("frames_offsets"),
    }
}

fn write_index(out_dir: &Path, documents: &[PathBuf]) -> Result<()> {
    #[derive(Serialize)]
    struct Index {
        all_sprites: Vec<String>,
    }

    let mut all_sprites: Vec<String> = documents
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect();
    all_sprites.sort();

    let index_path = out_dir.join("all_sprite_files.json");
    let content = serde_json::to_string_pretty(&Index { all_sprites })?;

    fs::write(&index_path, content).map_err(|e| BakeError::OutputWrite {
        path: index_path,
        source: e,
    })?;

    Ok(())
}
