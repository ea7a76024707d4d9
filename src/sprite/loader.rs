use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::ImageReader;
use log::info;

use super::{SourceSprite, TrimInfo, scale_by_percent, trim_sprite};
use crate::error::BakeError;

const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tga", "webp"];

/// Expand input arguments into the final list of image paths.
///
/// An argument that is a regular file but not a supported image is read as a
/// whitespace-separated list of image paths, one bake input per token.
/// Backslashes are normalized to forward slashes so lists generated on
/// Windows work everywhere.
pub fn resolve_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for input in inputs {
        if !input.exists() {
            return Err(BakeError::InputNotFound(input.clone()).into());
        }

        if input.is_file() && !is_supported_image(input) {
            let content = fs::read_to_string(input)
                .with_context(|| format!("failed to read input list: {}", input.display()))?;

            for token in content.split_whitespace() {
                let path = PathBuf::from(token.replace('\\', "/"));
                if !path.exists() {
                    return Err(BakeError::InputNotFound(path).into());
                }
                paths.push(path);
            }
        } else {
            paths.push(input.clone());
        }
    }

    Ok(paths)
}

/// Decode every input into a canonical RGBA sprite, scaling and trimming
/// as requested. Order of the result matches the input order.
pub fn load_sprites(paths: &[PathBuf], scale_percent: u32, trim: bool) -> Result<Vec<SourceSprite>> {
    if paths.is_empty() {
        return Err(BakeError::NoImages.into());
    }

    info!("Loading {} images...", paths.len());

    paths
        .iter()
        .map(|path| load_single_sprite(path, scale_percent, trim))
        .collect()
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn load_single_sprite(path: &Path, scale_percent: u32, trim: bool) -> Result<SourceSprite> {
    let img = ImageReader::open(path)
        .map_err(|e| BakeError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| BakeError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .into_rgba8();

    // Scale before trimming so the trim box tracks the resampled alpha
    let img = if scale_percent != 100 {
        scale_by_percent(&img, scale_percent).ok_or(BakeError::ScaleTooSmall {
            path: path.to_path_buf(),
            percent: scale_percent,
        })?
    } else {
        img
    };

    let (image, trim_info) = if trim {
        trim_sprite(&img).ok_or(BakeError::FullyTransparent {
            path: path.to_path_buf(),
        })?
    } else {
        let (w, h) = img.dimensions();
        (img, TrimInfo::untrimmed(w, h))
    };

    Ok(SourceSprite {
        path: path.to_path_buf(),
        image,
        trim_info,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_supported_image() {
        assert!(is_supported_image(Path::new("hero.png")));
        assert!(is_supported_image(Path::new("hero.PNG")));
        assert!(is_supported_image(Path::new("dir/hero.jpeg")));
        assert!(!is_supported_image(Path::new("hero.txt")));
        assert!(!is_supported_image(Path::new("hero")));
    }

    #[test]
    fn test_resolve_inputs_expands_list_files() {
        let dir = std::env::temp_dir().join(format!("spritebake-inputs-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let image = dir.join("a.png");
        fs::write(&image, b"").unwrap();

        // List files may come from Windows build scripts
        let listed = format!("{}", image.display()).replace('/', "\\");
        let list = dir.join("images.txt");
        fs::write(&list, format!("{}\n", listed)).unwrap();

        let resolved = resolve_inputs(&[list]).unwrap();
        assert_eq!(resolved.len(), 1);
        assert!(resolved[0].exists());

        // Image paths pass through untouched
        let direct = resolve_inputs(&[image.clone()]).unwrap();
        assert_eq!(direct, vec![image]);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_resolve_inputs_rejects_missing_path() {
        let result = resolve_inputs(&[PathBuf::from("does-not-exist.png")]);
        assert!(result.is_err());
    }
}
