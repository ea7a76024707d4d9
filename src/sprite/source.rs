use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Trimming information to reconstruct original sprite positioning
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct TrimInfo {
    /// Pixels trimmed from the left edge
    pub offset_x: u32,
    /// Pixels trimmed from the top edge
    pub offset_y: u32,
    /// Original width before trimming
    pub source_width: u32,
    /// Original height before trimming
    pub source_height: u32,
    /// Trimmed width
    pub trimmed_width: u32,
    /// Trimmed height
    pub trimmed_height: u32,
}

impl TrimInfo {
    /// Create TrimInfo for an untrimmed sprite
    pub fn untrimmed(width: u32, height: u32) -> Self {
        Self {
            offset_x: 0,
            offset_y: 0,
            source_width: width,
            source_height: height,
            trimmed_width: width,
            trimmed_height: height,
        }
    }

    /// Returns true if the sprite was actually trimmed
    pub fn was_trimmed(&self) -> bool {
        self.trimmed_width != self.source_width || self.trimmed_height != self.source_height
    }

    /// How far trimming moved the sprite's visual center, in pixels.
    ///
    /// A renderer anchoring frames at their center needs this delta to keep
    /// trimmed frames aligned with their untrimmed source.
    pub fn center_delta(&self) -> (f32, f32) {
        let dx = (f64::from(self.offset_x) + f64::from(self.trimmed_width) / 2.0)
            - f64::from(self.source_width) / 2.0;
        let dy = (f64::from(self.offset_y) + f64::from(self.trimmed_height) / 2.0)
            - f64::from(self.source_height) / 2.0;
        #[expect(clippy::cast_possible_truncation, reason = "pixel deltas fit in f32")]
        let delta = (dx as f32, dy as f32);
        delta
    }
}

/// A source image after decoding, scaling and trimming, ready for packing
#[derive(Debug, Clone)]
pub struct SourceSprite {
    /// Original file path
    pub path: PathBuf,
    /// Canonical RGBA pixel data (trimmed if trimming was enabled)
    pub image: RgbaImage,
    /// Trim metadata for offset reconstruction
    pub trim_info: TrimInfo,
}

impl SourceSprite {
    /// Width of the sprite (after trimming)
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height of the sprite (after trimming)
    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Result of placing a sprite in the atlas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackedSprite {
    /// Index of the source image in the input list
    pub source_index: usize,
    /// Position in atlas (x coordinate)
    pub x: u32,
    /// Position in atlas (y coordinate)
    pub y: u32,
    /// Width in atlas
    pub width: u32,
    /// Height in atlas
    pub height: u32,
    /// Original trim info for offset calculation
    pub trim_info: TrimInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_delta_untrimmed() {
        let info = TrimInfo::untrimmed(32, 32);
        assert_eq!(info.center_delta(), (0.0, 0.0));
        assert!(!info.was_trimmed());
    }

    #[test]
    fn test_center_delta_trimmed() {
        // 10x10 source, content occupies x in [2,6), y in [3,7)
        let info = TrimInfo {
            offset_x: 2,
            offset_y: 3,
            source_width: 10,
            source_height: 10,
            trimmed_width: 4,
            trimmed_height: 4,
        };

        // center moved from 5.0 to 4.0 horizontally and to 5.0 vertically
        assert_eq!(info.center_delta(), (-1.0, 0.0));
        assert!(info.was_trimmed());
    }
}
