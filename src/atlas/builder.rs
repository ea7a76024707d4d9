use anyhow::Result;
use image::{Rgba, RgbaImage, imageops};
use log::info;

use super::Atlas;
use crate::error::BakeError;
use crate::packing::pack_rects;
use crate::sprite::{PackedSprite, SourceSprite};

/// Configuration for atlas building
pub struct AtlasBuilder {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
    pub background: Rgba<u8>,
}

impl AtlasBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            padding: 0,
            background: Rgba([0, 0, 0, 0]),
        }
    }

    pub fn padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    pub fn background(mut self, background: Rgba<u8>) -> Self {
        self.background = background;
        self
    }

    /// Pack the given sprites and composite them onto a background-filled
    /// canvas of the configured size.
    pub fn build(&self, sprites: &[SourceSprite]) -> Result<Atlas> {
        if sprites.is_empty() {
            return Err(BakeError::NoImages.into());
        }

        for sprite in sprites {
            let padded_w = sprite.width() + self.padding * 2;
            let padded_h = sprite.height() + self.padding * 2;

            if padded_w > self.width || padded_h > self.height {
                return Err(BakeError::SpriteTooLarge {
                    path: sprite.path.clone(),
                    width: sprite.width(),
                    height: sprite.height(),
                    canvas_width: self.width,
                    canvas_height: self.height,
                }
                .into());
            }
        }

        let sizes: Vec<(u32, u32)> = sprites.iter().map(|s| (s.width(), s.height())).collect();
        let placements = pack_rects(&sizes, self.width, self.height, self.padding).ok_or(
            BakeError::InsufficientSpace {
                canvas_width: self.width,
                canvas_height: self.height,
            },
        )?;

        let mut image = RgbaImage::from_pixel(self.width, self.height, self.background);
        let mut packed = Vec::with_capacity(placements.len());

        for placement in &placements {
            let source = &sprites[placement.id];

            // Straight overwrite, no alpha blending. The packer guarantees
            // the destination rectangle lies inside the canvas.
            imageops::replace(
                &mut image,
                &source.image,
                i64::from(placement.x),
                i64::from(placement.y),
            );

            packed.push(PackedSprite {
                source_index: placement.id,
                x: placement.x,
                y: placement.y,
                width: placement.width,
                height: placement.height,
                trim_info: source.trim_info,
            });
        }

        info!(
            "Packed {} sprites into {}x{} atlas",
            packed.len(),
            self.width,
            self.height
        );

        Ok(Atlas {
            width: self.width,
            height: self.height,
            image,
            sprites: packed,
        })
    }
}
