use image::RgbaImage;

use crate::sprite::PackedSprite;

/// A completed texture atlas
#[derive(Debug)]
pub struct Atlas {
    /// Atlas width
    pub width: u32,
    /// Atlas height
    pub height: u32,
    /// Rendered atlas image
    pub image: RgbaImage,
    /// All packed sprites, in input order (`sprites[i].source_index == i`)
    pub sprites: Vec<PackedSprite>,
}
