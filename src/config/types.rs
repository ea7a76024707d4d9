use serde::{Deserialize, Serialize};

/// Bake configuration file structure.
///
/// All paths in the config are relative to the config file location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BakeConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Input file paths or glob patterns
    pub input: Vec<String>,
    /// Output atlas image path
    pub output: String,
    /// Atlas width in pixels
    pub width: u32,
    /// Atlas height in pixels
    pub height: u32,
    /// Scale percentage applied to every image before packing
    pub scale: u32,
    /// Padding reserved around each sprite in pixels
    pub padding: u32,
    /// Atlas background color (RGBA, 0-255)
    pub bg_color: [u8; 4],
    /// Trim transparent borders from images before packing
    pub trim_images: bool,
    /// Write per-sprite animation documents instead of the flat JSON sheet
    pub sprite_format: bool,
    /// Output folder for sprite documents (optional)
    pub sprite_folder: Option<String>,
    /// PNG compression level, 0-6 or "max" (optional)
    pub compress: Option<String>,
}

impl Default for BakeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            input: Vec::new(),
            output: "atlas.png".to_string(),
            width: 512,
            height: 512,
            scale: 100,
            padding: 0,
            bg_color: [0, 0, 0, 0],
            trim_images: false,
            sprite_format: false,
            sprite_folder: None,
            compress: None,
        }
    }
}
