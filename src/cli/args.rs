use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "spritebake")]
#[command(version, about = "Bakes sprite images into a texture atlas", long_about = None)]
pub struct CliArgs {
    /// Atlas width in pixels
    #[arg(long, required_unless_present = "config")]
    pub width: Option<u32>,

    /// Atlas height in pixels
    #[arg(long, required_unless_present = "config")]
    pub height: Option<u32>,

    /// Input image files, or a text file listing one image path per line
    #[arg(short, long, num_args = 1.., required_unless_present = "config")]
    pub input: Vec<PathBuf>,

    /// Output atlas image path
    #[arg(short, long, required_unless_present = "config")]
    pub output: Option<PathBuf>,

    /// Load settings from a JSON config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Scale images by this percentage before packing [default: 100]
    #[arg(long)]
    pub scale: Option<u32>,

    /// Padding reserved around each sprite in pixels [default: 0]
    #[arg(short, long)]
    pub padding: Option<u32>,

    /// Atlas background color, four components 0-255
    #[arg(long, value_names = ["R", "G", "B", "A"], num_args = 4)]
    pub bg_color: Option<Vec<u8>>,

    /// Trim transparent borders from images before packing
    #[arg(long)]
    pub trim_images: bool,

    /// Write per-sprite animation documents instead of the flat JSON sheet
    #[arg(long)]
    pub sprite_format: bool,

    /// Output folder for sprite documents [default: the atlas output folder]
    #[arg(long, value_name = "DIR")]
    pub sprite_folder: Option<PathBuf>,

    /// Compress PNG output (0-6 or 'max'). Default level is 2 if flag is present without value.
    #[arg(long, value_name = "LEVEL", default_missing_value = "2", num_args = 0..=1)]
    pub compress: Option<CompressionLevel>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// PNG compression level (0-6 or max)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression
    Max,
}

impl std::str::FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            Ok(CompressionLevel::Max)
        } else {
            s.parse::<u8>()
                .map_err(|_e| format!("invalid compression level: {}", s))
                .and_then(|n| {
                    if n <= 6 {
                        Ok(CompressionLevel::Level(n))
                    } else {
                        Err(format!("compression level must be 0-6 or 'max', got {}", n))
                    }
                })
        }
    }
}
