use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use image::Rgba;
use log::info;

use spritebake::atlas::AtlasBuilder;
use spritebake::cli::{CliArgs, CompressionLevel};
use spritebake::config::LoadedConfig;
use spritebake::output::{save_atlas_image, write_generic_sheet, write_sprite_documents};
use spritebake::sprite::{load_sprites, resolve_inputs};

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        eprintln!();
        eprintln!(
            "Usage: spritebake --width 512 --height 512 --input image1.png image2.png --output atlas.png"
        );
        eprintln!(
            "Optional: --scale, --padding, --bg-color R G B A, --trim-images, --sprite-format, --sprite-folder, --compress, --config"
        );
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let start = Instant::now();

    let args = CliArgs::parse();

    // Load config if specified and merge with CLI args
    let merged = merge_config_with_args(&args)?;

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(if merged.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    info!("spritebake v{}", env!("CARGO_PKG_VERSION"));

    let input_paths = resolve_inputs(&merged.input)?;
    info!("Found {} input files", input_paths.len());

    let sprites = load_sprites(&input_paths, merged.scale, merged.trim_images)?;

    let atlas = AtlasBuilder::new(merged.width, merged.height)
        .padding(merged.padding)
        .background(merged.background)
        .build(&sprites)?;

    create_parent_dir(&merged.output)?;
    save_atlas_image(&atlas, &merged.output, merged.compress)?;
    info!("Saved {}", merged.output.display());

    // Metadata refers to inputs by their normalized path strings
    let input_names: Vec<String> = input_paths
        .iter()
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .collect();

    if merged.sprite_format {
        if let Some(folder) = &merged.sprite_folder {
            if !folder.exists() {
                fs::create_dir_all(folder).with_context(|| {
                    format!("failed to create sprite folder: {}", folder.display())
                })?;
            }
        }
        let written = write_sprite_documents(
            &atlas,
            &input_names,
            &merged.output,
            merged.sprite_folder.as_deref(),
        )?;
        info!("Generated {} sprite documents", written.len());
    } else {
        let sheet = write_generic_sheet(&atlas, &input_names, &merged.output, merged.trim_images)?;
        info!("Generated {}", sheet.display());
    }

    info!(
        "Baked {} images to '{}' in {} ms",
        input_names.len(),
        merged.output.display(),
        start.elapsed().as_millis()
    );

    Ok(())
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create output directory: {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Merged configuration from CLI args and optional config file.
struct MergedConfig {
    input: Vec<PathBuf>,
    output: PathBuf,
    width: u32,
    height: u32,
    scale: u32,
    padding: u32,
    background: Rgba<u8>,
    trim_images: bool,
    sprite_format: bool,
    sprite_folder: Option<PathBuf>,
    compress: Option<CompressionLevel>,
    verbose: bool,
}

/// Merge config file values with CLI arguments.
/// CLI arguments always take precedence over config values.
fn merge_config_with_args(args: &CliArgs) -> Result<MergedConfig> {
    let loaded_config = if let Some(config_path) = &args.config {
        Some(
            LoadedConfig::load(config_path)
                .with_context(|| format!("failed to load config: {}", config_path.display()))?,
        )
    } else {
        None
    };

    // Determine input files: CLI args override config
    let input = if !args.input.is_empty() {
        args.input.clone()
    } else if let Some(ref lc) = loaded_config {
        lc.resolve_inputs()
            .context("failed to resolve input files from config")?
    } else {
        // This shouldn't happen due to clap's required_unless_present
        Vec::new()
    };

    // Determine output path: CLI > config
    let output = args.output.clone().unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.resolve_output())
            .unwrap_or_else(|| PathBuf::from("atlas.png"))
    });

    // For numeric fields: CLI > config > default
    let width = args.width.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.width)
            .unwrap_or(512)
    });

    let height = args.height.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.height)
            .unwrap_or(512)
    });

    let scale = args.scale.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.scale)
            .unwrap_or(100)
    });

    let padding = args.padding.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.padding)
            .unwrap_or(0)
    });

    let background = if let Some(components) = &args.bg_color {
        Rgba(<[u8; 4]>::try_from(components.as_slice())
            .context("bg_color takes exactly four components")?)
    } else {
        Rgba(loaded_config
            .as_ref()
            .map(|lc| lc.config.bg_color)
            .unwrap_or([0, 0, 0, 0]))
    };

    // Boolean flags: CLI presence sets them to true, otherwise use config
    let trim_images = if args.trim_images {
        true
    } else if let Some(ref lc) = loaded_config {
        lc.config.trim_images
    } else {
        false
    };

    let sprite_format = if args.sprite_format {
        true
    } else if let Some(ref lc) = loaded_config {
        lc.config.sprite_format
    } else {
        false
    };

    let sprite_folder = args.sprite_folder.clone().or_else(|| {
        loaded_config
            .as_ref()
            .and_then(|lc| lc.resolve_sprite_folder())
    });

    // Compress: CLI option overrides config
    let compress = if args.compress.is_some() {
        args.compress
    } else if let Some(ref lc) = loaded_config {
        lc.config
            .compress
            .as_ref()
            .map(|level| {
                level.parse::<CompressionLevel>().map_err(|e| {
                    anyhow::anyhow!("invalid compress level '{}' in config file: {}", level, e)
                })
            })
            .transpose()?
    } else {
        None
    };

    // Verbose is CLI-only
    let verbose = args.verbose;

    Ok(MergedConfig {
        input,
        output,
        width,
        height,
        scale,
        padding,
        background,
        trim_images,
        sprite_format,
        sprite_folder,
        compress,
        verbose,
    })
}
