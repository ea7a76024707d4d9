pub mod atlas;
pub mod cli;
pub mod config;
pub mod error;
pub mod metadata;
pub mod output;
pub mod packing;
pub mod sprite;

pub use atlas::{Atlas, AtlasBuilder};
pub use cli::CliArgs;
pub use error::BakeError;
pub use sprite::{PackedSprite, SourceSprite, TrimInfo};
