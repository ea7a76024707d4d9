mod loader;
mod resizer;
mod source;
mod trimmer;

pub use loader::{load_sprites, resolve_inputs};
pub use resizer::scale_by_percent;
pub use source::{PackedSprite, SourceSprite, TrimInfo};
pub use trimmer::trim_sprite;
