mod format;
mod generic;
mod sprite;

pub use format::save_atlas_image;
pub use generic::write_generic_sheet;
pub use sprite::write_sprite_documents;
