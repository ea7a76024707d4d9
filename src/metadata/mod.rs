mod grouping;
mod parser;

pub use grouping::{SpriteFrame, SpriteGroup, frame_name, group_frames};
pub use parser::{ParsedFrameName, parse_frame_name};
