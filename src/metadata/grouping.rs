use std::collections::BTreeMap;

use super::parse_frame_name;

/// One atlas placement attributed to a sprite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteFrame {
    /// Index of the placement (and input file) this frame refers to
    pub placement_id: usize,
    pub animation: Option<String>,
    pub frame_index: Option<u32>,
}

/// All frames sharing one sprite name
#[derive(Debug, Clone, Default)]
pub struct SpriteGroup {
    /// Folder prefix of the source files, trailing slash included
    pub source_folder: String,
    /// Frames ordered by (animation name, frame index), untagged frames first
    pub frames: Vec<SpriteFrame>,
}

/// Group input files into sprites by parsed name.
///
/// Files the filename grammar does not cover are skipped. The map is keyed
/// by sprite name, so iteration order is sorted and independent of input
/// order or platform hashing.
pub fn group_frames(files: &[String]) -> BTreeMap<String, SpriteGroup> {
    let mut groups: BTreeMap<String, SpriteGroup> = BTreeMap::new();

    for (placement_id, file) in files.iter().enumerate() {
        let Some(parsed) = parse_frame_name(file) else {
            continue;
        };

        let group = groups.entry(parsed.sprite).or_default();
        group.source_folder = parsed.folder;
        group.frames.push(SpriteFrame {
            placement_id,
            animation: parsed.animation,
            frame_index: parsed.frame_index,
        });
    }

    for group in groups.values_mut() {
        group
            .frames
            .sort_by(|a, b| a.animation.cmp(&b.animation).then(a.frame_index.cmp(&b.frame_index)));
    }

    groups
}

/// Display name for one frame: `{sprite}`, `{sprite}_{anim}` or
/// `{sprite}_{anim}_{index}`.
pub fn frame_name(sprite: &str, frame: &SpriteFrame) -> String {
    let mut name = sprite.to_string();
    if let Some(animation) = &frame.animation {
        name.push('_');
        name.push_str(animation);
        if let Some(index) = frame.frame_index {
            name.push('_');
            name.push_str(&index.to_string());
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(files: &[&str]) -> Vec<String> {
        files.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_grouping_by_sprite_name() {
        let files = strings(&["run[walk]1.png", "run[walk]2.png", "run.png"]);
        let groups = group_frames(&files);

        assert_eq!(groups.len(), 1);
        let run = &groups["run"];
        assert_eq!(run.frames.len(), 3);

        // Untagged frame first, then the walk frames in index order
        assert_eq!(run.frames[0].animation, None);
        assert_eq!(run.frames[0].placement_id, 2);
        assert_eq!(run.frames[1].animation.as_deref(), Some("walk"));
        assert_eq!(run.frames[1].frame_index, Some(1));
        assert_eq!(run.frames[1].placement_id, 0);
        assert_eq!(run.frames[2].frame_index, Some(2));
        assert_eq!(run.frames[2].placement_id, 1);
    }

    #[test]
    fn test_frames_order_by_animation_then_index() {
        let files = strings(&[
            "cat[walk]2.png",
            "cat[idle]1.png",
            "cat[walk]1.png",
            "cat[idle]10.png",
        ]);
        let groups = group_frames(&files);

        let order: Vec<(Option<&str>, Option<u32>)> = groups["cat"]
            .frames
            .iter()
            .map(|f| (f.animation.as_deref(), f.frame_index))
            .collect();
        assert_eq!(
            order,
            vec![
                (Some("idle"), Some(1)),
                (Some("idle"), Some(10)),
                (Some("walk"), Some(1)),
                (Some("walk"), Some(2)),
            ]
        );
    }

    #[test]
    fn test_iteration_is_sorted_by_sprite_name() {
        let files = strings(&["zebra.png", "ant.png", "mole.png"]);
        let groups = group_frames(&files);

        let names: Vec<&String> = groups.keys().collect();
        assert_eq!(names, vec!["ant", "mole", "zebra"]);
    }

    #[test]
    fn test_unparseable_files_are_skipped() {
        let files = strings(&["run.png", "noextension"]);
        let groups = group_frames(&files);
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn test_source_folder_is_captured() {
        let files = strings(&["sprites/hero/hero[run]1.png"]);
        let groups = group_frames(&files);
        assert_eq!(groups["hero"].source_folder, "sprites/hero/");
    }

    #[test]
    fn test_frame_name() {
        let tagged = SpriteFrame {
            placement_id: 0,
            animation: Some("walk".to_string()),
            frame_index: Some(3),
        };
        let untagged = SpriteFrame {
            placement_id: 0,
            animation: None,
            frame_index: None,
        };
        let tag_only = SpriteFrame {
            placement_id: 0,
            animation: Some("open".to_string()),
            frame_index: None,
        };

        assert_eq!(frame_name("run", &tagged), "run_walk_3");
        assert_eq!(frame_name("run", &untagged), "run");
        assert_eq!(frame_name("door", &tag_only), "door_open");
    }
}
