/// Components of a sprite frame filename.
///
/// The recognized grammar is `[folder/]<name>[\[tag\]][digits].<ext>`:
/// an optional folder prefix, an arbitrary sprite name, an optional bracketed
/// animation tag, an optional trailing frame number, and a mandatory
/// extension separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFrameName {
    /// Folder prefix including the trailing slash, empty for bare filenames
    pub folder: String,
    /// Sprite name, the grouping key
    pub sprite: String,
    /// Animation tag with the brackets stripped
    pub animation: Option<String>,
    /// Frame number within the animation
    pub frame_index: Option<u32>,
}

/// Parse a path into its sprite frame components.
///
/// A trailing number only counts as a frame index when a bracketed tag is
/// present; otherwise it stays part of the sprite name, so single-image
/// sprites whose filenames merely end in a digit keep their full name.
/// Returns `None` for paths the grammar does not cover (no extension
/// separator, or an empty sprite name).
pub fn parse_frame_name(path: &str) -> Option<ParsedFrameName> {
    let (folder, basename) = match path.rfind('/') {
        Some(slash) => path.split_at(slash + 1),
        None => ("", path),
    };

    // Everything up to the first dot; files without an extension are skipped
    let stem = &basename[..basename.find('.')?];

    let (rest, digits) = split_trailing_digits(stem);
    let (name, tag) = split_bracket_tag(rest);

    match tag {
        // An empty tag pair carries no animation name, treat it as absent
        Some(tag) if !tag.is_empty() => {
            if name.is_empty() {
                return None;
            }
            Some(ParsedFrameName {
                folder: folder.to_string(),
                sprite: name.to_string(),
                animation: Some(tag.to_string()),
                frame_index: digits.parse().ok(),
            })
        }
        _ => {
            // No tag: trailing digits fold back into the sprite name
            if stem.is_empty() {
                return None;
            }
            Some(ParsedFrameName {
                folder: folder.to_string(),
                sprite: stem.to_string(),
                animation: None,
                frame_index: None,
            })
        }
    }
}

/// Split a trailing run of ASCII digits off the end of `stem`.
fn split_trailing_digits(stem: &str) -> (&str, &str) {
    let split = stem
        .rfind(|c: char| !c.is_ascii_digit())
        .map_or(0, |i| i + 1);
    stem.split_at(split)
}

/// Split a trailing `[tag]` group off the end of `rest`.
fn split_bracket_tag(rest: &str) -> (&str, Option<&str>) {
    if !rest.ends_with(']') {
        return (rest, None);
    }
    match rest.rfind('[') {
        Some(open) => (&rest[..open], Some(&rest[open + 1..rest.len() - 1])),
        None => (rest, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(path: &str) -> ParsedFrameName {
        parse_frame_name(path).unwrap()
    }

    #[test]
    fn test_tag_and_index() {
        let frame = parsed("run[walk]1.png");
        assert_eq!(frame.folder, "");
        assert_eq!(frame.sprite, "run");
        assert_eq!(frame.animation.as_deref(), Some("walk"));
        assert_eq!(frame.frame_index, Some(1));
    }

    #[test]
    fn test_bare_name() {
        let frame = parsed("run.png");
        assert_eq!(frame.sprite, "run");
        assert_eq!(frame.animation, None);
        assert_eq!(frame.frame_index, None);
    }

    #[test]
    fn test_digits_without_tag_stay_in_the_name() {
        let frame = parsed("tower7.png");
        assert_eq!(frame.sprite, "tower7");
        assert_eq!(frame.animation, None);
        assert_eq!(frame.frame_index, None);
    }

    #[test]
    fn test_tag_without_digits() {
        let frame = parsed("door[open].png");
        assert_eq!(frame.sprite, "door");
        assert_eq!(frame.animation.as_deref(), Some("open"));
        assert_eq!(frame.frame_index, None);
    }

    #[test]
    fn test_folder_prefix() {
        let frame = parsed("assets/enemies/bat[fly]12.png");
        assert_eq!(frame.folder, "assets/enemies/");
        assert_eq!(frame.sprite, "bat");
        assert_eq!(frame.animation.as_deref(), Some("fly"));
        assert_eq!(frame.frame_index, Some(12));
    }

    #[test]
    fn test_multiple_dot_segments_stop_at_first_dot() {
        let frame = parsed("hero.idle.png");
        assert_eq!(frame.sprite, "hero");
    }

    #[test]
    fn test_bracket_in_the_middle_is_not_a_tag() {
        let frame = parsed("he[ll]o7.png");
        assert_eq!(frame.sprite, "he[ll]o7");
        assert_eq!(frame.animation, None);
    }

    #[test]
    fn test_empty_tag_pair_is_no_animation() {
        let frame = parsed("coin[]3.png");
        assert_eq!(frame.sprite, "coin[]3");
        assert_eq!(frame.animation, None);
    }

    #[test]
    fn test_multi_digit_index() {
        let frame = parsed("boss[attack]042.png");
        assert_eq!(frame.sprite, "boss");
        assert_eq!(frame.frame_index, Some(42));
    }

    #[test]
    fn test_no_extension_is_skipped() {
        assert!(parse_frame_name("run[walk]1").is_none());
    }

    #[test]
    fn test_empty_name_is_skipped() {
        assert!(parse_frame_name("[walk]1.png").is_none());
        assert!(parse_frame_name(".png").is_none());
    }
}
