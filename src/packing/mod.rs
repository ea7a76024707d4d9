mod rect;
mod skyline;

pub use rect::Rect;
pub use skyline::SkylinePacker;

/// Final position of one source image within the atlas.
///
/// `x`/`y`/`width`/`height` describe the true image footprint; the padding
/// reserved around it during packing is already stripped back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Index of the image in the input list
    pub id: usize,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Pack every rectangle into a fixed-size canvas, or fail as a whole.
///
/// Each request is grown by `2 * padding` per axis before packing and the
/// padding is subtracted back out of the result. Requests are placed in a
/// deterministic order (height desc, width desc, index asc) so repeated runs
/// over the same input produce identical layouts; the returned placements are
/// in input order.
///
/// Returns `None` if any rectangle cannot be placed. A partial packing is
/// never returned.
pub fn pack_rects(
    sizes: &[(u32, u32)],
    canvas_width: u32,
    canvas_height: u32,
    padding: u32,
) -> Option<Vec<Placement>> {
    let mut order: Vec<usize> = (0..sizes.len()).collect();
    order.sort_by(|&a, &b| {
        let (aw, ah) = sizes[a];
        let (bw, bh) = sizes[b];
        bh.cmp(&ah).then(bw.cmp(&aw)).then(a.cmp(&b))
    });

    let mut packer = SkylinePacker::new(canvas_width, canvas_height);
    let mut placements: Vec<Option<Placement>> = vec![None; sizes.len()];

    for &id in &order {
        let (width, height) = sizes[id];
        let rect = packer.insert(width + padding * 2, height + padding * 2)?;
        placements[id] = Some(Placement {
            id,
            x: rect.x + padding,
            y: rect.y + padding,
            width,
            height,
        });
    }

    placements.into_iter().collect()
}
