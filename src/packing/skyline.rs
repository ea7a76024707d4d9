use super::Rect;

/// One segment of the skyline: the bin is occupied up to height `y` for
/// `width` columns starting at `x`.
#[derive(Debug, Clone, Copy)]
struct SkylineNode {
    x: u32,
    y: u32,
    width: u32,
}

/// Skyline bin packer over a single fixed-size bin.
///
/// The node list always tiles `[0, bin_width)` left to right, so every
/// x-column has exactly one occupied height. Candidate positions are node
/// start columns; ties are broken toward less wasted area and then the
/// leftmost column, making placement fully deterministic.
pub struct SkylinePacker {
    bin_width: u32,
    bin_height: u32,
    nodes: Vec<SkylineNode>,
}

impl SkylinePacker {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            bin_width: width,
            bin_height: height,
            nodes: vec![SkylineNode {
                x: 0,
                y: 0,
                width,
            }],
        }
    }

    /// Try to place a rectangle of the given size.
    /// Returns the placed rectangle if a position exists.
    pub fn insert(&mut self, width: u32, height: u32) -> Option<Rect> {
        if width == 0 || height == 0 || width > self.bin_width || height > self.bin_height {
            return None;
        }

        let (index, x, y) = self.find_position(width, height)?;
        self.add_level(index, x, y + height, width);
        Some(Rect::new(x, y, width, height))
    }

    fn find_position(&self, width: u32, height: u32) -> Option<(usize, u32, u32)> {
        // (resulting top edge, wasted area, node index, x)
        let mut best: Option<(u32, u64, usize, u32)> = None;

        for index in 0..self.nodes.len() {
            let x = self.nodes[index].x;
            if x + width > self.bin_width {
                // Nodes are ordered by x, later candidates only move right
                break;
            }

            let (y, waste) = self.span_fit(index, width);
            if y + height > self.bin_height {
                continue;
            }

            let top = y + height;
            let better = match best {
                None => true,
                Some((best_top, best_waste, _, _)) => {
                    top < best_top || (top == best_top && waste < best_waste)
                }
            };
            if better {
                best = Some((top, waste, index, x));
            }
        }

        best.map(|(top, _, index, x)| (index, x, top - height))
    }

    /// Landing height for a rect of `width` dropped at node `index`, and the
    /// area wasted between the rect's underside and the skyline.
    fn span_fit(&self, index: usize, width: u32) -> (u32, u64) {
        let mut y = 0;
        let mut covered = 0;
        for node in &self.nodes[index..] {
            if covered >= width {
                break;
            }
            y = y.max(node.y);
            covered += node.width.min(width - covered);
        }

        let mut waste = 0u64;
        let mut covered = 0;
        for node in &self.nodes[index..] {
            if covered >= width {
                break;
            }
            let span = node.width.min(width - covered);
            waste += u64::from(y - node.y) * u64::from(span);
            covered += span;
        }

        (y, waste)
    }

    /// Raise the skyline to `top` over `[x, x + width)`.
    fn add_level(&mut self, index: usize, x: u32, top: u32, width: u32) {
        self.nodes.insert(
            index,
            SkylineNode {
                x,
                y: top,
                width,
            },
        );

        // Shrink or swallow the nodes the new level covers
        let end = x + width;
        let mut i = index + 1;
        while i < self.nodes.len() {
            let node = self.nodes[i];
            if node.x >= end {
                break;
            }
            let node_end = node.x + node.width;
            if node_end <= end {
                self.nodes.remove(i);
            } else {
                self.nodes[i].x = end;
                self.nodes[i].width = node_end - end;
                break;
            }
        }

        // Merge neighbors at the same height
        let mut i = 0;
        while i + 1 < self.nodes.len() {
            if self.nodes[i].y == self.nodes[i + 1].y {
                self.nodes[i].width += self.nodes[i + 1].width;
                self.nodes.remove(i + 1);
            } else {
                i += 1;
            }
        }
    }
}
