use image::RgbaImage;

use super::TrimInfo;

/// Shrink an image to the tight bounding box of its non-transparent pixels.
///
/// Runs a single linear scan over the alpha channel (stride 4, starting at
/// byte offset 3) tracking the first/last alpha-bearing byte and the min/max
/// column offset within a row, then copies the surviving byte span of each
/// surviving row into a freshly sized buffer.
///
/// Returns `None` for a fully transparent or zero-sized image; such an image
/// has no bounding box and the caller must reject it.
pub fn trim_sprite(image: &RgbaImage) -> Option<(RgbaImage, TrimInfo)> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return None;
    }

    let data = image.as_raw();
    let row_stride = width as usize * 4;

    let mut first = None;
    let mut last = 0usize;
    let mut left = usize::MAX;
    let mut right = 0usize;

    for index in (3..data.len()).step_by(4) {
        if data[index] != 0 {
            if first.is_none() {
                first = Some(index);
            }
            last = index;

            let column = index % row_stride;
            left = left.min(column);
            right = right.max(column);
        }
    }

    // Correct the byte offsets to point at the red component
    let first = first? - 3;
    let last = last - 3;
    let left = left - 3;
    let right = right - 3;

    let top_rows = first / row_stride;
    let bottom_rows = height as usize - last / row_stride - 1;
    let bytes_to_copy = right - left + 4;

    let trimmed_width = u32::try_from(bytes_to_copy / 4).ok()?;
    let trimmed_height = u32::try_from(height as usize - top_rows - bottom_rows).ok()?;

    let mut trimmed = Vec::with_capacity(bytes_to_copy * trimmed_height as usize);
    for row in 0..trimmed_height as usize {
        let source_offset = (row + top_rows) * row_stride + left;
        trimmed.extend_from_slice(&data[source_offset..source_offset + bytes_to_copy]);
    }

    let trim_info = TrimInfo {
        offset_x: u32::try_from(left / 4).ok()?,
        offset_y: u32::try_from(top_rows).ok()?,
        source_width: width,
        source_height: height,
        trimmed_width,
        trimmed_height,
    };

    let image = RgbaImage::from_raw(trimmed_width, trimmed_height, trimmed)?;
    Some((image, trim_info))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_trim_fully_opaque() {
        let mut img = RgbaImage::new(10, 10);
        for pixel in img.pixels_mut() {
            *pixel = Rgba([255, 0, 0, 255]);
        }

        let (trimmed, info) = trim_sprite(&img).unwrap();

        assert_eq!(trimmed.width(), 10);
        assert_eq!(trimmed.height(), 10);
        assert_eq!(info.offset_x, 0);
        assert_eq!(info.offset_y, 0);
        assert!(!info.was_trimmed());
    }

    #[test]
    fn test_trim_with_transparent_border() {
        let mut img = RgbaImage::new(10, 10);
        // Fill x in [2,6), y in [3,7) with opaque pixels
        for y in 3..7 {
            for x in 2..6 {
                img.put_pixel(x, y, Rgba([255, 0, 0, 255]));
            }
        }

        let (trimmed, info) = trim_sprite(&img).unwrap();

        assert_eq!(trimmed.width(), 4);
        assert_eq!(trimmed.height(), 4);
        assert_eq!(info.offset_x, 2);
        assert_eq!(info.offset_y, 3);
        assert_eq!(info.source_width, 10);
        assert_eq!(info.source_height, 10);
        assert!(info.was_trimmed());

        // No transparent rows or columns survive and the content is intact
        for pixel in trimmed.pixels() {
            assert_eq!(*pixel, Rgba([255, 0, 0, 255]));
        }
    }

    #[test]
    fn test_trim_preserves_pixel_content() {
        let mut img = RgbaImage::new(8, 8);
        img.put_pixel(2, 2, Rgba([10, 20, 30, 255]));
        img.put_pixel(5, 2, Rgba([40, 50, 60, 128]));
        img.put_pixel(2, 6, Rgba([70, 80, 90, 64]));

        let (trimmed, info) = trim_sprite(&img).unwrap();

        assert_eq!(info.offset_x, 2);
        assert_eq!(info.offset_y, 2);
        assert_eq!(trimmed.dimensions(), (4, 5));
        assert_eq!(*trimmed.get_pixel(0, 0), Rgba([10, 20, 30, 255]));
        assert_eq!(*trimmed.get_pixel(3, 0), Rgba([40, 50, 60, 128]));
        assert_eq!(*trimmed.get_pixel(0, 4), Rgba([70, 80, 90, 64]));
        // Interior pixel that was transparent stays transparent
        assert_eq!(*trimmed.get_pixel(1, 1), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_trim_single_pixel() {
        let mut img = RgbaImage::new(16, 16);
        img.put_pixel(7, 9, Rgba([1, 2, 3, 4]));

        let (trimmed, info) = trim_sprite(&img).unwrap();

        assert_eq!(trimmed.dimensions(), (1, 1));
        assert_eq!(info.offset_x, 7);
        assert_eq!(info.offset_y, 9);
        assert_eq!(*trimmed.get_pixel(0, 0), Rgba([1, 2, 3, 4]));
    }

    #[test]
    fn test_trim_fully_transparent_is_rejected() {
        let img = RgbaImage::new(10, 10);
        assert!(trim_sprite(&img).is_none());
    }

    #[test]
    fn test_trim_zero_sized_is_rejected() {
        let img = RgbaImage::new(0, 0);
        assert!(trim_sprite(&img).is_none());
    }
}
