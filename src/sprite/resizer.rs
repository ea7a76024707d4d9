use image::{RgbaImage, imageops::FilterType};

/// Resample an image to a percentage of its original size.
///
/// Both axes are rounded independently. Returns `None` when either axis
/// rounds to zero pixels.
pub fn scale_by_percent(img: &RgbaImage, percent: u32) -> Option<RgbaImage> {
    let (w, h) = img.dimensions();
    let scale = percent as f32 / 100.0;
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "rounded non-negative pixel dimensions"
    )]
    let new_width = (w as f32 * scale).round() as u32;
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "rounded non-negative pixel dimensions"
    )]
    let new_height = (h as f32 * scale).round() as u32;

    if new_width == 0 || new_height == 0 {
        return None;
    }

    Some(image::imageops::resize(
        img,
        new_width,
        new_height,
        FilterType::Lanczos3,
    ))
}
