use image::RgbaImage;

use crate::{
    error::FadeloopResult,
    model::CropBox,
};

/// Returns a copy of `image` restricted to `rect`. The rectangle is checked
/// against the raster bounds up front rather than left to the crop primitive.
pub fn crop_image(image: &RgbaImage, rect: &CropBox) -> FadeloopResult<RgbaImage> {
    rect.validate_within(image.width(), image.height())?;
    let view = image::imageops::crop_imm(image, rect.left, rect.upper, rect.width(), rect.height());
    Ok(view.to_image())
}
