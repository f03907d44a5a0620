use color_quant::NeuQuant;
use image::RgbaImage;

use crate::model::TRANSPARENT_INDEX;

/// Sampling factor for NeuQuant training, the same quality/speed trade-off
/// the `image` crate uses for its own GIF frames.
const SAMPLE_FACTOR: i32 = 10;

/// Colors learned per frame. One short of 256 so the transparency slot is
/// never handed out by the quantizer.
const PALETTE_COLORS: usize = 256 - 1;

/// An indexed-color frame: a 256-entry RGB palette plus one palette index per
/// pixel. Index [`TRANSPARENT_INDEX`] means fully transparent.
#[derive(Clone, Debug)]
pub struct PaletteFrame {
    pub width: u32,
    pub height: u32,
    /// 256 * 3 bytes, RGB. The reserved transparency entry is zeroed.
    pub palette: Vec<u8>,
    pub indices: Vec<u8>,
}

/// Reduces `frame` to an adaptive palette of at most 255 colors, then
/// overwrites every pixel with alpha at or below `alpha_threshold` with the
/// reserved transparent index. Each frame gets its own independent palette.
pub fn quantize_frame(frame: &RgbaImage, alpha_threshold: u8) -> PaletteFrame {
    let pixels = frame.as_raw();
    let quant = NeuQuant::new(SAMPLE_FACTOR, PALETTE_COLORS, pixels);

    let mut palette = quant.color_map_rgb();
    palette.resize(256 * 3, 0);

    let indices = pixels
        .chunks_exact(4)
        .map(|px| {
            if px[3] <= alpha_threshold {
                TRANSPARENT_INDEX
            } else {
                quant.index_of(px) as u8
            }
        })
        .collect();

    PaletteFrame {
        width: frame.width(),
        height: frame.height(),
        palette,
        indices,
    }
}
