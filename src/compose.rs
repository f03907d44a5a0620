use std::sync::Arc;

use image::RgbaImage;

use crate::error::{FadeloopError, FadeloopResult};

/// One displayable moment of the output sequence. Hold frames share storage
/// with their source image; transition frames own their blended pixels.
pub type Frame = Arc<RgbaImage>;

/// Linear interpolation of every RGBA channel: `(1 - alpha) * a + alpha * b`,
/// rounded half up. `alpha` 0.0 reproduces `a` exactly, 1.0 reproduces `b`.
pub fn blend(a: &RgbaImage, b: &RgbaImage, alpha: f32) -> FadeloopResult<RgbaImage> {
    if a.dimensions() != b.dimensions() {
        return Err(FadeloopError::validation(format!(
            "blend size mismatch: {}x{} vs {}x{}",
            a.width(),
            a.height(),
            b.width(),
            b.height()
        )));
    }

    let inv = 1.0 - alpha;
    let mut out = vec![0u8; a.as_raw().len()];
    for ((o, &ca), &cb) in out.iter_mut().zip(a.as_raw()).zip(b.as_raw()) {
        *o = (inv * f32::from(ca) + alpha * f32::from(cb)).round() as u8;
    }

    // Reassembly cannot fail: `out` has exactly width * height * 4 bytes.
    RgbaImage::from_raw(a.width(), a.height(), out)
        .ok_or_else(|| FadeloopError::validation("blend produced a malformed buffer"))
}

/// Expands the ordered image list into the full display sequence: for each
/// image, `hold_frames` repeats followed by `transition_frames` cross-fade
/// steps toward the next image at alpha = k / T for k = 1..=T. A final
/// transition from the last image back to the first is always appended, so
/// the sequence loops seamlessly. With a single image that wrap transition
/// blends the image into itself.
pub fn compose_frames(
    images: &[RgbaImage],
    hold_frames: u32,
    transition_frames: u32,
) -> FadeloopResult<Vec<Frame>> {
    if transition_frames == 0 {
        return Err(FadeloopError::invalid_transition_count(
            "transition frame count must be at least 1",
        ));
    }
    let Some(first) = images.first() else {
        return Err(FadeloopError::validation(
            "cannot compose frames from an empty image list",
        ));
    };
    for img in images {
        if img.dimensions() != first.dimensions() {
            return Err(FadeloopError::validation(format!(
                "all images must share dimensions: expected {}x{}, got {}x{}",
                first.width(),
                first.height(),
                img.width(),
                img.height()
            )));
        }
    }

    let shared: Vec<Frame> = images.iter().map(|img| Arc::new(img.clone())).collect();
    let total = images.len() * (hold_frames as usize + transition_frames as usize);
    let mut frames: Vec<Frame> = Vec::with_capacity(total);

    for (i, current) in shared.iter().enumerate() {
        for _ in 0..hold_frames {
            frames.push(Arc::clone(current));
        }
        // The last image fades back into the first, closing the loop. With a
        // single image that wrap transition blends the image into itself.
        let next = shared.get(i + 1).unwrap_or(&shared[0]);
        push_transition(&mut frames, current, next, transition_frames)?;
    }

    Ok(frames)
}

fn push_transition(
    frames: &mut Vec<Frame>,
    from: &Frame,
    to: &Frame,
    transition_frames: u32,
) -> FadeloopResult<()> {
    for k in 1..=transition_frames {
        let alpha = k as f32 / transition_frames as f32;
        frames.push(Arc::new(blend(from, to, alpha)?));
    }
    Ok(())
}
