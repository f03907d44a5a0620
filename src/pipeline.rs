use crate::{
    compose::compose_frames,
    crop::crop_image,
    encode_gif::{EncodeConfig, GifSink},
    error::FadeloopResult,
    loader::load_images,
    model::PipelineConfig,
    quantize::quantize_frame,
};

/// Runs the whole pipeline: load, crop, compose, quantize, encode. Writes
/// exactly one GIF at `cfg.out_path`, overwriting any existing file. Any
/// stage failure aborts the run.
pub fn create_gif(cfg: &PipelineConfig) -> FadeloopResult<()> {
    cfg.validate()?;

    let sources = load_images(&cfg.input_dir, &cfg.extensions)?;

    let mut images = Vec::with_capacity(sources.len());
    for source in sources {
        let image = match &cfg.crop {
            Some(rect) => crop_image(&source.image, rect)?,
            None => source.image,
        };
        images.push(image);
    }

    let hold_frames = cfg.hold_frames();
    if hold_frames == 0 {
        tracing::warn!(
            delay_ms = cfg.delay_ms,
            frame_duration_ms = cfg.frame_duration_ms,
            "delay is shorter than one frame duration; images get no hold frames"
        );
    }

    let frames = compose_frames(&images, hold_frames, cfg.transition_frames)?;
    tracing::debug!(
        images = images.len(),
        frames = frames.len(),
        hold_frames,
        transition_frames = cfg.transition_frames,
        "composed frame sequence"
    );

    let (width, height) = images[0].dimensions();
    let mut sink = GifSink::create(EncodeConfig {
        width,
        height,
        frame_duration_ms: cfg.frame_duration_ms,
        out_path: cfg.out_path.clone(),
    })?;
    for frame in &frames {
        let quantized = quantize_frame(frame, cfg.alpha_threshold);
        sink.write_frame(&quantized)?;
    }
    sink.finish()?;

    tracing::debug!(out = %cfg.out_path.display(), frames = frames.len(), "wrote gif");
    Ok(())
}
