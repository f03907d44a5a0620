use std::{
    borrow::Cow,
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{
    error::{FadeloopError, FadeloopResult},
    model::TRANSPARENT_INDEX,
    quantize::PaletteFrame,
};

#[derive(Clone, Debug)]
pub struct EncodeConfig {
    pub width: u32,
    pub height: u32,
    pub frame_duration_ms: u32,
    pub out_path: PathBuf,
}

impl EncodeConfig {
    pub fn validate(&self) -> FadeloopResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FadeloopError::validation(
                "encode width/height must be non-zero",
            ));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(FadeloopError::validation(format!(
                "encode size {}x{} exceeds the GIF limit of {}",
                self.width,
                self.height,
                u16::MAX
            )));
        }
        if self.frame_duration_ms == 0 {
            return Err(FadeloopError::validation(
                "encode frame duration must be non-zero",
            ));
        }
        Ok(())
    }

    /// Per-frame delay in GIF ticks (centiseconds), rounded to nearest.
    pub fn delay_ticks(&self) -> u16 {
        ((self.frame_duration_ms + 5) / 10).min(u32::from(u16::MAX)) as u16
    }
}

pub fn ensure_parent_dir(path: &Path) -> FadeloopResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Serializes indexed frames into a looping GIF. Every frame carries its own
/// local palette, the reserved transparent index and restore-to-background
/// disposal so transparency composites correctly on playback.
pub struct GifSink {
    cfg: EncodeConfig,
    encoder: gif::Encoder<BufWriter<File>>,
    delay: u16,
}

impl GifSink {
    pub fn create(cfg: EncodeConfig) -> FadeloopResult<Self> {
        cfg.validate()?;
        ensure_parent_dir(&cfg.out_path)?;

        let file = File::create(&cfg.out_path).map_err(|e| {
            FadeloopError::encode(format!(
                "failed to create output file '{}': {e}",
                cfg.out_path.display()
            ))
        })?;

        let mut encoder = gif::Encoder::new(
            BufWriter::new(file),
            cfg.width as u16,
            cfg.height as u16,
            &[],
        )
        .map_err(|e| FadeloopError::encode(format!("failed to write gif header: {e}")))?;
        encoder
            .set_repeat(gif::Repeat::Infinite)
            .map_err(|e| FadeloopError::encode(format!("failed to write gif loop record: {e}")))?;

        let delay = cfg.delay_ticks();
        Ok(Self {
            cfg,
            encoder,
            delay,
        })
    }

    pub fn write_frame(&mut self, frame: &PaletteFrame) -> FadeloopResult<()> {
        if frame.width != self.cfg.width || frame.height != self.cfg.height {
            return Err(FadeloopError::encode(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, self.cfg.width, self.cfg.height
            )));
        }
        if frame.indices.len() != (frame.width * frame.height) as usize {
            return Err(FadeloopError::encode(
                "frame index buffer does not match width * height",
            ));
        }

        let mut out = gif::Frame::default();
        out.width = frame.width as u16;
        out.height = frame.height as u16;
        out.buffer = Cow::Borrowed(&frame.indices);
        out.palette = Some(frame.palette.clone());
        out.transparent = Some(TRANSPARENT_INDEX);
        out.dispose = gif::DisposalMethod::Background;
        out.delay = self.delay;

        self.encoder
            .write_frame(&out)
            .map_err(|e| FadeloopError::encode(format!("failed to write gif frame: {e}")))
    }

    pub fn finish(self) -> FadeloopResult<()> {
        let mut writer = self
            .encoder
            .into_inner()
            .map_err(|e| FadeloopError::encode(format!("failed to finalize gif: {e}")))?;
        writer
            .flush()
            .map_err(|e| FadeloopError::encode(format!("failed to flush gif output: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_validation_catches_bad_values() {
        let good = EncodeConfig {
            width: 4,
            height: 4,
            frame_duration_ms: 50,
            out_path: PathBuf::from("target/encode_tests/ok.gif"),
        };
        good.validate().unwrap();

        assert!(
            EncodeConfig {
                width: 0,
                ..good.clone()
            }
            .validate()
            .is_err()
        );
        assert!(
            EncodeConfig {
                height: 70_000,
                ..good.clone()
            }
            .validate()
            .is_err()
        );
        assert!(
            EncodeConfig {
                frame_duration_ms: 0,
                ..good
            }
            .validate()
            .is_err()
        );
    }

    #[test]
    fn delay_ticks_round_to_centiseconds() {
        let cfg = |ms| EncodeConfig {
            width: 1,
            height: 1,
            frame_duration_ms: ms,
            out_path: PathBuf::from("out.gif"),
        };
        assert_eq!(cfg(50).delay_ticks(), 5);
        assert_eq!(cfg(2000).delay_ticks(), 200);
        assert_eq!(cfg(44).delay_ticks(), 4);
        assert_eq!(cfg(45).delay_ticks(), 5);
    }

    #[test]
    fn sink_rejects_mismatched_frame_size() {
        let dir = PathBuf::from("target").join("encode_tests");
        std::fs::create_dir_all(&dir).unwrap();

        let cfg = EncodeConfig {
            width: 2,
            height: 2,
            frame_duration_ms: 50,
            out_path: dir.join("mismatch.gif"),
        };
        let mut sink = GifSink::create(cfg).unwrap();

        let frame = PaletteFrame {
            width: 3,
            height: 2,
            palette: vec![0; 256 * 3],
            indices: vec![0; 6],
        };
        assert!(matches!(
            sink.write_frame(&frame),
            Err(FadeloopError::Encode(_))
        ));
    }

    #[test]
    fn missing_parent_directory_is_created() {
        let dir = PathBuf::from("target")
            .join("encode_tests")
            .join("deep")
            .join("nested");
        let _ = std::fs::remove_dir_all(&dir);

        let cfg = EncodeConfig {
            width: 1,
            height: 1,
            frame_duration_ms: 50,
            out_path: dir.join("out.gif"),
        };
        let mut sink = GifSink::create(cfg).unwrap();
        let frame = PaletteFrame {
            width: 1,
            height: 1,
            palette: vec![0; 256 * 3],
            indices: vec![0],
        };
        sink.write_frame(&frame).unwrap();
        sink.finish().unwrap();
        assert!(dir.join("out.gif").exists());
    }
}
