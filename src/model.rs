use std::path::PathBuf;

use crate::error::{FadeloopError, FadeloopResult};

/// File extensions the loader recognizes. Matching is case-sensitive.
pub const DEFAULT_EXTENSIONS: [&str; 4] = [".png", ".jpg", ".jpeg", ".bmp"];

/// Source pixels with alpha at or below this value become fully transparent
/// in the output (hard threshold, not an alpha blend).
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 128;

/// Palette slot reserved for transparency in every output frame.
pub const TRANSPARENT_INDEX: u8 = 255;

/// Rectangle in source-image pixel coordinates, `[left, right)` x `[upper, lower)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropBox {
    pub left: u32,
    pub upper: u32,
    pub right: u32,
    pub lower: u32,
}

impl CropBox {
    /// Parses the CLI form `"left,upper,right,lower"`.
    pub fn parse(s: &str) -> FadeloopResult<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(FadeloopError::invalid_crop_box(format!(
                "expected 'left,upper,right,lower', got '{s}'"
            )));
        }

        let mut vals = [0u32; 4];
        for (slot, part) in vals.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| {
                FadeloopError::invalid_crop_box(format!(
                    "'{part}' is not a non-negative integer in '{s}'"
                ))
            })?;
        }

        let rect = Self {
            left: vals[0],
            upper: vals[1],
            right: vals[2],
            lower: vals[3],
        };
        rect.validate()?;
        Ok(rect)
    }

    pub fn validate(&self) -> FadeloopResult<()> {
        if self.left >= self.right || self.upper >= self.lower {
            return Err(FadeloopError::invalid_crop_box(format!(
                "degenerate rectangle {},{},{},{} (need left < right and upper < lower)",
                self.left, self.upper, self.right, self.lower
            )));
        }
        Ok(())
    }

    /// Checks that the rectangle lies inside a `width` x `height` raster.
    pub fn validate_within(&self, width: u32, height: u32) -> FadeloopResult<()> {
        self.validate()?;
        if self.right > width || self.lower > height {
            return Err(FadeloopError::invalid_crop_box(format!(
                "rectangle {},{},{},{} exceeds image bounds {}x{}",
                self.left, self.upper, self.right, self.lower, width, height
            )));
        }
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.lower - self.upper
    }
}

#[derive(Clone, Debug)]
pub struct PipelineConfig {
    pub input_dir: PathBuf,
    pub out_path: PathBuf,
    /// Display duration of every output frame, in milliseconds.
    pub frame_duration_ms: u32,
    /// Number of cross-fade frames between consecutive images.
    pub transition_frames: u32,
    /// Hold time per image before its transition starts, in milliseconds.
    pub delay_ms: u32,
    pub crop: Option<CropBox>,
    pub extensions: Vec<String>,
    pub alpha_threshold: u8,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("./input"),
            out_path: PathBuf::from("output.gif"),
            frame_duration_ms: 50,
            transition_frames: 4,
            delay_ms: 2000,
            crop: None,
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> FadeloopResult<()> {
        if self.frame_duration_ms == 0 {
            return Err(FadeloopError::validation("frame duration must be non-zero"));
        }
        if self.transition_frames == 0 {
            // Alpha steps are computed as k / transition_frames.
            return Err(FadeloopError::invalid_transition_count(
                "transition frame count must be at least 1",
            ));
        }
        if let Some(crop) = &self.crop {
            crop.validate()?;
        }
        Ok(())
    }

    /// Whole hold frames per image. Floor division: a delay shorter than one
    /// frame duration yields zero holds.
    pub fn hold_frames(&self) -> u32 {
        self.delay_ms / self.frame_duration_ms
    }
}
