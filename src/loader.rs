use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::RgbaImage;

use crate::error::{FadeloopError, FadeloopResult};

/// A decoded source raster. Identity and sort order come from the file path.
#[derive(Clone, Debug)]
pub struct SourceImage {
    pub path: PathBuf,
    pub image: RgbaImage,
}

/// Scans `dir` for files matching one of `extensions` (case-sensitive suffix
/// match), sorts them by full path ascending and decodes each into RGBA8.
///
/// A file that matches but fails to decode aborts the whole run; the loader
/// never skips silently.
pub fn load_images(dir: &Path, extensions: &[String]) -> FadeloopResult<Vec<SourceImage>> {
    let mut paths: Vec<PathBuf> = Vec::new();

    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("read input directory '{}'", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("read entry in '{}'", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if extensions.iter().any(|ext| name.ends_with(ext.as_str())) {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        return Err(FadeloopError::NoImagesFound(dir.to_path_buf()));
    }

    paths.sort();

    let mut images = Vec::with_capacity(paths.len());
    for path in paths {
        let decoded = image::open(&path).map_err(|e| {
            FadeloopError::decode(format!("failed to decode '{}': {e}", path.display()))
        })?;
        let image = decoded.to_rgba8();
        tracing::debug!(path = %path.display(), width = image.width(), height = image.height(), "loaded image");
        images.push(SourceImage { path, image });
    }

    Ok(images)
}
