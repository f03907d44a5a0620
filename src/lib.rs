#![forbid(unsafe_code)]

pub mod compose;
pub mod crop;
pub mod encode_gif;
pub mod error;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod quantize;

pub use compose::{Frame, blend, compose_frames};
pub use crop::crop_image;
pub use encode_gif::{EncodeConfig, GifSink};
pub use error::{FadeloopError, FadeloopResult};
pub use loader::{SourceImage, load_images};
pub use model::{
    CropBox, DEFAULT_ALPHA_THRESHOLD, DEFAULT_EXTENSIONS, PipelineConfig, TRANSPARENT_INDEX,
};
pub use pipeline::create_gif;
pub use quantize::{PaletteFrame, quantize_frame};
