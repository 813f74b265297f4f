// Asset loading
//
// Enumerates animation frame directories and decodes images from disk.

mod loader;

pub use loader::AssetLoader;

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("No loadable frames for animation: {0}")]
    NoFrames(String),

    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Something that can produce the ordered frames of a named animation
///
/// The game core only sees this trait, so it works the same with decoded
/// images, GPU texture handles or plain integers in tests.
pub trait FrameSource<F> {
    /// Load every frame of the animation `name`, in playback order
    fn load_frames(&mut self, name: &str) -> Result<Vec<F>, AssetError>;
}
