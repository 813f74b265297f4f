// Animation frame and image loading from disk

use super::{AssetError, FrameSource};
use image::RgbaImage;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Directory (relative to the base path) holding one folder per animation
const ANIMATIONS_DIRECTORY: &str = "animations";

/// Asset loader responsible for finding and decoding image files
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an asset
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// Directory holding the frames of an animation
    pub fn animation_dir(&self, name: &str) -> PathBuf {
        self.base_path.join(ANIMATIONS_DIRECTORY).join(name)
    }

    /// Decode a single image
    pub fn load_image(&self, name: &str) -> Result<RgbaImage, AssetError> {
        let path = self.resolve_path(name);

        if !path.exists() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()));
        }

        decode(&path)
    }

    /// List the frame files of an animation, sorted by file name
    pub fn frame_paths(&self, name: &str) -> Result<Vec<PathBuf>, AssetError> {
        let dir = self.animation_dir(name);

        if !dir.is_dir() {
            return Err(AssetError::NotFound(dir.to_string_lossy().to_string()));
        }

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_file() {
                paths.push(path);
            }
        }

        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(paths)
    }
}

impl FrameSource<RgbaImage> for AssetLoader {
    /// Decode every frame of an animation
    ///
    /// Frames that fail to decode are skipped. An animation with no
    /// decodable frame at all is an error.
    fn load_frames(&mut self, name: &str) -> Result<Vec<RgbaImage>, AssetError> {
        let mut frames = Vec::new();

        for path in self.frame_paths(name)? {
            match decode(&path) {
                Ok(frame) => frames.push(frame),
                Err(e) => warn!("Skipping frame of '{}': {}", name, e),
            }
        }

        if frames.is_empty() {
            return Err(AssetError::NoFrames(name.to_string()));
        }

        debug!("Loaded {} frames for animation '{}'", frames.len(), name);
        Ok(frames)
    }
}

fn decode(path: &Path) -> Result<RgbaImage, AssetError> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|source| AssetError::Decode {
            path: path.to_string_lossy().to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn write_frame(dir: &Path, file: &str, shade: u8) {
        RgbaImage::from_pixel(2, 2, Rgba([shade, 0, 0, 255]))
            .save(dir.join(file))
            .unwrap();
    }

    fn animation_dir(root: &Path, name: &str) -> PathBuf {
        let dir = root.join(ANIMATIONS_DIRECTORY).join(name);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_loader_path_resolution() {
        let loader = AssetLoader::new("/game/images");
        let path = loader.animation_dir("idle_left");

        assert_eq!(
            path.to_str().unwrap(),
            "/game/images/animations/idle_left"
        );
    }

    #[test]
    fn test_frames_sorted_by_file_name() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = animation_dir(tmp.path(), "walk_left");
        write_frame(&dir, "03.png", 30);
        write_frame(&dir, "01.png", 10);
        write_frame(&dir, "02.png", 20);

        let mut loader = AssetLoader::new(tmp.path());
        let frames = loader.load_frames("walk_left").unwrap();

        let shades: Vec<u8> = frames.iter().map(|f| f.get_pixel(0, 0)[0]).collect();
        assert_eq!(shades, vec![10, 20, 30]);
    }

    #[test]
    fn test_unloadable_frame_is_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = animation_dir(tmp.path(), "jump_right");
        write_frame(&dir, "01.png", 10);
        std::fs::write(dir.join("02.png"), b"definitely not a png").unwrap();
        write_frame(&dir, "03.png", 30);

        let mut loader = AssetLoader::new(tmp.path());
        let frames = loader.load_frames("jump_right").unwrap();
        assert_eq!(frames.len(), 2);
    }

    #[test]
    fn test_no_loadable_frames_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = animation_dir(tmp.path(), "vomit_left");
        std::fs::write(dir.join("01.png"), b"garbage").unwrap();

        let mut loader = AssetLoader::new(tmp.path());
        let err = loader.load_frames("vomit_left").unwrap_err();
        assert!(matches!(err, AssetError::NoFrames(ref name) if name == "vomit_left"));
    }

    #[test]
    fn test_missing_animation_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let mut loader = AssetLoader::new(tmp.path());
        let err = loader.load_frames("idle_right").unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }

    #[test]
    fn test_load_missing_image() {
        let tmp = tempfile::tempdir().unwrap();
        let loader = AssetLoader::new(tmp.path());
        assert!(matches!(
            loader.load_image("fond.png"),
            Err(AssetError::NotFound(_))
        ));
    }
}
