// Animation frames decoded from disk and uploaded to the GPU

use super::{Renderer, TextureHandle};
use crate::engine::assets::{AssetError, AssetLoader, FrameSource};

/// Frame source producing texture handles
pub struct GpuFrameSource<'a> {
    loader: &'a mut AssetLoader,
    renderer: &'a mut Renderer,
}

impl<'a> GpuFrameSource<'a> {
    pub fn new(loader: &'a mut AssetLoader, renderer: &'a mut Renderer) -> Self {
        Self { loader, renderer }
    }
}

impl FrameSource<TextureHandle> for GpuFrameSource<'_> {
    fn load_frames(&mut self, name: &str) -> Result<Vec<TextureHandle>, AssetError> {
        let images = self.loader.load_frames(name)?;

        Ok(images
            .iter()
            .enumerate()
            .map(|(i, image)| self.renderer.upload_image(image, &format!("{name}/{i}")))
            .collect())
    }
}
