// Frame-sequence animation playback

use std::collections::HashMap;
use std::ops::{Index, IndexMut};

use crate::engine::assets::{AssetError, FrameSource};

/// Animation construction errors
#[derive(Debug, thiserror::Error)]
pub enum AnimationError {
    #[error("Animation '{0}' has no frames")]
    Empty(String),

    #[error("Failed to load animation '{name}': {source}")]
    Load {
        name: String,
        #[source]
        source: AssetError,
    },
}

/// An ordered, non-empty sequence of frames played one frame per tick
#[derive(Debug, Clone)]
pub struct Animation<F> {
    frames: Vec<F>,
    index: usize,
    looping: bool,
}

impl<F> Animation<F> {
    /// Create an animation, rejecting an empty frame list
    ///
    /// `name` only serves to identify the animation in the error.
    pub fn new(name: &str, frames: Vec<F>, looping: bool) -> Result<Self, AnimationError> {
        if frames.is_empty() {
            return Err(AnimationError::Empty(name.to_string()));
        }

        Ok(Self {
            frames,
            index: 0,
            looping,
        })
    }

    /// Move to the next frame
    ///
    /// Looping animations wrap around; one-shot animations stay on their
    /// last frame.
    pub fn advance(&mut self) {
        if self.looping {
            self.index = (self.index + 1) % self.frames.len();
        } else if self.index + 1 < self.frames.len() {
            self.index += 1;
        }
    }

    /// Frame at the current index
    pub fn current(&self) -> &F {
        &self.frames[self.index]
    }

    /// Go back to the first frame
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Whether a one-shot animation reached its last frame
    pub fn is_finished(&self) -> bool {
        !self.looping && self.index == self.frames.len() - 1
    }
}

/// Index of an animation inside an [`AnimationLibrary`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationId(usize);

/// Animations keyed by name, loaded once from a [`FrameSource`]
///
/// States that name the same animation share one instance.
#[derive(Debug)]
pub struct AnimationLibrary<F> {
    animations: Vec<Animation<F>>,
    names: HashMap<String, AnimationId>,
}

impl<F> Default for AnimationLibrary<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> AnimationLibrary<F> {
    pub fn new() -> Self {
        Self {
            animations: Vec::new(),
            names: HashMap::new(),
        }
    }

    /// Load an animation unless one with the same name is already present
    ///
    /// The first load decides the loop flag: later requests for the same name
    /// return the existing instance.
    pub fn load<S>(
        &mut self,
        source: &mut S,
        name: &str,
        looping: bool,
    ) -> Result<AnimationId, AnimationError>
    where
        S: FrameSource<F> + ?Sized,
    {
        if let Some(id) = self.id(name) {
            return Ok(id);
        }

        let frames = source
            .load_frames(name)
            .map_err(|source| AnimationError::Load {
                name: name.to_string(),
                source,
            })?;
        let animation = Animation::new(name, frames, looping)?;

        Ok(self.insert(name, animation))
    }

    fn insert(&mut self, name: &str, animation: Animation<F>) -> AnimationId {
        let id = AnimationId(self.animations.len());
        self.animations.push(animation);
        self.names.insert(name.to_string(), id);
        id
    }

    /// Look up an animation id by name
    pub fn id(&self, name: &str) -> Option<AnimationId> {
        self.names.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }
}

impl<F> Index<AnimationId> for AnimationLibrary<F> {
    type Output = Animation<F>;

    fn index(&self, id: AnimationId) -> &Self::Output {
        &self.animations[id.0]
    }
}

impl<F> IndexMut<AnimationId> for AnimationLibrary<F> {
    fn index_mut(&mut self, id: AnimationId) -> &mut Self::Output {
        &mut self.animations[id.0]
    }
}
