//! The engine's name → image store.
//!
//! Results are published here under their target name; lookups borrow.

use std::collections::HashMap;

use crate::error::EngineError;
use crate::image::Image;

/// Name-keyed image storage with last-write-wins semantics.
///
/// Names are case-sensitive. Storing under an existing name replaces the
/// previous image. There is no eviction; entries live as long as the
/// registry.
#[derive(Debug, Default)]
pub struct ImageRegistry {
    images: HashMap<String, Image>,
}

impl ImageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `image` under `name`, replacing any previous entry.
    pub fn store(&mut self, name: &str, image: Image) {
        tracing::debug!(
            name,
            width = image.width(),
            height = image.height(),
            "Storing image"
        );
        let image = if image.name() == name {
            image
        } else {
            image.with_name(name)
        };
        self.images.insert(name.to_string(), image);
    }

    /// Look up an image by name.
    pub fn get(&self, name: &str) -> Result<&Image, EngineError> {
        self.images
            .get(name)
            .ok_or_else(|| EngineError::ImageNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.images.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
