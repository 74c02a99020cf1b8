//! Named image assets
//!
//! A game declares the images it needs up front in an [`AssetManifest`]. The
//! platform loads them in any order and reports each through an
//! [`AssetLoader`]; once the last one arrives the loader reports
//! [`Readiness::Ready`] exactly once and can be turned into [`ImageAssets`].
//! The frame driver only accepts a finished `ImageAssets`, so no tick runs
//! before every image is available.

use std::collections::HashMap;

use crate::error::AssetError;

/// The fixed set of image names a game needs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetManifest {
    names: Vec<String>,
}

impl AssetManifest {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort();
        names.dedup();
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.binary_search_by(|n| n.as_str().cmp(name)).is_ok()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Conventional file name for an image (`<name>.png`)
    pub fn file_name(name: &str) -> String {
        format!("{name}.png")
    }
}

/// Load progress as reported by [`AssetLoader::loaded`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Loading { remaining: usize },
    /// The last declared image just arrived
    Ready,
    /// Readiness was already reported earlier
    AlreadyReady,
}

/// Collects image handles as they finish loading
#[derive(Debug)]
pub struct AssetLoader<H> {
    manifest: AssetManifest,
    images: HashMap<String, H>,
    signalled: bool,
}

impl<H> AssetLoader<H> {
    pub fn new(manifest: AssetManifest) -> Self {
        Self {
            images: HashMap::with_capacity(manifest.len()),
            manifest,
            signalled: false,
        }
    }

    pub fn manifest(&self) -> &AssetManifest {
        &self.manifest
    }

    /// Record a loaded image
    pub fn loaded(&mut self, name: &str, handle: H) -> Result<Readiness, AssetError> {
        if !self.manifest.contains(name) {
            return Err(AssetError::Undeclared(name.to_string()));
        }
        self.images.insert(name.to_string(), handle);

        let remaining = self.manifest.len() - self.images.len();
        if remaining > 0 {
            return Ok(Readiness::Loading { remaining });
        }
        if self.signalled {
            return Ok(Readiness::AlreadyReady);
        }
        self.signalled = true;
        log::info!("All {} images loaded", self.manifest.len());
        Ok(Readiness::Ready)
    }

    pub fn is_ready(&self) -> bool {
        self.images.len() == self.manifest.len()
    }

    /// Finish loading; fails naming the first missing image
    pub fn finish(self) -> Result<ImageAssets<H>, AssetError> {
        if let Some(missing) = self
            .manifest
            .names()
            .iter()
            .find(|name| !self.images.contains_key(name.as_str()))
        {
            return Err(AssetError::Missing(missing.clone()));
        }
        Ok(ImageAssets {
            images: self.images,
        })
    }
}

/// Every declared image, ready to draw
#[derive(Debug, Clone)]
pub struct ImageAssets<H> {
    images: HashMap<String, H>,
}

impl<H> ImageAssets<H> {
    /// Empty set, for games that draw only primitives
    pub fn none() -> Self {
        Self {
            images: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&H> {
        self.images.get(name)
    }

    /// Look up an image that must exist
    pub fn require(&self, name: &str) -> Result<&H, AssetError> {
        self.get(name)
            .ok_or_else(|| AssetError::Missing(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageAssets<String> {
    /// Handles that are just the image names (headless rendering)
    pub fn named(manifest: &AssetManifest) -> Self {
        Self {
            images: manifest
                .names()
                .iter()
                .map(|n| (n.clone(), n.clone()))
                .collect(),
        }
    }
}
