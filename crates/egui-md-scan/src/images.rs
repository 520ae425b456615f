use std::collections::HashMap;
use std::path::Path;

use egui::{ColorImage, TextureHandle};
use image::imageops::FilterType;

use crate::Result;

/// Textures for image links, keyed by url. Failed loads are remembered too,
/// so a broken image is only reported once while it stays in the source.
#[derive(Default)]
pub struct ImageCache {
    textures: HashMap<String, CachedImage>,
}

struct CachedImage {
    texture: Option<TextureHandle>,
    /// Looked up since the last [`ImageCache::retain_used`]
    used: bool,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load(&mut self, ctx: &egui::Context, url: &str) -> Option<TextureHandle> {
        if let Some(entry) = self.textures.get_mut(url) {
            entry.used = true;
            return entry.texture.clone();
        }

        let texture = match load_texture(ctx, url) {
            Ok(texture) => {
                tracing::debug!("loaded image {url}");
                Some(texture)
            }
            Err(err) => {
                tracing::warn!("failed to load image {url}: {err}");
                None
            }
        };
        self.textures.insert(
            url.to_owned(),
            CachedImage {
                texture: texture.clone(),
                used: true,
            },
        );
        texture
    }

    /// Drop every url not looked up since the previous call. Call once per
    /// frame, after all markdown using this cache has been shown.
    pub fn retain_used(&mut self) {
        self.textures.retain(|_, entry| std::mem::take(&mut entry.used));
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Forget everything, including failures. Textures still referenced
    /// elsewhere stay alive.
    pub fn clear(&mut self) {
        self.textures.clear();
    }
}

fn local_path(url: &str) -> &Path {
    Path::new(url.strip_prefix("file://").unwrap_or(url))
}

fn load_texture(ctx: &egui::Context, url: &str) -> Result<TextureHandle> {
    let data = std::fs::read(local_path(url))?;
    let mut image = image::load_from_memory(&data)?;

    let max_side = ctx.input(|i| i.max_texture_side) as u32;
    if image.width() > max_side || image.height() > max_side {
        image = image.resize(max_side, max_side, FilterType::Triangle);
    }

    let image = image.to_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    let color_image = ColorImage::from_rgba_unmultiplied(size, image.as_flat_samples().as_slice());
    Ok(ctx.load_texture(url, color_image, Default::default()))
}
