use egui::TextureHandle;
use md_scan::{default_tooltip, ImageData, ImageParams, LinkData, MarkdownHandler, TooltipData};

use crate::images::ImageCache;
use crate::layout::EguiLayout;
use crate::Result;

/// Opens links with the system handler, shows where links go on hover and
/// loads images from disk, shrunk to fit the row.
#[derive(Default)]
pub struct DefaultHandler {
    pub images: ImageCache,
}

impl DefaultHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve an image through the cache, sized to fit a fresh row.
    pub fn load_image(
        &mut self,
        layout: &EguiLayout<'_>,
        link: &LinkData<'_>,
    ) -> ImageData<TextureHandle> {
        let Some(texture) = self.images.get_or_load(layout.ctx(), link.url) else {
            return ImageData::default();
        };

        let size = texture.size_vec2();
        let max_width = layout.row_width();
        let scale = if size.x > max_width && size.x > 0.0 {
            max_width / size.x
        } else {
            1.0
        };

        ImageData {
            params: ImageParams {
                size: [size.x * scale, size.y * scale],
                ..Default::default()
            },
            ..ImageData::new(texture)
        }
    }
}

impl<'l> MarkdownHandler<EguiLayout<'l>> for DefaultHandler {
    fn link(&mut self, link: &LinkData<'_>) {
        if let Err(err) = open_link(link.url) {
            tracing::error!("failed to open {}: {err}", link.url);
        }
    }

    fn tooltip(&mut self, layout: &mut EguiLayout<'l>, tooltip: &TooltipData<'_>) {
        default_tooltip(layout, tooltip);
    }

    fn image(
        &mut self,
        layout: &mut EguiLayout<'l>,
        link: &LinkData<'_>,
    ) -> ImageData<TextureHandle> {
        self.load_image(layout, link)
    }
}

/// Open `url` with the platform's default handler.
pub fn open_link(url: &str) -> Result<()> {
    tracing::info!("opening {url}");
    opener::open(url)?;
    Ok(())
}
