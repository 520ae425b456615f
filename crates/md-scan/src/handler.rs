//! Caller capabilities: formatting, link activation, tooltips, images.

use crate::format::{default_format, FormatInfo, FormatPhase};
use crate::layout::{ImageParams, TextLayout};
use crate::span::Span;

/// A link or image as written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkData<'a> {
    /// Text between `[` and `]`
    pub text: &'a str,
    /// Text between `(` and `)`
    pub url: &'a str,
    pub text_span: Span,
    pub url_span: Span,
    /// Written with a leading `!`
    pub is_image: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct TooltipData<'a> {
    pub link: LinkData<'a>,
    pub link_icon: &'a str,
}

/// Result of resolving an image reference.
#[derive(Debug, Clone)]
pub struct ImageData<T> {
    /// `None` when the image could not be resolved; a placeholder is drawn
    pub texture: Option<T>,
    /// Fire [`MarkdownHandler::link`] when the image is clicked
    pub use_link_callback: bool,
    pub params: ImageParams,
}

impl<T> Default for ImageData<T> {
    fn default() -> Self {
        Self {
            texture: None,
            use_link_callback: false,
            params: ImageParams::default(),
        }
    }
}

impl<T> ImageData<T> {
    pub fn new(texture: T) -> Self {
        Self {
            texture: Some(texture),
            ..Default::default()
        }
    }

    pub fn is_valid(&self) -> bool {
        self.texture.is_some()
    }
}

/// Callbacks the scanner invokes while rendering. The implementing type is
/// the place for any user data the callbacks need.
///
/// Every method has a default, so `()` works as a handler that only styles.
pub trait MarkdownHandler<L: TextLayout> {
    /// Called before ([`FormatPhase::Enter`]) and after
    /// ([`FormatPhase::Exit`]) each span.
    fn format(&mut self, layout: &mut L, info: &FormatInfo<'_, L::Font>, phase: FormatPhase) {
        default_format(layout, info, phase);
    }

    /// A hovered link was clicked.
    fn link(&mut self, _link: &LinkData<'_>) {}

    /// A link or image is hovered this frame.
    fn tooltip(&mut self, _layout: &mut L, _tooltip: &TooltipData<'_>) {}

    /// Resolve `![text](url)` to a texture.
    fn image(&mut self, _layout: &mut L, _link: &LinkData<'_>) -> ImageData<L::Texture> {
        ImageData::default()
    }
}

impl<L: TextLayout> MarkdownHandler<L> for () {}

/// Tooltip showing where a link goes. Not installed by default; call it from
/// [`MarkdownHandler::tooltip`].
pub fn default_tooltip<L: TextLayout>(layout: &mut L, tooltip: &TooltipData<'_>) {
    if tooltip.link.is_image {
        layout.tooltip(tooltip.link.url);
    } else {
        layout.tooltip(&format!(
            "{} Open in browser\n{}",
            tooltip.link_icon, tooltip.link.url
        ));
    }
}
