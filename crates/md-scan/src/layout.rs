//! The text layout capability the scanner draws through.

/// Theme colours the default formatting asks for. The layout maps them to
/// concrete colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleColor {
    /// De-emphasized text, used for single-delimiter emphasis
    TextDisabled,
    /// Link text, and the underline of a hovered link
    Link,
    /// Underline of a link that is not hovered
    LinkUnderline,
}

/// Placement of an image texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageParams {
    pub size: [f32; 2],
    pub uv0: [f32; 2],
    pub uv1: [f32; 2],
    /// Unmultiplied rgba tint
    pub tint: [f32; 4],
}

impl Default for ImageParams {
    fn default() -> Self {
        Self {
            size: [100.0, 100.0],
            uv0: [0.0, 0.0],
            uv1: [1.0, 1.0],
            tint: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// An immediate-mode layout cursor.
///
/// Every item is placed on a new row unless [`TextLayout::same_line`] was
/// called right before it. Hover and pointer queries refer to the most
/// recently placed item.
pub trait TextLayout {
    type Font: Clone;
    type Texture: Clone;

    /// Width left on the row the next item will be placed on.
    fn available_width(&self) -> f32;

    /// Byte offset into `text` where it has to wrap to fit in `width`,
    /// preferring word boundaries. May be `0` when nothing fits.
    fn wrap_position(&self, text: &str, width: f32) -> usize;

    /// Draw `text` exactly as given, without wrapping.
    fn text(&mut self, text: &str);

    fn bullet(&mut self);

    fn image(&mut self, texture: &Self::Texture, params: &ImageParams);

    fn same_line(&mut self);

    fn new_line(&mut self);

    fn separator(&mut self);

    /// Indent following rows by `width`, or by the default step when `None`.
    fn indent(&mut self, width: Option<f32>);

    fn unindent(&mut self, width: Option<f32>);

    fn item_hovered(&self) -> bool;

    /// Primary pointer button released this frame.
    fn pointer_released(&self) -> bool;

    fn push_font(&mut self, font: &Self::Font);

    fn pop_font(&mut self);

    fn push_color(&mut self, color: StyleColor);

    fn pop_color(&mut self);

    fn underline_last_item(&mut self, color: StyleColor);

    /// Show a tooltip next to the pointer for this frame.
    fn tooltip(&mut self, text: &str);
}
