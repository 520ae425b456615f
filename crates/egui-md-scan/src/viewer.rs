use egui::{TextureHandle, Ui};
use md_scan::{MarkdownHandler, MarkdownSession};

use crate::layout::EguiLayout;
use crate::style::MarkdownStyle;

/// A markdown region that keeps its hover state across frames.
///
/// ```ignore
/// let images = viewer.show(ui, &mut handler, text);
/// ```
#[derive(Debug, Default)]
pub struct MarkdownViewer {
    session: MarkdownSession,
    style: MarkdownStyle,
}

impl MarkdownViewer {
    pub fn new(style: MarkdownStyle) -> Self {
        Self {
            session: MarkdownSession::new(),
            style,
        }
    }

    pub fn session(&self) -> &MarkdownSession {
        &self.session
    }

    /// Render `text` for this frame. Returns the images drawn, newest first.
    pub fn show<H>(&mut self, ui: &mut Ui, handler: &mut H, text: &str) -> Vec<TextureHandle>
    where
        H: for<'l> MarkdownHandler<EguiLayout<'l>>,
    {
        let config = self.style.config(ui.ctx(), ui.style());
        let session = &mut self.session;

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            let mut layout = EguiLayout::new(ui);
            session.render(&mut layout, handler, &config, text)
        })
        .inner
    }
}
