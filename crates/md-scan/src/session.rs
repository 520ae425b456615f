use crate::config::MarkdownConfig;
use crate::handler::MarkdownHandler;
use crate::layout::TextLayout;
use crate::scanner::markdown;

/// State that has to survive between frames for one rendered region.
///
/// Keep one per markdown view and pass it to every render of that view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownSession {
    /// Source offset of the text of the link under the pointer. Lets a link
    /// wrapped over several rows highlight as a whole.
    pub(crate) hovered_link: Option<usize>,
}

impl MarkdownSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered_link(&self) -> Option<usize> {
        self.hovered_link
    }

    /// Render `source` for this frame. See [`markdown`].
    pub fn render<L, H>(
        &mut self,
        layout: &mut L,
        handler: &mut H,
        config: &MarkdownConfig<L::Font>,
        source: &str,
    ) -> Vec<L::Texture>
    where
        L: TextLayout,
        H: MarkdownHandler<L>,
    {
        markdown(layout, handler, config, self, source)
    }
}
