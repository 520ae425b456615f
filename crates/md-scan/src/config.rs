/// Number of heading levels with their own format. Deeper headings reuse
/// the last one.
pub const NUM_HEADINGS: usize = 3;

/// How a heading level is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingFormat<F> {
    /// Font pushed for the heading, `None` keeps the current font
    pub font: Option<F>,
    /// Draw a separator under the heading
    pub separator: bool,
}

impl<F> Default for HeadingFormat<F> {
    fn default() -> Self {
        Self {
            font: None,
            separator: true,
        }
    }
}

/// Caller supplied configuration, read-only while rendering.
///
/// `F` is the font type of the [`TextLayout`](crate::TextLayout) in use.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownConfig<F> {
    /// Icon string shown in link tooltips
    pub link_icon: String,
    pub heading_formats: [HeadingFormat<F>; NUM_HEADINGS],
}

impl<F> Default for MarkdownConfig<F> {
    fn default() -> Self {
        Self {
            link_icon: String::new(),
            heading_formats: std::array::from_fn(|_| HeadingFormat::default()),
        }
    }
}

impl<F> MarkdownConfig<F> {
    pub fn new(heading_formats: [HeadingFormat<F>; NUM_HEADINGS]) -> Self {
        Self {
            link_icon: String::new(),
            heading_formats,
        }
    }

    pub fn link_icon(mut self, icon: impl Into<String>) -> Self {
        self.link_icon = icon.into();
        self
    }

    /// Format for a heading `level` (1 for H1). Levels past the table reuse
    /// the deepest entry.
    pub fn heading_format(&self, level: usize) -> &HeadingFormat<F> {
        let index = level.clamp(1, NUM_HEADINGS) - 1;
        &self.heading_formats[index]
    }

    /// Strong emphasis is drawn with the deepest heading's font.
    pub fn strong_format(&self) -> &HeadingFormat<F> {
        &self.heading_formats[NUM_HEADINGS - 1]
    }
}
