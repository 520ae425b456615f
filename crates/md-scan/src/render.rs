//! Dispatch of finished spans to the layout and the handler.

use crate::config::MarkdownConfig;
use crate::format::{FormatInfo, FormatKind, FormatPhase};
use crate::handler::{LinkData, MarkdownHandler, TooltipData};
use crate::layout::TextLayout;
use crate::line::Line;
use crate::link::CompletedLink;
use crate::session::MarkdownSession;
use crate::wrap::{continuation_end, next_row_start, row_end};

pub(crate) struct Renderer<'a, L: TextLayout, H> {
    pub source: &'a str,
    config: &'a MarkdownConfig<L::Font>,
    layout: &'a mut L,
    handler: &'a mut H,
    session: &'a mut MarkdownSession,
    /// Extra indent added to line up wrapped list rows with their text
    indent_x: f32,
    images: Vec<L::Texture>,
}

impl<'a, L, H> Renderer<'a, L, H>
where
    L: TextLayout,
    H: MarkdownHandler<L>,
{
    pub fn new(
        source: &'a str,
        config: &'a MarkdownConfig<L::Font>,
        layout: &'a mut L,
        handler: &'a mut H,
        session: &'a mut MarkdownSession,
    ) -> Self {
        Self {
            source,
            config,
            layout,
            handler,
            session,
            indent_x: 0.0,
            images: Vec::new(),
        }
    }

    fn format(&mut self, kind: FormatKind, phase: FormatPhase) {
        let info = FormatInfo {
            kind,
            config: self.config,
        };
        self.handler.format(self.layout, &info, phase);
    }

    /// Render the pending piece of `line`, `[render_start, line_end)`.
    pub fn render_line(&mut self, line: &Line) {
        let steps = line.indent_steps();
        for _ in 0..steps {
            self.layout.indent(None);
        }

        let source = self.source;
        let text = source.get(line.render_start..line.line_end).unwrap_or("");

        let kind = if line.is_unordered_list_start {
            FormatKind::UnorderedList
        } else if line.is_heading {
            FormatKind::Heading(line.heading_count)
        } else if line.is_emphasis {
            FormatKind::Emphasis(line.emphasis_level)
        } else {
            FormatKind::NormalText
        };

        self.format(kind, FormatPhase::Enter);
        if line.is_unordered_list_start {
            self.layout.bullet();
            self.layout.same_line();
            self.render_text_wrapped(text, true);
        } else {
            self.render_text_wrapped(text, false);
        }
        self.format(kind, FormatPhase::Exit);

        for _ in 0..steps {
            self.layout.unindent(None);
        }
    }

    /// The first row continues wherever the cursor is; following rows get
    /// the full width. With `indent_to_here`, following rows start under the
    /// first character instead of at the row start.
    fn render_text_wrapped(&mut self, text: &str, indent_to_here: bool) {
        let width_left = self.layout.available_width();
        let mut end = row_end(&*self.layout, text, 0, width_left);
        self.layout.text(&text[..end]);

        if indent_to_here {
            let needed = self.layout.available_width() - width_left;
            if needed > 0.0 {
                self.layout.indent(Some(needed));
                self.indent_x += needed;
            }
        }

        let width_left = self.layout.available_width();
        while end < text.len() {
            let start = next_row_start(text, end);
            if start >= text.len() {
                break;
            }
            end = continuation_end(&*self.layout, text, start, width_left);
            self.layout.text(&text[start..end]);
        }
    }

    /// Undo any indent added for wrapped list rows. Called at every line end.
    pub fn reset_indent(&mut self) {
        if self.indent_x > 0.0 {
            self.layout.unindent(Some(self.indent_x));
        }
        self.indent_x = 0.0;
    }

    pub fn separator(&mut self) {
        self.layout.separator();
    }

    pub fn same_line(&mut self) {
        self.layout.same_line();
    }

    fn link_data(&self, link: &CompletedLink) -> LinkData<'a> {
        LinkData {
            text: link.text.resolve(self.source),
            url: link.url.resolve(self.source),
            text_span: link.text,
            url_span: link.url,
            is_image: link.is_image,
        }
    }

    /// Render link text, wrapped over as many rows as needed. All rows share
    /// one hover state: hovering any of them marks the whole link hovered.
    pub fn render_link(&mut self, link: &CompletedLink) {
        let text = link.text.resolve(self.source);

        let width_left = self.layout.available_width();
        let mut end = row_end(&*self.layout, text, 0, width_left);
        let mut hovered = self.render_link_text(&text[..end], link);

        let width_left = self.layout.available_width();
        while end < text.len() {
            let start = next_row_start(text, end);
            if start >= text.len() {
                break;
            }
            end = continuation_end(&*self.layout, text, start, width_left);
            hovered |= self.render_link_text(&text[start..end], link);
        }

        if !hovered && self.session.hovered_link == Some(link.text.start) {
            self.session.hovered_link = None;
        }
    }

    /// Returns whether this row itself is hovered.
    fn render_link_text(&mut self, text: &str, link: &CompletedLink) -> bool {
        self.format(FormatKind::Link { hovered: false }, FormatPhase::Enter);
        self.layout.text(text);

        let this_hovered = self.layout.item_hovered();
        if this_hovered {
            self.session.hovered_link = Some(link.text.start);
        }
        let hovered = this_hovered || self.session.hovered_link == Some(link.text.start);

        self.format(FormatKind::Link { hovered }, FormatPhase::Exit);

        if hovered {
            let data = self.link_data(link);
            if self.layout.pointer_released() {
                tracing::debug!("link activated: {}", data.url);
                self.handler.link(&data);
            }
            let tooltip = TooltipData {
                link: data,
                link_icon: &self.config.link_icon,
            };
            self.handler.tooltip(self.layout, &tooltip);
        }

        this_hovered
    }

    pub fn render_image(&mut self, link: &CompletedLink) {
        let data = self.link_data(link);
        let image = self.handler.image(self.layout, &data);

        match &image.texture {
            Some(texture) => {
                self.layout.image(texture, &image.params);
                self.images.push(texture.clone());
            }
            None => {
                tracing::trace!("image '{}' not resolved", data.url);
                self.layout.text(&format!("( Image {} not loaded )", data.url));
            }
        }

        if self.layout.item_hovered() {
            if self.layout.pointer_released() && image.use_link_callback {
                self.handler.link(&data);
            }
            if !data.text.is_empty() {
                let tooltip = TooltipData {
                    link: data,
                    link_icon: &self.config.link_icon,
                };
                self.handler.tooltip(self.layout, &tooltip);
            }
        }
    }

    /// Collected image handles, newest first.
    pub fn finish(mut self) -> Vec<L::Texture> {
        self.reset_indent();
        self.images.reverse();
        self.images
    }
}
