//! The single pass over the source buffer.
//!
//! Each byte goes through the line structure checks, then the link matcher,
//! then the emphasis matcher. Finished spans are handed to the renderer as
//! soon as their end is known, so nothing outlives the call.

use crate::config::MarkdownConfig;
use crate::emphasis::{CompletedEmphasis, EmphasisMatcher, EmphasisStep};
use crate::handler::MarkdownHandler;
use crate::layout::TextLayout;
use crate::line::Line;
use crate::link::{CompletedLink, LinkMatcher};
use crate::render::Renderer;
use crate::session::MarkdownSession;

/// Render `source` through `layout`, calling back into `handler`.
///
/// A zero byte ends the input early. Returns the image textures resolved
/// while rendering, newest first.
pub fn markdown<L, H>(
    layout: &mut L,
    handler: &mut H,
    config: &MarkdownConfig<L::Font>,
    session: &mut MarkdownSession,
    source: &str,
) -> Vec<L::Texture>
where
    L: TextLayout,
    H: MarkdownHandler<L>,
{
    let end = source
        .bytes()
        .position(|b| b == 0)
        .unwrap_or(source.len());
    let source = &source[..end];

    let renderer = Renderer::new(source, config, layout, handler, session);
    Scanner::new(renderer).run()
}

struct Scanner<'a, L: TextLayout, H> {
    renderer: Renderer<'a, L, H>,
    bytes: &'a [u8],
    line: Line,
    link: LinkMatcher,
    emphasis: EmphasisMatcher,
}

impl<'a, L, H> Scanner<'a, L, H>
where
    L: TextLayout,
    H: MarkdownHandler<L>,
{
    fn new(renderer: Renderer<'a, L, H>) -> Self {
        let bytes = renderer.source.as_bytes();
        Self {
            renderer,
            bytes,
            line: Line::new(0),
            link: LinkMatcher::new(),
            emphasis: EmphasisMatcher::new(),
        }
    }

    fn run(mut self) -> Vec<L::Texture> {
        let len = self.bytes.len();
        let mut i = 0;

        while i < len {
            let c = self.bytes[i];

            if self.line.is_leading_space {
                if c == b' ' {
                    self.line.lead_space_count += 1;
                    i += 1;
                    continue;
                }

                self.line.is_leading_space = false;
                self.line.render_start = i;
                if let Some(marker_end) = self.line_marker(i) {
                    i = marker_end + 1;
                    continue;
                }
            }

            let prev = i.checked_sub(1).map(|p| self.bytes[p]);

            let link_was_active = self.link.is_active();
            if let Some(link) = self.link.feed(c, i, prev, !self.line.is_heading) {
                self.complete_link(&link, i);
                i += 1;
                continue;
            }
            if !link_was_active && self.link.is_active() {
                // an emphasis run never closes inside a link
                self.emphasis.reset();
            }

            let prev = if i == self.line.line_start { None } else { prev };
            let next = self.bytes.get(i + 1).copied();
            let can_open = !self.link.is_active() && !self.line.is_heading;
            match self.emphasis.feed(c, i, prev, next, can_open) {
                EmphasisStep::Pass => {}
                EmphasisStep::Consumed => {
                    i += 1;
                    continue;
                }
                EmphasisStep::Completed(emphasis) => {
                    self.complete_emphasis(&emphasis, i);
                    i += 1;
                    continue;
                }
                EmphasisStep::Mismatch => {
                    // the line end flushes a newline on its own
                    if c != b'\n' {
                        self.flush_plain(i);
                    }
                }
            }

            if c == b'\n' {
                self.end_line(i);
            }

            i += 1;
        }

        if self.emphasis.is_rule(self.line.line_start, len) {
            self.renderer.separator();
        } else if self.line.line_start < len {
            self.line.line_end = len;
            self.renderer.render_line(&self.line);
        }

        self.renderer.finish()
    }

    /// Detect a list bullet or heading marker at the first non-space byte.
    /// Returns the offset of the last byte of the marker.
    fn line_marker(&mut self, i: usize) -> Option<usize> {
        match self.bytes[i] {
            b'*' if self.line.lead_space_count >= 2 && self.bytes.get(i + 1) == Some(&b' ') => {
                self.line.is_unordered_list_start = true;
                self.line.render_start = i + 2;
                Some(i + 1)
            }

            b'#' => {
                let hashes = self.bytes[i..].iter().take_while(|&&b| b == b'#').count();
                if self.bytes.get(i + hashes) != Some(&b' ') {
                    return None;
                }

                self.line.is_heading = true;
                self.line.heading_count = hashes;
                self.line.render_start = i + hashes + 1;
                // no emphasis in headings
                self.emphasis.reset();
                Some(i + hashes)
            }

            _ => None,
        }
    }

    fn complete_link(&mut self, link: &CompletedLink, i: usize) {
        tracing::trace!(
            "{} at {}..{}",
            if link.is_image { "image" } else { "link" },
            link.text.start,
            link.url.end
        );

        // emphasis never spans a link
        self.emphasis.reset();

        self.line.line_end = link.syntax_start().max(self.line.render_start);
        self.renderer.render_line(&self.line);
        self.line.continue_on_same_row();
        self.renderer.same_line();

        if link.is_image {
            self.renderer.render_image(link);
        } else {
            self.renderer.render_link(link);
        }
        self.renderer.same_line();

        self.line.render_start = i + 1;
    }

    fn complete_emphasis(&mut self, emphasis: &CompletedEmphasis, i: usize) {
        // text before the opening run, or the bullet of a list item
        if emphasis.open > self.line.render_start || self.line.is_unordered_list_start {
            self.line.line_end = emphasis.open;
            self.renderer.render_line(&self.line);
            self.renderer.same_line();
            self.line.continue_on_same_row();
        }

        self.line.is_emphasis = true;
        self.line.emphasis_level = emphasis.level;
        self.line.render_start = emphasis.text.start;
        self.line.line_end = emphasis.text.end;
        self.renderer.render_line(&self.line);
        self.renderer.same_line();

        self.line.is_emphasis = false;
        self.line.render_start = i + 1;
    }

    /// Render everything pending up to `i` as plain text.
    fn flush_plain(&mut self, i: usize) {
        self.line.line_end = i;
        self.renderer.render_line(&self.line);
        self.renderer.same_line();
        self.line.continue_on_same_row();
        self.line.render_start = i;
    }

    fn end_line(&mut self, i: usize) {
        self.line.line_end = i;
        if self.emphasis.is_rule(self.line.line_start, i) {
            self.renderer.separator();
        } else {
            // emphasis never spans lines
            self.renderer.render_line(&self.line);
        }

        self.line = Line::new(i + 1);
        self.emphasis.reset();
        self.link.reset();
        self.renderer.reset_indent();
    }
}
