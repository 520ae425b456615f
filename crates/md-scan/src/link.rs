//! Bracket matching for `[text](url)` links and `![alt](url)` images.

use crate::span::Span;

/// State machine for link/image recognition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkState {
    #[default]
    NoLink,
    /// Seen `[`, collecting text
    TextOpen { text_start: usize, is_image: bool },
    /// Seen `]`, expecting `(`
    Bracketed { text: Span, is_image: bool },
    /// Collecting the url, `depth` counts unbalanced `(`
    UrlOpen {
        text: Span,
        url_start: usize,
        depth: usize,
        is_image: bool,
    },
}

/// A fully matched link or image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedLink {
    pub text: Span,
    pub url: Span,
    pub is_image: bool,
}

impl CompletedLink {
    /// Offset of the first byte of the link syntax: the `[`, or the `!` of an image.
    pub fn syntax_start(&self) -> usize {
        let marker_len = if self.is_image { 2 } else { 1 };
        self.text.start.saturating_sub(marker_len)
    }
}

#[derive(Debug, Default)]
pub struct LinkMatcher {
    state: LinkState,
}

impl LinkMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    /// True once a `[` has been seen and the match is not finished.
    pub fn is_active(&self) -> bool {
        self.state != LinkState::NoLink
    }

    pub fn reset(&mut self) {
        self.state = LinkState::NoLink;
    }

    /// Advance with the byte at `pos`. `prev` is the byte just before it.
    /// `can_open` is false on heading lines.
    pub fn feed(
        &mut self,
        byte: u8,
        pos: usize,
        prev: Option<u8>,
        can_open: bool,
    ) -> Option<CompletedLink> {
        match self.state {
            LinkState::NoLink => {
                if byte == b'[' && can_open {
                    self.state = LinkState::TextOpen {
                        text_start: pos + 1,
                        is_image: prev == Some(b'!'),
                    };
                }
                None
            }

            LinkState::TextOpen {
                text_start,
                is_image,
            } => {
                if byte == b']' {
                    self.state = LinkState::Bracketed {
                        text: Span::new(text_start, pos),
                        is_image,
                    };
                }
                None
            }

            LinkState::Bracketed { text, is_image } => {
                if byte == b'(' {
                    self.state = LinkState::UrlOpen {
                        text,
                        url_start: pos + 1,
                        depth: 1,
                        is_image,
                    };
                    None
                } else {
                    // `](` must be adjacent; look at this byte again as a fresh start
                    self.state = LinkState::NoLink;
                    self.feed(byte, pos, prev, can_open)
                }
            }

            LinkState::UrlOpen {
                text,
                url_start,
                depth,
                is_image,
            } => {
                let depth = match byte {
                    b'(' => depth + 1,
                    b')' => depth - 1,
                    _ => depth,
                };

                if depth == 0 {
                    self.state = LinkState::NoLink;
                    Some(CompletedLink {
                        text,
                        url: Span::new(url_start, pos),
                        is_image,
                    })
                } else {
                    self.state = LinkState::UrlOpen {
                        text,
                        url_start,
                        depth,
                        is_image,
                    };
                    None
                }
            }
        }
    }
}
