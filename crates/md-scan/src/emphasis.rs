//! Run-length matching for `*` / `_` emphasis.
//!
//! One delimiter is emphasis, two is strong emphasis. Longer runs never
//! complete as emphasis; when such a run fills a whole line it is a
//! horizontal rule instead, which can only be decided once the line ends.

use crate::span::Span;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmphasisState {
    #[default]
    None,
    /// Counting the opening run that starts at `start`
    Left { sym: u8, start: usize, count: usize },
    /// Inside the emphasized text
    Middle {
        sym: u8,
        start: usize,
        count: usize,
        text_start: usize,
    },
    /// Counting the closing run, which starts at `text.end`
    Right {
        sym: u8,
        start: usize,
        count: usize,
        text: Span,
    },
}

/// A matched emphasis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedEmphasis {
    /// Offset of the opening delimiter run
    pub open: usize,
    pub text: Span,
    /// Delimiter run length: 1 = emphasis, 2 = strong
    pub level: usize,
}

/// What the scanner should do with the byte it just fed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisStep {
    /// Ordinary text, keep processing the byte
    Pass,
    /// Part of a delimiter run, nothing else looks at it
    Consumed,
    Completed(CompletedEmphasis),
    /// Closing run length differed from the opening one; the match is dropped
    Mismatch,
}

fn is_delimiter(byte: u8) -> bool {
    byte == b'*' || byte == b'_'
}

#[derive(Debug, Default)]
pub struct EmphasisMatcher {
    state: EmphasisState,
}

impl EmphasisMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EmphasisState {
        self.state
    }

    pub fn reset(&mut self) {
        self.state = EmphasisState::None;
    }

    /// Advance with the byte at `pos`. `prev` is `None` at the start of the
    /// line. `can_open` is false while a link is open or on heading lines.
    pub fn feed(
        &mut self,
        byte: u8,
        pos: usize,
        prev: Option<u8>,
        next: Option<u8>,
        can_open: bool,
    ) -> EmphasisStep {
        match self.state {
            EmphasisState::None => {
                // must follow whitespace or line start, and precede non-whitespace
                let opens = can_open
                    && is_delimiter(byte)
                    && matches!(prev, None | Some(b' ') | Some(b'\t'))
                    && matches!(next, Some(n) if !matches!(n, b' ' | b'\n' | b'\t'));

                if !opens {
                    return EmphasisStep::Pass;
                }

                self.state = EmphasisState::Left {
                    sym: byte,
                    start: pos,
                    count: 1,
                };
                EmphasisStep::Consumed
            }

            EmphasisState::Left { sym, start, count } => {
                if byte == sym {
                    self.state = EmphasisState::Left {
                        sym,
                        start,
                        count: count + 1,
                    };
                    EmphasisStep::Consumed
                } else {
                    self.state = EmphasisState::Middle {
                        sym,
                        start,
                        count,
                        text_start: pos,
                    };
                    EmphasisStep::Pass
                }
            }

            EmphasisState::Middle {
                sym,
                start,
                count,
                text_start,
            } => {
                if byte != sym {
                    return EmphasisStep::Pass;
                }
                let text = Span::new(text_start, pos);
                self.state = EmphasisState::Right {
                    sym,
                    start,
                    count,
                    text,
                };
                self.close(byte, pos)
            }

            EmphasisState::Right { .. } => self.close(byte, pos),
        }
    }

    fn close(&mut self, byte: u8, pos: usize) -> EmphasisStep {
        let EmphasisState::Right {
            sym,
            start,
            count,
            text,
        } = self.state
        else {
            return EmphasisStep::Pass;
        };

        if byte != sym {
            self.state = EmphasisState::None;
            return EmphasisStep::Mismatch;
        }

        let closing_len = pos - text.end + 1;
        if count < 3 && closing_len == count {
            self.state = EmphasisState::None;
            return EmphasisStep::Completed(CompletedEmphasis {
                open: start,
                text,
                level: count,
            });
        }

        EmphasisStep::Consumed
    }

    /// True when the open run is three or more delimiters and is the only
    /// content of the line `[line_start, line_end)`.
    pub fn is_rule(&self, line_start: usize, line_end: usize) -> bool {
        match self.state {
            EmphasisState::Left { start, count, .. }
            | EmphasisState::Middle { start, count, .. } => {
                count >= 3 && start == line_start && start + count == line_end
            }
            _ => false,
        }
    }
}
