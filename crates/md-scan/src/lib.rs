//! Single-pass markdown renderer for immediate-mode UIs.
//!
//! The source is scanned once per frame and drawn straight into a
//! [`TextLayout`]; no document tree is built or kept. Supports headings,
//! bullet lists, indentation, `*emphasis*`, `**strong**`, links, images and
//! horizontal rules.

mod config;
mod emphasis;
mod format;
mod handler;
mod layout;
mod line;
mod link;
mod render;
mod scanner;
mod session;
mod span;
mod wrap;

pub use config::{HeadingFormat, MarkdownConfig, NUM_HEADINGS};
pub use emphasis::{CompletedEmphasis, EmphasisMatcher, EmphasisState, EmphasisStep};
pub use format::{default_format, FormatInfo, FormatKind, FormatPhase};
pub use handler::{default_tooltip, ImageData, LinkData, MarkdownHandler, TooltipData};
pub use layout::{ImageParams, StyleColor, TextLayout};
pub use link::{CompletedLink, LinkMatcher, LinkState};
pub use scanner::markdown;
pub use session::MarkdownSession;
pub use span::Span;

#[cfg(test)]
mod tests;
