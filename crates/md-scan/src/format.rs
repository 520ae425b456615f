//! Format notifications sent around every rendered span.

use crate::config::MarkdownConfig;
use crate::layout::{StyleColor, TextLayout};

/// Classification of a rendered span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    NormalText,
    /// Heading level, 1 for H1
    Heading(usize),
    UnorderedList,
    /// `hovered` is only set on [`FormatPhase::Exit`]
    Link { hovered: bool },
    /// 1 for emphasis, 2 for strong emphasis
    Emphasis(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatPhase {
    Enter,
    Exit,
}

#[derive(Debug)]
pub struct FormatInfo<'a, F> {
    pub kind: FormatKind,
    pub config: &'a MarkdownConfig<F>,
}

/// Default styling. Custom handlers can call this first and then adjust.
pub fn default_format<L: TextLayout>(
    layout: &mut L,
    info: &FormatInfo<'_, L::Font>,
    phase: FormatPhase,
) {
    match info.kind {
        FormatKind::NormalText | FormatKind::UnorderedList => {}

        FormatKind::Emphasis(1) => match phase {
            FormatPhase::Enter => layout.push_color(StyleColor::TextDisabled),
            FormatPhase::Exit => layout.pop_color(),
        },

        FormatKind::Emphasis(_) => {
            if let Some(font) = &info.config.strong_format().font {
                match phase {
                    FormatPhase::Enter => layout.push_font(font),
                    FormatPhase::Exit => layout.pop_font(),
                }
            }
        }

        FormatKind::Heading(level) => {
            let fmt = info.config.heading_format(level);
            match phase {
                FormatPhase::Enter => {
                    if let Some(font) = &fmt.font {
                        layout.push_font(font);
                    }
                    layout.new_line();
                }
                FormatPhase::Exit => {
                    if fmt.separator {
                        layout.separator();
                    }
                    layout.new_line();
                    if fmt.font.is_some() {
                        layout.pop_font();
                    }
                }
            }
        }

        FormatKind::Link { hovered } => match phase {
            FormatPhase::Enter => layout.push_color(StyleColor::Link),
            FormatPhase::Exit => {
                layout.pop_color();
                let underline = if hovered {
                    StyleColor::Link
                } else {
                    StyleColor::LinkUnderline
                };
                layout.underline_last_item(underline);
            }
        },
    }
}
