//! Splitting a span into rows using the layout's wrap positions.

use crate::layout::TextLayout;

/// End of the row starting at `start`, clamped to the text and to a char
/// boundary. Equal to `start` when nothing fits.
pub(crate) fn row_end<L: TextLayout>(layout: &L, text: &str, start: usize, width: f32) -> usize {
    let rest = &text[start..];
    let mut pos = layout.wrap_position(rest, width).min(rest.len());
    while !rest.is_char_boundary(pos) {
        pos -= 1;
    }
    start + pos
}

/// Start of the row following one that ended at `end`. A single space at the
/// break is dropped.
pub(crate) fn next_row_start(text: &str, end: usize) -> usize {
    if text.as_bytes().get(end) == Some(&b' ') {
        end + 1
    } else {
        end
    }
}

/// End of the row after `start` that always makes progress, even when the
/// layout reports that not a single character fits.
pub(crate) fn continuation_end<L: TextLayout>(
    layout: &L,
    text: &str,
    start: usize,
    width: f32,
) -> usize {
    let end = row_end(layout, text, start, width);
    if end > start {
        return end;
    }
    text[start..]
        .chars()
        .next()
        .map_or(start, |c| start + c.len_utf8())
}
