//! Structural state of the logical line currently being scanned.

/// Text that starts after a newline (or at the beginning of the buffer) and
/// ends with a newline (or at the end of the buffer).
///
/// A line may be rendered in several pieces: everything before a link or an
/// emphasis run is flushed when the match completes, and `render_start` moves
/// past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Line {
    pub is_heading: bool,
    pub is_emphasis: bool,
    pub is_unordered_list_start: bool,
    /// Still inside the run of spaces at the start of the line
    pub is_leading_space: bool,
    pub lead_space_count: usize,
    pub heading_count: usize,
    /// Delimiter run length of the emphasis piece being rendered
    pub emphasis_level: usize,
    pub line_start: usize,
    pub line_end: usize,
    /// First byte not yet handed to the renderer
    pub render_start: usize,
}

impl Line {
    pub fn new(line_start: usize) -> Self {
        Self {
            is_heading: false,
            is_emphasis: false,
            is_unordered_list_start: false,
            is_leading_space: true,
            lead_space_count: 0,
            heading_count: 0,
            emphasis_level: 0,
            line_start,
            line_end: line_start,
            render_start: line_start,
        }
    }

    /// Indent steps to apply around a rendered piece. List rendering already
    /// adds one step of its own.
    pub fn indent_steps(&self) -> usize {
        let steps = self.lead_space_count / 2;
        if self.is_unordered_list_start {
            steps.saturating_sub(1)
        } else {
            steps
        }
    }

    /// Called after a piece of the line has been rendered and more content
    /// follows on the same row. Bullets and leading indent belong to the first
    /// piece only.
    pub fn continue_on_same_row(&mut self) {
        self.is_unordered_list_start = false;
        self.lead_space_count = 0;
    }
}
