//! Scanner tests against a layout that records every call.

use crate::{
    default_format, default_tooltip, FormatInfo, FormatKind, FormatPhase, HeadingFormat,
    ImageData, ImageParams, LinkData, MarkdownConfig, MarkdownHandler, MarkdownSession,
    StyleColor, TextLayout, TooltipData,
};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Text(String),
    Bullet,
    Image(u32),
    SameLine,
    NewLine,
    Separator,
    Indent(Option<f32>),
    Unindent(Option<f32>),
    PushFont(u32),
    PopFont,
    PushColor(StyleColor),
    PopColor,
    Underline(StyleColor),
    Tooltip(String),
    Format(FormatKind, FormatPhase),
}

/// Every byte is one unit wide. Items without a preceding `same_line`
/// start a fresh row.
struct Recorder {
    ops: Vec<Op>,
    width: f32,
    row: f32,
    same_line: bool,
    last_item: Option<String>,
    hovered: Vec<String>,
    released: bool,
}

impl Recorder {
    fn new() -> Self {
        Self::with_width(1000.0)
    }

    fn with_width(width: f32) -> Self {
        Self {
            ops: Vec::new(),
            width,
            row: 0.0,
            same_line: false,
            last_item: None,
            hovered: Vec::new(),
            released: false,
        }
    }

    fn hovering(mut self, items: &[&str]) -> Self {
        self.hovered = items.iter().map(|s| s.to_string()).collect();
        self
    }

    fn released(mut self) -> Self {
        self.released = true;
        self
    }

    fn place(&mut self, label: String, width: f32) {
        if !self.same_line {
            self.row = 0.0;
        }
        self.row += width;
        self.same_line = false;
        self.last_item = Some(label);
    }
}

impl TextLayout for Recorder {
    type Font = u32;
    type Texture = u32;

    fn available_width(&self) -> f32 {
        if self.same_line {
            self.width - self.row
        } else {
            self.width
        }
    }

    fn wrap_position(&self, text: &str, width: f32) -> usize {
        let limit = width.max(0.0) as usize;
        if text.len() <= limit {
            return text.len();
        }
        text.as_bytes()[..=limit]
            .iter()
            .rposition(|&b| b == b' ')
            .unwrap_or(limit)
    }

    fn text(&mut self, text: &str) {
        self.ops.push(Op::Text(text.to_string()));
        self.place(text.to_string(), text.len() as f32);
    }

    fn bullet(&mut self) {
        self.ops.push(Op::Bullet);
        self.place("bullet".to_string(), 2.0);
    }

    fn image(&mut self, texture: &u32, _params: &ImageParams) {
        self.ops.push(Op::Image(*texture));
        self.place(format!("image:{texture}"), 10.0);
    }

    fn same_line(&mut self) {
        self.ops.push(Op::SameLine);
        self.same_line = true;
    }

    fn new_line(&mut self) {
        self.ops.push(Op::NewLine);
        self.same_line = false;
    }

    fn separator(&mut self) {
        self.ops.push(Op::Separator);
        self.same_line = false;
    }

    fn indent(&mut self, width: Option<f32>) {
        self.ops.push(Op::Indent(width));
    }

    fn unindent(&mut self, width: Option<f32>) {
        self.ops.push(Op::Unindent(width));
    }

    fn item_hovered(&self) -> bool {
        self.last_item
            .as_ref()
            .is_some_and(|item| self.hovered.contains(item))
    }

    fn pointer_released(&self) -> bool {
        self.released
    }

    fn push_font(&mut self, font: &u32) {
        self.ops.push(Op::PushFont(*font));
    }

    fn pop_font(&mut self) {
        self.ops.push(Op::PopFont);
    }

    fn push_color(&mut self, color: StyleColor) {
        self.ops.push(Op::PushColor(color));
    }

    fn pop_color(&mut self) {
        self.ops.push(Op::PopColor);
    }

    fn underline_last_item(&mut self, color: StyleColor) {
        self.ops.push(Op::Underline(color));
    }

    fn tooltip(&mut self, text: &str) {
        self.ops.push(Op::Tooltip(text.to_string()));
    }
}

#[derive(Default)]
struct TestHandler {
    /// Also run the default styling
    styled: bool,
    valid_images: bool,
    image_links: bool,
    links: Vec<(String, String, bool)>,
    images: Vec<(String, String)>,
    next_texture: u32,
}

impl MarkdownHandler<Recorder> for TestHandler {
    fn format(&mut self, layout: &mut Recorder, info: &FormatInfo<'_, u32>, phase: FormatPhase) {
        layout.ops.push(Op::Format(info.kind, phase));
        if self.styled {
            default_format(layout, info, phase);
        }
    }

    fn link(&mut self, link: &LinkData<'_>) {
        self.links
            .push((link.text.to_string(), link.url.to_string(), link.is_image));
    }

    fn tooltip(&mut self, layout: &mut Recorder, tooltip: &TooltipData<'_>) {
        default_tooltip(layout, tooltip);
    }

    fn image(&mut self, _layout: &mut Recorder, link: &LinkData<'_>) -> ImageData<u32> {
        self.images
            .push((link.text.to_string(), link.url.to_string()));
        if !self.valid_images {
            return ImageData::default();
        }
        self.next_texture += 1;
        ImageData {
            use_link_callback: self.image_links,
            ..ImageData::new(self.next_texture)
        }
    }
}

fn config() -> MarkdownConfig<u32> {
    MarkdownConfig::new([
        HeadingFormat {
            font: Some(1),
            separator: true,
        },
        HeadingFormat {
            font: Some(2),
            separator: true,
        },
        HeadingFormat {
            font: Some(3),
            separator: false,
        },
    ])
    .link_icon("@")
}

fn render_with(
    layout: &mut Recorder,
    handler: &mut TestHandler,
    session: &mut MarkdownSession,
    source: &str,
) -> Vec<u32> {
    session.render(layout, handler, &config(), source)
}

fn render(source: &str) -> Vec<Op> {
    let mut layout = Recorder::new();
    render_with(
        &mut layout,
        &mut TestHandler::default(),
        &mut MarkdownSession::new(),
        source,
    );
    layout.ops
}

/// Non-empty text pieces with the format they were rendered in.
fn styled(ops: &[Op]) -> Vec<(FormatKind, String)> {
    let mut stack = Vec::new();
    let mut out = Vec::new();
    for op in ops {
        match op {
            Op::Format(kind, FormatPhase::Enter) => stack.push(*kind),
            Op::Format(_, FormatPhase::Exit) => {
                stack.pop();
            }
            Op::Text(text) if !text.is_empty() => {
                let kind = stack.last().copied().unwrap_or(FormatKind::NormalText);
                out.push((kind, text.clone()));
            }
            _ => {}
        }
    }
    out
}

fn texts(ops: &[Op]) -> Vec<String> {
    styled(ops).into_iter().map(|(_, text)| text).collect()
}

/// Hover state reported at the exit of every link row.
fn link_exits(ops: &[Op]) -> Vec<bool> {
    ops.iter()
        .filter_map(|op| match op {
            Op::Format(FormatKind::Link { hovered }, FormatPhase::Exit) => Some(*hovered),
            _ => None,
        })
        .collect()
}

fn normal(text: &str) -> (FormatKind, String) {
    (FormatKind::NormalText, text.to_string())
}

#[test]
fn plain_paragraph() {
    assert_eq!(
        render("hello world"),
        vec![
            Op::Format(FormatKind::NormalText, FormatPhase::Enter),
            Op::Text("hello world".to_string()),
            Op::Format(FormatKind::NormalText, FormatPhase::Exit),
        ]
    );
}

#[test]
fn each_line_is_rendered_separately() {
    assert_eq!(
        texts(&render("first\nsecond\n")),
        vec!["first".to_string(), "second".to_string()]
    );
}

#[test]
fn heading_level_and_body() {
    assert_eq!(
        render("### Title\n"),
        vec![
            Op::Format(FormatKind::Heading(3), FormatPhase::Enter),
            Op::Text("Title".to_string()),
            Op::Format(FormatKind::Heading(3), FormatPhase::Exit),
        ]
    );
}

#[test]
fn hash_without_space_is_not_a_heading() {
    assert_eq!(styled(&render("#tag")), vec![normal("#tag")]);
}

#[test]
fn default_heading_style_uses_font_and_separator() {
    let mut layout = Recorder::new();
    let mut handler = TestHandler {
        styled: true,
        ..Default::default()
    };
    render_with(
        &mut layout,
        &mut handler,
        &mut MarkdownSession::new(),
        "# Top\n",
    );

    assert_eq!(
        layout.ops,
        vec![
            Op::Format(FormatKind::Heading(1), FormatPhase::Enter),
            Op::PushFont(1),
            Op::NewLine,
            Op::Text("Top".to_string()),
            Op::Format(FormatKind::Heading(1), FormatPhase::Exit),
            Op::Separator,
            Op::NewLine,
            Op::PopFont,
        ]
    );
}

#[test]
fn deep_headings_reuse_the_last_heading_style() {
    let mut layout = Recorder::new();
    let mut handler = TestHandler {
        styled: true,
        ..Default::default()
    };
    render_with(
        &mut layout,
        &mut handler,
        &mut MarkdownSession::new(),
        "##### Deep",
    );

    assert_eq!(
        styled(&layout.ops),
        vec![(FormatKind::Heading(5), "Deep".to_string())]
    );
    assert!(layout.ops.contains(&Op::PushFont(3)));
    // third heading format has no separator
    assert!(!layout.ops.contains(&Op::Separator));
}

#[test]
fn list_item_at_first_indent_level() {
    assert_eq!(
        render("  * item text"),
        vec![
            Op::Format(FormatKind::UnorderedList, FormatPhase::Enter),
            Op::Bullet,
            Op::SameLine,
            Op::Text("item text".to_string()),
            Op::Indent(Some(2.0)),
            Op::Format(FormatKind::UnorderedList, FormatPhase::Exit),
            Op::Unindent(Some(2.0)),
        ]
    );
}

#[test]
fn nested_list_item_indents_once_more() {
    let ops = render("    * nested");
    assert_eq!(
        styled(&ops),
        vec![(FormatKind::UnorderedList, "nested".to_string())]
    );
    assert_eq!(ops.iter().filter(|op| **op == Op::Indent(None)).count(), 1);
    assert_eq!(ops.iter().filter(|op| **op == Op::Unindent(None)).count(), 1);
}

#[test]
fn star_without_leading_spaces_is_not_a_list() {
    let ops = render("* not a list");
    assert!(!ops.contains(&Op::Bullet));
    assert_eq!(styled(&ops), vec![normal("* not a list")]);
}

#[test]
fn wrapped_list_rows_line_up_with_the_text() {
    let mut layout = Recorder::with_width(6.0);
    render_with(
        &mut layout,
        &mut TestHandler::default(),
        &mut MarkdownSession::new(),
        "  * aaa bbb",
    );

    assert_eq!(
        layout.ops,
        vec![
            Op::Format(FormatKind::UnorderedList, FormatPhase::Enter),
            Op::Bullet,
            Op::SameLine,
            Op::Text("aaa".to_string()),
            Op::Indent(Some(2.0)),
            Op::Text("bbb".to_string()),
            Op::Format(FormatKind::UnorderedList, FormatPhase::Exit),
            Op::Unindent(Some(2.0)),
        ]
    );
}

#[test]
fn leading_spaces_indent_paragraphs() {
    assert_eq!(
        render("  indented\n"),
        vec![
            Op::Indent(None),
            Op::Format(FormatKind::NormalText, FormatPhase::Enter),
            Op::Text("indented".to_string()),
            Op::Format(FormatKind::NormalText, FormatPhase::Exit),
            Op::Unindent(None),
        ]
    );
}

#[test]
fn single_delimiter_is_emphasis() {
    assert_eq!(
        styled(&render("*italic*")),
        vec![(FormatKind::Emphasis(1), "italic".to_string())]
    );
}

#[test]
fn double_delimiter_is_strong_emphasis() {
    assert_eq!(
        styled(&render("**bold**")),
        vec![(FormatKind::Emphasis(2), "bold".to_string())]
    );
}

#[test]
fn emphasis_splits_the_line() {
    assert_eq!(
        styled(&render("a *b* c")),
        vec![
            normal("a "),
            (FormatKind::Emphasis(1), "b".to_string()),
            normal(" c"),
        ]
    );
}

#[test]
fn unclosed_emphasis_is_plain_text() {
    assert_eq!(styled(&render("*not closed")), vec![normal("*not closed")]);
}

#[test]
fn mismatched_runs_flush_as_plain_text() {
    assert_eq!(
        styled(&render("**a* b")),
        vec![normal("**a*"), normal(" b")]
    );
}

#[test]
fn default_emphasis_style() {
    let mut layout = Recorder::new();
    let mut handler = TestHandler {
        styled: true,
        ..Default::default()
    };
    render_with(
        &mut layout,
        &mut handler,
        &mut MarkdownSession::new(),
        "*a* **b**",
    );

    let styling: Vec<Op> = layout
        .ops
        .into_iter()
        .filter(|op| {
            matches!(
                op,
                Op::PushColor(_) | Op::PopColor | Op::PushFont(_) | Op::PopFont
            )
        })
        .collect();
    assert_eq!(
        styling,
        vec![
            Op::PushColor(StyleColor::TextDisabled),
            Op::PopColor,
            Op::PushFont(3),
            Op::PopFont,
        ]
    );
}

#[test]
fn three_delimiters_on_their_own_line_are_a_rule() {
    assert_eq!(render("***\n"), vec![Op::Separator]);
    assert_eq!(render("___\n"), vec![Op::Separator]);
    assert_eq!(render("*****\n"), vec![Op::Separator]);
}

#[test]
fn trailing_rule_without_newline() {
    let ops = render("text\n___");
    assert_eq!(ops.last(), Some(&Op::Separator));
    assert_eq!(texts(&ops), vec!["text".to_string()]);
}

#[test]
fn two_delimiters_are_literal() {
    let ops = render("**\n");
    assert!(!ops.contains(&Op::Separator));
    assert_eq!(styled(&ops), vec![normal("**")]);
}

#[test]
fn rule_must_fill_the_line() {
    let ops = render("*** \n");
    assert!(!ops.contains(&Op::Separator));

    let ops = render("  ***\n");
    assert!(!ops.contains(&Op::Separator));
}

#[test]
fn triple_delimited_text_is_neither_rule_nor_emphasis() {
    let ops = render("***a***\n");
    assert!(!ops.contains(&Op::Separator));
    assert_eq!(styled(&ops), vec![normal("***a***")]);
}

#[test]
fn link_is_rendered_between_text() {
    let mut layout = Recorder::new();
    let mut handler = TestHandler::default();
    render_with(
        &mut layout,
        &mut handler,
        &mut MarkdownSession::new(),
        "see [docs](http://x) now",
    );

    assert_eq!(
        styled(&layout.ops),
        vec![
            normal("see "),
            (FormatKind::Link { hovered: false }, "docs".to_string()),
            normal(" now"),
        ]
    );
    assert!(handler.links.is_empty());
}

#[test]
fn default_link_style_underlines() {
    let mut layout = Recorder::new();
    let mut handler = TestHandler {
        styled: true,
        ..Default::default()
    };
    render_with(
        &mut layout,
        &mut handler,
        &mut MarkdownSession::new(),
        "[a](b)",
    );

    assert!(layout.ops.contains(&Op::PushColor(StyleColor::Link)));
    assert!(layout
        .ops
        .contains(&Op::Underline(StyleColor::LinkUnderline)));
}

#[test]
fn hovered_link_activates_on_release() {
    let mut layout = Recorder::new().hovering(&["a"]).released();
    let mut handler = TestHandler::default();
    let mut session = MarkdownSession::new();
    render_with(
        &mut layout,
        &mut handler,
        &mut session,
        "[a](http://x.com/(y))",
    );

    assert_eq!(
        handler.links,
        vec![("a".to_string(), "http://x.com/(y)".to_string(), false)]
    );
    assert_eq!(session.hovered_link(), Some(1));
    assert!(layout.ops.contains(&Op::Tooltip(
        "@ Open in browser\nhttp://x.com/(y)".to_string()
    )));
    assert_eq!(link_exits(&layout.ops), vec![true]);
}

#[test]
fn hover_without_release_does_not_activate() {
    let mut layout = Recorder::new().hovering(&["a"]);
    let mut handler = TestHandler::default();
    render_with(
        &mut layout,
        &mut handler,
        &mut MarkdownSession::new(),
        "[a](b)",
    );
    assert!(handler.links.is_empty());
}

#[test]
fn wrapped_link_hovers_as_a_whole() {
    let source = "[alpha beta](u)";
    let mut session = MarkdownSession::new();
    let mut handler = TestHandler::default();

    let mut frame = Recorder::with_width(6.0).hovering(&["alpha"]);
    render_with(&mut frame, &mut handler, &mut session, source);
    assert_eq!(texts(&frame.ops), vec!["alpha".to_string(), "beta".to_string()]);
    assert_eq!(link_exits(&frame.ops), vec![true, true]);

    // pointer left: this frame still draws hovered, then the slot clears
    let mut frame = Recorder::with_width(6.0);
    render_with(&mut frame, &mut handler, &mut session, source);
    assert_eq!(link_exits(&frame.ops), vec![true, true]);
    assert_eq!(session.hovered_link(), None);

    let mut frame = Recorder::with_width(6.0);
    render_with(&mut frame, &mut handler, &mut session, source);
    assert_eq!(link_exits(&frame.ops), vec![false, false]);
}

#[test]
fn hovering_a_later_row_highlights_earlier_rows_next_frame() {
    let source = "[alpha beta](u)";
    let mut session = MarkdownSession::new();
    let mut handler = TestHandler::default();

    let mut frame = Recorder::with_width(6.0).hovering(&["beta"]);
    render_with(&mut frame, &mut handler, &mut session, source);
    assert_eq!(link_exits(&frame.ops), vec![false, true]);

    let mut frame = Recorder::with_width(6.0).hovering(&["beta"]);
    render_with(&mut frame, &mut handler, &mut session, source);
    assert_eq!(link_exits(&frame.ops), vec![true, true]);
}

#[test]
fn unterminated_link_is_plain_text_at_line_end() {
    assert_eq!(
        texts(&render("a [b](c\nnext")),
        vec!["a [b](c".to_string(), "next".to_string()]
    );
}

#[test]
fn headings_ignore_links_and_emphasis() {
    assert_eq!(
        styled(&render("# [a](b) *c*")),
        vec![(FormatKind::Heading(1), "[a](b) *c*".to_string())]
    );
}

#[test]
fn link_ends_emphasis() {
    let mut layout = Recorder::new();
    let mut handler = TestHandler::default();
    render_with(
        &mut layout,
        &mut handler,
        &mut MarkdownSession::new(),
        "*see [x](y)*",
    );
    assert_eq!(
        styled(&layout.ops),
        vec![
            normal("*see "),
            (FormatKind::Link { hovered: false }, "x".to_string()),
            normal("*"),
        ]
    );
}

#[test]
fn emphasis_cannot_close_inside_link_text() {
    assert_eq!(
        styled(&render("*a [b* c](d)")),
        vec![
            normal("*a "),
            (FormatKind::Link { hovered: false }, "b* c".to_string()),
        ]
    );
}

#[test]
fn emphasis_cannot_close_inside_link_url() {
    let mut layout = Recorder::new().hovering(&["y"]).released();
    let mut handler = TestHandler::default();
    render_with(
        &mut layout,
        &mut handler,
        &mut MarkdownSession::new(),
        "*x [y](z*w)",
    );

    assert_eq!(
        styled(&layout.ops),
        vec![
            normal("*x "),
            (FormatKind::Link { hovered: false }, "y".to_string()),
        ]
    );
    assert_eq!(link_exits(&layout.ops), vec![true]);
    assert_eq!(
        handler.links,
        vec![("y".to_string(), "z*w".to_string(), false)]
    );
}

#[test]
fn list_bullet_is_drawn_once_around_a_link() {
    let ops = render("  * [a](b) tail");
    assert_eq!(ops.iter().filter(|op| **op == Op::Bullet).count(), 1);
    assert_eq!(
        styled(&ops),
        vec![
            (FormatKind::Link { hovered: false }, "a".to_string()),
            normal(" tail"),
        ]
    );
}

#[test]
fn images_are_returned_newest_first() {
    let mut layout = Recorder::new();
    let mut handler = TestHandler {
        valid_images: true,
        ..Default::default()
    };
    let images = render_with(
        &mut layout,
        &mut handler,
        &mut MarkdownSession::new(),
        "![one](a.png) and ![two](b.png)",
    );

    assert_eq!(images, vec![2, 1]);
    assert_eq!(
        handler.images,
        vec![
            ("one".to_string(), "a.png".to_string()),
            ("two".to_string(), "b.png".to_string()),
        ]
    );
    let drawn: Vec<&Op> = layout
        .ops
        .iter()
        .filter(|op| matches!(op, Op::Image(_)))
        .collect();
    assert_eq!(drawn, vec![&Op::Image(1), &Op::Image(2)]);
    assert_eq!(texts(&layout.ops), vec![" and ".to_string()]);
}

#[test]
fn unresolved_image_shows_placeholder() {
    let mut layout = Recorder::new();
    let mut handler = TestHandler::default();
    let images = render_with(
        &mut layout,
        &mut handler,
        &mut MarkdownSession::new(),
        "![alt](missing.png)",
    );

    assert!(images.is_empty());
    assert_eq!(
        texts(&layout.ops),
        vec!["( Image missing.png not loaded )".to_string()]
    );
    assert_eq!(
        handler.images,
        vec![("alt".to_string(), "missing.png".to_string())]
    );
}

#[test]
fn clickable_image_fires_link_callback() {
    let mut layout = Recorder::new().hovering(&["image:1"]).released();
    let mut handler = TestHandler {
        valid_images: true,
        image_links: true,
        ..Default::default()
    };
    render_with(
        &mut layout,
        &mut handler,
        &mut MarkdownSession::new(),
        "![alt](pic.png)",
    );

    assert_eq!(
        handler.links,
        vec![("alt".to_string(), "pic.png".to_string(), true)]
    );
    assert!(layout.ops.contains(&Op::Tooltip("pic.png".to_string())));
}

#[test]
fn image_click_needs_opt_in() {
    let mut layout = Recorder::new().hovering(&["image:1"]).released();
    let mut handler = TestHandler {
        valid_images: true,
        ..Default::default()
    };
    render_with(
        &mut layout,
        &mut handler,
        &mut MarkdownSession::new(),
        "![alt](pic.png)",
    );
    assert!(handler.links.is_empty());
}

#[test]
fn zero_byte_ends_the_input() {
    assert_eq!(texts(&render("abc\0def")), vec!["abc".to_string()]);
    assert_eq!(texts(&render("abc\n\0")), vec!["abc".to_string()]);
}

#[test]
fn empty_input_renders_nothing() {
    assert!(render("").is_empty());
}

#[test]
fn rendering_is_repeatable() {
    let source = "# H1\nSome [link](https://a.b/(c)) and ![img](x.png)\n***\n\
                  *Emphasis* and **strong**\n  indented\n    * list *item*\n";
    let mut session = MarkdownSession::new();
    let mut handler = TestHandler {
        styled: true,
        valid_images: true,
        ..Default::default()
    };

    let mut first = Recorder::with_width(12.0);
    render_with(&mut first, &mut handler, &mut session, source);
    let mut second = Recorder::with_width(12.0);
    render_with(&mut second, &mut handler, &mut session, source);

    assert_eq!(first.ops, second.ops);
}

#[test]
fn malformed_input_never_panics() {
    let inputs = [
        "[[[(((",
        "](",
        "![",
        "![]()",
        "[]()",
        "*",
        "_a_b_",
        "#",
        "# ",
        "  *",
        "  * ",
        "\n\n\n",
        "é *é* [é](é)",
        "**a**b**",
        "[a](b))",
        "   \n  \n",
    ];
    for input in inputs {
        let mut layout = Recorder::with_width(3.0);
        render_with(
            &mut layout,
            &mut TestHandler::default(),
            &mut MarkdownSession::new(),
            input,
        );
    }
}

#[test]
fn unit_handler_only_styles() {
    let mut layout = Recorder::new();
    let images = crate::markdown(
        &mut layout,
        &mut (),
        &config(),
        &mut MarkdownSession::new(),
        "## Sub\n![x](y)",
    );
    assert!(images.is_empty());
    assert!(layout.ops.contains(&Op::PushFont(2)));
    assert!(layout
        .ops
        .contains(&Op::Text("( Image y not loaded )".to_string())));
}
