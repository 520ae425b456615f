//! [`TextLayout`] over an egui [`Ui`].
//!
//! Meant to run inside `ui.horizontal_wrapped` with zero horizontal item
//! spacing, see [`MarkdownViewer`](crate::MarkdownViewer). Rows are ended
//! lazily: an item only breaks the row when it is placed without a
//! preceding `same_line`.

use egui::{
    pos2, vec2, Color32, FontId, Label, Rect, Response, RichText, Rgba, Sense, Stroke,
    TextStyle, TextWrapMode, TextureHandle, Ui,
};
use md_scan::{ImageParams, StyleColor, TextLayout};

pub struct EguiLayout<'a> {
    ui: &'a mut Ui,
    fonts: Vec<FontId>,
    colors: Vec<Color32>,
    same_line: bool,
    /// Something has been placed on the current row
    row_started: bool,
    indent: f32,
    last: Option<Response>,
}

impl<'a> EguiLayout<'a> {
    pub fn new(ui: &'a mut Ui) -> Self {
        Self {
            ui,
            fonts: Vec::new(),
            colors: Vec::new(),
            same_line: false,
            row_started: false,
            indent: 0.0,
            last: None,
        }
    }

    pub fn ctx(&self) -> &egui::Context {
        self.ui.ctx()
    }

    /// Width of a fresh row at the current indent.
    pub fn row_width(&self) -> f32 {
        (self.ui.max_rect().width() - self.indent).max(0.0)
    }

    fn font(&self) -> FontId {
        self.fonts
            .last()
            .cloned()
            .unwrap_or_else(|| TextStyle::Body.resolve(self.ui.style()))
    }

    fn color(&self) -> Color32 {
        self.colors
            .last()
            .copied()
            .unwrap_or_else(|| self.ui.visuals().text_color())
    }

    fn style_color(&self, color: StyleColor) -> Color32 {
        let visuals = self.ui.visuals();
        match color {
            StyleColor::TextDisabled => visuals.weak_text_color(),
            StyleColor::Link => visuals.hyperlink_color,
            StyleColor::LinkUnderline => visuals.widgets.inactive.bg_fill,
        }
    }

    fn continues_row(&self) -> bool {
        self.same_line && self.row_started
    }

    fn end_row(&mut self) {
        if self.row_started {
            self.ui.end_row();
            self.row_started = false;
        }
    }

    fn begin_item(&mut self) {
        if !self.same_line {
            self.end_row();
        }
        if !self.row_started {
            if self.indent > 0.0 {
                self.ui.add_space(self.indent);
            }
            self.row_started = true;
        }
        self.same_line = false;
    }
}

impl TextLayout for EguiLayout<'_> {
    type Font = FontId;
    type Texture = TextureHandle;

    fn available_width(&self) -> f32 {
        if self.continues_row() {
            self.ui.available_size_before_wrap().x
        } else {
            self.row_width()
        }
    }

    fn wrap_position(&self, text: &str, width: f32) -> usize {
        let font = self.font();
        let fresh_row = !self.continues_row();

        self.ui.fonts(|fonts| {
            let mut x = 0.0;
            let mut last_break = None;
            for (i, c) in text.char_indices() {
                if c == ' ' {
                    last_break = Some(i);
                }
                x += fonts.glyph_width(&font, c);
                if x > width {
                    return match last_break {
                        Some(pos) => pos,
                        // a word longer than a whole row is cut
                        None if fresh_row => i,
                        None => 0,
                    };
                }
            }
            text.len()
        })
    }

    fn text(&mut self, text: &str) {
        self.begin_item();
        let rich = RichText::new(text).font(self.font()).color(self.color());
        let label = Label::new(rich)
            .wrap_mode(TextWrapMode::Extend)
            .sense(Sense::click())
            .selectable(false);
        self.last = Some(self.ui.add(label));
    }

    fn bullet(&mut self) {
        self.begin_item();
        let font = self.font();
        let size = self.ui.fonts(|f| f.row_height(&font));
        let (rect, response) = self.ui.allocate_exact_size(vec2(size, size), Sense::hover());
        self.ui
            .painter()
            .circle_filled(rect.center(), size * 0.15, self.color());
        self.last = Some(response);
    }

    fn image(&mut self, texture: &TextureHandle, params: &ImageParams) {
        self.begin_item();
        let [r, g, b, a] = params.tint;
        let image = egui::Image::new((texture.id(), vec2(params.size[0], params.size[1])))
            .uv(Rect::from_min_max(
                pos2(params.uv0[0], params.uv0[1]),
                pos2(params.uv1[0], params.uv1[1]),
            ))
            .tint(Rgba::from_rgba_unmultiplied(r, g, b, a))
            .sense(Sense::click());
        self.last = Some(self.ui.add(image));
    }

    fn same_line(&mut self) {
        self.same_line = true;
    }

    fn new_line(&mut self) {
        if self.row_started {
            self.end_row();
        } else {
            let font = self.font();
            let height = self.ui.fonts(|f| f.row_height(&font));
            self.ui.allocate_exact_size(vec2(0.0, height), Sense::hover());
            self.ui.end_row();
        }
        self.same_line = false;
    }

    fn separator(&mut self) {
        self.end_row();
        let width = self.ui.available_size_before_wrap().x;
        let height = self.ui.spacing().item_spacing.y.max(6.0);
        let (rect, _) = self.ui.allocate_exact_size(vec2(width, height), Sense::hover());
        let stroke = self.ui.visuals().widgets.noninteractive.bg_stroke;
        self.ui
            .painter()
            .hline(rect.x_range(), rect.center().y, stroke);
        self.ui.end_row();
        self.same_line = false;
    }

    fn indent(&mut self, width: Option<f32>) {
        self.indent += width.unwrap_or(self.ui.spacing().indent);
    }

    fn unindent(&mut self, width: Option<f32>) {
        let width = width.unwrap_or(self.ui.spacing().indent);
        self.indent = (self.indent - width).max(0.0);
    }

    fn item_hovered(&self) -> bool {
        self.last.as_ref().is_some_and(|r| r.hovered())
    }

    fn pointer_released(&self) -> bool {
        self.ui.input(|i| i.pointer.primary_released())
    }

    fn push_font(&mut self, font: &FontId) {
        self.fonts.push(font.clone());
    }

    fn pop_font(&mut self) {
        self.fonts.pop();
    }

    fn push_color(&mut self, color: StyleColor) {
        let color = self.style_color(color);
        self.colors.push(color);
    }

    fn pop_color(&mut self) {
        self.colors.pop();
    }

    fn underline_last_item(&mut self, color: StyleColor) {
        let Some(rect) = self.last.as_ref().map(|r| r.rect) else {
            return;
        };
        let stroke = Stroke::new(1.0, self.style_color(color));
        self.ui
            .painter()
            .hline(rect.x_range(), rect.bottom(), stroke);
    }

    fn tooltip(&mut self, text: &str) {
        if let Some(response) = self.last.take() {
            self.last = Some(response.on_hover_text(text));
        }
    }
}
