use egui_md_scan::md_scan::{
    default_format, FormatInfo, FormatKind, FormatPhase, ImageData, LinkData, MarkdownHandler,
    StyleColor, TextLayout, TooltipData,
};
use egui_md_scan::{DefaultHandler, EguiLayout, MarkdownStyle, MarkdownViewer};

pub const SAMPLE: &str = include_str!("sample.md");

/// Default handling, with level 2 headings drawn in the weak text colour.
#[derive(Default)]
pub struct DemoHandler {
    inner: DefaultHandler,
    pub activated: Vec<String>,
}

impl<'l> MarkdownHandler<EguiLayout<'l>> for DemoHandler {
    fn format(
        &mut self,
        layout: &mut EguiLayout<'l>,
        info: &FormatInfo<'_, egui::FontId>,
        phase: FormatPhase,
    ) {
        match (info.kind, phase) {
            (FormatKind::Heading(2), FormatPhase::Enter) => {
                default_format(layout, info, phase);
                layout.push_color(StyleColor::TextDisabled);
            }
            (FormatKind::Heading(2), FormatPhase::Exit) => {
                layout.pop_color();
                default_format(layout, info, phase);
            }
            _ => default_format(layout, info, phase),
        }
    }

    fn link(&mut self, link: &LinkData<'_>) {
        self.activated.push(link.url.to_owned());
        <DefaultHandler as MarkdownHandler<EguiLayout<'l>>>::link(&mut self.inner, link);
    }

    fn tooltip(&mut self, layout: &mut EguiLayout<'l>, tooltip: &TooltipData<'_>) {
        self.inner.tooltip(layout, tooltip);
    }

    fn image(
        &mut self,
        layout: &mut EguiLayout<'l>,
        link: &LinkData<'_>,
    ) -> ImageData<egui::TextureHandle> {
        self.inner.image(layout, link)
    }
}

pub struct DemoApp {
    source: String,
    viewer: MarkdownViewer,
    handler: DemoHandler,
    show_source: bool,
    image_count: usize,
}

impl DemoApp {
    pub fn new(source: String, style: MarkdownStyle) -> Self {
        Self {
            source,
            viewer: MarkdownViewer::new(style),
            handler: DemoHandler::default(),
            show_source: false,
            image_count: 0,
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.checkbox(&mut self.show_source, "Edit source");
                ui.separator();
                ui.label(format!("{} images", self.image_count));
                if let Some(url) = self.handler.activated.last() {
                    ui.separator();
                    ui.weak(format!("last opened: {url}"));
                }
            });
        });

        egui::SidePanel::left("source")
            .resizable(true)
            .default_width(360.0)
            .show_animated(ctx, self.show_source, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut self.source)
                            .code_editor()
                            .desired_width(f32::INFINITY),
                    );
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let images = self.viewer.show(ui, &mut self.handler, &self.source);
                self.image_count = images.len();
            });
        });

        // forget urls that left the source while it was being edited
        self.handler.inner.images.retain_used();
    }
}
