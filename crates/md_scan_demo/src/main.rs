mod app;
mod args;
mod fonts;

use tracing_subscriber::EnvFilter;

use crate::app::{DemoApp, SAMPLE};
use crate::args::Args;
use egui_md_scan::MarkdownStyle;

fn setup_logging() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Log to stdout (if you run with `RUST_LOG=debug`).
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("md_scan=info,egui_md_scan=info,md_scan_demo=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stdout))
        .with(env_filter)
        .init();
}

fn load_source(args: &Args) -> String {
    let Some(path) = &args.file else {
        return SAMPLE.to_owned();
    };
    match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            tracing::error!("could not read {}: {err}", path.display());
            SAMPLE.to_owned()
        }
    }
}

fn load_style(args: &Args) -> MarkdownStyle {
    let Some(path) = &args.style else {
        return MarkdownStyle::default();
    };
    MarkdownStyle::from_path(path).unwrap_or_else(|err| {
        tracing::error!("could not load style {}: {err}", path.display());
        MarkdownStyle::default()
    })
}

fn main() -> eframe::Result<()> {
    setup_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (args, unrecognized) = Args::parse(&args);
    for arg in unrecognized {
        tracing::warn!("unrecognized argument: {arg}");
    }

    let source = load_source(&args);
    let style = load_style(&args);
    let fonts = match fonts::font_definitions(args.font.as_deref(), args.bold_font.as_deref()) {
        Ok(fonts) => Some(fonts),
        Err(err) => {
            tracing::error!("could not load fonts: {err}");
            None
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("md-scan")
            .with_inner_size([720.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "md_scan_demo",
        options,
        Box::new(move |cc| {
            if let Some(fonts) = fonts {
                cc.egui_ctx.set_fonts(fonts);
            }
            Ok(Box::new(DemoApp::new(source, style)))
        }),
    )
}
