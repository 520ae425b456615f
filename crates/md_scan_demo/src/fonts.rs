use std::path::Path;
use std::sync::Arc;

use egui::{FontData, FontDefinitions, FontFamily};
use egui_md_scan::BOLD_FAMILY;

/// Build font definitions with optional replacement fonts. The bold font is
/// registered under [`BOLD_FAMILY`] so bold headings pick it up, with the
/// proportional fonts behind it as fallback.
pub fn font_definitions(
    regular: Option<&Path>,
    bold: Option<&Path>,
) -> egui_md_scan::Result<FontDefinitions> {
    let mut fonts = FontDefinitions::default();

    if let Some(path) = regular {
        let name = "regular".to_owned();
        fonts.font_data.insert(
            name.clone(),
            Arc::new(FontData::from_owned(std::fs::read(path)?)),
        );
        fonts
            .families
            .entry(FontFamily::Proportional)
            .or_default()
            .insert(0, name);
        tracing::info!("regular font: {}", path.display());
    }

    if let Some(path) = bold {
        let name = BOLD_FAMILY.to_owned();
        fonts.font_data.insert(
            name.clone(),
            Arc::new(FontData::from_owned(std::fs::read(path)?)),
        );

        let mut family = vec![name];
        family.extend(
            fonts
                .families
                .get(&FontFamily::Proportional)
                .cloned()
                .unwrap_or_default(),
        );
        fonts
            .families
            .insert(FontFamily::Name(BOLD_FAMILY.into()), family);
        tracing::info!("bold font: {}", path.display());
    }

    Ok(fonts)
}
