use std::path::Path;

use egui::{FontFamily, FontId, TextStyle};
use md_scan::{HeadingFormat, MarkdownConfig, NUM_HEADINGS};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Font family name bold headings ask for. Falls back to the body family
/// when no font is registered under it.
pub const BOLD_FAMILY: &str = "bold";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingStyle {
    /// Font size relative to the body text
    pub scale: f32,
    pub bold: bool,
    pub separator: bool,
}

impl Default for HeadingStyle {
    fn default() -> Self {
        Self {
            scale: 1.0,
            bold: true,
            separator: true,
        }
    }
}

/// User facing markdown styling, loadable from json. Every field is
/// optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownStyle {
    pub link_icon: String,
    pub headings: [HeadingStyle; NUM_HEADINGS],
}

impl Default for MarkdownStyle {
    fn default() -> Self {
        Self {
            link_icon: "🔗".to_owned(),
            headings: [
                HeadingStyle {
                    scale: 1.1,
                    ..Default::default()
                },
                HeadingStyle::default(),
                HeadingStyle {
                    separator: false,
                    ..Default::default()
                },
            ],
        }
    }
}

impl MarkdownStyle {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let style = serde_json::from_slice(&data)?;
        tracing::info!("loaded markdown style from {}", path.display());
        Ok(style)
    }

    /// Resolve against the body font of `style`. Needs fonts to be loaded,
    /// so call it during a frame.
    pub fn config(&self, ctx: &egui::Context, style: &egui::Style) -> MarkdownConfig<FontId> {
        let body = TextStyle::Body.resolve(style);
        let bold = FontFamily::Name(BOLD_FAMILY.into());
        let has_bold = ctx.fonts(|fonts| fonts.families().contains(&bold));

        let heading_formats = std::array::from_fn(|i| {
            let heading = &self.headings[i];
            let family = if heading.bold && has_bold {
                bold.clone()
            } else {
                body.family.clone()
            };
            HeadingFormat {
                font: Some(FontId::new(body.size * heading.scale, family)),
                separator: heading.separator,
            }
        });

        MarkdownConfig::new(heading_formats).link_icon(self.link_icon.clone())
    }
}
