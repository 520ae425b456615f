//! egui backend for [`md_scan`].
//!
//! [`MarkdownViewer`] draws a markdown string into a [`egui::Ui`] every
//! frame. [`DefaultHandler`] opens links and loads images from disk; wrap or
//! replace it to change how links, images and spans are handled.

mod error;
mod handler;
mod images;
mod layout;
mod style;
mod viewer;

pub use error::{Error, Result};
pub use handler::{open_link, DefaultHandler};
pub use images::ImageCache;
pub use layout::EguiLayout;
pub use style::{HeadingStyle, MarkdownStyle, BOLD_FAMILY};
pub use viewer::MarkdownViewer;

pub use md_scan;
