//! SVG rendering
//!
//! The layout engine never builds markup itself; it hands typed geometry to a
//! [`TemplateRenderer`] together with a template name. The crate ships one
//! renderer:
//!
//! - **[`templates`]**: [`SvgTemplates`], a registry of named templates
//! - **[`svg`]**: the drawing code behind the built-in templates
//! - **[`theme`]**: the color palette shared by all templates
//!
//! | Template               | Data                     | Output                         |
//! |------------------------|--------------------------|--------------------------------|
//! | [`FRAME_TEMPLATE`]     | [`TemplateData::Frame`]  | one `<svg>` element per frame  |
//! | [`CANVAS_TEMPLATE`]    | [`TemplateData::Canvas`] | the complete SVG document      |

pub mod svg;
pub mod templates;
pub mod theme;

pub use templates::SvgTemplates;

use crate::layout::{CanvasGeometry, FrameGeometry};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Template rendering a single stack frame
pub const FRAME_TEMPLATE: &str = "stack_frame.svg";

/// Template composing all frames into one document
pub const CANVAS_TEMPLATE: &str = "canvas.svg";

/// Data handed to a template
#[derive(Debug, Clone, Copy)]
pub enum TemplateData<'a> {
    Frame(&'a FrameGeometry),
    Canvas(&'a CanvasGeometry),
}

impl TemplateData<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            TemplateData::Frame(_) => "frame",
            TemplateData::Canvas(_) => "canvas",
        }
    }
}

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("unknown template '{0}'")]
    UnknownTemplate(String),

    #[error("template '{template}' cannot render {data} data")]
    DataMismatch {
        template: String,
        data: &'static str,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Renders geometry into markup by template name
pub trait TemplateRenderer {
    fn render(&self, template: &str, data: TemplateData<'_>) -> Result<String, TemplateError>;

    /// Write rendered markup to `path`
    fn write(&self, markup: &str, path: &Path) -> Result<(), TemplateError> {
        std::fs::write(path, markup).map_err(|source| TemplateError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
