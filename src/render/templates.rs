//! Template registry

use super::svg::{draw_canvas, draw_frame};
use super::theme::{Theme, DEFAULT_THEME};
use super::{TemplateData, TemplateError, TemplateRenderer, CANVAS_TEMPLATE, FRAME_TEMPLATE};
use rustc_hash::FxHashMap;

/// A template body: `None` when it cannot render the given data
pub type TemplateFn = fn(TemplateData<'_>, &Theme) -> Option<String>;

/// Built-in SVG templates, looked up by name
pub struct SvgTemplates {
    templates: FxHashMap<&'static str, TemplateFn>,
    theme: &'static Theme,
}

impl SvgTemplates {
    pub fn new() -> Self {
        Self::with_theme(&DEFAULT_THEME)
    }

    pub fn with_theme(theme: &'static Theme) -> Self {
        let mut templates: FxHashMap<&'static str, TemplateFn> = FxHashMap::default();
        templates.insert(FRAME_TEMPLATE, frame_template);
        templates.insert(CANVAS_TEMPLATE, canvas_template);
        SvgTemplates { templates, theme }
    }

    /// Register or replace a template
    pub fn register(&mut self, name: &'static str, template: TemplateFn) {
        self.templates.insert(name, template);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }
}

impl Default for SvgTemplates {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SvgTemplates {
    fn render(&self, template: &str, data: TemplateData<'_>) -> Result<String, TemplateError> {
        let body = self
            .templates
            .get(template)
            .ok_or_else(|| TemplateError::UnknownTemplate(template.to_string()))?;

        body(data, self.theme).ok_or_else(|| TemplateError::DataMismatch {
            template: template.to_string(),
            data: data.kind(),
        })
    }
}

fn frame_template(data: TemplateData<'_>, theme: &Theme) -> Option<String> {
    match data {
        TemplateData::Frame(frame) => Some(draw_frame(frame, theme)),
        _ => None,
    }
}

fn canvas_template(data: TemplateData<'_>, theme: &Theme) -> Option<String> {
    match data {
        TemplateData::Canvas(canvas) => Some(draw_canvas(canvas, theme)),
        _ => None,
    }
}
