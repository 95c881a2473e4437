//! Single-frame layout
//!
//! [`FrameLayout`] turns one [`StackModel`] snapshot into a [`FrameGeometry`]:
//! a header row, one row per visible slot (see [`super::collapse`]), optional
//! `[ebp+N]` labels and the stack-pointer arrow. Coordinates are relative to
//! the frame's content origin; the frame template adds the margins.
//!
//! # Frame Anatomy
//!
//! ```text
//!  canvas_margin
//!  ┌─────────────────────────────────────────┐
//!  │           │ Stack 3       │             │  header row
//!  │           ├───────────────┤             │
//!  │           │ ret           │ [ebp+4]     │
//!  │           ├───────────────┤             │
//!  │  ESP ──>  │ old ebp       │ EBP         │
//!  │           └───────────────┘             │
//!  └─────────────────────────────────────────┘
//!   pointer_margin  column_width  address_width
//! ```

use super::collapse::{plan_rows, RowDecision};
use super::config::LayoutConfig;
use crate::memory::{base_pointer_offset, StackModel};
use crate::render::{TemplateData, TemplateError, TemplateRenderer, FRAME_TEMPLATE};

/// Text drawn in place of a collapsed run
pub const ELLIPSIS: &str = "...";

/// What a row represents
#[derive(Debug, Clone, PartialEq)]
pub enum RowKind {
    /// The title row at the top of every frame
    Header { title: Option<String> },
    /// A visible stack slot
    Slot { index: usize, label: String },
    /// A slot standing in for a collapsed run of empty slots
    Ellipsis { index: usize },
}

/// One horizontal band of a frame
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub y: f64,
    pub height: f64,
    pub kind: RowKind,
    /// `EBP`, `[ebp+N]` or `...`; only set when offsets are enabled
    pub offset_label: Option<String>,
}

impl Row {
    /// Stack slot this row represents; `None` for the header
    pub fn slot_index(&self) -> Option<usize> {
        match &self.kind {
            RowKind::Header { .. } => None,
            RowKind::Slot { index, .. } | RowKind::Ellipsis { index } => Some(*index),
        }
    }

    /// Text drawn inside the row
    pub fn label(&self) -> Option<&str> {
        match &self.kind {
            RowKind::Header { title } => title.as_deref(),
            RowKind::Slot { label, .. } => Some(label.as_str()),
            RowKind::Ellipsis { .. } => Some(ELLIPSIS),
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self.kind, RowKind::Header { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Placement of the stack-pointer arrow, relative to the content origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerArrow {
    pub x: f64,
    pub y: f64,
    pub arrow_y: f64,
    pub arrow_x1: f64,
    pub arrow_x2: f64,
}

/// Geometry of one frame. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameGeometry {
    pub rows: Vec<Row>,
    pub margins: Margins,
    pub column_width: f64,
    /// Sum of all row heights
    pub stack_height: f64,
    pub label_offset_x: f64,
    pub label_offset_y: f64,
    pub arrow: Option<PointerArrow>,
    pub canvas_margin: f64,
    pub width: f64,
    pub height: f64,
}

impl FrameGeometry {
    /// Rows below the header
    pub fn body_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| !row.is_header())
    }

    pub fn title(&self) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.is_header())
            .and_then(Row::label)
    }

    /// Row the stack-pointer arrow points at
    pub fn pointed_row(&self) -> Option<&Row> {
        let arrow = self.arrow?;
        self.body_rows().find(|row| row.y == arrow.y)
    }
}

/// A frame's rendered markup plus the size the grid needs to place it
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFrame {
    pub width: f64,
    pub height: f64,
    pub markup: String,
}

/// Lays out single frames with a fixed configuration
#[derive(Debug, Clone)]
pub struct FrameLayout {
    config: LayoutConfig,
}

impl FrameLayout {
    pub fn new(config: LayoutConfig) -> Self {
        FrameLayout { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Compute the geometry of `stack` as it is right now
    pub fn layout(&self, stack: &StackModel) -> FrameGeometry {
        let cfg = &self.config;
        let mut rows = Vec::with_capacity(stack.len() + 1);
        let mut y = 0.0;

        rows.push(Row {
            y,
            height: cfg.header_height,
            kind: RowKind::Header {
                title: frame_title(stack),
            },
            offset_label: None,
        });
        y += cfg.header_height;

        let base_pointer = stack.base_pointer();
        let pinned = usize::try_from(base_pointer).ok();
        let decisions = plan_rows(stack.slots(), pinned);

        for (index, (label, decision)) in stack.slots().iter().zip(decisions).enumerate() {
            let kind = match decision {
                RowDecision::Suppress => continue,
                RowDecision::Ellipsis => RowKind::Ellipsis { index },
                RowDecision::Row => RowKind::Slot {
                    index,
                    label: label.clone(),
                },
            };
            rows.push(Row {
                y,
                height: cfg.row_height,
                kind,
                offset_label: None,
            });
            y += cfg.row_height;
        }

        let mut margins = Margins::default();

        if cfg.show_offsets {
            margins.right += cfg.address_width;
            for row in rows.iter_mut() {
                row.offset_label = match &row.kind {
                    RowKind::Header { .. } => None,
                    RowKind::Ellipsis { .. } => Some(ELLIPSIS.to_string()),
                    RowKind::Slot { index, .. } => Some(offset_label(base_pointer, *index)),
                };
            }
        }

        margins.left += cfg.pointer_margin;
        let stack_pointer = usize::try_from(stack.stack_pointer()).ok();
        let arrow = rows
            .iter()
            .find(|row| row.slot_index().is_some() && row.slot_index() == stack_pointer)
            .map(|row| PointerArrow {
                x: -cfg.pointer_margin,
                y: row.y,
                arrow_y: cfg.row_height / 2.0,
                arrow_x1: cfg.pointer_label_width,
                arrow_x2: cfg.pointer_label_width + cfg.arrow_length,
            });

        let stack_height = y;
        FrameGeometry {
            rows,
            margins,
            column_width: cfg.column_width,
            stack_height,
            label_offset_x: cfg.label_offset_x,
            label_offset_y: cfg.label_offset_y,
            arrow,
            canvas_margin: cfg.canvas_margin,
            width: cfg.column_width + margins.left + margins.right + cfg.canvas_margin * 2.0,
            height: stack_height + margins.top + margins.bottom + cfg.canvas_margin * 2.0,
        }
    }

    /// Lay out `stack` and render it through the frame template
    pub fn render(
        &self,
        stack: &StackModel,
        renderer: &dyn TemplateRenderer,
    ) -> Result<RenderedFrame, TemplateError> {
        let geometry = self.layout(stack);
        let markup = renderer.render(FRAME_TEMPLATE, TemplateData::Frame(&geometry))?;
        Ok(RenderedFrame {
            width: geometry.width,
            height: geometry.height,
            markup,
        })
    }
}

fn frame_title(stack: &StackModel) -> Option<String> {
    match stack.frame_label() {
        Some(label) => Some(label.to_string()),
        None if stack.frame_number() != 0 => Some(format!("Stack {}", stack.frame_number())),
        None => None,
    }
}

/// `EBP` for the base-pointer slot, `[ebp+N]` / `[ebp-N]` elsewhere
pub fn offset_label(base_pointer: isize, slot: usize) -> String {
    match base_pointer_offset(base_pointer, slot) {
        0 => "EBP".to_string(),
        offset => format!("[ebp{:+}]", offset),
    }
}
