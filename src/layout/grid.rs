//! Grid composition
//!
//! [`GridComposer`] runs a whole program through one [`Interpreter`], renders
//! a frame after every non-blank line and tiles the frames left to right,
//! `columns` per row. A row is as tall as its tallest frame.
//!
//! ```text
//! nr:   0        1        2          (columns = 3)
//!     ┌──────┐ ┌──────┐ ┌──────┐
//!     │      │ │      │ │      │     y = 0
//!     └──────┘ │      │ │      │
//!              └──────┘ │      │
//!                       └──────┘
//! nr:   3        4
//!     ┌──────┐ ┌──────┐              y = height of frame 2
//! ```

use super::frame::FrameLayout;
use crate::interpreter::{Interpreter, Step};
use crate::memory::StackError;
use crate::parser::ParseWarning;
use crate::render::{TemplateData, TemplateError, TemplateRenderer, CANVAS_TEMPLATE};
use std::fmt;
use std::num::NonZeroUsize;
use thiserror::Error;

/// A rendered frame placed on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedFrame {
    pub x: f64,
    pub y: f64,
    pub markup: String,
}

/// All frames of a run plus the overall canvas size
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CanvasGeometry {
    pub frames: Vec<PositionedFrame>,
    pub width: f64,
    pub height: f64,
}

/// A skipped source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// 1-based line number in the source
    pub line: usize,
    pub warning: ParseWarning,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.warning)
    }
}

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum RenderError {
    /// Carries the warnings collected before the failing line
    #[error("line {line}")]
    Stack {
        line: usize,
        #[source]
        source: StackError,
        warnings: Vec<Warning>,
    },

    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl RenderError {
    /// Warnings for the lines processed before the run aborted
    pub fn warnings(&self) -> &[Warning] {
        match self {
            RenderError::Stack { warnings, .. } => warnings,
            RenderError::Template(_) => &[],
        }
    }
}

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct Composition {
    pub canvas: CanvasGeometry,
    /// Final SVG document
    pub markup: String,
    pub warnings: Vec<Warning>,
}

impl Composition {
    pub fn frame_count(&self) -> usize {
        self.canvas.frames.len()
    }
}

/// Drives the interpreter and tiles one frame per non-blank line
pub struct GridComposer<'r> {
    layout: FrameLayout,
    columns: NonZeroUsize,
    renderer: &'r dyn TemplateRenderer,
}

impl<'r> GridComposer<'r> {
    pub fn new(
        layout: FrameLayout,
        columns: NonZeroUsize,
        renderer: &'r dyn TemplateRenderer,
    ) -> Self {
        GridComposer {
            layout,
            columns,
            renderer,
        }
    }

    /// Run `source` on a fresh stack
    pub fn compose(&self, source: &str) -> Result<Composition, RenderError> {
        self.compose_from(Interpreter::new(), source)
    }

    /// Run `source` starting from the interpreter's current stack
    pub fn compose_from(
        &self,
        mut interpreter: Interpreter,
        source: &str,
    ) -> Result<Composition, RenderError> {
        let columns = self.columns.get();
        let mut canvas = CanvasGeometry::default();
        let mut warnings = Vec::new();

        let mut y_offset = 0.0;
        let mut max_height: f64 = 0.0;
        let mut frame_width = 0.0;

        let lines = source
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        for (nr, (line_no, line)) in lines.enumerate() {
            match interpreter.execute_line(line) {
                Ok(Step::Applied(_)) => {}
                Ok(Step::Skipped(warning)) => warnings.push(Warning {
                    line: line_no,
                    warning,
                }),
                Err(source) => {
                    return Err(RenderError::Stack {
                        line: line_no,
                        source,
                        warnings,
                    })
                }
            }

            let stack = interpreter.stack_mut();
            stack.set_frame_number(nr + 1);
            stack.set_frame_label(Some(line.to_string()));

            let frame = self.layout.render(interpreter.stack(), self.renderer)?;
            frame_width = frame.width;

            if nr % columns == 0 {
                y_offset += max_height;
                max_height = 0.0;
            }
            max_height = max_height.max(frame.height);

            canvas.frames.push(PositionedFrame {
                x: (nr % columns) as f64 * frame_width,
                y: y_offset,
                markup: frame.markup,
            });
        }

        y_offset += max_height;
        canvas.width = frame_width * columns as f64;
        canvas.height = y_offset;

        let markup = self
            .renderer
            .render(CANVAS_TEMPLATE, TemplateData::Canvas(&canvas))?;

        Ok(Composition {
            canvas,
            markup,
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutConfig;
    use crate::memory::StackModel;
    use crate::render::SvgTemplates;
    use pretty_assertions::assert_eq;

    fn compose(source: &str, columns: usize) -> Result<Composition, RenderError> {
        let templates = SvgTemplates::new();
        let composer = GridComposer::new(
            FrameLayout::new(LayoutConfig::default()),
            NonZeroUsize::new(columns).unwrap(),
            &templates,
        );
        composer.compose(source)
    }

    fn positions(composition: &Composition) -> Vec<(f64, f64)> {
        composition
            .canvas
            .frames
            .iter()
            .map(|f| (f.x, f.y))
            .collect()
    }

    #[test]
    fn test_single_row() {
        let composition = compose("push a\npush b\npush c", 3).unwrap();
        assert_eq!(composition.frame_count(), 3);
        assert_eq!(
            positions(&composition),
            vec![(0.0, 0.0), (200.0, 0.0), (400.0, 0.0)]
        );
        assert_eq!(composition.canvas.width, 600.0);
        // tallest frame: header + 3 rows + margins
        assert_eq!(composition.canvas.height, 40.0 + 60.0 + 20.0);
    }

    #[test]
    fn test_rows_advance_by_tallest_frame() {
        let composition = compose("push a\npush b\npush c\npop\npop", 2).unwrap();
        // frame heights: 80, 100, 120, 100, 80
        assert_eq!(
            positions(&composition),
            vec![
                (0.0, 0.0),
                (200.0, 0.0),
                (0.0, 100.0),
                (200.0, 100.0),
                (0.0, 220.0)
            ]
        );
        assert_eq!(composition.canvas.height, 300.0);
        assert_eq!(composition.canvas.width, 400.0);
    }

    #[test]
    fn test_blank_lines_do_not_advance_frames() {
        let composition = compose("\npush a\n\n   \npush b\n", 4).unwrap();
        assert_eq!(composition.frame_count(), 2);
        assert_eq!(positions(&composition), vec![(0.0, 0.0), (200.0, 0.0)]);
    }

    #[test]
    fn test_warnings_still_produce_frames() {
        let composition = compose("push a\nfoo bar\nmov eax, ebx\npush b", 4).unwrap();
        assert_eq!(composition.frame_count(), 4);
        assert_eq!(
            composition.warnings,
            vec![
                Warning {
                    line: 2,
                    warning: ParseWarning::UnrecognizedCommand("foo bar".into()),
                },
                Warning {
                    line: 3,
                    warning: ParseWarning::UnhandledOperands {
                        mnemonic: "mov".into(),
                        operand: "eax, ebx".into(),
                    },
                },
            ]
        );
        assert_eq!(composition.warnings[0].to_string(), "line 2: unrecognized command `foo bar`");
    }

    #[test]
    fn test_underflow_aborts_with_line_number() {
        let err = compose("push a\npop\n\npop", 4).unwrap_err();
        match err {
            RenderError::Stack {
                line,
                source,
                warnings,
            } => {
                assert_eq!(line, 4);
                assert_eq!(source, StackError::Underflow);
                assert!(warnings.is_empty());
            }
            other => panic!("expected stack error, got {:?}", other),
        }
    }

    #[test]
    fn test_underflow_keeps_earlier_warnings() {
        let err = compose("foo bar\npop", 4).unwrap_err();
        assert_eq!(
            err.warnings(),
            &[Warning {
                line: 1,
                warning: ParseWarning::UnrecognizedCommand("foo bar".into()),
            }]
        );
        assert_eq!(err.to_string(), "line 2");
        assert_eq!(
            format!("{:#}", anyhow::Error::from(err)),
            "line 2: stack underflow: pop on an empty stack"
        );
    }

    #[test]
    fn test_oversized_reservation_is_skipped() {
        let composition = compose("push a\nsub esp, 0FFFFFFFFh\npush b", 4).unwrap();
        assert_eq!(composition.frame_count(), 3);
        assert_eq!(composition.warnings.len(), 1);
        assert_eq!(composition.warnings[0].line, 2);
        assert!(matches!(
            composition.warnings[0].warning,
            ParseWarning::ReservationTooLarge { .. }
        ));
        // only the two pushes: header + 2 rows + margins
        assert_eq!(composition.canvas.height, 40.0 + 40.0 + 20.0);
    }

    #[test]
    fn test_compose_from_prepared_stack() {
        let mut stack = StackModel::from_slots(["arg", "ret"]);
        stack.set_base_pointer_to_stack_pointer();
        let templates = SvgTemplates::new();
        let composer = GridComposer::new(
            FrameLayout::new(LayoutConfig::default()),
            NonZeroUsize::new(4).unwrap(),
            &templates,
        );

        let composition = composer
            .compose_from(Interpreter::with_stack(stack), "push x\npop\npop")
            .unwrap();
        assert_eq!(composition.frame_count(), 3);
        // tallest frame is the first: header + 3 rows + margins
        assert_eq!(composition.canvas.height, 40.0 + 60.0 + 20.0);
        assert!(composition.markup.contains(">arg</text>"));
        assert!(composition.markup.contains(">EBP</text>"));
    }

    #[test]
    fn test_empty_source_gives_empty_canvas() {
        let composition = compose("", 4).unwrap();
        assert_eq!(composition.frame_count(), 0);
        assert_eq!(composition.canvas.width, 0.0);
        assert_eq!(composition.canvas.height, 0.0);
        assert!(composition.markup.contains("<svg"));
    }
}
