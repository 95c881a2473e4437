//! Stack layout engine
//!
//! - [`config`]: immutable sizes and switches ([`LayoutConfig`])
//! - [`collapse`]: folding runs of empty slots into a single `...` row
//! - [`frame`]: one stack snapshot → [`FrameGeometry`] → frame markup
//! - [`grid`]: a whole program → positioned frames → canvas markup
//!
//! All geometry is in SVG user units with `y` growing downwards. The header
//! row sits at `y = 0` and slot 0 (the bottom of the stack) is drawn directly
//! below it, so the stack visually grows towards the bottom of the frame.

pub mod collapse;
pub mod config;
pub mod frame;
pub mod grid;

pub use config::{ConfigError, LayoutConfig};
pub use frame::{
    FrameGeometry, FrameLayout, Margins, PointerArrow, RenderedFrame, Row, RowKind, ELLIPSIS,
};
pub use grid::{
    CanvasGeometry, Composition, GridComposer, PositionedFrame, RenderError, Warning,
};
