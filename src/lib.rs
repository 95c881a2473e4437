//! # Introduction
//!
//! stackviz interprets a tiny pseudo-assembly program (`push`, `pop`,
//! `mov ebp, esp`, `sub esp, N`) and draws the stack after every instruction.
//! The diagrams are tiled into a grid and written as one SVG document, which
//! makes it easy to follow how each instruction moves the stack and base
//! pointers.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Parser → Interpreter → StackModel → FrameLayout → GridComposer → SVG
//! ```
//!
//! 1. [`parser`] — decodes one line into an [`parser::Instruction`]; anything
//!    outside the vocabulary becomes a [`parser::ParseWarning`].
//! 2. [`interpreter`] — applies instructions to the single running
//!    [`memory::StackModel`].
//! 3. [`memory`] — the abstract stack: slot labels plus stack and base pointer.
//! 4. [`layout`] — per-frame geometry (with collapsing of empty runs and
//!    `[ebp+N]` labels) and the grid that places the frames.
//! 5. [`render`] — named SVG templates behind the
//!    [`render::TemplateRenderer`] trait.
//!
//! ## Example
//!
//! ```
//! use std::num::NonZeroUsize;
//! use stackviz::layout::{FrameLayout, GridComposer, LayoutConfig};
//! use stackviz::render::SvgTemplates;
//!
//! let templates = SvgTemplates::new();
//! let composer = GridComposer::new(
//!     FrameLayout::new(LayoutConfig::default()),
//!     NonZeroUsize::new(3).unwrap(),
//!     &templates,
//! );
//! let result = composer.compose("push a\npush b\npush c").unwrap();
//! assert_eq!(result.frame_count(), 3);
//! assert!(result.markup.contains("<svg"));
//! ```

pub mod interpreter;
pub mod layout;
pub mod memory;
pub mod parser;
pub mod render;
