//! Pedigree Render Library
//!
//! Renderer abstraction and the SVG scene builder for Pedigree family trees.

pub mod glyph;
mod renderer;
pub mod scaffolding;
pub mod scene;
mod style;
mod svg_renderer;

pub use glyph::{GlyphLayout, LabelAnchor};
pub use renderer::Renderer;
pub use scaffolding::{PathCommand, PathData, build_path, is_large_arc};
pub use scene::{Node, NodeFactory, NodeId, NodeKind, SequentialNodeFactory};
pub use style::{DEFAULT_TEXT_PADDING, RenderStyle, SerializableColor, StyleError};
pub use svg_renderer::SvgRenderer;
